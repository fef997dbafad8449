//! Built-in catalog used when the payload cannot be loaded

use super::model::{Catalog, Unit};

const YOUTH_TITLE: &str = "مواهب الشباب (The Gifts of Youth)";
const HUMOUR_TITLE: &str = "المرح والفكاهة (Humour and Comedy)";

/// The fixed two-unit catalog shown when the payload is unavailable
pub fn fallback_catalog() -> Catalog {
    let mut youth = Unit::new(1, YOUTH_TITLE);
    youth.push_lesson(1, "The Gifts of Youth", "https://youtu.be/8EvYzk7qOrg");
    youth.push_lesson(
        2,
        "Expressing Opinion - Agreeing and Disagreeing",
        "https://youtu.be/2uaEYxM_0NA",
    );
    youth.push_lesson(3, "Gerund and Infinitive", "https://youtu.be/eLfbcNUydiA");

    let mut humour = Unit::new(2, HUMOUR_TITLE);
    humour.push_lesson(1, "Humour and Comedy", "https://youtu.be/7Y4FXYJeE44");
    humour.push_lesson(
        2,
        "Expressing Lack of Understanding and Asking for Clarification",
        "https://youtu.be/3frmP1QsToI",
    );

    Catalog::new(vec![youth, humour])
}
