//! Cross-module tests for the catalog module

#[cfg(test)]
mod integration_tests {
    use crate::catalog::{fallback_catalog, parse, Catalog, Lesson};
    use pretty_assertions::assert_eq;

    fn lesson(number: u32, title: &str, url: &str, unit_number: u32, unit_title: &str) -> Lesson {
        Lesson {
            number,
            title: title.to_string(),
            url: url.to_string(),
            unit_number,
            unit_title: unit_title.to_string(),
        }
    }

    /// The fallback content is asserted literally
    #[test]
    fn test_fallback_catalog_content() {
        let catalog = fallback_catalog();
        assert_eq!(catalog.unit_count(), 2);
        assert_eq!(catalog.lesson_count(), 5);

        let youth = "مواهب الشباب (The Gifts of Youth)";
        let humour = "المرح والفكاهة (Humour and Comedy)";

        assert_eq!(catalog.units()[0].number, 1);
        assert_eq!(catalog.units()[0].title, youth);
        assert_eq!(
            catalog.units()[0].lessons,
            vec![
                lesson(1, "The Gifts of Youth", "https://youtu.be/8EvYzk7qOrg", 1, youth),
                lesson(
                    2,
                    "Expressing Opinion - Agreeing and Disagreeing",
                    "https://youtu.be/2uaEYxM_0NA",
                    1,
                    youth
                ),
                lesson(3, "Gerund and Infinitive", "https://youtu.be/eLfbcNUydiA", 1, youth),
            ]
        );

        assert_eq!(catalog.units()[1].number, 2);
        assert_eq!(catalog.units()[1].title, humour);
        assert_eq!(
            catalog.units()[1].lessons,
            vec![
                lesson(1, "Humour and Comedy", "https://youtu.be/7Y4FXYJeE44", 2, humour),
                lesson(
                    2,
                    "Expressing Lack of Understanding and Asking for Clarification",
                    "https://youtu.be/3frmP1QsToI",
                    2,
                    humour
                ),
            ]
        );
    }

    /// The fallback is exactly what its text form parses to
    #[test]
    fn test_fallback_matches_equivalent_text() {
        let text = "\
Unit 2 - المرح والفكاهة (Humour and Comedy)
Lesson 2: Expressing Lack of Understanding and Asking for Clarification | https://youtu.be/3frmP1QsToI
Lesson 1: Humour and Comedy | https://youtu.be/7Y4FXYJeE44

Unit 1 - مواهب الشباب (The Gifts of Youth)
Lesson 1: The Gifts of Youth | https://youtu.be/8EvYzk7qOrg
Lesson 3: Gerund and Infinitive | https://youtu.be/eLfbcNUydiA
Lesson 2: Expressing Opinion - Agreeing and Disagreeing | https://youtu.be/2uaEYxM_0NA
";
        assert_eq!(parse(text), fallback_catalog());
    }

    #[test]
    fn test_search_across_units_keeps_catalog_order() {
        let catalog = fallback_catalog();

        let results = catalog.search("expressing");
        let keys: Vec<(u32, u32)> = results.iter().map(|l| (l.unit_number, l.number)).collect();
        assert_eq!(keys, vec![(1, 2), (2, 2)]);

        // Unit titles are part of the key
        assert_eq!(catalog.search("الشباب").len(), 3);

        // The empty query matches everything
        assert_eq!(catalog.search("").len(), catalog.lesson_count());
    }

    #[test]
    fn test_catalog_json_shape() {
        let catalog = parse("Unit 1 - Youth\nLesson 1: Intro | https://youtu.be/abc123\n");
        let json = serde_json::to_value(&catalog).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["number"], 1);
        assert_eq!(json[0]["lessons"][0]["unitTitle"], "Youth");

        let back: Catalog = serde_json::from_value(json).unwrap();
        assert_eq!(back, catalog);
    }
}
