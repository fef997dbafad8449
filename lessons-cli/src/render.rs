//! Text rendering of the three views
//!
//! Everything here reads the store; nothing mutates it.

use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use lessons_core::present::{
    arabic_lesson_title, arabic_ordinal, embed_url, lessons_word, split_unit_title, unit_color,
    unit_icon,
};
use lessons_core::{CatalogStore, Lesson, Unit, View};

pub const NO_UNITS: &str = "لا توجد وحدات متاحة";
pub const NO_RESULTS: &str = "لم يتم العثور على نتائج";

/// Table row for a unit card
#[derive(Tabled)]
struct UnitRow {
    #[tabled(rename = "#")]
    number: u32,
    #[tabled(rename = "Icon")]
    icon: &'static str,
    #[tabled(rename = "Unit")]
    label: String,
    #[tabled(rename = "Arabic")]
    arabic: String,
    #[tabled(rename = "English")]
    english: String,
    #[tabled(rename = "Lessons")]
    lessons: String,
}

/// Table row for a lesson card
#[derive(Tabled)]
struct LessonRow {
    #[tabled(rename = "#")]
    number: u32,
    #[tabled(rename = "Arabic")]
    arabic: String,
    #[tabled(rename = "English")]
    english: String,
    #[tabled(rename = "Video")]
    video: String,
}

impl From<&Unit> for UnitRow {
    fn from(unit: &Unit) -> Self {
        let (arabic, english) = split_unit_title(&unit.title);
        let count = unit.lesson_count();
        Self {
            number: unit.number,
            icon: unit_icon(unit.number),
            label: format!("الوحدة {}", arabic_ordinal(unit.number)),
            arabic: arabic.to_string(),
            english,
            lessons: format!("{count} {}", lessons_word(count)),
        }
    }
}

impl From<&Lesson> for LessonRow {
    fn from(lesson: &Lesson) -> Self {
        Self {
            number: lesson.number,
            arabic: format!(
                "الدرس {}: {}",
                lesson.number,
                arabic_lesson_title(&lesson.title)
            ),
            english: lesson.title.clone(),
            video: embed_url(&lesson.url),
        }
    }
}

fn table<T: Tabled>(rows: &[T]) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

/// Grid of unit cards, or the empty-catalog message
pub fn units(units: &[Unit]) -> String {
    if units.is_empty() {
        return NO_UNITS.to_string();
    }
    let rows: Vec<UnitRow> = units.iter().map(UnitRow::from).collect();
    table(&rows)
}

/// Header shown above a unit's lessons
pub fn unit_header(unit: &Unit) -> String {
    format!("الوحدة {} - {}", unit.number, unit.title)
}

/// Lesson table
pub fn lessons(lessons: &[Lesson]) -> String {
    let rows: Vec<LessonRow> = lessons.iter().map(LessonRow::from).collect();
    table(&rows)
}

/// A unit's header followed by its lessons
pub fn unit(unit: &Unit) -> String {
    format!("{}\n\n{}", unit_header(unit), lessons(&unit.lessons))
}

/// Header shown above search results
pub fn search_header(count: usize) -> String {
    format!("نتائج البحث ({count} {})", lessons_word(count))
}

/// Search header followed by results, or the no-results message
pub fn search_results(results: &[Lesson]) -> String {
    let body = if results.is_empty() {
        NO_RESULTS.to_string()
    } else {
        lessons(results)
    };
    format!("{}\n\n{}", search_header(results.len()), body)
}

/// Render whatever the store's current view is
pub fn view(store: &CatalogStore) -> String {
    match store.current_view() {
        View::Units => units(store.list_units()),
        View::Lessons => match store.current_unit() {
            Some(current) => unit(current),
            None => units(store.list_units()),
        },
        View::SearchResults => search_results(store.search_results()),
    }
}

/// JSON form of a unit for `--json` output
pub fn unit_json(unit: &Unit) -> serde_json::Value {
    serde_json::json!({
        "number": unit.number,
        "title": unit.title,
        "icon": unit_icon(unit.number),
        "color": unit_color(unit.number),
        "lessonCount": unit.lesson_count(),
        "lessons": unit.lessons.iter().map(lesson_json).collect::<Vec<_>>(),
    })
}

/// JSON form of a lesson, including its embed URL
pub fn lesson_json(lesson: &Lesson) -> serde_json::Value {
    serde_json::json!({
        "number": lesson.number,
        "title": lesson.title,
        "arabicTitle": arabic_lesson_title(&lesson.title),
        "url": lesson.url,
        "embedUrl": embed_url(&lesson.url),
        "unitNumber": lesson.unit_number,
        "unitTitle": lesson.unit_title,
    })
}

#[cfg(test)]
mod render_tests {
    use super::*;
    use lessons_core::{fallback_catalog, parse};

    #[test]
    fn test_units_table_contains_labels() {
        let catalog = fallback_catalog();
        let out = units(catalog.units());
        assert!(out.contains("الوحدة الأولى"));
        assert!(out.contains("The Gifts of Youth"));
        assert!(out.contains("3 دروس"));
        assert!(out.contains("fa-smile"));
    }

    #[test]
    fn test_empty_units() {
        assert_eq!(units(&[]), NO_UNITS);
    }

    #[test]
    fn test_single_lesson_word() {
        let catalog = parse("Unit 12 - Extra\nLesson 1: Passive Voice | https://youtu.be/p\n");
        let out = units(catalog.units());
        assert!(out.contains("1 درس"));
        assert!(out.contains("ال12"));
        assert!(out.contains("fa-book"));
    }

    #[test]
    fn test_unit_view_uses_embed_urls() {
        let catalog = fallback_catalog();
        let out = unit(&catalog.units()[0]);
        assert!(out.starts_with("الوحدة 1 - مواهب الشباب (The Gifts of Youth)"));
        assert!(out.contains("https://www.youtube.com/embed/8EvYzk7qOrg?rel=0"));
        assert!(out.contains("الدرس 3: المصدر والفعل المضارع"));
    }

    #[test]
    fn test_search_results_empty() {
        let out = search_results(&[]);
        assert!(out.starts_with("نتائج البحث (0 دروس)"));
        assert!(out.contains(NO_RESULTS));
    }

    #[test]
    fn test_view_follows_store() {
        let mut store = CatalogStore::new(fallback_catalog());
        assert!(view(&store).contains("الوحدة الثانية"));

        store.select_unit(2).unwrap();
        assert!(view(&store).starts_with("الوحدة 2 - "));

        store.search("gerund");
        assert!(view(&store).starts_with("نتائج البحث (1 درس)"));
    }

    #[test]
    fn test_unit_json_decoration() {
        let catalog = fallback_catalog();
        let json = unit_json(&catalog.units()[1]);
        assert_eq!(json["icon"], "fa-smile");
        assert_eq!(json["color"], "var(--cosmic-gradient)");
        assert_eq!(json["lessonCount"], 3);

        let extra = parse("Unit 12 - Extra\n");
        assert_eq!(unit_json(&extra.units()[0])["color"], "var(--primary-gradient)");
    }

    #[test]
    fn test_lesson_json_fields() {
        let catalog = fallback_catalog();
        let json = lesson_json(&catalog.units()[1].lessons[0]);
        assert_eq!(json["unitNumber"], 2);
        assert_eq!(json["arabicTitle"], "المرح والفكاهة");
        assert_eq!(
            json["embedUrl"].as_str().unwrap(),
            "https://www.youtube.com/embed/7Y4FXYJeE44?rel=0&modestbranding=1&showinfo=0&autoplay=0&controls=1&fs=1&iv_load_policy=3"
        );
    }
}
