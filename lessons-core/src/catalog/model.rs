//! Catalog data model
//!
//! A catalog owns its units and each unit owns its lessons. Lessons carry
//! a copy of their unit's number and title so a search result can be shown
//! without the unit it came from.

use serde::{Deserialize, Serialize};

/// Localised word for "lesson" used in search keys
pub const LESSON_WORD: &str = "درس";

/// Localised word for "unit" used in search keys
pub const UNIT_WORD: &str = "وحدة";

/// A single video lesson
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    /// Lesson number within its unit
    pub number: u32,

    /// English title, also the key into the translation table
    pub title: String,

    /// Source video URL, stored verbatim
    pub url: String,

    /// Number of the owning unit
    pub unit_number: u32,

    /// Title of the owning unit
    pub unit_title: String,
}

/// A numbered group of lessons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Unit number, the primary key for lookups and ordering
    pub number: u32,

    /// Raw title, usually `"<arabic> (<english>)"`
    pub title: String,

    /// Lessons ordered by number
    pub lessons: Vec<Lesson>,
}

/// The full set of units for one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    units: Vec<Unit>,
}

impl Lesson {
    /// Lower-cased text that a search query is matched against
    ///
    /// Combines the lesson title, unit title and the localised
    /// "lesson N" / "unit N" labels.
    pub fn search_key(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.title, self.unit_title, LESSON_WORD, self.number, UNIT_WORD, self.unit_number
        )
        .to_lowercase()
    }

    /// Case-insensitive substring match against [`Lesson::search_key`]
    pub fn matches(&self, query: &str) -> bool {
        self.search_key().contains(&query.to_lowercase())
    }
}

impl Unit {
    /// Create a unit with no lessons
    pub fn new(number: u32, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            lessons: Vec::new(),
        }
    }

    /// Append a lesson, filling in the back-reference to this unit
    pub fn push_lesson(&mut self, number: u32, title: impl Into<String>, url: impl Into<String>) {
        self.lessons.push(Lesson {
            number,
            title: title.into(),
            url: url.into(),
            unit_number: self.number,
            unit_title: self.title.clone(),
        });
    }

    /// Number of lessons in this unit
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }
}

impl Catalog {
    /// Build a catalog, ordering units and lessons by number
    ///
    /// Both sorts are stable, so duplicate numbers keep their input order.
    pub fn new(mut units: Vec<Unit>) -> Self {
        units.sort_by_key(|unit| unit.number);
        for unit in &mut units {
            unit.lessons.sort_by_key(|lesson| lesson.number);
        }
        Self { units }
    }

    /// All units in ascending number order
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Look up a unit by number
    ///
    /// With duplicate numbers the first unit in catalog order wins.
    pub fn unit(&self, number: u32) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.number == number)
    }

    /// Every lesson, units ascending then lessons ascending
    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.units.iter().flat_map(|unit| unit.lessons.iter())
    }

    /// Lessons whose search key contains `query`, in catalog order
    pub fn search(&self, query: &str) -> Vec<Lesson> {
        self.lessons()
            .filter(|lesson| lesson.matches(query))
            .cloned()
            .collect()
    }

    /// Get total number of units
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Get total number of lessons across all units
    pub fn lesson_count(&self) -> usize {
        self.units.iter().map(Unit::lesson_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
