//! Lesson catalog - units, lessons and the text format they come from
//!
//! This module provides the in-memory catalog model and the parser that
//! builds it from the line-oriented `videos.txt` payload.
//!
//! # Format
//!
//! ```text
//! Unit 1 - مواهب الشباب (The Gifts of Youth)
//! Lesson 1: The Gifts of Youth | https://youtu.be/8EvYzk7qOrg
//! Lesson 2: Gerund and Infinitive | https://youtu.be/eLfbcNUydiA
//! ```
//!
//! Blank lines and lines matching neither directive are skipped. The
//! resulting catalog is sorted by unit number, and each unit's lessons by
//! lesson number.

mod fallback;
mod model;
mod parser;

pub use fallback::fallback_catalog;
pub use model::{Catalog, Lesson, Unit, LESSON_WORD, UNIT_WORD};
pub use parser::parse;

#[cfg(test)]
mod tests;
