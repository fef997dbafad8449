//! Presentation helpers
//!
//! Pure lookups and string transforms the front end uses to decorate units
//! and lessons. None of them touch the view state.

mod embed;
mod labels;

pub use embed::{embed_url, video_id};
pub use labels::{
    arabic_lesson_title, arabic_ordinal, lessons_word, split_unit_title, unit_color, unit_icon,
    DEFAULT_UNIT_COLOR, DEFAULT_UNIT_ICON,
};
