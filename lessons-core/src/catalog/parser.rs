//! Line-oriented catalog parser
//!
//! Turns `Unit N - title` and `Lesson N: title | url` directives into a
//! [`Catalog`]. Parsing never fails: malformed lines, orphan lessons and
//! anything else unrecognised are skipped.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use super::model::{Catalog, Unit};

const UNIT_PREFIX: &str = "Unit ";
const LESSON_PREFIX: &str = "Lesson ";

/// `Unit <digits> - <title>`
static UNIT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Unit ([0-9]+)\s*-\s*(.+)$").expect("unit line pattern is valid")
});

/// `Lesson <digits>: <title> | <url>`
///
/// The title is captured lazily, so it ends at the first `|` that still
/// leaves a non-empty URL behind it.
static LESSON_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Lesson ([0-9]+):\s*(.+?)\s*\|\s*(.+)$").expect("lesson line pattern is valid")
});

/// Parse catalog text into an ordered [`Catalog`]
///
/// Lines are processed in order with a single "current unit". A lesson
/// line before any valid unit line is dropped. Units are sorted by number
/// afterwards, and lessons within each unit likewise (both stable).
pub fn parse(text: &str) -> Catalog {
    let mut units: Vec<Unit> = Vec::new();
    let mut current: Option<usize> = None;

    for (index, raw) in text.split('\n').enumerate() {
        let line = trim_line(raw);
        if line.is_empty() {
            continue;
        }
        let line_no = index + 1;

        if line.starts_with(UNIT_PREFIX) {
            match parse_unit_line(line) {
                Some(unit) => {
                    units.push(unit);
                    current = Some(units.len() - 1);
                }
                None => trace!(line = line_no, "Skipping malformed unit line"),
            }
        } else if line.starts_with(LESSON_PREFIX) {
            let Some(unit_index) = current else {
                trace!(line = line_no, "Skipping lesson before any unit");
                continue;
            };
            match parse_lesson_line(line) {
                Some((number, title, url)) => units[unit_index].push_lesson(number, title, url),
                None => trace!(line = line_no, "Skipping malformed lesson line"),
            }
        } else {
            trace!(line = line_no, "Skipping unrecognised line");
        }
    }

    let catalog = Catalog::new(units);
    debug!(
        units = catalog.unit_count(),
        lessons = catalog.lesson_count(),
        "Parsed catalog"
    );
    catalog
}

/// Trim surrounding whitespace, including a stray byte-order mark
fn trim_line(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn parse_unit_line(line: &str) -> Option<Unit> {
    let caps = UNIT_LINE.captures(line)?;
    // Out-of-range numbers are treated like any other malformed line
    let number = caps[1].parse::<u32>().ok()?;
    Some(Unit::new(number, caps[2].trim()))
}

fn parse_lesson_line(line: &str) -> Option<(u32, &str, &str)> {
    let caps = LESSON_LINE.captures(line)?;
    let number = caps[1].parse::<u32>().ok()?;
    let title = caps.get(2)?.as_str().trim();
    let url = caps.get(3)?.as_str().trim();
    Some((number, title, url))
}
