//! Cell type inference
//!
//! [`CellFactory`] decides which variant a raw string becomes, using an
//! ordered chain of parsing attempts: date first, then signed integer, then
//! the always-matching text fallback.

use chrono::{NaiveDate, NaiveDateTime};

use crate::cell::{Cell, DateCell, NumberCell, TextCell};

/// Date-and-time patterns tried by the factory, in order
///
/// Month comes before day in slash-delimited patterns, matching the
/// reference scenario ("01/10/2021" is January 10th).
pub const DATETIME_PATTERNS: &[&str] = &[
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Date-only patterns tried by the factory, in order
///
/// Matches produce midnight timestamps.
pub const DATE_PATTERNS: &[&str] = &[
    // %y before %Y: %Y also accepts two-digit input, but as the literal year 21
    "%m/%d/%y",
    "%m/%d/%Y",
    "%Y-%m-%d",
    "%d-%b-%Y",
];

/// Infers the cell variant from the supplied content
pub struct CellFactory;

impl CellFactory {
    /// Infer a cell from raw text
    ///
    /// First match wins: date, then signed integer, then verbatim text.
    /// Never fails; every input matches at least the text fallback.
    pub fn create(content: &str) -> Cell {
        if let Some(date) = parse_date(content) {
            log::debug!("inferred date cell from {content:?}");
            return Cell::Date(DateCell::new(date));
        }
        if let Ok(number) = content.trim().parse::<i64>() {
            log::debug!("inferred number cell from {content:?}");
            return Cell::Number(NumberCell::new(number));
        }
        log::debug!("inferred text cell from {content:?}");
        Cell::Text(TextCell::new(content))
    }
}

/// Try every accepted date/time pattern against `content`
///
/// None of the patterns accept a bare undelimited integer, so strings like
/// "1234" fall through to number inference.
pub(crate) fn parse_date(content: &str) -> Option<NaiveDateTime> {
    let content = content.trim();
    for pattern in DATETIME_PATTERNS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(content, pattern) {
            return Some(datetime);
        }
    }
    for pattern in DATE_PATTERNS {
        if let Ok(date) = NaiveDate::parse_from_str(content, pattern) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}
