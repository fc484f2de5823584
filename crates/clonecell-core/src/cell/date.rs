//! Date cells

use std::fmt;

use chrono::NaiveDateTime;

use crate::error::{Error, Result};
use crate::DEFAULT_DATE_FORMAT;

/// A cell holding a timestamp plus a per-instance display format
///
/// The timestamp is fixed at construction; only `format` may be reassigned.
/// `format` is a display hint carried through clones. It is not applied to
/// the rendered date, which always uses the `%Y-%m-%d %H:%M:%S`
/// representation with the stored format appended as a label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateCell {
    date: NaiveDateTime,

    /// Display format hint, freely reassignable per instance
    pub format: String,
}

impl DateCell {
    /// Create a date cell with the default display format
    pub fn new(date: NaiveDateTime) -> Self {
        Self::with_format(date, DEFAULT_DATE_FORMAT)
    }

    /// Create a date cell with an explicit display format
    pub fn with_format<S: Into<String>>(date: NaiveDateTime, format: S) -> Self {
        DateCell {
            date,
            format: format.into(),
        }
    }

    /// Parse a date cell from text using the factory's pattern tables
    pub fn parse(content: &str) -> Result<Self> {
        crate::factory::parse_date(content)
            .map(DateCell::new)
            .ok_or_else(|| Error::InvalidDate(content.to_string()))
    }

    /// Get the timestamp
    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    /// Replace the display format
    pub fn set_format<S: Into<String>>(&mut self, format: S) {
        self.format = format.into();
    }

    /// Render the timestamp followed by the format label
    pub fn render(&self) -> String {
        format!(
            "{} || FORMAT: {}",
            self.date.format("%Y-%m-%d %H:%M:%S"),
            self.format
        )
    }
}

impl fmt::Display for DateCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn jan_10_2021() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 1, 10)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_new_uses_default_format() {
        let cell = DateCell::new(jan_10_2021());
        assert_eq!(cell.format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_render_appends_format_label() {
        let cell = DateCell::new(jan_10_2021());
        assert_eq!(cell.render(), "2021-01-10 00:00:00 || FORMAT: dd/MM/yyyy");
    }

    // The stored format is a label only; the date portion always renders the
    // same way regardless of it.
    #[test]
    fn test_format_not_applied_to_date_portion() {
        let plain = DateCell::new(jan_10_2021());
        let relabeled = DateCell::with_format(jan_10_2021(), "MM/dd/yyyy");

        let date_of = |cell: &DateCell| cell.render().split(" || ").next().unwrap().to_string();
        assert_eq!(date_of(&plain), date_of(&relabeled));
        assert_eq!(relabeled.render(), "2021-01-10 00:00:00 || FORMAT: MM/dd/yyyy");
    }

    #[test]
    fn test_clone_copies_current_format() {
        let mut original = DateCell::new(jan_10_2021());
        original.set_format("MM/dd/yyyy");

        let copy = original.clone();
        assert_eq!(copy.format, "MM/dd/yyyy");
        assert_eq!(copy.render(), original.render());
    }

    #[test]
    fn test_clone_format_is_independent() {
        let original = DateCell::new(jan_10_2021());
        let mut copy = original.clone();
        copy.format = "MM/dd/yyyy".into();

        assert_eq!(original.format, DEFAULT_DATE_FORMAT);

        // And the other direction: mutating the source leaves the copy alone.
        let mut source = copy.clone();
        source.set_format("yyyy");
        assert_eq!(copy.format, "MM/dd/yyyy");
    }

    #[test]
    fn test_parse() {
        let cell = DateCell::parse("01/10/2021").unwrap();
        assert_eq!(cell.date(), jan_10_2021());
        assert_eq!(cell.format, DEFAULT_DATE_FORMAT);

        assert!(DateCell::parse("not a date").is_err());
        assert!(DateCell::parse("1234").is_err());
    }
}
