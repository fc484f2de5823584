//! Number cells

use std::fmt;

use crate::error::{Error, Result};

/// A cell holding a signed integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberCell {
    /// The parsed integer value of the input
    pub number: i64,
}

impl NumberCell {
    /// Create a new number cell
    pub fn new(number: i64) -> Self {
        NumberCell { number }
    }

    /// Parse a decimal string into a number cell
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(content: &str) -> Result<Self> {
        content
            .trim()
            .parse::<i64>()
            .map(NumberCell::new)
            .map_err(|_| Error::InvalidNumber(content.to_string()))
    }

    /// Render the canonical decimal representation
    pub fn render(&self) -> String {
        self.number.to_string()
    }
}

impl fmt::Display for NumberCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}
