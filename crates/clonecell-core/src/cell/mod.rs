//! Cell variants and the closed [`Cell`] union
//!
//! This module contains:
//! - [`Cell`] - The tagged union over all variants
//! - [`CellKind`] - The explicit variant tag
//! - [`TextCell`], [`NumberCell`], [`DateCell`] - The variant payloads

mod date;
mod number;
mod text;

pub use date::DateCell;
pub use number::NumberCell;
pub use text::TextCell;

use std::fmt;

use chrono::NaiveDateTime;

use crate::error::Result;

/// A single spreadsheet-like entry
///
/// The variant set is closed; callers select behavior by matching on the
/// variant or by asking for the [`CellKind`] tag. Cloning copies all current
/// field values, so a clone shares no mutable state with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Arbitrary text, held verbatim
    Text(TextCell),

    /// A parsed signed integer
    Number(NumberCell),

    /// A parsed timestamp plus a per-instance display format
    Date(DateCell),
}

impl Cell {
    /// Parse text as a specific variant instead of inferring one
    ///
    /// Text never fails; number and date fail when the text does not parse
    /// as that variant.
    pub fn parse_as(kind: CellKind, content: &str) -> Result<Cell> {
        match kind {
            CellKind::Text => Ok(Cell::Text(TextCell::new(content))),
            CellKind::Number => NumberCell::parse(content).map(Cell::Number),
            CellKind::Date => DateCell::parse(content).map(Cell::Date),
        }
    }

    /// Render the cell to its human-readable representation
    pub fn render(&self) -> String {
        match self {
            Cell::Text(cell) => cell.render(),
            Cell::Number(cell) => cell.render(),
            Cell::Date(cell) => cell.render(),
        }
    }

    /// Get the variant tag
    pub fn kind(&self) -> CellKind {
        match self {
            Cell::Text(_) => CellKind::Text,
            Cell::Number(_) => CellKind::Number,
            Cell::Date(_) => CellKind::Date,
        }
    }

    /// Check if this is a text cell
    pub fn is_text(&self) -> bool {
        matches!(self, Cell::Text(_))
    }

    /// Check if this is a number cell
    pub fn is_number(&self) -> bool {
        matches!(self, Cell::Number(_))
    }

    /// Check if this is a date cell
    pub fn is_date(&self) -> bool {
        matches!(self, Cell::Date(_))
    }

    /// Try to get the text if this is a text cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(cell) => Some(&cell.text),
            _ => None,
        }
    }

    /// Try to get the number if this is a number cell
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Cell::Number(cell) => Some(cell.number),
            _ => None,
        }
    }

    /// Try to get the timestamp if this is a date cell
    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            Cell::Date(cell) => Some(cell.date()),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl From<TextCell> for Cell {
    fn from(cell: TextCell) -> Self {
        Cell::Text(cell)
    }
}

impl From<NumberCell> for Cell {
    fn from(cell: NumberCell) -> Self {
        Cell::Number(cell)
    }
}

impl From<DateCell> for Cell {
    fn from(cell: DateCell) -> Self {
        Cell::Date(cell)
    }
}

/// Explicit tag naming a [`Cell`] variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Text cell
    Text,
    /// Number cell
    Number,
    /// Date cell
    Date,
}

impl CellKind {
    /// Get the display name for this variant
    pub fn as_str(&self) -> &'static str {
        match self {
            CellKind::Text => "TextCell",
            CellKind::Number => "NumberCell",
            CellKind::Date => "DateCell",
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
