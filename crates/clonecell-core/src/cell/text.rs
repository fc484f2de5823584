//! Text cells

use std::fmt;

/// A cell holding arbitrary text
///
/// The fallback variant: any input the factory cannot parse as a date or a
/// number lands here, held exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextCell {
    /// The original input, unchanged
    pub text: String,
}

impl TextCell {
    /// Create a new text cell
    pub fn new<S: Into<String>>(text: S) -> Self {
        TextCell { text: text.into() }
    }

    /// Render the text unchanged
    pub fn render(&self) -> String {
        self.text.clone()
    }
}

impl fmt::Display for TextCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
