//! # clonecell-core
//!
//! Core types for the clonecell toy spreadsheet-cell model.
//!
//! This crate provides the fundamental types:
//! - [`Cell`] - A closed union over the cell variants
//! - [`TextCell`], [`NumberCell`], [`DateCell`] - The variant payloads
//! - [`CellKind`] - The explicit variant tag
//! - [`CellFactory`] - Infers a cell variant from raw text
//!
//! ## Example
//!
//! ```rust
//! use clonecell_core::{Cell, CellFactory, CellKind};
//!
//! let cell = CellFactory::create("01/10/2021");
//! assert_eq!(cell.kind(), CellKind::Date);
//!
//! // Clones are independent: reformatting the copy leaves the source alone.
//! let mut copy = cell.clone();
//! if let Cell::Date(date) = &mut copy {
//!     date.format = "MM/dd/yyyy".into();
//! }
//! assert_ne!(copy.render(), cell.render());
//! ```

pub mod cell;
pub mod error;
pub mod factory;

// Re-exports for convenience
pub use cell::{Cell, CellKind, DateCell, NumberCell, TextCell};
pub use error::{Error, Result};
pub use factory::{CellFactory, DATETIME_PATTERNS, DATE_PATTERNS};

/// Display format stored on date cells at creation
pub const DEFAULT_DATE_FORMAT: &str = "dd/MM/yyyy";
