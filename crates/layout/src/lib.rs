//! Layout for paginated report tables.
//!
//! Everything in this crate is pure computation: estimating how tall a row of
//! wrapped text will be, deciding where pages break, and walking the document
//! state machine that tells a compositor what to draw and where. Nothing here
//! touches a drawing surface.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Maximum row height of {0:.2} does not fit in the {1:.2} points left below the table header.")]
    RowTooTall(f32, f32),
    #[error("Invalid layout metric '{0}': {1}")]
    InvalidMetric(&'static str, String),
}

pub mod algorithms;
pub mod config;
pub mod cursor;
pub mod engine;
pub mod row;
pub mod text;

pub use self::config::{LayoutConfig, PageGeometry};
pub use self::cursor::Cursor;
pub use self::engine::{DocumentState, LayoutEngine, LayoutEvent};
pub use self::row::row_height;
pub use self::text::{estimate_width, sanitize, wrap_lines, EMPTY_PLACEHOLDER};

pub use casesheet_types::geometry::{Point, Rect, Size};
