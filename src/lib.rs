//! # casesheet
//!
//! Paginated PDF reports for generated test cases.
//!
//! Records go through four stages:
//! - **stats**: one pass over the records for the title page and footers
//! - **layout**: row heights from sanitized cell text, page breaks, cursor state
//! - **compositor**: title page, repeated table header, shaded rows with
//!   classification badges, and page footers
//! - **surface**: the drawing backend (`lopdf` for PDF output, or a recording
//!   surface in tests)
//!
//! ```no_run
//! use casesheet::{ReportRenderer, ReportConfig, parse_test_cases};
//!
//! # fn main() -> casesheet::Result<()> {
//! let cases = parse_test_cases(&std::fs::read_to_string("cases.json")?)?;
//! let pdf = ReportRenderer::new(ReportConfig::default()).render(&cases)?;
//! std::fs::write("cases.pdf", pdf)?;
//! # Ok(())
//! # }
//! ```

// Re-export workspace crates
pub use casesheet_layout as layout;
pub use casesheet_render_core as render_core;
pub use casesheet_render_lopdf as render_lopdf;
pub use casesheet_types as types;

pub mod columns;
pub mod config;
pub mod error;
pub mod model;
pub mod palette;
pub mod report;
pub mod stats;

pub use columns::{Column, ColumnSpec};
pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use model::{parse_test_cases, Category, Classification, Record, TestCase};
pub use palette::{BadgeColors, BadgePalette};
pub use report::{render_pdf, suggested_filename, ReportRenderer, PDF_CONTENT_TYPE};
pub use stats::Stats;
