//! Core rendering abstractions for report generation.
//!
//! This crate provides the fundamental traits and types used by drawing backends:
//! - `DrawingSurface` trait for abstracting page drawing primitives
//! - Style types shared by every backend (`TextStyle`, `Stroke`, `FontFace`)
//! - `RecordingSurface`, a backend that only logs draw commands
//! - Error types for rendering operations

mod error;
mod recording;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use recording::{split_pages, DrawCommand, RecordingSurface};
pub use traits::DrawingSurface;
pub use types::{FontFace, Stroke, TextStyle};
