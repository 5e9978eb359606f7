//! PDF drawing surface using lopdf.
//!
//! This crate binds the `DrawingSurface` abstraction to a streaming PDF writer
//! built on the lopdf object model, writing each page as soon as it is closed.

mod surface;
mod writer;

pub use surface::LopdfSurface;
pub use writer::{text_object, to_win_ansi, StreamingPdfWriter};
