pub mod color;
pub mod geometry;
pub mod page;
pub mod text;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use page::PageSize;
pub use text::TextAlign;
