use crate::error::RenderError;
use crate::types::{Stroke, TextStyle};
use casesheet_types::{Color, Point, Rect};

/// A paged drawing target.
///
/// Coordinates are in points with the origin at the top-left corner of the
/// page and `y` growing downwards; backends with a different convention
/// convert internally. Every drawing call applies to the page most recently
/// opened with [`begin_page`](DrawingSurface::begin_page).
pub trait DrawingSurface {
    /// What the surface hands back once the document is complete.
    type Output;

    /// Closes the current page, if any, and opens a new blank one.
    fn begin_page(&mut self) -> Result<(), RenderError>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError>;

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) -> Result<(), RenderError>;

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<(), RenderError>;

    /// Draws `text` inside `frame`: wrapped to the frame width, aligned per
    /// `style`, and clipped to the lines that fit in the frame height.
    fn draw_text(&mut self, text: &str, frame: Rect, style: &TextStyle) -> Result<(), RenderError>;

    /// Closes the last page and completes the document.
    fn finish(self) -> Result<Self::Output, RenderError>;
}
