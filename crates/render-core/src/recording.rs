use crate::error::RenderError;
use crate::traits::DrawingSurface;
use crate::types::{Stroke, TextStyle};
use casesheet_types::{Color, Point, Rect};

/// A single call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginPage,
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, stroke: Stroke },
    Line { from: Point, to: Point, stroke: Stroke },
    Text { text: String, frame: Rect, style: TextStyle },
}

/// A surface that draws nothing and remembers every command, in order.
///
/// Lets layout and composition be asserted on without parsing a PDF.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    page_open: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    fn record(&mut self, command: DrawCommand) -> Result<(), RenderError> {
        if !self.page_open {
            return Err(RenderError::NoOpenPage);
        }
        self.commands.push(command);
        Ok(())
    }
}

impl DrawingSurface for RecordingSurface {
    type Output = Vec<DrawCommand>;

    fn begin_page(&mut self) -> Result<(), RenderError> {
        self.page_open = true;
        self.commands.push(DrawCommand::BeginPage);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        self.record(DrawCommand::FillRect { rect, color })
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) -> Result<(), RenderError> {
        self.record(DrawCommand::StrokeRect { rect, stroke })
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<(), RenderError> {
        self.record(DrawCommand::Line { from, to, stroke })
    }

    fn draw_text(&mut self, text: &str, frame: Rect, style: &TextStyle) -> Result<(), RenderError> {
        self.record(DrawCommand::Text {
            text: text.to_string(),
            frame,
            style: *style,
        })
    }

    fn finish(self) -> Result<Vec<DrawCommand>, RenderError> {
        Ok(self.commands)
    }
}

/// Splits a recorded command list into pages. Commands before the first
/// `BeginPage` cannot exist, so every returned slice belongs to a page.
pub fn split_pages(commands: &[DrawCommand]) -> Vec<&[DrawCommand]> {
    commands
        .split(|c| matches!(c, DrawCommand::BeginPage))
        .skip(1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FontFace;

    #[test]
    fn drawing_before_a_page_is_an_error() {
        let mut surface = RecordingSurface::new();
        let err = surface.fill_rect(Rect::default(), Color::BLACK).unwrap_err();
        assert!(matches!(err, RenderError::NoOpenPage));
    }

    #[test]
    fn records_commands_in_order_per_page() {
        let mut surface = RecordingSurface::new();
        let style = TextStyle::new(FontFace::Bold, 11.0, Color::BLACK);
        surface.begin_page().unwrap();
        surface.draw_text("hello", Rect::new(0.0, 0.0, 50.0, 20.0), &style).unwrap();
        surface.begin_page().unwrap();
        surface
            .stroke_line(Point::new(0.0, 1.0), Point::new(10.0, 1.0), Stroke::new(Color::BLACK, 0.5))
            .unwrap();

        let commands = surface.finish().unwrap();
        let pages = split_pages(&commands);
        assert_eq!(pages.len(), 2);
        assert!(matches!(&pages[0][0], DrawCommand::Text { text, .. } if text == "hello"));
        assert!(matches!(pages[1][0], DrawCommand::Line { .. }));
    }
}
