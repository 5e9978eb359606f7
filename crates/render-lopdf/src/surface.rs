use crate::writer::{text_object, StreamingPdfWriter};
use casesheet_layout::{estimate_width, wrap_lines};
use casesheet_render_core::utils::{flip_y, standard_font_name};
use casesheet_render_core::{DrawingSurface, FontFace, RenderError, Stroke, TextStyle};
use casesheet_types::{Color, Point, Rect, Size, TextAlign};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Object};
use std::io::{Cursor, Seek, Write};

const FONT_FACES: [FontFace; 2] = [FontFace::Regular, FontFace::Bold];

fn font_resource_name(face: FontFace) -> &'static str {
    match face {
        FontFace::Regular => "F1",
        FontFace::Bold => "F2",
    }
}

/// A [`DrawingSurface`] that produces a PDF with the `lopdf` object model.
///
/// Text is set in the standard Helvetica faces (no embedding) and wrapped with
/// the same average-character-width heuristic the layout uses to size rows.
/// Each page is streamed to the writer when the next page begins.
pub struct LopdfSurface<W: Write + Seek> {
    writer: StreamingPdfWriter<W>,
    page_size: Size,
    avg_char_width: f32,
    page: Option<PageContext>,
}

impl<W: Write + Seek> LopdfSurface<W> {
    pub fn new(writer: W, page_size: Size, avg_char_width: f32) -> Result<Self, RenderError> {
        let mut font_dict = Dictionary::new();
        for face in FONT_FACES {
            let single_font_dict = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => standard_font_name(face),
                "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(font_resource_name(face), Object::Dictionary(single_font_dict));
        }

        Ok(Self {
            writer: StreamingPdfWriter::new(writer, "1.7", font_dict)?,
            page_size,
            avg_char_width,
            page: None,
        })
    }

    /// Records a document title in the PDF information dictionary.
    pub fn with_title(mut self, title: &str) -> Self {
        self.writer.set_info(dictionary! {
            "Title" => text_object(title),
            "Producer" => text_object(concat!("casesheet ", env!("CARGO_PKG_VERSION"))),
        });
        self
    }

    pub fn page_count(&self) -> usize {
        self.writer.page_count() + usize::from(self.page.is_some())
    }

    fn current_page(&mut self) -> Result<&mut PageContext, RenderError> {
        self.page.as_mut().ok_or(RenderError::NoOpenPage)
    }

    fn close_page(&mut self) -> Result<(), RenderError> {
        let Some(page) = self.page.take() else {
            return Ok(());
        };
        let content_id = self.writer.write_content_stream(page.finish())?;
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.writer.pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), self.page_size.width.into(), self.page_size.height.into()],
            "Contents" => content_id,
            "Resources" => self.writer.resources_id,
        };
        let page_id = self.writer.write_object(page_dict.into())?;
        self.writer.push_page_id(page_id);
        log::trace!("Wrote page {} as object {:?}", self.writer.page_count(), page_id);
        Ok(())
    }
}

impl LopdfSurface<Cursor<Vec<u8>>> {
    /// A surface that buffers the whole document in memory.
    pub fn in_memory(page_size: Size, avg_char_width: f32) -> Result<Self, RenderError> {
        Self::new(Cursor::new(Vec::new()), page_size, avg_char_width)
    }
}

impl<W: Write + Seek> DrawingSurface for LopdfSurface<W> {
    type Output = W;

    fn begin_page(&mut self) -> Result<(), RenderError> {
        self.close_page()?;
        self.page = Some(PageContext::new(self.page_size.height));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        let page = self.current_page()?;
        page.set_fill_color(color);
        page.push_rect(rect);
        page.push("f", vec![]);
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) -> Result<(), RenderError> {
        let page = self.current_page()?;
        page.set_stroke(stroke);
        page.push_rect(rect);
        page.push("S", vec![]);
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<(), RenderError> {
        let page = self.current_page()?;
        page.set_stroke(stroke);
        let h = page.page_height;
        page.push("m", vec![from.x.into(), flip_y(from.y, h).into()]);
        page.push("l", vec![to.x.into(), flip_y(to.y, h).into()]);
        page.push("S", vec![]);
        Ok(())
    }

    fn draw_text(&mut self, text: &str, frame: Rect, style: &TextStyle) -> Result<(), RenderError> {
        let avg_char_width = self.avg_char_width;
        let page = self.current_page()?;

        let lines = wrap_lines(text, frame.width, style.size, avg_char_width);
        let fits = ((frame.height + 0.01) / style.line_height).floor().max(1.0) as usize;
        if lines.len() > fits {
            log::trace!("Clipping text to {} of {} lines", fits, lines.len());
        }

        for (i, line) in lines.iter().take(fits).enumerate() {
            if line.is_empty() {
                continue;
            }
            let width = estimate_width(line, style.size, avg_char_width);
            let x = match style.align {
                TextAlign::Left => frame.x,
                TextAlign::Center => frame.x + ((frame.width - width) / 2.0).max(0.0),
                TextAlign::Right => frame.x + (frame.width - width).max(0.0),
            };
            let baseline_y = frame.y + style.size * 0.8 + i as f32 * style.line_height;
            page.draw_line_of_text(line, x, baseline_y, style);
        }
        Ok(())
    }

    fn finish(mut self) -> Result<W, RenderError> {
        self.close_page()?;
        Ok(self.writer.finish()?)
    }
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font: Option<(FontFace, u32)>,
    fill_color: Option<Color>,
    stroke: Option<(Color, u32)>,
}

/// Content operations of the page being drawn, plus enough graphics state to
/// skip redundant color and font operators.
struct PageContext {
    page_height: f32,
    content: Content,
    state: PageRenderState,
}

impl PageContext {
    fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn push_rect(&mut self, rect: Rect) {
        let y = flip_y(rect.bottom(), self.page_height);
        self.push(
            "re",
            vec![rect.x.into(), y.into(), rect.width.into(), rect.height.into()],
        );
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.components();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke(&mut self, stroke: Stroke) {
        let key = (stroke.color, stroke.width.to_bits());
        if self.state.stroke != Some(key) {
            let [r, g, b] = stroke.color.components();
            self.push("w", vec![stroke.width.into()]);
            self.push("RG", vec![r.into(), g.into(), b.into()]);
            self.state.stroke = Some(key);
        }
    }

    fn set_font(&mut self, face: FontFace, size: f32) {
        let key = (face, size.to_bits());
        if self.state.font != Some(key) {
            self.push(
                "Tf",
                vec![Object::Name(font_resource_name(face).as_bytes().to_vec()), size.into()],
            );
            self.state.font = Some(key);
        }
    }

    fn draw_line_of_text(&mut self, line: &str, x: f32, baseline_y: f32, style: &TextStyle) {
        self.push("BT", vec![]);
        self.set_font(style.face, style.size);
        self.set_fill_color(style.color);
        let pdf_y = flip_y(baseline_y, self.page_height);
        self.push("Td", vec![x.into(), pdf_y.into()]);
        self.push("Tj", vec![text_object(line)]);
        self.push("ET", vec![]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter() -> Size {
        Size::new(612.0, 792.0)
    }

    fn load(bytes: &[u8]) -> lopdf::Document {
        lopdf::Document::load_mem(bytes).expect("surface output should parse")
    }

    #[test]
    fn each_begin_page_produces_a_page() {
        let mut surface = LopdfSurface::in_memory(letter(), 0.45).unwrap().with_title("Pages");
        for label in ["first", "second", "third"] {
            surface.begin_page().unwrap();
            let style = TextStyle::new(FontFace::Regular, 10.0, Color::BLACK);
            surface.draw_text(label, Rect::new(30.0, 30.0, 200.0, 20.0), &style).unwrap();
        }
        assert_eq!(surface.page_count(), 3);
        let doc = load(&surface.finish().unwrap().into_inner());
        assert_eq!(doc.get_pages().len(), 3);
        assert!(doc.extract_text(&[2]).unwrap().contains("second"));
    }

    #[test]
    fn drawing_without_a_page_fails() {
        let mut surface = LopdfSurface::in_memory(letter(), 0.45).unwrap();
        let err = surface
            .stroke_line(Point::new(0.0, 0.0), Point::new(1.0, 1.0), Stroke::new(Color::BLACK, 1.0))
            .unwrap_err();
        assert!(matches!(err, RenderError::NoOpenPage));
    }

    #[test]
    fn text_is_clipped_to_the_frame_height() {
        let mut surface = LopdfSurface::in_memory(letter(), 0.5).unwrap();
        surface.begin_page().unwrap();
        // 10pt at 0.5 -> 5pt per char; a 25pt frame holds 5 chars per line.
        let style = TextStyle::new(FontFace::Regular, 10.0, Color::BLACK).with_line_height(10.0);
        surface
            .draw_text("aaaaa bbbbb ccccc ddddd", Rect::new(0.0, 0.0, 25.0, 20.0), &style)
            .unwrap();
        let page = surface.page.as_ref().unwrap();
        let shown: Vec<_> = page
            .content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .collect();
        assert_eq!(shown.len(), 2);
    }

    #[test]
    fn redundant_color_operators_are_skipped() {
        let mut surface = LopdfSurface::in_memory(letter(), 0.45).unwrap();
        surface.begin_page().unwrap();
        let grey = Color::gray(0xE8);
        surface.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), grey).unwrap();
        surface.fill_rect(Rect::new(0.0, 20.0, 10.0, 10.0), grey).unwrap();
        let page = surface.page.as_ref().unwrap();
        let fills = page.content.operations.iter().filter(|op| op.operator == "rg").count();
        assert_eq!(fills, 1);
    }
}
