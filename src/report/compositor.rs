use crate::config::ReportConfig;
use crate::model::{Category, Classification};
use crate::palette::BadgeColors;
use crate::stats::Stats;
use casesheet_layout::{wrap_lines, PageGeometry};
use casesheet_render_core::{DrawingSurface, FontFace, RenderError, Stroke, TextStyle};
use casesheet_types::{Color, Point, Rect, TextAlign};
use itertools::izip;

const HEADING: Color = Color::rgb(0x2C, 0x3E, 0x50);
const ACCENT: Color = Color::rgb(0x34, 0x98, 0xDB);
const MUTED: Color = Color::gray(0x88);
const HEADER_FILL: Color = Color::gray(0xE8);
const HEADER_RULE: Color = Color::gray(0xCC);
const ROW_RULE: Color = Color::gray(0xDD);
const ROW_TINT: Color = Color::rgb(0xF8, 0xF9, 0xFA);

const BADGE_TOP: f32 = 5.0;
const BADGE_HEIGHT: f32 = 14.0;
const BADGE_BLEED: f32 = 2.0;
const SUMMARY_ROW_HEIGHT: f32 = 18.0;
const FOOTER_OFFSET: f32 = 15.0;
const FOOTER_RULE_GAP: f32 = 10.0;

/// Draws report pages onto a [`DrawingSurface`]. Positions come from the
/// layout engine; this type only knows what each piece looks like.
pub(crate) struct Compositor<'a, S> {
    surface: S,
    config: &'a ReportConfig,
    stats: &'a Stats,
    generated_at: &'a str,
    geometry: PageGeometry,
    column_x: Vec<f32>,
    table_width: f32,
}

impl<'a, S: DrawingSurface> Compositor<'a, S> {
    pub fn new(surface: S, config: &'a ReportConfig, stats: &'a Stats, generated_at: &'a str) -> Self {
        let geometry = config.page_geometry();
        let column_x = config
            .columns
            .columns()
            .iter()
            .scan(geometry.content_left(), |x, column| {
                let left = *x;
                *x += column.width;
                Some(left)
            })
            .collect();

        Self {
            surface,
            config,
            stats,
            generated_at,
            geometry,
            column_x,
            table_width: config.columns.total_width(),
        }
    }

    pub fn begin_page(&mut self) -> Result<(), RenderError> {
        self.surface.begin_page()
    }

    pub fn finish(self) -> Result<S::Output, RenderError> {
        self.surface.finish()
    }

    pub fn title_page(&mut self) -> Result<(), RenderError> {
        let left = self.geometry.content_left();
        let width = self.geometry.content_width();
        let mut y = self.geometry.content_top() + 20.0;

        let title = TextStyle::new(FontFace::Bold, 32.0, HEADING).aligned(TextAlign::Center);
        self.surface
            .draw_text(&self.config.title, Rect::new(left, y, width, title.line_height), &title)?;
        y += title.line_height + 8.0;

        self.surface.stroke_line(
            Point::new(left + 50.0, y),
            Point::new(left + width - 50.0, y),
            Stroke::new(ACCENT, 2.0),
        )?;
        y += 20.0;

        let stamp = TextStyle::new(FontFace::Regular, 11.0, HEADING).aligned(TextAlign::Center);
        self.surface.draw_text(
            &format!("Report Generated: {}", self.generated_at),
            Rect::new(left, y, width, stamp.line_height),
            &stamp,
        )?;
        y += stamp.line_height + 30.0;

        let body = TextStyle::new(FontFace::Regular, 10.0, MUTED)
            .aligned(TextAlign::Center)
            .with_line_height(14.0);
        for line in &self.config.description {
            let lines = wrap_lines(line, width, body.size, self.config.layout.avg_char_width).len();
            let height = lines.max(1) as f32 * body.line_height;
            self.surface.draw_text(line, Rect::new(left, y, width, height), &body)?;
            y += height;
        }

        self.summary(y + 30.0)
    }

    fn summary(&mut self, top: f32) -> Result<(), RenderError> {
        let left = self.geometry.content_left() + 100.0;
        let width = self.geometry.content_width() - 200.0;
        let mut y = top;

        let heading = TextStyle::new(FontFace::Bold, 13.0, HEADING);
        self.surface
            .draw_text("Summary", Rect::new(left, y, width, heading.line_height), &heading)?;
        y += heading.line_height + 6.0;

        let stats = self.stats;
        y = self.summary_row(y, "Total test cases", stats.total(), None)?;

        y = self.summary_section(y + 8.0, "By type")?;
        for classification in Classification::ALL {
            let count = stats.classification(classification);
            if classification == Classification::Unrecognized && count == 0 {
                continue;
            }
            let colors = self.config.palette.colors_for(classification);
            y = self.summary_row(y, classification.label(), count, Some(colors))?;
        }

        y = self.summary_section(y + 8.0, "By category")?;
        for category in Category::ALL {
            y = self.summary_row(y, category.label(), stats.category(category), None)?;
        }
        if stats.uncategorized() > 0 {
            self.summary_row(y, "Other", stats.uncategorized(), None)?;
        }
        Ok(())
    }

    fn summary_section(&mut self, y: f32, label: &str) -> Result<f32, RenderError> {
        let left = self.geometry.content_left() + 100.0;
        let width = self.geometry.content_width() - 200.0;
        let style = TextStyle::new(FontFace::Bold, 10.0, HEADING);
        self.surface
            .draw_text(label, Rect::new(left, y + 4.0, width, style.line_height), &style)?;
        Ok(y + SUMMARY_ROW_HEIGHT)
    }

    fn summary_row(
        &mut self,
        y: f32,
        label: &str,
        count: usize,
        swatch: Option<BadgeColors>,
    ) -> Result<f32, RenderError> {
        let left = self.geometry.content_left() + 100.0;
        let width = self.geometry.content_width() - 200.0;
        let style = TextStyle::new(FontFace::Regular, 10.0, HEADING);
        let text_y = y + (SUMMARY_ROW_HEIGHT - style.line_height) / 2.0;

        let mut label_x = left + 8.0;
        if let Some(colors) = swatch {
            let square = Rect::new(label_x, y + 4.0, 10.0, 10.0);
            self.surface.fill_rect(square, colors.background)?;
            self.surface.stroke_rect(square, Stroke::new(colors.text, 0.5))?;
            label_x += 16.0;
        }
        self.surface.draw_text(
            label,
            Rect::new(label_x, text_y, left + width - label_x, style.line_height),
            &style,
        )?;
        let value = TextStyle::new(FontFace::Bold, 10.0, HEADING).aligned(TextAlign::Right);
        self.surface.draw_text(
            &count.to_string(),
            Rect::new(left, text_y, width - 8.0, value.line_height),
            &value,
        )?;

        let bottom = y + SUMMARY_ROW_HEIGHT;
        self.surface.stroke_line(
            Point::new(left, bottom),
            Point::new(left + width, bottom),
            Stroke::new(ROW_RULE, 0.5),
        )?;
        Ok(bottom)
    }

    pub fn table_header(&mut self, y: f32) -> Result<(), RenderError> {
        let height = self.config.layout.header_height;
        let frame = Rect::new(self.geometry.content_left(), y, self.table_width, height);
        self.surface.fill_rect(frame, HEADER_FILL)?;

        let style = TextStyle::new(FontFace::Bold, 11.0, Color::BLACK);
        let inset = self.config.layout.cell_padding_x / 2.0;
        let text_y = y + (height - style.line_height) / 2.0;
        for (column, &x) in self.config.columns.columns().iter().zip(&self.column_x) {
            let text_frame = Rect::new(x + inset, text_y, column.width - 2.0 * inset, style.line_height);
            self.surface
                .draw_text(&column.name, text_frame, &style.aligned(column.align))?;
        }

        self.column_separators(y, height, Stroke::new(HEADER_RULE, 0.5))?;
        self.surface.stroke_rect(frame, Stroke::new(Color::BLACK, 1.5))
    }

    pub fn row(
        &mut self,
        index: usize,
        cells: &[String],
        classification: Classification,
        y: f32,
        height: f32,
    ) -> Result<(), RenderError> {
        let frame = Rect::new(self.geometry.content_left(), y, self.table_width, height);
        let fill = if index % 2 == 0 { ROW_TINT } else { Color::WHITE };
        self.surface.fill_rect(frame, fill)?;

        let layout = self.config.layout;
        let body = TextStyle::new(FontFace::Regular, layout.font_size, Color::BLACK)
            .with_line_height(layout.line_height);
        for (column, &x, text) in izip!(self.config.columns.columns(), &self.column_x, cells) {
            let cell = Rect::new(x, y, column.width, height);
            if column.badge {
                let colors = self.config.palette.colors_for(classification);
                draw_badge(&mut self.surface, text, cell, colors, layout.cell_padding_x / 2.0)?;
            } else {
                let text_frame = cell.inset(layout.cell_padding_x / 2.0, layout.cell_padding_y / 2.0);
                self.surface
                    .draw_text(text, text_frame, &body.aligned(column.align))?;
            }
        }

        self.column_separators(y, height, Stroke::new(ROW_RULE, 0.5))?;
        self.surface.stroke_rect(frame, Stroke::new(Color::BLACK, 1.0))
    }

    fn column_separators(&mut self, y: f32, height: f32, stroke: Stroke) -> Result<(), RenderError> {
        for &x in self.column_x.iter().skip(1) {
            self.surface
                .stroke_line(Point::new(x, y), Point::new(x, y + height), stroke)?;
        }
        Ok(())
    }

    pub fn footer(&mut self, page: usize) -> Result<(), RenderError> {
        let left = self.geometry.content_left();
        let width = self.geometry.content_width();
        let text_y = self.geometry.size.height - self.geometry.margin - FOOTER_OFFSET;

        let rule_y = text_y - FOOTER_RULE_GAP;
        self.surface.stroke_line(
            Point::new(left, rule_y),
            Point::new(left + width, rule_y),
            Stroke::new(ROW_RULE, 0.5),
        )?;

        let style = TextStyle::new(FontFace::Regular, 8.0, MUTED);
        let third = width / 3.0;
        let total = self.stats.total();
        let noun = if total == 1 { "test case" } else { "test cases" };
        let parts = [
            (format!("Page {} of {}", page, self.config.footer_label), TextAlign::Left),
            (format!("{} {}", total, noun), TextAlign::Center),
            (self.generated_at.to_string(), TextAlign::Right),
        ];
        for (i, (text, align)) in parts.iter().enumerate() {
            let frame = Rect::new(left + i as f32 * third, text_y, third, style.line_height);
            self.surface.draw_text(text, frame, &style.aligned(*align))?;
        }
        Ok(())
    }
}

fn draw_badge<S: DrawingSurface>(
    surface: &mut S,
    text: &str,
    cell: Rect,
    colors: BadgeColors,
    inset: f32,
) -> Result<(), RenderError> {
    let badge = Rect::new(
        cell.x + inset - BADGE_BLEED,
        cell.y + BADGE_TOP,
        cell.width - 2.0 * inset + 2.0 * BADGE_BLEED,
        BADGE_HEIGHT,
    );
    surface.fill_rect(badge, colors.background)?;

    let style = TextStyle::new(FontFace::Bold, 7.5, colors.text)
        .aligned(TextAlign::Center)
        .with_line_height(9.0);
    let text_frame = Rect::new(
        cell.x + inset,
        badge.y + (BADGE_HEIGHT - style.line_height) / 2.0,
        cell.width - 2.0 * inset,
        style.line_height,
    );
    surface.draw_text(text, text_frame, &style)
}
