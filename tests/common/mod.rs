#![allow(dead_code)]

use casesheet::render_core::{split_pages, DrawCommand, RecordingSurface};
use casesheet::types::{Color, Rect};
use casesheet::{ReportConfig, ReportRenderer, TestCase};
use chrono::{NaiveDate, NaiveDateTime};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub const HEADER_FILL: Color = Color::gray(0xE8);
pub const ROW_TINT: Color = Color::rgb(0xF8, 0xF9, 0xFA);
pub const TABLE_WIDTH: f32 = 552.0;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn generated_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 17)
        .and_then(|d| d.and_hms_opt(9, 30, 5))
        .unwrap_or_default()
}

/// The footer and title page text for [`generated_at`].
pub const GENERATED_AT_TEXT: &str = "1/17/2026, 9:30:05 AM";

pub fn renderer() -> ReportRenderer {
    renderer_with(ReportConfig::default())
}

pub fn renderer_with(config: ReportConfig) -> ReportRenderer {
    ReportRenderer::new(config).generated_at(generated_at())
}

pub fn case(id: &str, category: &str, kind: &str) -> TestCase {
    TestCase {
        id: id.to_string(),
        title: format!("Case {}", id),
        steps: vec!["Open page and submit".to_string()],
        test_data: None,
        expected_result: "Works".to_string(),
        category: category.to_string(),
        kind: kind.to_string(),
    }
}

/// `n` cases short enough to take the minimum row height.
pub fn short_cases(n: usize) -> Vec<TestCase> {
    const KINDS: [&str; 4] = ["Sanity", "Regression", "Performance", "Security"];
    (1..=n)
        .map(|i| case(&format!("TC-{:03}", i), "Positive", KINDS[i % KINDS.len()]))
        .collect()
}

/// Renders onto a recording surface and returns the commands.
pub fn record(renderer: &ReportRenderer, cases: &[TestCase]) -> Vec<DrawCommand> {
    renderer
        .render_with(cases, RecordingSurface::new())
        .expect("rendering to a recording surface should succeed")
}

/// Summary of what one recorded page contains.
#[derive(Debug, Default)]
pub struct PageSummary {
    pub headers: usize,
    pub footers: Vec<String>,
    pub rows: Vec<Rect>,
    pub row_fills: Vec<Color>,
    pub ids: Vec<String>,
    pub texts: Vec<String>,
}

pub fn summarize(commands: &[DrawCommand]) -> Vec<PageSummary> {
    split_pages(commands)
        .into_iter()
        .map(|page| {
            let mut summary = PageSummary::default();
            for command in page {
                match command {
                    DrawCommand::FillRect { color, .. } if *color == HEADER_FILL => {
                        summary.headers += 1
                    }
                    DrawCommand::FillRect { rect, color } if rect.width == TABLE_WIDTH => {
                        summary.rows.push(*rect);
                        summary.row_fills.push(*color);
                    }
                    DrawCommand::Text { text, .. } => {
                        if text.starts_with("Page ") {
                            summary.footers.push(text.clone());
                        }
                        if text.starts_with("TC-") {
                            summary.ids.push(text.clone());
                        }
                        summary.texts.push(text.clone());
                    }
                    _ => {}
                }
            }
            summary
        })
        .collect()
}

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of a 1-based page number.
    pub fn page_text(&self, page: u32) -> Result<String, Box<dyn std::error::Error>> {
        Ok(self.doc.extract_text(&[page])?)
    }
}
