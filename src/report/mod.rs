//! Turning records into a paginated report.

mod compositor;

use crate::config::ReportConfig;
use crate::error::Result;
use crate::model::{Classification, Record};
use crate::stats::Stats;
use casesheet_layout::{row_height, sanitize, LayoutEngine, LayoutEvent};
use casesheet_render_core::DrawingSurface;
use casesheet_render_lopdf::LopdfSurface;
use chrono::{Local, NaiveDateTime};
use compositor::Compositor;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// MIME type of the bytes produced by [`ReportRenderer::render`].
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// A download name for a report generated at `generated_at`,
/// e.g. `test-cases-20260117-093000.pdf`.
pub fn suggested_filename(generated_at: NaiveDateTime) -> String {
    format!("test-cases-{}.pdf", generated_at.format("%Y%m%d-%H%M%S"))
}

/// Renders `records` to PDF bytes with the default configuration.
pub fn render_pdf<R: Record>(records: &[R]) -> Result<Vec<u8>> {
    ReportRenderer::default().render(records)
}

/// Lays out and draws a report. One renderer can produce any number of
/// documents; each call is independent.
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    config: ReportConfig,
    generated_at: Option<NaiveDateTime>,
}

/// A record's cells after sanitizing, and the height they need.
struct PreparedRow {
    cells: Vec<String>,
    classification: Classification,
    height: f32,
}

impl ReportRenderer {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            generated_at: None,
        }
    }

    /// Fixes the timestamp printed on the title page and footers. Defaults to
    /// the local time at render.
    pub fn generated_at(mut self, generated_at: NaiveDateTime) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn render<R: Record>(&self, records: &[R]) -> Result<Vec<u8>> {
        Ok(self.render_to_writer(records, Cursor::new(Vec::new()))?.into_inner())
    }

    /// Streams the PDF to `writer`, returning it once the document is complete.
    pub fn render_to_writer<R, W>(&self, records: &[R], writer: W) -> Result<W>
    where
        R: Record,
        W: Write + Seek,
    {
        self.config.validate(R::FIELD_COUNT)?;
        let surface = LopdfSurface::new(
            writer,
            self.config.page.dimensions_pt(),
            self.config.layout.avg_char_width,
        )?
        .with_title(&self.config.title);
        self.compose(records, surface)
    }

    /// Writes the PDF to `path`. The file only appears once the document is
    /// complete; a failed render leaves nothing behind.
    pub fn render_to_file<R: Record>(&self, records: &[R], path: impl AsRef<Path>) -> Result<()> {
        self.config.validate(R::FIELD_COUNT)?;
        write_complete(path.as_ref(), |writer| {
            self.render_to_writer(records, writer).map(|_| ())
        })
    }

    /// Draws the report onto any surface. The configuration is checked before
    /// anything is drawn.
    pub fn render_with<R, S>(&self, records: &[R], surface: S) -> Result<S::Output>
    where
        R: Record,
        S: DrawingSurface,
    {
        self.config.validate(R::FIELD_COUNT)?;
        self.compose(records, surface)
    }

    fn compose<R, S>(&self, records: &[R], surface: S) -> Result<S::Output>
    where
        R: Record,
        S: DrawingSurface,
    {
        let stats = Stats::collect(records);
        let rows = self.prepare(records);
        let generated_at = self
            .generated_at
            .unwrap_or_else(|| Local::now().naive_local())
            .format(TIMESTAMP_FORMAT)
            .to_string();
        log::debug!("Rendering {} records", stats.total());

        let mut compositor = Compositor::new(surface, &self.config, &stats, &generated_at);
        let engine = LayoutEngine::new(
            rows.iter().map(|row| row.height),
            self.config.layout,
            self.config.page_geometry(),
        );

        let mut pages = 0;
        for event in engine {
            match event {
                LayoutEvent::TitlePage { page } => {
                    compositor.begin_page()?;
                    compositor.title_page()?;
                    pages = page;
                }
                LayoutEvent::TableHeader { page, y } => {
                    compositor.begin_page()?;
                    compositor.table_header(y)?;
                    pages = page;
                }
                LayoutEvent::Row { index, y, height } => {
                    let row = &rows[index];
                    compositor.row(index, &row.cells, row.classification, y, height)?;
                }
                LayoutEvent::Footer { page } => compositor.footer(page)?,
            }
        }

        let output = compositor.finish()?;
        log::info!("Rendered {} test cases on {} pages", stats.total(), pages);
        Ok(output)
    }

    fn prepare<R: Record>(&self, records: &[R]) -> Vec<PreparedRow> {
        let widths = self.config.columns.widths();
        records
            .iter()
            .map(|record| {
                let cells: Vec<String> = record.fields().iter().map(|f| sanitize(f)).collect();
                let label = record.classification();
                let classification = Classification::from_label(label);
                if classification == Classification::Unrecognized {
                    log::warn!("Unrecognized classification '{}'; using fallback badge colors", label);
                }
                PreparedRow {
                    height: row_height(&cells, &widths, &self.config.layout),
                    cells,
                    classification,
                }
            })
            .collect()
    }
}

/// Runs `write` against a temporary file next to `path` and moves it into
/// place only if `write` succeeds.
fn write_complete<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<NamedTempFile>) -> Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut writer = BufWriter::new(NamedTempFile::new_in(dir)?);
    write(&mut writer)?;
    let staged = writer.into_inner().map_err(|e| e.into_error())?;
    staged.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;
    use crate::model::TestCase;
    use chrono::NaiveDate;
    use std::fs;

    #[test]
    fn filename_uses_a_sortable_timestamp() {
        let at = NaiveDate::from_ymd_opt(2026, 1, 17)
            .and_then(|d| d.and_hms_opt(9, 30, 5))
            .unwrap();
        assert_eq!(suggested_filename(at), "test-cases-20260117-093005.pdf");
    }

    #[test]
    fn timestamp_reads_like_a_locale_string() {
        let at = NaiveDate::from_ymd_opt(2026, 3, 4)
            .and_then(|d| d.and_hms_opt(15, 4, 5))
            .unwrap();
        assert_eq!(at.format(TIMESTAMP_FORMAT).to_string(), "3/4/2026, 3:04:05 PM");
    }

    #[test]
    fn failed_write_leaves_no_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cases.pdf");
        let err = write_complete(&path, |writer| {
            writer.write_all(b"%PDF-1.7\n")?;
            Err(ReportError::Config("stopped halfway".to_string()))
        })
        .unwrap_err();

        assert!(matches!(err, ReportError::Config(_)));
        assert!(!path.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn render_to_file_writes_the_whole_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cases.pdf");
        ReportRenderer::default()
            .render_to_file::<TestCase>(&[], &path)
            .unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.ends_with(b"%%EOF"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
