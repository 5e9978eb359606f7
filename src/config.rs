use crate::columns::ColumnSpec;
use crate::error::{ReportError, Result};
use crate::palette::BadgePalette;
use casesheet_layout::{LayoutConfig, PageGeometry};
use casesheet_types::PageSize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything that shapes a report. Every field has a default, so a config
/// file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportConfig {
    pub page: PageSize,
    /// Uniform page margin, in points.
    pub margin: f32,
    pub layout: LayoutConfig,
    pub palette: BadgePalette,
    pub columns: ColumnSpec,
    pub title: String,
    /// Lines of explanatory text under the title page heading.
    pub description: Vec<String>,
    /// Completes the footer's "Page N of ..." text.
    pub footer_label: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            page: PageSize::Letter,
            margin: 30.0,
            layout: LayoutConfig::default(),
            palette: BadgePalette::default(),
            columns: ColumnSpec::test_cases(),
            title: "Test Cases Report".to_string(),
            description: vec![
                "This document contains detailed test case specifications and requirements."
                    .to_string(),
                "Each test case includes ID, title, category, type, steps, test data, and expected results."
                    .to_string(),
            ],
            footer_label: "Test Cases".to_string(),
        }
    }
}

impl ReportConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading report config from {}", path.display());
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn page_geometry(&self) -> PageGeometry {
        PageGeometry::new(self.page.dimensions_pt(), self.margin)
    }

    /// Checks the whole configuration for records with `field_count` fields.
    pub fn validate(&self, field_count: usize) -> Result<()> {
        let geometry = self.page_geometry();
        if !(self.margin.is_finite() && self.margin >= 0.0) || geometry.content_width() <= 0.0 {
            return Err(ReportError::Config(format!(
                "A {}pt margin leaves no room on a {}x{}pt page",
                self.margin, geometry.size.width, geometry.size.height
            )));
        }
        self.layout.validate(&geometry)?;
        self.columns
            .validate(field_count, geometry.content_width(), self.layout.cell_padding_x)
    }
}
