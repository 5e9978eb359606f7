use crate::error::{ReportError, Result};
use casesheet_types::TextAlign;
use serde::{Deserialize, Serialize};

/// One table column, shared by the header and every data row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub name: String,
    /// Width in points, including the cell's inner padding.
    pub width: f32,
    #[serde(default)]
    pub align: TextAlign,
    /// Draws the cell as a centered classification badge.
    #[serde(default)]
    pub badge: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, width: f32, align: TextAlign) -> Self {
        Self {
            name: name.into(),
            width,
            align,
            badge: false,
        }
    }

    pub fn badge(mut self) -> Self {
        self.badge = true;
        self
    }
}

/// The ordered columns of the report table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnSpec {
    columns: Vec<Column>,
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self::test_cases()
    }
}

impl ColumnSpec {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// The seven test case columns, sized to fill a Letter page with 30pt margins.
    pub fn test_cases() -> Self {
        Self::new(vec![
            Column::new("ID", 36.0, TextAlign::Center),
            Column::new("Title", 84.0, TextAlign::Left),
            Column::new("Category", 60.0, TextAlign::Left),
            Column::new("Type", 72.0, TextAlign::Center).badge(),
            Column::new("Steps", 108.0, TextAlign::Left),
            Column::new("Test Data", 96.0, TextAlign::Left),
            Column::new("Expected Result", 96.0, TextAlign::Left),
        ])
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn widths(&self) -> Vec<f32> {
        self.columns.iter().map(|c| c.width).collect()
    }

    pub fn total_width(&self) -> f32 {
        self.columns.iter().map(|c| c.width).sum()
    }

    pub fn badge_index(&self) -> Option<usize> {
        self.columns.iter().position(|c| c.badge)
    }

    /// Checks the columns against a record shape and the room available on
    /// the page.
    pub fn validate(&self, field_count: usize, content_width: f32, cell_padding_x: f32) -> Result<()> {
        if self.columns.len() != field_count {
            return Err(ReportError::Config(format!(
                "{} columns are configured but records have {} fields",
                self.columns.len(),
                field_count
            )));
        }
        if self.columns.iter().filter(|c| c.badge).count() > 1 {
            return Err(ReportError::Config(
                "At most one column can be a badge column".to_string(),
            ));
        }
        if let Some(narrow) = self
            .columns
            .iter()
            .find(|c| !(c.width.is_finite() && c.width > cell_padding_x))
        {
            return Err(ReportError::Config(format!(
                "Column '{}' is {}pt wide; it must be wider than its {}pt padding",
                narrow.name, narrow.width, cell_padding_x
            )));
        }
        let total = self.total_width();
        if total > content_width + 0.01 {
            return Err(ReportError::Config(format!(
                "Columns need {:.1}pt but the page only has {:.1}pt between its margins",
                total, content_width
            )));
        }
        Ok(())
    }
}
