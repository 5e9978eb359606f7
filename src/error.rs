use casesheet_layout::LayoutError;
use casesheet_render_core::RenderError;
use thiserror::Error;

/// Everything that can go wrong while producing a report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Report configuration is invalid: {0}")]
    Config(String),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Layout metrics are part of the report configuration, so their errors surface as such.
impl From<LayoutError> for ReportError {
    fn from(e: LayoutError) -> Self {
        ReportError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
