use crate::LayoutError;
use casesheet_types::Size;
use serde::{Deserialize, Serialize};

/// Metrics driving row measurement and the vertical rhythm of table pages.
///
/// The defaults reproduce an 8.5pt Helvetica body on an 11pt line, which is
/// what the row-height heuristic was tuned against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Font size of data cell text, in points.
    pub font_size: f32,
    /// Average glyph advance as a fraction of the font size.
    ///
    /// This is a heuristic, not a font metric: text is measured as
    /// `chars * font_size * avg_char_width`.
    pub avg_char_width: f32,
    /// Height of one wrapped line of cell text.
    pub line_height: f32,
    /// Total horizontal padding inside a cell (left + right).
    pub cell_padding_x: f32,
    /// Total vertical padding inside a cell (top + bottom).
    pub cell_padding_y: f32,
    pub min_row_height: f32,
    /// Upper bound on any row, so one pathological cell cannot take a whole page.
    pub max_row_height: f32,
    pub header_height: f32,
    /// Space between the bottom of the header row and the first data row.
    pub header_gap: f32,
    /// Height kept free above the bottom margin for the page footer.
    pub footer_reserve: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            font_size: 8.5,
            avg_char_width: 0.45,
            line_height: 11.0,
            cell_padding_x: 10.0,
            cell_padding_y: 8.0,
            min_row_height: 25.0,
            max_row_height: 120.0,
            header_height: 32.0,
            header_gap: 10.0,
            footer_reserve: 80.0,
        }
    }
}

impl LayoutConfig {
    /// Average advance of one character of cell text, in points.
    pub fn char_width(&self) -> f32 {
        self.font_size * self.avg_char_width
    }

    /// Checks the metrics against each other and against the page they will be
    /// laid out on.
    pub fn validate(&self, page: &PageGeometry) -> Result<(), LayoutError> {
        let positive = [
            ("fontSize", self.font_size),
            ("avgCharWidth", self.avg_char_width),
            ("lineHeight", self.line_height),
            ("minRowHeight", self.min_row_height),
            ("maxRowHeight", self.max_row_height),
            ("headerHeight", self.header_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(LayoutError::InvalidMetric(
                    name,
                    format!("expected a positive number, got {}", value),
                ));
            }
        }
        for (name, value) in [
            ("cellPaddingX", self.cell_padding_x),
            ("cellPaddingY", self.cell_padding_y),
            ("headerGap", self.header_gap),
            ("footerReserve", self.footer_reserve),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(LayoutError::InvalidMetric(
                    name,
                    format!("expected a non-negative number, got {}", value),
                ));
            }
        }
        if self.min_row_height > self.max_row_height {
            return Err(LayoutError::InvalidMetric(
                "minRowHeight",
                format!(
                    "{} is greater than maxRowHeight {}",
                    self.min_row_height, self.max_row_height
                ),
            ));
        }

        let available = page.content_bottom(self) - self.first_row_y(page);
        if self.max_row_height > available {
            return Err(LayoutError::RowTooTall(self.max_row_height, available));
        }
        Ok(())
    }

    /// Y offset of the first data row on a table page.
    pub fn first_row_y(&self, page: &PageGeometry) -> f32 {
        page.content_top() + self.header_height + self.header_gap
    }
}

/// Physical page dimensions and the uniform margin around the content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub size: Size,
    pub margin: f32,
}

impl PageGeometry {
    pub fn new(size: Size, margin: f32) -> Self {
        Self { size, margin }
    }

    pub fn content_top(&self) -> f32 {
        self.margin
    }

    pub fn content_left(&self) -> f32 {
        self.margin
    }

    pub fn content_width(&self) -> f32 {
        (self.size.width - 2.0 * self.margin).max(0.0)
    }

    /// Lowest y a row may reach: page height minus the bottom margin minus the
    /// reserved footer band.
    pub fn content_bottom(&self, config: &LayoutConfig) -> f32 {
        self.size.height - self.margin - config.footer_reserve
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::new(Size::new(612.0, 792.0), 30.0)
    }
}
