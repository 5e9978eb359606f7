use crate::model::Classification;
use casesheet_types::Color;
use serde::{Deserialize, Serialize};

/// Background and text color of one classification badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeColors {
    pub background: Color,
    pub text: Color,
}

impl BadgeColors {
    pub const fn new(background: Color, text: Color) -> Self {
        Self { background, text }
    }
}

/// Badge colors per classification, with a neutral fallback for labels
/// outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BadgePalette {
    pub sanity: BadgeColors,
    pub regression: BadgeColors,
    pub performance: BadgeColors,
    pub security: BadgeColors,
    pub fallback: BadgeColors,
}

impl Default for BadgePalette {
    fn default() -> Self {
        Self {
            sanity: BadgeColors::new(Color::rgb(0xD5, 0xF4, 0xE6), Color::rgb(0x18, 0x6A, 0x3B)),
            regression: BadgeColors::new(Color::rgb(0xD6, 0xEA, 0xF8), Color::rgb(0x1B, 0x49, 0x65)),
            performance: BadgeColors::new(Color::rgb(0xFD, 0xEB, 0xD0), Color::rgb(0x7D, 0x3C, 0x0A)),
            security: BadgeColors::new(Color::rgb(0xFA, 0xDB, 0xD8), Color::rgb(0x78, 0x28, 0x1F)),
            fallback: BadgeColors::new(Color::gray(0xEC), Color::gray(0x33)),
        }
    }
}

impl BadgePalette {
    pub fn colors_for(&self, classification: Classification) -> BadgeColors {
        match classification {
            Classification::Sanity => self.sanity,
            Classification::Regression => self.regression,
            Classification::Performance => self.performance,
            Classification::Security => self.security,
            Classification::Unrecognized => self.fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_labels_use_the_fallback() {
        let palette = BadgePalette::default();
        let colors = palette.colors_for(Classification::from_label("Smoke"));
        assert_eq!(colors, palette.fallback);
        assert_eq!(colors.background.to_string(), "#ECECEC");
    }

    #[test]
    fn partial_overrides_keep_the_other_defaults() {
        let json = r##"{ "security": { "background": "#000000", "text": "#FFFFFF" } }"##;
        let palette: BadgePalette = serde_json::from_str(json).unwrap();
        assert_eq!(palette.security.text, Color::WHITE);
        assert_eq!(palette.sanity, BadgePalette::default().sanity);
    }
}
