use casesheet_types::{Color, TextAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFace {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub face: FontFace,
    pub size: f32,
    /// Distance between consecutive baselines when the text wraps.
    pub line_height: f32,
    pub color: Color,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn new(face: FontFace, size: f32, color: Color) -> Self {
        Self {
            face,
            size,
            line_height: size * 1.2,
            color,
            align: TextAlign::Left,
        }
    }

    pub fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}
