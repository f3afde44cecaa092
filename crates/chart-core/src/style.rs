// File: crates/chart-core/src/style.rs
// Summary: Renderer-agnostic colors and stroke/fill/text styles.

use crate::types::Insets;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub const TRANSPARENT: Color = Color { r: 0, g: 0, b: 0, a: 0 };
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(51, 51, 51);
    pub const BLUE: Color = Color::rgb(0, 116, 217);
    pub const ALTERNATE_BLUE: Color = Color::rgb(106, 195, 203);
    pub const RED: Color = Color::rgb(255, 65, 54);
    pub const ALTERNATE_GRAY: Color = Color::rgb(184, 184, 184);
    pub const LIGHT_GRAY: Color = Color::rgb(239, 239, 239);
}

impl Default for Color {
    fn default() -> Self { Color::TRANSPARENT }
}

/// Drawing attributes shared by series, axes and the canvas background.
/// Zero/empty fields mean "use the renderer's default".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    pub stroke_color: Color,
    pub fill_color: Color,
    pub stroke_width: f32,
    /// On/off segment lengths in pixels; empty draws a solid stroke.
    pub dash_array: Vec<f32>,
    pub text_rotation_degrees: f32,
    pub padding: Insets,
}

impl Style {
    pub fn stroke(color: Color) -> Self {
        Self { stroke_color: color, ..Self::default() }
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_dash(mut self, dash: impl Into<Vec<f32>>) -> Self {
        self.dash_array = dash.into();
        self
    }

    pub fn with_text_rotation(mut self, degrees: f32) -> Self {
        self.text_rotation_degrees = degrees;
        self
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Stroke width, falling back to `default` when unset.
    pub fn stroke_width_or(&self, default: f32) -> f32 {
        if self.stroke_width > 0.0 { self.stroke_width } else { default }
    }

    /// Stroke color, falling back to `default` when unset.
    pub fn stroke_color_or(&self, default: Color) -> Color {
        if self.stroke_color.is_transparent() { default } else { self.stroke_color }
    }

    pub fn is_dashed(&self) -> bool {
        self.dash_array.iter().any(|&d| d > 0.0)
    }
}
