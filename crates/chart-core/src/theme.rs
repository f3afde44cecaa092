// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart chrome (background, axes, labels, legend).

use crate::style::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub canvas: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tick: Color,
    pub grid: Color,
    pub legend_border: Color,
    pub annotation_fill: Color,
    pub annotation_text: Color,
    pub line_stroke: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::WHITE,
            canvas: Color::WHITE,
            axis_line: Color::BLACK,
            axis_label: Color::BLACK,
            tick: Color::rgb(100, 100, 110),
            grid: Color::LIGHT_GRAY,
            legend_border: Color::rgb(204, 204, 204),
            annotation_fill: Color::WHITE,
            annotation_text: Color::BLACK,
            line_stroke: Color::BLUE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            canvas: Color::rgb(24, 24, 28),
            axis_line: Color::rgb(180, 180, 190),
            axis_label: Color::rgb(235, 235, 245),
            tick: Color::rgb(150, 150, 160),
            grid: Color::rgb(40, 40, 45),
            legend_border: Color::rgb(80, 80, 90),
            annotation_fill: Color::rgb(40, 40, 45),
            annotation_text: Color::rgb(235, 235, 245),
            line_stroke: Color::rgb(64, 160, 255),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
