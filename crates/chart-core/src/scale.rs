// File: crates/chart-core/src/scale.rs
// Summary: Plot-area layout and linear data-to-pixel transforms.

use crate::types::Insets;
use crate::view::ViewState;

/// Pixel rectangle of the plotting area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    /// Canvas minus the outer `padding`, minus the label `gutter`.
    /// Collapses to a zero-size rect rather than inverting.
    pub fn layout(width: i32, height: i32, padding: &Insets, gutter: &Insets) -> Self {
        let left = (padding.left + gutter.left) as f32;
        let top = (padding.top + gutter.top) as f32;
        let right = (width as f32 - (padding.right + gutter.right) as f32).max(left);
        let bottom = (height as f32 - (padding.bottom + gutter.bottom) as f32).max(top);
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}

/// Maps data space (`ViewState`) onto a `PlotRect`; y grows upward in data space.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    pub rect: PlotRect,
    pub view: ViewState,
}

impl Projection {
    pub fn new(rect: PlotRect, view: ViewState) -> Self {
        Self { rect, view }
    }

    #[inline]
    pub fn to_px_x(&self, x: f64) -> f32 {
        let span = self.view.x_span().max(1e-12);
        self.rect.left + ((x - self.view.x_min) / span) as f32 * self.rect.width()
    }

    #[inline]
    pub fn to_px_y(&self, y: f64) -> f32 {
        let span = self.view.y_span().max(1e-12);
        self.rect.bottom - ((y - self.view.y_min) / span) as f32 * self.rect.height()
    }

    #[inline]
    pub fn to_px(&self, (x, y): (f64, f64)) -> (f32, f32) {
        (self.to_px_x(x), self.to_px_y(y))
    }
}
