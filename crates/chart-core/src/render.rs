// File: crates/chart-core/src/render.rs
// Summary: Renderer seam: turns a chart specification into encoded image bytes.

use std::io::Write;

use crate::chart::ChartSpec;
use crate::error::RenderError;

pub const CONTENT_TYPE_PNG: &str = "image/png";

/// Rasterizes or serializes a [`ChartSpec`] into `sink`.
pub trait Renderer {
    /// MIME type of the bytes written by [`Renderer::render`].
    fn content_type(&self) -> &'static str;
    fn render(&self, spec: &ChartSpec<'_>, sink: &mut dyn Write) -> Result<(), RenderError>;

    /// Render into an in-memory buffer.
    fn render_to_vec(&self, spec: &ChartSpec<'_>) -> Result<Vec<u8>, RenderError> {
        let mut buf = Vec::new();
        self.render(spec, &mut buf)?;
        Ok(buf)
    }
}
