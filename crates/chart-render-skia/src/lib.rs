// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia renderer: rasterizes a chart specification on a CPU surface and encodes PNG.

use std::io::Write;

use chart_core::grid::{linspace, nice_ticks};
use chart_core::scale::{PlotRect, Projection};
use chart_core::{
    AnnotationSeries, ChartSeries, ChartSpec, Color, Insets, Legend, LegendPosition, Plottable,
    RenderError, Renderer, Style, Theme, ViewState, CONTENT_TYPE_PNG,
};
use skia_safe as skia;

const LABEL_SIZE: f32 = 12.0;
const TITLE_SIZE: f32 = 18.0;
const LEGEND_SIZE: f32 = 10.0;
const DEFAULT_STROKE: f32 = 1.5;
/// Approximate horizontal room one x tick label needs.
const X_TICK_SPACING_PX: f32 = 180.0;

pub struct SkiaRenderer {
    pub theme: Theme,
    /// Text drawing can be disabled for pixel-stable output across font setups.
    pub draw_labels: bool,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { theme: Theme::light(), draw_labels: true }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_labels(mut self, draw_labels: bool) -> Self {
        self.draw_labels = draw_labels;
        self
    }

    /// Render the chart into an encoded PNG.
    pub fn render_png_bytes(&self, spec: &ChartSpec<'_>) -> Result<Vec<u8>, RenderError> {
        if spec.width <= 0 || spec.height <= 0 {
            return Err(RenderError::InvalidCanvas { width: spec.width, height: spec.height });
        }
        let mut surface = skia::surfaces::raster_n32_premul((spec.width, spec.height))
            .ok_or(RenderError::Surface)?;
        let canvas = surface.canvas();

        let background = if spec.background.fill_color.is_transparent() {
            self.theme.background
        } else {
            spec.background.fill_color
        };
        canvas.clear(skia_color(background));

        let view = ViewState::from_spec(spec);
        let rect = PlotRect::layout(spec.width, spec.height, &spec.background.padding, &Insets::default());
        let proj = Projection::new(rect, view);

        let mut plot_bg = fill_paint(self.theme.canvas);
        plot_bg.set_anti_alias(false);
        canvas.draw_rect(to_rect(&rect), &plot_bg);

        let y_ticks = nice_ticks(view.y_min, view.y_max, 6);
        let x_ticks = linspace(view.x_min, view.x_max, x_tick_count(&rect));

        self.draw_value_grid(canvas, &proj, &y_ticks);
        self.draw_annotation_grid(canvas, &proj, spec);
        self.draw_axes(canvas, &rect);

        // Series, clipped to the plot area
        canvas.save();
        canvas.clip_rect(to_rect(&rect), skia::ClipOp::Intersect, true);
        for entry in &spec.series {
            if let ChartSeries::Line(s) = entry {
                self.draw_line_series(canvas, &proj, s.as_ref());
            }
        }
        canvas.restore();

        for entry in &spec.series {
            if let ChartSeries::Annotations(a) = entry {
                self.draw_annotations(canvas, &proj, a);
            }
        }

        if self.draw_labels {
            self.draw_y_labels(canvas, &proj, spec, &y_ticks);
            self.draw_x_labels(canvas, &proj, spec, &x_ticks);
            if let Some(title) = &spec.title {
                self.draw_title(canvas, spec, title);
            }
        }

        if let Some(legend) = &spec.legend {
            self.draw_legend(canvas, spec, legend);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode("PNG"))?;
        tracing::trace!(bytes = data.as_bytes().len(), series = spec.series.len(), "encoded chart");
        Ok(data.as_bytes().to_vec())
    }

    // ---- chrome ---------------------------------------------------------------

    fn draw_value_grid(&self, canvas: &skia::Canvas, proj: &Projection, ticks: &[f64]) {
        let paint = stroke_paint(self.theme.grid, 1.0, &[]);
        let r = proj.rect;
        for &t in ticks {
            let y = proj.to_px_y(t);
            canvas.draw_line((r.left, y), (r.right, y), &paint);
        }
    }

    fn draw_annotation_grid(&self, canvas: &skia::Canvas, proj: &Projection, spec: &ChartSpec<'_>) {
        let style = &spec.x_axis.grid_major_style;
        let paint = stroke_paint(
            style.stroke_color_or(self.theme.grid),
            style.stroke_width_or(1.0),
            &style.dash_array,
        );
        let r = proj.rect;
        for line in &spec.x_axis.grid_lines {
            if !proj.view.contains_x(line.value) {
                continue;
            }
            let x = proj.to_px_x(line.value);
            canvas.draw_line((x, r.top), (x, r.bottom), &paint);
        }
    }

    fn draw_axes(&self, canvas: &skia::Canvas, r: &PlotRect) {
        let paint = stroke_paint(self.theme.axis_line, 1.0, &[]);
        canvas.draw_line((r.left, r.bottom), (r.right, r.bottom), &paint);
        canvas.draw_line((r.left, r.top), (r.left, r.bottom), &paint);
    }

    fn draw_y_labels(&self, canvas: &skia::Canvas, proj: &Projection, spec: &ChartSpec<'_>, ticks: &[f64]) {
        let font = label_font(LABEL_SIZE);
        let paint = fill_paint(self.theme.tick);
        let rotation = spec.y_axis.tick_style.text_rotation_degrees;
        let r = proj.rect;
        for &t in ticks {
            let text = spec.y_axis.format(t);
            let (w, _) = font.measure_str(&text, Some(&paint));
            let y = proj.to_px_y(t);
            canvas.save();
            canvas.translate((r.left - 6.0, y));
            if rotation != 0.0 {
                canvas.rotate(rotation, None);
            }
            canvas.draw_str(&text, (-w, LABEL_SIZE * 0.35), &font, &paint);
            canvas.restore();
        }

        if let Some(name) = &spec.y_axis.name {
            let name_paint = fill_paint(self.theme.axis_label);
            let (w, _) = font.measure_str(name, Some(&name_paint));
            let x = spec.background.padding.left as f32 + LABEL_SIZE + 4.0;
            let y = r.top + r.height() * 0.5 + w * 0.5;
            canvas.save();
            canvas.translate((x, y));
            canvas.rotate(-90.0, None);
            canvas.draw_str(name, (0.0, 0.0), &font, &name_paint);
            canvas.restore();
        }
    }

    fn draw_x_labels(&self, canvas: &skia::Canvas, proj: &Projection, spec: &ChartSpec<'_>, ticks: &[f64]) {
        let font = label_font(LABEL_SIZE);
        let paint = fill_paint(self.theme.tick);
        let r = proj.rect;
        for &t in ticks {
            let text = spec.x_axis.format(t);
            let (w, _) = font.measure_str(&text, Some(&paint));
            let x = (proj.to_px_x(t) - w * 0.5).clamp(0.0, (spec.width as f32 - w).max(0.0));
            canvas.draw_str(&text, (x, r.bottom + LABEL_SIZE + 6.0), &font, &paint);
        }

        if let Some(name) = &spec.x_axis.name {
            let name_paint = fill_paint(self.theme.axis_label);
            let (w, _) = font.measure_str(name, Some(&name_paint));
            let x = r.left + r.width() * 0.5 - w * 0.5;
            canvas.draw_str(name, (x, r.bottom + 2.0 * LABEL_SIZE + 12.0), &font, &name_paint);
        }
    }

    fn draw_title(&self, canvas: &skia::Canvas, spec: &ChartSpec<'_>, title: &str) {
        let font = label_font(TITLE_SIZE);
        let paint = fill_paint(self.theme.axis_label);
        let (w, _) = font.measure_str(title, Some(&paint));
        let x = (spec.width as f32 - w) * 0.5;
        let y = spec.background.padding.top as f32 * 0.5 + TITLE_SIZE * 0.5;
        canvas.draw_str(title, (x.max(0.0), y.max(TITLE_SIZE)), &font, &paint);
    }

    // ---- series ---------------------------------------------------------------

    fn draw_line_series(&self, canvas: &skia::Canvas, proj: &Projection, series: &dyn Plottable) {
        let n = series.len();
        if n == 0 {
            return;
        }
        let style = series.style();
        let stroke_color = style.stroke_color_or(self.theme.line_stroke);
        let pts: Vec<(f32, f32)> = (0..n).map(|i| proj.to_px(series.value_at(i))).collect();

        if n == 1 {
            let dot = fill_paint(stroke_color);
            canvas.draw_circle(pts[0], style.stroke_width_or(DEFAULT_STROKE) + 1.5, &dot);
            return;
        }

        if !style.fill_color.is_transparent() {
            let bottom = proj.rect.bottom;
            let mut area = skia::PathBuilder::new();
            area.move_to((pts[0].0, bottom));
            for &p in &pts {
                area.line_to(p);
            }
            area.line_to((pts[n - 1].0, bottom));
            area.close();
            canvas.draw_path(&area.detach(), &fill_paint(style.fill_color));
        }

        let mut path = skia::PathBuilder::new();
        path.move_to(pts[0]);
        for &p in pts.iter().skip(1) {
            path.line_to(p);
        }
        let stroke = stroke_paint(stroke_color, style.stroke_width_or(DEFAULT_STROKE), &style.dash_array);
        canvas.draw_path(&path.detach(), &stroke);
    }

    fn draw_annotations(&self, canvas: &skia::Canvas, proj: &Projection, series: &AnnotationSeries) {
        let accent = series.style.stroke_color_or(self.theme.axis_line);
        let font = label_font(LABEL_SIZE);
        let text_paint = fill_paint(self.theme.annotation_text);
        for ann in &series.annotations {
            let (x, y) = proj.to_px((ann.x, ann.y));
            canvas.draw_circle((x, y), 3.0, &fill_paint(accent));
            if !self.draw_labels {
                continue;
            }
            let (w, _) = font.measure_str(&ann.label, Some(&text_paint));
            let box_rect = skia::Rect::from_xywh(x + 6.0, y - LABEL_SIZE * 0.5 - 4.0, w + 10.0, LABEL_SIZE + 8.0);
            canvas.draw_rect(box_rect, &fill_paint(self.theme.annotation_fill));
            canvas.draw_rect(box_rect, &stroke_paint(accent, 1.0, &[]));
            canvas.draw_str(&ann.label, (x + 11.0, y + LABEL_SIZE * 0.35), &font, &text_paint);
        }
    }

    // ---- legend ---------------------------------------------------------------

    fn draw_legend(&self, canvas: &skia::Canvas, spec: &ChartSpec<'_>, legend: &Legend) {
        let entries = spec.legend_entries();
        if entries.is_empty() {
            return;
        }
        let size = if legend.compact { LEGEND_SIZE } else { LABEL_SIZE };
        let swatch = if legend.compact { 16.0 } else { 24.0 };
        let gap = 8.0;
        let font = label_font(size);
        let text_paint = fill_paint(self.theme.axis_label);

        let widths: Vec<f32> = entries
            .iter()
            .map(|e| {
                let text_w = if self.draw_labels {
                    font.measure_str(&e.name, Some(&text_paint)).0
                } else {
                    size * 6.0
                };
                swatch + 4.0 + text_w
            })
            .collect();
        let total = widths.iter().sum::<f32>() + gap * (widths.len() as f32 + 1.0);
        let height = size + 10.0;

        let padding = &spec.background.padding;
        let top = match legend.position {
            LegendPosition::Bottom => spec.height as f32 - padding.bottom as f32 - height - 4.0,
            LegendPosition::Top => padding.top as f32 + 2.0,
        };
        let left = ((spec.width as f32 - total) * 0.5).max(0.0);
        let frame = skia::Rect::from_xywh(left, top, total, height);
        canvas.draw_rect(frame, &fill_paint(self.theme.canvas));
        canvas.draw_rect(frame, &stroke_paint(self.theme.legend_border, 1.0, &[]));

        let mid = top + height * 0.5;
        let mut x = left + gap;
        for (entry, w) in entries.iter().zip(&widths) {
            let paint = legend_stroke(&entry.style, self.theme.line_stroke);
            canvas.draw_line((x, mid), (x + swatch, mid), &paint);
            if self.draw_labels {
                canvas.draw_str(&entry.name, (x + swatch + 4.0, mid + size * 0.35), &font, &text_paint);
            }
            x += w + gap;
        }
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new() }
}

impl Renderer for SkiaRenderer {
    fn content_type(&self) -> &'static str {
        CONTENT_TYPE_PNG
    }

    fn render(&self, spec: &ChartSpec<'_>, sink: &mut dyn Write) -> Result<(), RenderError> {
        let bytes = self.render_png_bytes(spec)?;
        sink.write_all(&bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_rect(r: &PlotRect) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

fn x_tick_count(r: &PlotRect) -> usize {
    ((r.width() / X_TICK_SPACING_PX).floor() as usize).clamp(2, 12)
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(skia_color(color));
    paint
}

fn stroke_paint(color: Color, width: f32, dash: &[f32]) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(skia_color(color));
    if let Some(effect) = dash_effect(dash) {
        paint.set_path_effect(effect);
    }
    paint
}

fn legend_stroke(style: &Style, fallback: Color) -> skia::Paint {
    stroke_paint(style.stroke_color_or(fallback), style.stroke_width_or(DEFAULT_STROKE), &style.dash_array)
}

/// Skia wants an even number of positive intervals; odd patterns repeat once.
fn dash_effect(dash: &[f32]) -> Option<skia::PathEffect> {
    if dash.is_empty() || dash.iter().any(|d| *d < 0.0) || dash.iter().all(|d| *d == 0.0) {
        return None;
    }
    let intervals: Vec<f32> = if dash.len() % 2 == 0 {
        dash.to_vec()
    } else {
        dash.iter().chain(dash.iter()).copied().collect()
    };
    skia::PathEffect::dash(&intervals, 0.0)
}

fn label_font(size: f32) -> skia::Font {
    let mut font = skia::FontMgr::default()
        .legacy_make_typeface(None::<&str>, skia::FontStyle::normal())
        .map(|typeface| skia::Font::from_typeface(typeface, size))
        .unwrap_or_default();
    font.set_size(size);
    font
}
