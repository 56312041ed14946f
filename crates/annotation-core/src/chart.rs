// File: crates/annotation-core/src/chart.rs
// Summary: Chart context (named scales + plot area) and headless PNG rendering
// pipeline using Skia CPU raster surfaces.

use std::collections::HashMap;

use anyhow::Result;
use skia_safe as skia;

use crate::annotation::AnnotationElement;
use crate::geometry::RectF64;
use crate::scale::AxisScale;
use crate::text::TextShaper;
use crate::types::{Insets, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub background: skia::Color,
    /// Stroke the plot-area frame before drawing annotations.
    pub draw_frame: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            background: skia::Color::from_argb(255, 18, 18, 20), // near-black
            draw_frame: true,
        }
    }
}

/// Plot-area rectangle implied by surface size and insets.
pub fn plot_rect(opts: &RenderOptions) -> RectF64 {
    RectF64::from_ltrb(
        opts.insets.left as f64,
        opts.insets.top as f64,
        (opts.width - opts.insets.right as i32) as f64,
        (opts.height - opts.insets.bottom as i32) as f64,
    )
}

/// The host-side state annotations resolve against: named axis scales and the
/// current plot area. `plot_area` is `None` before the first layout; all
/// resolution no-ops safely until it is set.
#[derive(Default)]
pub struct ChartContext {
    scales: HashMap<String, Box<dyn AxisScale>>,
    pub plot_area: Option<RectF64>,
}

impl ChartContext {
    pub fn new() -> Self {
        Self { scales: HashMap::new(), plot_area: None }
    }

    pub fn insert_scale(&mut self, id: impl Into<String>, scale: impl AxisScale + 'static) {
        self.scales.insert(id.into(), Box::new(scale));
    }

    pub fn scale(&self, id: &str) -> Option<&dyn AxisScale> {
        self.scales.get(id).map(|s| s.as_ref())
    }

    /// Render the annotations to PNG bytes on a CPU raster surface. Sets the
    /// plot area from `opts`, then runs one full layout + draw pass.
    pub fn render_annotations_to_png_bytes(
        &mut self,
        annotations: &mut [Box<dyn AnnotationElement>],
        opts: &RenderOptions,
    ) -> Result<Vec<u8>> {
        self.plot_area = Some(plot_rect(opts));

        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();

        canvas.clear(opts.background);

        if opts.draw_frame {
            draw_frame(canvas, &plot_rect(opts));
        }

        let shaper = TextShaper::new();
        for annotation in annotations.iter_mut() {
            annotation.resolve_ranges(self);
            annotation.configure(self, &shaper);
            annotation.draw(canvas, &shaper);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the annotations to a PNG file at `output_png_path`.
    pub fn render_annotations_to_png(
        &mut self,
        annotations: &mut [Box<dyn AnnotationElement>],
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_annotations_to_png_bytes(annotations, opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_frame(canvas: &skia::Canvas, area: &RectF64) {
    let mut paint = skia::Paint::default();
    paint.set_color(skia::Color::from_argb(255, 180, 180, 190));
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.5);
    canvas.draw_rect(area.to_skia(), &paint);
}
