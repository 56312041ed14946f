// File: crates/annotation-core/src/text.rs
// Summary: Label font lookup, width measurement, and middle-baseline drawing.

use skia_safe as skia;

use crate::options::FontStyle;

pub struct TextShaper {
    font_mgr: skia::FontMgr,
}

impl TextShaper {
    pub fn new() -> Self {
        // Use system manager fallback
        Self { font_mgr: skia::FontMgr::default() }
    }

    /// Font for the requested family/size/style, falling back to the Skia
    /// default typeface when the family is unavailable.
    pub fn font(&self, family: &str, size: f32, style: FontStyle) -> skia::Font {
        match self.font_mgr.match_family_style(family, style.to_skia()) {
            Some(tf) => skia::Font::new(tf, Some(size.max(1.0))),
            None => {
                let mut f = skia::Font::default();
                f.set_size(size.max(1.0));
                f
            }
        }
    }

    /// Advance width of `text` in pixels.
    pub fn measure_width(&self, font: &skia::Font, text: &str) -> f64 {
        font.measure_str(text, None).0 as f64
    }

    /// Glyph-height approximation used for label sizing: the advance width of
    /// a capital "M". Kept for visual parity with existing charts.
    pub fn cap_height_approx(&self, font: &skia::Font) -> f64 {
        self.measure_width(font, "M")
    }

    /// Draw `text` left-aligned with a middle baseline at (`x`, `y`).
    pub fn draw_middle_left(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f64,
        y: f64,
        font: &skia::Font,
        color: skia::Color,
    ) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(color);
        // draw_str places the baseline at y; shift so the glyph box is
        // vertically centered on y (ascent is negative in Skia metrics).
        let (_, fm) = font.metrics();
        let baseline = y as f32 - (fm.ascent + fm.descent) * 0.5;
        canvas.draw_str(text, (x as f32, baseline), font, &paint);
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
