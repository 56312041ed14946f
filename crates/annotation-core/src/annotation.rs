// File: crates/annotation-core/src/annotation.rs
// Summary: Annotation element trait and the box annotation (resolve, hit-test, draw).

use std::collections::HashMap;

use skia_safe as skia;

use crate::chart::ChartContext;
use crate::geometry::{PixelRange, Point, RectF64};
use crate::line::LineFunction;
use crate::model::{BoxModel, EdgeSpan, LabelModel};
use crate::options::{valid_bound, BoxMode, BoxOptions};
use crate::scale::ScaleKind;
use crate::text::TextShaper;

/// An annotation drawn on top of the plot area. Resolution runs once per
/// layout pass; the query/draw operations consume the latest snapshot.
pub trait AnnotationElement {
    fn id(&self) -> &'static str;
    /// Recompute the per-axis pixel ranges this annotation occupies.
    fn resolve_ranges(&mut self, chart: &ChartContext);
    /// Recompute the resolved model (rect, clip, edge, label metrics).
    fn configure(&mut self, chart: &ChartContext, shaper: &TextShaper);
    /// Point-in-annotation test in pixel space.
    fn in_range(&self, x: f64, y: f64) -> bool;
    fn center_point(&self) -> Option<Point>;
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn area(&self) -> f64 {
        self.width() * self.height()
    }
    /// Paint the latest snapshot. Canvas state is save/restore bracketed so
    /// no style leaks into subsequent draws.
    fn draw(&self, canvas: &skia::Canvas, shaper: &TextShaper);
}

/// Rectangular annotation anchored to data-space bounds on one or two axes.
pub struct BoxAnnotation {
    pub options: BoxOptions,
    ranges: HashMap<String, PixelRange>,
    model: Option<BoxModel>,
}

impl BoxAnnotation {
    pub fn new(options: BoxOptions) -> Self {
        Self { options, ranges: HashMap::new(), model: None }
    }

    /// Pixel ranges from the last `resolve_ranges`, keyed by axis id. Empty
    /// before the first layout pass or while the plot area is unknown.
    pub fn ranges(&self) -> &HashMap<String, PixelRange> {
        &self.ranges
    }

    /// Latest resolved snapshot, if any.
    pub fn model(&self) -> Option<&BoxModel> {
        self.model.as_ref()
    }

    /// Line through the resolved directed edge, built fresh from the latest
    /// snapshot. `None` while nothing is resolved.
    pub fn edge_line(&self) -> Option<LineFunction> {
        self.model.as_ref().and_then(|m| m.edge).map(LineFunction::new)
    }
}

impl AnnotationElement for BoxAnnotation {
    fn id(&self) -> &'static str {
        "box"
    }

    fn resolve_ranges(&mut self, chart: &ChartContext) {
        self.ranges.clear();
        let Some(area) = chart.plot_area else { return };
        let opts = &self.options;

        if let Some(scale) = chart.scale(&opts.x_scale_id) {
            // Temporal scales cannot honor the pixel-edge fallback; skip the
            // axis outright rather than substituting a default.
            if scale.kind() != ScaleKind::Temporal {
                let min = valid_bound(opts.x_min).unwrap_or(area.left);
                let max = valid_bound(opts.x_max).unwrap_or(area.right);
                self.ranges.insert(opts.x_scale_id.clone(), PixelRange::ordered(min, max));
            }
        }

        if chart.scale(&opts.y_scale_id).is_some() {
            let min = valid_bound(opts.y_min).unwrap_or(area.bottom);
            let max = valid_bound(opts.y_max).unwrap_or(area.top);
            self.ranges.insert(opts.y_scale_id.clone(), PixelRange::ordered(min, max));
        }
    }

    fn configure(&mut self, chart: &ChartContext, shaper: &TextShaper) {
        let Some(area) = chart.plot_area else {
            self.model = None;
            return;
        };
        let opts = &self.options;

        let mut left = area.left;
        let mut top = area.top;
        let mut right = area.right;
        let mut bottom = area.bottom;

        // Directed (min-bound, max-bound) pixel pairs per axis, unnormalized.
        let mut x_pair: Option<(f64, f64)> = None;
        let mut y_pair: Option<(f64, f64)> = None;

        if let Some(scale) = chart.scale(&opts.x_scale_id) {
            let min = valid_bound(opts.x_min)
                .map(|v| scale.pixel_for_value(v))
                .unwrap_or(area.left);
            let max = valid_bound(opts.x_max)
                .map(|v| scale.pixel_for_value(v))
                .unwrap_or(area.right);
            left = min.min(max);
            right = min.max(max);
            x_pair = Some((min, max));
        }

        if let Some(scale) = chart.scale(&opts.y_scale_id) {
            // Pixel y grows downward: top derives from the max bound.
            let min = valid_bound(opts.y_min)
                .map(|v| scale.pixel_for_value(v))
                .unwrap_or(area.bottom);
            let max = valid_bound(opts.y_max)
                .map(|v| scale.pixel_for_value(v))
                .unwrap_or(area.top);
            top = min.min(max);
            bottom = min.max(max);
            y_pair = Some((min, max));
        }

        let mut rect = RectF64::from_ltrb(left, top, right, bottom);

        // A collapsed or undeclared horizontal extent widens symmetrically by
        // half the height, so the box stays visible instead of a hairline.
        let x_declared = valid_bound(opts.x_min).is_some() || valid_bound(opts.x_max).is_some();
        if rect.left == rect.right || !x_declared {
            let half = rect.height() / 2.0;
            rect.left -= half;
            rect.right += half;
        }

        // Span guard: the y pair when a y scale exists, else the x pair. With
        // no span resolved (or a non-finite one) the mode-specific fields stay
        // unset and there is nothing to draw this pass.
        let span_ok = matches!(y_pair.or(x_pair), Some((min, _)) if min.is_finite());

        let (edge, label) = if span_ok {
            let edge = match opts.mode {
                BoxMode::Horizontal => {
                    let (y1, y2) = y_pair.unwrap_or((rect.top, rect.bottom));
                    EdgeSpan { x1: area.left, y1, x2: area.right, y2 }
                }
                BoxMode::Vertical => {
                    let (x1, x2) = x_pair.unwrap_or((rect.left, rect.right));
                    EdgeSpan { x1, y1: area.top, x2, y2: area.bottom }
                }
            };
            (Some(edge), Some(resolve_label(opts, shaper)))
        } else {
            (None, None)
        };

        // Replace the snapshot wholesale; no partial-mutation window.
        self.model = Some(BoxModel {
            mode: opts.mode,
            rect,
            clip: area,
            edge,
            border_color: opts.border_color,
            border_width: opts.border_width,
            border_dash: opts.border_dash.clone(),
            border_dash_offset: opts.border_dash_offset,
            background_color: opts.background_color,
            custom_shape: opts.custom_shape,
            label,
        });
    }

    fn in_range(&self, x: f64, y: f64) -> bool {
        self.model.as_ref().is_some_and(|m| m.rect.contains(x, y))
    }

    fn center_point(&self) -> Option<Point> {
        self.model.as_ref().map(|m| Point {
            x: (m.rect.right + m.rect.left) / 2.0,
            y: (m.rect.bottom + m.rect.top) / 2.0,
        })
    }

    fn width(&self) -> f64 {
        self.model.as_ref().map_or(0.0, |m| m.rect.width().abs())
    }

    fn height(&self) -> f64 {
        self.model.as_ref().map_or(0.0, |m| m.rect.height().abs())
    }

    fn draw(&self, canvas: &skia::Canvas, shaper: &TextShaper) {
        let Some(model) = &self.model else { return };
        if model.edge.is_none() {
            // No span resolved this pass.
            return;
        }

        canvas.save();
        canvas.clip_rect(model.clip.to_skia(), None, None);

        if !model.custom_shape {
            let rect = model.rect.to_skia();

            let mut fill = skia::Paint::default();
            fill.set_anti_alias(true);
            fill.set_style(skia::paint::Style::Fill);
            fill.set_color(model.background_color);
            canvas.draw_rect(rect, &fill);

            let mut stroke = skia::Paint::default();
            stroke.set_anti_alias(true);
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_width(model.border_width);
            stroke.set_color(model.border_color);
            if !model.border_dash.is_empty() {
                if let Some(dash) =
                    skia::PathEffect::dash(&model.border_dash, model.border_dash_offset)
                {
                    stroke.set_path_effect(dash);
                }
            }
            canvas.draw_rect(rect, &stroke);
        }

        if let Some(label) = &model.label {
            if label.enabled && !label.content.is_empty() {
                canvas.clip_rect(model.clip.to_skia(), None, None);
                let font = shaper.font(&label.font_family, label.font_size, label.font_style);
                shaper.draw_middle_left(
                    canvas,
                    &label.content,
                    model.rect.left + label.x_padding,
                    model.rect.top + 2.0 * label.y_padding,
                    &font,
                    label.font_color,
                );
            }
        }

        canvas.restore();
    }
}

/// Copy label style and compute pixel metrics. Empty content measures as
/// zero text width, leaving padding-only metrics.
fn resolve_label(opts: &BoxOptions, shaper: &TextShaper) -> LabelModel {
    let l = &opts.label;
    let font = shaper.font(&l.font_family, l.font_size, l.font_style);
    let text_width = shaper.measure_width(&font, &l.content);
    let text_height = shaper.cap_height_approx(&font);
    LabelModel {
        enabled: l.enabled,
        content: l.content.clone(),
        font_family: l.font_family.clone(),
        font_size: l.font_size,
        font_style: l.font_style,
        font_color: l.font_color,
        background_color: l.background_color,
        x_padding: l.x_padding,
        y_padding: l.y_padding,
        corner_radius: l.corner_radius,
        x_adjust: l.x_adjust,
        y_adjust: l.y_adjust,
        // Width gets one padding unit, height gets two.
        width: text_width + 1.0 * l.x_padding,
        height: text_height + 2.0 * l.y_padding,
    }
}
