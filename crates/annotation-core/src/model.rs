// File: crates/annotation-core/src/model.rs
// Summary: Resolved annotation snapshot (pixel rect, clip, edge, style, label metrics).

use skia_safe as skia;

use crate::geometry::RectF64;
use crate::options::{BoxMode, FontStyle};

/// Directed edge endpoints chosen according to mode. The order is meaningful:
/// the first point derives from the declared min bound, the second from the
/// max bound, without normalization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeSpan {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Label style copied from the options plus computed pixel metrics.
#[derive(Clone, Debug)]
pub struct LabelModel {
    pub enabled: bool,
    pub content: String,
    pub font_family: String,
    pub font_size: f32,
    pub font_style: FontStyle,
    pub font_color: skia::Color,
    pub background_color: skia::Color,
    pub x_padding: f64,
    pub y_padding: f64,
    pub corner_radius: f64,
    pub x_adjust: f64,
    pub y_adjust: f64,
    pub width: f64,
    pub height: f64,
}

/// Immutable snapshot produced once per layout pass and replaced wholesale.
/// `edge` is `None` when no axis span could be resolved; consumers treat that
/// as nothing to draw.
#[derive(Clone, Debug)]
pub struct BoxModel {
    pub mode: BoxMode,
    /// Normalized rectangle: `left <= right`, `top <= bottom`.
    pub rect: RectF64,
    /// Clip region; always the full plot area.
    pub clip: RectF64,
    pub edge: Option<EdgeSpan>,
    pub border_color: skia::Color,
    pub border_width: f32,
    pub border_dash: Vec<f32>,
    pub border_dash_offset: f32,
    pub background_color: skia::Color,
    pub custom_shape: bool,
    pub label: Option<LabelModel>,
}
