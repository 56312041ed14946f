// File: crates/annotation-core/src/lib.rs
// Summary: Core library entry point; exports the annotation geometry and rendering API.

pub mod annotation;
pub mod chart;
pub mod geometry;
pub mod line;
pub mod model;
pub mod options;
pub mod scale;
pub mod text;
pub mod types;

pub use annotation::{AnnotationElement, BoxAnnotation};
pub use chart::{plot_rect, ChartContext, RenderOptions};
pub use geometry::{PixelRange, Point, RectF64};
pub use line::{LineFunction, EPSILON};
pub use model::{BoxModel, EdgeSpan, LabelModel};
pub use options::{BoxMode, BoxOptions, FontStyle, LabelOptions};
pub use scale::{AxisScale, LinearScale, ScaleError, ScaleKind, TemporalScale};
pub use text::TextShaper;
pub use types::Insets;
