// File: crates/annotation-core/src/options.rs
// Summary: Box annotation options (bounds, style, label); immutable per layout pass.

use skia_safe as skia;

/// Which axis carries the box extent. `Vertical` (the default) varies along
/// x and spans the full plot height; `Horizontal` is the converse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoxMode {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn to_skia(self) -> skia::FontStyle {
        match self {
            FontStyle::Normal => skia::FontStyle::normal(),
            FontStyle::Bold => skia::FontStyle::bold(),
            FontStyle::Italic => skia::FontStyle::italic(),
            FontStyle::BoldItalic => skia::FontStyle::bold_italic(),
        }
    }
}

/// Label block of the annotation options.
#[derive(Clone, Debug)]
pub struct LabelOptions {
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
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            content: String::new(),
            font_family: "sans-serif".to_string(),
            font_size: 12.0,
            font_style: FontStyle::Normal,
            font_color: skia::Color::from_argb(255, 235, 235, 245),
            background_color: skia::Color::from_argb(200, 0, 0, 0),
            x_padding: 6.0,
            y_padding: 6.0,
            corner_radius: 6.0,
            x_adjust: 0.0,
            y_adjust: 0.0,
        }
    }
}

/// Declared annotation: mode, optional data-space bounds per axis, axis ids,
/// and style. Bounds left `None` (or non-finite) anchor that side to the
/// plot-area edge.
#[derive(Clone, Debug)]
pub struct BoxOptions {
    pub mode: BoxMode,
    pub x_scale_id: String,
    pub y_scale_id: String,
    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    pub border_color: skia::Color,
    pub border_width: f32,
    pub border_dash: Vec<f32>,
    pub border_dash_offset: f32,
    pub background_color: skia::Color,
    /// When set, body fill/stroke is delegated to a custom shape renderer
    /// outside this crate; only the label is painted here.
    pub custom_shape: bool,
    pub label: LabelOptions,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self {
            mode: BoxMode::Vertical,
            x_scale_id: "x-axis-0".to_string(),
            y_scale_id: "y-axis-0".to_string(),
            x_min: None,
            x_max: None,
            y_min: None,
            y_max: None,
            border_color: skia::Color::from_argb(255, 64, 160, 255),
            border_width: 1.0,
            border_dash: Vec::new(),
            border_dash_offset: 0.0,
            background_color: skia::Color::from_argb(64, 64, 160, 255),
            custom_shape: false,
            label: LabelOptions::default(),
        }
    }
}

impl BoxOptions {
    pub fn with_mode(mut self, mode: BoxMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_x_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.x_min = min;
        self.x_max = max;
        self
    }

    pub fn with_y_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.y_min = min;
        self.y_max = max;
        self
    }

    pub fn with_scale_ids(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_scale_id = x.into();
        self.y_scale_id = y.into();
        self
    }

    pub fn with_label(mut self, content: impl Into<String>) -> Self {
        self.label.content = content.into();
        self.label.enabled = true;
        self
    }
}

/// Treat a declared bound as usable only when it is a finite number.
#[inline]
pub(crate) fn valid_bound(v: Option<f64>) -> Option<f64> {
    v.filter(|v| v.is_finite())
}
