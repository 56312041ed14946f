// File: crates/annotation-core/tests/resolve.rs
// Purpose: Validate range derivation and rect resolution (fallbacks, normalization, widening).

use annotation_core::{
    AnnotationElement, BoxAnnotation, BoxMode, BoxOptions, ChartContext, FontStyle, LinearScale,
    RectF64, TemporalScale, TextShaper,
};
use chrono::{TimeZone, Utc};

/// Chart with a 0..100 x 0..100 plot area and identity pixel scales on both
/// axes, so declared bounds resolve to the same pixel values.
fn identity_chart() -> ChartContext {
    let mut chart = ChartContext::new();
    chart.plot_area = Some(RectF64::from_ltrb(0.0, 0.0, 100.0, 100.0));
    chart.insert_scale("x-axis-0", LinearScale::new(0.0, 100.0, 0.0, 100.0));
    chart.insert_scale("y-axis-0", LinearScale::new(0.0, 100.0, 0.0, 100.0));
    chart
}

#[test]
fn ranges_empty_without_plot_area() {
    let mut chart = identity_chart();
    chart.plot_area = None;

    let mut annotation = BoxAnnotation::new(BoxOptions::default().with_x_bounds(Some(10.0), Some(20.0)));
    annotation.resolve_ranges(&chart);
    assert!(annotation.ranges().is_empty());

    annotation.configure(&chart, &TextShaper::new());
    assert!(annotation.model().is_none());
}

#[test]
fn ranges_fall_back_to_viewport_edges() {
    let chart = identity_chart();
    let mut annotation = BoxAnnotation::new(BoxOptions::default());
    annotation.resolve_ranges(&chart);

    let x = annotation.ranges().get("x-axis-0").expect("x range");
    assert_eq!((x.min, x.max), (0.0, 100.0));
    // y fallback uses bottom for min, top for max; the emitted range is ordered
    let y = annotation.ranges().get("y-axis-0").expect("y range");
    assert_eq!((y.min, y.max), (0.0, 100.0));
}

#[test]
fn ranges_use_declared_bounds_directly() {
    let chart = identity_chart();
    let mut annotation =
        BoxAnnotation::new(BoxOptions::default().with_x_bounds(Some(80.0), Some(20.0)));
    annotation.resolve_ranges(&chart);

    // Reversed declaration still yields an ordered range
    let x = annotation.ranges().get("x-axis-0").expect("x range");
    assert_eq!((x.min, x.max), (20.0, 80.0));
}

#[test]
fn ranges_skip_temporal_x_axis() {
    let mut chart = identity_chart();
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap();
    chart.insert_scale("x-axis-0", TemporalScale::new(0.0, 100.0, start, end).unwrap());

    let mut annotation =
        BoxAnnotation::new(BoxOptions::default().with_x_bounds(Some(10.0), Some(20.0)));
    annotation.resolve_ranges(&chart);

    // No entry at all for the temporal axis; y axis still reported
    assert!(annotation.ranges().get("x-axis-0").is_none());
    assert!(annotation.ranges().get("y-axis-0").is_some());
}

#[test]
fn rect_is_normalized_for_reversed_bounds() {
    let chart = identity_chart();
    let mut annotation = BoxAnnotation::new(
        BoxOptions::default()
            .with_x_bounds(Some(80.0), Some(20.0))
            .with_y_bounds(Some(70.0), Some(30.0)),
    );
    annotation.configure(&chart, &TextShaper::new());

    let rect = annotation.model().expect("model").rect;
    assert!(rect.left <= rect.right);
    assert!(rect.top <= rect.bottom);
    assert_eq!((rect.left, rect.right), (20.0, 80.0));
    assert_eq!((rect.top, rect.bottom), (30.0, 70.0));
}

#[test]
fn point_extent_widens_to_square() {
    let chart = identity_chart();
    let mut annotation = BoxAnnotation::new(
        BoxOptions::default()
            .with_x_bounds(Some(30.0), Some(30.0))
            .with_y_bounds(Some(10.0), Some(40.0)),
    );
    annotation.configure(&chart, &TextShaper::new());

    let rect = annotation.model().expect("model").rect;
    assert_eq!((rect.top, rect.bottom), (10.0, 40.0));
    // widened by height/2 on each side of the collapsed x extent
    assert_eq!((rect.left, rect.right), (15.0, 45.0));
    assert_eq!(rect.width(), rect.height());
}

#[test]
fn y_only_extent_widens_from_viewport_edges() {
    // Only a y extent declared: left/right resolve to the viewport edges and
    // the widening rule still applies (height 30 -> 15 px per side).
    let mut chart = ChartContext::new();
    chart.plot_area = Some(RectF64::from_ltrb(0.0, 0.0, 100.0, 100.0));
    chart.insert_scale("y-axis-0", LinearScale::new(0.0, 100.0, 0.0, 100.0));

    let mut annotation = BoxAnnotation::new(
        BoxOptions::default()
            .with_mode(BoxMode::Vertical)
            .with_y_bounds(Some(10.0), Some(40.0)),
    );
    annotation.configure(&chart, &TextShaper::new());

    let rect = annotation.model().expect("model").rect;
    assert_eq!((rect.top, rect.bottom), (10.0, 40.0));
    assert_eq!((rect.left, rect.right), (-15.0, 115.0));
}

#[test]
fn horizontal_mode_spans_viewport_width() {
    let chart = identity_chart();
    let mut annotation = BoxAnnotation::new(
        BoxOptions::default()
            .with_mode(BoxMode::Horizontal)
            .with_x_bounds(Some(20.0), Some(60.0))
            .with_y_bounds(Some(10.0), Some(40.0)),
    );
    annotation.configure(&chart, &TextShaper::new());

    let edge = annotation.model().expect("model").edge.expect("edge");
    // declared x bounds are ignored by the mode dispatch
    assert_eq!((edge.x1, edge.x2), (0.0, 100.0));
    assert_eq!((edge.y1, edge.y2), (10.0, 40.0));
}

#[test]
fn vertical_mode_spans_viewport_height() {
    let chart = identity_chart();
    let mut annotation = BoxAnnotation::new(
        BoxOptions::default()
            .with_mode(BoxMode::Vertical)
            .with_x_bounds(Some(20.0), Some(60.0)),
    );
    annotation.configure(&chart, &TextShaper::new());

    let edge = annotation.model().expect("model").edge.expect("edge");
    assert_eq!((edge.y1, edge.y2), (0.0, 100.0));
    assert_eq!((edge.x1, edge.x2), (20.0, 60.0));
}

#[test]
fn non_finite_bound_is_treated_as_undeclared() {
    let chart = identity_chart();
    let mut annotation = BoxAnnotation::new(
        BoxOptions::default()
            .with_x_bounds(Some(f64::NAN), Some(f64::INFINITY))
            .with_y_bounds(Some(10.0), Some(40.0)),
    );
    annotation.resolve_ranges(&chart);
    annotation.configure(&chart, &TextShaper::new());

    let x = annotation.ranges().get("x-axis-0").expect("x range");
    assert_eq!((x.min, x.max), (0.0, 100.0));
    // both x bounds invalid: same treatment as undeclared, widening included
    let rect = annotation.model().expect("model").rect;
    assert_eq!((rect.left, rect.right), (-15.0, 115.0));
}

#[test]
fn clip_always_equals_plot_area() {
    let chart = identity_chart();
    let mut annotation = BoxAnnotation::new(
        BoxOptions::default().with_x_bounds(Some(20.0), Some(60.0)),
    );
    annotation.configure(&chart, &TextShaper::new());

    let model = annotation.model().expect("model");
    assert_eq!(model.clip, RectF64::from_ltrb(0.0, 0.0, 100.0, 100.0));
}

#[test]
fn label_metrics_use_asymmetric_padding() {
    let chart = identity_chart();
    let shaper = TextShaper::new();

    let mut options = BoxOptions::default()
        .with_x_bounds(Some(20.0), Some(60.0))
        .with_label("busy period");
    options.label.x_padding = 4.0;
    options.label.y_padding = 9.0;

    let mut annotation = BoxAnnotation::new(options);
    annotation.configure(&chart, &shaper);

    let model = annotation.model().expect("model");
    let label = model.label.as_ref().expect("label metrics");

    // One padding unit of width, two of height, measured with the same shaper
    let font = shaper.font("sans-serif", 12.0, FontStyle::Normal);
    let text_width = shaper.measure_width(&font, "busy period");
    assert_eq!(label.width, text_width + 4.0);
    assert_eq!(label.height, shaper.cap_height_approx(&font) + 2.0 * 9.0);
}

#[test]
fn empty_label_content_yields_padding_only_metrics() {
    let chart = identity_chart();
    let shaper = TextShaper::new();

    let mut options = BoxOptions::default().with_x_bounds(Some(20.0), Some(60.0));
    options.label.x_padding = 4.0;
    options.label.y_padding = 9.0;

    let mut annotation = BoxAnnotation::new(options);
    annotation.configure(&chart, &shaper);

    // Empty content measures as zero text width; padding still applies
    let model = annotation.model().expect("model");
    let label = model.label.as_ref().expect("label metrics");
    let font = shaper.font("sans-serif", 12.0, FontStyle::Normal);
    assert_eq!(label.width, 4.0);
    assert_eq!(label.height, shaper.cap_height_approx(&font) + 2.0 * 9.0);
}

#[test]
fn no_scales_resolves_no_edge() {
    let mut chart = ChartContext::new();
    chart.plot_area = Some(RectF64::from_ltrb(0.0, 0.0, 100.0, 100.0));

    let mut annotation = BoxAnnotation::new(BoxOptions::default());
    annotation.resolve_ranges(&chart);
    annotation.configure(&chart, &TextShaper::new());

    assert!(annotation.ranges().is_empty());
    let model = annotation.model().expect("rect-only model");
    assert!(model.edge.is_none());
    assert!(annotation.edge_line().is_none());
}
