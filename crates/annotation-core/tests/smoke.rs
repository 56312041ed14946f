// File: crates/annotation-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG with annotations.

use annotation_core::{
    plot_rect, AnnotationElement, BoxAnnotation, BoxMode, BoxOptions, ChartContext, LinearScale,
    RenderOptions,
};

#[test]
fn render_smoke_png() {
    let opts = RenderOptions::default();
    let plot = plot_rect(&opts);

    let mut chart = ChartContext::new();
    chart.insert_scale("x-axis-0", LinearScale::new(plot.left, plot.right, 0.0, 10.0));
    chart.insert_scale("y-axis-0", LinearScale::new(plot.bottom, plot.top, 0.0, 100.0));

    let mut annotations: Vec<Box<dyn AnnotationElement>> = vec![
        Box::new(BoxAnnotation::new(
            BoxOptions::default()
                .with_x_bounds(Some(2.0), Some(5.0))
                .with_label("busy period"),
        )),
        Box::new(BoxAnnotation::new(
            BoxOptions::default()
                .with_mode(BoxMode::Horizontal)
                .with_y_bounds(Some(40.0), Some(60.0)),
        )),
    ];

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart
        .render_annotations_to_png(&mut annotations, &opts, &out)
        .expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify the in-memory API works
    let bytes = chart
        .render_annotations_to_png_bytes(&mut annotations, &opts)
        .expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    // Decode and sanity-check dimensions
    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!(img.width() as i32, opts.width);
    assert_eq!(img.height() as i32, opts.height);
}

#[test]
fn render_pass_resolves_annotations() {
    let opts = RenderOptions::default();
    let plot = plot_rect(&opts);

    let mut chart = ChartContext::new();
    chart.insert_scale("x-axis-0", LinearScale::new(plot.left, plot.right, 0.0, 10.0));
    chart.insert_scale("y-axis-0", LinearScale::new(plot.bottom, plot.top, 0.0, 100.0));

    let mut annotations: Vec<Box<dyn AnnotationElement>> = vec![Box::new(BoxAnnotation::new(
        BoxOptions::default().with_x_bounds(Some(2.0), Some(5.0)),
    ))];

    chart
        .render_annotations_to_png_bytes(&mut annotations, &opts)
        .expect("render bytes");

    // The pass ran layout: the annotation now answers hit tests at its center
    let x_mid = plot.left + (plot.right - plot.left) * 0.35;
    let y_mid = (plot.top + plot.bottom) / 2.0;
    assert!(annotations[0].in_range(x_mid, y_mid));
    assert!(annotations[0].area() > 0.0);
}
