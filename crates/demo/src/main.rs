// File: crates/demo/src/main.rs
// Summary: Demo renders box annotations (value ranges, deploy window, point marker) to PNGs.

use annotation_core::{
    plot_rect, AnnotationElement, BoxAnnotation, BoxMode, BoxOptions, ChartContext, LinearScale,
    RenderOptions, TemporalScale,
};
use anyhow::Result;
use chrono::{TimeZone, Utc};
use skia_safe as skia;

fn main() -> Result<()> {
    let out_dir = std::env::args().nth(1).unwrap_or_else(|| "out".to_string());
    let out_dir = std::path::PathBuf::from(out_dir);

    render_value_ranges(&out_dir)?;
    render_deploy_window(&out_dir)?;
    Ok(())
}

/// Vertical band plus a horizontal target band on plain linear axes.
fn render_value_ranges(out_dir: &std::path::Path) -> Result<()> {
    let opts = RenderOptions::default();
    let plot = plot_rect(&opts);

    let mut chart = ChartContext::new();
    chart.insert_scale("x-axis-0", LinearScale::new(plot.left, plot.right, 0.0, 30.0));
    chart.insert_scale("y-axis-0", LinearScale::new(plot.bottom, plot.top, 0.0, 100.0));

    let mut annotations: Vec<Box<dyn AnnotationElement>> = vec![
        Box::new(BoxAnnotation::new(
            BoxOptions::default()
                .with_x_bounds(Some(8.0), Some(14.0))
                .with_label("load test"),
        )),
        Box::new(BoxAnnotation::new(
            BoxOptions::default()
                .with_mode(BoxMode::Horizontal)
                .with_y_bounds(Some(60.0), Some(80.0))
                .with_label("target band"),
        )),
    ];

    let out = out_dir.join("value_ranges.png");
    chart.render_annotations_to_png(&mut annotations, &opts, &out)?;
    println!("Wrote {}", out.display());

    // Hit-test the band center as a sanity check
    let center_x = plot.left + (plot.right - plot.left) * (11.0 / 30.0);
    let center_y = (plot.top + plot.bottom) / 2.0;
    println!(
        "  center hit: {}",
        annotations[0].in_range(center_x, center_y)
    );
    Ok(())
}

/// Time axis: a deploy window between two timestamps, dashed border.
fn render_deploy_window(out_dir: &std::path::Path) -> Result<()> {
    let opts = RenderOptions::default();
    let plot = plot_rect(&opts);

    let day_start = Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap();
    let day_end = Utc.with_ymd_and_hms(2024, 6, 4, 0, 0, 0).unwrap();
    let deploy_start = Utc.with_ymd_and_hms(2024, 6, 3, 14, 0, 0).unwrap();
    let deploy_end = Utc.with_ymd_and_hms(2024, 6, 3, 16, 30, 0).unwrap();

    let mut chart = ChartContext::new();
    chart.insert_scale(
        "time",
        TemporalScale::new(plot.left, plot.right, day_start, day_end)?,
    );
    chart.insert_scale("y-axis-0", LinearScale::new(plot.bottom, plot.top, 0.0, 100.0));

    let mut window = BoxOptions::default()
        .with_scale_ids("time", "y-axis-0")
        .with_x_bounds(
            Some(deploy_start.timestamp_millis() as f64),
            Some(deploy_end.timestamp_millis() as f64),
        )
        .with_label("deploy window");
    window.border_dash = vec![6.0, 4.0];
    window.border_color = skia::Color::from_argb(255, 220, 80, 80);
    window.background_color = skia::Color::from_argb(48, 220, 80, 80);

    let mut annotations: Vec<Box<dyn AnnotationElement>> =
        vec![Box::new(BoxAnnotation::new(window))];

    let out = out_dir.join("deploy_window.png");
    chart.render_annotations_to_png(&mut annotations, &opts, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
