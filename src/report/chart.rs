//! SVG charts rendered with plotters.

use std::path::Path;

use plotters::prelude::*;
use tracing::debug;

use crate::structure::CoherenceField;

type PlotResult = std::result::Result<(), Box<dyn std::error::Error>>;

const SIZE: (u32, u32) = (800, 600);

const SERIES_COLORS: [RGBColor; 6] = [BLUE, RED, GREEN, MAGENTA, CYAN, BLACK];

#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    #[error("nothing to plot")]
    Empty,

    #[error("failed to render chart: {0}")]
    Render(String),
}

/// One labelled bar.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// One named polyline.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(name: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// A labelled vertical line at `x`.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub label: String,
    pub x: f64,
}

impl Marker {
    pub fn new(label: impl Into<String>, x: f64) -> Self {
        Self {
            label: label.into(),
            x,
        }
    }
}

fn extent(iter: impl Iterator<Item = f64>) -> (f64, f64) {
    iter.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn padded(lo: f64, hi: f64) -> (f64, f64) {
    let pad = (hi - lo).abs() * 0.1 + 1e-6;
    (lo - pad, hi + pad)
}

/// Bar chart, one bar per entry in the given order.
pub fn bar_chart_svg(
    bars: &[Bar],
    path: &Path,
    title: &str,
    y_label: &str,
) -> Result<(), ChartError> {
    if bars.is_empty() {
        return Err(ChartError::Empty);
    }
    draw_bars(bars, path, title, y_label).map_err(|err| ChartError::Render(err.to_string()))?;
    debug!(path = %path.display(), bars = bars.len(), "wrote bar chart");
    Ok(())
}

fn draw_bars(bars: &[Bar], path: &Path, title: &str, y_label: &str) -> PlotResult {
    // Bars always start from zero, so the range must include it
    let (lo, hi) = extent(bars.iter().map(|bar| bar.value));
    let (y_min, y_max) = padded(lo.min(0.0), hi.max(0.0));
    let x_max = bars.len() as f64 - 0.5;

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5..x_max, y_min..y_max)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc(y_label)
        .draw()?;

    chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
        let x = i as f64;
        let color = SERIES_COLORS[i % SERIES_COLORS.len()];
        Rectangle::new([(x - 0.35, 0.0), (x + 0.35, bar.value)], color.filled())
    }))?;
    chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
        Text::new(bar.label.clone(), (i as f64 - 0.3, y_min), ("sans-serif", 14))
    }))?;

    root.present()?;
    Ok(())
}

/// Line chart with a legend entry per series.
pub fn line_chart_svg(
    series: &[Series],
    path: &Path,
    title: &str,
    x_label: &str,
    y_label: &str,
) -> Result<(), ChartError> {
    line_chart_with_markers_svg(series, &[], path, title, x_label, y_label)
}

/// Line chart with labelled vertical markers drawn over the series.
pub fn line_chart_with_markers_svg(
    series: &[Series],
    markers: &[Marker],
    path: &Path,
    title: &str,
    x_label: &str,
    y_label: &str,
) -> Result<(), ChartError> {
    if series.iter().all(|s| s.points.is_empty()) {
        return Err(ChartError::Empty);
    }
    draw_lines(series, markers, path, title, x_label, y_label)
        .map_err(|err| ChartError::Render(err.to_string()))?;
    debug!(path = %path.display(), series = series.len(), "wrote line chart");
    Ok(())
}

fn draw_lines(
    series: &[Series],
    markers: &[Marker],
    path: &Path,
    title: &str,
    x_label: &str,
    y_label: &str,
) -> PlotResult {
    let points = || series.iter().flat_map(|s| s.points.iter());
    let (x_min, x_max) = extent(points().map(|p| p.0));
    let (lo, hi) = extent(points().map(|p| p.1));
    let (y_min, y_max) = padded(lo, hi);

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max.max(x_min + 1e-6), y_min..y_max)?;
    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .draw()?;

    for (i, s) in series.iter().enumerate() {
        let color = SERIES_COLORS[i % SERIES_COLORS.len()];
        chart
            .draw_series(LineSeries::new(s.points.iter().copied(), color.stroke_width(2)))?
            .label(s.name.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    let marker_style = BLACK.mix(0.5).stroke_width(1);
    for marker in markers {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(marker.x, y_min), (marker.x, y_max)],
            marker_style,
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            marker.label.clone(),
            (marker.x, y_max),
            ("sans-serif", 14),
        )))?;
    }
    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Heat map of a coherence field, one cell per grid point.
pub fn field_heatmap_svg(
    field: &CoherenceField,
    path: &Path,
    title: &str,
) -> Result<(), ChartError> {
    if field.values.is_empty() {
        return Err(ChartError::Empty);
    }
    draw_field(field, path, title).map_err(|err| ChartError::Render(err.to_string()))?;
    debug!(path = %path.display(), resolution = field.resolution, "wrote field heat map");
    Ok(())
}

fn draw_field(field: &CoherenceField, path: &Path, title: &str) -> PlotResult {
    let n = field.resolution;
    let step = 2.0 * field.extent / (n - 1) as f64;
    let half = step / 2.0;
    let edge = field.extent + half;
    let (lo, hi) = extent(field.values.iter().copied());
    let span = (hi - lo).max(1e-12);

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-edge..edge, -edge..edge)?;
    chart.configure_mesh().x_desc("x").y_desc("y").draw()?;

    // Blue for the weakest cells through red for the strongest
    chart.draw_series(field.values.iter().enumerate().map(|(i, &value)| {
        let x = -field.extent + step * (i % n) as f64;
        let y = -field.extent + step * (i / n) as f64;
        let t = (value - lo) / span;
        let color = HSLColor(0.66 * (1.0 - t), 0.9, 0.5);
        Rectangle::new([(x - half, y - half), (x + half, y + half)], color.filled())
    }))?;

    root.present()?;
    Ok(())
}
