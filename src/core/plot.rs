//! Static trajectory charts (SVG, or PNG when the path ends in `.png`).

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;

use crate::core::ballistics::{FlightStats, sample_trajectory};
use crate::core::params::LaunchParameters;

pub const CHART_WIDTH_PX: u32 = 1200;
pub const CHART_HEIGHT_PX: u32 = 600;

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("failed to draw chart: {0}")]
    Draw(String),
}

fn draw_err<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Draw(err.to_string())
}

/// Padded axis spans whose ratio matches the chart's pixel aspect, so the arc
/// is drawn without distortion.
pub fn chart_window(range_m: f64, peak_m: f64) -> (f64, f64) {
    let aspect = f64::from(CHART_WIDTH_PX) / f64::from(CHART_HEIGHT_PX);
    let x_span = (range_m.max(1.0) * (1.0 + X_PADDING_RATIO)).max(1.0);
    let y_span = (peak_m.max(1.0) * (1.0 + Y_PADDING_RATIO)).max(1.0);

    if x_span / y_span < aspect {
        (y_span * aspect, y_span)
    } else {
        (x_span, x_span / aspect)
    }
}

pub fn write_chart(path: &Path, params: &LaunchParameters, samples: usize) -> Result<(), PlotError> {
    let size = (CHART_WIDTH_PX, CHART_HEIGHT_PX);
    let is_png = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if is_png {
        draw_chart(BitMapBackend::new(path, size).into_drawing_area(), params, samples)
    } else {
        draw_chart(SVGBackend::new(path, size).into_drawing_area(), params, samples)
    }
}

fn draw_chart<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    params: &LaunchParameters,
    samples: usize,
) -> Result<(), PlotError> {
    let stats = FlightStats::compute(params);
    let points = sample_trajectory(params, samples);
    let peak = stats.peak_point(params);
    let (x_span, y_span) = chart_window(stats.range_m, stats.peak_altitude_m);

    root.fill(&WHITE).map_err(draw_err)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "{:.1} deg, {:.1} m/s, g = {:.2} m/s^2, h0 = {:.1} m",
                params.angle_deg, params.speed_mps, params.gravity_mps2, params.height_m
            ),
            ("sans-serif", 22),
        )
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d(0.0..x_span, 0.0..y_span)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(LineSeries::new(
            points.iter().map(|p| (p.x, p.y)),
            BLUE.stroke_width(2),
        ))
        .map_err(draw_err)?;
    chart
        .draw_series([
            Circle::new((peak.x, peak.y), 5, RED.filled()),
            Circle::new((stats.range_m, 0.0), 5, BLACK.filled()),
        ])
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_matches_chart_aspect() {
        let aspect = f64::from(CHART_WIDTH_PX) / f64::from(CHART_HEIGHT_PX);
        for (range_m, peak_m) in [(250.0, 62.5), (10.0, 80.0), (0.0, 0.0)] {
            let (x_span, y_span) = chart_window(range_m, peak_m);
            assert!((x_span / y_span - aspect).abs() < 1e-9);
            assert!(x_span > range_m);
            assert!(y_span > peak_m);
        }
    }
}
