//! Alert-volume chart rendering.
//!
//! Draws the time series as an SVG line chart with a marker at each data
//! point and base64-encodes the result so it can travel inside a JSON
//! response. The payload's `media_type` tells consumers what they got.

use base64::{engine::general_purpose::STANDARD as B64, Engine};
use icsnet_core::ChartPayload;
use plotters::prelude::*;

use crate::timeseries::TimePoint;
use crate::{ReportError, Result};

/// Media type of the rendered chart bytes.
pub const CHART_MEDIA_TYPE: &str = "image/svg+xml";

const CHART_TITLE: &str = "Alert Volume Over Time";
const X_LABEL: &str = "Epoch (s)";
const Y_LABEL: &str = "Alerts";
const CHART_SIZE: (u32, u32) = (800, 480);
const MARKER_RADIUS: i32 = 3;

/// Render the alert-volume series as a base64-encoded SVG line chart.
///
/// An empty series is an explicit "no chart" result (`Ok(None)`), not an
/// error: it simply means there were no log events to visualize.
pub fn render_alert_volume(series: &[TimePoint]) -> Result<Option<ChartPayload>> {
    if series.is_empty() {
        return Ok(None);
    }

    let svg = draw_svg(series)?;
    Ok(Some(ChartPayload {
        media_type: CHART_MEDIA_TYPE.to_string(),
        data: B64.encode(svg.as_bytes()),
    }))
}

fn draw_svg(series: &[TimePoint]) -> Result<String> {
    let x_min = series[0].timestamp;
    let x_max = series[series.len() - 1].timestamp;
    // Widen degenerate ranges so a single-point series still has axes.
    let x_max = if x_min == x_max { x_max + 1 } else { x_max };
    let y_max = series.iter().map(|p| p.count).max().unwrap_or(0) + 1;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(to_chart_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(CHART_TITLE, ("sans-serif", 22))
            .margin(12)
            .x_label_area_size(44)
            .y_label_area_size(48)
            .build_cartesian_2d(x_min..x_max, 0..y_max)
            .map_err(to_chart_error)?;

        chart
            .configure_mesh()
            .x_desc(X_LABEL)
            .y_desc(Y_LABEL)
            .draw()
            .map_err(to_chart_error)?;

        chart
            .draw_series(LineSeries::new(
                series.iter().map(|p| (p.timestamp, p.count)),
                &BLUE,
            ))
            .map_err(to_chart_error)?;

        chart
            .draw_series(
                series
                    .iter()
                    .map(|p| Circle::new((p.timestamp, p.count), MARKER_RADIUS, BLUE.filled())),
            )
            .map_err(to_chart_error)?;

        root.present().map_err(to_chart_error)?;
    }

    Ok(svg)
}

fn to_chart_error<E: std::fmt::Display>(err: E) -> ReportError {
    ReportError::Chart(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series_is_no_chart_not_error() {
        assert!(render_alert_volume(&[]).unwrap().is_none());
    }

    #[test]
    fn test_rendered_chart_decodes_to_titled_svg() {
        let series = vec![
            TimePoint {
                timestamp: 100,
                count: 2,
            },
            TimePoint {
                timestamp: 200,
                count: 1,
            },
        ];
        let payload = render_alert_volume(&series).unwrap().unwrap();
        assert_eq!(payload.media_type, CHART_MEDIA_TYPE);

        let bytes = B64.decode(payload.data).unwrap();
        let svg = String::from_utf8(bytes).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains(CHART_TITLE));
        assert!(svg.contains(X_LABEL));
    }

    #[test]
    fn test_single_point_series_renders() {
        let series = vec![TimePoint {
            timestamp: 1_700_000_000,
            count: 30,
        }];
        assert!(render_alert_volume(&series).unwrap().is_some());
    }
}
