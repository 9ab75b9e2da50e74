//! Module rendering a yield table as a line chart
//!
//! Both curves are drawn against the oleic acid fraction on the x axis,
//! markers plus solid line, each with a dashed straight reference line
//! connecting its first and last row.
use std::ops::Range;
use std::path::Path;

use derive_builder::Builder;
use log::info;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use thiserror::Error;

use crate::sweep::{SweepPoint, YieldTable};

/// Title used when none is configured
pub const DEFAULT_TITLE: &str =
    "Beta-Carotene Theoretical Yield and Associated CO2 Loss in Glucose and Oleic Acid Co-Feeding";
/// X axis description used when none is configured
pub const DEFAULT_X_LABEL: &str = "Oleic Acid Fraction (g oleic acid / g total Substrate)";
/// Y axis description used when none is configured
pub const DEFAULT_Y_LABEL: &str = "Yield (g product / g total substrate)";

const YIELD_SERIES_LABEL: &str = "Beta-Carotene Yield (g/g)";
const CO2_SERIES_LABEL: &str = "CO2 Loss (g/g)";

const REFERENCE_COLOR: RGBColor = RGBColor(128, 128, 128);
const MARKER_SIZE: u32 = 3;

/// Chart appearance settings
#[derive(Builder, Debug, Clone)]
pub struct PlotConfig {
    /// Title drawn above the chart
    #[builder(setter(into), default = "DEFAULT_TITLE.to_string()")]
    pub title: String,
    /// X axis description
    #[builder(setter(into), default = "DEFAULT_X_LABEL.to_string()")]
    pub x_label: String,
    /// Y axis description
    #[builder(setter(into), default = "DEFAULT_Y_LABEL.to_string()")]
    pub y_label: String,
    /// Chart width in pixels
    #[builder(default = "1000")]
    pub width: u32,
    /// Chart height in pixels
    #[builder(default = "600")]
    pub height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfigBuilder::default().build().unwrap()
    }
}

/// Errors arising while drawing the chart
#[derive(Debug, Error)]
pub enum PlotError {
    /// Reference lines need a first and a last row
    #[error("yield table has {0} rows, the chart needs at least 2")]
    TooFewRows(usize),
    /// The drawing backend failed
    #[error("drawing backend failed: {0}")]
    Backend(String),
}

fn to_backend_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> PlotError {
    PlotError::Backend(err.to_string())
}

/// Straight segment between the first and last rows of the table, with the
/// oleic acid mass on x and `value` of the row on y
fn reference_segment(
    table: &YieldTable,
    value: fn(&SweepPoint) -> f64,
) -> Result<[(f64, f64); 2], PlotError> {
    let (first, last) = match (table.first(), table.last()) {
        (Some(first), Some(last)) if table.len() >= 2 => (first, last),
        _ => return Err(PlotError::TooFewRows(table.len())),
    };
    Ok([
        (first.oleic_acid_grams, value(first)),
        (last.oleic_acid_grams, value(last)),
    ])
}

fn padded(min: f64, max: f64) -> Range<f64> {
    let span = max - min;
    let pad = if span > 0. { span * 0.05 } else { 0.5 };
    (min - pad)..(max + pad)
}

fn axis_ranges(table: &YieldTable) -> (Range<f64>, Range<f64>) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for point in table.points() {
        x_min = x_min.min(point.oleic_acid_grams);
        x_max = x_max.max(point.oleic_acid_grams);
        y_min = y_min.min(point.beta_carotene_grams).min(point.co2_grams);
        y_max = y_max.max(point.beta_carotene_grams).max(point.co2_grams);
    }
    (padded(x_min, x_max), padded(y_min, y_max))
}

/// Draw both curves onto an arbitrary drawing area
pub fn draw_yield_curve<DB: DrawingBackend>(
    table: &YieldTable,
    area: &DrawingArea<DB, Shift>,
    config: &PlotConfig,
) -> Result<(), PlotError> {
    if table.len() < 2 {
        return Err(PlotError::TooFewRows(table.len()));
    }
    let (x_range, y_range) = axis_ranges(table);

    area.fill(&WHITE).map_err(to_backend_error)?;
    let mut chart = ChartBuilder::on(area)
        .caption(&config.title, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(x_range, y_range)
        .map_err(to_backend_error)?;
    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .draw()
        .map_err(to_backend_error)?;

    let yield_points: Vec<(f64, f64)> = table
        .points()
        .iter()
        .map(|p| (p.oleic_acid_grams, p.beta_carotene_grams))
        .collect();
    let co2_points: Vec<(f64, f64)> = table
        .points()
        .iter()
        .map(|p| (p.oleic_acid_grams, p.co2_grams))
        .collect();

    chart
        .draw_series(LineSeries::new(yield_points, BLUE.stroke_width(2)).point_size(MARKER_SIZE))
        .map_err(to_backend_error)?
        .label(YIELD_SERIES_LABEL)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));
    chart
        .draw_series(DashedLineSeries::new(
            reference_segment(table, |p| p.beta_carotene_grams)?,
            8,
            4,
            REFERENCE_COLOR.stroke_width(1),
        ))
        .map_err(to_backend_error)?;

    chart
        .draw_series(LineSeries::new(co2_points, GREEN.stroke_width(2)).point_size(MARKER_SIZE))
        .map_err(to_backend_error)?
        .label(CO2_SERIES_LABEL)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.stroke_width(2)));
    chart
        .draw_series(DashedLineSeries::new(
            reference_segment(table, |p| p.co2_grams)?,
            8,
            4,
            REFERENCE_COLOR.stroke_width(1),
        ))
        .map_err(to_backend_error)?;

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(to_backend_error)?;
    Ok(())
}

/// Render the chart as an SVG file at `path`
pub fn render_yield_curve<P: AsRef<Path>>(
    table: &YieldTable,
    path: P,
    config: &PlotConfig,
) -> Result<(), PlotError> {
    let area =
        SVGBackend::new(path.as_ref(), (config.width, config.height)).into_drawing_area();
    draw_yield_curve(table, &area, config)?;
    area.present().map_err(to_backend_error)?;
    info!("wrote yield curve to {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(
        glucose_grams: f64,
        oleic_acid_grams: f64,
        beta_carotene_grams: f64,
        co2_grams: f64,
    ) -> SweepPoint {
        SweepPoint {
            glucose_grams,
            oleic_acid_grams,
            beta_carotene_grams,
            co2_grams,
        }
    }

    fn two_row_table() -> YieldTable {
        YieldTable::new(vec![
            point(0., 1., 0.1, 0.05),
            point(1., 0., 0.9, 0.4),
        ])
    }

    #[test]
    fn reference_segment_connects_endpoints() {
        let table = two_row_table();
        let yield_segment = reference_segment(&table, |p| p.beta_carotene_grams).unwrap();
        assert_eq!(yield_segment, [(1., 0.1), (0., 0.9)]);
        let co2_segment = reference_segment(&table, |p| p.co2_grams).unwrap();
        assert_eq!(co2_segment, [(1., 0.05), (0., 0.4)]);
    }

    #[test]
    fn rejects_short_tables() {
        let empty = YieldTable::new(Vec::new());
        let single = YieldTable::new(vec![point(0., 1., 0.1, 0.05)]);
        for table in [empty, single] {
            let rows = table.len();
            let mut buf = String::new();
            let area = SVGBackend::with_string(&mut buf, (640, 480)).into_drawing_area();
            match draw_yield_curve(&table, &area, &PlotConfig::default()) {
                Err(PlotError::TooFewRows(n)) => assert_eq!(n, rows),
                other => panic!("unexpected result {other:?}"),
            }
        }
    }

    #[test]
    fn renders_svg() {
        let points = (0..41)
            .map(|step| {
                let glucose = step as f64 * 0.025;
                point(glucose, 1. - glucose, 0.05 + 0.3 * glucose, 0.4 - 0.2 * glucose)
            })
            .collect();
        let table = YieldTable::new(points);

        let mut buf = String::new();
        {
            let area = SVGBackend::with_string(&mut buf, (1000, 600)).into_drawing_area();
            draw_yield_curve(&table, &area, &PlotConfig::default()).unwrap();
            area.present().unwrap();
        }
        assert!(buf.contains("<svg"));
    }

    #[test]
    fn config_defaults() {
        let config = PlotConfig::default();
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.x_label, DEFAULT_X_LABEL);
        assert_eq!(config.y_label, DEFAULT_Y_LABEL);
        assert_eq!((config.width, config.height), (1000, 600));

        let custom = PlotConfigBuilder::default()
            .title("Yield across feed ratios")
            .build()
            .unwrap();
        assert_eq!(custom.title, "Yield across feed ratios");
        assert_eq!(custom.y_label, DEFAULT_Y_LABEL);
    }
}
