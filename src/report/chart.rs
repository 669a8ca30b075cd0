use crate::hedging::{SimulationResult, SweepResults};
use crate::utils::date_axis;
use chrono::NaiveDate;
use log::info;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::path::Path;

const ORANGE: RGBColor = RGBColor(255, 127, 14);
const DARK_GREEN: RGBColor = RGBColor(44, 160, 44);
const STEEL_BLUE: RGBColor = RGBColor(31, 119, 180);

/// One chart row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Panel {
    Price,
    Position,
    Value,
}

impl Panel {
    const ROWS: [Panel; 3] = [Panel::Price, Panel::Position, Panel::Value];

    fn title(self) -> &'static str {
        match self {
            Panel::Price => "Collateral Asset Price",
            Panel::Position => "Hedge Position",
            Panel::Value => "Portfolio Value",
        }
    }

    fn y_desc(self) -> &'static str {
        match self {
            Panel::Price => "Price",
            Panel::Position => "Position",
            Panel::Value => "Value",
        }
    }

    fn color(self) -> RGBColor {
        match self {
            Panel::Price => STEEL_BLUE,
            Panel::Position => ORANGE,
            Panel::Value => DARK_GREEN,
        }
    }

    fn values(self, result: &SimulationResult) -> &[f64] {
        match self {
            Panel::Price => result.prices.as_slice(),
            Panel::Position => &result.hedge_positions,
            Panel::Value => &result.portfolio_values,
        }
    }
}

/// Multi-panel SVG report
///
/// # Layout
///
/// ```text
///            delta[0]   delta[1]   ...
/// row 0:     price      price
/// row 1:     position   position
/// row 2:     value      value
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ReportRenderer {
    width: u32,
    height: u32,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new(1400, 1000)
    }
}

impl ReportRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Render the sweep as an SVG document
    pub fn render_svg(
        &self,
        results: &SweepResults,
        start_date: NaiveDate,
    ) -> crate::Result<String> {
        if results.is_empty() {
            return Err(crate::Error::Render("No results to render".to_string()));
        }

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height))
                .into_drawing_area();
            root.fill(&WHITE).map_err(render_error)?;

            let columns: usize = results.len();
            let areas = root.split_evenly((Panel::ROWS.len(), columns));

            for (column, result) in results.iter().enumerate() {
                let dates: Vec<NaiveDate> =
                    date_axis(start_date, result.prices.len().saturating_sub(1));

                for (row, panel) in Panel::ROWS.iter().enumerate() {
                    draw_panel(&areas[row * columns + column], *panel, result, &dates)?;
                }
            }

            root.present().map_err(render_error)?;
        }

        Ok(svg)
    }

    /// Render the sweep and write it to `path`
    pub fn render_to_file(
        &self,
        results: &SweepResults,
        start_date: NaiveDate,
        path: impl AsRef<Path>,
    ) -> crate::Result<()> {
        let svg: String = self.render_svg(results, start_date)?;
        std::fs::write(path.as_ref(), svg)?;

        info!("Chart written to {}", path.as_ref().display());
        Ok(())
    }
}

fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    panel: Panel,
    result: &SimulationResult,
    dates: &[NaiveDate],
) -> crate::Result<()> {
    let values: &[f64] = panel.values(result);
    let (y_min, y_max) = value_range(values);
    let x_max: f64 = values.len().saturating_sub(1).max(1) as f64;
    let color: RGBColor = panel.color();

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("{} (Delta={})", panel.title(), result.delta),
            ("sans-serif", 16),
        )
        .margin(8)
        .x_label_area_size(32)
        .y_label_area_size(56)
        .build_cartesian_2d(0f64..x_max, y_min..y_max)
        .map_err(render_error)?;

    let date_label = |x: &f64| -> String {
        dates
            .get(x.round().max(0.0) as usize)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    };

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc(panel.y_desc())
        .x_labels(4)
        .y_labels(6)
        .x_label_formatter(&date_label)
        .draw()
        .map_err(render_error)?;

    // Non-finite points cannot be placed on the axis
    let points = values
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .map(|(day, &v)| (day as f64, v));

    chart
        .draw_series(LineSeries::new(points, color.stroke_width(2)))
        .map_err(render_error)?
        .label(panel.title())
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
        });

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(render_error)?;

    Ok(())
}

/// Y range over the finite values, padded so flat series stay visible
fn value_range(values: &[f64]) -> (f64, f64) {
    let mut finite = values.iter().copied().filter(|v| v.is_finite());
    let Some(first) = finite.next() else {
        return (-1.0, 1.0);
    };

    let (min, max) = finite.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let span: f64 = max - min;
    let pad: f64 = if span > 0.0 {
        span * 0.05
    } else {
        (max.abs() * 0.05).max(1.0)
    };

    (min - pad, max + pad)
}

fn render_error<E: std::error::Error + Send + Sync>(
    err: DrawingAreaErrorKind<E>,
) -> crate::Error {
    crate::Error::Render(err.to_string())
}
