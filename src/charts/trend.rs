//! Monthly spending line chart

use crate::config::ChartSettings;
use crate::reports::aggregate::MonthlyAggregate;

use super::svg::{Anchor, SvgDocument, PALETTE};
use super::{settle, ChartError, ChartKind, ChartResult};

/// Month labels are rotated once there are more than this many
const ROTATE_LABELS_AFTER: usize = 6;

const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 70.0;
const MARGIN_BOTTOM_ROTATED: f64 = 100.0;

/// Render one connected line with a marker per month
///
/// Months are plotted in the order given.
pub fn render_monthly_trend(monthly: &[MonthlyAggregate], settings: &ChartSettings) -> ChartResult {
    if monthly.is_empty() {
        return ChartResult::Unavailable;
    }
    settle(ChartKind::MonthlyTrend, draw(monthly, settings))
}

fn draw(monthly: &[MonthlyAggregate], settings: &ChartSettings) -> Result<String, ChartError> {
    let mut doc = SvgDocument::new(settings.trend_width, settings.trend_height)?;

    let rotate_labels = monthly.len() > ROTATE_LABELS_AFTER;
    let bottom = if rotate_labels {
        MARGIN_BOTTOM_ROTATED
    } else {
        MARGIN_BOTTOM
    };
    let plot_width = doc.width() - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = doc.height() - MARGIN_TOP - bottom;
    if plot_width <= 0.0 || plot_height <= 0.0 {
        return Err(ChartError::Degenerate(format!(
            "plot area of {:.0}x{:.0} pixels",
            plot_width, plot_height
        )));
    }
    let plot_bottom = MARGIN_TOP + plot_height;

    let max_total = monthly
        .iter()
        .map(|m| m.total.as_f64())
        .fold(0.0_f64, f64::max);
    if max_total <= 0.0 {
        return Err(ChartError::NonPositiveTotal(
            monthly.iter().map(|m| m.total.cents()).max().unwrap_or(0),
        ));
    }
    let (y_max, step) = axis_scale(max_total);

    let y_of = |amount: f64| plot_bottom - amount / y_max * plot_height;
    let slot = plot_width / monthly.len() as f64;
    let x_of = |index: usize| MARGIN_LEFT + (index as f64 + 0.5) * slot;

    // Grid and y tick labels
    let ticks = (y_max / step).round() as usize;
    for i in 0..=ticks {
        let value = step * i as f64;
        let y = y_of(value);
        doc.line(MARGIN_LEFT, y, MARGIN_LEFT + plot_width, y, "#dddddd", 1.0)?;
        doc.text(MARGIN_LEFT - 8.0, y + 4.0, &format_tick(value, step), 12, Anchor::End, None)?;
    }

    // Axes
    doc.line(MARGIN_LEFT, MARGIN_TOP, MARGIN_LEFT, plot_bottom, "#333333", 1.0)?;
    doc.line(MARGIN_LEFT, plot_bottom, MARGIN_LEFT + plot_width, plot_bottom, "#333333", 1.0)?;

    let points: Vec<(f64, f64)> = monthly
        .iter()
        .enumerate()
        .map(|(i, m)| (x_of(i), y_of(m.total.as_f64())))
        .collect();

    // Vertical grid and month labels
    for (i, m) in monthly.iter().enumerate() {
        let x = x_of(i);
        doc.line(x, MARGIN_TOP, x, plot_bottom, "#eeeeee", 1.0)?;
        let label = m.month.to_string();
        if rotate_labels {
            doc.text(x, plot_bottom + 16.0, &label, 12, Anchor::End, Some(-45.0))?;
        } else {
            doc.text(x, plot_bottom + 20.0, &label, 12, Anchor::Middle, None)?;
        }
    }

    doc.polyline(&points, PALETTE[0])?;
    for &(x, y) in &points {
        doc.circle(x, y, 4.5, PALETTE[0])?;
    }

    let center_x = MARGIN_LEFT + plot_width / 2.0;
    doc.text(center_x, MARGIN_TOP / 2.0 + 6.0, "Monthly Spending", 18, Anchor::Middle, None)?;
    doc.text(center_x, doc.height() - 15.0, "Month", 14, Anchor::Middle, None)?;
    let mid_y = MARGIN_TOP + plot_height / 2.0;
    doc.text(22.0, mid_y, "Amount ($)", 14, Anchor::Middle, Some(-90.0))?;

    Ok(doc.finish())
}

/// Round the axis maximum up to a "nice" value and pick a tick step
fn axis_scale(max_value: f64) -> (f64, f64) {
    let raw_step = max_value / 5.0;
    let magnitude = 10_f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 2.5 {
        2.5
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = nice * magnitude;
    ((max_value / step).ceil() * step, step)
}

fn format_tick(value: f64, step: f64) -> String {
    if step >= 1.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}
