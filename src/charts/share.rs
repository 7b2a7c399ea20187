//! Category share pie chart

use std::f64::consts::PI;

use crate::config::ChartSettings;
use crate::models::Money;
use crate::reports::aggregate::{percentage_shares, CategoryAggregate};

use super::svg::{check_finite, Anchor, SvgDocument, PALETTE};
use super::{settle, ChartError, ChartKind, ChartResult};

/// Slices start at 12 o'clock and run counter-clockwise
const START_ANGLE_DEG: f64 = 90.0;

/// Render one slice per category, labelled with name and share
pub fn render_category_share(
    categories: &[CategoryAggregate],
    settings: &ChartSettings,
) -> ChartResult {
    if categories.is_empty() {
        return ChartResult::Unavailable;
    }
    settle(ChartKind::CategoryShare, draw(categories, settings))
}

/// Slice label, e.g. `Food (42.9%)`
pub fn slice_label(category: &str, share: f64) -> String {
    format!("{} ({:.1}%)", category, share)
}

fn draw(categories: &[CategoryAggregate], settings: &ChartSettings) -> Result<String, ChartError> {
    let total: Money = categories.iter().map(|c| c.total).sum();
    if !total.is_positive() {
        return Err(ChartError::NonPositiveTotal(total.cents()));
    }
    if categories.iter().any(|c| c.total.cents() < 0) {
        return Err(ChartError::Degenerate("negative slice".into()));
    }

    let mut doc = SvgDocument::new(settings.pie_width, settings.pie_height)?;
    let cx = doc.width() / 2.0;
    let cy = doc.height() / 2.0 + 20.0;
    let radius = doc.width().min(doc.height()) * 0.32;
    if radius < 1.0 {
        return Err(ChartError::Degenerate(format!("pie radius {:.2}", radius)));
    }

    let shares = percentage_shares(categories);
    let mut start = START_ANGLE_DEG;

    for (i, (category, share)) in categories.iter().zip(&shares).enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let sweep = share / 100.0 * 360.0;
        let end = start + sweep;

        if sweep >= 359.999 {
            doc.circle(cx, cy, radius, color)?;
        } else if sweep > 0.0 {
            let (x0, y0) = polar(cx, cy, radius, start);
            let (x1, y1) = polar(cx, cy, radius, end);
            check_finite(&[x0, y0, x1, y1])?;
            let large_arc = if sweep > 180.0 { 1 } else { 0 };
            // sweep-flag 0: counter-clockwise on screen
            let data = format!(
                "M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 0 {:.2} {:.2} Z",
                cx, cy, x0, y0, radius, radius, large_arc, x1, y1
            );
            doc.path(&data, color)?;
        }

        let middle = start + sweep / 2.0;
        let (px, py) = polar(cx, cy, radius * 0.6, middle);
        doc.text(px, py + 5.0, &format!("{:.1}%", share), 14, Anchor::Middle, None)?;

        let (lx, ly) = polar(cx, cy, radius * 1.12, middle);
        let anchor = if (lx - cx).abs() < 1.0 {
            Anchor::Middle
        } else if lx > cx {
            Anchor::Start
        } else {
            Anchor::End
        };
        doc.text(lx, ly + 5.0, &slice_label(&category.category, *share), 14, anchor, None)?;

        start = end;
    }

    doc.text(cx, 40.0, "Spending by Category", 18, Anchor::Middle, None)?;

    Ok(doc.finish())
}

/// Point on a circle; angle in degrees, counter-clockwise from 3 o'clock
fn polar(cx: f64, cy: f64, r: f64, angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg * PI / 180.0;
    (cx + r * rad.cos(), cy - r * rad.sin())
}
