//! Chart rendering
//!
//! Renders aggregates as self-contained SVG images. Rendering never fails
//! outward: empty input and internal errors both come back as
//! [`ChartResult::Unavailable`], and internal errors are logged.

pub mod share;
pub mod svg;
pub mod trend;

pub use share::render_category_share;
pub use trend::render_monthly_trend;

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine};
use thiserror::Error;

/// MIME type of every rendered chart
pub const CHART_MIME: &str = "image/svg+xml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    MonthlyTrend,
    CategoryShare,
}

impl ChartKind {
    /// Default file name when a chart is written to disk
    pub fn file_name(&self) -> &'static str {
        match self {
            ChartKind::MonthlyTrend => "monthly.svg",
            ChartKind::CategoryShare => "category.svg",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::MonthlyTrend => write!(f, "monthly_trend"),
            ChartKind::CategoryShare => write!(f, "category_share"),
        }
    }
}

/// A rendered chart image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    kind: ChartKind,
    svg: String,
}

impl Chart {
    pub(crate) fn new(kind: ChartKind, svg: String) -> Self {
        Self { kind, svg }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    /// The SVG document
    pub fn as_svg(&self) -> &str {
        &self.svg
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.svg.as_bytes()
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.svg.as_bytes())
    }

    /// A `data:` URI suitable for an `<img src>` attribute
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", CHART_MIME, self.to_base64())
    }
}

/// Outcome of rendering a chart
///
/// `Unavailable` is a normal, displayable state ("no data"), not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartResult {
    Rendered(Chart),
    Unavailable,
}

impl ChartResult {
    pub fn is_rendered(&self) -> bool {
        matches!(self, ChartResult::Rendered(_))
    }

    pub fn chart(&self) -> Option<&Chart> {
        match self {
            ChartResult::Rendered(chart) => Some(chart),
            ChartResult::Unavailable => None,
        }
    }

    pub fn data_uri(&self) -> Option<String> {
        self.chart().map(Chart::data_uri)
    }
}

/// Internal rendering failures; never leaves this module
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("degenerate chart: {0}")]
    Degenerate(String),

    #[error("non-finite coordinate")]
    NonFinite,

    #[error("total amount must be positive, got {0} cents")]
    NonPositiveTotal(i64),
}

/// Turn a render attempt into a `ChartResult`, logging any failure
fn settle(kind: ChartKind, result: Result<String, ChartError>) -> ChartResult {
    match result {
        Ok(svg) => ChartResult::Rendered(Chart::new(kind, svg)),
        Err(err) => {
            tracing::warn!(
                target: "expense_tracker",
                chart = %kind,
                error = %err,
                "chart_render_failed"
            );
            ChartResult::Unavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri() {
        let chart = Chart::new(ChartKind::MonthlyTrend, "<svg/>".to_string());
        assert_eq!(chart.to_base64(), "PHN2Zy8+");
        assert_eq!(chart.data_uri(), "data:image/svg+xml;base64,PHN2Zy8+");
    }

    #[test]
    fn test_settle_degrades_errors() {
        let result = settle(ChartKind::CategoryShare, Err(ChartError::NonFinite));
        assert_eq!(result, ChartResult::Unavailable);
        assert!(result.data_uri().is_none());
    }

    #[test]
    fn test_settle_keeps_rendered_chart() {
        let result = settle(ChartKind::CategoryShare, Ok("<svg/>".to_string()));
        assert!(result.is_rendered());
        assert_eq!(result.chart().unwrap().kind(), ChartKind::CategoryShare);
    }
}
