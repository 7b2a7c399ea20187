//! Minimal SVG document builder used by the chart renderers

use super::ChartError;

/// Slice and line colours, in the order they are handed out
pub const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// An SVG document under construction
pub struct SvgDocument {
    width: u32,
    height: u32,
    body: String,
}

impl SvgDocument {
    /// Start a document with a white background
    pub fn new(width: u32, height: u32) -> Result<Self, ChartError> {
        if width == 0 || height == 0 {
            return Err(ChartError::Degenerate(format!(
                "canvas of {}x{} pixels",
                width, height
            )));
        }
        let mut doc = Self {
            width,
            height,
            body: String::new(),
        };
        doc.body.push_str(&format!(
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"#ffffff\"/>\n",
            width, height
        ));
        Ok(doc)
    }

    pub fn width(&self) -> f64 {
        f64::from(self.width)
    }

    pub fn height(&self) -> f64 {
        f64::from(self.height)
    }

    pub fn line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: &str,
        width: f64,
    ) -> Result<(), ChartError> {
        check_finite(&[x1, y1, x2, y2])?;
        self.body.push_str(&format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" \
             stroke=\"{}\" stroke-width=\"{}\"/>\n",
            x1, y1, x2, y2, stroke, width
        ));
        Ok(())
    }

    pub fn polyline(&mut self, points: &[(f64, f64)], stroke: &str) -> Result<(), ChartError> {
        let mut coords = String::new();
        for &(x, y) in points {
            check_finite(&[x, y])?;
            if !coords.is_empty() {
                coords.push(' ');
            }
            coords.push_str(&format!("{:.2},{:.2}", x, y));
        }
        self.body.push_str(&format!(
            "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>\n",
            coords, stroke
        ));
        Ok(())
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) -> Result<(), ChartError> {
        check_finite(&[cx, cy, r])?;
        self.body.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\" \
             stroke=\"#ffffff\" stroke-width=\"1\"/>\n",
            cx, cy, r, fill
        ));
        Ok(())
    }

    /// A closed path given as raw SVG path data
    pub fn path(&mut self, data: &str, fill: &str) -> Result<(), ChartError> {
        self.body.push_str(&format!(
            "<path d=\"{}\" fill=\"{}\" stroke=\"#ffffff\" stroke-width=\"1\"/>\n",
            data, fill
        ));
        Ok(())
    }

    /// Text, optionally rotated (degrees, clockwise) around its anchor point
    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        size: u32,
        anchor: Anchor,
        rotate: Option<f64>,
    ) -> Result<(), ChartError> {
        check_finite(&[x, y])?;
        let transform = match rotate {
            Some(deg) => format!(" transform=\"rotate({:.1} {:.2} {:.2})\"", deg, x, y),
            None => String::new(),
        };
        self.body.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" font-family=\"sans-serif\" \
             font-size=\"{}\" text-anchor=\"{}\"{}>{}</text>\n",
            x,
            y,
            size,
            anchor.as_str(),
            transform,
            escape_xml(content)
        ));
        Ok(())
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

pub fn check_finite(values: &[f64]) -> Result<(), ChartError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::NonFinite)
    }
}

pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
