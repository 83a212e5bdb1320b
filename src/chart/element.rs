//! Primitive SVG elements shared by the chart components.

use std::fmt::Write;

use super::format::html_escape;
use super::style::{ChartColor, TextAnchor};

/// Axis orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    /// Labels below the axis line (bottom axis).
    Horizontal,
    /// Labels left of the axis line (left axis).
    Vertical,
}

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// One axis tick: pixel offset along the axis plus its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Distance from the axis origin in pixels. For a vertical axis
    /// this grows upward from the bottom end.
    pub offset: f64,
    pub label: String,
}

impl Tick {
    #[must_use]
    pub fn new(offset: f64, label: impl Into<String>) -> Self {
        Self {
            offset,
            label: label.into(),
        }
    }
}

/// Axis line with ticks and labels.
#[derive(Debug, Clone)]
pub struct Axis {
    pub orientation: AxisOrientation,
    /// Axis origin: left end for horizontal, bottom end for vertical.
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub ticks: Vec<Tick>,
    pub color: ChartColor,
    pub tick_length: f64,
    pub font_size: f64,
}

impl Axis {
    #[must_use]
    pub fn horizontal(x: f64, y: f64, length: f64) -> Self {
        Self {
            orientation: AxisOrientation::Horizontal,
            x,
            y,
            length,
            ticks: Vec::new(),
            color: ChartColor::css_var("text-muted"),
            tick_length: 6.0,
            font_size: 11.0,
        }
    }

    #[must_use]
    pub fn vertical(x: f64, y: f64, length: f64) -> Self {
        Self {
            orientation: AxisOrientation::Vertical,
            x,
            y,
            length,
            ticks: Vec::new(),
            color: ChartColor::css_var("text-muted"),
            tick_length: 6.0,
            font_size: 11.0,
        }
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: Vec<Tick>) -> Self {
        self.ticks = ticks;
        self
    }

    fn render_tick(&self, tick: &Tick, output: &mut String) {
        let color = self.color.to_css();
        let label = html_escape(&tick.label);
        match self.orientation {
            AxisOrientation::Horizontal => {
                let tx = self.x + tick.offset;
                let _ = writeln!(
                    output,
                    r#"<line x1="{tx}" y1="{}" x2="{tx}" y2="{}" stroke="{color}" stroke-width="1"/>"#,
                    self.y,
                    self.y + self.tick_length
                );
                let _ = writeln!(
                    output,
                    r#"<text x="{tx}" y="{}" text-anchor="{}" fill="{color}" font-size="{}">{label}</text>"#,
                    self.y + self.tick_length + self.font_size + 2.0,
                    TextAnchor::Middle,
                    self.font_size
                );
            }
            AxisOrientation::Vertical => {
                let ty = self.y - tick.offset;
                let _ = writeln!(
                    output,
                    r#"<line x1="{}" y1="{ty}" x2="{}" y2="{ty}" stroke="{color}" stroke-width="1"/>"#,
                    self.x,
                    self.x - self.tick_length
                );
                let _ = writeln!(
                    output,
                    r#"<text x="{}" y="{}" text-anchor="{}" fill="{color}" font-size="{}">{label}</text>"#,
                    self.x - self.tick_length - 4.0,
                    ty + self.font_size / 3.0,
                    TextAnchor::End,
                    self.font_size
                );
            }
        }
    }
}

impl SvgElement for Axis {
    fn render(&self) -> String {
        let mut output = String::new();
        let color = self.color.to_css();

        let (end_x, end_y) = match self.orientation {
            AxisOrientation::Horizontal => (self.x + self.length, self.y),
            AxisOrientation::Vertical => (self.x, self.y - self.length),
        };
        let _ = writeln!(
            output,
            r#"<line x1="{}" y1="{}" x2="{end_x}" y2="{end_y}" stroke="{color}" stroke-width="1"/>"#,
            self.x, self.y
        );

        for tick in &self.ticks {
            self.render_tick(tick, &mut output);
        }

        output
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
