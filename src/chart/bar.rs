//! Interactive bar chart over the full aggregated language list.

use std::fmt::Write;

use crate::snapshot::ChartEntry;

use super::builder::SvgBuilder;
use super::element::{Axis, SvgElement, Tick};
use super::format::{format_grouped, format_si, html_escape};
use super::scale::{BandScale, LogScale};
use super::style::{ChartColor, TABLEAU10, darken_hsl, palette_color};

const WIDTH: f64 = 700.0;
const HEIGHT: f64 = 400.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 50.0;
const MARGIN_LEFT: f64 = 100.0;

/// Band padding between bars, as a fraction of the step.
const BAND_PADDING: f64 = 0.1;
/// Headroom multiplier on the log domain ceiling.
const DOMAIN_HEADROOM: f64 = 1.5;
/// Log axis tick count.
const TICK_COUNT: usize = 5;
/// Tooltip backgrounds darken the bar fill by this percentage.
const TOOLTIP_DARKEN_PERCENT: f64 = 10.0;

/// Vertical bar chart: one bar per language, log-scaled heights so
/// orders-of-magnitude differences stay visible.
#[derive(Debug)]
pub struct BarChart {
    title: String,
    entries: Vec<ChartEntry>,
}

impl BarChart {
    /// Entries are sorted descending by value here; bars always run
    /// largest to smallest regardless of input order.
    #[must_use]
    pub fn new(title: impl Into<String>, mut entries: Vec<ChartEntry>) -> Self {
        entries.sort_by(|a, b| b.value.cmp(&a.value));
        Self {
            title: title.into(),
            entries,
        }
    }

    fn x_scale(&self) -> BandScale {
        let domain = self
            .entries
            .iter()
            .map(|e| e.language.clone())
            .collect::<Vec<_>>();
        BandScale::new(domain, (MARGIN_LEFT, WIDTH - MARGIN_RIGHT), BAND_PADDING)
    }

    #[allow(clippy::cast_precision_loss)]
    fn y_scale(&self) -> LogScale {
        let max = self.entries.iter().map(|e| e.value).max().unwrap_or(0);
        LogScale::new(
            (1.0, max as f64 * DOMAIN_HEADROOM),
            (HEIGHT - MARGIN_BOTTOM, MARGIN_TOP),
        )
    }

    #[allow(clippy::cast_precision_loss)]
    fn render_bars(&self, output: &mut String, x: &BandScale, y: &LogScale) {
        let baseline = HEIGHT - MARGIN_BOTTOM;
        for (i, entry) in self.entries.iter().enumerate() {
            let Some(bar_x) = x.position(&entry.language) else {
                continue;
            };
            let bar_y = y.scale(entry.value as f64);
            let bar_height = baseline - bar_y;

            let color = palette_color(TABLEAU10, i);
            let fill = color.to_css();
            let tip_background = match &color {
                ChartColor::Hex(hex) => darken_hsl(hex, TOOLTIP_DARKEN_PERCENT),
                ChartColor::CssVar(_) => fill.clone(),
            };
            let tooltip = format!(
                "{}: {}",
                html_escape(&entry.language),
                format_grouped(entry.value)
            );

            let _ = writeln!(
                output,
                r#"<rect class="bar" x="{bar_x:.2}" y="{bar_y:.2}" width="{:.2}" height="{bar_height:.2}" fill="{fill}" data-tip="{tooltip}" data-tip-bg="{tip_background}">
    <title>{tooltip}</title>
</rect>"#,
                x.bandwidth()
            );
        }
    }

    fn bottom_axis(&self, x: &BandScale) -> Axis {
        let ticks = x
            .domain()
            .iter()
            .filter_map(|language| {
                x.position(language)
                    .map(|pos| Tick::new(pos - MARGIN_LEFT + x.bandwidth() / 2.0, language))
            })
            .collect();
        Axis::horizontal(MARGIN_LEFT, HEIGHT - MARGIN_BOTTOM, WIDTH - MARGIN_LEFT - MARGIN_RIGHT)
            .with_ticks(ticks)
    }

    fn left_axis(&self, y: &LogScale) -> Axis {
        let baseline = HEIGHT - MARGIN_BOTTOM;
        let ticks = y
            .ticks(TICK_COUNT)
            .into_iter()
            .map(|value| Tick::new(baseline - y.scale(value), format_si(value)))
            .collect();
        Axis::vertical(MARGIN_LEFT, baseline, baseline - MARGIN_TOP).with_ticks(ticks)
    }
}

impl SvgElement for BarChart {
    fn render(&self) -> String {
        let mut builder = SvgBuilder::new(WIDTH, HEIGHT)
            .with_class("bar-chart")
            .with_title(self.title.clone());

        if self.entries.is_empty() {
            let text_color = ChartColor::css_var("text-muted").to_css();
            builder = builder.push_raw(format!(
                r#"<text x="{}" y="{}" text-anchor="middle" fill="{text_color}" font-size="14">No language data</text>"#,
                WIDTH / 2.0,
                HEIGHT / 2.0
            ));
            return builder.build();
        }

        let x = self.x_scale();
        let y = self.y_scale();

        let mut bars = String::new();
        self.render_bars(&mut bars, &x, &y);

        builder
            .push_raw(bars)
            .push_element(&self.bottom_axis(&x))
            .push_element(&self.left_axis(&y))
            .build()
    }
}

#[cfg(test)]
#[path = "bar_tests.rs"]
mod tests;
