//! Interactive pie chart of the top aggregated languages.

use std::fmt::Write;

use crate::snapshot::ChartEntry;

use super::arc::{arc_path, place_labels, pie_layout, slice_tooltip};
use super::builder::SvgBuilder;
use super::category::FilterState;
use super::element::SvgElement;
use super::format::html_escape;
use super::hover::{ENTRY_STAGGER_MS, REST_SHAPE};
use super::style::{ChartColor, OBSERVABLE10, palette_color};

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 600.0;

/// Pie chart over a language entry list, parameterized by an
/// optional category filter (`sort -> filter -> truncate ->
/// layout` pipeline; the filter is a pipeline stage, not a render-time
/// branch).
#[derive(Debug)]
pub struct PieChart {
    title: String,
    entries: Vec<ChartEntry>,
    filter: FilterState,
}

impl PieChart {
    /// Entries are sorted descending by value here, so the truncation
    /// stage always keeps the top-N regardless of input order. The
    /// sort is stable; ties keep input order.
    #[must_use]
    pub fn new(title: impl Into<String>, mut entries: Vec<ChartEntry>) -> Self {
        entries.sort_by(|a, b| b.value.cmp(&a.value));
        Self {
            title: title.into(),
            entries,
            filter: FilterState::default(),
        }
    }

    #[must_use]
    pub fn with_filter(mut self, filter: FilterState) -> Self {
        self.filter = filter;
        self
    }

    /// Entries actually rendered after the filter/truncate stage.
    #[must_use]
    pub fn visible_entries(&self) -> Vec<ChartEntry> {
        self.filter.apply(&self.entries)
    }

    fn render_slices(&self, output: &mut String) {
        let visible = self.visible_entries();
        let slices = pie_layout(&visible);
        let labels = place_labels(REST_SHAPE, &slices);

        let _ = writeln!(output, r#"<g transform="translate(300, 300)">"#);

        for (i, slice) in slices.iter().enumerate() {
            let path = arc_path(REST_SHAPE, slice);
            if path.is_empty() {
                continue;
            }
            let color = palette_color(OBSERVABLE10, i).to_css();
            let tooltip = slice_tooltip(slice);
            let delay = ENTRY_STAGGER_MS * u32::try_from(i).unwrap_or(0);
            let _ = writeln!(
                output,
                r#"    <path class="slice" d="{path}" fill="{color}" stroke="{color}" data-index="{i}" data-tip="{tooltip}" style="animation-delay: {delay}ms">
        <title>{tooltip}</title>
    </path>"#
            );
        }

        for (i, (slice, (x, y))) in slices.iter().zip(&labels).enumerate() {
            if slice.span() <= 0.0 {
                continue;
            }
            let label = html_escape(&slice.label);
            let _ = writeln!(
                output,
                r#"    <text class="slice-label" x="{x:.1}" y="{y:.1}" data-index="{i}">{label}</text>"#
            );
        }

        output.push_str("</g>");
    }
}

impl SvgElement for PieChart {
    fn render(&self) -> String {
        let visible = self.visible_entries();
        let total: u64 = visible.iter().map(|e| e.value).sum();

        let mut builder = SvgBuilder::new(WIDTH, HEIGHT)
            .with_class("pie-chart")
            .with_title(self.title.clone());

        if visible.is_empty() || total == 0 {
            let text_color = ChartColor::css_var("text-muted").to_css();
            builder = builder.push_raw(format!(
                r#"<text x="{}" y="{}" text-anchor="middle" fill="{text_color}" font-size="14">No language data</text>"#,
                WIDTH / 2.0,
                HEIGHT / 2.0
            ));
            return builder.build();
        }

        let mut slices_svg = String::new();
        self.render_slices(&mut slices_svg);
        builder.push_raw(slices_svg).build()
    }
}

#[cfg(test)]
#[path = "pie_tests.rs"]
mod tests;
