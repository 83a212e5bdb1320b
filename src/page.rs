//! Single-page HTML dashboard embedding the SVG charts.
//!
//! The page is self-contained: chart geometry is pre-rendered SVG, the
//! hover/filter behavior is a small inline script, and the visual
//! constants in the stylesheet are generated from the same state tables
//! the chart modules expose, so CSS and Rust cannot drift apart.

use std::fmt::Write;

use crate::chart::{
    BarChart, Category, ENTRY_DURATION_MS, ENTRY_SHAPE, FilterState, HOVER_SHAPE,
    HOVER_TRANSITION_MS, HoverState, PieChart, REST_SHAPE, SvgElement, html_escape, slice_visual,
};
use crate::snapshot::ChartDataset;

const HTML_HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{TITLE}}</title>
    <style>
        :root {
            --color-bg: #0f172a;
            --color-card: #1e293b;
            --color-border: #334155;
            --color-text: #e2e8f0;
            --color-text-muted: #94a3b8;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            line-height: 1.6;
            padding: 2rem;
        }
        .container { max-width: 1200px; margin: 0 auto; }
        h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 0.5rem; }
        .subtitle { color: var(--color-text-muted); margin-bottom: 1.5rem; font-size: 0.875rem; }
        .filter-controls { display: flex; gap: 0.5rem; margin-bottom: 1rem; flex-wrap: wrap; }
        .filter-btn { padding: 0.5rem 1rem; border: 1px solid var(--color-border); background: var(--color-card); color: var(--color-text); border-radius: 0.375rem; cursor: pointer; font-size: 0.875rem; transition: all 0.15s; }
        .filter-btn:hover { background: var(--color-bg); }
        .filter-btn.active { background: var(--color-text); color: var(--color-card); border-color: var(--color-text); }
        .charts-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(400px, 1fr)); gap: 1rem; }
        .chart-container { background: var(--color-card); border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); }
        .chart-container h2 { font-size: 1rem; font-weight: 600; margin-bottom: 1rem; }
        .chart-container svg { width: 100%; height: auto; }
        .pie-variant.hidden { display: none; }
        .tooltip {
            position: absolute;
            opacity: 0;
            background-color: rgba(255 255 255 / 0.7);
            color: black;
            border-radius: 5px;
            padding: 5px 10px;
            pointer-events: none;
            border: 2px solid rgba(0 0 0 / 0.43);
            font-size: 0.875rem;
            transition: opacity 200ms;
        }
        .footer { margin-top: 2rem; padding-top: 1rem; border-top: 1px solid var(--color-border); font-size: 0.75rem; color: var(--color-text-muted); text-align: center; }
{{CHART_STYLES}}
    </style>
</head>
<body>
    <div class="container">
"#;

const HTML_FOOTER: &str = r#"        <div class="footer">
            Generated by <strong>langlens</strong>
        </div>
    </div>
    <script>
        (function() {
            // Pointer-tracking tooltip fed by data-tip attributes
            const tooltip = document.createElement('div');
            tooltip.className = 'tooltip';
            document.body.appendChild(tooltip);

            document.querySelectorAll('[data-tip]').forEach(el => {
                el.addEventListener('mouseover', event => {
                    tooltip.textContent = el.dataset.tip;
                    tooltip.style.backgroundColor = el.dataset.tipBg || '';
                    tooltip.style.color = el.dataset.tipBg ? 'white' : '';
                    tooltip.style.opacity = 1;
                    tooltip.style.left = `${event.pageX + 10}px`;
                    tooltip.style.top = `${event.pageY - 28}px`;
                });
                el.addEventListener('mousemove', event => {
                    tooltip.style.left = `${event.pageX + 2}px`;
                    tooltip.style.top = `${event.pageY - 25}px`;
                });
                el.addEventListener('mouseout', () => {
                    tooltip.style.opacity = 0;
                });
            });

            // Pair each hovered slice with its label
            document.querySelectorAll('.pie-chart .slice').forEach(slice => {
                const svg = slice.closest('svg');
                const label = svg.querySelector(`.slice-label[data-index="${slice.dataset.index}"]`);
                slice.addEventListener('mouseover', () => {
                    svg.classList.add('hovering');
                    if (label) label.classList.add('active');
                });
                slice.addEventListener('mouseout', () => {
                    svg.classList.remove('hovering');
                    if (label) label.classList.remove('active');
                });
            });

            // Category filter: clicking the active category clears back
            // to the unfiltered view
            const variants = document.querySelectorAll('.pie-variant');
            document.querySelectorAll('.filter-btn').forEach(btn => {
                btn.addEventListener('click', () => {
                    const alreadyActive = btn.classList.contains('active');
                    document.querySelectorAll('.filter-btn').forEach(b => b.classList.remove('active'));
                    const target = alreadyActive ? 'pie-all' : btn.dataset.target;
                    const activeBtn = alreadyActive
                        ? document.querySelector('.filter-btn[data-target="pie-all"]')
                        : btn;
                    activeBtn.classList.add('active');
                    variants.forEach(variant => {
                        variant.classList.toggle('hidden', variant.id !== target);
                        if (variant.id === target) {
                            // restart the draw-in animation
                            variant.querySelectorAll('.slice').forEach(slice => {
                                slice.style.animation = 'none';
                                void slice.getBoundingClientRect();
                                slice.style.animation = '';
                            });
                        }
                    });
                });
            });
        })();
    </script>
</body>
</html>
"#;

/// The dashboard page: three pre-rendered pie variants (unfiltered,
/// front-end, back-end) toggled by the filter buttons, plus the full
/// bar chart. Both charts consume the same loaded dataset.
#[derive(Debug)]
pub struct DashboardPage {
    title: String,
    dataset: ChartDataset,
}

impl DashboardPage {
    #[must_use]
    pub fn new(title: impl Into<String>, dataset: ChartDataset) -> Self {
        Self {
            title: title.into(),
            dataset,
        }
    }

    /// Render the complete HTML document.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = HTML_HEADER
            .replace("{{TITLE}}", &html_escape(&self.title))
            .replace("{{CHART_STYLES}}", &chart_styles());

        self.render_heading(&mut output);
        self.render_pie_section(&mut output);
        self.render_bar_section(&mut output);

        output.push_str(HTML_FOOTER);
        output
    }

    fn render_heading(&self, output: &mut String) {
        let _ = writeln!(output, "        <h1>{}</h1>", html_escape(&self.title));
        if !self.dataset.last_updated.is_empty() {
            let _ = writeln!(
                output,
                r#"        <p class="subtitle">Last updated: {}</p>"#,
                html_escape(&self.dataset.last_updated)
            );
        }
    }

    fn render_pie_section(&self, output: &mut String) {
        let _ = writeln!(output, r#"        <div class="filter-controls">"#);
        let _ = writeln!(
            output,
            r#"            <button class="filter-btn active" data-target="pie-all">All</button>"#
        );
        for category in [Category::Frontend, Category::Backend] {
            let _ = writeln!(
                output,
                r#"            <button class="filter-btn" data-target="{}">{}</button>"#,
                variant_id(Some(category)),
                category.label()
            );
        }
        let _ = writeln!(output, "        </div>");

        let _ = writeln!(output, r#"        <div class="charts-grid">"#);
        let _ = writeln!(output, r#"            <div class="chart-container">"#);
        let _ = writeln!(output, "                <h2>Top Languages</h2>");

        for (filter, hidden) in [
            (FilterState::default(), false),
            (FilterState::default().toggle(Category::Frontend), true),
            (FilterState::default().toggle(Category::Backend), true),
        ] {
            let chart =
                PieChart::new("Top Languages", self.dataset.languages.clone()).with_filter(filter);
            let hidden_class = if hidden { " hidden" } else { "" };
            let _ = writeln!(
                output,
                r#"                <div class="pie-variant{hidden_class}" id="{}">"#,
                variant_id(filter.selected())
            );
            for line in chart.render().lines() {
                let _ = writeln!(output, "                    {line}");
            }
            let _ = writeln!(output, "                </div>");
        }

        let _ = writeln!(output, "            </div>");
    }

    fn render_bar_section(&self, output: &mut String) {
        let chart = BarChart::new("Bytes per Language", self.dataset.languages.clone());
        let _ = writeln!(output, r#"            <div class="chart-container">"#);
        let _ = writeln!(output, "                <h2>Bytes per Language</h2>");
        for line in chart.render().lines() {
            let _ = writeln!(output, "                {line}");
        }
        let _ = writeln!(output, "            </div>");
        let _ = writeln!(output, "        </div>");
    }
}

const fn variant_id(category: Option<Category>) -> &'static str {
    match category {
        None => "pie-all",
        Some(Category::Frontend) => "pie-frontend",
        Some(Category::Backend) => "pie-backend",
    }
}

/// Chart interaction rules, generated from the hover state table so the
/// stylesheet says exactly what `slice_visual` says.
fn chart_styles() -> String {
    let idle = slice_visual(HoverState::Idle, 0);
    let hovered = slice_visual(HoverState::Hovered(0), 0);
    let dimmed = slice_visual(HoverState::Hovered(0), 1);

    let hover_scale = HOVER_SHAPE.outer_radius / REST_SHAPE.outer_radius;
    let entry_scale = ENTRY_SHAPE.outer_radius / REST_SHAPE.outer_radius;

    format!(
        r#"        .pie-chart .slice {{
            opacity: {idle_opacity};
            stroke-width: {rest_corner};
            stroke-linejoin: round;
            transform-box: view-box;
            transform-origin: 300px 300px;
            transition: opacity {transition}ms, transform {transition}ms;
            animation: slice-grow {duration}ms backwards;
            cursor: pointer;
        }}
        .pie-chart.hovering .slice {{ opacity: {dim_opacity}; }}
        .pie-chart .slice:hover {{
            opacity: {hover_opacity};
            stroke-width: {hover_corner};
            transform: scale({hover_scale:.3});
        }}
        .pie-chart .slice-label {{
            opacity: {idle_label};
            fill: var(--color-text);
            font-size: 16px;
            font-weight: 600;
            pointer-events: none;
            transition: opacity {transition}ms;
        }}
        .pie-chart.hovering .slice-label {{ opacity: {dim_label}; }}
        .pie-chart.hovering .slice-label.active {{ opacity: 1; }}
        .bar-chart .bar {{ cursor: pointer; }}
        @keyframes slice-grow {{
            from {{ transform: scale({entry_scale:.3}); }}
            to {{ transform: scale(1); }}
        }}"#,
        idle_opacity = idle.opacity,
        rest_corner = REST_SHAPE.corner_radius,
        transition = HOVER_TRANSITION_MS,
        duration = ENTRY_DURATION_MS,
        dim_opacity = dimmed.opacity,
        hover_opacity = hovered.opacity,
        hover_corner = HOVER_SHAPE.corner_radius,
        idle_label = idle.label_opacity,
        dim_label = dimmed.label_opacity,
    )
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
