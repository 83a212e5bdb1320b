//! SVG chart generation.
//!
//! All geometry (pie slice angles, band/log scales, label placement) is
//! computed here as pure data transforms; the SVG strings are assembled
//! from the results so the layout logic is testable without a rendering
//! surface. Charts use viewBox-based scaling and carry `<title>`
//! elements for accessibility.

mod arc;
mod bar;
mod builder;
mod category;
mod element;
mod format;
mod hover;
mod pie;
mod scale;
mod style;

pub use arc::{ArcShape, PieSlice, arc_path, centroid, pie_layout, place_labels, point_at, slice_tooltip};
pub use bar::BarChart;
pub use builder::SvgBuilder;
pub use category::{Category, FilterState, UNFILTERED_LIMIT};
pub use element::{Axis, AxisOrientation, SvgElement, Tick};
pub use format::{format_grouped, format_si, html_escape};
pub use hover::{
    ENTRY_DURATION_MS, ENTRY_SHAPE, ENTRY_STAGGER_MS, HOVER_SHAPE, HOVER_TRANSITION_MS,
    HoverState, REST_SHAPE, SliceVisual, slice_visual,
};
pub use pie::PieChart;
pub use scale::{BandScale, LogScale};
pub use style::{ChartColor, OBSERVABLE10, TABLEAU10, TextAnchor, darken_hsl, palette_color};
