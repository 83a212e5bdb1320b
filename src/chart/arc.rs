//! Pie geometry: slice angles, arc paths, centroids, label placement.
//!
//! Angles are measured clockwise from 12 o'clock, in radians, around a
//! (0, 0) center; callers translate the group to the chart midpoint.

use std::f64::consts::{PI, TAU};

use crate::snapshot::ChartEntry;

use super::format::html_escape;

/// Radial shape of a slice: a pie-slice descriptor minus the angles.
///
/// `corner_radius` is cosmetic; it is rendered as a round stroke join
/// of matching width rather than true rounded-arc geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcShape {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub corner_radius: f64,
}

impl ArcShape {
    #[must_use]
    pub const fn new(inner_radius: f64, outer_radius: f64, corner_radius: f64) -> Self {
        Self {
            inner_radius,
            outer_radius,
            corner_radius,
        }
    }
}

/// One laid-out pie slice.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
    /// Clockwise from 12 o'clock, radians.
    pub start_angle: f64,
    /// Clockwise from 12 o'clock, radians.
    pub end_angle: f64,
}

impl PieSlice {
    /// Angular span in radians.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Mid-slice angle, where the centroid and label sit.
    #[must_use]
    pub fn mid_angle(&self) -> f64 {
        f64::midpoint(self.start_angle, self.end_angle)
    }
}

/// Standard pie layout: each slice's angle is proportional to its value
/// share of the input total, laid clockwise from a 12 o'clock origin
/// with no padding between slices. Zero-total input produces zero-span
/// slices (nothing visible, nothing fails).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn pie_layout(entries: &[ChartEntry]) -> Vec<PieSlice> {
    let total: u64 = entries.iter().map(|e| e.value).sum();

    let mut slices = Vec::with_capacity(entries.len());
    let mut angle = 0.0_f64;
    for entry in entries {
        let span = if total == 0 {
            0.0
        } else {
            (entry.value as f64 / total as f64) * TAU
        };
        slices.push(PieSlice {
            label: entry.language.clone(),
            value: entry.value,
            start_angle: angle,
            end_angle: angle + span,
        });
        angle += span;
    }
    slices
}

/// Point on a circle of `radius` at `angle` (clockwise from 12 o'clock)
/// around the origin, in SVG coordinates (y grows downward).
#[must_use]
pub fn point_at(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.sin(), -radius * angle.cos())
}

/// SVG path for a slice at the given shape. Handles the degenerate
/// full-circle slice (a single language) by splitting the sweep in two.
#[must_use]
pub fn arc_path(shape: ArcShape, slice: &PieSlice) -> String {
    let r = shape.outer_radius;
    let span = slice.span();

    if span <= 0.0 {
        return String::new();
    }

    if span >= TAU - 1e-9 {
        // full circle: one arc command cannot sweep 360 degrees
        let (x0, y0) = point_at(r, slice.start_angle);
        let (x1, y1) = point_at(r, slice.start_angle + PI);
        return format!("M{x0:.3},{y0:.3} A{r},{r} 0 1 1 {x1:.3},{y1:.3} A{r},{r} 0 1 1 {x0:.3},{y0:.3} Z");
    }

    let (x0, y0) = point_at(r, slice.start_angle);
    let (x1, y1) = point_at(r, slice.end_angle);
    let large_arc = i32::from(span > PI);
    format!("M0,0 L{x0:.3},{y0:.3} A{r},{r} 0 {large_arc} 1 {x1:.3},{y1:.3} Z")
}

/// Slice centroid: midway between inner and outer radius at the mid
/// angle.
#[must_use]
pub fn centroid(shape: ArcShape, slice: &PieSlice) -> (f64, f64) {
    let r = f64::midpoint(shape.inner_radius, shape.outer_radius);
    point_at(r, slice.mid_angle())
}

/// Horizontal bias pulling labels left of the centroid.
const LABEL_X_BIAS: f64 = 25.0;
/// Vertical distance below which two labels are considered colliding.
const LABEL_Y_PADDING: f64 = 30.0;
/// Horizontal distance below which two labels are considered colliding.
const LABEL_X_PADDING: f64 = 50.0;

/// Greedy label placement: anchor each label at the slice centroid with
/// a fixed horizontal bias, nudging it down by one padding step when it
/// lands too close to the previously placed label. Best effort in
/// render order, not a global solver; residual overlap is accepted.
#[must_use]
pub fn place_labels(shape: ArcShape, slices: &[PieSlice]) -> Vec<(f64, f64)> {
    let mut positions = Vec::with_capacity(slices.len());
    let mut previous: Option<(f64, f64)> = None;

    for slice in slices {
        let (cx, cy) = centroid(shape, slice);
        let x = cx - LABEL_X_BIAS;
        let mut y = cy;

        if let Some((prev_x, prev_y)) = previous
            && (y - prev_y).abs() < LABEL_Y_PADDING
            && (x - prev_x).abs() < LABEL_X_PADDING
        {
            y += LABEL_Y_PADDING;
        }

        previous = Some((x, y));
        positions.push((x, y));
    }

    positions
}

/// Tooltip/label text for a slice: `"{language}: {formatted value}"`.
#[must_use]
pub fn slice_tooltip(slice: &PieSlice) -> String {
    format!(
        "{}: {}",
        html_escape(&slice.label),
        super::format::format_grouped(slice.value)
    )
}

#[cfg(test)]
#[path = "arc_tests.rs"]
mod tests;
