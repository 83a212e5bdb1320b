//! Hover interaction state and the visual attributes it drives.
//!
//! The browser realizes these values through generated CSS, but the
//! state machine itself is plain data so every transition is testable.

use super::arc::ArcShape;

/// Radius the draw-in animation starts from.
pub const ENTRY_SHAPE: ArcShape = ArcShape::new(0.0, 15.0, 1.0);
/// Resting slice shape.
pub const REST_SHAPE: ArcShape = ArcShape::new(0.0, 250.0, 5.0);
/// Enlarged shape while hovered, with a sharper corner.
pub const HOVER_SHAPE: ArcShape = ArcShape::new(0.0, 260.0, 1.0);

/// Draw-in animation duration per slice, milliseconds.
pub const ENTRY_DURATION_MS: u32 = 1500;
/// Per-slice delay producing the sequential reveal.
pub const ENTRY_STAGGER_MS: u32 = 200;
/// Hover enter/leave transition duration.
pub const HOVER_TRANSITION_MS: u32 = 300;

const REST_OPACITY: f64 = 0.8;
const HOVERED_OPACITY: f64 = 0.95;
const DIMMED_OPACITY: f64 = 0.4;
const DIMMED_LABEL_OPACITY: f64 = 0.1;

/// Pointer interaction state for one chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    /// No slice under the pointer.
    #[default]
    Idle,
    /// Pointer over the slice at this index.
    Hovered(usize),
}

/// Rendered attributes of one slice under a given hover state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceVisual {
    pub shape: ArcShape,
    pub opacity: f64,
    pub label_opacity: f64,
}

/// Visual attributes for slice `index`: the hovered slice enlarges to
/// the hover shape at full opacity, every other slice dims at its
/// resting shape, and idle restores everything.
#[must_use]
pub fn slice_visual(state: HoverState, index: usize) -> SliceVisual {
    match state {
        HoverState::Idle => SliceVisual {
            shape: REST_SHAPE,
            opacity: REST_OPACITY,
            label_opacity: REST_OPACITY,
        },
        HoverState::Hovered(hovered) if hovered == index => SliceVisual {
            shape: HOVER_SHAPE,
            opacity: HOVERED_OPACITY,
            label_opacity: 1.0,
        },
        HoverState::Hovered(_) => SliceVisual {
            shape: REST_SHAPE,
            opacity: DIMMED_OPACITY,
            label_opacity: DIMMED_LABEL_OPACITY,
        },
    }
}

#[cfg(test)]
#[path = "hover_tests.rs"]
mod tests;
