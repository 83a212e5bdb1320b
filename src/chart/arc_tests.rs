use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::snapshot::ChartEntry;

use super::*;

const SHAPE: ArcShape = ArcShape::new(0.0, 250.0, 5.0);

fn entries(pairs: &[(&str, u64)]) -> Vec<ChartEntry> {
    pairs
        .iter()
        .map(|(language, value)| ChartEntry::new(*language, *value))
        .collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

mod layout_tests {
    use super::*;

    #[test]
    fn angles_proportional_to_value_share() {
        let slices = pie_layout(&entries(&[("a", 3), ("b", 1)]));
        assert_eq!(slices.len(), 2);
        assert!(close(slices[0].start_angle, 0.0));
        assert!(close(slices[0].end_angle, 0.75 * TAU));
        assert!(close(slices[1].end_angle, TAU));
    }

    #[test]
    fn slices_are_contiguous_and_clockwise() {
        let slices = pie_layout(&entries(&[("a", 1), ("b", 1), ("c", 2)]));
        for pair in slices.windows(2) {
            assert!(close(pair[0].end_angle, pair[1].start_angle));
            assert!(pair[0].span() >= 0.0);
        }
        assert!(close(slices.last().unwrap().end_angle, TAU));
    }

    #[test]
    fn single_entry_covers_full_circle() {
        let slices = pie_layout(&entries(&[("only", 7)]));
        assert!(close(slices[0].span(), TAU));
    }

    #[test]
    fn zero_total_produces_zero_spans() {
        let slices = pie_layout(&entries(&[("a", 0), ("b", 0)]));
        assert!(slices.iter().all(|s| close(s.span(), 0.0)));
    }

    #[test]
    fn empty_input_is_empty_layout() {
        assert!(pie_layout(&[]).is_empty());
    }
}

mod geometry_tests {
    use super::*;

    #[test]
    fn twelve_oclock_is_straight_up() {
        let (x, y) = point_at(250.0, 0.0);
        assert!(close(x, 0.0));
        assert!(close(y, -250.0));
    }

    #[test]
    fn quarter_turn_is_due_right() {
        let (x, y) = point_at(100.0, FRAC_PI_2);
        assert!(close(x, 100.0));
        assert!(close(y, 0.0));
    }

    #[test]
    fn quarter_slice_path_uses_small_arc() {
        let slice = PieSlice {
            label: "q".to_string(),
            value: 1,
            start_angle: 0.0,
            end_angle: FRAC_PI_2,
        };
        let path = arc_path(SHAPE, &slice);
        assert!(path.starts_with("M0,0 L"));
        assert!(path.contains(" 0 0 1 "), "large-arc flag should be 0: {path}");
        assert!(path.ends_with('Z'));
    }

    #[test]
    fn majority_slice_path_uses_large_arc() {
        let slice = PieSlice {
            label: "big".to_string(),
            value: 3,
            start_angle: 0.0,
            end_angle: 1.5 * PI,
        };
        let path = arc_path(SHAPE, &slice);
        assert!(path.contains(" 0 1 1 "), "large-arc flag should be 1: {path}");
    }

    #[test]
    fn full_circle_path_splits_into_two_arcs() {
        let slice = PieSlice {
            label: "all".to_string(),
            value: 1,
            start_angle: 0.0,
            end_angle: TAU,
        };
        let path = arc_path(SHAPE, &slice);
        assert_eq!(path.matches('A').count(), 2);
        // a full circle never passes through the center
        assert!(!path.contains('L'));
    }

    #[test]
    fn zero_span_renders_nothing() {
        let slice = PieSlice {
            label: "none".to_string(),
            value: 0,
            start_angle: 1.0,
            end_angle: 1.0,
        };
        assert_eq!(arc_path(SHAPE, &slice), String::new());
    }

    #[test]
    fn centroid_sits_at_half_radius_on_mid_angle() {
        let slice = PieSlice {
            label: "right".to_string(),
            value: 1,
            start_angle: 0.0,
            end_angle: PI,
        };
        // mid angle FRAC_PI_2 (due right), radius (0 + 250) / 2
        let (x, y) = centroid(SHAPE, &slice);
        assert!(close(x, 125.0));
        assert!(close(y, 0.0));
    }
}

mod label_tests {
    use super::*;

    #[test]
    fn labels_biased_left_of_centroid() {
        let slices = pie_layout(&entries(&[("a", 1), ("b", 1), ("c", 1), ("d", 1)]));
        let positions = place_labels(SHAPE, &slices);
        for (slice, (x, _)) in slices.iter().zip(&positions) {
            let (cx, _) = centroid(SHAPE, slice);
            assert!(close(*x, cx - 25.0));
        }
    }

    #[test]
    fn colliding_labels_nudge_down() {
        // two tiny adjacent slices put both centroids nearly on top of
        // each other; the second label must drop by the padding step
        let slices = pie_layout(&entries(&[("tiny1", 1), ("tiny2", 1), ("rest", 998)]));
        let positions = place_labels(SHAPE, &slices);
        assert!(
            positions[1].1 >= positions[0].1 + 29.0,
            "second label did not move: {positions:?}"
        );
    }

    #[test]
    fn distant_labels_keep_their_centroids() {
        let slices = pie_layout(&entries(&[("a", 1), ("b", 1)]));
        let positions = place_labels(SHAPE, &slices);
        let (_, cy0) = centroid(SHAPE, &slices[0]);
        let (_, cy1) = centroid(SHAPE, &slices[1]);
        assert!(close(positions[0].1, cy0));
        assert!(close(positions[1].1, cy1));
    }
}

#[test]
fn tooltip_text_is_grouped_and_escaped() {
    let slice = PieSlice {
        label: "C & C++".to_string(),
        value: 52553,
        start_angle: 0.0,
        end_angle: 1.0,
    };
    assert_eq!(slice_tooltip(&slice), "C &amp; C++: 52.553");
}
