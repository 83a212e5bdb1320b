use super::*;

#[test]
fn hex_color_to_css() {
    assert_eq!(ChartColor::hex("#4e79a7").to_css(), "#4e79a7");
}

#[test]
fn css_var_to_css() {
    assert_eq!(
        ChartColor::css_var("text-muted").to_css(),
        "var(--color-text-muted)"
    );
}

#[test]
fn text_anchor_display() {
    assert_eq!(TextAnchor::Start.to_string(), "start");
    assert_eq!(TextAnchor::Middle.to_string(), "middle");
    assert_eq!(TextAnchor::End.to_string(), "end");
}

#[test]
fn palette_wraps_around() {
    assert_eq!(palette_color(TABLEAU10, 0), ChartColor::hex("#4e79a7"));
    assert_eq!(palette_color(TABLEAU10, 10), ChartColor::hex("#4e79a7"));
    assert_eq!(palette_color(TABLEAU10, 11), ChartColor::hex("#f28e2c"));
}

#[test]
fn both_palettes_have_ten_entries() {
    assert_eq!(OBSERVABLE10.len(), 10);
    assert_eq!(TABLEAU10.len(), 10);
}

mod darken_tests {
    use super::*;

    #[test]
    fn darken_black_stays_black() {
        assert_eq!(darken_hsl("#000000", 10.0), "#000000");
    }

    #[test]
    fn darken_white_by_half_is_mid_gray() {
        // l = 1.0 -> 0.5 with zero saturation
        assert_eq!(darken_hsl("#ffffff", 50.0), "#808080");
    }

    #[test]
    fn darken_pure_red_preserves_hue() {
        // #ff0000 is h=0, s=1, l=0.5; darkening keeps g=b=0
        let darker = darken_hsl("#ff0000", 10.0);
        assert!(darker.starts_with('#'));
        assert!(darker.ends_with("0000"), "hue drifted: {darker}");
    }

    #[test]
    fn darken_by_zero_round_trips() {
        assert_eq!(darken_hsl("#4e79a7", 0.0), "#4e79a7");
    }

    #[test]
    fn darkened_color_is_strictly_darker() {
        let channel = |hex: &str, i: usize| u32::from_str_radix(&hex[i..i + 2], 16).unwrap();
        let original = "#76b7b2";
        let darker = darken_hsl(original, 10.0);
        let sum = |hex: &str| channel(hex, 1) + channel(hex, 3) + channel(hex, 5);
        assert!(sum(&darker) < sum(original));
    }

    #[test]
    fn invalid_input_passes_through() {
        assert_eq!(darken_hsl("rebeccapurple", 10.0), "rebeccapurple");
        assert_eq!(darken_hsl("#abc", 10.0), "#abc");
    }
}
