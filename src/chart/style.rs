//! Chart styling: colors, palettes, and text anchoring.

use std::fmt;

/// Categorical palette for pie slices (Observable 10).
pub const OBSERVABLE10: &[&str] = &[
    "#4269d0", "#efb118", "#ff725c", "#6cc5b0", "#3ca951", "#ff8ab7", "#a463f2", "#97bbf5",
    "#9c6b4e", "#9498a0",
];

/// Categorical palette for bars (Tableau 10).
pub const TABLEAU10: &[&str] = &[
    "#4e79a7", "#f28e2c", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ab",
];

/// Ordinal color assignment: palette entries by encounter order,
/// wrapping when the palette is exhausted.
#[must_use]
pub fn palette_color(palette: &[&str], index: usize) -> ChartColor {
    ChartColor::hex(palette[index % palette.len()])
}

/// Color specification supporting CSS variables for theming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartColor {
    /// Direct hex color (e.g., "#4e79a7")
    Hex(String),
    /// CSS variable reference (e.g., "text-muted" → "var(--color-text-muted)")
    CssVar(String),
}

impl ChartColor {
    /// Create a CSS variable color reference.
    #[must_use]
    pub fn css_var(name: &str) -> Self {
        Self::CssVar(name.to_string())
    }

    /// Create a hex color.
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(h) => h.clone(),
            Self::CssVar(name) => format!("var(--color-{name})"),
        }
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

/// Darken a hex color by reducing HSL lightness by `percent`, keeping
/// hue and saturation. Used for hover tooltip backgrounds that match
/// the hovered bar. Invalid input is returned unchanged.
#[must_use]
pub fn darken_hsl(hex: &str, percent: f64) -> String {
    let Some((r, g, b)) = parse_hex(hex) else {
        return hex.to_string();
    };
    let (h, s, l) = rgb_to_hsl(r, g, b);
    let l = (l * (1.0 - percent / 100.0)).clamp(0.0, 1.0);
    let (r, g, b) = hsl_to_rgb(h, s, l);
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// RGB [0,255] -> HSL with h in degrees, s and l in [0,1].
fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = f64::midpoint(max, min);

    if delta.abs() < f64::EPSILON {
        return (0.0, 0.0, l);
    }

    let s = delta / (1.0 - (2.0 * l - 1.0).abs());
    let h = if (max - r).abs() < f64::EPSILON {
        60.0 * (((g - b) / delta).rem_euclid(6.0))
    } else if (max - g).abs() < f64::EPSILON {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    (h, s, l)
}

#[allow(
    clippy::many_single_char_names,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_byte(r), to_byte(g), to_byte(b))
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
