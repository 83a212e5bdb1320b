//! Text formatting for chart labels and tooltips.

/// Escape text for safe embedding in SVG/HTML.
#[must_use]
pub fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Format a byte count with "." thousands separators (de-DE grouping),
/// the display format tooltips and slice labels use.
#[must_use]
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

/// Abbreviated-magnitude format for axis ticks: "1k", "1.5M", "2G".
/// Values below 1000 print as integers.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_si(value: f64) -> String {
    let (scaled, suffix) = if value >= 1e9 {
        (value / 1e9, "G")
    } else if value >= 1e6 {
        (value / 1e6, "M")
    } else if value >= 1e3 {
        (value / 1e3, "k")
    } else {
        (value, "")
    };

    // one decimal, trailing zero trimmed
    let rounded = (scaled * 10.0).round() / 10.0;
    if (rounded - rounded.trunc()).abs() < f64::EPSILON {
        format!("{}{suffix}", rounded.trunc() as i64)
    } else {
        format!("{rounded:.1}{suffix}")
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
