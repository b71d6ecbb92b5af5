//! Shared utility functions

use unicode_width::UnicodeWidthChar;

/// Safely truncate a string to at most `max_bytes` while respecting UTF-8
/// boundaries. If the string is already short enough it is returned
/// unchanged; otherwise the cut lands on the last character boundary at or
/// before `max_bytes`.
pub fn truncate_utf8_safe(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Truncate a string to a terminal display width, appending an ellipsis when
/// anything was cut. Width is measured in terminal columns (CJK counts 2).
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();

    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            // Leave room for the ellipsis unless everything fits
            let rest_width: usize = s[out.len()..].chars().filter_map(|c| c.width()).sum();
            if width + rest_width <= max_width {
                break;
            }
            out.push('…');
            return out;
        }
        out.push(ch);
        width += ch_width;
    }

    s.to_string()
}

/// Format an integer with thousands separators: 5530719 -> "5,530,719"
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a (non-negative) area, grouping the integer part: "338,424 km²"
pub fn format_area(area: f64) -> String {
    format!("{} km²", format_number(area.max(0.0).round() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_shorter_than_max() {
        assert_eq!(truncate_utf8_safe("hello", 10), "hello");
    }

    #[test]
    fn truncate_at_ascii_boundary() {
        assert_eq!(truncate_utf8_safe("hello world", 5), "hello");
    }

    #[test]
    fn truncate_at_utf8_boundary() {
        // Each character is 3 bytes; truncating at 4 keeps only the first
        let s = "日本語";
        assert_eq!(truncate_utf8_safe(s, 4), "日");
        assert_eq!(truncate_utf8_safe(s, 6), "日本");
    }

    #[test]
    fn width_truncation_adds_ellipsis() {
        assert_eq!(truncate_to_width("South Georgia", 8), "South G…");
        assert_eq!(truncate_to_width("Chad", 8), "Chad");
        // Exact fit keeps the full string
        assert_eq!(truncate_to_width("Botswana", 8), "Botswana");
    }

    #[test]
    fn number_grouping() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(5_530_719), "5,530,719");
    }

    #[test]
    fn area_formatting() {
        assert_eq!(format_area(338_424.3), "338,424 km²");
        assert_eq!(format_area(-5.0), "0 km²");
    }
}
