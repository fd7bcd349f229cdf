//! Depth parsing and numeric cell formatting.

/// Parse a depth value, stripping a trailing unit suffix (`"9m"` → 9.0).
///
/// The leading numeric prefix is taken and parsed as f64; a value with no
/// numeric prefix is `None`.
pub fn parse_depth(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let mut end = 0;
    let mut seen_dot = false;
    for (idx, ch) in trimmed.char_indices() {
        match ch {
            '-' | '+' if idx == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            ch if ch.is_ascii_digit() => {}
            _ => break,
        }
        end = idx + ch.len_utf8();
    }
    let prefix = &trimmed[..end];
    if !prefix.bytes().any(|byte| byte.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

/// Format a numeric cell value without trailing zeros.
pub fn format_numeric(value: f64) -> String {
    let formatted = format!("{value}");
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_suffix_is_stripped() {
        assert_eq!(parse_depth("9m"), Some(9.0));
        assert_eq!(parse_depth("12.5 m"), Some(12.5));
        assert_eq!(parse_depth("100"), Some(100.0));
    }

    #[test]
    fn non_numeric_values_are_none() {
        assert_eq!(parse_depth("surface"), None);
        assert_eq!(parse_depth(""), None);
        assert_eq!(parse_depth("m9"), None);
    }

    #[test]
    fn formatting_drops_trailing_zeros() {
        assert_eq!(format_numeric(9.0), "9");
        assert_eq!(format_numeric(10.0), "10");
        assert_eq!(format_numeric(-37.8305), "-37.8305");
    }
}
