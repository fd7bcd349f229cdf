//! Latitude/longitude parsing.
//!
//! Combined `lat_lon` values look like `"37.8305 S 41.1248 W"`: degrees with
//! hemisphere letters, comma- or whitespace-separated. `S` and `W` negate
//! the magnitude; the letters may be absent, in which case the degrees are
//! taken as already signed.

/// Parse a combined position value into (lat, lon) signed decimal degrees.
///
/// Accepted token shapes: `<deg> <deg>`, `<deg> <N|S> <deg>`,
/// `<deg> <deg> <E|W>`, `<deg> <N|S> <deg> <E|W>`. Anything else (extra
/// tokens, non-numeric degrees, unrecognized hemisphere letters) is `None`.
pub fn parse_combined_position(value: &str) -> Option<(f64, f64)> {
    let tokens: Vec<&str> = value
        .split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|token| !token.is_empty())
        .collect();
    let mut cursor = tokens.iter();

    let lat_deg: f64 = cursor.next()?.parse().ok()?;
    let mut rest = cursor.as_slice();
    let lat = match rest.first().and_then(|token| hemisphere_sign(token, "NS")) {
        Some(sign) => {
            rest = &rest[1..];
            lat_deg * sign
        }
        None => lat_deg,
    };

    let lon_deg: f64 = rest.first()?.parse().ok()?;
    rest = &rest[1..];
    let lon = match rest.first().and_then(|token| hemisphere_sign(token, "EW")) {
        Some(sign) => {
            rest = &rest[1..];
            lon_deg * sign
        }
        None => lon_deg,
    };

    if !rest.is_empty() {
        return None;
    }
    Some((lat, lon))
}

/// Parse a standalone latitude/longitude field as signed decimal degrees,
/// accepting an optional trailing hemisphere letter (`"37.8 S"`).
pub fn parse_signed_degrees(value: &str) -> Option<f64> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    match tokens.as_slice() {
        [degrees] => degrees.parse().ok(),
        [degrees, hemisphere] => {
            let magnitude: f64 = degrees.parse().ok()?;
            let sign = hemisphere_sign(hemisphere, "NSEW")?;
            Some(magnitude * sign)
        }
        _ => None,
    }
}

/// The sign multiplier for a hemisphere token, restricted to the letters in
/// `allowed`. `S` and `W` are negative.
fn hemisphere_sign(token: &str, allowed: &str) -> Option<f64> {
    let mut chars = token.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() || !allowed.contains(letter) {
        return None;
    }
    match letter {
        'S' | 'W' => Some(-1.0),
        'N' | 'E' => Some(1.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hemisphere_letters_set_the_sign() {
        assert_eq!(
            parse_combined_position("37.8305 S 41.1248 W"),
            Some((-37.8305, -41.1248))
        );
        assert_eq!(
            parse_combined_position("37.8305 N 41.1248 E"),
            Some((37.8305, 41.1248))
        );
    }

    #[test]
    fn comma_separated_and_letterless_forms() {
        assert_eq!(
            parse_combined_position("37.8305, 41.1248"),
            Some((37.8305, 41.1248))
        );
        assert_eq!(
            parse_combined_position("12.5 S 30.25"),
            Some((-12.5, 30.25))
        );
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert_eq!(parse_combined_position("garbage text"), None);
        assert_eq!(parse_combined_position("37.8305 S"), None);
        assert_eq!(parse_combined_position("37.8 X 41.1 W"), None);
        assert_eq!(parse_combined_position("37.8 S 41.1 W extra"), None);
        assert_eq!(parse_combined_position(""), None);
    }

    #[test]
    fn standalone_degrees() {
        assert_eq!(parse_signed_degrees("-37.8305"), Some(-37.8305));
        assert_eq!(parse_signed_degrees("37.8305 S"), Some(-37.8305));
        assert_eq!(parse_signed_degrees("not-a-number"), None);
    }
}
