//! Property tests for combined position parsing.

use proptest::prelude::*;

use cmap_transform::parse_combined_position;

proptest! {
    #[test]
    fn hemisphere_sign_property(
        lat_deg in 0.0f64..90.0,
        lon_deg in 0.0f64..180.0,
        lat_hem in prop::sample::select(vec!['N', 'S']),
        lon_hem in prop::sample::select(vec!['E', 'W']),
    ) {
        let value = format!("{lat_deg} {lat_hem} {lon_deg} {lon_hem}");
        let (lat, lon) = parse_combined_position(&value).expect("valid combined value");
        let expected_lat = if lat_hem == 'S' { -lat_deg } else { lat_deg };
        let expected_lon = if lon_hem == 'W' { -lon_deg } else { lon_deg };
        prop_assert_eq!(lat, expected_lat);
        prop_assert_eq!(lon, expected_lon);
    }

    #[test]
    fn arbitrary_text_never_panics(value in ".*") {
        let _ = parse_combined_position(&value);
    }
}
