//! Candidate-name tables for the canonical fields.
//!
//! Canonical fields are located by consulting an ordered alias list over the
//! record's normalized field names: for each alias in priority order, an
//! exact name match is preferred, then a substring match. The lists are
//! data, not code; extending coverage means adding a name here.

/// Ordered candidate source-field names per canonical field.
#[derive(Debug, Clone)]
pub struct AliasTable {
    /// Collection date/time candidates, highest priority first.
    pub time: Vec<String>,
    /// Combined position field (`lat_lon`) candidates.
    pub position: Vec<String>,
    /// Standalone latitude candidates.
    pub lat: Vec<String>,
    /// Standalone longitude candidates.
    pub lon: Vec<String>,
    /// Depth candidates.
    pub depth: Vec<String>,
}

impl Default for AliasTable {
    fn default() -> Self {
        fn names(list: &[&str]) -> Vec<String> {
            list.iter().map(|name| (*name).to_string()).collect()
        }
        Self {
            time: names(&["collection_date", "date", "time", "collection_time"]),
            position: names(&["lat_lon"]),
            lat: names(&["latitude", "lat"]),
            lon: names(&["longitude", "lon", "long"]),
            depth: names(&["depth", "sample_depth"]),
        }
    }
}

/// Find the first field matching an alias list.
///
/// `fields` pairs each normalized field name with its raw value. Returns the
/// matched field's index.
pub fn find_alias(fields: &[(String, String)], aliases: &[String]) -> Option<usize> {
    for alias in aliases {
        if let Some(idx) = fields.iter().position(|(name, _)| name == alias) {
            return Some(idx);
        }
        if let Some(idx) = fields.iter().position(|(name, _)| name.contains(alias)) {
            return Some(idx);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn exact_match_beats_substring() {
        let table = AliasTable::default();
        let record = fields(&[("sample_depth", "5m"), ("depth", "9m")]);
        assert_eq!(find_alias(&record, &table.depth), Some(1));
    }

    #[test]
    fn priority_order_wins_over_position() {
        let table = AliasTable::default();
        let record = fields(&[("time", "01:56:00"), ("collection_date", "2011-03-12")]);
        assert_eq!(find_alias(&record, &table.time), Some(1));
    }

    #[test]
    fn substring_match_is_a_fallback() {
        let table = AliasTable::default();
        let record = fields(&[("run", "SRR1"), ("sample_depth", "5m")]);
        assert_eq!(find_alias(&record, &table.depth), Some(1));
    }

    #[test]
    fn no_candidate_yields_none() {
        let table = AliasTable::default();
        let record = fields(&[("run", "SRR1"), ("spots", "1107")]);
        assert_eq!(find_alias(&record, &table.time), None);
    }
}
