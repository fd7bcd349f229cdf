//! Record normalization.

use std::collections::BTreeSet;

use tracing::trace;

use cmap_model::{CANONICAL_COLUMNS, NormalizedRecord, RawRecord};

use crate::aliases::{AliasTable, find_alias};
use crate::datetime::normalize_time;
use crate::identifier::normalize_identifier;
use crate::numeric::parse_depth;
use crate::position::{parse_combined_position, parse_signed_degrees};

/// Resolves and parses the canonical fields of raw records.
///
/// Normalization is pure and total: a malformed value leaves its canonical
/// field `None` and the source data intact in the extras. A combined
/// `lat_lon` field wins over separate latitude/longitude fields; the
/// separate fields are consulted only when no combined value parses.
///
/// Source fields literally named `time`, `lat`, `lon` or `depth` surface
/// only through their canonical column: when parsed they are consumed, and
/// when unparseable they stay in the extras under that name so the table
/// assembler can carry the value through verbatim. All other source fields
/// always remain in the extras, keyed by their normalized identifier.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    aliases: AliasTable,
}

impl Normalizer {
    pub fn new(aliases: AliasTable) -> Self {
        Self { aliases }
    }

    pub fn normalize(&self, record: &RawRecord) -> NormalizedRecord {
        let fields: Vec<(String, String)> = record
            .iter()
            .map(|(key, value)| (normalize_identifier(key), value.to_string()))
            .collect();

        // Indices whose value was successfully turned into a canonical one.
        let mut consumed: BTreeSet<usize> = BTreeSet::new();

        let time_src = find_alias(&fields, &self.aliases.time);
        let time = time_src.and_then(|idx| normalize_time(&fields[idx].1));
        if time.is_some() {
            consumed.extend(time_src);
        }

        let mut lat = None;
        let mut lon = None;
        if let Some(idx) = find_alias(&fields, &self.aliases.position) {
            if let Some((parsed_lat, parsed_lon)) = parse_combined_position(&fields[idx].1) {
                lat = Some(parsed_lat);
                lon = Some(parsed_lon);
                consumed.insert(idx);
            }
        }
        if lat.is_none() && lon.is_none() {
            if let Some(idx) = find_alias(&fields, &self.aliases.lat) {
                lat = parse_signed_degrees(&fields[idx].1);
                if lat.is_some() {
                    consumed.insert(idx);
                }
            }
            if let Some(idx) = find_alias(&fields, &self.aliases.lon) {
                lon = parse_signed_degrees(&fields[idx].1);
                if lon.is_some() {
                    consumed.insert(idx);
                }
            }
        }

        let depth_src = find_alias(&fields, &self.aliases.depth);
        let depth = depth_src.and_then(|idx| parse_depth(&fields[idx].1));
        if depth.is_some() {
            consumed.extend(depth_src);
        }

        let extras: Vec<(String, String)> = fields
            .into_iter()
            .enumerate()
            .filter(|(idx, (name, _))| {
                !(consumed.contains(idx) && CANONICAL_COLUMNS.contains(&name.as_str()))
            })
            .map(|(_, field)| field)
            .collect();

        trace!(
            time = time.as_deref(),
            lat,
            lon,
            depth,
            extras = extras.len(),
            "normalized record"
        );
        NormalizedRecord {
            time,
            lat,
            lon,
            depth,
            extras,
        }
    }
}
