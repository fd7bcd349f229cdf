//! Table assembly.
//!
//! Two-pass by design: all of a file's records are normalized before the
//! column union is computed, then every record becomes one row. The four
//! canonical columns always come first, in fixed order; the remaining
//! columns are the union of extras names across records, in first-seen
//! order.

use cmap_model::{CANONICAL_COLUMNS, CellValue, NormalizedRecord, Table};
use cmap_transform::format_numeric;

/// Build the export table for one file's records.
pub fn assemble_table(records: &[NormalizedRecord]) -> Table {
    let mut columns: Vec<String> = CANONICAL_COLUMNS
        .iter()
        .map(|name| (*name).to_string())
        .collect();
    for record in records {
        for (name, _) in &record.extras {
            if CANONICAL_COLUMNS.contains(&name.as_str()) {
                continue;
            }
            if !columns.contains(name) {
                columns.push(name.clone());
            }
        }
    }

    let mut table = Table::new(columns);
    for record in records {
        let mut row = Vec::with_capacity(table.columns.len());
        row.push(canonical_cell(record.time.clone(), record, "time"));
        row.push(numeric_cell(record.lat, record, "lat"));
        row.push(numeric_cell(record.lon, record, "lon"));
        row.push(numeric_cell(record.depth, record, "depth"));
        for name in &table.columns[CANONICAL_COLUMNS.len()..] {
            row.push(match record.extra(name) {
                Some(value) => CellValue::Text(value.to_string()),
                None => CellValue::Missing,
            });
        }
        table.push_row(row);
    }
    table
}

/// A canonical cell: the normalized value, or a verbatim pass-through from
/// a source field of the same name, or blank.
fn canonical_cell(value: Option<String>, record: &NormalizedRecord, name: &str) -> CellValue {
    match value.or_else(|| record.extra(name).map(str::to_string)) {
        Some(text) => CellValue::Text(text),
        None => CellValue::Missing,
    }
}

fn numeric_cell(value: Option<f64>, record: &NormalizedRecord, name: &str) -> CellValue {
    canonical_cell(value.map(format_numeric), record, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_header_only_table() {
        let table = assemble_table(&[]);
        assert_eq!(table.columns, ["time", "lat", "lon", "depth"]);
        assert_eq!(table.record_count(), 0);
    }

    #[test]
    fn canonical_columns_always_lead() {
        let record = NormalizedRecord {
            depth: Some(9.0),
            extras: vec![("run".to_string(), "SRR1".to_string())],
            ..NormalizedRecord::default()
        };
        let table = assemble_table(&[record]);
        assert_eq!(table.columns, ["time", "lat", "lon", "depth", "run"]);
        assert_eq!(
            table.rows[0],
            vec![
                CellValue::Missing,
                CellValue::Missing,
                CellValue::Missing,
                CellValue::Text("9".to_string()),
                CellValue::Text("SRR1".to_string()),
            ]
        );
    }

    #[test]
    fn column_union_keeps_first_seen_order() {
        let first = NormalizedRecord {
            extras: vec![
                ("run".to_string(), "SRR1".to_string()),
                ("spots".to_string(), "1107".to_string()),
            ],
            ..NormalizedRecord::default()
        };
        let second = NormalizedRecord {
            extras: vec![
                ("bio_sample".to_string(), "SAMN1".to_string()),
                ("run".to_string(), "SRR2".to_string()),
            ],
            ..NormalizedRecord::default()
        };
        let table = assemble_table(&[first, second]);
        assert_eq!(
            table.columns,
            ["time", "lat", "lon", "depth", "run", "spots", "bio_sample"]
        );
        // Missing cells stay blank.
        assert_eq!(table.rows[0][6], CellValue::Missing);
        assert_eq!(table.rows[1][5], CellValue::Missing);
    }

    #[test]
    fn unparseable_canonical_named_value_passes_through() {
        let record = NormalizedRecord {
            extras: vec![("depth".to_string(), "surface".to_string())],
            ..NormalizedRecord::default()
        };
        let table = assemble_table(&[record]);
        assert_eq!(table.columns, ["time", "lat", "lon", "depth"]);
        assert_eq!(table.rows[0][3], CellValue::Text("surface".to_string()));
    }
}
