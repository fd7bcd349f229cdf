//! The per-file export table.

use serde::{Deserialize, Serialize};

/// The canonical columns, always first and always in this order.
pub const CANONICAL_COLUMNS: [&str; 4] = ["time", "lat", "lon", "depth"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    /// The serialized cell content; missing cells are blank.
    pub fn as_str(&self) -> &str {
        match self {
            CellValue::Text(value) => value,
            CellValue::Missing => "",
        }
    }
}

/// One table per input file: canonical columns followed by the union of all
/// other field names seen across the file's records, in first-seen order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn record_count(&self) -> usize {
        self.rows.len()
    }

    /// Columns after the canonical four.
    pub fn extra_columns(&self) -> &[String] {
        &self.columns[CANONICAL_COLUMNS.len().min(self.columns.len())..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_columns_skip_canonical() {
        let table = Table::new(vec![
            "time".to_string(),
            "lat".to_string(),
            "lon".to_string(),
            "depth".to_string(),
            "run".to_string(),
        ]);
        assert_eq!(table.extra_columns(), ["run".to_string()]);
    }

    #[test]
    fn missing_cell_is_blank() {
        assert_eq!(CellValue::Missing.as_str(), "");
        assert_eq!(CellValue::Text("9".to_string()).as_str(), "9");
    }
}
