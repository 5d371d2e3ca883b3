// src/output/mod.rs
pub mod csv;
pub mod table;

use serde_json::{Map, Value};

use crate::listing::{ListingRecord, HEADERS};

/// One record keyed by header label, in header order.
pub type StructuredRow = Map<String, Value>;

/// Every rendered form of one run's records. All three share `HEADERS`.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub console_table: String,
    /// Header row first, then one row per record. Cells are raw values.
    pub delimited_rows: Vec<Vec<String>>,
    pub structured_rows: Vec<StructuredRow>,
}

impl Rendered {
    pub fn csv_text(&self) -> String {
        csv::to_text(&self.delimited_rows)
    }
}

/// Table cells are kept on one line.
fn single_line(cell: &str) -> String {
    cell.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn render(records: &[ListingRecord]) -> Rendered {
    let console_rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| record.cells().iter().map(|cell| single_line(cell)).collect())
        .collect();

    let mut delimited_rows = Vec::with_capacity(records.len() + 1);
    delimited_rows.push(HEADERS.iter().map(|h| h.to_string()).collect());
    delimited_rows.extend(
        records
            .iter()
            .map(|record| record.cells().iter().map(|cell| cell.to_string()).collect()),
    );

    let structured_rows = records
        .iter()
        .map(|record| {
            HEADERS
                .iter()
                .zip(record.cells())
                .map(|(header, cell)| (header.to_string(), Value::String(cell.to_string())))
                .collect()
        })
        .collect();

    Rendered {
        console_table: table::render_table(&HEADERS, &console_rows),
        delimited_rows,
        structured_rows,
    }
}
