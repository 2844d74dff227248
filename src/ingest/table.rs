// src/ingest/table.rs

//! CSV table reading.
//!
//! The input contract: a CSV file whose first row is the header row. Column
//! 0 is the node identifier, column 1 the dependency identifier, every
//! further column an attribute. Attribute types are declared per header name
//! in the `[columns]` config section; undeclared headers are text.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use crate::config::ColumnType;

/// A header: its name and declared type.
#[derive(Debug, Clone)]
pub struct Header {
    pub name: String,
    pub column_type: ColumnType,
}

/// The raw tabular input: ordered headers plus string rows.
///
/// Rows may be shorter than the header list; missing trailing cells read as
/// empty (and coerce to the `NO_DATA` sentinel).
#[derive(Debug, Clone)]
pub struct DataTable {
    pub headers: Vec<Header>,
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Headers describing attributes (everything after node / dependency).
    pub fn attribute_headers(&self) -> &[Header] {
        &self.headers[2..]
    }
}

/// Read a data table from a CSV file on disk.
pub fn read_table(
    path: impl AsRef<Path>,
    columns: &BTreeMap<String, ColumnType>,
) -> Result<DataTable> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening data file at {:?}", path))?;
    read_table_from_reader(BufReader::new(file), columns)
        .with_context(|| format!("reading data table from {:?}", path))
}

/// Read a data table from any reader (used by tests and the path variant).
pub fn read_table_from_reader<R: Read>(
    reader: R,
    columns: &BTreeMap<String, ColumnType>,
) -> Result<DataTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false) // we keep the header row ourselves
        .flexible(true)
        .from_reader(reader);

    let mut records = csv_reader.records();

    let header_record = match records.next() {
        Some(record) => record.context("reading CSV header row")?,
        None => return Err(anyhow!("data table is empty (no header row)")),
    };

    if header_record.len() < 2 {
        return Err(anyhow!(
            "data table must have at least two columns (node, dependency); got {}",
            header_record.len()
        ));
    }

    let headers: Vec<Header> = header_record
        .iter()
        .map(|name| Header {
            name: name.to_string(),
            column_type: columns.get(name).copied().unwrap_or_default(),
        })
        .collect();

    let mut rows = Vec::new();
    for record in records {
        let record = record.context("reading CSV data row")?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }

    Ok(DataTable { headers, rows })
}
