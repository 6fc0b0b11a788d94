use crate::error::{DashboardError, Result};
use crate::model::{Cell, Table};
use csv::{ReaderBuilder, Trim};
use std::io::Read;
use std::path::Path;

/// Read CSV data with a header row into a raw table.
/// Every non-blank field is kept as text; typing happens in normalization.
pub fn read_table_from<R: Read>(rdr: R) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(rdr);

    let headers = reader.headers()?.clone();
    let mut table = Table::new(headers.iter().map(String::from).collect());
    if table.columns.is_empty() {
        return Ok(table);
    }

    for result in reader.records() {
        let record = result?;
        let mut row: Vec<Cell> = record.iter().map(Cell::from_field).collect();
        row.resize(table.columns.len(), Cell::Null);
        table.rows.push(row);
    }

    Ok(table)
}

/// Read a CSV file into a raw table
pub fn read_table(path: &Path) -> Result<Table> {
    let file = std::fs::File::open(path)?;
    let table = read_table_from(file)?;
    if table.columns.is_empty() {
        return Err(DashboardError::EmptyHeader(path.to_path_buf()));
    }
    Ok(table)
}
