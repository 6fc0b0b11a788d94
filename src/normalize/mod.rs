//! Schema normalization: map source headers to canonical columns, coerce
//! numeric columns and ensure the U23 flag exists.

pub mod coerce;

use crate::model::{Cell, Column, Dataset, Table};
use coerce::{parse_flag, parse_number};

/// Players strictly younger than this are U23
pub const U23_AGE_LIMIT: f64 = 23.0;

/// A source header renamed to its canonical column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub from: String,
    pub to: Column,
}

/// Normalize a raw table and build the canonical dataset from it
pub fn normalize(table: Table) -> Dataset {
    Dataset::from_table(&normalize_table(table))
}

/// Normalize a raw table in three passes: rename, coerce, flag.
/// Running this on its own output changes nothing.
pub fn normalize_table(mut table: Table) -> Table {
    let preview: Vec<&str> = table.columns.iter().take(10).map(String::as_str).collect();
    log::info!("First 10 columns found: {:?}", preview);

    let renames = resolve_columns(&table);
    if !renames.is_empty() {
        log::info!(
            "Applying column mapping: {}",
            renames
                .iter()
                .map(|r| format!("'{}' -> '{}'", r.from, r.to))
                .collect::<Vec<_>>()
                .join(", ")
        );
        apply_renames(&mut table, &renames);
    }
    log::debug!("Columns after renaming: {:?}", table.columns);

    coerce_numeric_columns(&mut table);
    ensure_u23_flag(&mut table);

    log::info!(
        "Normalization complete: {} rows, {} columns",
        table.len(),
        table.columns.len()
    );
    table
}

/// Find, for every canonical column, the first alias present in the table.
/// Columns found under their canonical name need no rename and are omitted.
pub fn resolve_columns(table: &Table) -> Vec<Rename> {
    let mut renames = Vec::new();

    for column in Column::ALL {
        if column == Column::U23 {
            continue;
        }

        match column.aliases().iter().find(|alias| table.has_column(alias)) {
            Some(alias) if *alias != column.name() => renames.push(Rename {
                from: alias.to_string(),
                to: column,
            }),
            Some(_) => {}
            None => match missing_column_level(column) {
                log::Level::Warn => log::warn!(
                    "Required column '{}' not found using potential names: {:?}",
                    column,
                    column.aliases()
                ),
                level => log::log!(level, "Optional column '{}' not found.", column),
            },
        }
    }

    renames
}

/// Severity used when a column is absent: advanced stats that many
/// sources lack are only noted, everything else warns
pub fn missing_column_level(column: Column) -> log::Level {
    if column.is_optional() {
        log::Level::Info
    } else {
        log::Level::Warn
    }
}

fn apply_renames(table: &mut Table, renames: &[Rename]) {
    for header in &mut table.columns {
        if let Some(rename) = renames.iter().find(|r| r.from == *header) {
            *header = rename.to.name().to_string();
        }
    }
}

/// Coerce every present numeric column; failures become null and are
/// reported once per column
fn coerce_numeric_columns(table: &mut Table) {
    for column in Column::NUMERIC {
        let Some(idx) = table.column_index(column.name()) else {
            continue;
        };

        let mut failures = 0usize;
        table.map_column(idx, |cell| match parse_number(cell) {
            Some(n) => Cell::Number(n),
            None => {
                if !cell.is_null() {
                    failures += 1;
                }
                Cell::Null
            }
        });

        if failures > 0 {
            log::warn!(
                "Column '{}': {} value(s) could not be converted to numbers and were set to null",
                column,
                failures
            );
        } else {
            log::debug!("Converted '{}' to numeric.", column);
        }
    }
}

fn ensure_u23_flag(table: &mut Table) {
    let age_idx = table.column_index(Column::Age.name());

    if let Some(u23_idx) = table.column_index(Column::U23.name()) {
        table.map_column(u23_idx, |cell| Cell::Bool(parse_flag(cell)));
        log::debug!("'U23' column already exists. Ensured boolean type.");
    } else if let Some(age_idx) = age_idx {
        table.push_column(Column::U23.name(), |row| {
            let is_u23 = row
                .get(age_idx)
                .and_then(Cell::as_number)
                .map(|age| age < U23_AGE_LIMIT)
                .unwrap_or(false);
            Cell::Bool(is_u23)
        });
        let u23_idx = table.columns.len() - 1;
        let count = (0..table.len())
            .filter(|&row| table.cell(row, u23_idx).as_bool())
            .count();
        log::info!(
            "Added 'U23' flag based on 'Age'. Found {} players under 23.",
            count
        );
    } else {
        log::warn!("'Age' column not found. Cannot create 'U23' flag; defaulting to false.");
        table.push_column(Column::U23.name(), |_| Cell::Bool(false));
    }
}
