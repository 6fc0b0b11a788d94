use super::format::{integer, one_decimal};
use crate::model::{Column, ColumnKind, Dataset, PlayerRecord};
use std::cmp::Ordering;

/// Table columns in display order; only those present are shown
pub const TABLE_COLUMNS: [Column; 19] = [
    Column::Player,
    Column::Pos,
    Column::Squad,
    Column::Age,
    Column::MP,
    Column::Min,
    Column::Gls,
    Column::Ast,
    Column::Sh,
    Column::SoT,
    Column::SoTPct,
    Column::GoalsPerShot,
    Column::XG,
    Column::KP,
    Column::XA,
    Column::Nineties,
    Column::Cmp,
    Column::Tkl,
    Column::TklPct,
];

/// Columns shown with one decimal place; the rest are whole numbers
const DECIMAL_COLUMNS: [Column; 6] = [
    Column::SoTPct,
    Column::GoalsPerShot,
    Column::XG,
    Column::XA,
    Column::Nineties,
    Column::TklPct,
];

pub const NO_COLUMNS_MESSAGE: &str = "No displayable columns found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    pub id: String,
}

impl ColumnDef {
    fn new(name: &str, id: &str) -> Self {
        Self {
            name: name.to_string(),
            id: id.to_string(),
        }
    }
}

/// Table rows of formatted cells; `None` is a blank cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub columns: Vec<ColumnDef>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl TableView {
    /// A single "Info" column holding one message row
    pub fn placeholder(message: &str) -> Self {
        Self {
            columns: vec![ColumnDef::new("Info", "info")],
            rows: vec![vec![Some(message.to_string())]],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.columns.len() == 1 && self.columns[0].id == "info"
    }

    /// Value of a named column in a row
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.columns.iter().position(|c| c.id == column)?;
        self.rows.get(row)?.get(idx)?.as_deref()
    }
}

/// Build the table from the visualization rows, sorted by goals (or minutes)
/// descending on the unformatted values. `empty_message` fills the
/// placeholder row when there are no rows.
pub fn build_table(dataset: &Dataset, rows: &[&PlayerRecord], empty_message: &str) -> TableView {
    if rows.is_empty() {
        return TableView::placeholder(empty_message);
    }

    let columns: Vec<Column> = TABLE_COLUMNS
        .iter()
        .copied()
        .filter(|c| dataset.has(*c))
        .collect();
    if columns.is_empty() {
        return TableView::placeholder(NO_COLUMNS_MESSAGE);
    }

    let mut sorted: Vec<&PlayerRecord> = rows.to_vec();
    if let Some(key) = sort_column(dataset) {
        sorted.sort_by(|a, b| descending_nulls_last(a.stat(key), b.stat(key)));
    }

    TableView {
        columns: columns
            .iter()
            .map(|c| ColumnDef::new(c.name(), c.name()))
            .collect(),
        rows: sorted
            .iter()
            .map(|p| columns.iter().map(|c| format_cell(p, *c)).collect())
            .collect(),
    }
}

fn sort_column(dataset: &Dataset) -> Option<Column> {
    [Column::Gls, Column::Min]
        .into_iter()
        .find(|c| dataset.has(*c))
}

fn descending_nulls_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn format_cell(player: &PlayerRecord, column: Column) -> Option<String> {
    match column.kind() {
        // The U23 flag is never a table column
        ColumnKind::Text | ColumnKind::Flag => player.text(column).map(String::from),
        ColumnKind::Number => {
            let value = player.stat(column)?;
            Some(match column {
                Column::TklPct => format!("{}%", one_decimal(value)),
                c if DECIMAL_COLUMNS.contains(&c) => one_decimal(value),
                _ => integer(value),
            })
        }
    }
}
