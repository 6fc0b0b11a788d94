use super::column::{Column, ColumnKind};
use super::player::PlayerRecord;
use super::table::Table;
use std::collections::BTreeSet;

/// Sentinel position value meaning "no position filter"
pub const ALL_POSITIONS: &str = "all";

/// The canonical, read-only player table shared by every recomputation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: BTreeSet<Column>,
    players: Vec<PlayerRecord>,
}

impl Dataset {
    pub fn new(columns: impl IntoIterator<Item = Column>, players: Vec<PlayerRecord>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
            players,
        }
    }

    /// An empty dataset that still declares the placeholder columns
    pub fn placeholder() -> Self {
        Self::new(Column::PLACEHOLDER, Vec::new())
    }

    /// Build typed records from a normalized table.
    /// Headers that are not canonical column names are ignored.
    pub fn from_table(table: &Table) -> Self {
        let present: Vec<(Column, usize)> = Column::ALL
            .iter()
            .filter_map(|c| table.column_index(c.name()).map(|idx| (*c, idx)))
            .collect();

        let players = (0..table.len())
            .map(|row| {
                let mut player = PlayerRecord::default();
                for &(column, idx) in &present {
                    let cell = table.cell(row, idx);
                    match (column, column.kind()) {
                        (Column::Player, _) => player.name = cell.as_text().unwrap_or_default(),
                        (Column::Pos, _) => player.position = cell.as_text(),
                        (Column::Squad, _) => player.team = cell.as_text(),
                        (_, ColumnKind::Flag) => player.is_u23 = cell.as_bool(),
                        (_, _) => player.set_stat(column, cell.as_number()),
                    }
                }
                player
            })
            .collect();

        Self {
            columns: present.into_iter().map(|(c, _)| c).collect(),
            players,
        }
    }

    pub fn has(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    /// Present columns in canonical order
    pub fn columns(&self) -> impl Iterator<Item = Column> + '_ {
        self.columns.iter().copied()
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Choices for a position selector: the "all" sentinel followed by
    /// the distinct non-empty positions, sorted
    pub fn position_options(&self) -> Vec<String> {
        let mut options = vec![ALL_POSITIONS.to_string()];
        if !self.has(Column::Pos) {
            return options;
        }

        let positions: BTreeSet<&str> = self
            .players
            .iter()
            .filter_map(|p| p.position.as_deref())
            .map(str::trim)
            .filter(|p| !p.is_empty() && !p.eq_ignore_ascii_case("nan"))
            .collect();

        options.extend(positions.into_iter().map(String::from));
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::table::Cell;

    #[test]
    fn test_placeholder_declares_expected_columns() {
        let ds = Dataset::placeholder();
        assert!(ds.is_empty());
        for col in Column::PLACEHOLDER {
            assert!(ds.has(col));
        }
        assert!(!ds.has(Column::XG));
    }

    #[test]
    fn test_from_table_reads_typed_cells() {
        let table = Table {
            columns: vec!["Player".into(), "Squad".into(), "Gls".into(), "U23".into(), "Extra".into()],
            rows: vec![
                vec![
                    Cell::Text("A".into()),
                    Cell::Text("X".into()),
                    Cell::Number(3.0),
                    Cell::Bool(true),
                    Cell::Text("ignored".into()),
                ],
                vec![Cell::Null, Cell::Null, Cell::Null, Cell::Bool(false), Cell::Null],
            ],
        };

        let ds = Dataset::from_table(&table);
        assert_eq!(ds.len(), 2);
        assert!(ds.has(Column::Gls));
        assert!(!ds.has(Column::Age));
        assert_eq!(
            ds.columns().collect::<Vec<_>>(),
            vec![Column::Player, Column::Squad, Column::Gls, Column::U23]
        );

        let a = &ds.players()[0];
        assert_eq!(a.name, "A");
        assert_eq!(a.team.as_deref(), Some("X"));
        assert_eq!(a.goals, Some(3.0));
        assert!(a.is_u23);

        let b = &ds.players()[1];
        assert_eq!(b.name, "");
        assert_eq!(b.goals, None);
        assert!(!b.is_u23);
    }

    #[test]
    fn test_position_options() {
        let ds = Dataset::new(
            [Column::Player, Column::Pos],
            vec![
                PlayerRecord::new("A").with_position("MF"),
                PlayerRecord::new("B").with_position("DF"),
                PlayerRecord::new("C").with_position("MF"),
                PlayerRecord::new("D"),
                PlayerRecord::new("E").with_position("FW,MF"),
            ],
        );
        assert_eq!(ds.position_options(), vec!["all", "DF", "FW,MF", "MF"]);

        let no_pos = Dataset::new([Column::Player], vec![PlayerRecord::new("A")]);
        assert_eq!(no_pos.position_options(), vec!["all"]);
    }
}
