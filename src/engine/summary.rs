use super::format::{integer, one_decimal, share_of, PLACEHOLDER};
use crate::model::{Column, Dataset, PlayerRecord};

/// Raw reductions over one row-set. Missing values are excluded, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub players: usize,
    pub goals: f64,
    pub assists: f64,
    pub average_age: Option<f64>,
}

impl Totals {
    pub fn of(dataset: &Dataset, rows: &[&PlayerRecord]) -> Self {
        Self {
            players: rows.len(),
            goals: sum(dataset, rows, Column::Gls),
            assists: sum(dataset, rows, Column::Ast),
            average_age: mean(dataset, rows, Column::Age),
        }
    }
}

fn sum(dataset: &Dataset, rows: &[&PlayerRecord], column: Column) -> f64 {
    if !dataset.has(column) {
        return 0.0;
    }
    rows.iter().filter_map(|p| p.stat(column)).sum()
}

fn mean(dataset: &Dataset, rows: &[&PlayerRecord], column: Column) -> Option<f64> {
    if !dataset.has(column) {
        return None;
    }
    let values: Vec<f64> = rows.iter().filter_map(|p| p.stat(column)).collect();
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// The eight summary card strings comparing U23 players to the filtered set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCards {
    pub u23_players: String,
    pub players_pct: String,
    pub u23_average_age: String,
    pub overall_average_age: String,
    pub u23_goals: String,
    pub goals_pct: String,
    pub u23_assists: String,
    pub assists_pct: String,
}

impl SummaryCards {
    /// Labels matching [`SummaryCards::as_array`]
    pub const LABELS: [&'static str; 8] = [
        "U23 Players",
        "Share of Players",
        "U23 Average Age",
        "Overall Average Age",
        "U23 Goals",
        "Share of Goals",
        "U23 Assists",
        "Share of Assists",
    ];

    pub fn from_totals(overall: &Totals, u23: &Totals) -> Self {
        Self {
            u23_players: u23.players.to_string(),
            players_pct: share_of(
                u23.players as f64,
                overall.players as f64,
                overall.players.to_string(),
            ),
            u23_average_age: match u23.average_age {
                Some(age) if age > 0.0 => one_decimal(age),
                _ => PLACEHOLDER.to_string(),
            },
            overall_average_age: match overall.average_age {
                Some(age) if age > 0.0 => format!("vs. {} overall", one_decimal(age)),
                _ => format!("vs. {}", PLACEHOLDER),
            },
            u23_goals: integer(u23.goals),
            goals_pct: share_of(u23.goals, overall.goals, integer(overall.goals)),
            u23_assists: integer(u23.assists),
            assists_pct: share_of(u23.assists, overall.assists, integer(overall.assists)),
        }
    }

    /// Card values in display order
    pub fn as_array(&self) -> [&str; 8] {
        [
            self.u23_players.as_str(),
            self.players_pct.as_str(),
            self.u23_average_age.as_str(),
            self.overall_average_age.as_str(),
            self.u23_goals.as_str(),
            self.goals_pct.as_str(),
            self.u23_assists.as_str(),
            self.assists_pct.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Column::*;

    fn dataset() -> Dataset {
        Dataset::new(
            [Player, Age, Gls, Ast, U23],
            vec![
                PlayerRecord::new("A").with_age(22.0).with_stat(Gls, 10.0).with_stat(Ast, 2.0),
                PlayerRecord::new("B").with_age(25.0).with_stat(Gls, 15.0),
                PlayerRecord::new("C").with_age(20.0).with_stat(Gls, 5.0).with_stat(Ast, 2.0),
                PlayerRecord::new("D"),
            ],
        )
    }

    #[test]
    fn test_totals_exclude_missing_values() {
        let ds = dataset();
        let rows: Vec<&PlayerRecord> = ds.players().iter().collect();
        let totals = Totals::of(&ds, &rows);
        assert_eq!(totals.players, 4);
        assert_eq!(totals.goals, 30.0);
        assert_eq!(totals.assists, 4.0);
        // D has no age and is not averaged in as zero
        assert_eq!(totals.average_age, Some(67.0 / 3.0));
    }

    #[test]
    fn test_cards() {
        let ds = dataset();
        let rows: Vec<&PlayerRecord> = ds.players().iter().collect();
        let u23: Vec<&PlayerRecord> = rows.iter().copied().filter(|p| p.is_u23).collect();
        let cards = SummaryCards::from_totals(&Totals::of(&ds, &rows), &Totals::of(&ds, &u23));

        assert_eq!(cards.u23_players, "2");
        assert_eq!(cards.players_pct, "50.0% of 4");
        assert_eq!(cards.u23_average_age, "21.0");
        assert_eq!(cards.overall_average_age, "vs. 22.3 overall");
        assert_eq!(cards.u23_goals, "15");
        assert_eq!(cards.goals_pct, "50.0% of 30");
        assert_eq!(cards.u23_assists, "4");
        assert_eq!(cards.assists_pct, "100.0% of 4");
    }

    #[test]
    fn test_cards_with_zero_denominators() {
        let cards = SummaryCards::from_totals(&Totals::default(), &Totals::default());
        assert_eq!(
            cards.as_array(),
            ["0", "0% of 0", "--", "vs. --", "0", "0% of 0", "0", "0% of 0"]
        );
    }

    #[test]
    fn test_absent_columns_reduce_to_nothing() {
        let ds = Dataset::new([Player, U23], vec![PlayerRecord::new("A")]);
        let rows: Vec<&PlayerRecord> = ds.players().iter().collect();
        let totals = Totals::of(&ds, &rows);
        assert_eq!(totals.goals, 0.0);
        assert_eq!(totals.average_age, None);
    }
}
