//! "Top young performer" cards, each a single best record among U23 players

use super::format::{
    integer, integer_or_placeholder, one_decimal_or_placeholder, percent_or_placeholder,
    text_or_placeholder, PLACEHOLDER,
};
use crate::model::{Column, Dataset, PlayerRecord};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardKind {
    TopScorer,
    BestPlaymaker,
    MostPasses,
    MostTackles,
}

impl LeaderboardKind {
    pub const ALL: [LeaderboardKind; 4] = [
        LeaderboardKind::TopScorer,
        LeaderboardKind::BestPlaymaker,
        LeaderboardKind::MostPasses,
        LeaderboardKind::MostTackles,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            LeaderboardKind::TopScorer => "Top Goal Scorer",
            LeaderboardKind::BestPlaymaker => "Best Playmaker",
            LeaderboardKind::MostPasses => "Most Passes",
            LeaderboardKind::MostTackles => "Most Tackles",
        }
    }

    /// Labels of the three stat values shown under the player's name
    pub fn labels(&self) -> [&'static str; 3] {
        match self {
            LeaderboardKind::TopScorer => ["Goals", "xG", "Age"],
            LeaderboardKind::BestPlaymaker => ["Assists", "Key Passes", "xA"],
            LeaderboardKind::MostPasses => ["Passes", "Position", "Age"],
            LeaderboardKind::MostTackles => ["Tackles", "Success %", "Position"],
        }
    }

    /// The statistic the card ranks by
    pub fn driving_column(&self) -> Column {
        match self {
            LeaderboardKind::TopScorer => Column::Gls,
            LeaderboardKind::BestPlaymaker => Column::Ast,
            LeaderboardKind::MostPasses => Column::Cmp,
            LeaderboardKind::MostTackles => Column::Tkl,
        }
    }

    /// Descending sort keys; minutes played breaks ties
    pub fn sort_columns(&self) -> &'static [Column] {
        match self {
            LeaderboardKind::TopScorer => &[Column::Gls, Column::Min],
            LeaderboardKind::BestPlaymaker => &[Column::Ast, Column::KP, Column::Min],
            LeaderboardKind::MostPasses => &[Column::Cmp, Column::Min],
            LeaderboardKind::MostTackles => &[Column::Tkl, Column::Min],
        }
    }

    fn values(&self, dataset: &Dataset, player: &PlayerRecord) -> [String; 3] {
        let position = || {
            if dataset.has(Column::Pos) {
                text_or_placeholder(player.position.as_deref())
            } else {
                PLACEHOLDER.to_string()
            }
        };
        // The leader always has a value for the driving stat
        let driving = integer(player.stat(self.driving_column()).unwrap_or(0.0));

        match self {
            LeaderboardKind::TopScorer => [
                driving,
                one_decimal_or_placeholder(player.expected_goals),
                integer_or_placeholder(player.age),
            ],
            LeaderboardKind::BestPlaymaker => [
                driving,
                integer_or_placeholder(player.key_passes),
                one_decimal_or_placeholder(player.expected_assists),
            ],
            LeaderboardKind::MostPasses => [
                driving,
                position(),
                integer_or_placeholder(player.age),
            ],
            LeaderboardKind::MostTackles => [
                driving,
                percent_or_placeholder(player.tackle_success_pct),
                position(),
            ],
        }
    }
}

/// One leaderboard card: the leader's name and three formatted stats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardCard {
    pub kind: LeaderboardKind,
    pub name: String,
    pub values: [String; 3],
}

impl LeaderboardCard {
    /// A card with every field set to "--"
    pub fn placeholder(kind: LeaderboardKind) -> Self {
        Self {
            kind,
            name: PLACEHOLDER.to_string(),
            values: std::array::from_fn(|_| PLACEHOLDER.to_string()),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.name == PLACEHOLDER && self.values.iter().all(|v| v == PLACEHOLDER)
    }

    /// Label and value pairs for the three stats
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.kind
            .labels()
            .into_iter()
            .zip(self.values.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboards {
    pub top_scorer: LeaderboardCard,
    pub best_playmaker: LeaderboardCard,
    pub most_passes: LeaderboardCard,
    pub most_tackles: LeaderboardCard,
}

impl Leaderboards {
    pub fn placeholder() -> Self {
        Self {
            top_scorer: LeaderboardCard::placeholder(LeaderboardKind::TopScorer),
            best_playmaker: LeaderboardCard::placeholder(LeaderboardKind::BestPlaymaker),
            most_passes: LeaderboardCard::placeholder(LeaderboardKind::MostPasses),
            most_tackles: LeaderboardCard::placeholder(LeaderboardKind::MostTackles),
        }
    }

    pub fn cards(&self) -> [&LeaderboardCard; 4] {
        [
            &self.top_scorer,
            &self.best_playmaker,
            &self.most_passes,
            &self.most_tackles,
        ]
    }
}

/// Compute all four cards from the U23 selection
pub fn compute_leaderboards(dataset: &Dataset, u23: &[&PlayerRecord]) -> Leaderboards {
    Leaderboards {
        top_scorer: leaderboard_card(dataset, u23, LeaderboardKind::TopScorer),
        best_playmaker: leaderboard_card(dataset, u23, LeaderboardKind::BestPlaymaker),
        most_passes: leaderboard_card(dataset, u23, LeaderboardKind::MostPasses),
        most_tackles: leaderboard_card(dataset, u23, LeaderboardKind::MostTackles),
    }
}

/// The card for one kind; a placeholder when there is no leader
pub fn leaderboard_card(
    dataset: &Dataset,
    rows: &[&PlayerRecord],
    kind: LeaderboardKind,
) -> LeaderboardCard {
    let Some(leader) = find_leader(dataset, rows, kind) else {
        log::debug!(
            "Column '{}' not found or no data for {} card.",
            kind.driving_column(),
            kind.title()
        );
        return LeaderboardCard::placeholder(kind);
    };

    let name = if dataset.has(Column::Player) {
        text_or_placeholder(Some(&leader.name))
    } else {
        PLACEHOLDER.to_string()
    };

    LeaderboardCard {
        kind,
        name,
        values: kind.values(dataset, leader),
    }
}

/// First row under a descending multi-key ordering with nulls last.
/// None when the driving column is absent or has no values in `rows`.
pub fn find_leader<'a>(
    dataset: &Dataset,
    rows: &[&'a PlayerRecord],
    kind: LeaderboardKind,
) -> Option<&'a PlayerRecord> {
    let driving = kind.driving_column();
    if !dataset.has(driving) || rows.iter().all(|p| p.stat(driving).is_none()) {
        return None;
    }

    let keys: Vec<Column> = kind
        .sort_columns()
        .iter()
        .copied()
        .filter(|c| dataset.has(*c))
        .collect();

    // min_by keeps the earliest of equal rows
    rows.iter()
        .copied()
        .min_by(|a, b| compare_descending(a, b, &keys))
}

fn compare_descending(a: &PlayerRecord, b: &PlayerRecord, keys: &[Column]) -> Ordering {
    for key in keys {
        let ord = match (a.stat(*key), b.stat(*key)) {
            (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Column::*;

    fn all_columns() -> Vec<Column> {
        Column::ALL.to_vec()
    }

    fn refs(players: &[PlayerRecord]) -> Vec<&PlayerRecord> {
        players.iter().collect()
    }

    #[test]
    fn test_top_scorer() {
        let ds = Dataset::new(
            all_columns(),
            vec![
                PlayerRecord::new("A").with_age(22.0).with_stat(Gls, 10.0).with_stat(XG, 8.44),
                PlayerRecord::new("C").with_age(20.0).with_stat(Gls, 5.0),
            ],
        );
        let card = leaderboard_card(&ds, &refs(ds.players()), LeaderboardKind::TopScorer);
        assert_eq!(card.name, "A");
        assert_eq!(card.values, ["10", "8.4", "22"].map(String::from));
    }

    #[test]
    fn test_ties_broken_by_minutes() {
        let ds = Dataset::new(
            all_columns(),
            vec![
                PlayerRecord::new("Low").with_stat(Gls, 7.0).with_stat(Min, 400.0),
                PlayerRecord::new("High").with_stat(Gls, 7.0).with_stat(Min, 1200.0),
                PlayerRecord::new("Fewer").with_stat(Gls, 3.0).with_stat(Min, 2000.0),
            ],
        );
        let leader = find_leader(&ds, &refs(ds.players()), LeaderboardKind::TopScorer).unwrap();
        assert_eq!(leader.name, "High");
    }

    #[test]
    fn test_full_tie_keeps_first_row() {
        let ds = Dataset::new(
            all_columns(),
            vec![
                PlayerRecord::new("First").with_stat(Tkl, 30.0),
                PlayerRecord::new("Second").with_stat(Tkl, 30.0),
            ],
        );
        let leader = find_leader(&ds, &refs(ds.players()), LeaderboardKind::MostTackles).unwrap();
        assert_eq!(leader.name, "First");
    }

    #[test]
    fn test_nulls_sort_last() {
        let ds = Dataset::new(
            all_columns(),
            vec![
                PlayerRecord::new("NoAssists").with_stat(Min, 3000.0),
                PlayerRecord::new("One").with_stat(Ast, 1.0),
            ],
        );
        let card = leaderboard_card(&ds, &refs(ds.players()), LeaderboardKind::BestPlaymaker);
        assert_eq!(card.name, "One");
        assert_eq!(card.values, ["1", "--", "--"].map(String::from));
    }

    #[test]
    fn test_playmaker_uses_key_passes_before_minutes() {
        let ds = Dataset::new(
            all_columns(),
            vec![
                PlayerRecord::new("A").with_stat(Ast, 4.0).with_stat(KP, 10.0).with_stat(Min, 2000.0),
                PlayerRecord::new("B")
                    .with_stat(Ast, 4.0)
                    .with_stat(KP, 25.0)
                    .with_stat(Min, 500.0)
                    .with_stat(XA, 3.27),
            ],
        );
        let card = leaderboard_card(&ds, &refs(ds.players()), LeaderboardKind::BestPlaymaker);
        assert_eq!(card.name, "B");
        assert_eq!(card.values, ["4", "25", "3.3"].map(String::from));
    }

    #[test]
    fn test_passes_and_tackles_cards() {
        let ds = Dataset::new(
            all_columns(),
            vec![
                PlayerRecord::new("Passer")
                    .with_position("MF")
                    .with_age(21.0)
                    .with_stat(Cmp, 812.0)
                    .with_stat(Tkl, 12.0),
                PlayerRecord::new("Tackler")
                    .with_position("DF")
                    .with_stat(Cmp, 300.0)
                    .with_stat(Tkl, 48.0)
                    .with_stat(TklPct, 61.27),
            ],
        );
        let boards = compute_leaderboards(&ds, &refs(ds.players()));
        assert_eq!(boards.most_passes.name, "Passer");
        assert_eq!(boards.most_passes.values, ["812", "MF", "21"].map(String::from));
        assert_eq!(boards.most_tackles.name, "Tackler");
        assert_eq!(boards.most_tackles.values, ["48", "61.3%", "DF"].map(String::from));
    }

    #[test]
    fn test_placeholder_when_column_absent_or_all_null() {
        let ds = Dataset::new(
            [Player, Gls, Min, U23],
            vec![PlayerRecord::new("A").with_stat(Min, 90.0)],
        );
        let boards = compute_leaderboards(&ds, &refs(ds.players()));
        for card in boards.cards() {
            assert!(card.is_placeholder(), "{:?} should be a placeholder", card.kind);
        }
    }

    #[test]
    fn test_empty_selection_gives_placeholders() {
        let ds = Dataset::new(all_columns(), Vec::new());
        let boards = compute_leaderboards(&ds, &[]);
        assert_eq!(boards, Leaderboards::placeholder());
        let fields: Vec<_> = boards.top_scorer.fields().collect();
        assert_eq!(fields, vec![("Goals", "--"), ("xG", "--"), ("Age", "--")]);
    }
}
