use crate::model::{Column, Dataset, PlayerRecord, Scope};
use serde::Serialize;
use std::collections::BTreeMap;

/// How many players the ranked charts show
pub const TOP_N: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    TopScorers,
    TopAssisters,
    TopMinutes,
    TeamGoals,
}

impl ChartKind {
    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::TopScorers => "Top 10 Goal Scorers",
            ChartKind::TopAssisters => "Top 10 Assist Providers",
            ChartKind::TopMinutes => "Top 10 Minutes Played",
            ChartKind::TeamGoals => "Total Goals by Team",
        }
    }

    /// Axis label for the numeric value
    pub fn value_label(&self) -> &'static str {
        match self {
            ChartKind::TopScorers => "Goals",
            ChartKind::TopAssisters => "Assists",
            ChartKind::TopMinutes => "Minutes",
            ChartKind::TeamGoals => "Total Goals",
        }
    }

    pub fn value_column(&self) -> Column {
        match self {
            ChartKind::TopScorers | ChartKind::TeamGoals => Column::Gls,
            ChartKind::TopAssisters => Column::Ast,
            ChartKind::TopMinutes => Column::Min,
        }
    }

    /// File-name friendly identifier
    pub fn slug(&self) -> &'static str {
        match self {
            ChartKind::TopScorers => "goals",
            ChartKind::TopAssisters => "assists",
            ChartKind::TopMinutes => "minutes",
            ChartKind::TeamGoals => "team_goals",
        }
    }
}

/// One bar: a player (or team) and its value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub label: String,
    pub team: Option<String>,
    pub value: f64,
}

/// Bars in ascending order, ready for a horizontal bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub kind: ChartKind,
    pub title: String,
    pub rows: Vec<ChartRow>,
}

impl ChartSeries {
    fn empty(kind: ChartKind, scope: Scope) -> Self {
        Self {
            kind,
            title: format!("{}{}", kind.title(), scope.title_suffix()),
            rows: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSet {
    pub goals: ChartSeries,
    pub assists: ChartSeries,
    pub minutes: ChartSeries,
    pub team_goals: ChartSeries,
}

impl ChartSet {
    pub fn all(&self) -> [&ChartSeries; 4] {
        [&self.goals, &self.assists, &self.minutes, &self.team_goals]
    }
}

pub fn build_charts(dataset: &Dataset, rows: &[&PlayerRecord], scope: Scope) -> ChartSet {
    ChartSet {
        goals: top_players(dataset, rows, ChartKind::TopScorers, scope),
        assists: top_players(dataset, rows, ChartKind::TopAssisters, scope),
        minutes: top_players(dataset, rows, ChartKind::TopMinutes, scope),
        team_goals: goals_by_team(dataset, rows, scope),
    }
}

/// The TOP_N players with the highest value, lowest first
pub fn top_players(
    dataset: &Dataset,
    rows: &[&PlayerRecord],
    kind: ChartKind,
    scope: Scope,
) -> ChartSeries {
    let mut series = ChartSeries::empty(kind, scope);
    let column = kind.value_column();
    if !dataset.has(column) {
        return series;
    }

    let mut ranked: Vec<ChartRow> = rows
        .iter()
        .filter_map(|p| {
            p.stat(column).map(|value| ChartRow {
                label: p.name.clone(),
                team: p.team.clone(),
                value,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
    ranked.truncate(TOP_N);
    ranked.sort_by(|a, b| a.value.total_cmp(&b.value));

    series.rows = ranked;
    series
}

/// Goals summed per team, lowest first
pub fn goals_by_team(dataset: &Dataset, rows: &[&PlayerRecord], scope: Scope) -> ChartSeries {
    let mut series = ChartSeries::empty(ChartKind::TeamGoals, scope);
    if !dataset.has(Column::Gls) || !dataset.has(Column::Squad) {
        return series;
    }

    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for player in rows {
        if let (Some(team), Some(goals)) = (player.team.as_deref(), player.goals) {
            *totals.entry(team).or_insert(0.0) += goals;
        }
    }

    let mut teams: Vec<ChartRow> = totals
        .into_iter()
        .map(|(team, value)| ChartRow {
            label: team.to_string(),
            team: Some(team.to_string()),
            value,
        })
        .collect();
    teams.sort_by(|a, b| a.value.total_cmp(&b.value));

    series.rows = teams;
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Column::*;

    fn labels(series: &ChartSeries) -> Vec<&str> {
        series.rows.iter().map(|r| r.label.as_str()).collect()
    }

    fn sample() -> Dataset {
        Dataset::new(
            [Player, Squad, Age, Min, Gls, U23],
            vec![
                PlayerRecord::new("A").with_team("X").with_age(22.0).with_stat(Gls, 10.0).with_stat(Min, 900.0),
                PlayerRecord::new("B").with_team("X").with_age(25.0).with_stat(Gls, 15.0).with_stat(Min, 800.0),
                PlayerRecord::new("C").with_team("Y").with_age(20.0).with_stat(Gls, 5.0).with_stat(Min, 200.0),
                PlayerRecord::new("D").with_stat(Min, 50.0),
            ],
        )
    }

    #[test]
    fn test_top_players_ascending() {
        let ds = sample();
        let rows: Vec<&PlayerRecord> = ds.players().iter().collect();
        let charts = build_charts(&ds, &rows, Scope::All);

        assert_eq!(labels(&charts.goals), vec!["C", "A", "B"]);
        assert_eq!(charts.goals.rows[2].value, 15.0);
        assert_eq!(charts.goals.rows[2].team.as_deref(), Some("X"));
        assert_eq!(charts.goals.title, "Top 10 Goal Scorers (Filtered)");
        assert_eq!(labels(&charts.minutes), vec!["D", "C", "B", "A"]);
        // No Ast column at all
        assert!(charts.assists.is_empty());
        assert_eq!(charts.assists.title, "Top 10 Assist Providers (Filtered)");
    }

    #[test]
    fn test_top_players_limited_to_ten() {
        let players = (0..15)
            .map(|i| PlayerRecord::new(&format!("P{}", i)).with_stat(Gls, i as f64))
            .collect();
        let ds = Dataset::new([Player, Gls], players);
        let rows: Vec<&PlayerRecord> = ds.players().iter().collect();

        let series = top_players(&ds, &rows, ChartKind::TopScorers, Scope::U23Only);
        assert_eq!(series.rows.len(), TOP_N);
        assert_eq!(series.rows.first().map(|r| r.value), Some(5.0));
        assert_eq!(series.rows.last().map(|r| r.value), Some(14.0));
        assert_eq!(series.title, "Top 10 Goal Scorers (U23 Only)");
    }

    #[test]
    fn test_goals_by_team() {
        let ds = sample();
        let rows: Vec<&PlayerRecord> = ds.players().iter().collect();
        let series = goals_by_team(&ds, &rows, Scope::All);
        assert_eq!(labels(&series), vec!["Y", "X"]);
        assert_eq!(series.rows[1].value, 25.0);
    }

    #[test]
    fn test_all_null_values_give_empty_series() {
        let ds = Dataset::new(
            [Player, Squad, Gls],
            vec![PlayerRecord::new("A").with_team("X")],
        );
        let rows: Vec<&PlayerRecord> = ds.players().iter().collect();
        let charts = build_charts(&ds, &rows, Scope::All);
        for series in charts.all() {
            assert!(series.is_empty(), "{}", series.title);
        }
    }
}
