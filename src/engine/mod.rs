//! The filter/aggregate pipeline behind every dashboard view.
//!
//! [`recompute`] is a pure function of the dataset and the filter inputs.
//! Every stage degrades to a well-formed empty or placeholder result, so a
//! recomputation always yields a complete [`AggregateResult`].

pub mod charts;
pub mod filter;
pub mod format;
pub mod leaderboard;
pub mod summary;
pub mod table;

use crate::model::{Dataset, FilterSpec, Scope};

pub use charts::{ChartKind, ChartRow, ChartSeries, ChartSet};
pub use leaderboard::{LeaderboardCard, LeaderboardKind, Leaderboards};
pub use summary::{SummaryCards, Totals};
pub use table::{ColumnDef, TableView};

/// Everything the presentation layer renders for one set of filter inputs
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    pub filtered_count: usize,
    pub u23_count: usize,
    pub overall: Totals,
    pub u23: Totals,
    pub summary: SummaryCards,
    pub leaderboards: Leaderboards,
    pub charts: ChartSet,
    pub table: TableView,
}

/// Run the full pipeline: filter, U23 split, summary, leaderboards, charts
/// and table. Leaderboards always use the U23 selection; charts and the
/// table follow the scope toggle.
pub fn recompute(dataset: &Dataset, spec: &FilterSpec) -> AggregateResult {
    log::info!("Filters: {}", spec);

    let filtered = filter::apply_filters(dataset, spec);
    let u23 = filter::split_u23(dataset, &filtered);
    log::debug!(
        "{} of {} players match, {} under 23",
        filtered.len(),
        dataset.len(),
        u23.len()
    );

    let overall_totals = Totals::of(dataset, &filtered);
    let u23_totals = Totals::of(dataset, &u23);
    let summary = SummaryCards::from_totals(&overall_totals, &u23_totals);

    let leaderboards = leaderboard::compute_leaderboards(dataset, &u23);

    let visible = match spec.scope {
        Scope::U23Only => &u23,
        Scope::All => &filtered,
    };
    let charts = charts::build_charts(dataset, visible, spec.scope);

    let empty_message = if dataset.is_empty() {
        "No data loaded to display.".to_string()
    } else if filtered.is_empty() {
        "No players match the selected filters.".to_string()
    } else {
        format!("No players match filters in '{}' scope.", spec.scope)
    };
    let table = table::build_table(dataset, visible, &empty_message);

    AggregateResult {
        filtered_count: filtered.len(),
        u23_count: u23.len(),
        overall: overall_totals,
        u23: u23_totals,
        summary,
        leaderboards,
        charts,
        table,
    }
}
