use crate::engine::{ChartKind, ChartSeries, ChartSet, TableView};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Write the table view as CSV; blank cells become empty fields
pub fn write_table_csv(table: &TableView, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(table.columns.iter().map(|c| c.name.as_str()))?;
    for row in &table.rows {
        writer.write_record(row.iter().map(|v| v.as_deref().unwrap_or("")))?;
    }

    writer.flush()?;
    Ok(())
}

/// Write each chart series to `<dir>/<slug>.csv`, creating `dir` if needed.
/// Returns the files written.
pub fn write_chart_csvs(charts: &ChartSet, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for series in charts.all() {
        let path = dir.join(format!("{}.csv", series.kind.slug()));
        write_series_csv(series, &path)?;
        log::debug!("Wrote {} rows to {}", series.rows.len(), path.display());
        written.push(path);
    }
    Ok(written)
}

fn write_series_csv(series: &ChartSeries, path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    let label = match series.kind {
        ChartKind::TeamGoals => "Team",
        _ => "Player",
    };
    writer.write_record([label, "Team", series.kind.value_label()])?;
    for row in &series.rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(())
}
