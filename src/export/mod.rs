//! Writing dashboard results to files

pub mod delimited;
pub mod workbook;

use crate::engine::AggregateResult;
use crate::error::{DashboardError, Result};
use std::path::Path;

pub use delimited::{write_chart_csvs, write_table_csv};
pub use workbook::write_report_xlsx;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Csv,
}

impl ExportFormat {
    /// Pick the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("xlsx") => Ok(ExportFormat::Xlsx),
            Some("csv") => Ok(ExportFormat::Csv),
            _ => Err(DashboardError::Export(format!(
                "Unsupported export format for {} (expected .xlsx or .csv)",
                path.display()
            ))),
        }
    }
}

/// Write a result in the format implied by `path`: the full report as a
/// workbook, or just the table as CSV
pub fn export_report(result: &AggregateResult, path: &Path) -> Result<ExportFormat> {
    let format = ExportFormat::from_path(path)?;
    match format {
        ExportFormat::Xlsx => write_report_xlsx(result, path)?,
        ExportFormat::Csv => write_table_csv(&result.table, path)?,
    }
    log::info!("Exported {:?} report to {}", format, path.display());
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::recompute;
    use crate::model::{Column, Dataset, FilterSpec, PlayerRecord};

    fn result() -> AggregateResult {
        let ds = Dataset::new(
            Column::PLACEHOLDER,
            vec![
                PlayerRecord::new("A").with_age(22.0).with_stat(Column::Gls, 10.0).with_team("X"),
                PlayerRecord::new("B").with_age(25.0).with_stat(Column::Gls, 15.0).with_team("X"),
            ],
        );
        recompute(&ds, &FilterSpec::new())
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("out.XLSX")).unwrap(), ExportFormat::Xlsx);
        assert_eq!(ExportFormat::from_path(Path::new("dir/out.csv")).unwrap(), ExportFormat::Csv);
        assert!(matches!(
            ExportFormat::from_path(Path::new("out.json")),
            Err(DashboardError::Export(_))
        ));
        assert!(ExportFormat::from_path(Path::new("out")).is_err());
    }

    #[test]
    fn test_export_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let result = result();

        let csv_path = dir.path().join("table.csv");
        assert_eq!(export_report(&result, &csv_path).unwrap(), ExportFormat::Csv);
        let text = std::fs::read_to_string(&csv_path).unwrap();
        assert!(text.starts_with("Player,Pos,Squad,Age,MP,Min,Gls,Ast\n"));

        let xlsx_path = dir.path().join("report.xlsx");
        assert_eq!(export_report(&result, &xlsx_path).unwrap(), ExportFormat::Xlsx);
        assert!(xlsx_path.exists());

        let bad = dir.path().join("report.txt");
        assert!(export_report(&result, &bad).is_err());
        assert!(!bad.exists());
    }
}
