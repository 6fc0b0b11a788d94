//! Reading the player statistics file and building the canonical dataset

pub mod reader;

use crate::config::DataSources;
use crate::error::{DashboardError, Result};
use crate::model::Dataset;
use crate::normalize;
use std::path::PathBuf;

pub use reader::{read_table, read_table_from};

/// The dataset together with the file it came from
#[derive(Debug, Clone)]
pub struct Loaded {
    pub dataset: Dataset,
    pub source: Option<PathBuf>,
}

/// Load and normalize the first existing candidate, reporting any failure
pub fn try_load(sources: &DataSources) -> Result<Loaded> {
    let path = sources
        .resolve()
        .ok_or_else(|| DashboardError::SourceMissing {
            searched: sources
                .candidates
                .iter()
                .map(|p| std::path::absolute(p).unwrap_or_else(|_| p.clone()))
                .collect(),
        })?;

    let table = read_table(path)?;
    log::info!(
        "Loaded {} players, {} columns from {}",
        table.len(),
        table.columns.len(),
        path.display()
    );

    Ok(Loaded {
        dataset: normalize::normalize(table),
        source: Some(path.to_path_buf()),
    })
}

/// Load the dataset once at startup. Never fails: a missing or unreadable
/// source yields an empty dataset that still declares the placeholder columns.
pub fn load(sources: &DataSources) -> Loaded {
    match try_load(sources) {
        Ok(loaded) => {
            if loaded.dataset.is_empty() {
                log::warn!("Data file contains no players. Views will show 'No Data'.");
            }
            loaded
        }
        Err(e) => {
            log::error!("Data loading failed: {}", e);
            Loaded {
                dataset: Dataset::placeholder(),
                source: None,
            }
        }
    }
}
