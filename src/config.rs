//! Data source locations and filter presets

use std::path::{Path, PathBuf};

/// Default source files, checked in order; the first that exists is loaded
pub const DEFAULT_CANDIDATES: [&str; 2] = [
    "a_league_data/merged_player_stats.csv",
    "a_league_processed/standard_stats_processed.csv",
];

/// Minimum-minutes choices offered to users, with their labels
pub const MINUTES_PRESETS: [(u32, &str); 5] = [
    (0, "Any"),
    (90, "90+"),
    (270, "270+"),
    (450, "450+"),
    (900, "900+"),
];

/// Where to look for the player statistics file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSources {
    pub candidates: Vec<PathBuf>,
}

impl Default for DataSources {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_CANDIDATES.iter().map(PathBuf::from).collect(),
        }
    }
}

impl DataSources {
    /// Use the given paths, or the defaults when none are given
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        if paths.is_empty() {
            Self::default()
        } else {
            Self { candidates: paths }
        }
    }

    /// The first candidate that exists on disk
    pub fn resolve(&self) -> Option<&Path> {
        self.candidates
            .iter()
            .map(PathBuf::as_path)
            .find(|p| p.exists())
    }
}
