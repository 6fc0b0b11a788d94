use super::dataset::ALL_POSITIONS;
use std::fmt;

/// Which row-set the charts and table draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    #[default]
    All,
    U23Only,
}

impl Scope {
    pub fn from_str(s: &str) -> Option<Scope> {
        match s.trim().to_lowercase().as_str() {
            "all" => Some(Scope::All),
            "u23" | "u23-only" | "u23only" => Some(Scope::U23Only),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::All => "all",
            Scope::U23Only => "u23",
        }
    }

    /// Suffix appended to chart titles
    pub fn title_suffix(&self) -> &'static str {
        match self {
            Scope::All => " (Filtered)",
            Scope::U23Only => " (U23 Only)",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four independent dashboard filter inputs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSpec {
    /// Case-insensitive substring of the position; `None` means no filter
    pub position: Option<String>,
    /// Minimum minutes played; 0 means no filter
    pub min_minutes: u32,
    /// Case-insensitive substring of the player name; empty means no filter
    pub search: String,
    pub scope: Scope,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the position filter; blank or the "all" sentinel clears it
    pub fn with_position(mut self, position: &str) -> Self {
        self.position = if is_all_positions(position) {
            None
        } else {
            Some(position.to_string())
        };
        self
    }

    /// The position substring to match, if any. A blank value or the
    /// "all" sentinel in `position` means no filter.
    pub fn position_filter(&self) -> Option<&str> {
        self.position.as_deref().filter(|p| !is_all_positions(p))
    }

    pub fn with_min_minutes(mut self, min_minutes: u32) -> Self {
        self.min_minutes = min_minutes;
        self
    }

    /// Set the name search; matched as-is, so only an empty string clears it
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_string();
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position='{}', Min Minutes={}, Search='{}', Scope='{}'",
            self.position.as_deref().unwrap_or(ALL_POSITIONS),
            self.min_minutes,
            self.search,
            self.scope
        )
    }
}

fn is_all_positions(position: &str) -> bool {
    position.trim().is_empty() || position == ALL_POSITIONS
}
