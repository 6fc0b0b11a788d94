use super::column::Column;

/// One player's row in the canonical dataset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    pub position: Option<String>,
    pub team: Option<String>,
    pub age: Option<f64>,
    pub minutes: Option<f64>,
    pub matches: Option<f64>,
    pub goals: Option<f64>,
    pub assists: Option<f64>,
    pub shots: Option<f64>,
    pub shots_on_target: Option<f64>,
    pub shot_accuracy_pct: Option<f64>,
    pub goals_per_shot: Option<f64>,
    pub nineties: Option<f64>,
    pub expected_goals: Option<f64>,
    pub key_passes: Option<f64>,
    pub expected_assists: Option<f64>,
    pub passes_completed: Option<f64>,
    pub tackles: Option<f64>,
    pub tackle_success_pct: Option<f64>,
    pub is_u23: bool,
}

impl PlayerRecord {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Numeric value of a statistic column (None for text and flag columns)
    pub fn stat(&self, column: Column) -> Option<f64> {
        match column {
            Column::Age => self.age,
            Column::Min => self.minutes,
            Column::MP => self.matches,
            Column::Gls => self.goals,
            Column::Ast => self.assists,
            Column::Sh => self.shots,
            Column::SoT => self.shots_on_target,
            Column::SoTPct => self.shot_accuracy_pct,
            Column::GoalsPerShot => self.goals_per_shot,
            Column::Nineties => self.nineties,
            Column::XG => self.expected_goals,
            Column::KP => self.key_passes,
            Column::XA => self.expected_assists,
            Column::Cmp => self.passes_completed,
            Column::Tkl => self.tackles,
            Column::TklPct => self.tackle_success_pct,
            Column::Player | Column::Pos | Column::Squad | Column::U23 => None,
        }
    }

    pub fn set_stat(&mut self, column: Column, value: Option<f64>) {
        let slot = match column {
            Column::Age => &mut self.age,
            Column::Min => &mut self.minutes,
            Column::MP => &mut self.matches,
            Column::Gls => &mut self.goals,
            Column::Ast => &mut self.assists,
            Column::Sh => &mut self.shots,
            Column::SoT => &mut self.shots_on_target,
            Column::SoTPct => &mut self.shot_accuracy_pct,
            Column::GoalsPerShot => &mut self.goals_per_shot,
            Column::Nineties => &mut self.nineties,
            Column::XG => &mut self.expected_goals,
            Column::KP => &mut self.key_passes,
            Column::XA => &mut self.expected_assists,
            Column::Cmp => &mut self.passes_completed,
            Column::Tkl => &mut self.tackles,
            Column::TklPct => &mut self.tackle_success_pct,
            Column::Player | Column::Pos | Column::Squad | Column::U23 => return,
        };
        *slot = value;
    }

    /// Text value of a text column (None for numeric and flag columns)
    pub fn text(&self, column: Column) -> Option<&str> {
        match column {
            Column::Player => Some(self.name.as_str()),
            Column::Pos => self.position.as_deref(),
            Column::Squad => self.team.as_deref(),
            _ => None,
        }
    }

    /// Builder-style helpers, mostly for fixtures
    pub fn with_team(mut self, team: &str) -> Self {
        self.team = Some(team.to_string());
        self
    }

    pub fn with_position(mut self, position: &str) -> Self {
        self.position = Some(position.to_string());
        self
    }

    /// Set age and derive the U23 flag from it
    pub fn with_age(mut self, age: f64) -> Self {
        self.age = Some(age);
        self.is_u23 = age < 23.0;
        self
    }

    pub fn with_stat(mut self, column: Column, value: f64) -> Self {
        self.set_stat(column, Some(value));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_flag_columns_have_no_stat() {
        let player = PlayerRecord::new("A").with_team("X").with_stat(Column::Tkl, 4.0);
        assert_eq!(player.stat(Column::Tkl), Some(4.0));
        assert_eq!(player.stat(Column::Squad), None);
        assert_eq!(player.stat(Column::U23), None);
        assert_eq!(player.text(Column::Squad), Some("X"));
        assert_eq!(player.text(Column::Pos), None);
    }

    #[test]
    fn test_with_age_sets_u23() {
        assert!(PlayerRecord::new("A").with_age(22.0).is_u23);
        assert!(!PlayerRecord::new("B").with_age(23.0).is_u23);
        assert!(!PlayerRecord::new("C").is_u23);
    }
}
