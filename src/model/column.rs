use std::fmt;

/// How a canonical column's cells are typed after normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Number,
    Flag,
}

/// A canonical column of the player statistics table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Player,
    Pos,
    Squad,
    Age,
    Min,
    Gls,
    Ast,
    MP,
    Sh,
    SoT,
    SoTPct,
    GoalsPerShot,
    Nineties,
    XG,
    KP,
    XA,
    Cmp,
    Tkl,
    TklPct,
    U23,
}

impl Column {
    /// Every column, in alias-resolution order
    pub const ALL: [Column; 20] = [
        Column::Player,
        Column::Squad,
        Column::Age,
        Column::Min,
        Column::Gls,
        Column::Ast,
        Column::MP,
        Column::Sh,
        Column::SoT,
        Column::SoTPct,
        Column::GoalsPerShot,
        Column::Pos,
        Column::Nineties,
        Column::XG,
        Column::KP,
        Column::XA,
        Column::Cmp,
        Column::Tkl,
        Column::TklPct,
        Column::U23,
    ];

    /// Columns that get coerced to numbers
    pub const NUMERIC: [Column; 16] = [
        Column::Age,
        Column::Min,
        Column::Gls,
        Column::Ast,
        Column::MP,
        Column::Sh,
        Column::SoT,
        Column::SoTPct,
        Column::GoalsPerShot,
        Column::Nineties,
        Column::XG,
        Column::KP,
        Column::XA,
        Column::Cmp,
        Column::Tkl,
        Column::TklPct,
    ];

    /// Columns an empty dataset still declares
    pub const PLACEHOLDER: [Column; 9] = [
        Column::Player,
        Column::Pos,
        Column::Squad,
        Column::Age,
        Column::Min,
        Column::Gls,
        Column::Ast,
        Column::MP,
        Column::U23,
    ];

    /// Canonical header name
    pub fn name(&self) -> &'static str {
        match self {
            Column::Player => "Player",
            Column::Pos => "Pos",
            Column::Squad => "Squad",
            Column::Age => "Age",
            Column::Min => "Min",
            Column::Gls => "Gls",
            Column::Ast => "Ast",
            Column::MP => "MP",
            Column::Sh => "Sh",
            Column::SoT => "SoT",
            Column::SoTPct => "SoT%",
            Column::GoalsPerShot => "G/Sh",
            Column::Nineties => "90s",
            Column::XG => "xG",
            Column::KP => "KP",
            Column::XA => "xA",
            Column::Cmp => "Cmp",
            Column::Tkl => "Tkl",
            Column::TklPct => "Tkl%",
            Column::U23 => "U23",
        }
    }

    /// Source header names accepted for this column, highest priority first.
    /// The derived `U23` flag has no aliases other than itself.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Column::Player => &["Player", "Player Name"],
            Column::Squad => &["Squad", "Team"],
            Column::Age => &["Age"],
            Column::Min => &["Min", "Playing Time Min", "Minutes Played"],
            Column::Gls => &["Gls", "Performance Gls", "Goals"],
            Column::Ast => &["Ast", "Performance Ast", "Assists"],
            Column::MP => &["MP", "Playing Time MP", "Matches Played"],
            Column::Sh => &["Sh", "Standard Sh", "Shots"],
            Column::SoT => &["SoT", "Standard SoT", "Shots on Target"],
            Column::SoTPct => &["SoT%", "Standard SoT%", "Shot Accuracy %"],
            Column::GoalsPerShot => &["G/Sh", "Standard G/Sh", "Goals per Shot"],
            Column::Pos => &["Pos", "Position"],
            Column::Nineties => &["90s", "Playing Time 90s"],
            Column::XG => &["xG", "Expected Goals"],
            Column::KP => &["KP", "Key Passes"],
            Column::XA => &["xA", "Expected Assists"],
            Column::Cmp => &["Cmp", "Passes Completed", "Total Cmp"],
            Column::Tkl => &["Tkl", "Tackles", "Tackles Tkl"],
            Column::TklPct => &["Tkl%", "Tackles Won %", "TklW%"],
            Column::U23 => &["U23"],
        }
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            Column::Player | Column::Pos | Column::Squad => ColumnKind::Text,
            Column::U23 => ColumnKind::Flag,
            _ => ColumnKind::Number,
        }
    }

    /// Advanced stats that many sources lack; their absence is only noted
    pub fn is_optional(&self) -> bool {
        matches!(
            self,
            Column::XG | Column::KP | Column::XA | Column::Cmp | Column::Tkl | Column::TklPct
        )
    }

    /// Look up a column by its canonical header name
    pub fn from_name(name: &str) -> Option<Column> {
        Column::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
