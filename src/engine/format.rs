//! Display formatting shared by the summary cards, leaderboards and table

/// Shown wherever a value is unavailable
pub const PLACEHOLDER: &str = "--";

/// Whole-number display; fractional parts are truncated
pub fn integer(value: f64) -> String {
    format!("{}", value.trunc() as i64)
}

pub fn one_decimal(value: f64) -> String {
    format!("{:.1}", value)
}

pub fn integer_or_placeholder(value: Option<f64>) -> String {
    value.map(integer).unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn one_decimal_or_placeholder(value: Option<f64>) -> String {
    value.map(one_decimal).unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn percent_or_placeholder(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}%", v))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn text_or_placeholder(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// "<part/total as %> of <total>", or "0% of 0" when the total is not positive
pub fn share_of(part: f64, total: f64, total_display: String) -> String {
    if total > 0.0 {
        format!("{:.1}% of {}", part / total * 100.0, total_display)
    } else {
        "0% of 0".to_string()
    }
}
