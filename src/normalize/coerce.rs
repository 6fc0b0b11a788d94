//! Total, non-throwing cell conversions used by the normalizer

use crate::model::Cell;

/// Parse a numeric cell, stripping any `%` signs from text first.
/// Blank, unparsable and non-finite values become `None`.
pub fn parse_number(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Null => None,
        Cell::Number(n) => Some(*n).filter(|n| n.is_finite()),
        Cell::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Cell::Text(s) => {
            let cleaned = s.replace('%', "");
            let cleaned = cleaned.trim();
            if cleaned.is_empty() {
                return None;
            }
            cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
        }
    }
}

/// Interpret a cell as a boolean flag. Nulls and unrecognized text are false.
pub fn parse_flag(cell: &Cell) -> bool {
    match cell {
        Cell::Null => false,
        Cell::Bool(b) => *b,
        Cell::Number(n) => *n != 0.0 && !n.is_nan(),
        Cell::Text(s) => match s.trim().to_lowercase().as_str() {
            "true" | "t" | "yes" | "y" => true,
            other => other.parse::<f64>().map(|n| n != 0.0 && !n.is_nan()).unwrap_or(false),
        },
    }
}
