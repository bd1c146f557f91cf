//! Formatting of stack values for responses

/// Shown in place of a top value when the stack holds nothing
pub const EMPTY_STACK: &str = "empty";

/// Format a number the way responses show it.
///
/// Integral values drop the trailing `.0`; everything else, including the
/// IEEE specials, uses the shortest round-trip form.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

pub fn format_top(top: Option<f64>) -> String {
    match top {
        Some(n) => format_number(n),
        None => EMPTY_STACK.to_string(),
    }
}
