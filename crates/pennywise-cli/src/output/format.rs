use std::cmp;

pub const LIST_RULE_WIDTH: usize = 50;
pub const REPORT_RULE_WIDTH: usize = 30;

pub fn terminal_width() -> usize {
    let from_env = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(100);
    cmp::max(from_env, 40)
}

pub fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

pub fn rule(width: usize) -> String {
    "-".repeat(width)
}

/// Left-aligned cells separated by one space, trailing padding trimmed.
pub fn padded_row(cells: &[(&str, usize)]) -> String {
    cells
        .iter()
        .map(|(value, width)| format!("{value:<width$}"))
        .collect::<Vec<String>>()
        .join(" ")
        .trim_end()
        .to_string()
}
