use std::io;

use serde_json::{Map, Value};

use super::format::{LIST_RULE_WIDTH, REPORT_RULE_WIDTH, money, padded_row, percent, rule};
use crate::chart::ChartRenderer;

pub const NO_EXPENSES: &str = "No expenses recorded yet.";

const DATE_WIDTH: usize = 12;
const CATEGORY_WIDTH: usize = 15;
const AMOUNT_WIDTH: usize = 10;

pub fn render_list(data: &Value) -> io::Result<String> {
    let rows = required_array(data, "rows", "list")?;
    if rows.is_empty() {
        return Ok(NO_EXPENSES.to_string());
    }

    let mut lines = vec![
        "--- All Expenses ---".to_string(),
        padded_row(&[
            ("Date", DATE_WIDTH),
            ("Category", CATEGORY_WIDTH),
            ("Amount", AMOUNT_WIDTH),
            ("Description", 0),
        ]),
        rule(LIST_RULE_WIDTH),
    ];
    for row in rows {
        let amount = money(number_field(row, "amount"));
        lines.push(padded_row(&[
            (text_field(row, "date"), DATE_WIDTH),
            (text_field(row, "category"), CATEGORY_WIDTH),
            (amount.as_str(), AMOUNT_WIDTH),
            (text_field(row, "description"), 0),
        ]));
    }
    lines.push(rule(LIST_RULE_WIDTH));

    let total = money(number_field(data, "total"));
    lines.push(padded_row(&[
        ("Total", DATE_WIDTH + CATEGORY_WIDTH + 1),
        (total.as_str(), 0),
    ]));

    Ok(lines.join("\n"))
}

pub fn render_report(data: &Value) -> io::Result<String> {
    let Some(report) = data.get("report").and_then(Value::as_object) else {
        return Ok(NO_EXPENSES.to_string());
    };

    let mut lines = vec![
        "--- Expense Report ---".to_string(),
        format!(
            "Total Spending: {}",
            money(number_entry(report, "total_spending"))
        ),
        String::new(),
        "Spending by Category:".to_string(),
        rule(REPORT_RULE_WIDTH),
    ];

    let shares = report
        .get("categories")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("report output requires categories"))?;
    for share in shares {
        lines.push(format!(
            "{:<CATEGORY_WIDTH$}: {:<9} ({})",
            text_field(share, "category"),
            money(number_field(share, "amount")),
            percent(number_field(share, "percent")),
        ));
    }

    if let Some(highest) = report.get("highest_expense").filter(|value| !value.is_null()) {
        lines.push(String::new());
        lines.push(format!(
            "Highest Expense: {} on {} ({})",
            money(number_field(highest, "amount")),
            text_field(highest, "category"),
            text_field(highest, "date"),
        ));
    }

    let show_monthly = report
        .get("show_monthly")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if show_monthly
        && let Some(months) = report.get("monthly_totals").and_then(Value::as_object)
    {
        lines.push(String::new());
        lines.push("Monthly Spending:".to_string());
        for (month, total) in months {
            lines.push(format!(
                "  {month}: {}",
                money(total.as_f64().unwrap_or_default())
            ));
        }
    }

    Ok(lines.join("\n"))
}

pub fn render_chart(data: &Value, renderer: &dyn ChartRenderer) -> io::Result<String> {
    let record_count = data
        .get("record_count")
        .and_then(Value::as_u64)
        .unwrap_or_default();
    if record_count == 0 {
        return Ok(NO_EXPENSES.to_string());
    }

    let series = data
        .get("series")
        .ok_or_else(|| io::Error::other("chart output requires series"))?;
    let labels = required_array(series, "labels", "chart")?
        .iter()
        .map(|value| value.as_str().unwrap_or_default().to_string())
        .collect::<Vec<String>>();
    let values = required_array(series, "values", "chart")?
        .iter()
        .map(|value| value.as_f64().unwrap_or_default())
        .collect::<Vec<f64>>();

    if labels.is_empty() || labels.len() != values.len() {
        return Ok("No expenses to visualize.".to_string());
    }
    Ok(renderer.render(&labels, &values))
}

pub fn render_add(data: &Value) -> io::Result<String> {
    let record = data
        .get("record")
        .ok_or_else(|| io::Error::other("add output requires record"))?;
    let count = data
        .get("record_count")
        .and_then(Value::as_u64)
        .unwrap_or_default();

    Ok([
        format!(
            "Expense of {} added successfully!",
            money(number_field(record, "amount"))
        ),
        format!(
            "  {} | {} | {}",
            text_field(record, "date"),
            text_field(record, "category"),
            text_field(record, "description"),
        )
        .trim_end_matches([' ', '|'])
        .to_string(),
        format!(
            "Saved to {} ({count} expenses).",
            text_field(data, "ledger_path")
        ),
    ]
    .join("\n"))
}

pub fn render_categories(data: &Value) -> io::Result<String> {
    let categories = required_array(data, "categories", "categories")?;
    let mut lines = vec!["Available categories:".to_string()];
    lines.extend(categories.iter().map(|entry| {
        format!(
            "{}. {}",
            entry
                .get("index")
                .and_then(Value::as_u64)
                .unwrap_or_default(),
            text_field(entry, "label")
        )
    }));
    Ok(lines.join("\n"))
}

fn required_array<'a>(data: &'a Value, key: &str, command: &str) -> io::Result<&'a Vec<Value>> {
    data.get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other(format!("{command} output requires {key}")))
}

fn text_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or_default()
}

fn number_field(value: &Value, key: &str) -> f64 {
    value.get(key).and_then(Value::as_f64).unwrap_or_default()
}

fn number_entry(map: &Map<String, Value>, key: &str) -> f64 {
    map.get(key).and_then(Value::as_f64).unwrap_or_default()
}
