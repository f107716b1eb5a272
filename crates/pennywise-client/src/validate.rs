use chrono::NaiveDate;
use thiserror::Error;

use crate::categories::CategorySet;
use crate::record::{ExpenseInput, ExpenseRecord};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid amount `{received}`: {reason}.")]
    Amount {
        received: String,
        reason: &'static str,
    },
    #[error("Invalid category `{received}`: please choose a number between 1 and {count}.")]
    Category { received: String, count: usize },
    #[error("Invalid date `{received}`: please use a real date in YYYY-MM-DD format.")]
    Date { received: String },
}

pub fn validate_amount(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    let invalid = |reason| ValidationError::Amount {
        received: trimmed.to_string(),
        reason,
    };

    let amount = trimmed
        .parse::<f64>()
        .map_err(|_| invalid("enter a valid number"))?;
    if !amount.is_finite() {
        return Err(invalid("enter a valid number"));
    }
    if amount <= 0.0 {
        return Err(invalid("amount must be positive"));
    }
    Ok(amount)
}

pub fn validate_category(index: usize, categories: &CategorySet) -> Result<String, ValidationError> {
    categories
        .by_index(index)
        .map(str::to_string)
        .ok_or_else(|| ValidationError::Category {
            received: index.to_string(),
            count: categories.len(),
        })
}

/// Parses a menu choice such as `"3"` into its category label.
pub fn parse_category_choice(raw: &str, categories: &CategorySet) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    let index = trimmed
        .parse::<usize>()
        .map_err(|_| ValidationError::Category {
            received: trimmed.to_string(),
            count: categories.len(),
        })?;
    validate_category(index, categories)
}

/// Returns the validated date text; blank input means `today`.
pub fn validate_date(raw: &str, today: NaiveDate) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(today.format(DATE_FORMAT).to_string());
    }

    let invalid = || ValidationError::Date {
        received: trimmed.to_string(),
    };

    if !has_iso_date_shape(trimmed) {
        return Err(invalid());
    }
    if NaiveDate::parse_from_str(trimmed, DATE_FORMAT).is_err() {
        return Err(invalid());
    }

    Ok(trimmed.to_string())
}

pub fn normalize_description(raw: &str) -> String {
    raw.trim().to_string()
}

/// Validates every field of one entry.
///
/// The category may be a 1-based index or a label; labels match the
/// configured set case-insensitively.
pub fn validate_expense(
    input: &ExpenseInput,
    categories: &CategorySet,
    today: NaiveDate,
) -> Result<ExpenseRecord, ValidationError> {
    let amount = validate_amount(&input.amount)?;
    let category = resolve_category(&input.category, categories)?;
    let date = validate_date(input.date.as_deref().unwrap_or_default(), today)?;
    let description = normalize_description(input.description.as_deref().unwrap_or_default());

    Ok(ExpenseRecord::new(date, category, amount, description))
}

fn resolve_category(raw: &str, categories: &CategorySet) -> Result<String, ValidationError> {
    if let Some(label) = categories.find_ignore_case(raw) {
        return Ok(label.to_string());
    }
    parse_category_choice(raw, categories)
}

fn has_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    [0usize, 1, 2, 3, 5, 6, 8, 9]
        .iter()
        .all(|index| bytes[*index].is_ascii_digit())
}
