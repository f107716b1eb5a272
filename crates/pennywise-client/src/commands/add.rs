use chrono::NaiveDate;

use crate::ClientResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::AddData;
use crate::record::ExpenseInput;
use crate::settings::Settings;
use crate::store::RecordStore;
use crate::validate::validate_expense;

/// Validates one entry, appends it and rewrites the ledger file.
///
/// The ledger is loaded strictly: a file that cannot be parsed is left
/// untouched rather than replaced by a ledger holding only the new entry.
pub fn run(settings: &Settings, input: &ExpenseInput, today: NaiveDate) -> ClientResult<SuccessEnvelope> {
    let record = validate_expense(input, &settings.categories, today)?;
    let mut store = RecordStore::open(&settings.ledger_path)?;
    store.append(record.clone());
    store.flush()?;

    tracing::info!(
        amount = record.amount(),
        category = record.category(),
        date = record.date(),
        "added expense"
    );

    let data = AddData {
        ledger_path: store.path().display().to_string(),
        record,
        record_count: store.len(),
    };
    success("add", data)
}
