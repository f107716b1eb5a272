use serde::Serialize;

/// One expense entry.
///
/// Fields are private: a record is produced either by the validation layer
/// or by reading a previously persisted ledger, and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseRecord {
    date: String,
    category: String,
    amount: f64,
    description: String,
}

impl ExpenseRecord {
    pub(crate) fn new(date: String, category: String, amount: f64, description: String) -> Self {
        Self {
            date,
            category,
            amount,
            description,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The `YYYY-MM` bucket this record is counted under.
    ///
    /// Taken as the first seven characters of the stored date text, not by
    /// parsing it, so a malformed date lands in a malformed bucket.
    pub fn month_key(&self) -> &str {
        match self.date.char_indices().nth(7) {
            Some((end, _)) => &self.date[..end],
            None => &self.date,
        }
    }
}

/// Raw, unvalidated field values as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub amount: String,
    pub category: String,
    pub date: Option<String>,
    pub description: Option<String>,
}
