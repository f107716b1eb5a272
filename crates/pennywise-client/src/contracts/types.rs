use serde::Serialize;

use crate::aggregate::{ChartSeries, LedgerReport};
use crate::record::ExpenseRecord;

#[derive(Debug, Clone, Serialize)]
pub struct ListData {
    pub ledger_path: String,
    pub rows: Vec<ExpenseRecord>,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub ledger_path: String,
    /// `None` when the ledger holds no records.
    pub report: Option<LedgerReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub ledger_path: String,
    pub record_count: usize,
    pub series: ChartSeries,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddData {
    pub ledger_path: String,
    pub record: ExpenseRecord,
    pub record_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryChoice {
    pub index: usize,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoriesData {
    pub categories: Vec<CategoryChoice>,
}
