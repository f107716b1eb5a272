use crate::ClientResult;
use crate::aggregate::ledger_report;
use crate::categories::CategorySet;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ReportData;
use crate::settings::Settings;
use crate::store::RecordStore;

pub fn run(settings: &Settings) -> ClientResult<SuccessEnvelope> {
    let store = RecordStore::open(&settings.ledger_path)?;
    from_store(&store, &settings.categories)
}

pub fn from_store(store: &RecordStore, categories: &CategorySet) -> ClientResult<SuccessEnvelope> {
    let data = ReportData {
        ledger_path: store.path().display().to_string(),
        report: ledger_report(store.records(), categories),
    };
    success("report", data)
}
