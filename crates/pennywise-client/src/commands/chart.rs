use crate::ClientResult;
use crate::aggregate::chart_series;
use crate::categories::CategorySet;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ChartData;
use crate::settings::Settings;
use crate::store::RecordStore;

pub fn run(settings: &Settings) -> ClientResult<SuccessEnvelope> {
    let store = RecordStore::open(&settings.ledger_path)?;
    from_store(&store, &settings.categories)
}

pub fn from_store(store: &RecordStore, categories: &CategorySet) -> ClientResult<SuccessEnvelope> {
    let data = ChartData {
        ledger_path: store.path().display().to_string(),
        record_count: store.len(),
        series: chart_series(store.records(), categories),
    };
    success("chart", data)
}
