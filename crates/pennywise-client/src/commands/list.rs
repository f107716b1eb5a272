use crate::ClientResult;
use crate::aggregate::total_spending;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ListData;
use crate::settings::Settings;
use crate::store::RecordStore;

pub fn run(settings: &Settings) -> ClientResult<SuccessEnvelope> {
    let store = RecordStore::open(&settings.ledger_path)?;
    from_store(&store)
}

pub fn from_store(store: &RecordStore) -> ClientResult<SuccessEnvelope> {
    let data = ListData {
        ledger_path: store.path().display().to_string(),
        rows: store.records().to_vec(),
        total: total_spending(store.records()),
    };
    success("list", data)
}
