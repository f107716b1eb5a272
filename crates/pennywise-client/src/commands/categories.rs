use crate::ClientResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{CategoriesData, CategoryChoice};
use crate::settings::Settings;

pub fn run(settings: &Settings) -> ClientResult<SuccessEnvelope> {
    let categories = settings
        .categories
        .labels()
        .iter()
        .enumerate()
        .map(|(index, label)| CategoryChoice {
            index: index + 1,
            label: label.clone(),
        })
        .collect();
    success("categories", CategoriesData { categories })
}
