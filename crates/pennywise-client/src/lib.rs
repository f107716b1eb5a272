pub mod aggregate;
pub mod categories;
pub mod commands;
pub mod contracts;
pub mod error;
pub mod record;
pub mod settings;
pub mod store;
pub mod validate;

pub use categories::CategorySet;
pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{ClientError, ClientResult};
pub use record::{ExpenseInput, ExpenseRecord};
pub use settings::{Settings, SettingsOverrides};
pub use store::RecordStore;
pub use validate::ValidationError;

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
