use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use csv::StringRecord;

use crate::record::ExpenseRecord;
use crate::settings::ensure_parent_directory;
use crate::{ClientError, ClientResult};

pub const LEDGER_HEADERS: [&str; 4] = ["date", "category", "amount", "description"];

/// In-memory ledger backed by a CSV file.
///
/// Appends only touch memory; nothing reaches disk until [`RecordStore::flush`].
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
    records: Vec<ExpenseRecord>,
    load_error: Option<ClientError>,
}

impl RecordStore {
    /// Loads the ledger at `path`, failing on any unreadable row.
    pub fn open(path: &Path) -> ClientResult<Self> {
        let records = load(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            records,
            load_error: None,
        })
    }

    /// Loads the ledger at `path`, starting empty if it cannot be read.
    ///
    /// The failure is kept so a front end can tell the user why the ledger
    /// came up empty.
    pub fn open_or_empty(path: &Path) -> Self {
        match Self::open(path) {
            Ok(store) => store,
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    code = %error.code,
                    "ledger could not be loaded, starting with an empty ledger: {error}"
                );
                Self {
                    path: path.to_path_buf(),
                    records: Vec::new(),
                    load_error: Some(error),
                }
            }
        }
    }

    pub fn append(&mut self, record: ExpenseRecord) {
        self.records.push(record);
    }

    pub fn flush(&self) -> ClientResult<()> {
        save(&self.path, &self.records)
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_error(&self) -> Option<&ClientError> {
        self.load_error.as_ref()
    }
}

/// Reads every persisted record. A missing file is an empty ledger.
pub fn load(path: &Path) -> ClientResult<Vec<ExpenseRecord>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no ledger file yet, starting fresh");
            return Ok(Vec::new());
        }
        Err(error) => return Err(ClientError::ledger_io_failed(path, &error.to_string())),
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|error| ClientError::ledger_header_invalid(path, &error.to_string()))?
        .clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    let columns = ColumnIndex::from_headers(&headers).ok_or_else(|| {
        ClientError::ledger_header_invalid(
            path,
            &format!(
                "header must name the columns {}, found `{}`",
                LEDGER_HEADERS.join(","),
                headers.iter().collect::<Vec<&str>>().join(",")
            ),
        )
    })?;

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row_number = (index as u64) + 1;
        let row = row.map_err(|error| {
            ClientError::ledger_parse_failed(path, row_number, &error.to_string())
        })?;
        records.push(columns.read(&row, path, row_number)?);
    }

    tracing::info!(path = %path.display(), count = records.len(), "loaded ledger");
    Ok(records)
}

/// Replaces the file at `path` with `records`; an empty slice writes the header alone.
pub fn save(path: &Path, records: &[ExpenseRecord]) -> ClientResult<()> {
    ensure_parent_directory(path)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|error| write_failure(path, error))?;

    writer
        .write_record(LEDGER_HEADERS)
        .map_err(|error| write_failure(path, error))?;
    for record in records {
        let amount = record.amount().to_string();
        writer
            .write_record([
                record.date(),
                record.category(),
                amount.as_str(),
                record.description(),
            ])
            .map_err(|error| write_failure(path, error))?;
    }
    writer.flush().map_err(|error| write_failure(path, error))?;

    tracing::info!(path = %path.display(), count = records.len(), "saved ledger");
    Ok(())
}

fn write_failure(path: &Path, error: impl std::fmt::Display) -> ClientError {
    ClientError::ledger_io_failed(path, &error.to_string())
}

struct ColumnIndex {
    date: usize,
    category: usize,
    amount: usize,
    description: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Option<Self> {
        let position = |name: &str| headers.iter().position(|value| value.trim() == name);
        Some(Self {
            date: position("date")?,
            category: position("category")?,
            amount: position("amount")?,
            description: position("description")?,
        })
    }

    fn read(
        &self,
        row: &StringRecord,
        path: &Path,
        row_number: u64,
    ) -> ClientResult<ExpenseRecord> {
        let field = |index: usize| row.get(index).unwrap_or_default().to_string();

        let raw_amount = field(self.amount);
        let amount = raw_amount.trim().parse::<f64>().map_err(|_| {
            ClientError::ledger_parse_failed(
                path,
                row_number,
                &format!("amount `{raw_amount}` is not a number"),
            )
        })?;

        Ok(ExpenseRecord::new(
            field(self.date),
            field(self.category),
            amount,
            field(self.description),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::{RecordStore, load, save};
    use crate::record::ExpenseRecord;

    fn record(date: &str, category: &str, amount: f64, description: &str) -> ExpenseRecord {
        ExpenseRecord::new(
            date.to_string(),
            category.to_string(),
            amount,
            description.to_string(),
        )
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let temp = tempdir();
        assert!(temp.is_ok());
        if let Ok(temp_dir) = temp {
            let loaded = load(&temp_dir.path().join("absent.csv"));
            assert!(matches!(loaded, Ok(ref records) if records.is_empty()));
        }
    }

    #[test]
    fn empty_store_writes_header_only() {
        let temp = tempdir();
        assert!(temp.is_ok());
        if let Ok(temp_dir) = temp {
            let path = temp_dir.path().join("nested").join("expenses.csv");
            assert!(save(&path, &[]).is_ok());
            let content = fs::read_to_string(&path);
            assert!(matches!(content, Ok(ref text) if text == "date,category,amount,description\n"));
        }
    }

    #[test]
    fn round_trip_preserves_order_and_quoting() {
        let temp = tempdir();
        assert!(temp.is_ok());
        if let Ok(temp_dir) = temp {
            let path = temp_dir.path().join("expenses.csv");
            let records = vec![
                record("2024-01-15", "Food", 12.5, "lunch, with \"friends\""),
                record("2024-01-16", "Transport", 3.0, ""),
                record("2024-02-01", "Food", 0.1, "snack"),
            ];
            assert!(save(&path, &records).is_ok());

            let loaded = load(&path);
            assert!(loaded.is_ok());
            if let Ok(loaded) = loaded {
                assert_eq!(loaded, records);
            }
        }
    }

    #[test]
    fn header_columns_are_matched_by_name() {
        let temp = tempdir();
        assert!(temp.is_ok());
        if let Ok(temp_dir) = temp {
            let path = temp_dir.path().join("expenses.csv");
            let written = fs::write(
                &path,
                "amount,description,date,category\n9.99,book,2024-04-01,Entertainment\n",
            );
            assert!(written.is_ok());

            let loaded = load(&path);
            assert!(loaded.is_ok());
            if let Ok(loaded) = loaded {
                assert_eq!(loaded, vec![record("2024-04-01", "Entertainment", 9.99, "book")]);
            }
        }
    }

    #[test]
    fn non_numeric_amount_aborts_the_whole_load() {
        let temp = tempdir();
        assert!(temp.is_ok());
        if let Ok(temp_dir) = temp {
            let path = temp_dir.path().join("expenses.csv");
            let written = fs::write(
                &path,
                "date,category,amount,description\n2024-01-01,Food,5,ok\n2024-01-02,Food,five,bad\n",
            );
            assert!(written.is_ok());

            let loaded = load(&path);
            assert!(loaded.is_err());
            if let Err(error) = loaded {
                assert_eq!(error.code, "ledger_parse_failed");
                assert!(error.message.contains("row 2"));
                assert!(error.message.contains("five"));
            }
        }
    }

    #[test]
    fn missing_column_is_a_parse_failure() {
        let temp = tempdir();
        assert!(temp.is_ok());
        if let Ok(temp_dir) = temp {
            let path = temp_dir.path().join("expenses.csv");
            assert!(fs::write(&path, "date,category,amount\n2024-01-01,Food,5\n").is_ok());
            assert!(load(&path).is_err());
        }
    }

    #[test]
    fn zero_byte_file_is_an_empty_ledger() {
        let temp = tempdir();
        assert!(temp.is_ok());
        if let Ok(temp_dir) = temp {
            let path = temp_dir.path().join("expenses.csv");
            assert!(fs::write(&path, "").is_ok());
            assert!(matches!(load(&path), Ok(ref records) if records.is_empty()));
        }
    }

    #[test]
    fn open_or_empty_degrades_and_keeps_the_reason() {
        let temp = tempdir();
        assert!(temp.is_ok());
        if let Ok(temp_dir) = temp {
            let path = temp_dir.path().join("expenses.csv");
            let written = fs::write(
                &path,
                "date,category,amount,description\n2024-01-01,Food,oops,\n",
            );
            assert!(written.is_ok());

            let store = RecordStore::open_or_empty(&path);
            assert!(store.is_empty());
            assert_eq!(
                store.load_error().map(|error| error.code.as_str()),
                Some("ledger_parse_failed")
            );
            assert!(RecordStore::open(&path).is_err());
        }
    }

    #[test]
    fn append_is_memory_only_until_flush() {
        let temp = tempdir();
        assert!(temp.is_ok());
        if let Ok(temp_dir) = temp {
            let path = temp_dir.path().join("expenses.csv");
            let mut store = RecordStore::open_or_empty(&path);
            assert!(store.load_error().is_none());

            store.append(record("2024-01-01", "Food", 1.0, "a"));
            store.append(record("2024-01-01", "Food", 1.0, "a"));
            assert_eq!(store.len(), 2);
            assert!(!path.exists());

            assert!(store.flush().is_ok());
            let reopened = RecordStore::open(&path);
            assert!(reopened.is_ok());
            if let Ok(reopened) = reopened {
                assert_eq!(reopened.records(), store.records());
            }
        }
    }
}
