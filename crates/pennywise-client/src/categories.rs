use serde::Serialize;

use crate::{ClientError, ClientResult};

pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Food",
    "Transport",
    "Entertainment",
    "Utilities",
    "Healthcare",
    "Other",
];

/// The closed, ordered set of labels an expense may be filed under.
///
/// Order is significant: menus number categories from 1 in this order and
/// reports list them in this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategorySet {
    labels: Vec<String>,
}

impl CategorySet {
    pub fn new<I, S>(labels: I) -> ClientResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collected: Vec<String> = Vec::new();
        for label in labels {
            let label = label.into().trim().to_string();
            if label.is_empty() {
                return Err(ClientError::config_invalid(
                    "category labels must be non-empty",
                ));
            }
            if collected.iter().any(|existing| existing == &label) {
                return Err(ClientError::config_invalid(&format!(
                    "category `{label}` is listed more than once"
                )));
            }
            collected.push(label);
        }

        if collected.is_empty() {
            return Err(ClientError::config_invalid(
                "at least one category must be configured",
            ));
        }

        Ok(Self { labels: collected })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|value| value == label)
    }

    /// 1-based lookup, matching how categories are numbered on screen.
    pub fn by_index(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|zero_based| self.labels.get(zero_based))
            .map(String::as_str)
    }

    pub fn find_ignore_case(&self, label: &str) -> Option<&str> {
        let wanted = label.trim();
        self.labels
            .iter()
            .find(|value| value.eq_ignore_ascii_case(wanted))
            .map(String::as_str)
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self {
            labels: DEFAULT_CATEGORIES
                .iter()
                .map(|label| label.to_string())
                .collect(),
        }
    }
}
