//! Derived report rows. Recomputed from the log on every read.

use serde::Serialize;

/// Net holding of one item by one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonItemBalance {
    pub person_name: String,
    pub person_id: String,
    pub item_name: String,
    pub balance: i64,
}

/// Total quantity of one item currently out, across all holders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOutstanding {
    pub item_name: String,
    pub outstanding: i64,
}

/// Per-item outstanding totals, largest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutstandingReport {
    pub items: Vec<ItemOutstanding>,
    pub nothing_outstanding: bool,
}

impl OutstandingReport {
    /// Explicit "nothing is out" result.
    pub fn nothing_outstanding() -> Self {
        Self {
            items: Vec::new(),
            nothing_outstanding: true,
        }
    }

    pub fn total(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.outstanding))
    }
}
