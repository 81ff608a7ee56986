//! In-process event log store.

use tokio::sync::Mutex;

use super::{EventLogStore, StoreError};

/// Grid kept in memory. Appends are serialized by a mutex.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Vec<String>>>,
    /// Whether to simulate an unreachable store.
    pub simulate_failure: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with `rows`, header included.
    pub fn with_rows(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows: Mutex::new(rows),
            simulate_failure: false,
        }
    }

    /// A store whose every call fails.
    pub fn failing() -> Self {
        Self {
            rows: Mutex::default(),
            simulate_failure: true,
        }
    }

    /// Snapshot of the current grid.
    pub async fn rows(&self) -> Vec<Vec<String>> {
        self.rows.lock().await.clone()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.simulate_failure {
            tracing::warn!("Memory store simulating failure");
            return Err(StoreError::Unavailable("Simulated failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EventLogStore for MemoryStore {
    async fn get_all_rows(&self) -> Result<Vec<Vec<String>>, StoreError> {
        self.check_available()?;
        Ok(self.rows.lock().await.clone())
    }

    async fn append_row(&self, values: Vec<String>) -> Result<(), StoreError> {
        self.check_available()?;
        self.rows.lock().await.push(values);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}
