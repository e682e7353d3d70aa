//! Shared in-memory table used by the entity adapters.
//!
//! Each table is a `Mutex<Vec<T>>` plus an optional artificial delay that
//! stands in for network latency, mirroring the mock services the
//! dashboard was built against. The lock is held per call only; sequences
//! of calls are not atomic, and concurrent read-modify-write cycles can
//! lose updates exactly like the reference arrays do.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Row stored in a [`MemoryTable`], addressable by its string id.
pub(crate) trait Stored: Clone + Send {
    /// The row's id as a raw string.
    fn id_str(&self) -> &str;
}

/// Latency-simulating in-memory table.
pub(crate) struct MemoryTable<T> {
    rows: Mutex<Vec<T>>,
    latency: Duration,
}

impl<T: Stored> MemoryTable<T> {
    pub(crate) fn new(latency: Duration) -> Self {
        Self::seeded(Vec::new(), latency)
    }

    pub(crate) fn seeded(rows: Vec<T>, latency: Duration) -> Self {
        Self {
            rows: Mutex::new(rows),
            latency,
        }
    }

    /// Yield for the configured artificial delay before touching the rows.
    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<T>> {
        // A panicked writer cannot leave rows half-updated; recover the
        // guard rather than propagating the poison.
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) async fn list(&self) -> Vec<T> {
        self.simulate_latency().await;
        self.lock().clone()
    }

    pub(crate) async fn find(&self, id: &str) -> Option<T> {
        self.simulate_latency().await;
        self.lock().iter().find(|row| row.id_str() == id).cloned()
    }

    pub(crate) async fn filter(&self, predicate: impl Fn(&T) -> bool + Send) -> Vec<T> {
        self.simulate_latency().await;
        self.lock()
            .iter()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    pub(crate) async fn insert(&self, row: T) {
        self.simulate_latency().await;
        self.lock().push(row);
    }

    /// Replace the row with a matching id. Returns `false` when no row
    /// matched.
    pub(crate) async fn replace(&self, row: T) -> bool {
        self.simulate_latency().await;
        let mut rows = self.lock();
        match rows.iter_mut().find(|stored| stored.id_str() == row.id_str()) {
            Some(stored) => {
                *stored = row;
                true
            }
            None => false,
        }
    }

    /// Remove the row with a matching id. Returns `false` when no row
    /// matched.
    pub(crate) async fn delete(&self, id: &str) -> bool {
        self.simulate_latency().await;
        let mut rows = self.lock();
        let before = rows.len();
        rows.retain(|row| row.id_str() != id);
        rows.len() < before
    }
}
