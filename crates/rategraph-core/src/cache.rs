//! Bounded snapshot cache
//!
//! The engine talks to a [`SnapshotStore`]; [`LruSnapshotCache`] is the
//! in-memory implementation, shared across threads behind a mutex.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::trace;

use crate::graph::GraphPayload;

pub const DEFAULT_MAX_SIZE: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheEntry {
    pub graph_payload: GraphPayload,
    pub timestamp: DateTime<Utc>,
}

/// Snapshot storage keyed by snapshot id
pub trait SnapshotStore: Send + Sync {
    fn get(&self, id: &str) -> Option<CacheEntry>;
    fn set(&self, id: &str, graph_payload: GraphPayload, timestamp: DateTime<Utc>);
    /// Most recently used entry
    fn latest(&self) -> Option<(String, CacheEntry)>;
    fn size(&self) -> usize;
}

#[derive(Debug, Default)]
struct LruState {
    entries: HashMap<String, (CacheEntry, u64)>,
    /// Recency stamp -> id, oldest first
    recency: BTreeMap<u64, String>,
    clock: u64,
}

impl LruState {
    fn touch(&mut self, id: &str) {
        self.clock += 1;
        let clock = self.clock;
        if let Some((_, stamp)) = self.entries.get_mut(id) {
            self.recency.remove(stamp);
            *stamp = clock;
            self.recency.insert(clock, id.to_string());
        }
    }
}

/// Least-recently-used cache holding at most `max_size` snapshots
#[derive(Debug)]
pub struct LruSnapshotCache {
    max_size: usize,
    state: Mutex<LruState>,
}

impl Default for LruSnapshotCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SIZE)
    }
}

impl LruSnapshotCache {
    /// A zero `max_size` is treated as 1
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size: max_size.max(1),
            state: Mutex::new(LruState::default()),
        }
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    fn lock(&self) -> MutexGuard<'_, LruState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SnapshotStore for LruSnapshotCache {
    fn get(&self, id: &str) -> Option<CacheEntry> {
        let mut state = self.lock();
        let entry = state.entries.get(id).map(|(entry, _)| entry.clone())?;
        state.touch(id);
        Some(entry)
    }

    fn set(&self, id: &str, graph_payload: GraphPayload, timestamp: DateTime<Utc>) {
        let mut state = self.lock();
        let entry = CacheEntry {
            graph_payload,
            timestamp,
        };

        match state.entries.get_mut(id) {
            Some((existing, _)) => *existing = entry,
            None => {
                state.entries.insert(id.to_string(), (entry, 0));
            }
        }
        state.touch(id);

        while state.entries.len() > self.max_size {
            let Some((_, oldest)) = state.recency.pop_first() else {
                break;
            };
            state.entries.remove(&oldest);
            trace!(evicted = %oldest, "snapshot_evicted");
        }
    }

    fn latest(&self) -> Option<(String, CacheEntry)> {
        let state = self.lock();
        let (_, id) = state.recency.last_key_value()?;
        let (entry, _) = state.entries.get(id)?;
        Some((id.clone(), entry.clone()))
    }

    fn size(&self) -> usize {
        self.lock().entries.len()
    }
}
