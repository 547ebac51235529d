//! Shared match store: the single slot both views read and write.
//!
//! The schedule flow and the bracket flow each load on activation and save
//! after every mutation. Every save replaces the whole stored value; there
//! is no partial or merge write, and the last writer wins. The store is
//! always passed into the engine explicitly so tests can inject their own.

use crate::models::Match;
use std::sync::RwLock;

/// The persistence contract between the two views.
pub trait MatchStore: Send + Sync {
    /// The currently stored match list; empty when nothing has been saved.
    fn load(&self) -> Vec<Match>;
    /// Replace the stored value wholesale.
    fn save(&self, matches: &[Match]);
    /// Drop the stored value entirely.
    fn clear(&self) {
        self.save(&[]);
    }
}

/// In-memory store for a single session: one slot behind an `RwLock`.
/// A poisoned lock degrades to the empty value rather than panicking.
#[derive(Debug, Default)]
pub struct MemoryMatchStore {
    slot: RwLock<Vec<Match>>,
}

impl MemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MatchStore for MemoryMatchStore {
    fn load(&self) -> Vec<Match> {
        match self.slot.read() {
            Ok(guard) => guard.clone(),
            Err(_) => Vec::new(),
        }
    }

    fn save(&self, matches: &[Match]) {
        if let Ok(mut guard) = self.slot.write() {
            *guard = matches.to_vec();
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.slot.write() {
            guard.clear();
        }
    }
}
