//! Bounded, deduplicated play-history log.
//!
//! Every transition into a track records an entry: most recent first, one
//! entry per track id, capped so the persisted state stays small.

use serde::{Deserialize, Serialize};

use crate::track::Track;

/// One recorded play: when it happened plus a snapshot of the track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unix epoch seconds at the time the play was recorded.
    pub played_at: i64,
    pub track: Track,
}

#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl History {
    /// Default cap on retained entries.
    pub const DEFAULT_CAPACITY: usize = 100;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// A history keeping at most `capacity` entries (floor of one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::new(), capacity: capacity.max(1) }
    }

    /// Rebuild from persisted entries, re-applying dedup and the cap in case
    /// the file was hand-edited or written under a different configuration.
    pub fn from_entries(entries: Vec<HistoryEntry>, capacity: usize) -> Self {
        let mut history = Self::with_capacity(capacity);
        // Entries are stored most-recent-first; replay oldest-first so the
        // rebuilt log keeps the same ordering.
        for entry in entries.into_iter().rev() {
            history.record_at(&entry.track, entry.played_at);
        }
        history
    }

    /// Record a play of `track` now.
    pub fn record(&mut self, track: &Track) {
        self.record_at(track, now_epoch_secs());
    }

    /// Record a play at an explicit timestamp: any older entry with the same
    /// id is dropped, the new one goes to the front, the tail is trimmed to
    /// capacity.
    pub fn record_at(&mut self, track: &Track, played_at: i64) {
        self.entries.retain(|e| e.track.id != track.id);
        self.entries.insert(0, HistoryEntry { played_at, track: track.clone() });
        self.entries.truncate(self.capacity);
    }

    /// Retained entries, most recent first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.track.id == id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

fn now_epoch_secs() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or(std::time::Duration::ZERO)
        .as_secs() as i64
}

#[cfg(test)]
mod tests;
