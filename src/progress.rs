//! Derived "continue watching" view over the play history.
//!
//! Progress records are owned elsewhere (the client syncs them with the
//! backend per track id); this module only reads them against the history
//! to decide which tracks are worth offering to resume.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::history::History;
use crate::track::Track;

/// Per-track playback progress as reported by the external progress API.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Last known playback position, seconds.
    pub position: f64,
    /// Track length at the time the progress was written, seconds.
    pub duration: f64,
    /// Completion percentage in `[0, 100]`.
    pub percent: f64,
}

/// Progress records keyed by track id.
pub type ProgressMap = HashMap<String, ProgressRecord>;

/// A history track eligible for the continue view, with the progress to
/// resume it at.
#[derive(Debug, Clone, Copy)]
pub struct ResumeEntry<'a> {
    pub track: &'a Track,
    pub progress: ProgressRecord,
}

/// List history tracks that were started but not effectively finished,
/// most recently played first.
///
/// A track qualifies when its progress satisfies `0 < percent <
/// max_percent`; anything at or past `max_percent` counts as finished.
/// History entries without a progress record are skipped.
pub fn continue_candidates<'a>(
    history: &'a History,
    progress: &ProgressMap,
    max_percent: f64,
) -> Vec<ResumeEntry<'a>> {
    history
        .entries()
        .iter()
        .filter_map(|entry| {
            let record = progress.get(&entry.track.id)?;
            (record.percent > 0.0 && record.percent < max_percent)
                .then_some(ResumeEntry { track: &entry.track, progress: *record })
        })
        .collect()
}
