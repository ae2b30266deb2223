//! Queue, history and resume state for a streaming media client.
//!
//! `vivace` is the in-process state engine behind a media player UI. It
//! owns the play queue and cursor, the transport flags (play/pause, volume,
//! mute, shuffle, repeat), a bounded play history, and the logic for
//! deriving a "continue watching" list from externally synced progress
//! records. Rendering, networking and the actual playback element live
//! elsewhere and drive this crate through plain method calls.
//!
//! ```
//! use vivace::{Player, Settings, store};
//!
//! let settings = Settings::load_or_default();
//! let mut player = Player::with_settings(&settings);
//! if let Some(path) = store::resolve_state_path() {
//!     player.restore(store::load_or_default(&path));
//! }
//!
//! // UI event handlers drive the state machine:
//! //   player.play_track(track, Some(album_tracks));
//! //   player.play_next();
//!
//! // ...and flush preferences whenever something persisted changed.
//! if player.take_prefs_dirty() {
//!     if let Some(path) = store::resolve_state_path() {
//!         let _ = store::save(&player.saved_state(), &path);
//!     }
//! }
//! ```

pub mod config;
pub mod history;
pub mod player;
pub mod progress;
pub mod store;
pub mod track;

pub use config::Settings;
pub use history::{History, HistoryEntry};
pub use player::{Player, RepeatMode, Transport};
pub use progress::{ProgressMap, ProgressRecord, ResumeEntry, continue_candidates};
pub use store::{SavedState, StoreError};
pub use track::{Track, TrackKind};

#[cfg(test)]
mod testutil;
