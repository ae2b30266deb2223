//! Durable player state: the preference fields that survive a restart.
//!
//! Only volume, mute, shuffle, repeat and the play history persist; the
//! queue, cursor and in-track position are session-local on purpose. The
//! state lives in a small TOML document under the XDG data dir, or wherever
//! `VIVACE_STATE_PATH` points.

use std::path::{Path, PathBuf};
use std::{env, fmt, fs, io};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::history::HistoryEntry;
use crate::player::RepeatMode;

/// The flat persisted record. Every field defaults so files written by
/// older versions, or trimmed by hand, still load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedState {
    pub volume: f32,
    pub muted: bool,
    pub shuffled: bool,
    pub repeat: RepeatMode,
    pub history: Vec<HistoryEntry>,
}

impl Default for SavedState {
    fn default() -> Self {
        Self {
            volume: 1.0,
            muted: false,
            shuffled: false,
            repeat: RepeatMode::Off,
            history: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Parse(toml::de::Error),
    Encode(toml::ser::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "state file I/O error: {}", err),
            StoreError::Parse(err) => write!(f, "state file parse error: {}", err),
            StoreError::Encode(err) => write!(f, "state encode error: {}", err),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(err: toml::de::Error) -> Self {
        StoreError::Parse(err)
    }
}

impl From<toml::ser::Error> for StoreError {
    fn from(err: toml::ser::Error) -> Self {
        StoreError::Encode(err)
    }
}

/// Write `state` to `path`, creating parent directories as needed.
pub fn save(state: &SavedState, path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = toml::to_string_pretty(state)?;
    fs::write(path, body)?;
    Ok(())
}

/// Read a saved state from `path`.
pub fn load(path: &Path) -> Result<SavedState, StoreError> {
    let body = fs::read_to_string(path)?;
    let state = toml::from_str(&body)?;
    Ok(state)
}

/// Read a saved state, falling back to defaults when the file is missing or
/// unreadable. A corrupt state file must not stop the player from starting.
pub fn load_or_default(path: &Path) -> SavedState {
    match load(path) {
        Ok(state) => state,
        Err(StoreError::Io(err)) if err.kind() == io::ErrorKind::NotFound => SavedState::default(),
        Err(err) => {
            warn!("Ignoring unreadable state file {}: {}", path.display(), err);
            SavedState::default()
        }
    }
}

/// Resolve the state path from `VIVACE_STATE_PATH` or the XDG default.
pub fn resolve_state_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os("VIVACE_STATE_PATH") {
        return Some(PathBuf::from(path));
    }
    default_state_path()
}

/// Compute the default state path under `$XDG_DATA_HOME/vivace/state.toml`,
/// or `~/.local/share/vivace/state.toml` when `XDG_DATA_HOME` is unset.
pub fn default_state_path() -> Option<PathBuf> {
    let data_home = if let Some(xdg) = env::var_os("XDG_DATA_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".local").join("share"))
    } else {
        None
    };

    data_home.map(|dir| dir.join("vivace").join("state.toml"))
}
