use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/vivace/config.toml` or `~/.config/vivace/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `VIVACE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playback: PlaybackSettings,
    pub history: HistorySettings,
    pub resume: ResumeSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playback: PlaybackSettings::default(),
            history: HistorySettings::default(),
            resume: ResumeSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Fresh-install volume, `0.0..=1.0`. Once the player has run, the
    /// persisted state overrides this.
    pub volume: f32,
    /// Whether shuffle starts enabled on a fresh install.
    pub shuffle: bool,
    /// Default repeat mode on a fresh install.
    pub repeat: RepeatSetting,
    /// Pause at the end of a non-repeating queue instead of re-arming the
    /// last track with the playing flag still set.
    pub pause_at_queue_end: bool,
    /// How far into a track (seconds) "previous" restarts it instead of
    /// stepping back through the queue.
    pub previous_restart_secs: f64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            volume: 1.0,
            shuffle: false,
            repeat: RepeatSetting::Off,
            pause_at_queue_end: false,
            previous_restart_secs: 3.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatSetting {
    #[serde(alias = "no_repeat", alias = "no-repeat", alias = "none")]
    Off,
    #[serde(alias = "repeat_all", alias = "repeat-all", alias = "loop")]
    All,
    #[serde(alias = "repeat_one", alias = "repeat-one", alias = "single")]
    One,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of retained play-history entries.
    pub capacity: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { capacity: 100 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResumeSettings {
    /// Completion percentage at or above which a track counts as finished
    /// and drops out of the continue view.
    pub max_percent: f64,
}

impl Default for ResumeSettings {
    fn default() -> Self {
        Self { max_percent: 95.0 }
    }
}
