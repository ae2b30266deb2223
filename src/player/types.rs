//! Small shared types for the player: repeat mode and the transport flags.

use serde::{Deserialize, Serialize};

/// What happens when the cursor runs off the end of the queue.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatMode {
    /// Stop advancing past the last entry.
    Off,
    /// Wrap around to the start of the queue.
    All,
    /// Replay the current track.
    One,
}

impl Default for RepeatMode {
    fn default() -> Self {
        Self::Off
    }
}

impl RepeatMode {
    /// Advance one step in the `off -> all -> one -> off` cycle.
    pub fn cycled(self) -> Self {
        match self {
            Self::Off => Self::All,
            Self::All => Self::One,
            Self::One => Self::Off,
        }
    }
}

/// Mutable playback flags, independent of which track is loaded.
///
/// Handed out read-only by [`Player::transport`](super::Player::transport);
/// mutation goes through the player's named operations.
#[derive(Debug, Clone)]
pub struct Transport {
    /// Whether playback is (or should be) rolling.
    pub playing: bool,
    /// The media element is fetching or buffering the current source.
    pub loading: bool,
    /// Stored volume level in `[0, 1]`; survives mute round-trips.
    pub volume: f32,
    pub muted: bool,
    pub shuffled: bool,
    pub repeat: RepeatMode,
    /// Playback position in seconds.
    pub position: f64,
    /// Reported media duration in seconds; zero until known.
    pub duration: f64,
    /// A user seek is in flight; periodic position reports are dropped.
    pub seeking: bool,
}

impl Transport {
    /// The level the audio output should actually use.
    pub fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self {
            playing: false,
            loading: false,
            volume: 1.0,
            muted: false,
            shuffled: false,
            repeat: RepeatMode::default(),
            position: 0.0,
            duration: 0.0,
            seeking: false,
        }
    }
}
