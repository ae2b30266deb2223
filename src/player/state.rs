//! The queue/playback state container and its named transitions.

use rand::Rng;
use tracing::debug;

use crate::config::{RepeatSetting, Settings};
use crate::history::History;
use crate::store::SavedState;
use crate::track::Track;

use super::selection;
use super::types::{RepeatMode, Transport};

/// In-process playback state behind a media player UI.
///
/// Owns the active queue and cursor, the transport flags and the play
/// history. Every operation is total: empty queues and out-of-range input
/// degrade to no-ops or clamps, never panics.
#[derive(Debug)]
pub struct Player {
    queue: Vec<Track>,
    queue_index: usize,
    current: Option<Track>,
    transport: Transport,
    history: History,
    previous_restart_secs: f64,
    pause_at_queue_end: bool,
    prefs_dirty: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// A player with stock defaults: empty queue, full volume, no repeat.
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            queue_index: 0,
            current: None,
            transport: Transport::default(),
            history: History::new(),
            previous_restart_secs: 3.0,
            pause_at_queue_end: false,
            prefs_dirty: false,
        }
    }

    /// A player seeded from loaded settings. These are fresh-install
    /// defaults; persisted state, when present, is applied on top via
    /// [`Player::restore`].
    pub fn with_settings(settings: &Settings) -> Self {
        let mut player = Self::new();
        player.transport.volume = settings.playback.volume.clamp(0.0, 1.0);
        player.transport.shuffled = settings.playback.shuffle;
        player.transport.repeat = match settings.playback.repeat {
            RepeatSetting::Off => RepeatMode::Off,
            RepeatSetting::All => RepeatMode::All,
            RepeatSetting::One => RepeatMode::One,
        };
        player.previous_restart_secs = settings.playback.previous_restart_secs.max(0.0);
        player.pause_at_queue_end = settings.playback.pause_at_queue_end;
        player.history = History::with_capacity(settings.history.capacity);
        player
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    pub fn queue(&self) -> &[Track] {
        &self.queue
    }

    pub fn queue_index(&self) -> usize {
        self.queue_index
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_playing(&self) -> bool {
        self.transport.playing
    }

    /// The level the audio output should actually use.
    pub fn effective_volume(&self) -> f32 {
        self.transport.effective_volume()
    }

    /// Replace the queue wholesale and move the cursor to `start_index`.
    ///
    /// Out-of-range cursors clamp to the last entry; an empty `items` clears
    /// the current track. Position and duration reset, the playing flag is
    /// left alone, and nothing is recorded to history.
    pub fn set_queue(&mut self, items: Vec<Track>, start_index: usize) {
        if items.is_empty() {
            self.queue = items;
            self.queue_index = 0;
            self.current = None;
        } else {
            let index = start_index.min(items.len() - 1);
            self.current = Some(items[index].clone());
            self.queue = items;
            self.queue_index = index;
        }
        self.transport.position = 0.0;
        self.transport.duration = 0.0;
        debug!("Queue replaced: {} tracks, cursor at {}", self.queue.len(), self.queue_index);
    }

    /// Start playing `track` immediately.
    ///
    /// With `queue`, the new list is adopted verbatim and the cursor jumps to
    /// the first entry matching `track.id`, or to the front when the list
    /// does not contain it: callers may hand over a context list the clicked
    /// track is not part of yet, and the mismatch is tolerated rather than
    /// rejected. Without `queue`, the existing queue and cursor stay as they
    /// are.
    pub fn play_track(&mut self, track: Track, queue: Option<Vec<Track>>) {
        if let Some(items) = queue {
            self.queue_index = items.iter().position(|t| t.id == track.id).unwrap_or(0);
            self.queue = items;
        }
        self.begin_track(track);
    }

    /// Advance the cursor: repeat-one replays the current track, shuffle
    /// draws a random entry, otherwise move forward and wrap only under
    /// repeat-all. No-op when the queue is empty.
    pub fn play_next(&mut self) {
        self.play_next_with(&mut rand::rng());
    }

    /// [`Player::play_next`] with an explicit RNG; the plain version feeds
    /// it thread entropy.
    pub fn play_next_with(&mut self, rng: &mut impl Rng) {
        if self.queue.is_empty() {
            return;
        }
        if self.pause_at_queue_end
            && self.transport.repeat == RepeatMode::Off
            && !self.transport.shuffled
            && self.queue_index + 1 >= self.queue.len()
        {
            // Opt-in alternative to the stock end-of-queue behavior of
            // re-arming the last track with the playing flag still set.
            self.transport.playing = false;
            return;
        }
        let next = selection::next_index(
            self.queue.len(),
            self.queue_index,
            self.transport.shuffled,
            self.transport.repeat,
            rng,
        );
        self.activate(next);
    }

    /// Step back. More than `previous_restart_secs` into the track restarts
    /// it in place; otherwise the cursor moves back, wrapping from the first
    /// entry to the last regardless of repeat mode.
    pub fn play_previous(&mut self) {
        if self.transport.position > self.previous_restart_secs {
            self.transport.position = 0.0;
            self.transport.playing = true;
            return;
        }
        if self.queue.is_empty() {
            return;
        }
        let previous = selection::previous_index(self.queue.len(), self.queue_index);
        self.activate(previous);
    }

    pub fn toggle_play(&mut self) {
        self.transport.playing = !self.transport.playing;
    }

    pub fn play(&mut self) {
        self.transport.playing = true;
    }

    pub fn pause(&mut self) {
        self.transport.playing = false;
    }

    /// Set the volume, clamped to `[0, 1]`. Landing on exactly zero mutes;
    /// anything above zero unmutes. [`Player::toggle_mute`] does not go
    /// through here, so the stored level survives a mute round-trip.
    pub fn set_volume(&mut self, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        self.transport.volume = volume;
        self.transport.muted = volume == 0.0;
        self.prefs_dirty = true;
    }

    pub fn toggle_mute(&mut self) {
        self.transport.muted = !self.transport.muted;
        self.prefs_dirty = true;
    }

    /// Flip shuffle. The queue order is never rewritten; shuffle only
    /// changes how [`Player::play_next`] picks the next cursor position.
    pub fn toggle_shuffle(&mut self) {
        self.transport.shuffled = !self.transport.shuffled;
        self.prefs_dirty = true;
    }

    /// Cycle repeat `off -> all -> one -> off`.
    pub fn cycle_repeat_mode(&mut self) {
        self.transport.repeat = self.transport.repeat.cycled();
        self.prefs_dirty = true;
    }

    /// Periodic position report from the playback element. Dropped while a
    /// seek is in flight so the state keeps showing the seek target.
    pub fn report_position(&mut self, seconds: f64) {
        if self.transport.seeking {
            return;
        }
        self.transport.position = seconds.max(0.0);
    }

    /// Duration report from the playback element once metadata is loaded.
    pub fn report_duration(&mut self, seconds: f64) {
        self.transport.duration = seconds.max(0.0);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.transport.loading = loading;
    }

    /// Mark a user seek as in flight; position reports are suppressed until
    /// [`Player::end_seeking`].
    pub fn begin_seeking(&mut self) {
        self.transport.seeking = true;
    }

    /// Jump to `seconds`, clamped to the known duration when there is one.
    pub fn seek_to(&mut self, seconds: f64) {
        let seconds = seconds.max(0.0);
        self.transport.position = if self.transport.duration > 0.0 {
            seconds.min(self.transport.duration)
        } else {
            seconds
        };
    }

    pub fn end_seeking(&mut self) {
        self.transport.seeking = false;
    }

    /// Dismiss the active playback context: queue, cursor, current track and
    /// the per-track flags all reset. History and the persisted preferences
    /// (volume, mute, shuffle, repeat) are kept.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.queue_index = 0;
        self.current = None;
        self.transport.playing = false;
        self.transport.loading = false;
        self.transport.seeking = false;
        self.transport.position = 0.0;
        self.transport.duration = 0.0;
        debug!("Playback context dismissed");
    }

    /// Snapshot exactly the preference-like state that survives a restart.
    pub fn saved_state(&self) -> SavedState {
        SavedState {
            volume: self.transport.volume,
            muted: self.transport.muted,
            shuffled: self.transport.shuffled,
            repeat: self.transport.repeat,
            history: self.history.entries().to_vec(),
        }
    }

    /// Apply a previously saved snapshot. Only the five persisted fields are
    /// touched; the queue and cursor always start empty in a new session.
    pub fn restore(&mut self, saved: SavedState) {
        self.transport.volume = saved.volume.clamp(0.0, 1.0);
        self.transport.muted = saved.muted;
        self.transport.shuffled = saved.shuffled;
        self.transport.repeat = saved.repeat;
        self.history = History::from_entries(saved.history, self.history.capacity());
        self.prefs_dirty = false;
    }

    /// True once any persisted preference changed since the last call.
    /// Callers poll this to decide when to flush [`Player::saved_state`].
    pub fn take_prefs_dirty(&mut self) -> bool {
        std::mem::take(&mut self.prefs_dirty)
    }

    /// Move the cursor to `index` and start that queue entry.
    fn activate(&mut self, index: usize) {
        let track = self.queue[index].clone();
        self.queue_index = index;
        self.begin_track(track);
    }

    fn begin_track(&mut self, track: Track) {
        self.transport.position = 0.0;
        self.transport.duration = 0.0;
        self.transport.playing = true;
        self.history.record(&track);
        self.prefs_dirty = true;
        debug!("Now playing: {}", track.id);
        self.current = Some(track);
    }
}
