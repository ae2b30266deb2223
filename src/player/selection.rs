//! Pure cursor-selection helpers for the playback queue.
//!
//! `play_next`/`play_previous` route through these so the wrap, repeat and
//! shuffle rules stay testable without an RNG attached to real entropy.

use rand::{Rng, RngExt as _};

use super::types::RepeatMode;

/// Pick the next cursor position for a non-empty queue of `len` entries.
///
/// Repeat-one pins the cursor, shuffle draws uniformly from the whole queue
/// (re-picking the current index is allowed), otherwise advance by one and
/// wrap only under repeat-all.
pub(crate) fn next_index(
    len: usize,
    current: usize,
    shuffled: bool,
    repeat: RepeatMode,
    rng: &mut impl Rng,
) -> usize {
    debug_assert!(len > 0);
    if repeat == RepeatMode::One {
        return current;
    }
    if shuffled {
        return rng.random_range(0..len);
    }
    if current + 1 < len {
        current + 1
    } else if repeat == RepeatMode::All {
        0
    } else {
        current.min(len - 1)
    }
}

/// Pick the previous cursor position; always wraps from the front to the end.
pub(crate) fn previous_index(len: usize, current: usize) -> usize {
    debug_assert!(len > 0);
    if current == 0 { len - 1 } else { current - 1 }
}
