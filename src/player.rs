//! The queue/playback state machine.
//!
//! [`Player`] owns the active queue, cursor, transport flags and play
//! history, and exposes the named transitions a client UI calls into.

mod selection;
mod state;
mod types;

pub use state::Player;
pub use types::{RepeatMode, Transport};
