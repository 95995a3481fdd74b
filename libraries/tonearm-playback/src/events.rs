//! Playback events
//!
//! Event-based communication for host synchronization. Events accumulate
//! in the controller's pending queue and are drained by the host via
//! `PlaybackController::drain_events`, typically once per UI tick.

use crate::types::{PlayIntent, RepeatMode, TransportState};
use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Transport state changed (loading, ready, playing, ...)
    StateChanged {
        /// The new transport state
        state: TransportState,
        /// The user's requested play/pause state
        intent: PlayIntent,
    },

    /// A different track became current
    TrackChanged {
        /// Catalog index of the new current track
        index: usize,
        /// Catalog index of the previous track (if any)
        previous_index: Option<usize>,
    },

    /// The current track played to its natural end
    TrackFinished {
        /// Catalog index of the finished track
        index: usize,
    },

    /// Position update, at the engine's native progress cadence
    PositionUpdate {
        /// Current playback position
        position_ms: u64,
        /// Total track duration
        duration_ms: u64,
    },

    /// Volume or mute state changed
    VolumeChanged {
        /// New volume ratio (0.0 - 1.0)
        ratio: f32,
        /// Whether output is muted
        is_muted: bool,
    },

    /// Repeat mode changed
    RepeatChanged {
        /// The newly active repeat mode
        mode: RepeatMode,
    },

    /// Error occurred during playback
    Error {
        /// Error message
        message: String,
    },
}
