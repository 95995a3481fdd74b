//! Core types for the playback controller

use serde::{Deserialize, Serialize};

/// Repeat mode
///
/// Playlist-level policy governing behavior on track completion. Exactly
/// one variant is active at a time; setting `Track` clears `Playlist` and
/// vice versa.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Stop on the current track when it ends
    #[default]
    Off,

    /// Loop the current track (engine-level native loop)
    Track,

    /// Advance through the playlist and wrap at the end (controller-level)
    Playlist,
}

/// The user's last-requested play/pause state
///
/// Distinct from the engine's actual transient state during loading: after
/// `play_track` the intent is `Playing` even while the engine is still
/// buffering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayIntent {
    /// Playback requested
    Playing,

    /// Paused (initial state)
    #[default]
    Paused,
}

/// Transport state machine states
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportState {
    /// No source assigned to the engine
    #[default]
    Idle,

    /// Source assigned, waiting for the engine's ready callback
    Loading,

    /// Loaded and ready, not playing
    Ready,

    /// Engine is playing
    Playing,

    /// Current track reached its end
    Ended,

    /// Engine reported an error for the current source
    Failed,
}

/// Configuration for the playback controller
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial volume ratio in `[0.0, 1.0]` (default: 1.0, pushed to the
    /// engine at construction)
    pub volume: f32,

    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 1.0,
            repeat: RepeatMode::Off,
        }
    }
}
