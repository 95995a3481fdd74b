//! Error types for the playback controller

use thiserror::Error;

/// Playback errors
///
/// Nothing here is fatal to the widget: a failed track leaves the player
/// usable for navigating to another track.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Navigation command with an out-of-range index
    #[error("Track index {index} out of range (catalog has {len} tracks)")]
    InvalidIndex {
        /// The requested index
        index: usize,
        /// Catalog length at the time of the request
        len: usize,
    },

    /// The engine failed to load, decode, or play a source
    #[error("Engine failed to play source: {0}")]
    LoadFailed(String),

    /// Seek requested before the track duration is known
    #[error("Cannot seek: track duration not yet known")]
    SeekUnavailable,

    /// No track is currently loaded
    #[error("No track loaded")]
    NoTrackLoaded,
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
