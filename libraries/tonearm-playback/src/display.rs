//! Now-playing display synchronization
//!
//! Pure projection of controller state onto observer callbacks. The
//! synchronizer never touches the engine and never mutates controller
//! state; it only turns (state, current descriptor) into a
//! [`DisplayPayload`] and fans it out.

use serde::{Deserialize, Serialize};
use tonearm_core::TrackDescriptor;

/// Snapshot handed to the host UI on every display update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayPayload {
    /// Cover artwork locator
    ///
    /// When the current track has no artwork the previously displayed
    /// artwork is carried over rather than cleared.
    pub artwork: Option<String>,

    /// Current track title
    pub title: String,

    /// Current artist name
    pub artist: String,

    /// Play/pause button state (true = show as playing)
    pub playing: bool,

    /// Progress ratio (0.0 - 1.0)
    pub progress: f32,

    /// Whether output is muted
    pub muted: bool,

    /// Error message for a failed track, if any
    pub error: Option<String>,
}

/// Observer callback invoked with each display payload
pub type DisplayObserver = Box<dyn FnMut(&DisplayPayload) + Send>;

/// Projects playback state onto subscribed observers
pub struct DisplaySynchronizer {
    observers: Vec<DisplayObserver>,

    /// Artwork currently shown, retained across tracks without their own
    last_artwork: Option<String>,
}

impl DisplaySynchronizer {
    /// Create a synchronizer with no observers
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            last_artwork: None,
        }
    }

    /// Subscribe an observer to display updates
    pub fn subscribe(&mut self, observer: DisplayObserver) {
        self.observers.push(observer);
    }

    /// Build a payload for the given track and push it to all observers
    ///
    /// `track` is `None` when the catalog is empty or nothing is selected;
    /// the metadata fields are blank in that case.
    pub fn publish(
        &mut self,
        track: Option<&TrackDescriptor>,
        playing: bool,
        progress: f32,
        muted: bool,
        error: Option<&str>,
    ) {
        // Do-not-clear policy: a track without artwork keeps whatever the
        // display already shows.
        if let Some(artwork) = track.and_then(|t| t.artwork.as_ref()) {
            self.last_artwork = Some(artwork.clone());
        }

        let payload = DisplayPayload {
            artwork: self.last_artwork.clone(),
            title: track.map(|t| t.title.clone()).unwrap_or_default(),
            artist: track.map(|t| t.artist.clone()).unwrap_or_default(),
            playing,
            progress: progress.clamp(0.0, 1.0),
            muted,
            error: error.map(String::from),
        };

        for observer in &mut self.observers {
            observer(&payload);
        }
    }

    /// Number of subscribed observers
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Default for DisplaySynchronizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DisplaySynchronizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplaySynchronizer")
            .field("observers", &self.observers.len())
            .field("last_artwork", &self.last_artwork)
            .finish()
    }
}
