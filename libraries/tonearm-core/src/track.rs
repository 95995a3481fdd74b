//! Track descriptor type

use serde::{Deserialize, Serialize};

/// One playlist entry
///
/// Contains the source locator handed to the playback engine plus the
/// metadata shown in the now-playing display. Immutable once the catalog
/// is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackDescriptor {
    /// Source locator passed verbatim to the playback engine
    pub source: String,

    /// Cover artwork locator (optional; the display keeps the previous
    /// artwork when absent)
    pub artwork: Option<String>,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,
}

impl TrackDescriptor {
    /// Create a descriptor without artwork
    pub fn new(
        source: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            artwork: None,
            title: title.into(),
            artist: artist.into(),
        }
    }

    /// Attach cover artwork
    #[must_use]
    pub fn with_artwork(mut self, artwork: impl Into<String>) -> Self {
        self.artwork = Some(artwork.into());
        self
    }
}
