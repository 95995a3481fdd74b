//! Ordered, immutable track catalog
//!
//! The catalog is built once at widget initialization from the resolved
//! control bindings and is read-only thereafter. An empty catalog is a
//! valid state; the controller treats every transport command as a no-op
//! against it.

use crate::track::TrackDescriptor;
use serde::{Deserialize, Serialize};

/// Ordered sequence of track descriptors, indices `[0, len)`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackCatalog {
    tracks: Vec<TrackDescriptor>,
}

impl TrackCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Get the descriptor at `index`
    pub fn get(&self, index: usize) -> Option<&TrackDescriptor> {
        self.tracks.get(index)
    }

    /// Number of tracks in the catalog
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check whether the catalog has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Iterate over descriptors in playlist order
    pub fn iter(&self) -> std::slice::Iter<'_, TrackDescriptor> {
        self.tracks.iter()
    }
}

impl From<Vec<TrackDescriptor>> for TrackCatalog {
    fn from(tracks: Vec<TrackDescriptor>) -> Self {
        Self { tracks }
    }
}

impl<'a> IntoIterator for &'a TrackCatalog {
    type Item = &'a TrackDescriptor;
    type IntoIter = std::slice::Iter<'a, TrackDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}

impl FromIterator<TrackDescriptor> for TrackCatalog {
    fn from_iter<I: IntoIterator<Item = TrackDescriptor>>(iter: I) -> Self {
        Self {
            tracks: iter.into_iter().collect(),
        }
    }
}
