//! Tonearm Core
//!
//! Domain types shared by the Tonearm playlist controller.
//!
//! This crate defines the track catalog handed to the playback core at
//! initialization:
//! - **`TrackDescriptor`**: one playlist entry (source locator + display
//!   metadata)
//! - **`TrackCatalog`**: the ordered, immutable-after-init list of entries
//!
//! The catalog is deliberately read-only: the widget builds it once from the
//! resolved control bindings and the playback core only ever indexes into it.
//!
//! # Example
//!
//! ```rust
//! use tonearm_core::{TrackCatalog, TrackDescriptor};
//!
//! let catalog = TrackCatalog::from(vec![
//!     TrackDescriptor::new("https://cdn.example/one.mp3", "One", "Artist A"),
//!     TrackDescriptor::new("https://cdn.example/two.mp3", "Two", "Artist B"),
//! ]);
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.get(1).unwrap().title, "Two");
//! ```

#![forbid(unsafe_code)]

mod catalog;
mod track;

pub use catalog::TrackCatalog;
pub use track::TrackDescriptor;
