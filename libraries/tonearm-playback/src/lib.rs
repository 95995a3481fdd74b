//! Tonearm - Playback Core
//!
//! Engine-agnostic playback state machine for a playlist widget.
//!
//! This crate provides:
//! - Track navigation (select, next/prev with wraparound)
//! - Play/pause intent tracking, corrected by engine callbacks
//! - Repeat modes (Off, Track, Playlist) with the native-loop /
//!   controller-level split handled correctly
//! - Volume (clamped ratio) and mute
//! - Ratio-based seeking
//! - Now-playing display projection via observer callbacks
//! - Stale-callback rejection through monotonic request tokens
//!
//! # Architecture
//!
//! `tonearm-playback` is completely host-agnostic: no DOM, no audio
//! backend, no timers. The host supplies the engine behind the
//! [`PlaybackPrimitive`] trait and forwards the engine's lifecycle
//! callbacks as [`EngineEvent`] values; the controller drives the engine
//! and projects its state back out through display observers and a
//! drainable event queue.
//!
//! ```text
//! adapter ──commands──▶ PlaybackController ──calls──▶ PlaybackPrimitive
//!                              ▲                            │
//!                              └────────EngineEvent─────────┘
//!                              │
//!                              ├──▶ DisplayPayload observers
//!                              └──▶ PlaybackEvent queue (drain_events)
//! ```
//!
//! # Example
//!
//! ```rust
//! use tonearm_core::{TrackCatalog, TrackDescriptor};
//! use tonearm_playback::{
//!     EngineEvent, PlaybackConfig, PlaybackController, PlaybackPrimitive, RequestToken, Result,
//! };
//! use std::time::Duration;
//!
//! // Implement PlaybackPrimitive for your engine
//! struct SilentEngine;
//!
//! impl PlaybackPrimitive for SilentEngine {
//!     fn load(&mut self, _locator: &str, _token: RequestToken) {}
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) {}
//!     fn seek(&mut self, _position: Duration) -> Result<()> { Ok(()) }
//!     fn set_volume(&mut self, _ratio: f32) {}
//!     fn set_muted(&mut self, _muted: bool) {}
//!     fn set_looping(&mut self, _looping: bool) {}
//! }
//!
//! let catalog = TrackCatalog::from(vec![
//!     TrackDescriptor::new("/music/a.mp3", "Alpha", "Artist A"),
//!     TrackDescriptor::new("/music/b.mp3", "Beta", "Artist B"),
//! ]);
//!
//! let mut controller = PlaybackController::new(
//!     catalog,
//!     Box::new(SilentEngine),
//!     PlaybackConfig::default(),
//! );
//!
//! // Wire up the now-playing display
//! controller.subscribe_display(Box::new(|payload| {
//!     println!("{} - {}", payload.artist, payload.title);
//! }));
//!
//! // User presses "next": track B loads, plays once the engine is ready
//! controller.next();
//! controller.handle_engine_event(EngineEvent::ReadyToPlay { token: RequestToken(2) });
//! assert_eq!(controller.current_index(), Some(1));
//! ```

#![forbid(unsafe_code)]

mod controller;
mod display;
mod error;
mod events;
mod primitive;
pub mod types;
mod volume;

// Public exports
pub use controller::PlaybackController;
pub use display::{DisplayObserver, DisplayPayload, DisplaySynchronizer};
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use primitive::{EngineEvent, PlaybackPrimitive, RequestToken};
pub use types::{PlayIntent, PlaybackConfig, RepeatMode, TransportState};
