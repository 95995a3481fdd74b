//! Engine-agnostic playback primitive trait
//!
//! Abstracts the underlying media engine (HTML `<audio>`, a native decode
//! pipeline, a test double) behind the command surface the controller
//! drives. Events flow the other way: host wiring translates the engine's
//! callbacks into [`EngineEvent`] values and feeds them to
//! `PlaybackController::handle_engine_event`.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Monotonic token identifying one load request
///
/// Each `load` carries the token of the request that issued it; the host
/// echoes it back in [`EngineEvent::ReadyToPlay`] so the controller can
/// discard callbacks that refer to a source it has since replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestToken(pub u64);

impl RequestToken {
    /// The next token in the sequence
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque playback engine driven by the controller
///
/// The controller owns exactly one engine handle (constructor injection)
/// and is the only component that mutates it. Implementations must accept
/// commands in any order; `play` is the one call the controller sequences
/// itself, issuing it only after the matching ready callback.
pub trait PlaybackPrimitive: Send {
    /// Assign a new source, replacing whatever was loaded
    ///
    /// The engine (or the host wiring around it) must report the same
    /// `token` back in [`EngineEvent::ReadyToPlay`] once this source can
    /// be played.
    fn load(&mut self, locator: &str, token: RequestToken);

    /// Start or resume playback
    ///
    /// Fails if the load is incomplete; the controller only calls this
    /// after the engine reported ready for the current source.
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Seek to an absolute position in the current source
    fn seek(&mut self, position: Duration) -> Result<()>;

    /// Set output volume, ratio in `[0.0, 1.0]`
    ///
    /// The controller clamps before calling; implementations never see
    /// out-of-range values.
    fn set_volume(&mut self, ratio: f32);

    /// Mute or unmute the output
    fn set_muted(&mut self, muted: bool);

    /// Enable or disable the engine's native single-track loop
    ///
    /// Only `RepeatMode::Track` uses this; playlist repeat is resolved at
    /// the controller level so the two mechanisms never double-advance.
    fn set_looping(&mut self, looping: bool);
}

/// Lifecycle events emitted by the engine
///
/// Delivered on the host's event loop; the controller's state machine is
/// re-entered fresh on each one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// The source from the load tagged `token` can now be played
    ReadyToPlay {
        /// Token of the load request this readiness refers to
        token: RequestToken,
    },

    /// Periodic time progress for the current source
    Progress {
        /// Current playback position
        position: Duration,
        /// Total source duration
        duration: Duration,
    },

    /// The current source played to its end
    Ended,

    /// The engine failed to load, decode, or play the current source
    Error {
        /// Engine-provided reason
        reason: String,
    },
}
