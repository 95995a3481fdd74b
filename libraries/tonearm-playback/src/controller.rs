//! Playback controller - core orchestration
//!
//! Owns the current-track index, repeat mode, volume/mute state, and
//! play/pause intent; drives the engine and reacts to its events.
//!
//! The track-advance logic is an explicit state machine
//! (`Idle → Loading → Ready/Playing → Ended/Failed`). Every load is tagged
//! with a monotonically increasing [`RequestToken`]; a ready callback whose
//! token no longer matches the latest issued one refers to a source the
//! controller has since replaced and is discarded without any state change.
//! That token check is the whole concurrency story: commands are
//! synchronous and single-threaded, but they interleave freely with
//! in-flight engine callbacks.

use crate::{
    display::{DisplayObserver, DisplaySynchronizer},
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    primitive::{EngineEvent, PlaybackPrimitive, RequestToken},
    types::{PlayIntent, PlaybackConfig, RepeatMode, TransportState},
    volume::Volume,
};
use std::time::Duration;
use tonearm_core::{TrackCatalog, TrackDescriptor};
use tracing::{debug, warn};

/// Central playback controller
///
/// Exclusively owns the single engine handle (constructor injection) and
/// is the only component that mutates it. The display synchronizer and the
/// event queue are read-side projections of the state held here.
pub struct PlaybackController {
    // Collaborators
    catalog: TrackCatalog,
    engine: Box<dyn PlaybackPrimitive>,
    display: DisplaySynchronizer,

    // State machine
    state: TransportState,
    intent: PlayIntent,
    current: Option<usize>,
    repeat: RepeatMode,
    volume: Volume,

    // In-flight load bookkeeping
    token: RequestToken,
    pending_play: bool,

    // Derived from engine progress events, never authoritative
    duration: Option<Duration>,
    progress: f32,

    last_error: Option<String>,

    // Event queue for host synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackController {
    /// Create a controller for the given catalog and engine
    ///
    /// Pushes the configured volume and loop flag to the engine. If the
    /// catalog is non-empty the first track is selected immediately
    /// (loaded paused, display notified) — playback does not start until
    /// the user asks for it.
    pub fn new(
        catalog: TrackCatalog,
        mut engine: Box<dyn PlaybackPrimitive>,
        config: PlaybackConfig,
    ) -> Self {
        let volume = Volume::new(config.volume);
        engine.set_volume(volume.ratio());
        engine.set_muted(false);
        engine.set_looping(config.repeat == RepeatMode::Track);

        let mut controller = Self {
            catalog,
            engine,
            display: DisplaySynchronizer::new(),
            state: TransportState::Idle,
            intent: PlayIntent::Paused,
            current: None,
            repeat: config.repeat,
            volume,
            token: RequestToken::default(),
            pending_play: false,
            duration: None,
            progress: 0.0,
            last_error: None,
            pending_events: Vec::new(),
        };

        if !controller.catalog.is_empty() {
            controller.load_index(0, false);
        }

        controller
    }

    // ===== Transport Commands =====

    /// Select the track at `index` without starting playback
    ///
    /// Loads the source into the engine, resets progress, sets intent to
    /// paused, and notifies the display immediately (metadata is known
    /// synchronously). Silent no-op on an empty catalog;
    /// `Err(InvalidIndex)` for an out-of-range index, state unchanged.
    pub fn select_track(&mut self, index: usize) -> Result<()> {
        if self.catalog.is_empty() {
            return Ok(());
        }
        self.validate_index(index)?;
        self.load_index(index, false);
        Ok(())
    }

    /// Select the track at `index` and start playback once it is ready
    ///
    /// The engine `play()` is issued only on the matching ready callback,
    /// never before, so an unready engine is never raced.
    pub fn play_track(&mut self, index: usize) -> Result<()> {
        if self.catalog.is_empty() {
            return Ok(());
        }
        self.validate_index(index)?;
        self.load_index(index, true);
        Ok(())
    }

    /// Toggle between playing and paused
    ///
    /// The intent (and the display's play/pause button) reflects the
    /// requested transition optimistically; engine callbacks correct it if
    /// the request is rejected. No-op when nothing is selected.
    pub fn toggle_play_pause(&mut self) {
        let Some(index) = self.current else {
            return;
        };

        match self.state {
            TransportState::Playing => {
                self.engine.pause();
                self.state = TransportState::Ready;
                self.intent = PlayIntent::Paused;
                self.emit_state_changed();
                self.sync_display();
            }
            TransportState::Ready | TransportState::Ended => {
                self.issue_play();
            }
            TransportState::Loading => {
                // Still waiting on the engine: flip what happens when the
                // ready callback lands.
                self.pending_play = !self.pending_play;
                self.intent = if self.pending_play {
                    PlayIntent::Playing
                } else {
                    PlayIntent::Paused
                };
                self.emit_state_changed();
                self.sync_display();
            }
            TransportState::Idle | TransportState::Failed => {
                // Retry path: reload the current track and play it.
                self.load_index(index, true);
            }
        }
    }

    /// Advance to the next track (wrapping) and play it
    ///
    /// No-op on an empty catalog.
    pub fn next(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        let len = self.catalog.len();
        let index = self.current.map_or(0, |i| (i + 1) % len);
        self.load_index(index, true);
    }

    /// Go back to the previous track (wrapping) and play it
    ///
    /// No-op on an empty catalog.
    pub fn prev(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        let len = self.catalog.len();
        let index = self.current.map_or(0, |i| (i + len - 1) % len);
        self.load_index(index, true);
    }

    // ===== Repeat =====

    /// Set the repeat mode
    ///
    /// The engine's native loop flag is enabled only for
    /// [`RepeatMode::Track`]; playlist repeat is resolved in the ended
    /// handler so the two mechanisms never double-advance.
    pub fn set_repeat(&mut self, mode: RepeatMode) {
        if self.repeat == mode {
            return;
        }
        self.repeat = mode;
        self.engine.set_looping(mode == RepeatMode::Track);
        self.pending_events.push(PlaybackEvent::RepeatChanged { mode });
    }

    /// Toggle track repeat (widget repeat-track button)
    ///
    /// Turns repeat off when track repeat is already active; otherwise
    /// switches to it, clearing playlist repeat.
    pub fn toggle_repeat_track(&mut self) {
        let mode = if self.repeat == RepeatMode::Track {
            RepeatMode::Off
        } else {
            RepeatMode::Track
        };
        self.set_repeat(mode);
    }

    /// Toggle playlist repeat (widget repeat-playlist button)
    pub fn toggle_repeat_playlist(&mut self) {
        let mode = if self.repeat == RepeatMode::Playlist {
            RepeatMode::Off
        } else {
            RepeatMode::Playlist
        };
        self.set_repeat(mode);
    }

    /// Get the active repeat mode
    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    // ===== Volume =====

    /// Set the volume ratio
    ///
    /// Out-of-range input is clamped into `[0.0, 1.0]`, not rejected; the
    /// engine only ever sees the clamped value.
    pub fn set_volume(&mut self, ratio: f32) {
        let clamped = self.volume.set_ratio(ratio);
        self.engine.set_volume(clamped);
        self.emit_volume_changed();
    }

    /// Get the current volume ratio
    pub fn volume(&self) -> f32 {
        self.volume.ratio()
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        let muted = self.volume.toggle_mute();
        self.engine.set_muted(muted);
        self.emit_volume_changed();
        self.sync_display();
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    // ===== Seek =====

    /// Seek to a position expressed as a ratio of the track duration
    ///
    /// The adapter computes the ratio from the gesture position; the
    /// controller maps it to an absolute time. Requires a current track
    /// with a known duration (reported by a progress event), otherwise
    /// `Err(SeekUnavailable)` and the seek is ignored.
    pub fn seek_to(&mut self, ratio: f32) -> Result<()> {
        if self.current.is_none() {
            return Err(PlaybackError::NoTrackLoaded);
        }
        let Some(duration) = self.duration else {
            warn!("seek ignored: duration not yet known");
            return Err(PlaybackError::SeekUnavailable);
        };

        let ratio = ratio.clamp(0.0, 1.0);
        self.engine.seek(duration.mul_f32(ratio))?;
        self.progress = ratio;
        self.sync_display();
        Ok(())
    }

    // ===== Engine Events =====

    /// Feed an engine lifecycle event into the state machine
    ///
    /// Called by the host wiring on the event loop. Engine-originated
    /// failures are translated here; nothing propagates as a fault.
    pub fn handle_engine_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::ReadyToPlay { token } => self.handle_ready(token),
            EngineEvent::Progress { position, duration } => {
                self.handle_progress(position, duration);
            }
            EngineEvent::Ended => self.handle_ended(),
            EngineEvent::Error { reason } => self.fail_current(reason),
        }
    }

    fn handle_ready(&mut self, token: RequestToken) {
        if token != self.token {
            // Refers to a source this controller has since replaced.
            debug!(stale = %token, current = %self.token, "discarding stale ready callback");
            return;
        }
        if self.state != TransportState::Loading {
            // Engines re-fire readiness after buffering stalls or seeks;
            // only a load in flight is waiting on it.
            debug!(state = ?self.state, "discarding ready callback outside loading");
            return;
        }

        if self.pending_play {
            self.issue_play();
        } else {
            self.state = TransportState::Ready;
            self.emit_state_changed();
            self.sync_display();
        }
    }

    fn handle_progress(&mut self, position: Duration, duration: Duration) {
        if self.state == TransportState::Loading {
            // Progress for the outgoing source; the new one isn't ready yet.
            debug!("ignoring progress event while loading");
            return;
        }
        if duration.is_zero() {
            return;
        }

        self.duration = Some(duration);
        self.progress = (position.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0);
        self.pending_events.push(PlaybackEvent::PositionUpdate {
            position_ms: position.as_millis() as u64,
            duration_ms: duration.as_millis() as u64,
        });
        self.sync_display();
    }

    fn handle_ended(&mut self) {
        let Some(index) = self.current else {
            return;
        };
        if self.state == TransportState::Loading {
            // The replaced source ran out; the new load supersedes it.
            debug!("ignoring ended event while loading");
            return;
        }

        self.state = TransportState::Ended;
        self.pending_events.push(PlaybackEvent::TrackFinished { index });
        self.emit_state_changed();

        match self.repeat {
            RepeatMode::Track => {
                // The engine's native loop owns track repeat; an ended
                // event can still arrive from engines that emit it before
                // looping. Restart the already-loaded source without
                // advancing, so loop and controller never double-trigger.
                debug!(index, "ended under track repeat, restarting in place");
                self.issue_play();
            }
            RepeatMode::Playlist => {
                let next = (index + 1) % self.catalog.len();
                debug!(from = index, to = next, "ended under playlist repeat, advancing");
                self.load_index(next, true);
            }
            RepeatMode::Off => {
                // Stay on the same track, paused. No auto-advance.
                self.state = TransportState::Ready;
                self.intent = PlayIntent::Paused;
                self.pending_play = false;
                self.emit_state_changed();
                self.sync_display();
            }
        }
    }

    // ===== State Queries =====

    /// Current transport state
    pub fn state(&self) -> TransportState {
        self.state
    }

    /// The user's last-requested play/pause state
    pub fn intent(&self) -> PlayIntent {
        self.intent
    }

    /// Catalog index of the current track, if any
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Descriptor of the current track, if any
    pub fn current_track(&self) -> Option<&TrackDescriptor> {
        self.current.and_then(|i| self.catalog.get(i))
    }

    /// Progress ratio of the current track (0.0 - 1.0)
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// The track catalog
    pub fn catalog(&self) -> &TrackCatalog {
        &self.catalog
    }

    // ===== Display =====

    /// Subscribe an observer to now-playing display updates
    pub fn subscribe_display(&mut self, observer: DisplayObserver) {
        self.display.subscribe(observer);
    }

    /// Re-publish the current display payload
    ///
    /// Useful right after subscribing, so the new observer does not wait
    /// for the next state change.
    pub fn refresh_display(&mut self) {
        self.sync_display();
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events emitted since the last drain. The host should
    /// call this periodically to synchronize with playback state.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    fn validate_index(&self, index: usize) -> Result<()> {
        let len = self.catalog.len();
        if index >= len {
            warn!(index, len, "transport command with out-of-range index");
            return Err(PlaybackError::InvalidIndex { index, len });
        }
        Ok(())
    }

    /// Assign the source at `index` to the engine and enter `Loading`
    ///
    /// `index` must be valid. Bumping the token here is what invalidates
    /// the ready callback of any load still in flight.
    fn load_index(&mut self, index: usize, play: bool) {
        let previous = self.current;
        let source = self.catalog.get(index).map(|t| t.source.clone());
        let Some(source) = source else {
            return;
        };

        self.token = self.token.next();
        self.engine.load(&source, self.token);
        debug!(index, token = %self.token, play, "loading track");

        self.current = Some(index);
        self.state = TransportState::Loading;
        self.pending_play = play;
        self.intent = if play {
            PlayIntent::Playing
        } else {
            PlayIntent::Paused
        };
        self.duration = None;
        self.progress = 0.0;
        self.last_error = None;

        self.pending_events.push(PlaybackEvent::TrackChanged {
            index,
            previous_index: previous,
        });
        self.emit_state_changed();
        self.sync_display();
    }

    /// Ask the engine to play, translating a rejection into `Failed`
    fn issue_play(&mut self) {
        match self.engine.play() {
            Ok(()) => {
                self.state = TransportState::Playing;
                self.intent = PlayIntent::Playing;
                self.pending_play = false;
                self.emit_state_changed();
                self.sync_display();
            }
            Err(err) => self.fail_current(err.to_string()),
        }
    }

    /// Engine failure for the current source
    ///
    /// Reverts intent to paused and keeps the current index so the user
    /// can retry or navigate away.
    fn fail_current(&mut self, reason: String) {
        warn!(index = ?self.current, %reason, "engine reported playback failure");
        self.state = TransportState::Failed;
        self.intent = PlayIntent::Paused;
        self.pending_play = false;
        self.last_error = Some(reason.clone());
        self.pending_events.push(PlaybackEvent::Error { message: reason });
        self.emit_state_changed();
        self.sync_display();
    }

    fn sync_display(&mut self) {
        let track = self.current.and_then(|i| self.catalog.get(i));
        self.display.publish(
            track,
            self.intent == PlayIntent::Playing,
            self.progress,
            self.volume.is_muted(),
            self.last_error.as_deref(),
        );
    }

    fn emit_state_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::StateChanged {
            state: self.state,
            intent: self.intent,
        });
    }

    fn emit_volume_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::VolumeChanged {
            ratio: self.volume.ratio(),
            is_muted: self.volume.is_muted(),
        });
    }
}

impl std::fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("state", &self.state)
            .field("intent", &self.intent)
            .field("current", &self.current)
            .field("repeat", &self.repeat)
            .field("token", &self.token)
            .field("pending_play", &self.pending_play)
            .finish_non_exhaustive()
    }
}
