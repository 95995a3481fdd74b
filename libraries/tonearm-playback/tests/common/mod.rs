//! Shared test helpers: a recording engine mock and catalog builders

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tonearm_core::{TrackCatalog, TrackDescriptor};
use tonearm_playback::{PlaybackError, PlaybackPrimitive, RequestToken, Result};

/// One call the controller made against the engine
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Load { locator: String, token: RequestToken },
    Play,
    Pause,
    Seek(Duration),
    SetVolume(f32),
    SetMuted(bool),
    SetLooping(bool),
}

/// Shared handle onto the engine's call log
#[derive(Clone)]
pub struct EngineLog(Arc<Mutex<Vec<EngineCall>>>);

impl EngineLog {
    pub fn calls(&self) -> Vec<EngineCall> {
        self.0.lock().unwrap().clone()
    }

    /// Token of the most recent load, i.e. the one the controller expects
    /// the ready callback to echo
    pub fn last_load_token(&self) -> Option<RequestToken> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|call| match call {
                EngineCall::Load { token, .. } => Some(*token),
                _ => None,
            })
    }

    pub fn last_load_locator(&self) -> Option<String> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|call| match call {
                EngineCall::Load { locator, .. } => Some(locator.clone()),
                _ => None,
            })
    }

    pub fn play_count(&self) -> usize {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|call| matches!(call, EngineCall::Play))
            .count()
    }

    pub fn volumes_seen(&self) -> Vec<f32> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter_map(|call| match call {
                EngineCall::SetVolume(ratio) => Some(*ratio),
                _ => None,
            })
            .collect()
    }

    /// Most recent native-loop flag the engine was given
    pub fn last_looping(&self) -> Option<bool> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|call| match call {
                EngineCall::SetLooping(looping) => Some(*looping),
                _ => None,
            })
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

/// Engine mock recording every call the controller issues
pub struct RecordingEngine {
    log: Arc<Mutex<Vec<EngineCall>>>,
    fail_play: bool,
}

impl RecordingEngine {
    pub fn new() -> (Box<Self>, EngineLog) {
        Self::with_failing_play(false)
    }

    /// Engine whose `play()` is rejected, as when a load is incomplete or
    /// the source cannot be decoded
    pub fn with_failing_play(fail_play: bool) -> (Box<Self>, EngineLog) {
        let log = Arc::new(Mutex::new(Vec::new()));
        (
            Box::new(Self {
                log: Arc::clone(&log),
                fail_play,
            }),
            EngineLog(log),
        )
    }

    fn record(&self, call: EngineCall) {
        self.log.lock().unwrap().push(call);
    }
}

impl PlaybackPrimitive for RecordingEngine {
    fn load(&mut self, locator: &str, token: RequestToken) {
        self.record(EngineCall::Load {
            locator: locator.to_string(),
            token,
        });
    }

    fn play(&mut self) -> Result<()> {
        self.record(EngineCall::Play);
        if self.fail_play {
            Err(PlaybackError::LoadFailed("decode failed".to_string()))
        } else {
            Ok(())
        }
    }

    fn pause(&mut self) {
        self.record(EngineCall::Pause);
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        self.record(EngineCall::Seek(position));
        Ok(())
    }

    fn set_volume(&mut self, ratio: f32) {
        self.record(EngineCall::SetVolume(ratio));
    }

    fn set_muted(&mut self, muted: bool) {
        self.record(EngineCall::SetMuted(muted));
    }

    fn set_looping(&mut self, looping: bool) {
        self.record(EngineCall::SetLooping(looping));
    }
}

/// Catalog of `count` tracks named "Track {i}" with sources "/music/{i}.mp3"
pub fn create_catalog(count: usize) -> TrackCatalog {
    (0..count)
        .map(|i| {
            TrackDescriptor::new(
                format!("/music/{i}.mp3"),
                format!("Track {i}"),
                format!("Artist {i}"),
            )
        })
        .collect()
}
