//! Volume and mute state
//!
//! Volume is a ratio in `[0.0, 1.0]`. Out-of-range input is clamped, never
//! rejected. Muting preserves the level so unmute restores it.

/// Volume controller
#[derive(Debug, Clone, Copy)]
pub struct Volume {
    /// Volume ratio (0.0 - 1.0)
    ratio: f32,

    /// Mute state (preserves the ratio)
    muted: bool,
}

impl Volume {
    /// Create a new volume controller
    ///
    /// # Arguments
    /// * `ratio` - Initial volume, clamped into `[0.0, 1.0]`
    pub fn new(ratio: f32) -> Self {
        Self {
            ratio: Self::clamp(ratio),
            muted: false,
        }
    }

    /// Set the volume ratio, clamping into `[0.0, 1.0]`
    ///
    /// Returns the clamped value that should be applied to the engine.
    pub fn set_ratio(&mut self, ratio: f32) -> f32 {
        self.ratio = Self::clamp(ratio);
        self.ratio
    }

    /// Get the current volume ratio
    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    /// Toggle mute state, returning the new flag
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    fn clamp(ratio: f32) -> f32 {
        if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(1.0)
    }
}
