//! Game settings
//!
//! Supplied by the host page as JSON (the canvas `data-settings` attribute).
//! Nothing is written back.

use serde::{Deserialize, Serialize};

use crate::consts::{INPUT_INTERVAL_MS, PEW_POOL_SIZE, PEW_VOLUME};

/// Runtime settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Pew volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Skip all sound playback
    pub muted: bool,
    /// Number of pre-allocated pew sounds for overlapping shots
    pub pew_pool_size: usize,

    // === Visual Effects ===
    /// Draw explosion particles (they are still simulated)
    pub particles: bool,

    // === Timing ===
    /// Input sampling interval in milliseconds
    pub input_interval_ms: u32,

    /// Fixed RNG seed (clock-derived when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sfx_volume: PEW_VOLUME,
            muted: false,
            pew_pool_size: PEW_POOL_SIZE,
            particles: true,
            input_interval_ms: INPUT_INTERVAL_MS,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse host-supplied JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => {
                log::info!("Loaded settings from host");
                settings.sanitized()
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Clamp values into their usable ranges
    pub fn sanitized(mut self) -> Self {
        self.sfx_volume = if self.sfx_volume.is_finite() {
            self.sfx_volume.clamp(0.0, 1.0)
        } else {
            PEW_VOLUME
        };
        self.pew_pool_size = self.pew_pool_size.clamp(1, 32);
        self.input_interval_ms = self.input_interval_ms.clamp(1, 1000);
        self
    }

    /// Volume actually applied to playback
    pub fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.sfx_volume }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.sfx_volume, 0.5);
        assert_eq!(s.pew_pool_size, 5);
        assert_eq!(s.input_interval_ms, 16);
        assert!(s.particles);
        assert_eq!(s.seed, None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = Settings::from_json(r#"{"muted": true, "seed": 42}"#);
        assert!(s.muted);
        assert_eq!(s.seed, Some(42));
        assert_eq!(s.pew_pool_size, 5);
        assert_eq!(s.effective_volume(), 0.0);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert_eq!(Settings::from_json("{not json"), Settings::default());
    }

    #[test]
    fn test_values_are_clamped() {
        let s = Settings::from_json(r#"{"sfx_volume": 4.0, "pew_pool_size": 0, "input_interval_ms": 0}"#);
        assert_eq!(s.sfx_volume, 1.0);
        assert_eq!(s.pew_pool_size, 1);
        assert_eq!(s.input_interval_ms, 1);
    }
}
