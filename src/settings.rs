//! Match settings
//!
//! Loaded from a JSON file on native; anything missing falls back to defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Match length presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MatchPreset {
    Quick,
    #[default]
    Standard,
    Marathon,
}

impl MatchPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchPreset::Quick => "Quick",
            MatchPreset::Standard => "Standard",
            MatchPreset::Marathon => "Marathon",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "quick" => Some(MatchPreset::Quick),
            "standard" | "std" => Some(MatchPreset::Standard),
            "marathon" => Some(MatchPreset::Marathon),
            _ => None,
        }
    }

    /// Rounds per match, Bonus included
    pub fn total_rounds(&self) -> u32 {
        match self {
            MatchPreset::Quick => 5,
            MatchPreset::Standard => TOTAL_ROUNDS,
            MatchPreset::Marathon => 21,
        }
    }

    /// Minigame duration (ms)
    pub fn attention_span_ms(&self) -> f64 {
        match self {
            MatchPreset::Quick => 15_000.0,
            MatchPreset::Standard => ATTENTION_SPAN_MS,
            MatchPreset::Marathon => 40_000.0,
        }
    }
}

/// Match configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub preset: MatchPreset,

    // === Rounds ===
    /// Minigame duration before forced rotation (ms)
    pub attention_span_ms: f64,
    /// Rounds per match; the last one is Bonus
    pub total_rounds: u32,
    /// Delay between whistle and minigame cue (ms)
    pub cue_delay_ms: f64,

    // === Flag ===
    /// Seconds between flag point grants
    pub flag_points_per_second: f64,
    /// Time after last being held before a flag can be picked up (ms)
    pub flag_pickup_cooldown_ms: f64,

    // === Simulation ===
    /// Physics step rate; the flag grant is 1 / step_rate_hz
    pub step_rate_hz: f64,
    /// Minigame RNG seed (entropy when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preset: MatchPreset::Standard,

            attention_span_ms: ATTENTION_SPAN_MS,
            total_rounds: TOTAL_ROUNDS,
            cue_delay_ms: CUE_DELAY_MS,

            flag_points_per_second: FLAG_POINTS_PER_SECOND,
            flag_pickup_cooldown_ms: FLAG_PICKUP_COOLDOWN_MS,

            step_rate_hz: NOMINAL_STEP_RATE_HZ,
            seed: None,
        }
    }
}

impl Settings {
    /// Create settings from a preset (applies preset defaults)
    pub fn from_preset(preset: MatchPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a preset (updates round count and duration)
    pub fn apply_preset(&mut self, preset: MatchPreset) {
        self.preset = preset;
        self.total_rounds = preset.total_rounds();
        self.attention_span_ms = preset.attention_span_ms();
    }

    /// Points granted per flag trickle at the configured step rate
    pub fn flag_point_value(&self) -> f64 {
        1.0 / self.step_rate_hz
    }

    /// Clamp values the session cannot run with
    pub fn sanitized(mut self) -> Self {
        if self.total_rounds == 0 {
            log::warn!("total_rounds must be at least 1, using 1");
            self.total_rounds = 1;
        }
        if !(self.step_rate_hz > 0.0) {
            log::warn!(
                "step_rate_hz must be positive, using {}",
                NOMINAL_STEP_RATE_HZ
            );
            self.step_rate_hz = NOMINAL_STEP_RATE_HZ;
        }
        if !(self.attention_span_ms.is_finite() && self.attention_span_ms > 0.0) {
            log::warn!(
                "attention_span_ms must be positive, using {}",
                ATTENTION_SPAN_MS
            );
            self.attention_span_ms = ATTENTION_SPAN_MS;
        }
        self
    }

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Load settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Invalid settings in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load(_path: &std::path::Path) -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let s = Settings::default();
        assert_eq!(s.total_rounds, 11);
        assert_eq!(s.attention_span_ms, 25_000.0);
        assert_eq!(s.flag_pickup_cooldown_ms, 300.0);
        assert!((s.flag_point_value() - 1.0 / 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{ "total_rounds": 3, "seed": 7 }"#).unwrap();
        assert_eq!(s.total_rounds, 3);
        assert_eq!(s.seed, Some(7));
        assert_eq!(s.attention_span_ms, ATTENTION_SPAN_MS);
    }

    #[test]
    fn test_sanitize() {
        let s = Settings::from_json(r#"{ "total_rounds": 0, "step_rate_hz": 0.0 }"#).unwrap();
        assert_eq!(s.total_rounds, 1);
        assert_eq!(s.step_rate_hz, NOMINAL_STEP_RATE_HZ);
    }

    #[test]
    fn test_sanitize_attention_span() {
        let s = Settings::from_json(r#"{ "attention_span_ms": -5.0 }"#).unwrap();
        assert_eq!(s.attention_span_ms, ATTENTION_SPAN_MS);

        let s = Settings {
            attention_span_ms: f64::NAN,
            ..Settings::default()
        }
        .sanitized();
        assert_eq!(s.attention_span_ms, ATTENTION_SPAN_MS);

        let s = Settings::from_json(r#"{ "attention_span_ms": 1000.0 }"#).unwrap();
        assert_eq!(s.attention_span_ms, 1000.0);
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(Settings::from_json("{ total_rounds: }").is_err());
    }

    #[test]
    fn test_presets() {
        assert_eq!(MatchPreset::from_str("QUICK"), Some(MatchPreset::Quick));
        assert_eq!(MatchPreset::from_str("nope"), None);
        let s = Settings::from_preset(MatchPreset::Quick);
        assert_eq!(s.total_rounds, 5);
        assert_eq!(s.preset.as_str(), "Quick");
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let s = Settings::load(std::path::Path::new("/definitely/not/here.json"));
        assert_eq!(s, Settings::default());
    }
}
