//! User configuration stored in ~/.arcade/config.json.

use crate::core::constants::{
    CONFIG_FILENAME, MAX_ROUND_SECONDS, PLAYER_SPEED, ROUND_DURATION_MS, WIN_THRESHOLD,
};
use crate::core::RoundSettings;
use crate::utils::persistence::load_json_or_default;
use serde::{Deserialize, Serialize};

/// Persisted settings. Fields missing from the file keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Length of a round in seconds.
    pub round_seconds: u64,
    /// Score needed for the "win" message on the results overlay.
    pub win_threshold: u32,
    /// Ring the terminal bell for catch/crash sounds.
    pub sound: bool,
    /// Basket speed in px/s.
    pub player_speed: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            round_seconds: ROUND_DURATION_MS / 1000,
            win_threshold: WIN_THRESHOLD,
            sound: true,
            player_speed: PLAYER_SPEED,
        }
    }
}

impl Config {
    /// Load from disk, falling back to defaults if missing or invalid.
    pub fn load() -> Self {
        load_json_or_default(CONFIG_FILENAME)
    }

    /// Per-round settings. Out-of-range values are clamped.
    pub fn round_settings(&self) -> RoundSettings {
        RoundSettings {
            round_ms: self.round_seconds.clamp(1, MAX_ROUND_SECONDS) * 1000,
            win_threshold: self.win_threshold.max(1),
            player_speed: if self.player_speed.is_finite() && self.player_speed > 0.0 {
                self.player_speed
            } else {
                PLAYER_SPEED
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Countdown;

    #[test]
    fn test_default_matches_round_defaults() {
        assert_eq!(Config::default().round_settings(), RoundSettings::default());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{"round_seconds": 45}"#).unwrap();
        assert_eq!(config.round_seconds, 45);
        assert_eq!(config.win_threshold, 10);
        assert!(config.sound);
        assert_eq!(config.round_settings().round_ms, 45_000);
    }

    #[test]
    fn test_degenerate_values_clamped() {
        let config = Config {
            round_seconds: 0,
            win_threshold: 0,
            sound: false,
            player_speed: -5.0,
        };
        let settings = config.round_settings();
        assert_eq!(settings.round_ms, 1000);
        assert_eq!(settings.win_threshold, 1);
        assert_eq!(settings.player_speed, PLAYER_SPEED);
    }

    #[test]
    fn test_huge_round_length_is_capped() {
        let config: Config =
            serde_json::from_str(r#"{"round_seconds": 18446744073709551615}"#).unwrap();
        let settings = config.round_settings();
        assert_eq!(settings.round_ms, MAX_ROUND_SECONDS * 1000);
        assert_eq!(Countdown::new(settings.round_ms).display_seconds(), MAX_ROUND_SECONDS);
    }
}
