//! Typed views over the station's settings blobs
//!
//! Stations carry their feature configuration as free-form JSON. These
//! structs decode the keys the synthesizer cares about and fall back to
//! defaults for anything missing or malformed, so an old or partial blob
//! never blocks a configuration write.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Crossfade algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossfadeMode {
    /// Constant fade between consecutive tracks.
    Normal,
    /// Loudness-aware fade.
    Smart,
    /// No crossfade lines are emitted.
    Disabled,
}

/// Frontend settings relevant to port derivation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendSettings {
    /// Explicit public stream port, overriding the ordinal-based default.
    pub port: Option<u16>,
}

impl FrontendSettings {
    pub fn from_value(value: &serde_json::Value) -> Self {
        decode("frontend", value)
    }
}

/// Backend settings driving the generated program.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    /// Character set announced to the frontend and used for harbor
    /// metadata.
    pub charset: String,
    /// Explicit harbor (DJ) port override.
    pub dj_port: Option<u16>,
    /// Explicit control (telnet) port override.
    pub telnet_port: Option<u16>,
    /// Mount point DJs connect to on the harbor.
    pub dj_mount_point: String,
    /// Harbor input buffer in seconds.
    pub dj_buffer: f64,
    pub crossfade_type: CrossfadeMode,
    /// Crossfade duration in seconds; 0 disables crossfading regardless of
    /// the selected mode.
    pub crossfade: f64,
    /// Enable loudness normalization and compression.
    pub audio_processing: bool,
    /// Honor ReplayGain metadata carried by tracks.
    pub enable_replaygain: bool,
    /// Free-form liquidsoap code appended verbatim after the built-in
    /// post-processing chain. Operator-supplied and trusted.
    pub custom_config: Option<String>,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            charset: "UTF-8".to_string(),
            dj_port: None,
            telnet_port: None,
            dj_mount_point: "/".to_string(),
            dj_buffer: 5.0,
            crossfade_type: CrossfadeMode::Normal,
            crossfade: 2.0,
            audio_processing: false,
            enable_replaygain: false,
            custom_config: None,
        }
    }
}

impl BackendSettings {
    pub fn from_value(value: &serde_json::Value) -> Self {
        decode("backend", value)
    }

    /// Effective crossfade duration, or `None` when crossfading is off.
    pub fn crossfade_duration(&self) -> Option<f64> {
        if self.crossfade_type == CrossfadeMode::Disabled || self.crossfade <= 0.0 {
            None
        } else {
            Some(self.crossfade)
        }
    }
}

fn decode<T: Default + for<'de> Deserialize<'de>>(which: &str, value: &serde_json::Value) -> T {
    match serde_json::from_value(value.clone()) {
        Ok(settings) => settings,
        Err(err) => {
            warn!("Invalid {} settings blob, using defaults: {}", which, err);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_defaults() {
        let settings = BackendSettings::from_value(&serde_json::json!({}));
        assert_eq!(settings.charset, "UTF-8");
        assert_eq!(settings.dj_mount_point, "/");
        assert_eq!(settings.crossfade_type, CrossfadeMode::Normal);
        assert_eq!(settings.crossfade_duration(), Some(2.0));
    }

    #[test]
    fn test_crossfade_disabled() {
        let settings = BackendSettings::from_value(&serde_json::json!({
            "crossfade_type": "disabled",
            "crossfade": 4.0,
        }));
        assert_eq!(settings.crossfade_duration(), None);

        let settings = BackendSettings::from_value(&serde_json::json!({
            "crossfade_type": "smart",
            "crossfade": 0.0,
        }));
        assert_eq!(settings.crossfade_duration(), None);
    }

    #[test]
    fn test_malformed_blob_falls_back() {
        let settings = BackendSettings::from_value(&serde_json::json!({
            "dj_buffer": "not a number",
        }));
        assert_eq!(settings.dj_buffer, 5.0);
    }
}
