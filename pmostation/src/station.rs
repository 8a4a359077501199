//! The station entity and its derived paths and ports

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::mount::{RemoteRelay, StationMount};
use crate::playlist::Playlist;
use crate::settings::{BackendSettings, FrontendSettings};
use crate::streamer::Streamer;

/// One configured broadcast unit owning playlists, outputs and scheduling
/// rules.
///
/// A `Station` is a snapshot pulled from the host application's storage;
/// the synthesizer never mutates it. The `frontend_config` and
/// `backend_config` blobs are stored as raw JSON and decoded on demand via
/// [`Station::frontend_settings`] and [`Station::backend_settings`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    /// Ordinal identifier, also the basis of the default port layout.
    pub id: u32,
    pub name: String,
    pub description: String,
    pub genre: String,
    pub url: String,
    /// IANA timezone name, exported as `TZ` to the running engine.
    pub timezone: String,
    /// Password the generated outputs use against the local frontend.
    pub source_password: String,
    /// Whether live streamers/DJs may connect to this station.
    pub enable_streamers: bool,
    /// The streamer currently on air, if any.
    pub current_streamer: Option<Streamer>,
    /// After a forced disconnect, deactivate the current streamer for this
    /// many seconds (0 disables the policy).
    pub disconnect_deactivate_streamer_secs: u32,
    pub frontend_config: serde_json::Value,
    pub backend_config: serde_json::Value,
    /// Base URL of the internal API called back from the generated program
    /// (auth/djon/djoff/feedback endpoints).
    pub internal_api_base: String,
    /// Credential appended to every internal API callback.
    pub api_key: String,
    /// Per-station directory holding the generated program, playlist
    /// manifests and the failure-safety track.
    pub base_dir: PathBuf,
    pub playlists: Vec<Playlist>,
    pub mounts: Vec<StationMount>,
    pub relays: Vec<RemoteRelay>,
}

impl Station {
    /// Decoded view over `frontend_config`.
    pub fn frontend_settings(&self) -> FrontendSettings {
        FrontendSettings::from_value(&self.frontend_config)
    }

    /// Decoded view over `backend_config`.
    pub fn backend_settings(&self) -> BackendSettings {
        BackendSettings::from_value(&self.backend_config)
    }

    /// Public stream port: explicit frontend override, else
    /// `8000 + (id - 1) * 10`.
    pub fn stream_port(&self) -> u16 {
        if let Some(port) = self.frontend_settings().port {
            return port;
        }
        8000 + (self.id.saturating_sub(1) as u16) * 10
    }

    /// Control (telnet) port: explicit backend override, else one below
    /// the stream port.
    pub fn telnet_port(&self) -> u16 {
        if let Some(port) = self.backend_settings().telnet_port {
            return port;
        }
        self.stream_port().saturating_sub(1)
    }

    /// Harbor (DJ) port: explicit backend override, else five above the
    /// stream port.
    pub fn harbor_port(&self) -> u16 {
        if let Some(port) = self.backend_settings().dj_port {
            return port;
        }
        self.stream_port().saturating_add(5)
    }

    /// Path the generated liquidsoap program is written to, and that the
    /// engine reads at start/reload.
    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join("liquidsoap.liq")
    }

    /// Directory holding the per-playlist track manifests.
    pub fn playlists_dir(&self) -> PathBuf {
        self.base_dir.join("playlists")
    }

    /// Static track played by the failure-safety fallback when everything
    /// upstream is silent.
    pub fn error_track_path(&self) -> PathBuf {
        self.base_dir.join("error.mp3")
    }

    /// URL of one of the internal callback endpoints
    /// (`auth`, `djon`, `djoff`, `feedback`) for this station.
    pub fn internal_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}/{}",
            self.internal_api_base.trim_end_matches('/'),
            self.id,
            endpoint
        )
    }
}
