//! Output targets: local mounts and remote relays

use serde::{Deserialize, Serialize};

/// Encoded stream format of an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamFormat {
    Mp3,
    Aac,
    Ogg,
    Opus,
}

/// A mount on the station's own frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationMount {
    /// Mount path, e.g. `/radio.mp3`.
    pub name: String,
    pub is_enabled: bool,
    pub format: StreamFormat,
    /// Bitrate in kbps.
    pub bitrate: u32,
    /// Whether the mount is announced in public directories.
    pub is_public: bool,
}

/// An outbound stream to a remote server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteRelay {
    pub is_enabled: bool,
    pub format: StreamFormat,
    /// Bitrate in kbps.
    pub bitrate: u32,
    pub host: String,
    pub port: u16,
    /// Source username; `source` is assumed when absent.
    pub username: Option<String>,
    pub password: String,
    /// Mount path on the remote server. Legacy Shoutcast targets have
    /// none.
    pub mount: Option<String>,
    pub is_public: bool,
    /// Use the legacy ICY handshake (Shoutcast v1) instead of HTTP PUT.
    pub legacy_icy: bool,
}
