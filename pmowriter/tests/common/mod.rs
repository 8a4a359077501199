//! Shared fixtures for the synthesis tests
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use pmostation::{
    Playlist, PlaybackBehavior, PlaylistOrder, PlaylistSource, PlaylistType, RemoteRelay, Station,
    StationMedia, StationMount, StationRepository, StreamFormat, Streamer,
};

pub fn station(dir: &Path) -> Station {
    Station {
        id: 1,
        name: "Test Radio".to_string(),
        description: "A test station".to_string(),
        genre: "Various".to_string(),
        url: "http://example.com".to_string(),
        timezone: "UTC".to_string(),
        source_password: "hackme".to_string(),
        enable_streamers: false,
        current_streamer: None,
        disconnect_deactivate_streamer_secs: 0,
        frontend_config: serde_json::json!({}),
        backend_config: serde_json::json!({}),
        internal_api_base: "http://127.0.0.1/api/internal".to_string(),
        api_key: "testkey".to_string(),
        base_dir: dir.to_path_buf(),
        playlists: vec![],
        mounts: vec![],
        relays: vec![],
    }
}

pub fn playlist(id: u32, name: &str) -> Playlist {
    Playlist {
        id,
        name: name.to_string(),
        order: PlaylistOrder::Shuffle,
        kind: PlaylistType::Default,
        source: PlaylistSource::Songs,
        behavior: PlaybackBehavior::Default,
        weight: 3,
        is_enabled: true,
        is_jingle: false,
        schedule_start_time: 0,
        schedule_end_time: 0,
        schedule_days: vec![],
        interrupt: false,
        play_per_songs: 0,
        play_per_minutes: 0,
        play_per_hour_minute: 0,
        remote_url: None,
        remote_buffer: 0,
        media: vec![],
    }
}

pub fn media(id: u32, song_id: &str, artist: &str, title: &str, path: &str) -> StationMedia {
    StationMedia {
        id,
        song_id: song_id.to_string(),
        artist: artist.to_string(),
        title: title.to_string(),
        album: "Album".to_string(),
        path: PathBuf::from(path),
        amplify: None,
        extra_annotations: BTreeMap::new(),
        is_playable: true,
    }
}

pub fn mount(name: &str, format: StreamFormat, bitrate: u32) -> StationMount {
    StationMount {
        name: name.to_string(),
        is_enabled: true,
        format,
        bitrate,
        is_public: true,
    }
}

pub fn relay(host: &str, legacy_icy: bool) -> RemoteRelay {
    RemoteRelay {
        is_enabled: true,
        format: StreamFormat::Mp3,
        bitrate: 128,
        host: host.to_string(),
        port: 8000,
        username: None,
        password: "relaypass".to_string(),
        mount: Some("/stream".to_string()),
        is_public: false,
        legacy_icy,
    }
}

/// Repository recording the playlists it was asked to create.
pub struct MockRepository {
    pub created: Mutex<Vec<Playlist>>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self {
            created: Mutex::new(vec![]),
        }
    }
}

#[async_trait]
impl StationRepository for MockRepository {
    async fn create_default_playlist(&self, _station: &Station) -> anyhow::Result<Playlist> {
        let created = playlist(9000, "default");
        self.created.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn deactivate_streamer(
        &self,
        _station: &Station,
        _streamer: &Streamer,
        _until: DateTime<Utc>,
    ) -> anyhow::Result<()> {
        Ok(())
    }
}
