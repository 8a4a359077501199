//! Playlist entity: ordering, type, source and schedule attributes

use serde::{Deserialize, Serialize};

use crate::media::StationMedia;

/// Track ordering within a playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaylistOrder {
    /// Play tracks in their stored order.
    Sequential,
    /// Reshuffle the whole list on each pass.
    Shuffle,
    /// Pick every track at random.
    Random,
}

/// Mixing behavior bucket of a playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaylistType {
    /// Participates in the station's weighted random rotation.
    Default,
    /// One track out of every N tracks of the main rotation.
    OncePerXSongs,
    /// One track every N minutes, ahead of the main rotation.
    OncePerXMinutes,
    /// Plays at a fixed minute of every hour.
    OncePerHour,
    /// Plays inside a configured time window.
    Scheduled,
    /// Declared in the program but wired up by the operator's custom
    /// configuration.
    Advanced,
}

/// Where a playlist's audio comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaylistSource {
    /// Local tracks, enumerated in a generated manifest file.
    Songs,
    /// A remote live stream, buffered over HTTP(S).
    RemoteStream,
    /// A remote static playlist referenced by URL.
    RemotePlaylist,
}

/// How the engine walks the playlist when it is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackBehavior {
    /// Request-based source feeding the weighted pick.
    Default,
    /// Play the list through exactly once.
    PlayOnce,
    /// Collapse the whole list into a single continuous track.
    Merge,
}

/// An ordered/weighted track collection or remote-stream reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: u32,
    pub name: String,
    pub order: PlaylistOrder,
    #[serde(rename = "type")]
    pub kind: PlaylistType,
    pub source: PlaylistSource,
    pub behavior: PlaybackBehavior,
    /// Relative weight in the station rotation (minimum 1).
    pub weight: u32,
    pub is_enabled: bool,
    /// Jingle playlists play without publishing track metadata.
    pub is_jingle: bool,
    /// Schedule window start, encoded HHMM (e.g. 900 for 09:00).
    pub schedule_start_time: u16,
    /// Schedule window end, encoded HHMM. A value below the start time
    /// wraps past midnight.
    pub schedule_end_time: u16,
    /// Weekday subset, 1 = Monday .. 7 = Sunday. Empty means every day.
    pub schedule_days: Vec<u8>,
    /// Cut into the running track instead of waiting for its end.
    pub interrupt: bool,
    /// N for [`PlaylistType::OncePerXSongs`].
    pub play_per_songs: u32,
    /// N for [`PlaylistType::OncePerXMinutes`].
    pub play_per_minutes: u32,
    /// Minute of the hour for [`PlaylistType::OncePerHour`].
    pub play_per_hour_minute: u8,
    pub remote_url: Option<String>,
    /// Remote stream buffer in seconds; 0 means "use the default".
    pub remote_buffer: u16,
    pub media: Vec<StationMedia>,
}

impl Playlist {
    /// Identifier of this playlist inside the generated program, also the
    /// stem of its manifest file and its telnet reload target.
    ///
    /// Derived from the playlist name; names that collapse to nothing
    /// fall back to the numeric id.
    pub fn variable_name(&self) -> String {
        let mut slug = String::with_capacity(self.name.len());
        for c in self.name.chars() {
            if c.is_ascii_alphanumeric() {
                slug.extend(c.to_lowercase());
            } else if !slug.ends_with('_') {
                slug.push('_');
            }
        }
        let slug = slug.trim_matches('_');
        if slug.is_empty() {
            format!("playlist_{}", self.id)
        } else {
            format!("playlist_{}", slug)
        }
    }

    /// Tracks that may actually be referenced from a manifest.
    pub fn playable_media(&self) -> impl Iterator<Item = &StationMedia> {
        self.media.iter().filter(|m| m.is_playable)
    }
}
