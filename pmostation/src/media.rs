//! Media items and their manifest annotations

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One track owned by the station library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationMedia {
    pub id: u32,
    /// Stable identifier of the underlying song, reported back through the
    /// metadata feedback callback.
    pub song_id: String,
    pub artist: String,
    pub title: String,
    pub album: String,
    /// Absolute path of the audio file on the engine host.
    pub path: PathBuf,
    /// Per-track amplification in dB, applied by the post-processing
    /// chain's amplify override.
    pub amplify: Option<f64>,
    /// Additional annotation key/values. Kept sorted so generated
    /// manifests are deterministic.
    pub extra_annotations: BTreeMap<String, String>,
    /// Unplayable tracks (missing file, failed analysis) are skipped when
    /// manifests are written.
    pub is_playable: bool,
}

impl StationMedia {
    /// Annotation pairs describing this track, in emission order.
    ///
    /// These are shared between manifest records and telnet request
    /// pushes; the caller prepends any playlist-level pairs.
    pub fn annotations(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("song_id".to_string(), self.song_id.clone()),
            ("media_id".to_string(), self.id.to_string()),
            ("artist".to_string(), self.artist.clone()),
            ("title".to_string(), self.title.clone()),
            ("album".to_string(), self.album.clone()),
        ];
        if let Some(db) = self.amplify {
            pairs.push(("liq_amplify".to_string(), format!("{}dB", db)));
        }
        for (key, value) in &self.extra_annotations {
            pairs.push((key.clone(), value.clone()));
        }
        pairs
    }
}
