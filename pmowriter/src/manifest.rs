//! Track manifest files
//!
//! Each local-songs playlist is materialized as one manifest file in the
//! station's playlists directory, one `annotate:` record per playable
//! track. The engine watches these files, and can additionally be told to
//! re-read one immediately over the control protocol.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use pmoliq::annotate_uri;
use pmostation::{Playlist, Station};

use crate::error::{Error, Result};

/// Write the manifest for a local-songs playlist.
///
/// Returns the manifest path, or `None` when the playlist has no playable
/// tracks; in that case any stale manifest is removed and the caller must
/// not reference the playlist. With `notify_engine`, a running engine is
/// asked to hot-reload the playlist; a reload failure is logged and never
/// propagated.
pub fn write_playlist_manifest(
    station: &Station,
    playlist: &Playlist,
    notify_engine: bool,
) -> Result<Option<PathBuf>> {
    let path = manifest_path(station, playlist);

    let records: Vec<String> = playlist
        .playable_media()
        .map(|media| {
            let mut pairs: Vec<(String, String)> = Vec::new();
            if playlist.is_jingle {
                pairs.push(("jingle_mode".to_string(), "true".to_string()));
            } else {
                pairs.push(("playlist_id".to_string(), playlist.id.to_string()));
            }
            pairs.extend(media.annotations());
            annotate_uri(
                pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
                &media.path,
            )
        })
        .collect();

    if records.is_empty() {
        debug!("Playlist {} has no playable tracks", playlist.name);
        remove_stale(&path);
        return Ok(None);
    }

    write_records(&path, &records)?;

    if notify_engine {
        notify_reload(station, playlist);
    }

    Ok(Some(path))
}

/// Write an intentionally empty manifest.
///
/// Used for the default playlist synthesized when a station has none, so
/// the rotation has a referenceable (if silent) member.
pub fn write_empty_manifest(station: &Station, playlist: &Playlist) -> Result<PathBuf> {
    let path = manifest_path(station, playlist);
    write_records(&path, &[])?;
    Ok(path)
}

/// Remove every manifest from the station's playlists directory.
///
/// Called once at the start of a full configuration write, so manifests of
/// deleted or renamed playlists do not linger.
pub fn clear_manifest_dir(dir: &Path) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        // Nothing to clear; the first write_records creates the directory.
        Err(_) => return Ok(()),
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "m3u") {
            remove_stale(&path);
        }
    }
    Ok(())
}

fn manifest_path(station: &Station, playlist: &Playlist) -> PathBuf {
    station
        .playlists_dir()
        .join(format!("{}.m3u", playlist.variable_name()))
}

fn write_records(path: &Path, records: &[String]) -> Result<()> {
    let io = |source| Error::ManifestWrite {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io)?;
    }
    let mut contents = records.join("\n");
    if !contents.is_empty() {
        contents.push('\n');
    }
    fs::write(path, contents).map_err(io)
}

fn remove_stale(path: &Path) {
    if let Err(err) = fs::remove_file(path) {
        if err.kind() != std::io::ErrorKind::NotFound {
            warn!("Could not remove stale manifest {}: {}", path.display(), err);
        }
    }
}

fn notify_reload(station: &Station, playlist: &Playlist) {
    match pmotelnet::reload_playlist(station, playlist) {
        Ok(_) => debug!("Engine reloaded playlist {}", playlist.variable_name()),
        Err(err) => warn!(
            "Engine reload of {} failed (will pick the file up on restart): {}",
            playlist.variable_name(),
            err
        ),
    }
}
