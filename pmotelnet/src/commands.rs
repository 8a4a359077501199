//! Derived runtime commands

use chrono::Utc;
use tracing::{debug, info};

use pmoliq::annotate_uri;
use pmostation::{Playlist, Station, StationMedia, StationRepository};

use crate::client::command;
use crate::error::{Error, Result};

/// Identifier of the harbor input inside the generated program. The
/// disconnect command targets it by name.
pub const HARBOR_INPUT_ID: &str = "dj_harbor";

/// Lines the protocol emits around actual payload; a queue containing
/// only these is empty.
const PROTOCOL_LINES: [&str; 2] = ["END", "Bye!"];

/// Skip the track currently playing on the scheduled pipeline.
pub fn skip(station: &Station) -> Result<Vec<String>> {
    command(station, "radio.skip")
}

/// Peek the manual request queue.
pub fn queue(station: &Station) -> Result<Vec<String>> {
    command(station, "requests.queue")
}

/// Enqueue a manual track request.
///
/// Rejected with [`Error::QueueConflict`] when a request is already
/// pending. The check is peek-then-push, not atomic: two concurrent
/// callers can both pass the peek and both enqueue. The engine exposes no
/// check-and-set, so this stays best-effort.
pub fn request(station: &Station, media: &StationMedia) -> Result<Vec<String>> {
    let pending = queue(station)?;
    if has_payload(&pending) {
        debug!("Rejecting request push, queue is not empty");
        return Err(Error::QueueConflict);
    }

    let annotations = media.annotations();
    let uri = annotate_uri(
        annotations.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        &media.path,
    );
    command(station, &format!("requests.push {}", uri))
}

/// Disconnect the live source currently connected to the harbor.
///
/// When the station has a current streamer and a positive deactivation
/// policy, a deactivation window is recorded through the repository so
/// the streamer cannot immediately reconnect.
pub async fn disconnect_streamer(
    station: &Station,
    repository: &dyn StationRepository,
) -> Result<Vec<String>> {
    let response = command(station, &format!("{}.stop", HARBOR_INPUT_ID))?;

    if let Some(streamer) = &station.current_streamer {
        let seconds = station.disconnect_deactivate_streamer_secs;
        if seconds > 0 {
            let until = Utc::now() + chrono::Duration::seconds(i64::from(seconds));
            info!(
                "Deactivating streamer {} until {}",
                streamer.username, until
            );
            repository.deactivate_streamer(station, streamer, until).await?;
        }
    }

    Ok(response)
}

/// Ask the engine to re-read a playlist manifest from disk.
pub fn reload_playlist(station: &Station, playlist: &Playlist) -> Result<Vec<String>> {
    command(station, &format!("{}.reload", playlist.variable_name()))
}

fn has_payload(lines: &[String]) -> bool {
    lines
        .iter()
        .any(|line| !line.is_empty() && !PROTOCOL_LINES.contains(&line.as_str()))
}
