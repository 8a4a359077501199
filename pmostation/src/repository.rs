//! Persistence seam towards the host application

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::playlist::Playlist;
use crate::station::Station;
use crate::streamer::Streamer;

/// The few writes the synthesizer pushes back to the entity store.
///
/// Everything else is read-only: stations arrive fully materialized and
/// are never mutated here. Implementations return `anyhow::Result` so they
/// are free to surface whatever error type their storage produces.
#[async_trait]
pub trait StationRepository: Send + Sync {
    /// Persist and return a new, empty, enabled default playlist for the
    /// station.
    ///
    /// Called when a configuration write finds no enabled default
    /// playlist, so the station rotation is never empty.
    async fn create_default_playlist(&self, station: &Station) -> anyhow::Result<Playlist>;

    /// Record that a streamer was forcibly disconnected and may not
    /// reconnect before `until`.
    async fn deactivate_streamer(
        &self,
        station: &Station,
        streamer: &Streamer,
        until: DateTime<Utc>,
    ) -> anyhow::Result<()>;
}
