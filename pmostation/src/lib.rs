//! Entity model for broadcast stations
//!
//! This crate holds the read-only inputs of the program synthesizer: the
//! station itself, its playlists and media, its output targets (local
//! mounts and remote relays) and the currently connected streamer, plus the
//! typed view over the station's backend/frontend settings blobs.
//!
//! Persistence belongs to the host application; the synthesizer only pulls
//! state through these types and pushes the few writes it needs (creating
//! a default playlist, recording a streamer deactivation window) through
//! the [`StationRepository`] trait.

pub mod media;
pub mod mount;
pub mod playlist;
pub mod repository;
pub mod settings;
pub mod station;
pub mod streamer;

pub use media::StationMedia;
pub use mount::{RemoteRelay, StationMount, StreamFormat};
pub use playlist::{Playlist, PlaybackBehavior, PlaylistOrder, PlaylistSource, PlaylistType};
pub use repository::StationRepository;
pub use settings::{BackendSettings, CrossfadeMode, FrontendSettings};
pub use station::Station;
pub use streamer::Streamer;
