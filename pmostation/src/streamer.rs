//! Live streamer (DJ) accounts

use serde::{Deserialize, Serialize};

/// A broadcaster account allowed to connect to the station harbor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Streamer {
    pub id: u32,
    pub username: String,
    pub display_name: String,
}
