//! Control protocol client for the running liquidsoap engine
//!
//! The engine serves a line-oriented command protocol on the station's
//! control port. Every call opens its own socket, sends one command plus a
//! `quit` terminator, and collects response lines until the peer closes
//! the connection. Sessions are single-use; there is no connection pool
//! and no retry, callers decide their own retry policy.
//!
//! Besides the raw [`command`] entry point, this crate exposes the derived
//! operations the host application needs at runtime: skip the current
//! track, enqueue a manual request, peek the request queue, disconnect a
//! live streamer and hot-reload a playlist manifest.

pub mod client;
pub mod commands;
pub mod error;

pub use client::{command, COMMAND_TIMEOUT};
pub use commands::{
    disconnect_streamer, queue, reload_playlist, request, skip, HARBOR_INPUT_ID,
};
pub use error::{Error, Result};
