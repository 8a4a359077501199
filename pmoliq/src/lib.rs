//! Liquidsoap program model
//!
//! Building blocks for emitting a liquidsoap program as text: an ordered
//! [`Program`] buffer, a small [`Term`] expression builder with a single
//! serializer, the [`sanitize`] injection boundary applied to every
//! user-supplied string, the `annotate:` URI grammar shared by manifests
//! and request pushes, and the time-predicate syntax used by scheduled
//! playback.
//!
//! Nothing in this crate knows about stations or playlists; it only knows
//! how liquidsoap text is shaped.

pub mod annotate;
pub mod error;
pub mod program;
pub mod sanitize;
pub mod term;
pub mod time;

pub use annotate::annotate_uri;
pub use error::{Error, Result};
pub use program::Program;
pub use sanitize::sanitize;
pub use term::{Arg, Term};
