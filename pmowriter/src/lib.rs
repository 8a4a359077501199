//! Liquidsoap program synthesis
//!
//! Turns a [`pmostation::Station`] snapshot into the textual program the
//! audio engine runs: daemon settings, the playlist scheduling graph, the
//! live harbor, the post-processing chain, the metadata feedback hook and
//! every local/remote output.
//!
//! The entry point is [`ConfigWriter::write`], which runs the seven
//! section writers in their fixed priority order over one shared program
//! buffer and persists the result to the station's configuration path.
//! The whole file is regenerated on every write; it is never patched.
//!
//! # Example
//!
//! ```no_run
//! # use pmowriter::ConfigWriter;
//! # async fn example(
//! #     station: pmostation::Station,
//! #     repository: impl pmostation::StationRepository,
//! # ) -> pmowriter::Result<()> {
//! let writer = ConfigWriter::new();
//! writer.write(&station, &repository).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod manifest;
pub mod writer;

mod custom;
mod feedback;
mod harbor;
mod header;
mod outputs;
mod schedule;

pub use error::{Error, Result};
pub use writer::ConfigWriter;

/// Name of the main pipeline variable threaded through the sections.
pub(crate) const RADIO_VAR: &str = "radio";
