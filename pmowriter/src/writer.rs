//! The configuration assembler

use std::fs;
use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, info};

use pmoliq::Program;
use pmostation::{Station, StationRepository};

use crate::custom::CustomWriter;
use crate::error::{Error, Result};
use crate::feedback::FeedbackWriter;
use crate::harbor::HarborWriter;
use crate::header::HeaderWriter;
use crate::outputs::{LocalOutputsWriter, RemoteOutputsWriter};
use crate::schedule::SchedulingWriter;

/// One section of the generated program.
///
/// Writers only append to the buffer (the header additionally prepends its
/// warning banner) and never reorder another writer's output.
#[async_trait]
pub(crate) trait SectionWriter: Send + Sync {
    fn name(&self) -> &'static str;
    fn priority(&self) -> u8;
    async fn write(
        &self,
        station: &Station,
        repository: &dyn StationRepository,
        program: &mut Program,
    ) -> Result<()>;
}

/// Assembles and persists a station's liquidsoap program.
///
/// The writer set is closed and known ahead of time, so it is held as a
/// statically ordered list instead of a dynamic hook registry.
pub struct ConfigWriter {
    writers: Vec<Box<dyn SectionWriter>>,
}

impl ConfigWriter {
    pub fn new() -> Self {
        let mut writers: Vec<Box<dyn SectionWriter>> = vec![
            Box::new(HeaderWriter),
            Box::new(SchedulingWriter),
            Box::new(HarborWriter),
            Box::new(CustomWriter),
            Box::new(FeedbackWriter),
            Box::new(LocalOutputsWriter),
            Box::new(RemoteOutputsWriter),
        ];
        writers.sort_by(|a, b| b.priority().cmp(&a.priority()));
        Self { writers }
    }

    /// Regenerate the station's program and write it whole-file to the
    /// configuration path. Fails only when persistence fails; synthesis
    /// itself has no retry.
    pub async fn write(
        &self,
        station: &Station,
        repository: &dyn StationRepository,
    ) -> Result<()> {
        info!("Writing liquidsoap program for station {}", station.id);

        let mut program = Program::new();
        for writer in &self.writers {
            debug!("Section writer: {}", writer.name());
            program.section(writer.name());
            writer.write(station, repository, &mut program).await?;
        }

        let path = station.config_path();
        persist(&path, &program.serialize()).map_err(|source| Error::ConfigWrite {
            path: path.clone(),
            source,
        })?;

        info!("Wrote {}", path.display());
        Ok(())
    }
}

impl Default for ConfigWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Whole-file replacement through a sibling temp file. The engine only
/// reads the file at start/reload, so the rename mostly guards against a
/// crash mid-write.
fn persist(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("liq.tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}
