//! Local and remote outputs with their encoder blocks

use async_trait::async_trait;
use tracing::debug;

use pmoliq::{Arg, Program, Term};
use pmostation::{Station, StationRepository, StreamFormat};

use crate::error::Result;
use crate::writer::SectionWriter;
use crate::RADIO_VAR;

pub(crate) struct LocalOutputsWriter;
pub(crate) struct RemoteOutputsWriter;

#[async_trait]
impl SectionWriter for LocalOutputsWriter {
    fn name(&self) -> &'static str {
        "Local Broadcasts"
    }

    fn priority(&self) -> u8 {
        5
    }

    async fn write(
        &self,
        station: &Station,
        _repository: &dyn StationRepository,
        program: &mut Program,
    ) -> Result<()> {
        let charset = station.backend_settings().charset;
        for (i, mount) in station.mounts.iter().filter(|m| m.is_enabled).enumerate() {
            let mut args = vec![
                Arg::pos(encoder(mount.format, mount.bitrate)),
                Arg::labeled("id", Term::str(format!("local_{}", i + 1))),
                Arg::labeled("host", Term::str("127.0.0.1")),
                Arg::labeled("port", Term::Int(i64::from(station.stream_port()))),
                Arg::labeled("password", Term::str(&station.source_password)),
                Arg::labeled("mount", Term::str(&mount.name)),
            ];
            args.extend(station_metadata(station, &charset, mount.is_public));
            args.push(Arg::pos(Term::var(RADIO_VAR)));
            program.statement(&Term::call("output.icecast", args));
        }
        Ok(())
    }
}

#[async_trait]
impl SectionWriter for RemoteOutputsWriter {
    fn name(&self) -> &'static str {
        "Remote Relays"
    }

    fn priority(&self) -> u8 {
        0
    }

    async fn write(
        &self,
        station: &Station,
        _repository: &dyn StationRepository,
        program: &mut Program,
    ) -> Result<()> {
        let charset = station.backend_settings().charset;
        for (i, relay) in station.relays.iter().filter(|r| r.is_enabled).enumerate() {
            debug!("Relay {} -> {}:{}", i + 1, relay.host, relay.port);
            let mut args = vec![
                Arg::pos(encoder(relay.format, relay.bitrate)),
                Arg::labeled("id", Term::str(format!("remote_{}", i + 1))),
                Arg::labeled("host", Term::str(&relay.host)),
                Arg::labeled("port", Term::Int(i64::from(relay.port))),
                Arg::labeled(
                    "user",
                    Term::str(relay.username.as_deref().unwrap_or("source")),
                ),
                Arg::labeled("password", Term::str(&relay.password)),
            ];
            if let Some(mount) = relay.mount.as_deref().filter(|m| !m.is_empty()) {
                args.push(Arg::labeled("mount", Term::str(mount)));
            }
            if relay.legacy_icy {
                args.push(Arg::labeled("protocol", Term::str("icy")));
            }
            args.extend(station_metadata(station, &charset, relay.is_public));
            args.push(Arg::pos(Term::var(RADIO_VAR)));
            program.statement(&Term::call("output.icecast", args));
        }
        Ok(())
    }
}

fn station_metadata(station: &Station, charset: &str, is_public: bool) -> Vec<Arg> {
    vec![
        Arg::labeled("name", Term::str(&station.name)),
        Arg::labeled("description", Term::str(&station.description)),
        Arg::labeled("genre", Term::str(&station.genre)),
        Arg::labeled("url", Term::str(&station.url)),
        Arg::labeled("public", Term::Bool(is_public)),
        Arg::labeled("encoding", Term::str(charset)),
    ]
}

/// The format-specific encoder block of one output.
pub(crate) fn encoder(format: StreamFormat, bitrate: u32) -> Term {
    match format {
        StreamFormat::Mp3 => Term::raw(format!(
            "%mp3(samplerate=44100, stereo=true, bitrate={}, id3v2=true)",
            bitrate
        )),
        StreamFormat::Ogg => Term::raw(format!(
            "%vorbis.cbr(samplerate=44100, channels=2, bitrate={})",
            bitrate
        )),
        StreamFormat::Opus => Term::raw(format!(
            "%opus(samplerate=48000, bitrate={}, vbr=\"none\", application=\"audio\", \
             channels=2, signal=\"music\", complexity=10, max_bandwidth=\"full_band\")",
            bitrate
        )),
        StreamFormat::Aac => {
            let (profile, afterburner) = aac_profile(bitrate);
            Term::raw(format!(
                "%fdkaac(channels=2, samplerate=44100, bitrate={}, afterburner={}, \
                 aot=\"{}\", transmux=\"adts\", sbr_mode=true)",
                bitrate, afterburner, profile
            ))
        }
    }
}

/// AAC profile and afterburner selection by bitrate: HE-AACv2 below
/// 96 kbps, LC from 96 kbps, afterburner from 160 kbps.
pub(crate) fn aac_profile(bitrate: u32) -> (&'static str, bool) {
    let profile = if bitrate >= 96 {
        "mpeg4_aac_lc"
    } else {
        "mpeg4_he_aac_v2"
    };
    (profile, bitrate >= 160)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aac_profile_thresholds() {
        assert_eq!(aac_profile(64), ("mpeg4_he_aac_v2", false));
        assert_eq!(aac_profile(95), ("mpeg4_he_aac_v2", false));
        assert_eq!(aac_profile(96), ("mpeg4_aac_lc", false));
        assert_eq!(aac_profile(128), ("mpeg4_aac_lc", false));
        assert_eq!(aac_profile(160), ("mpeg4_aac_lc", true));
        assert_eq!(aac_profile(320), ("mpeg4_aac_lc", true));
    }

    #[test]
    fn test_mp3_encoder_block() {
        assert_eq!(
            encoder(StreamFormat::Mp3, 128).to_string(),
            "%mp3(samplerate=44100, stereo=true, bitrate=128, id3v2=true)"
        );
    }

    #[test]
    fn test_aac_encoder_block_carries_derived_flags() {
        let block = encoder(StreamFormat::Aac, 192).to_string();
        assert!(block.contains("afterburner=true"));
        assert!(block.contains("aot=\"mpeg4_aac_lc\""));
    }
}
