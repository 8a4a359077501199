//! Audio post-processing chain

use async_trait::async_trait;

use pmoliq::{Arg, Program, Term};
use pmostation::{CrossfadeMode, Station, StationRepository};

use crate::error::Result;
use crate::writer::SectionWriter;
use crate::RADIO_VAR;

pub(crate) struct CustomWriter;

#[async_trait]
impl SectionWriter for CustomWriter {
    fn name(&self) -> &'static str {
        "Audio Post-processing"
    }

    fn priority(&self) -> u8 {
        15
    }

    async fn write(
        &self,
        station: &Station,
        _repository: &dyn StationRepository,
        program: &mut Program,
    ) -> Result<()> {
        let settings = station.backend_settings();
        let radio = Term::var(RADIO_VAR);

        // Runtime metadata override over the control protocol.
        program.assign(
            RADIO_VAR,
            &Term::call(
                "server.insert_metadata",
                vec![
                    Arg::labeled("id", Term::str("custom_metadata")),
                    Arg::pos(radio.clone()),
                ],
            ),
        );

        // Identity gain unless a track annotation overrides it.
        program.assign(
            RADIO_VAR,
            &Term::call(
                "amplify",
                vec![
                    Arg::labeled("override", Term::str("liq_amplify")),
                    Arg::pos(Term::Float(1.0)),
                    Arg::pos(radio.clone()),
                ],
            ),
        );

        if settings.audio_processing {
            program.assign(
                RADIO_VAR,
                &Term::call(
                    "normalize",
                    vec![
                        Arg::labeled("target", Term::Float(0.0)),
                        Arg::labeled("window", Term::Float(0.03)),
                        Arg::labeled("k_up", Term::Float(2.0)),
                        Arg::labeled("k_down", Term::Float(0.5)),
                        Arg::pos(radio.clone()),
                    ],
                ),
            );
            program.assign(
                RADIO_VAR,
                &Term::call(
                    "compress.exponential",
                    vec![
                        Arg::pos(radio.clone()),
                        Arg::labeled("mu", Term::Float(1.0)),
                    ],
                ),
            );
        }

        if settings.enable_replaygain {
            program.line("enable_replaygain_metadata()");
        }

        if let Some(duration) = settings.crossfade_duration() {
            let func = match settings.crossfade_type {
                CrossfadeMode::Smart => "smart_crossfade",
                _ => "crossfade",
            };
            program.assign(
                RADIO_VAR,
                &Term::call(
                    func,
                    vec![
                        Arg::labeled("start_next", Term::Float(duration * 1.5)),
                        Arg::labeled("fade_out", Term::Float(duration)),
                        Arg::labeled("fade_in", Term::Float(duration)),
                        Arg::pos(radio.clone()),
                    ],
                ),
            );
        }

        if let Some(custom) = settings
            .custom_config
            .as_deref()
            .filter(|text| !text.trim().is_empty())
        {
            program.blank();
            program.comment("Operator custom configuration");
            for line in custom.lines() {
                program.line(line);
            }
        }

        Ok(())
    }
}
