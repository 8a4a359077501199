//! Live harbor (DJ) input

use async_trait::async_trait;

use pmoliq::{sanitize, Arg, Program, Term};
use pmostation::{Station, StationRepository};
use pmotelnet::HARBOR_INPUT_ID;

use crate::error::Result;
use crate::writer::SectionWriter;
use crate::RADIO_VAR;

pub(crate) struct HarborWriter;

#[async_trait]
impl SectionWriter for HarborWriter {
    fn name(&self) -> &'static str {
        "Live Streamers / DJs"
    }

    fn priority(&self) -> u8 {
        20
    }

    async fn write(
        &self,
        station: &Station,
        _repository: &dyn StationRepository,
        program: &mut Program,
    ) -> Result<()> {
        if !station.enable_streamers {
            return Ok(());
        }

        let settings = station.backend_settings();
        let api_auth = format!(
            "--data-urlencode 'api_auth={}'",
            sanitize(&station.api_key)
        );

        program.line("def dj_auth(user, password) =");
        program.line("  log(\"Authenticating DJ: #{user}\")");
        program.line(format!(
            "  ret = get_process_lines(\"curl -X POST --url '{}' {} \
             --data-urlencode 'dj_user=#{{user}}' --data-urlencode 'dj_password=#{{password}}'\")",
            sanitize(&station.internal_url("auth")),
            api_auth
        ));
        program.line("  ret = list.hd(ret, default=\"\")");
        program.line("  log(\"DJ auth response: #{ret}\")");
        program.line("  bool_of_string(ret)");
        program.line("end");
        program.blank();

        // The live flag lives inside the running engine; the synthesizer
        // only declares the cell.
        program.line("live_enabled = ref false");
        program.blank();

        program.line("def live_connected(header) =");
        program.line("  log(\"DJ source connected: #{header}\")");
        program.line("  live_enabled := true");
        program.line(format!(
            "  ignore(get_process_lines(\"curl -X POST --url '{}' {}\"))",
            sanitize(&station.internal_url("djon")),
            api_auth
        ));
        program.line("end");
        program.blank();

        program.line("def live_disconnected() =");
        program.line("  log(\"DJ source disconnected.\")");
        program.line("  live_enabled := false");
        program.line(format!(
            "  ignore(get_process_lines(\"curl -X POST --url '{}' {}\"))",
            sanitize(&station.internal_url("djoff")),
            api_auth
        ));
        program.line("end");
        program.blank();

        let harbor = Term::call(
            "input.harbor",
            vec![
                Arg::labeled("id", Term::str(HARBOR_INPUT_ID)),
                Arg::pos(Term::str(&settings.dj_mount_point)),
                Arg::labeled("port", Term::Int(i64::from(station.harbor_port()))),
                Arg::labeled("auth", Term::var("dj_auth")),
                Arg::labeled("icy", Term::Bool(true)),
                Arg::labeled("icy_metadata_charset", Term::str(&settings.charset)),
                Arg::labeled("metadata_charset", Term::str(&settings.charset)),
                Arg::labeled("buffer", Term::Float(settings.dj_buffer)),
                Arg::labeled("max", Term::Float(settings.dj_buffer + 10.0)),
                Arg::labeled("on_connect", Term::var("live_connected")),
                Arg::labeled("on_disconnect", Term::var("live_disconnected")),
            ],
        )
        .wrapped("audio_to_stereo");
        let live = program.assign("live", &harbor);

        // Keep the fallible live source alive with a silent sink.
        program.statement(
            &Term::call(
                "output.dummy",
                vec![
                    Arg::pos(live.clone()),
                    Arg::labeled("fallible", Term::Bool(true)),
                ],
            )
            .wrapped("ignore"),
        );
        program.blank();

        program.assign(
            RADIO_VAR,
            &Term::call(
                "switch",
                vec![
                    Arg::labeled("id", Term::str("live_switch")),
                    Arg::labeled("track_sensitive", Term::Bool(false)),
                    Arg::pos(Term::List(vec![
                        Term::raw(format!("({{!live_enabled}}, {})", live)),
                        Term::raw(format!("({{true}}, {})", Term::var(RADIO_VAR))),
                    ])),
                ],
            ),
        );

        Ok(())
    }
}
