//! Metadata feedback hook

use async_trait::async_trait;

use pmoliq::{sanitize, Arg, Program, Term};
use pmostation::{Station, StationRepository};

use crate::error::Result;
use crate::writer::SectionWriter;
use crate::RADIO_VAR;

pub(crate) struct FeedbackWriter;

#[async_trait]
impl SectionWriter for FeedbackWriter {
    fn name(&self) -> &'static str {
        "Metadata Feedback"
    }

    fn priority(&self) -> u8 {
        10
    }

    async fn write(
        &self,
        station: &Station,
        _repository: &dyn StationRepository,
        program: &mut Program,
    ) -> Result<()> {
        program.line("def metadata_updated(m) =");
        program.line("  song = m[\"song_id\"]");
        program.line("  if (song != \"\") then");
        program.line("    media = m[\"media_id\"]");
        program.line("    playlist = m[\"playlist_id\"]");
        program.line(format!(
            "    ignore(get_process_lines(\"curl -X POST --url '{}' \
             --data-urlencode 'api_auth={}' --data-urlencode 'song=#{{song}}' \
             --data-urlencode 'media=#{{media}}' --data-urlencode 'playlist=#{{playlist}}'\"))",
            sanitize(&station.internal_url("feedback")),
            sanitize(&station.api_key)
        ));
        program.line("  end");
        program.line("end");
        program.blank();

        program.assign(
            RADIO_VAR,
            &Term::call(
                "on_metadata",
                vec![
                    Arg::pos(Term::var("metadata_updated")),
                    Arg::pos(Term::var(RADIO_VAR)),
                ],
            ),
        );

        Ok(())
    }
}
