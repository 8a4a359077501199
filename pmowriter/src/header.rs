//! Daemon and runtime settings

use async_trait::async_trait;

use pmoliq::{Arg, Program, Term};
use pmostation::{Station, StationRepository};

use crate::error::Result;
use crate::writer::SectionWriter;

pub(crate) struct HeaderWriter;

#[async_trait]
impl SectionWriter for HeaderWriter {
    fn name(&self) -> &'static str {
        "Basic Settings"
    }

    fn priority(&self) -> u8 {
        30
    }

    async fn write(
        &self,
        station: &Station,
        _repository: &dyn StationRepository,
        program: &mut Program,
    ) -> Result<()> {
        program.prepend(&[
            "# WARNING! This file is automatically generated.",
            "# Do not edit it by hand; changes are lost on the next configuration write.",
            "",
        ]);

        set(program, "init.daemon", Term::Bool(false));
        set(program, "log.stdout", Term::Bool(true));
        set(program, "log.file", Term::Bool(false));
        set(program, "server.telnet", Term::Bool(true));
        set(program, "server.telnet.bind_addr", Term::str("0.0.0.0"));
        set(
            program,
            "server.telnet.port",
            Term::Int(i64::from(station.telnet_port())),
        );
        set(
            program,
            "harbor.bind_addrs",
            Term::List(vec![Term::str("0.0.0.0")]),
        );
        set(
            program,
            "tag.encodings",
            Term::List(vec![Term::str("UTF-8"), Term::str("ISO-8859-1")]),
        );
        program.statement(&Term::call(
            "setenv",
            vec![
                Arg::pos(Term::str("TZ")),
                Arg::pos(Term::str(&station.timezone)),
            ],
        ));

        Ok(())
    }
}

fn set(program: &mut Program, key: &str, value: Term) {
    program.statement(&Term::call(
        "set",
        vec![Arg::pos(Term::str(key)), Arg::pos(value)],
    ));
}
