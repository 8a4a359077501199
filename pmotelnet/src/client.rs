//! The single-round-trip protocol client

use std::io::{BufRead, BufReader, Write};
use std::net::{Ipv4Addr, SocketAddr, TcpStream};
use std::time::Duration;

use tracing::debug;

use pmostation::Station;

use crate::error::{Error, Result};

/// Connect/read/write timeout for one command round trip. Fixed and
/// non-retrying.
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(20);

/// Send one command to the station's control port and return every
/// response line, trimmed, until the engine closes the connection.
///
/// The command text may carry the two escape markers `\'` and `&amp;`
/// produced by upstream form handling; both are restored to their literal
/// characters before the command is written.
pub fn command(station: &Station, command: &str) -> Result<Vec<String>> {
    let port = station.telnet_port();
    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, port));

    let mut stream = TcpStream::connect_timeout(&addr, COMMAND_TIMEOUT)
        .map_err(|source| Error::ConnectionFailure { port, source })?;
    stream.set_read_timeout(Some(COMMAND_TIMEOUT))?;
    stream.set_write_timeout(Some(COMMAND_TIMEOUT))?;

    let payload = restore_escapes(command);
    debug!("Control command on port {}: {}", port, payload);

    stream.write_all(payload.as_bytes())?;
    stream.write_all(b"\nquit\n")?;
    stream.flush()?;

    let reader = BufReader::new(stream);
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?.trim().to_string());
    }

    debug!("Control response on port {}: {} line(s)", port, lines.len());
    Ok(lines)
}

fn restore_escapes(command: &str) -> String {
    command.replace("\\'", "'").replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_escapes() {
        assert_eq!(
            restore_escapes("requests.push annotate:title=\"Don\\'t Stop\":/a.mp3"),
            "requests.push annotate:title=\"Don't Stop\":/a.mp3"
        );
        assert_eq!(restore_escapes("rock &amp; roll"), "rock & roll");
    }
}
