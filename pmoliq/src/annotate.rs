//! The `annotate:` URI grammar
//!
//! Manifest records and telnet request pushes both reference tracks as
//! `annotate:key1="value1",key2="value2",...:<absolute path>`. Values are
//! sanitized, not fully escaped; a value containing a comma or colon stays
//! as-is because the engine parses keys up to the final `:` separator.

use std::path::Path;

use crate::sanitize::sanitize;

/// Serialize annotation pairs plus a file path into an `annotate:` URI.
pub fn annotate_uri<'a, I>(pairs: I, path: &Path) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let rendered: Vec<String> = pairs
        .into_iter()
        .map(|(key, value)| format!("{}=\"{}\"", key, sanitize(value)))
        .collect();
    format!("annotate:{}:{}", rendered.join(","), path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_annotate_uri() {
        let path = PathBuf::from("/var/station/media/song.mp3");
        let uri = annotate_uri(
            [("song_id", "abc123"), ("title", "My \"Hit\"")],
            &path,
        );
        assert_eq!(
            uri,
            "annotate:song_id=\"abc123\",title=\"My Hit\":/var/station/media/song.mp3"
        );
    }

    #[test]
    fn test_empty_pairs() {
        let uri = annotate_uri(Vec::<(&str, &str)>::new(), &PathBuf::from("/a.mp3"));
        assert_eq!(uri, "annotate::/a.mp3");
    }
}
