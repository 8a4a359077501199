mod common;

use std::fs;

use common::{media, playlist, station};
use pmowriter::manifest::{clear_manifest_dir, write_playlist_manifest};

/// Parse one manifest record by its documented grammar:
/// `annotate:key1="value1",key2="value2",...:<absolute path>`.
fn parse_record(line: &str) -> (Vec<(String, String)>, String) {
    let rest = line.strip_prefix("annotate:").expect("annotate prefix");
    let separator = rest.rfind("\":").expect("pairs/path separator");
    let (pairs_part, path_part) = rest.split_at(separator + 1);

    let mut pairs = Vec::new();
    for chunk in pairs_part.split("\",") {
        let chunk = chunk.strip_suffix('"').unwrap_or(chunk);
        let (key, value) = chunk.split_once("=\"").expect("key=\"value\" pair");
        pairs.push((key.to_string(), value.to_string()));
    }
    (pairs, path_part[1..].to_string())
}

#[test]
fn test_manifest_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let station = station(dir.path());

    let mut pl = playlist(7, "Rock");
    let mut first = media(1, "sid1", "Artist One", "Title One", "/var/media/one.mp3");
    first
        .extra_annotations
        .insert("cue_in".to_string(), "1.5".to_string());
    let second = media(2, "sid2", "Artist Two", "Title Two", "/var/media/two.mp3");
    pl.media = vec![first, second];

    let path = write_playlist_manifest(&station, &pl, false)
        .unwrap()
        .expect("manifest written");
    assert_eq!(path, station.playlists_dir().join("playlist_rock.m3u"));

    let contents = fs::read_to_string(&path).unwrap();
    let records: Vec<_> = contents.lines().map(parse_record).collect();
    assert_eq!(records.len(), 2);

    let (pairs, media_path) = &records[0];
    assert_eq!(media_path, "/var/media/one.mp3");
    assert_eq!(
        pairs,
        &vec![
            ("playlist_id".to_string(), "7".to_string()),
            ("song_id".to_string(), "sid1".to_string()),
            ("media_id".to_string(), "1".to_string()),
            ("artist".to_string(), "Artist One".to_string()),
            ("title".to_string(), "Title One".to_string()),
            ("album".to_string(), "Album".to_string()),
            ("cue_in".to_string(), "1.5".to_string()),
        ]
    );

    let (pairs, media_path) = &records[1];
    assert_eq!(media_path, "/var/media/two.mp3");
    assert_eq!(pairs[1], ("song_id".to_string(), "sid2".to_string()));
}

#[test]
fn test_jingle_records_carry_jingle_mode() {
    let dir = tempfile::tempdir().unwrap();
    let station = station(dir.path());

    let mut pl = playlist(8, "Jingles");
    pl.is_jingle = true;
    pl.media = vec![media(3, "sid3", "Station", "Sweep", "/var/media/sweep.mp3")];

    let path = write_playlist_manifest(&station, &pl, false)
        .unwrap()
        .unwrap();
    let contents = fs::read_to_string(path).unwrap();
    let (pairs, _) = parse_record(contents.lines().next().unwrap());

    assert_eq!(pairs[0], ("jingle_mode".to_string(), "true".to_string()));
    assert!(pairs.iter().all(|(key, _)| key != "playlist_id"));
}

#[test]
fn test_values_are_sanitized_not_escaped() {
    let dir = tempfile::tempdir().unwrap();
    let station = station(dir.path());

    let mut pl = playlist(9, "Messy");
    pl.media = vec![media(
        4,
        "sid4",
        "The \"Artists\"",
        "Line\nBreak",
        "/var/media/messy.mp3",
    )];

    let path = write_playlist_manifest(&station, &pl, false)
        .unwrap()
        .unwrap();
    let contents = fs::read_to_string(path).unwrap();
    assert_eq!(contents.lines().count(), 1);

    let (pairs, _) = parse_record(contents.lines().next().unwrap());
    assert!(pairs.contains(&("artist".to_string(), "The Artists".to_string())));
    assert!(pairs.contains(&("title".to_string(), "LineBreak".to_string())));
}

#[test]
fn test_amplify_annotation_in_db() {
    let dir = tempfile::tempdir().unwrap();
    let station = station(dir.path());

    let mut pl = playlist(10, "Loud");
    let mut track = media(5, "sid5", "Artist", "Title", "/var/media/loud.mp3");
    track.amplify = Some(-3.5);
    pl.media = vec![track];

    let path = write_playlist_manifest(&station, &pl, false)
        .unwrap()
        .unwrap();
    let contents = fs::read_to_string(path).unwrap();
    assert!(contents.contains("liq_amplify=\"-3.5dB\""));
}

#[test]
fn test_empty_playlist_removes_stale_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let station = station(dir.path());
    let pl = playlist(11, "Empty");

    let stale = station.playlists_dir().join("playlist_empty.m3u");
    fs::create_dir_all(station.playlists_dir()).unwrap();
    fs::write(&stale, "annotate::/gone.mp3\n").unwrap();

    let result = write_playlist_manifest(&station, &pl, false).unwrap();
    assert!(result.is_none());
    assert!(!stale.exists());
}

#[test]
fn test_clear_manifest_dir_only_touches_manifests() {
    let dir = tempfile::tempdir().unwrap();
    let playlists = dir.path().join("playlists");
    fs::create_dir_all(&playlists).unwrap();
    fs::write(playlists.join("playlist_a.m3u"), "x").unwrap();
    fs::write(playlists.join("notes.txt"), "keep me").unwrap();

    clear_manifest_dir(&playlists).unwrap();

    assert!(!playlists.join("playlist_a.m3u").exists());
    assert!(playlists.join("notes.txt").exists());
}
