//! The playlist scheduling graph
//!
//! Declares one source per enabled playlist, routes each into its mixing
//! bucket, then folds the buckets into the main `radio` pipeline: weighted
//! rotation, per-N-songs rotations, delayed insertions, scheduled
//! switches, the manual request queue, the cue trimmer with its skip
//! command, and the failure-safety fallback.

use async_trait::async_trait;
use tracing::{debug, info};

use pmoliq::time::{hourly_predicate, schedule_predicate};
use pmoliq::{sanitize, Arg, Program, Term};
use pmostation::{
    Playlist, PlaybackBehavior, PlaylistOrder, PlaylistSource, PlaylistType, Station,
    StationRepository,
};

use crate::error::{Error, Result};
use crate::manifest;
use crate::writer::SectionWriter;
use crate::RADIO_VAR;

pub(crate) struct SchedulingWriter;

/// Sources accumulated per mixing bucket before finalization.
#[derive(Default)]
struct Buckets {
    /// (weight, source) pairs for the weighted random rotation.
    standard: Vec<(u32, Term)>,
    /// (per-N-songs, source) rotations folded around the main pick.
    rotations: Vec<(u32, Term)>,
    /// (delay seconds, track_sensitive, source) insertions.
    delayed: Vec<(u64, bool, Term)>,
    /// (predicate, source) entries honoring track boundaries.
    switches: Vec<(String, Term)>,
    /// (predicate, source) entries cutting in immediately.
    interrupting: Vec<(String, Term)>,
}

#[async_trait]
impl SectionWriter for SchedulingWriter {
    fn name(&self) -> &'static str {
        "Playlists"
    }

    fn priority(&self) -> u8 {
        25
    }

    async fn write(
        &self,
        station: &Station,
        repository: &dyn StationRepository,
        program: &mut Program,
    ) -> Result<()> {
        manifest::clear_manifest_dir(&station.playlists_dir())?;

        let mut buckets = Buckets::default();
        for playlist in station.playlists.iter().filter(|p| p.is_enabled) {
            let Some(source) = declare_playlist(station, playlist, program)? else {
                continue;
            };
            route(playlist, source, &mut buckets)?;
        }

        if buckets.standard.is_empty() {
            info!(
                "Station {} has no enabled default playlist, creating one",
                station.id
            );
            let playlist = repository
                .create_default_playlist(station)
                .await
                .map_err(Error::Repository)?;
            let path = manifest::write_empty_manifest(station, &playlist)?;
            let source = declare_local(&playlist, &path, program);
            buckets.standard.push((playlist.weight.max(1), source));
        }

        finalize(station, program, buckets);
        Ok(())
    }
}

/// Declare the source variable of one playlist.
///
/// Returns `None` for playlists that cannot be referenced: a local
/// playlist without playable tracks, or a remote playlist without a URL.
fn declare_playlist(
    station: &Station,
    playlist: &Playlist,
    program: &mut Program,
) -> Result<Option<Term>> {
    match playlist.source {
        PlaylistSource::Songs => {
            match manifest::write_playlist_manifest(station, playlist, false)? {
                Some(path) => Ok(Some(declare_local(playlist, &path, program))),
                None => Ok(None),
            }
        }
        PlaylistSource::RemoteStream | PlaylistSource::RemotePlaylist => {
            let Some(url) = playlist.remote_url.as_deref().filter(|u| !u.is_empty()) else {
                debug!("Playlist {} has no remote URL, skipping", playlist.name);
                return Ok(None);
            };
            let source = if playlist.source == PlaylistSource::RemoteStream {
                remote_stream_source(playlist, url)
            } else {
                // A static remote playlist is referenced directly by URL.
                Term::call(
                    "playlist",
                    vec![
                        Arg::labeled("id", Term::str(playlist.variable_name())),
                        Arg::pos(Term::str(url)),
                    ],
                )
            };
            Ok(Some(declare(playlist, source, program)))
        }
    }
}

fn declare_local(playlist: &Playlist, path: &std::path::Path, program: &mut Program) -> Term {
    let source = local_source(playlist, path);
    declare(playlist, source, program)
}

/// Stereo-normalize, strip jingle metadata, and assign the variable.
fn declare(playlist: &Playlist, source: Term, program: &mut Program) -> Term {
    let mut source = source.wrapped("audio_to_stereo");
    if playlist.is_jingle {
        source = source.wrapped("drop_metadata");
    }
    program.comment(&sanitize(&format!("Playlist: {}", playlist.name)));
    let var = program.assign(&playlist.variable_name(), &source);
    program.blank();
    var
}

/// The manifest-backed source for a local playlist, shaped by its
/// playback behavior and ordering.
fn local_source(playlist: &Playlist, path: &std::path::Path) -> Term {
    let id = playlist.variable_name();
    let uri = Term::str(path.display().to_string());

    match playlist.behavior {
        PlaybackBehavior::Default => Term::call(
            "playlist",
            vec![
                Arg::labeled("id", Term::str(&id)),
                Arg::labeled("default_duration", Term::Float(10.0)),
                Arg::labeled("length", Term::Float(20.0)),
                Arg::labeled("mode", Term::str(order_mode(playlist.order))),
                Arg::labeled("reload_mode", Term::str("watch")),
                Arg::pos(uri),
            ],
        ),
        PlaybackBehavior::PlayOnce => Term::call(
            "playlist.once",
            vec![
                Arg::labeled("id", Term::str(&id)),
                Arg::labeled("reload_mode", Term::str("watch")),
                Arg::pos(uri),
            ],
        ),
        PlaybackBehavior::Merge => Term::call(
            "merge_tracks",
            vec![
                Arg::labeled("id", Term::str(format!("{}_merged", id))),
                Arg::pos(Term::call(
                    "playlist",
                    vec![
                        Arg::labeled("id", Term::str(&id)),
                        Arg::labeled("mode", Term::str(order_mode(playlist.order))),
                        Arg::labeled("reload_mode", Term::str("watch")),
                        Arg::pos(uri),
                    ],
                )),
            ],
        ),
    }
}

fn order_mode(order: PlaylistOrder) -> &'static str {
    match order {
        PlaylistOrder::Sequential => "normal",
        PlaylistOrder::Shuffle => "randomize",
        PlaylistOrder::Random => "random",
    }
}

fn remote_stream_source(playlist: &Playlist, url: &str) -> Term {
    let buffer = if playlist.remote_buffer > 0 {
        f64::from(playlist.remote_buffer)
    } else {
        5.0
    };
    Term::call(
        "input.http",
        vec![
            Arg::labeled("id", Term::str(playlist.variable_name())),
            Arg::labeled("buffer", Term::Float(buffer)),
            Arg::labeled("max", Term::Float(buffer + 10.0)),
            Arg::pos(Term::str(url)),
        ],
    )
}

/// Route one declared source into its mixing bucket.
fn route(playlist: &Playlist, source: Term, buckets: &mut Buckets) -> Result<()> {
    match playlist.kind {
        PlaylistType::Default => {
            buckets.standard.push((playlist.weight.max(1), source));
        }
        PlaylistType::OncePerXSongs => {
            buckets
                .rotations
                .push((playlist.play_per_songs.max(1), source));
        }
        PlaylistType::OncePerXMinutes => {
            let seconds = u64::from(playlist.play_per_minutes.max(1)) * 60;
            buckets.delayed.push((seconds, !playlist.interrupt, source));
        }
        PlaylistType::OncePerHour => {
            let predicate = hourly_predicate(playlist.play_per_hour_minute)?;
            push_switch(buckets, playlist.interrupt, predicate, source);
        }
        PlaylistType::Scheduled => {
            let predicate = schedule_predicate(
                playlist.schedule_start_time,
                playlist.schedule_end_time,
                &playlist.schedule_days,
            )?;
            push_switch(buckets, playlist.interrupt, predicate, source);
        }
        // Advanced playlists are declared but wired up by the operator's
        // custom configuration.
        PlaylistType::Advanced => {}
    }
    Ok(())
}

fn push_switch(buckets: &mut Buckets, interrupt: bool, predicate: String, source: Term) {
    if interrupt {
        buckets.interrupting.push((predicate, source));
    } else {
        buckets.switches.push((predicate, source));
    }
}

/// Fold the buckets into the final `radio` pipeline.
fn finalize(station: &Station, program: &mut Program, buckets: Buckets) {
    program.comment("Standard rotation");
    let weights = Term::List(
        buckets
            .standard
            .iter()
            .map(|(w, _)| Term::Int(i64::from(*w)))
            .collect(),
    );
    let sources = Term::List(buckets.standard.iter().map(|(_, s)| s.clone()).collect());
    let mut radio = program.assign(
        RADIO_VAR,
        &Term::call(
            "random",
            vec![
                Arg::labeled("id", Term::str("standard_playlists")),
                Arg::labeled("weights", weights),
                Arg::pos(sources),
            ],
        ),
    );

    for (per_songs, source) in &buckets.rotations {
        radio = program.assign(
            RADIO_VAR,
            &Term::call(
                "rotate",
                vec![
                    Arg::labeled(
                        "weights",
                        Term::List(vec![Term::Int(1), Term::Int(i64::from(*per_songs))]),
                    ),
                    Arg::pos(Term::List(vec![source.clone(), radio])),
                ],
            ),
        );
    }

    for (seconds, track_sensitive, source) in &buckets.delayed {
        let delayed = Term::call(
            "delay",
            vec![
                Arg::pos(Term::Float(*seconds as f64)),
                Arg::pos(source.clone()),
            ],
        );
        radio = program.assign(
            RADIO_VAR,
            &Term::call(
                "fallback",
                vec![
                    Arg::labeled("track_sensitive", Term::Bool(*track_sensitive)),
                    Arg::pos(Term::List(vec![delayed, radio])),
                ],
            ),
        );
    }

    if !buckets.switches.is_empty() {
        radio = emit_switch(program, "schedule_switch", true, &buckets.switches, radio);
    }
    if !buckets.interrupting.is_empty() {
        radio = emit_switch(
            program,
            "interrupting_switch",
            false,
            &buckets.interrupting,
            radio,
        );
    }

    program.blank();
    program.comment("Manual requests are preferred at track boundaries");
    let requests = program.assign(
        "requests",
        &Term::call(
            "request.queue",
            vec![Arg::labeled("id", Term::str("requests"))],
        ),
    );
    radio = program.assign(
        RADIO_VAR,
        &Term::call(
            "fallback",
            vec![
                Arg::labeled("id", Term::str("requests_fallback")),
                Arg::labeled("track_sensitive", Term::Bool(true)),
                Arg::pos(Term::List(vec![requests, radio])),
            ],
        ),
    );

    program.blank();
    radio = program.assign(
        RADIO_VAR,
        &Term::call(
            "cue_cut",
            vec![
                Arg::labeled("id", Term::str("radio_trim_cue")),
                Arg::pos(radio),
            ],
        ),
    );
    program.line("def add_skip_command(s) =");
    program.line("  def skip(_) =");
    program.line("    source.skip(s)");
    program.line("    \"Done!\"");
    program.line("  end");
    program.line(
        "  server.register(namespace=\"radio\", usage=\"skip\", \
         description=\"Skip the current track.\", \"skip\", skip)",
    );
    program.line("end");
    program.line("add_skip_command(radio)");

    program.blank();
    program.comment("Failure safety");
    let error_track = Term::call(
        "single",
        vec![
            Arg::labeled("id", Term::str("error_track")),
            Arg::pos(Term::str(station.error_track_path().display().to_string())),
        ],
    );
    program.assign(
        RADIO_VAR,
        &Term::call(
            "fallback",
            vec![
                Arg::labeled("id", Term::str("safe_fallback")),
                Arg::labeled("track_sensitive", Term::Bool(false)),
                Arg::pos(Term::List(vec![radio, error_track])),
            ],
        ),
    );
}

/// A first-match-wins switch over (predicate, source) entries, defaulting
/// to the current pipeline.
fn emit_switch(
    program: &mut Program,
    id: &str,
    track_sensitive: bool,
    entries: &[(String, Term)],
    radio: Term,
) -> Term {
    let mut items: Vec<Term> = entries
        .iter()
        .map(|(predicate, source)| Term::raw(format!("({{ {} }}, {})", predicate, source)))
        .collect();
    items.push(Term::raw(format!("({{true}}, {})", radio)));

    program.assign(
        RADIO_VAR,
        &Term::call(
            "switch",
            vec![
                Arg::labeled("id", Term::str(id)),
                Arg::labeled("track_sensitive", Term::Bool(track_sensitive)),
                Arg::pos(Term::List(items)),
            ],
        ),
    )
}
