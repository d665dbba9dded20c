//! Output filenames for per-track calendars.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::ExportConfig;

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid filename regex"));
static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid separator regex"));

/// Used when a track name has no word characters at all (e.g. only emoji).
const FALLBACK_TOKEN: &str = "track";

/// Turn a track label into a filesystem-safe token.
///
/// Drops everything except word characters, whitespace and hyphens, trims,
/// then collapses hyphen/whitespace runs into one underscore.
/// "DIY & Crafts!" becomes "DIY_Crafts".
pub fn sanitize_track(track: &str) -> String {
    let stripped = UNSAFE_CHARS.replace_all(track, "");
    let token = SEPARATOR_RUNS.replace_all(stripped.trim(), "_").into_owned();

    if token.is_empty() {
        FALLBACK_TOKEN.to_string()
    } else {
        token
    }
}

/// A track and the file its calendar is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackFile {
    pub track: String,
    pub filename: String,
}

/// Assign a unique filename to every track.
///
/// The full-calendar filename is reserved first. Tracks that sanitize to an
/// already used name get `_2`, `_3`, ... appended, in the order given.
pub fn plan_track_files(tracks: &[String], config: &ExportConfig) -> Vec<TrackFile> {
    let prefix = &config.calendar.file_prefix;
    let mut used: HashSet<String> = HashSet::from([config.full_filename()]);

    tracks
        .iter()
        .map(|track| {
            let token = sanitize_track(track);
            let mut filename = format!("{prefix}_{token}.ics");
            let mut n = 2;
            while used.contains(&filename) {
                filename = format!("{prefix}_{token}_{n}.ics");
                n += 1;
            }
            if n > 2 {
                log::warn!("Track '{track}' collides with another track's filename, writing {filename}");
            }
            used.insert(filename.clone());

            TrackFile {
                track: track.clone(),
                filename,
            }
        })
        .collect()
}
