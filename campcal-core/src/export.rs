//! Writing the full calendar and one calendar per track.

use std::path::{Path, PathBuf};

use crate::config::ExportConfig;
use crate::error::CampCalResult;
use crate::filename::plan_track_files;
use crate::ics::{CalendarEvent, generate_calendar};
use crate::schedule::{DateSpan, Schedule};

/// Which calendar is about to be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStep<'a> {
    Full,
    Track(&'a str),
}

/// What an export run produced.
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub output_dir: PathBuf,
    /// Filenames in the order they were written, full calendar first
    pub files: Vec<String>,
    pub activity_count: usize,
    pub track_count: usize,
    pub date_span: Option<DateSpan>,
}

/// Render the calendar for one track, or for every activity when `track`
/// is `None`.
pub fn render_collection(
    schedule: &Schedule,
    track: Option<&str>,
    config: &ExportConfig,
) -> CampCalResult<String> {
    let mut events = Vec::new();
    for (ordinal, activity) in schedule.entries(track) {
        let event = CalendarEvent::from_activity(ordinal, activity, &schedule.places, config)?;
        events.extend(event);
    }

    Ok(generate_calendar(&events, config))
}

/// Write a document, replacing whatever is at `path`.
pub fn write_document(path: &Path, contents: &str) -> CampCalResult<()> {
    std::fs::write(path, contents)?;
    log::debug!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

/// Write the full calendar and every track calendar into `output_dir`,
/// creating it if needed. `on_step` is called before each calendar is built.
///
/// Files already written stay in place if a later one fails.
pub fn export_schedule(
    schedule: &Schedule,
    config: &ExportConfig,
    output_dir: &Path,
    mut on_step: impl FnMut(ExportStep<'_>),
) -> CampCalResult<ExportReport> {
    std::fs::create_dir_all(output_dir)?;

    let mut files = Vec::new();

    on_step(ExportStep::Full);
    let full = render_collection(schedule, None, config)?;
    let full_filename = config.full_filename();
    write_document(&output_dir.join(&full_filename), &full)?;
    files.push(full_filename);

    let tracks = schedule.tracks();
    for track_file in plan_track_files(&tracks, config) {
        on_step(ExportStep::Track(&track_file.track));
        let ics = render_collection(schedule, Some(&track_file.track), config)?;
        write_document(&output_dir.join(&track_file.filename), &ics)?;
        files.push(track_file.filename);
    }

    Ok(ExportReport {
        output_dir: output_dir.to_path_buf(),
        files,
        activity_count: schedule.activities.len(),
        track_count: tracks.len(),
        date_span: schedule.date_span(),
    })
}
