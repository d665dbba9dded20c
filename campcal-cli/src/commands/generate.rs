use std::path::Path;

use anyhow::{Context, Result};
use campcal_core::config::ExportConfig;
use campcal_core::export::{ExportStep, export_schedule};
use campcal_core::schedule::Schedule;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(input: &Path, output: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = ExportConfig::load(config_path)?;

    let schedule = Schedule::load(input)
        .with_context(|| format!("Could not load schedule from {}", input.display()))?;
    log::debug!(
        "Loaded {} activities from {}",
        schedule.activities.len(),
        input.display()
    );

    let report = export_schedule(&schedule, &config, output, |step| match step {
        ExportStep::Full => println!("{}", "Generating main calendar...".dimmed()),
        ExportStep::Track(track) => {
            println!("{} {}", "Generating calendar for track:".dimmed(), track)
        }
    })
    .with_context(|| format!("Could not export calendars to {}", output.display()))?;

    println!("{}", report.render());

    Ok(())
}
