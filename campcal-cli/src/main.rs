mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "campcal")]
#[command(about = "Turn a schedule.json into emoji-decorated .ics calendars, one per track")]
struct Cli {
    /// Schedule document with an "activities" array
    #[arg(short, long, default_value = "schedule.json")]
    input: PathBuf,

    /// Directory the .ics files are written to (created if missing)
    #[arg(short, long, default_value = "ics_files")]
    output: PathBuf,

    /// TOML file overriding calendar name, file prefix and timezone
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    commands::generate::run(&cli.input, &cli.output, cli.config.as_deref())
}
