use anyhow::{Context, Result, anyhow};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use doty::driver;
use doty::input::Config;
use log::{error, info};
use std::{fs, process};

/// Per-season statistics of the standings tables
#[derive(Parser)]
#[command(author, version)]
struct Args {
    /// Configuration file (JSON) listing the season files, oldest first
    config: String,
    /// Alias file (JSON), lowercase name variant to canonical name
    #[arg(long)]
    aliases: Option<String>,
    /// Verbosity
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn read_config(filename: &str) -> Result<Config> {
    let data = fs::read_to_string(filename).with_context(|| format!("cannot read {filename}"))?;
    let config =
        serde_json::from_str(&data).with_context(|| format!("cannot parse {filename}"))?;
    Ok(config)
}

fn stat(args: &Args) -> Result<()> {
    info!(target: "doty", "read: {}", args.config);
    let config = read_config(&args.config)?;
    let aliases = config
        .aliases(args.aliases.as_deref())
        .map_err(|e| anyhow!("{e}"))?;
    let seasons = driver::load_seasons(&config.files).map_err(|e| anyhow!("{e}"))?;
    for summary in driver::summarize(&seasons, &aliases) {
        println!("season: {}", summary.season);
        println!("- rows: {}", summary.rows);
        println!("- complete: {}", summary.complete);
        println!("- drivers: {}", summary.drivers);
        println!("- events scored: {}", summary.scored_event_count);
        if summary.unparsed_counts > 0 {
            println!("- rows without event count: {}", summary.unparsed_counts);
        }
        if summary.missing_names > 0 {
            println!("- rows without name: {}", summary.missing_names);
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    if let Err(e) = stat(&args) {
        error!(target: "doty", "{e:#}");
        process::exit(1);
    }
}
