use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use doty::driver;
use doty::errors::Result;
use doty::input::Config;
use doty::output::{OError, Report};
use log::{error, info};
use std::{error, fs, io, process};

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Configuration file (JSON) listing the season files, oldest first
    config: String,
    /// Alias file (JSON), lowercase name variant to canonical name
    #[arg(long)]
    aliases: Option<String>,
    /// Show whether each rookie ran a complete season
    #[arg(long)]
    complete: bool,
    /// Also write the report as a JSON file
    #[arg(long)]
    outfile: Option<String>,
    /// Produce compact JSON files
    #[arg(long)]
    compact: bool,
    /// Report errors as a JSON file
    #[arg(long)]
    error_file: Option<String>,
    /// Verbosity
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn store_report(args: &Args, filename: &str, report: &Report) -> Result<()> {
    let file = fs::File::create(filename)?;
    let writer = io::BufWriter::new(file);
    if args.compact {
        serde_json::to_writer(writer, report)?;
    } else {
        serde_json::to_writer_pretty(writer, report)?;
    }
    Ok(())
}

fn process(args: &Args) -> Result<()> {
    info!(target: "doty", "read: {}", args.config);
    let config = Config::from_file(&args.config)?;
    let aliases = config.aliases(args.aliases.as_deref())?;
    let report = driver::calc(&config, &aliases)?;
    println!("{}", report.pretty(args.complete));
    if let Some(filename) = &args.outfile {
        store_report(args, filename, &report)?;
        info!(target: "doty", "wrote: {filename}");
    }
    Ok(())
}

fn store_error(error_file: &str, e: &dyn error::Error) -> Result<()> {
    let error = OError {
        error: format!("{e}"),
    };
    let file = fs::File::create(error_file)?;
    let writer = io::BufWriter::new(file);
    serde_json::to_writer(writer, &error)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    match process(&args) {
        Ok(()) => (),
        Err(e) => {
            match &args.error_file {
                Some(filename) => match store_error(filename, &*e) {
                    Ok(()) => {
                        info!(target: "doty", "error reported: {e}");
                    }
                    Err(e2) => {
                        error!(target: "doty", "{e}");
                        error!(target: "doty", "{e2}");
                    }
                },
                None => error!(target: "doty", "{e}"),
            }
            process::exit(1);
        }
    }
}
