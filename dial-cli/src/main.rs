//! Dial Tracker CLI Application
//!
//! Command-line front end for the dial-tracker library. It reads a rotation
//! log, tracks the dial, and prints the two answers:
//! - how many moves landed exactly on zero
//! - how many times the dial crossed the zero boundary
//!
//! The input path comes either straight from the command line or from a
//! config.toml; a JSON report can be written alongside the answer lines.

use anyhow::Result;
use clap::Parser;
use dial_tracker::{Tracker, TrackerConfig};
use std::path::PathBuf;

mod config;
mod report;

/// Dial Tracker - track zero landings and wraps in a rotation log
#[derive(Parser, Debug)]
#[command(name = "dial-cli")]
#[command(about = "Track a circular dial through a log of rotation instructions", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the rotation log file
    #[arg(short, long, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit a JSON report after the answer lines
    #[arg(long)]
    json: bool,

    /// Maximum number of instructions to apply (for testing)
    #[arg(long, value_name = "COUNT")]
    max_instructions: Option<usize>,

    /// Abort on the first malformed line instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Dial Tracker CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using tracker library v{}", dial_tracker::VERSION);

    if let Some(log_path) = args.log.clone() {
        // Direct mode - log path given on the command line
        run(log_path, &args)?;
    } else if let Some(config_path) = &args.config {
        // Config mode - everything comes from config.toml, flags override
        log::info!("Loading configuration from: {:?}", config_path);
        let app_config = config::load_config(config_path)?;
        log::debug!("Configuration loaded successfully");

        run(app_config.input.file.clone(), &args.merged_with(&app_config))?;
    } else {
        // No arguments - show help
        println!("Dial Tracker - No input specified");
        println!("\nQuick Start:");
        println!("  dial-cli --log input-2025.txt");
        println!("  dial-cli --log input-2025.txt --json");
        println!("\nFor config-file runs:");
        println!("  dial-cli --config config.toml");
        println!("\nUse --help for more options");
    }

    Ok(())
}

impl Args {
    /// Fold config-file settings into the flags; explicit flags win
    fn merged_with(&self, app_config: &config::AppConfig) -> Args {
        Args {
            log: Some(app_config.input.file.clone()),
            config: self.config.clone(),
            output: self.output.clone().or_else(|| app_config.output.file.clone()),
            json: self.json || app_config.output.json,
            max_instructions: self.max_instructions.or(app_config.run.max_instructions),
            strict: self.strict || app_config.run.strict,
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }
}

/// Track the dial through the given log and print the report
fn run(log_path: PathBuf, args: &Args) -> Result<()> {
    let mut tracker_config = TrackerConfig::new().with_strict(args.strict);
    if let Some(max) = args.max_instructions {
        tracker_config = tracker_config.with_max_instructions(max);
    }

    let mut tracker = Tracker::new();
    let summary = tracker.process_log(&log_path, &tracker_config)?;

    let run_report = report::RunReport::new(&log_path, &summary);
    run_report.emit(args.json, args.output.as_deref())?;

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
