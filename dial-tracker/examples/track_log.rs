//! Standalone dial tracking demo
//!
//! Writes a small rotation log to a temp file, runs the tracker over it, and
//! prints the resulting counters.
//!
//! Usage:
//!   cargo run --example track_log [path/to/rotations.txt]

use anyhow::Result;
use dial_tracker::{Tracker, TrackerConfig};
use std::env;
use std::io::Write;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    let (path, _guard) = match env::args().nth(1) {
        Some(arg) => (PathBuf::from(arg), None),
        None => {
            // No log given - demo on a built-in sequence
            let mut file = tempfile::NamedTempFile::new()?;
            for line in ["R60", "L20", "L90", "R100"] {
                writeln!(file, "{}", line)?;
            }
            file.flush()?;
            (file.path().to_path_buf(), Some(file))
        }
    };

    let mut tracker = Tracker::new();
    let summary = tracker.process_log(&path, &TrackerConfig::new())?;

    println!("=== TRACKING SUMMARY ===");
    println!("Instructions applied: {}", summary.instructions_applied);
    println!("Lines skipped: {}", summary.skipped_lines);
    println!("Zero landings: {}", summary.zero_hits);
    println!("Boundary crossings: {}", summary.total_wraps);
    println!("Final position: {}", summary.final_state);

    Ok(())
}
