//! Report generation
//!
//! Prints the two answer lines and, on request, a JSON report either after
//! them on stdout or to a separate file.

use anyhow::{Context, Result};
use chrono::Utc;
use dial_tracker::RunSummary;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Final report for one tracking run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Log file the run processed
    pub input: String,
    /// Moves that landed exactly on zero (Part 1)
    pub zero_hits: u64,
    /// Total zero-boundary crossings (Part 2)
    pub total_wraps: u64,
    /// Dial position after the last instruction
    pub final_position: i64,
    /// Instructions successfully applied
    pub instructions_applied: u64,
    /// Lines skipped (too short or malformed)
    pub skipped_lines: u64,
    /// When the report was generated (RFC 3339)
    pub generated_at: String,
}

impl RunReport {
    /// Build a report from a run summary
    pub fn new(input: &Path, summary: &RunSummary) -> Self {
        Self {
            input: input.display().to_string(),
            zero_hits: summary.zero_hits,
            total_wraps: summary.total_wraps,
            final_position: summary.final_state.position(),
            instructions_applied: summary.instructions_applied,
            skipped_lines: summary.skipped_lines,
            generated_at: Utc::now().to_rfc3339(),
        }
    }

    /// Print the answer lines, then emit the JSON report if requested
    pub fn emit(&self, json: bool, output: Option<&Path>) -> Result<()> {
        println!("Part 1 Answer: {}", self.zero_hits);
        println!("Part 2 Answer: {}", self.total_wraps);

        if json || output.is_some() {
            let body = serde_json::to_string_pretty(self)?;
            match output {
                Some(path) => {
                    fs::write(path, &body)
                        .with_context(|| format!("Failed to write report: {:?}", path))?;
                    log::info!("Report written to {:?}", path);
                }
                None => println!("{}", body),
            }
        }

        Ok(())
    }
}
