//! Dial tracking - the stateful fold over an instruction stream
//!
//! The `Tracker` owns the current dial state and the two run counters. Each
//! instruction is applied in three steps, in this order:
//!
//! 1. count boundary crossings using the *pre-move* state
//! 2. rotate to the new state
//! 3. check whether the needle landed exactly on zero
//!
//! Counters only ever grow; the state is replaced wholesale on every step, so
//! there is no ambient mutable position outside the tracker value itself.

use crate::config::TrackerConfig;
use crate::dial::{DialState, DIAL_POSITIONS};
use crate::parser::RotationLogParser;
use crate::types::{Instruction, Result, TrackerError};
use serde::Serialize;
use std::path::Path;

/// The dial tracker - entry point for applying rotation instructions
#[derive(Debug, Clone)]
pub struct Tracker {
    state: DialState,
    zero_hits: u64,
    total_wraps: u64,
    instructions_applied: u64,
}

/// What a single applied instruction did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// Boundary crossings this move contributed
    pub wraps: u64,
    /// True if the move ended exactly on position 0
    pub landed_on_zero: bool,
    /// Dial state after the move
    pub new_state: DialState,
}

/// Final counters of a tracking run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// How many moves ended exactly on position 0
    pub zero_hits: u64,
    /// Total boundary crossings across all moves
    pub total_wraps: u64,
    /// Dial state after the last applied instruction
    pub final_state: DialState,
    /// Instructions successfully applied
    pub instructions_applied: u64,
    /// Lines skipped (too short or malformed)
    pub skipped_lines: u64,
}

impl Tracker {
    /// Create a tracker with the needle at the starting position and both
    /// counters at zero
    pub fn new() -> Self {
        log::info!(
            "Starting state: {} (wrap limit: {})",
            DialState::start(),
            DIAL_POSITIONS
        );
        Self {
            state: DialState::start(),
            zero_hits: 0,
            total_wraps: 0,
            instructions_applied: 0,
        }
    }

    /// Current dial state
    pub fn state(&self) -> DialState {
        self.state
    }

    /// Moves that ended exactly on zero so far
    pub fn zero_hits(&self) -> u64 {
        self.zero_hits
    }

    /// Boundary crossings accumulated so far
    pub fn total_wraps(&self) -> u64 {
        self.total_wraps
    }

    /// Apply one instruction: count wraps from the pre-move state, rotate,
    /// then check for a zero landing
    pub fn apply(&mut self, instruction: &Instruction) -> ApplyOutcome {
        let wraps = self.state.count_wraps(instruction.signed_delta());
        let new_state = self.state.rotate(instruction);

        self.total_wraps += wraps;
        self.state = new_state;
        self.instructions_applied += 1;

        let landed_on_zero = new_state.is_zero();
        if landed_on_zero {
            self.zero_hits += 1;
        }

        log::debug!(
            "{} -> position {} (wraps +{}{})",
            instruction,
            new_state,
            wraps,
            if landed_on_zero { ", zero hit" } else { "" }
        );

        ApplyOutcome {
            wraps,
            landed_on_zero,
            new_state,
        }
    }

    /// Process a whole rotation log file
    ///
    /// Malformed lines are logged and skipped unless `config.strict` is set,
    /// in which case the first one aborts the run. A missing or unreadable
    /// file is always fatal.
    ///
    /// # Example
    /// ```no_run
    /// use dial_tracker::{Tracker, TrackerConfig};
    /// use std::path::Path;
    ///
    /// let mut tracker = Tracker::new();
    /// let summary = tracker
    ///     .process_log(Path::new("input-2025.txt"), &TrackerConfig::new())
    ///     .unwrap();
    /// println!("zero hits: {}", summary.zero_hits);
    /// ```
    pub fn process_log(&mut self, path: &Path, config: &TrackerConfig) -> Result<RunSummary> {
        let mut instructions = RotationLogParser::parse(path)?;
        let mut skipped_malformed: u64 = 0;

        for item in &mut instructions {
            if !config.should_apply(self.instructions_applied) {
                log::info!(
                    "Instruction cap reached ({}), stopping early",
                    self.instructions_applied
                );
                break;
            }

            match item {
                Ok(instruction) => {
                    self.apply(&instruction);
                }
                Err(e @ TrackerError::MalformedInstruction { .. }) => {
                    if config.strict {
                        return Err(e);
                    }
                    log::warn!("Skipping malformed line: {}", e);
                    skipped_malformed += 1;
                }
                Err(e) => return Err(e),
            }
        }

        let summary = RunSummary {
            zero_hits: self.zero_hits,
            total_wraps: self.total_wraps,
            final_state: self.state,
            instructions_applied: self.instructions_applied,
            skipped_lines: instructions.skipped_short() + skipped_malformed,
        };

        log::info!(
            "Processed {} instructions ({} lines skipped): {} zero hits, {} wraps, final position {}",
            summary.instructions_applied,
            summary.skipped_lines,
            summary.zero_hits,
            summary.total_wraps,
            summary.final_state
        );

        Ok(summary)
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    #[test]
    fn test_tracker_starts_at_fifty() {
        let tracker = Tracker::new();
        assert_eq!(tracker.state().position(), 50);
        assert_eq!(tracker.zero_hits(), 0);
        assert_eq!(tracker.total_wraps(), 0);
    }

    #[test]
    fn test_apply_r60_then_l20() {
        let mut tracker = Tracker::new();

        let outcome = tracker.apply(&Instruction::new(Direction::Clockwise, 60));
        assert_eq!(outcome.wraps, 1);
        assert!(!outcome.landed_on_zero);
        assert_eq!(tracker.state().position(), 10);

        let outcome = tracker.apply(&Instruction::new(Direction::CounterClockwise, 20));
        assert_eq!(outcome.wraps, 1);
        assert!(!outcome.landed_on_zero);
        assert_eq!(tracker.state().position(), 90);

        assert_eq!(tracker.zero_hits(), 0);
        assert_eq!(tracker.total_wraps(), 2);
    }

    #[test]
    fn test_zero_landing_counted() {
        let mut tracker = Tracker::new();

        let outcome = tracker.apply(&Instruction::new(Direction::CounterClockwise, 50));
        assert!(outcome.landed_on_zero);
        assert_eq!(outcome.wraps, 1);
        assert_eq!(tracker.zero_hits(), 1);

        // Staying put on zero is another landing but no crossing
        let outcome = tracker.apply(&Instruction::new(Direction::Clockwise, 0));
        assert!(outcome.landed_on_zero);
        assert_eq!(outcome.wraps, 0);
        assert_eq!(tracker.zero_hits(), 2);
    }

    #[test]
    fn test_counters_are_monotonic() {
        let mut tracker = Tracker::new();
        let mut last_zero = 0;
        let mut last_wraps = 0;

        for (direction, magnitude) in [
            (Direction::Clockwise, 250),
            (Direction::CounterClockwise, 300),
            (Direction::Clockwise, 50),
            (Direction::CounterClockwise, 1),
        ] {
            tracker.apply(&Instruction::new(direction, magnitude));
            assert!(tracker.zero_hits() >= last_zero);
            assert!(tracker.total_wraps() >= last_wraps);
            last_zero = tracker.zero_hits();
            last_wraps = tracker.total_wraps();
        }
    }
}
