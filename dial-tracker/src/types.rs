//! Core types for the dial tracker library
//!
//! This module defines the instruction types parsed from a rotation log and
//! the error type shared across the library. The tracker itself only consumes
//! instructions - it never retains them after applying.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Result type for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Rotation direction parsed from the first character of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// 'R' or 'r' - rotate toward higher positions
    Clockwise,
    /// 'L' or 'l' - rotate toward lower positions
    CounterClockwise,
}

impl Direction {
    /// Parse a direction character, case-insensitively
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(Direction::Clockwise),
            'L' => Some(Direction::CounterClockwise),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Clockwise => write!(f, "R"),
            Direction::CounterClockwise => write!(f, "L"),
        }
    }
}

/// A single rotation instruction from the log
///
/// One instruction corresponds to one line of the input file, e.g. `R60`
/// or `l20`. The magnitude is always non-negative; the direction carries
/// the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// Rotation direction
    pub direction: Direction,
    /// Number of clicks to rotate (non-negative)
    pub magnitude: u32,
}

impl Instruction {
    /// Create a new instruction
    pub fn new(direction: Direction, magnitude: u32) -> Self {
        Self {
            direction,
            magnitude,
        }
    }

    /// Signed rotation distance: positive for clockwise, negative for
    /// counter-clockwise
    pub fn signed_delta(&self) -> i64 {
        match self.direction {
            Direction::Clockwise => i64::from(self.magnitude),
            Direction::CounterClockwise => -i64::from(self.magnitude),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction, self.magnitude)
    }
}

/// What exactly was wrong with a malformed log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedKind {
    /// First character is not one of R/r/L/l
    InvalidDirection(char),
    /// The rest of the line is not a non-negative decimal integer
    BadMagnitude(String),
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedKind::InvalidDirection(c) => {
                write!(f, "invalid direction character '{}'", c)
            }
            MalformedKind::BadMagnitude(s) => {
                write!(f, "non-integer rotation '{}'", s)
            }
        }
    }
}

/// Errors that can occur while processing a rotation log
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Failed to open rotation log {path:?}: {source}")]
    LogOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed instruction on line {line_number}: {line:?} ({kind})")]
    MalformedInstruction {
        line_number: usize,
        line: String,
        kind: MalformedKind,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_char() {
        assert_eq!(Direction::from_char('R'), Some(Direction::Clockwise));
        assert_eq!(Direction::from_char('r'), Some(Direction::Clockwise));
        assert_eq!(Direction::from_char('L'), Some(Direction::CounterClockwise));
        assert_eq!(Direction::from_char('l'), Some(Direction::CounterClockwise));
        assert_eq!(Direction::from_char('X'), None);
        assert_eq!(Direction::from_char('7'), None);
    }

    #[test]
    fn test_signed_delta() {
        let right = Instruction::new(Direction::Clockwise, 60);
        assert_eq!(right.signed_delta(), 60);

        let left = Instruction::new(Direction::CounterClockwise, 20);
        assert_eq!(left.signed_delta(), -20);

        let zero = Instruction::new(Direction::CounterClockwise, 0);
        assert_eq!(zero.signed_delta(), 0);
    }

    #[test]
    fn test_instruction_display() {
        assert_eq!(
            format!("{}", Instruction::new(Direction::Clockwise, 60)),
            "R60"
        );
        assert_eq!(
            format!("{}", Instruction::new(Direction::CounterClockwise, 5)),
            "L5"
        );
    }
}
