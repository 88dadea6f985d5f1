//! Dial position arithmetic
//!
//! The dial is a circular counter with positions 0..=99. Moves are applied
//! with negative-safe modular arithmetic, and boundary crossings are counted
//! in O(1) by comparing floor-division "cycle indices" of the start and the
//! projected (unwrapped) end position instead of stepping click by click.

use crate::types::Instruction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of positions on the dial (0..=99)
pub const DIAL_POSITIONS: i64 = 100;

/// Position the dial needle starts at
pub const START_POSITION: i64 = 50;

/// Integer division rounding toward negative infinity
///
/// Rust's `/` truncates toward zero, so `-11 / 100 == 0` while the cycle
/// index of -11 is -1. When the remainder is nonzero and has a different
/// sign than the divisor, the truncated quotient is one too high.
pub fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    let r = a % b;
    if r != 0 && ((r > 0) != (b > 0)) {
        q - 1
    } else {
        q
    }
}

/// Normalize a raw (possibly negative) position into [0, DIAL_POSITIONS)
///
/// `%` alone is not enough: `-10 % 100 == -10` in Rust.
pub fn wrap_position(raw: i64) -> i64 {
    ((raw % DIAL_POSITIONS) + DIAL_POSITIONS) % DIAL_POSITIONS
}

/// Current needle position on the dial, always in [0, DIAL_POSITIONS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DialState(i64);

impl DialState {
    /// Create a state from a raw position, normalizing into range
    pub fn new(raw: i64) -> Self {
        DialState(wrap_position(raw))
    }

    /// The starting state (position 50)
    pub fn start() -> Self {
        DialState(START_POSITION)
    }

    /// Needle position, guaranteed in [0, DIAL_POSITIONS)
    pub fn position(self) -> i64 {
        self.0
    }

    /// True if the needle is exactly on the zero mark
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Apply a rotation and return the new state
    ///
    /// Pure: the receiver is not modified. The caller stores the returned
    /// state, so there is no ambient dial position anywhere.
    pub fn rotate(self, instruction: &Instruction) -> DialState {
        DialState::new(self.0 + instruction.signed_delta())
    }

    /// Count how many times a move from this state by `delta` clicks crosses
    /// the zero boundary
    ///
    /// The projected end position `self + delta` is left unwrapped and the
    /// crossing count is the difference between the floor-division cycle
    /// indices of start and end. For counter-clockwise moves both operands
    /// get a -1 offset so that landing exactly on 0 counts as a crossing;
    /// this matches stepping one click at a time and counting every touch of
    /// the boundary.
    pub fn count_wraps(self, delta: i64) -> u64 {
        let projected = self.0 + delta;

        let crossings = if delta > 0 {
            floor_div(projected, DIAL_POSITIONS) - floor_div(self.0, DIAL_POSITIONS)
        } else {
            floor_div(self.0 - 1, DIAL_POSITIONS) - floor_div(projected - 1, DIAL_POSITIONS)
        };

        crossings.unsigned_abs()
    }
}

impl Default for DialState {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for DialState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
