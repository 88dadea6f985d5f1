//! Rotation log file parser
//!
//! Parses text logs with one rotation instruction per line, e.g.:
//!
//! ```text
//! R60
//! L20
//! r5
//! ```
//!
//! The first character is the direction (R/r/L/l), the rest of the line is a
//! non-negative decimal magnitude with no separator. Lines shorter than two
//! characters after trimming carry no instruction and are skipped silently.
//! Anything else that fails to parse is surfaced as a per-line error so the
//! caller can decide between skipping and aborting.

use crate::types::{Direction, Instruction, MalformedKind, Result, TrackerError};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// Parse a single trimmed log line into an instruction
///
/// The caller has already filtered out lines shorter than two characters,
/// but short input still fails cleanly here rather than panicking.
pub fn parse_line(line: &str) -> std::result::Result<Instruction, MalformedKind> {
    let mut chars = line.chars();
    let dir_char = chars.next().ok_or(MalformedKind::InvalidDirection('\0'))?;
    let rest = chars.as_str();

    let direction =
        Direction::from_char(dir_char).ok_or(MalformedKind::InvalidDirection(dir_char))?;

    let magnitude: u32 = rest
        .parse()
        .map_err(|_| MalformedKind::BadMagnitude(rest.to_string()))?;

    Ok(Instruction::new(direction, magnitude))
}

/// Rotation log parser
pub struct RotationLogParser;

impl RotationLogParser {
    /// Open a rotation log and return an iterator over its instructions
    ///
    /// Opening the file is the only fatal failure mode; per-line problems
    /// are reported through the iterator's items.
    pub fn parse(path: &Path) -> Result<InstructionIterator> {
        log::info!("Opening rotation log: {:?}", path);

        let file = File::open(path).map_err(|e| TrackerError::LogOpen {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(InstructionIterator {
            lines: BufReader::new(file).lines(),
            line_number: 0,
            skipped_short: 0,
        })
    }
}

/// Iterator over instructions in a rotation log
///
/// Yields `Ok(Instruction)` for each well-formed line and `Err` for each
/// malformed one. The iterator stays usable after an error, so the caller
/// can skip bad lines and keep going.
#[derive(Debug)]
pub struct InstructionIterator {
    lines: Lines<BufReader<File>>,
    line_number: usize,
    skipped_short: u64,
}

impl InstructionIterator {
    /// Line number of the most recently yielded line (1-based)
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Number of too-short lines skipped so far
    pub fn skipped_short(&self) -> u64 {
        self.skipped_short
    }
}

impl Iterator for InstructionIterator {
    type Item = Result<Instruction>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_number += 1;

            let trimmed = line.trim();
            if trimmed.len() < 2 {
                // Blank or direction-only line, nothing to apply
                log::trace!("Skipping short line {}: {:?}", self.line_number, line);
                self.skipped_short += 1;
                continue;
            }

            return Some(parse_line(trimmed).map_err(|kind| {
                TrackerError::MalformedInstruction {
                    line_number: self.line_number,
                    line: trimmed.to_string(),
                    kind,
                }
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_basic() {
        assert_eq!(
            parse_line("R60").unwrap(),
            Instruction::new(Direction::Clockwise, 60)
        );
        assert_eq!(
            parse_line("L20").unwrap(),
            Instruction::new(Direction::CounterClockwise, 20)
        );
    }

    #[test]
    fn test_parse_line_lowercase() {
        assert_eq!(
            parse_line("r5").unwrap(),
            Instruction::new(Direction::Clockwise, 5)
        );
        assert_eq!(
            parse_line("l123").unwrap(),
            Instruction::new(Direction::CounterClockwise, 123)
        );
    }

    #[test]
    fn test_parse_line_bad_direction() {
        assert_eq!(
            parse_line("Xabc").unwrap_err(),
            MalformedKind::InvalidDirection('X')
        );
        assert_eq!(
            parse_line("912").unwrap_err(),
            MalformedKind::InvalidDirection('9')
        );
    }

    #[test]
    fn test_parse_line_bad_magnitude() {
        assert_eq!(
            parse_line("Rabc").unwrap_err(),
            MalformedKind::BadMagnitude("abc".to_string())
        );
        assert_eq!(
            parse_line("L12x").unwrap_err(),
            MalformedKind::BadMagnitude("12x".to_string())
        );
        // Explicitly negative magnitudes are not a thing; the sign is the
        // direction character
        assert_eq!(
            parse_line("R-5").unwrap_err(),
            MalformedKind::BadMagnitude("-5".to_string())
        );
    }

    #[test]
    fn test_parse_line_magnitude_overflow() {
        // Values beyond u32 are malformed, same as a non-numeric suffix
        assert!(matches!(
            parse_line("R99999999999999999999"),
            Err(MalformedKind::BadMagnitude(_))
        ));
    }

    #[test]
    fn test_iterator_skips_short_and_surfaces_malformed() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "R60").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "R").unwrap();
        writeln!(file, "Rabc").unwrap();
        writeln!(file, "  L20  ").unwrap();
        file.flush().unwrap();

        let mut iter = RotationLogParser::parse(file.path()).unwrap();

        assert_eq!(
            iter.next().unwrap().unwrap(),
            Instruction::new(Direction::Clockwise, 60)
        );

        // "Rabc" comes through as an error with its line number; the blank
        // line and the bare "R" before it were skipped silently
        let err = iter.next().unwrap().unwrap_err();
        match err {
            TrackerError::MalformedInstruction {
                line_number, line, ..
            } => {
                assert_eq!(line_number, 4);
                assert_eq!(line, "Rabc");
            }
            other => panic!("unexpected error: {:?}", other),
        }

        // Iterator keeps going after the error, and trims whitespace
        assert_eq!(
            iter.next().unwrap().unwrap(),
            Instruction::new(Direction::CounterClockwise, 20)
        );
        assert!(iter.next().is_none());
        assert_eq!(iter.skipped_short(), 2);
    }

    #[test]
    fn test_parse_missing_file() {
        let err = RotationLogParser::parse(Path::new("/no/such/rotation.log")).unwrap_err();
        assert!(matches!(err, TrackerError::LogOpen { .. }));
    }
}
