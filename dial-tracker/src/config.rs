//! Tracker configuration types
//!
//! This module defines the minimal configuration the tracker needs while
//! processing a log. Presentation concerns (report format, output paths)
//! belong to the application layer.

use serde::{Deserialize, Serialize};

/// Configuration for a tracking run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Abort on the first malformed line instead of skipping it
    #[serde(default)]
    pub strict: bool,

    /// Stop after applying this many instructions (useful for testing
    /// against a prefix of a large log)
    #[serde(default)]
    pub max_instructions: Option<usize>,
}

impl TrackerConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: enable or disable strict mode
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Builder method: cap the number of applied instructions
    pub fn with_max_instructions(mut self, max: usize) -> Self {
        self.max_instructions = Some(max);
        self
    }

    /// Check whether another instruction may be applied
    pub fn should_apply(&self, applied_so_far: u64) -> bool {
        match self.max_instructions {
            Some(max) => applied_so_far < max as u64,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_config_builder() {
        let config = TrackerConfig::new()
            .with_strict(true)
            .with_max_instructions(10);

        assert!(config.strict);
        assert_eq!(config.max_instructions, Some(10));
    }

    #[test]
    fn test_defaults_are_permissive() {
        let config = TrackerConfig::new();
        assert!(!config.strict);
        assert!(config.should_apply(0));
        assert!(config.should_apply(1_000_000));
    }

    #[test]
    fn test_should_apply_respects_cap() {
        let config = TrackerConfig::new().with_max_instructions(2);
        assert!(config.should_apply(0));
        assert!(config.should_apply(1));
        assert!(!config.should_apply(2));
        assert!(!config.should_apply(3));
    }
}
