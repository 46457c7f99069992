//! Configuration for a gradebook session.
//!
//! This module contains:
//! - Grade bounds and the default pass threshold
//! - Review queue terminators
//! - `Config` - per-session settings supplied by the CLI

use crate::course::validate_range;
use crate::error::Result;

/// Grade scale configuration.
pub mod grade {
    /// Lowest accepted grade (inclusive).
    pub const MIN: f64 = 0.0;

    /// Highest accepted grade (inclusive).
    pub const MAX: f64 = 100.0;

    /// Grades at or above this value count as passed.
    pub const PASS_THRESHOLD: f64 = 60.0;
}

/// Review queue configuration.
pub mod review {
    /// Inputs that end review intake. Compared case-insensitively.
    pub const TERMINATORS: [&str; 2] = ["fin", "end"];
}

/// Per-session settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Minimum grade counted as passed.
    pub pass_threshold: f64,
    /// Colour console output.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pass_threshold: grade::PASS_THRESHOLD,
            color: true,
        }
    }
}

impl Config {
    /// Replace the pass threshold. The threshold must lie on the grade scale.
    pub fn with_pass_threshold(mut self, threshold: f64) -> Result<Self> {
        self.pass_threshold = validate_range(threshold)?;
        Ok(self)
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
