//! Path search statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected during a scoring call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Seeds used as path starts.
    pub seeds: u32,

    /// Cells pushed onto the path stack.
    pub nodes_expanded: u64,

    /// Paths of two or more cards enumerated.
    pub paths_enumerated: u64,

    /// Enumerated paths that scored.
    pub scoreable_paths: u64,

    /// Longest path reached.
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fraction of enumerated paths that scored.
    #[must_use]
    pub fn scoreable_ratio(&self) -> f64 {
        if self.paths_enumerated == 0 {
            0.0
        } else {
            self.scoreable_paths as f64 / self.paths_enumerated as f64
        }
    }
}
