//! Board configuration with documented constants
//!
//! All magic numbers for the presentation layer are collected here with
//! explanations of their purpose.

use serde::{Deserialize, Serialize};

/// Configuration for the game board
///
/// These values mirror the rules the simulation was designed around.
/// Changing them changes pacing, not correctness: every module reads the
/// limits from here rather than hardcoding them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Total sworn officers available for allocation
    ///
    /// The allocation invariant is: sum of all per-district per-shift
    /// counts plus the unallocated counter equals this pool.
    pub officer_pool: u32,

    /// Number of rounds in a full game
    ///
    /// After the final round the board stops returning to the map tab
    /// when a summary is dismissed.
    pub total_rounds: u32,

    /// Maximum special events ingested into the notification feed per round
    ///
    /// A round summary may surface more; the feed keeps the first ones
    /// and drops the rest.
    pub max_events_per_round: usize,

    /// Budget level below which the header badge renders as a warning
    pub low_budget_threshold: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            officer_pool: 20,
            total_rounds: 10,
            max_events_per_round: 3,
            low_budget_threshold: 200,
        }
    }
}

impl BoardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.officer_pool == 0 {
            return Err("officer_pool must be positive".into());
        }
        if self.total_rounds == 0 {
            return Err("total_rounds must be positive".into());
        }
        if self.max_events_per_round == 0 {
            return Err("max_events_per_round must be positive".into());
        }
        Ok(())
    }
}
