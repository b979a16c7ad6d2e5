//! Round summary data produced by round resolution

use serde::{Deserialize, Serialize};

use crate::core::types::{EventSeverity, Round};

/// A notable outcome surfaced by round resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialEvent {
    pub title: String,
    pub message: String,
    pub severity: EventSeverity,
}

/// What happened during one round, shown on the summary tab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Round the summary describes (the one that just ended)
    pub round: Round,
    /// Narrative change lines, one per notable metric movement
    pub changes: Vec<String>,
    pub budget_change: i32,
    pub special_events: Vec<SpecialEvent>,
}

impl RoundSummary {
    pub fn new(round: Round) -> Self {
        Self {
            round,
            changes: Vec::new(),
            budget_change: 0,
            special_events: Vec::new(),
        }
    }
}
