//! Append-only history of what happened each round

use serde::{Deserialize, Serialize};

use crate::core::types::{DistrictId, Round};
use crate::game::actions::ActionId;

/// One line of game history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub round: Round,
    pub district: Option<DistrictId>,
    pub action: Option<ActionId>,
    pub outcome: String,
}

/// The complete game history shown on the log tab
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameLog {
    entries: Vec<LogEntry>,
}

impl GameLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn entries_for_round(&self, round: Round) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.round == round)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
