//! District intervention catalog and per-round selections

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::{DistrictId, Round};

/// Unique intervention identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionId {
    FootPatrols,
    CommunityEngagement,
    SurveillanceCameras,
    DrugEnforcement,
    YouthPrograms,
}

impl ActionId {
    pub const ALL: [ActionId; 5] = [
        ActionId::FootPatrols,
        ActionId::CommunityEngagement,
        ActionId::SurveillanceCameras,
        ActionId::DrugEnforcement,
        ActionId::YouthPrograms,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActionId::FootPatrols => "Increase Foot Patrols",
            ActionId::CommunityEngagement => "Community Engagement",
            ActionId::SurveillanceCameras => "Surveillance Cameras",
            ActionId::DrugEnforcement => "Targeted Drug Enforcement",
            ActionId::YouthPrograms => "Youth Outreach Programs",
        }
    }

    /// Budget cost when implemented
    pub fn cost(&self) -> i32 {
        match self {
            ActionId::FootPatrols => 50,
            ActionId::CommunityEngagement => 80,
            ActionId::SurveillanceCameras => 120,
            ActionId::DrugEnforcement => 100,
            ActionId::YouthPrograms => 90,
        }
    }

    /// Cycle to the next catalog entry, wrapping at the end
    pub fn next(&self) -> ActionId {
        let idx = Self::ALL.iter().position(|a| a == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Cycle to the previous catalog entry, wrapping at the start
    pub fn prev(&self) -> ActionId {
        let idx = Self::ALL.iter().position(|a| a == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The player's pending intervention choices for the current round
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistrictActions {
    selected: AHashMap<DistrictId, ActionId>,
}

impl DistrictActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, district: DistrictId, action: ActionId) {
        self.selected.insert(district, action);
    }

    pub fn deselect(&mut self, district: DistrictId) {
        self.selected.remove(&district);
    }

    pub fn selected(&self, district: DistrictId) -> Option<ActionId> {
        self.selected.get(&district).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DistrictId, ActionId)> + '_ {
        self.selected.iter().map(|(d, a)| (*d, *a))
    }

    /// Total budget cost of all pending selections
    pub fn pending_cost(&self) -> i32 {
        self.selected.values().map(|a| a.cost()).sum()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// An intervention that was applied during a past round
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ImplementedAction {
    pub round: Round,
    pub district: DistrictId,
    pub action: ActionId,
}
