//! City-wide and per-district figures the board displays

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::DistrictId;

/// Per-district figures shown on the map and analytics views
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DistrictMetrics {
    /// Criminal activity as a percentage (lower is better)
    pub crime_rate: f32,
    /// Community trust in the police as a percentage
    pub trust: f32,
    /// Arrests made this game in the district
    pub arrests: u32,
}

/// Read-only snapshot of the simulation state the board renders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMetrics {
    pub budget: i32,
    pub districts: AHashMap<DistrictId, DistrictMetrics>,
}

impl GameMetrics {
    pub fn district(&self, district: DistrictId) -> DistrictMetrics {
        self.districts.get(&district).copied().unwrap_or(DistrictMetrics {
            crime_rate: 0.0,
            trust: 0.0,
            arrests: 0,
        })
    }

    /// Whether the budget badge should render as a warning
    pub fn low_budget(&self, threshold: i32) -> bool {
        self.budget < threshold
    }

    /// City-wide average crime rate across the four districts
    pub fn average_crime_rate(&self) -> f32 {
        let sum: f32 = DistrictId::ALL
            .iter()
            .map(|d| self.district(*d).crime_rate)
            .sum();
        sum / DistrictId::ALL.len() as f32
    }

    /// City-wide average community trust
    pub fn average_trust(&self) -> f32 {
        let sum: f32 = DistrictId::ALL.iter().map(|d| self.district(*d).trust).sum();
        sum / DistrictId::ALL.len() as f32
    }
}
