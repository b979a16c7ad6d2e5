//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Round counter (1-based turn number)
pub type Round = u32;

/// One of the four fixed districts of the simulated city
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistrictId {
    Downtown,
    Westside,
    SouthSide,
    Eastside,
}

impl DistrictId {
    /// All districts in display order
    pub const ALL: [DistrictId; 4] = [
        DistrictId::Downtown,
        DistrictId::Westside,
        DistrictId::SouthSide,
        DistrictId::Eastside,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            DistrictId::Downtown => "Downtown",
            DistrictId::Westside => "Westside",
            DistrictId::SouthSide => "South Side",
            DistrictId::Eastside => "Eastside",
        }
    }

    /// Short profile line shown in the overview and help screens
    pub fn profile(&self) -> &'static str {
        match self {
            DistrictId::Downtown => "High income, low crime rate, high trust in police",
            DistrictId::Westside => "Mixed income, moderate crime rate, moderate trust",
            DistrictId::SouthSide => "Low income, high crime rate, low trust",
            DistrictId::Eastside => "Mixed demographic, historical tensions with police",
        }
    }
}

/// Police staffing shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shift {
    Day,
    Night,
}

impl Shift {
    pub const ALL: [Shift; 2] = [Shift::Day, Shift::Night];

    pub fn label(&self) -> &'static str {
        match self {
            Shift::Day => "Day",
            Shift::Night => "Night",
        }
    }
}

/// Severity tag attached to a special event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventSeverity {
    Positive,
    Info,
    Negative,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_district_display_names_unique() {
        let names: Vec<&str> = DistrictId::ALL.iter().map(|d| d.display_name()).collect();
        for (i, a) in names.iter().enumerate() {
            for b in names.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_district_id_hash() {
        use std::collections::HashMap;
        let mut map: HashMap<DistrictId, u32> = HashMap::new();
        map.insert(DistrictId::Downtown, 4);
        assert_eq!(map.get(&DistrictId::Downtown), Some(&4));
        assert_eq!(map.get(&DistrictId::Eastside), None);
    }

    #[test]
    fn test_shift_all_covers_both() {
        assert_eq!(Shift::ALL.len(), 2);
        assert_ne!(Shift::ALL[0], Shift::ALL[1]);
    }
}
