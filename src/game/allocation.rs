//! Police allocation bookkeeping - a fixed officer pool split across
//! districts and shifts

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::{DistrictId, Shift};

/// Officer counts per district and shift, plus the unassigned remainder
///
/// Invariant: the sum of every per-district per-shift count plus
/// `unallocated` equals the pool the allocation was created with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoliceAllocation {
    /// Per-district staffing: district -> (day, night)
    shifts: AHashMap<DistrictId, (u32, u32)>,
    unallocated: u32,
    pool: u32,
}

impl PoliceAllocation {
    /// Create an allocation with the whole pool unassigned
    pub fn new(pool: u32) -> Self {
        let mut shifts = AHashMap::with_capacity(DistrictId::ALL.len());
        for district in DistrictId::ALL {
            shifts.insert(district, (0, 0));
        }
        Self {
            shifts,
            unallocated: pool,
            pool,
        }
    }

    /// Get the officer count for one shift
    pub fn shift(&self, district: DistrictId, shift: Shift) -> u32 {
        let (day, night) = self.shifts.get(&district).copied().unwrap_or((0, 0));
        match shift {
            Shift::Day => day,
            Shift::Night => night,
        }
    }

    /// Set one shift to a new value, adjusting `unallocated` by the
    /// inverse delta
    ///
    /// Rejects the change (returns false, no state touched) if it would
    /// drive the unallocated pool below zero. No per-shift bound is
    /// enforced beyond the pool check.
    pub fn set_shift(&mut self, district: DistrictId, shift: Shift, value: u32) -> bool {
        let old = self.shift(district, shift);
        let delta = value as i64 - old as i64;
        let remaining = self.unallocated as i64 - delta;
        if remaining < 0 {
            return false;
        }

        let entry = self.shifts.entry(district).or_insert((0, 0));
        match shift {
            Shift::Day => entry.0 = value,
            Shift::Night => entry.1 = value,
        }
        self.unallocated = remaining as u32;
        true
    }

    pub fn unallocated(&self) -> u32 {
        self.unallocated
    }

    /// Officers currently assigned to a shift somewhere
    pub fn allocated(&self) -> u32 {
        self.pool - self.unallocated
    }

    pub fn pool(&self) -> u32 {
        self.pool
    }

    /// Total officers staffing one district across both shifts
    pub fn district_total(&self, district: DistrictId) -> u32 {
        let (day, night) = self.shifts.get(&district).copied().unwrap_or((0, 0));
        day + night
    }

    /// Sum of every shift count plus the unallocated remainder
    ///
    /// Always equals `pool()`; exposed so callers and tests can check
    /// the invariant directly.
    pub fn total(&self) -> u32 {
        let assigned: u32 = self.shifts.values().map(|(d, n)| d + n).sum();
        assigned + self.unallocated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_shift_within_pool() {
        let mut alloc = PoliceAllocation::new(20);
        assert!(alloc.set_shift(DistrictId::Downtown, Shift::Day, 5));
        assert_eq!(alloc.shift(DistrictId::Downtown, Shift::Day), 5);
        assert_eq!(alloc.unallocated(), 15);
        assert_eq!(alloc.allocated(), 5);
        assert_eq!(alloc.total(), 20);
    }

    #[test]
    fn test_overdraw_rejected_unchanged() {
        let mut alloc = PoliceAllocation::new(20);
        alloc.set_shift(DistrictId::Downtown, Shift::Day, 18);

        // 3 more than the 2 remaining
        assert!(!alloc.set_shift(DistrictId::Westside, Shift::Night, 5));
        assert_eq!(alloc.shift(DistrictId::Westside, Shift::Night), 0);
        assert_eq!(alloc.unallocated(), 2);
        assert_eq!(alloc.total(), 20);
    }

    #[test]
    fn test_lowering_a_shift_returns_officers() {
        let mut alloc = PoliceAllocation::new(20);
        alloc.set_shift(DistrictId::SouthSide, Shift::Night, 8);
        assert_eq!(alloc.unallocated(), 12);

        assert!(alloc.set_shift(DistrictId::SouthSide, Shift::Night, 3));
        assert_eq!(alloc.unallocated(), 17);
        assert_eq!(alloc.total(), 20);
    }

    #[test]
    fn test_single_shift_can_absorb_whole_pool() {
        // No per-shift cap beyond the pool itself
        let mut alloc = PoliceAllocation::new(20);
        assert!(alloc.set_shift(DistrictId::Eastside, Shift::Day, 20));
        assert_eq!(alloc.unallocated(), 0);
        assert!(!alloc.set_shift(DistrictId::Downtown, Shift::Day, 1));
    }

    #[test]
    fn test_district_total_sums_both_shifts() {
        let mut alloc = PoliceAllocation::new(20);
        alloc.set_shift(DistrictId::Westside, Shift::Day, 3);
        alloc.set_shift(DistrictId::Westside, Shift::Night, 4);
        assert_eq!(alloc.district_total(DistrictId::Westside), 7);
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_district() -> impl Strategy<Value = DistrictId> {
        prop_oneof![
            Just(DistrictId::Downtown),
            Just(DistrictId::Westside),
            Just(DistrictId::SouthSide),
            Just(DistrictId::Eastside),
        ]
    }

    fn arb_shift() -> impl Strategy<Value = Shift> {
        prop_oneof![Just(Shift::Day), Just(Shift::Night)]
    }

    proptest! {
        #[test]
        fn pool_invariant_holds_under_any_sequence(
            ops in prop::collection::vec((arb_district(), arb_shift(), 0u32..40), 0..64)
        ) {
            let mut alloc = PoliceAllocation::new(20);
            for (district, shift, value) in ops {
                let before_unallocated = alloc.unallocated();
                let before_value = alloc.shift(district, shift);
                let committed = alloc.set_shift(district, shift, value);

                if committed {
                    let delta = value as i64 - before_value as i64;
                    prop_assert_eq!(
                        alloc.unallocated() as i64,
                        before_unallocated as i64 - delta
                    );
                } else {
                    prop_assert_eq!(alloc.shift(district, shift), before_value);
                    prop_assert_eq!(alloc.unallocated(), before_unallocated);
                }
                prop_assert_eq!(alloc.total(), 20);
            }
        }
    }
}
