//! Plan construction: baseline division, sequential allocation, day grouping.

use tracing::debug;

use crate::config::{PlanConfig, PlanMode};
use crate::day::DayPlan;
use crate::error::PlanError;
use crate::result::PlanResult;
use crate::slot::{Slot, UnitRange};

/// Builds a reading schedule from `config`.
///
/// Chains: baseline division -> sequential allocation -> day grouping.
///
/// The builder is deterministic: the same configuration always yields
/// the same schedule. Slot sizes are non-increasing over the schedule,
/// consecutive filled slots are contiguous (each starts one unit after
/// the previous ends), and the filled slots together cover exactly
/// `1..=total` with no gaps or overlaps. Once a slot is empty, every
/// later slot is empty too.
#[tracing::instrument(skip_all, fields(total = config.total(), periods = config.periods()))]
pub fn build_plan(config: &PlanConfig) -> Result<PlanResult, PlanError> {
    config.validate()?;

    let total = config.total();
    let total_slots = config.total_slots();
    let distribute = config.distribute_remainder();

    let (base, remainder) = baseline(total, total_slots, distribute);
    debug!(total_slots, base, remainder, "baseline computed");

    let slots = allocate(total, total_slots, base, remainder, distribute);

    let per_day = match config.mode() {
        PlanMode::PerDay => 1,
        PlanMode::PerSlot => usize::from(config.slots_per_day()),
    };
    let days = group_days(slots, per_day);

    Ok(PlanResult::new(
        days,
        base,
        remainder,
        total_slots,
        total,
        config.mode(),
        config.unit_label().to_string(),
    ))
}

/// Computes the nominal slot size and the division remainder.
///
/// Distributing: `base` is the floor of `total / total_slots` and
/// `remainder` the units left over, later spread one per slot.
/// Ceiling: `base` is the ceiling and `remainder` the shortfall the
/// final slots absorb (informational only).
fn baseline(total: u32, total_slots: u32, distribute: bool) -> (u32, u32) {
    if distribute {
        let base = total / total_slots;
        (base, total - base * total_slots)
    } else {
        let base = total.div_ceil(total_slots);
        (base, (base * total_slots).saturating_sub(total))
    }
}

/// Returns the nominal size of the 0-based slot `i`.
fn nominal_size(i: u32, base: u32, remainder: u32, distribute: bool) -> u32 {
    if distribute && i < remainder {
        base + 1
    } else {
        base
    }
}

/// Walks a unit cursor from 1 through `total`, assigning each slot its
/// nominal size until the supply runs out.
///
/// A slot whose turn comes after the cursor has passed `total` is left
/// empty; the slot that reaches `total` mid-size is truncated there.
fn allocate(total: u32, total_slots: u32, base: u32, remainder: u32, distribute: bool) -> Vec<Slot> {
    let mut slots = Vec::with_capacity(total_slots as usize);
    let mut cursor: u32 = 1;

    for i in 0..total_slots {
        let nominal = nominal_size(i, base, remainder, distribute);
        // A zero nominal only occurs once the supply is exhausted
        // (distributing with base 0 past the remainder).
        let range = if cursor > total || nominal == 0 {
            None
        } else {
            let end = (cursor + nominal - 1).min(total);
            let range = UnitRange::from_parts(cursor, end);
            cursor = end + 1;
            Some(range)
        };
        slots.push(Slot::new(i + 1, range));
    }

    slots
}

/// Groups the flat slot sequence into days of `per_day` slots each.
fn group_days(slots: Vec<Slot>, per_day: usize) -> Vec<DayPlan> {
    slots
        .chunks(per_day)
        .enumerate()
        .map(|(d, chunk)| DayPlan::new(d as u16 + 1, chunk.to_vec()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_distributing() {
        assert_eq!(baseline(604, 30, true), (20, 4));
        assert_eq!(baseline(100, 10, true), (10, 0));
        assert_eq!(baseline(7, 10, true), (0, 7));
    }

    #[test]
    fn baseline_ceiling() {
        assert_eq!(baseline(604, 30, false), (21, 26));
        assert_eq!(baseline(100, 10, false), (10, 0));
        assert_eq!(baseline(7, 10, false), (1, 3));
    }

    #[test]
    fn nominal_sizes_front_loaded() {
        // 604 over 30: four slots of 21, then 20s.
        assert_eq!(nominal_size(0, 20, 4, true), 21);
        assert_eq!(nominal_size(3, 20, 4, true), 21);
        assert_eq!(nominal_size(4, 20, 4, true), 20);
        assert_eq!(nominal_size(29, 20, 4, true), 20);
    }

    #[test]
    fn nominal_sizes_ceiling_uniform() {
        assert_eq!(nominal_size(0, 21, 26, false), 21);
        assert_eq!(nominal_size(29, 21, 26, false), 21);
    }

    #[test]
    fn allocate_contiguous() {
        let slots = allocate(604, 30, 20, 4, true);
        assert_eq!(slots.len(), 30);
        assert_eq!(slots[0].start(), Some(1));
        for pair in slots.windows(2) {
            assert_eq!(pair[1].start(), Some(pair[0].end().unwrap() + 1));
        }
        assert_eq!(slots[29].end(), Some(604));
    }

    #[test]
    fn allocate_truncates_final_slot() {
        // Ceiling policy: 7 units over 3 slots of 3 leaves the last
        // slot one unit short.
        let slots = allocate(7, 3, 3, 2, false);
        assert_eq!(slots[0].size(), 3);
        assert_eq!(slots[1].size(), 3);
        assert_eq!(slots[2].size(), 1);
        assert_eq!(slots[2].end(), Some(7));
    }

    #[test]
    fn allocate_leaves_trailing_slots_empty() {
        // Ceiling policy: 20 units over 8 slots of 3 runs out in slot
        // 7, leaving slot 8 empty.
        let slots = allocate(20, 8, 3, 4, false);
        assert_eq!(slots[6].end(), Some(20));
        assert_eq!(slots[6].size(), 2);
        assert!(slots[7].is_empty());
    }

    #[test]
    fn allocate_more_slots_than_units() {
        // Distributing with base 0: the first `remainder` slots get one
        // unit each, the rest stay empty.
        let slots = allocate(3, 10, 0, 3, true);
        assert_eq!(slots[0].range().map(|r| (r.start(), r.end())), Some((1, 1)));
        assert_eq!(slots[2].range().map(|r| (r.start(), r.end())), Some((3, 3)));
        for slot in &slots[3..] {
            assert!(slot.is_empty());
        }
    }

    #[test]
    fn group_days_per_day() {
        let slots = allocate(10, 5, 2, 0, true);
        let days = group_days(slots, 1);
        assert_eq!(days.len(), 5);
        assert_eq!(days[0].day(), 1);
        assert_eq!(days[0].slots().len(), 1);
        assert_eq!(days[4].day(), 5);
    }

    #[test]
    fn group_days_per_slot() {
        let slots = allocate(30, 6, 5, 0, true);
        let days = group_days(slots, 3);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].slots().len(), 3);
        assert_eq!(days[1].slots()[0].index(), 4);
    }

    #[test]
    fn build_rejects_invalid_config() {
        let config = PlanConfig::new(0, 30);
        assert!(matches!(
            build_plan(&config),
            Err(PlanError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn build_smoke_per_day() {
        let config = PlanConfig::new(604, 30);
        let plan = build_plan(&config).unwrap();
        assert_eq!(plan.days().len(), 30);
        assert_eq!(plan.total_slots(), 30);
        assert_eq!(plan.mode(), PlanMode::PerDay);
        assert_eq!(plan.base(), 20);
        assert_eq!(plan.remainder(), 4);
        let sum: u32 = plan.slots().map(|s| s.size()).sum();
        assert_eq!(sum, 604);
    }

    #[test]
    fn build_smoke_per_slot() {
        let config = PlanConfig::new(604, 30)
            .with_mode(PlanMode::PerSlot)
            .with_slots_per_day(5);
        let plan = build_plan(&config).unwrap();
        assert_eq!(plan.days().len(), 30);
        assert_eq!(plan.total_slots(), 150);
        assert_eq!(plan.mode(), PlanMode::PerSlot);
        assert_eq!(plan.base(), 4);
        assert_eq!(plan.remainder(), 4);
        let sum: u32 = plan.slots().map(|s| s.size()).sum();
        assert_eq!(sum, 604);
    }

    #[test]
    fn build_deterministic() {
        let config = PlanConfig::new(6236, 60).with_mode(PlanMode::PerSlot);
        let a = build_plan(&config).unwrap();
        let b = build_plan(&config).unwrap();
        assert_eq!(a, b);
    }
}
