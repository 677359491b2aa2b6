//! Progress aggregation over a schedule.

use wird_plan::{PlanMode, PlanResult};

use crate::key::SlotKey;
use crate::state::Progress;

/// Aggregated completion counts for one schedule.
///
/// Totals count only days and slots that have work assigned: a
/// trailing empty day neither counts toward nor blocks completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    days_complete: usize,
    days_total: usize,
    slots_complete: usize,
    slots_total: usize,
    units_complete: u32,
    units_total: u32,
}

impl ProgressSummary {
    /// Days fully read so far.
    pub fn days_complete(&self) -> usize {
        self.days_complete
    }

    /// Days with work assigned.
    pub fn days_total(&self) -> usize {
        self.days_total
    }

    /// Slots ticked off so far.
    pub fn slots_complete(&self) -> usize {
        self.slots_complete
    }

    /// Slots with work assigned.
    pub fn slots_total(&self) -> usize {
        self.slots_total
    }

    /// Units read so far.
    pub fn units_complete(&self) -> u32 {
        self.units_complete
    }

    /// Units in the whole schedule.
    pub fn units_total(&self) -> u32 {
        self.units_total
    }

    /// Completed fraction of the schedule, by unit count, in `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        if self.units_total == 0 {
            return 0.0;
        }
        f64::from(self.units_complete) / f64::from(self.units_total)
    }
}

/// Aggregates a checklist against the schedule it belongs to.
///
/// A slot counts as complete when its own checkbox is ticked or its
/// day's whole-day checkbox is; a day counts as complete when its
/// checkbox is ticked or, in per-slot mode, when all of its filled
/// slots are. In per-day mode only the day checkbox completes a day,
/// so slot keys left over from an earlier per-slot configuration
/// cannot complete days they no longer describe. Checklist entries
/// that do not correspond to a filled slot of `plan` (stale keys from
/// an earlier configuration) are ignored.
pub fn summarize(plan: &PlanResult, progress: &Progress) -> ProgressSummary {
    let mut days_complete = 0;
    let mut days_total = 0;
    let mut slots_complete = 0;
    let mut slots_total = 0;
    let mut units_complete = 0u32;
    let slots_complete_days = plan.mode() == PlanMode::PerSlot;

    for day in plan.days() {
        if day.is_empty() {
            continue;
        }
        days_total += 1;
        let day_checked = progress.is_day_checked(day.day());

        let mut all_slots_done = true;
        for (position, slot) in day.slots().iter().enumerate() {
            if slot.is_empty() {
                continue;
            }
            slots_total += 1;
            let key = SlotKey::new(day.day(), position as u8 + 1);
            if day_checked || progress.is_slot_checked(key) {
                slots_complete += 1;
                units_complete += slot.size();
            } else {
                all_slots_done = false;
            }
        }

        if day_checked || (slots_complete_days && all_slots_done) {
            days_complete += 1;
        }
    }

    ProgressSummary {
        days_complete,
        days_total,
        slots_complete,
        slots_total,
        units_complete,
        units_total: plan.total(),
    }
}
