//! Built schedule output.

use serde::Serialize;

use crate::config::PlanMode;
use crate::day::DayPlan;
use crate::slot::Slot;

/// A complete reading schedule, as produced by
/// [`build_plan`](crate::build_plan).
///
/// The schedule owns its days; slot-level views are derived on demand.
/// `base` and `remainder` describe the division that sized the slots:
/// under the distributing policy the first `remainder` slots hold
/// `base + 1` units and the rest hold `base`; under the ceiling policy
/// every slot is sized `base` and `remainder` reports the shortfall of
/// the final slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanResult {
    days: Vec<DayPlan>,
    base: u32,
    remainder: u32,
    total_slots: u32,
    total: u32,
    mode: PlanMode,
    unit_label: String,
}

impl PlanResult {
    pub(crate) fn new(
        days: Vec<DayPlan>,
        base: u32,
        remainder: u32,
        total_slots: u32,
        total: u32,
        mode: PlanMode,
        unit_label: String,
    ) -> Self {
        Self {
            days,
            base,
            remainder,
            total_slots,
            total,
            mode,
            unit_label,
        }
    }

    /// Returns the days of the schedule, in order.
    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    /// Returns the day with 1-based number `day`, if it exists.
    pub fn day(&self, day: u16) -> Option<&DayPlan> {
        let index = usize::from(day).checked_sub(1)?;
        self.days.get(index)
    }

    /// Iterates over every slot of the schedule, in reading order.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.days.iter().flat_map(|day| day.slots().iter())
    }

    /// Returns the slot with 1-based index `index`, if it exists.
    pub fn slot(&self, index: u32) -> Option<&Slot> {
        let nth = (index as usize).checked_sub(1)?;
        self.slots().nth(nth)
    }

    /// Returns the nominal per-slot unit count.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Returns the division remainder. Under the distributing policy
    /// this many slots were enlarged by one unit; under the ceiling
    /// policy it is the total shortfall of the final slots.
    pub fn remainder(&self) -> u32 {
        self.remainder
    }

    /// Returns the number of slots in the schedule, empty slots
    /// included.
    pub fn total_slots(&self) -> u32 {
        self.total_slots
    }

    /// Returns the total unit count the schedule covers.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Returns the day subdivision mode the schedule was built with.
    pub fn mode(&self) -> PlanMode {
        self.mode
    }

    /// Returns the informational unit label.
    pub fn unit_label(&self) -> &str {
        &self.unit_label
    }
}
