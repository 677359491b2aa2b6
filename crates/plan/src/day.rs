//! Day-level grouping of slots.

use serde::Serialize;

use crate::slot::{Slot, UnitRange};

/// One day of the schedule: a 1-based day number and the slots read on
/// that day, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayPlan {
    day: u16,
    slots: Vec<Slot>,
}

impl DayPlan {
    pub(crate) fn new(day: u16, slots: Vec<Slot>) -> Self {
        Self { day, slots }
    }

    /// Returns the 1-based day number.
    pub fn day(&self) -> u16 {
        self.day
    }

    /// Returns the slots of this day, in reading order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the first unit read on this day, or `None` when every
    /// slot is empty.
    pub fn start(&self) -> Option<u32> {
        self.slots.iter().find_map(|slot| slot.start())
    }

    /// Returns the last unit read on this day, or `None` when every
    /// slot is empty.
    pub fn end(&self) -> Option<u32> {
        self.slots.iter().rev().find_map(|slot| slot.end())
    }

    /// Returns the day's overall unit range, or `None` when every slot
    /// is empty.
    pub fn range(&self) -> Option<UnitRange> {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => Some(UnitRange::from_parts(start, end)),
            _ => None,
        }
    }

    /// Returns the number of units read on this day.
    pub fn total(&self) -> u32 {
        self.slots.iter().map(|slot| slot.size()).sum()
    }

    /// Returns `true` when no slot of this day has work assigned.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_empty())
    }
}
