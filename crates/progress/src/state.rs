//! Checklist state for a reading schedule.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::key::SlotKey;

/// Which days and slots of a schedule have been ticked off.
///
/// The state is plain data, held by the caller and passed into
/// [`summarize`](crate::summarize) together with the schedule it
/// belongs to. It serializes as two maps, `completedDays` keyed by day
/// number and `completedSlots` keyed by `"day:slot"`, and tolerates
/// either map being absent from stored data. Entries are kept verbatim,
/// including `false` values left behind by un-ticking; [`compact`]
/// drops those.
///
/// [`compact`]: Progress::compact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    #[serde(default)]
    completed_days: BTreeMap<u16, bool>,
    #[serde(default)]
    completed_slots: BTreeMap<SlotKey, bool>,
}

impl Progress {
    /// Creates an empty checklist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the whole-day checkbox for `day` is ticked.
    pub fn is_day_checked(&self, day: u16) -> bool {
        self.completed_days.get(&day).copied().unwrap_or(false)
    }

    /// Sets the whole-day checkbox for `day`.
    pub fn set_day(&mut self, day: u16, done: bool) {
        self.completed_days.insert(day, done);
    }

    /// Flips the whole-day checkbox for `day` and returns the new value.
    pub fn toggle_day(&mut self, day: u16) -> bool {
        let done = !self.is_day_checked(day);
        self.completed_days.insert(day, done);
        done
    }

    /// Returns `true` when the checkbox for `key` is ticked.
    pub fn is_slot_checked(&self, key: SlotKey) -> bool {
        self.completed_slots.get(&key).copied().unwrap_or(false)
    }

    /// Sets the checkbox for `key`.
    pub fn set_slot(&mut self, key: SlotKey, done: bool) {
        self.completed_slots.insert(key, done);
    }

    /// Flips the checkbox for `key` and returns the new value.
    pub fn toggle_slot(&mut self, key: SlotKey) -> bool {
        let done = !self.is_slot_checked(key);
        self.completed_slots.insert(key, done);
        done
    }

    /// Number of days whose checkbox is ticked.
    pub fn days_checked(&self) -> usize {
        self.completed_days.values().filter(|&&done| done).count()
    }

    /// Number of slots whose checkbox is ticked.
    pub fn slots_checked(&self) -> usize {
        self.completed_slots.values().filter(|&&done| done).count()
    }

    /// Returns `true` when nothing is ticked.
    pub fn is_empty(&self) -> bool {
        self.days_checked() == 0 && self.slots_checked() == 0
    }

    /// Drops un-ticked entries, leaving only `true` values.
    pub fn compact(&mut self) {
        self.completed_days.retain(|_, done| *done);
        self.completed_slots.retain(|_, done| *done);
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.completed_days.clear();
        self.completed_slots.clear();
    }
}
