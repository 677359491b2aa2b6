//! Configuration for the plan builder.

use serde::Serialize;

use crate::error::PlanError;

/// How each day of the schedule is subdivided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlanMode {
    /// Each day is a single slot.
    PerDay,
    /// Each day is subdivided into `slots_per_day` slots (for example,
    /// one per prayer time).
    PerSlot,
}

/// Configuration for the plan builder.
///
/// `total` is the full unit count to schedule, already multiplied by the
/// number of khatam repetitions requested (one khatam of the standard
/// mushaf read twice over the same schedule means `total = 604 * 2`).
/// Use the builder methods to customise the remaining parameters.
///
/// # Example
///
/// ```
/// use wird_plan::{PlanConfig, PlanMode};
///
/// let config = PlanConfig::new(604, 30)
///     .with_mode(PlanMode::PerSlot)
///     .with_slots_per_day(5);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.total_slots(), 150);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlanConfig {
    total: u32,
    periods: u16,
    mode: PlanMode,
    slots_per_day: u8,
    distribute_remainder: bool,
    unit_label: String,
}

impl PlanConfig {
    /// Largest schedulable unit total.
    pub const MAX_TOTAL: u32 = 1_000_000;
    /// Largest number of days in one schedule.
    pub const MAX_PERIODS: u16 = 366;
    /// Largest number of slots in one day.
    pub const MAX_SLOTS_PER_DAY: u8 = 10;

    /// Creates a new configuration for `total` units over `periods` days.
    ///
    /// Defaults: `mode = PerDay`, `slots_per_day = 5`,
    /// `distribute_remainder = true`, `unit_label = "pages"`.
    pub fn new(total: u32, periods: u16) -> Self {
        Self {
            total,
            periods,
            mode: PlanMode::PerDay,
            slots_per_day: 5,
            distribute_remainder: true,
            unit_label: "pages".to_string(),
        }
    }

    /// Sets the day subdivision mode.
    pub fn with_mode(mut self, mode: PlanMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the number of slots per day (used in [`PlanMode::PerSlot`]).
    pub fn with_slots_per_day(mut self, n: u8) -> Self {
        self.slots_per_day = n;
        self
    }

    /// Sets the remainder policy: `true` front-loads the division
    /// remainder one unit at a time, `false` sizes every slot at the
    /// ceiling and lets the final slots run short or empty.
    pub fn with_distribute_remainder(mut self, distribute: bool) -> Self {
        self.distribute_remainder = distribute;
        self
    }

    /// Sets the informational unit label carried through for display.
    pub fn with_unit_label(mut self, label: impl Into<String>) -> Self {
        self.unit_label = label.into();
        self
    }

    // --- Accessors ---

    /// Returns the total unit count to schedule.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Returns the number of days in the schedule.
    pub fn periods(&self) -> u16 {
        self.periods
    }

    /// Returns the day subdivision mode.
    pub fn mode(&self) -> PlanMode {
        self.mode
    }

    /// Returns the number of slots per day.
    pub fn slots_per_day(&self) -> u8 {
        self.slots_per_day
    }

    /// Returns the remainder policy flag.
    pub fn distribute_remainder(&self) -> bool {
        self.distribute_remainder
    }

    /// Returns the informational unit label.
    pub fn unit_label(&self) -> &str {
        &self.unit_label
    }

    /// Returns the number of slots the schedule will contain:
    /// `periods` in [`PlanMode::PerDay`], `periods * slots_per_day` in
    /// [`PlanMode::PerSlot`].
    pub fn total_slots(&self) -> u32 {
        match self.mode {
            PlanMode::PerDay => u32::from(self.periods),
            PlanMode::PerSlot => u32::from(self.periods) * u32::from(self.slots_per_day),
        }
    }

    /// Validates this configuration.
    ///
    /// All numeric fields must be positive and within the documented
    /// bounds. `slots_per_day` is bounds-checked in both modes even
    /// though [`PlanMode::PerDay`] never reads it.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidConfig`] naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.total == 0 || self.total > Self::MAX_TOTAL {
            return Err(PlanError::InvalidConfig {
                reason: format!(
                    "total must be 1..={}, got {}",
                    Self::MAX_TOTAL,
                    self.total
                ),
            });
        }
        if self.periods == 0 || self.periods > Self::MAX_PERIODS {
            return Err(PlanError::InvalidConfig {
                reason: format!(
                    "periods must be 1..={}, got {}",
                    Self::MAX_PERIODS,
                    self.periods
                ),
            });
        }
        if self.slots_per_day == 0 || self.slots_per_day > Self::MAX_SLOTS_PER_DAY {
            return Err(PlanError::InvalidConfig {
                reason: format!(
                    "slots_per_day must be 1..={}, got {}",
                    Self::MAX_SLOTS_PER_DAY,
                    self.slots_per_day
                ),
            });
        }
        Ok(())
    }
}
