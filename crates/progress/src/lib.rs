//! Checklist state and progress aggregation for reading schedules.
//!
//! The schedule itself is pure data from `wird-plan`; this crate adds
//! the mutable part: which days and slots the reader has ticked off,
//! and how far through the schedule that puts them. State lives in an
//! explicit [`Progress`] value owned by the caller, so the same
//! checklist can be serialized, reloaded, and re-aggregated against a
//! freshly built schedule.
//!
//! # Quick start
//!
//! ```
//! use wird_plan::{PlanConfig, build_plan};
//! use wird_progress::{Progress, summarize};
//!
//! let plan = build_plan(&PlanConfig::new(604, 30))?;
//! let mut progress = Progress::new();
//! progress.toggle_day(1);
//!
//! let summary = summarize(&plan, &progress);
//! assert_eq!(summary.days_complete(), 1);
//! assert_eq!(summary.units_complete(), 21);
//! # Ok::<(), wird_plan::PlanError>(())
//! ```

mod error;
mod key;
mod state;
mod summary;

pub use error::ProgressError;
pub use key::SlotKey;
pub use state::Progress;
pub use summary::{ProgressSummary, summarize};
