//! # wird-plan
//!
//! Deterministic construction of khatam reading schedules.
//!
//! Given a unit total (pages, verses, or any other countable portion of
//! the text) and a number of days, the builder divides the units into
//! contiguous per-slot ranges, front-loading or ceiling-sizing the
//! division remainder, and groups the slots into days. The same
//! configuration always yields the same schedule.
//!
//! ## Quick Start
//!
//! ```
//! use wird_plan::{PlanConfig, PlanMode, build_plan};
//!
//! // One khatam of the 604-page mushaf over 30 days, five slots per day.
//! let config = PlanConfig::new(604, 30)
//!     .with_mode(PlanMode::PerSlot)
//!     .with_slots_per_day(5);
//! let plan = build_plan(&config)?;
//!
//! assert_eq!(plan.days().len(), 30);
//! assert_eq!(plan.slot(1).unwrap().start(), Some(1));
//! let covered: u32 = plan.slots().map(|s| s.size()).sum();
//! assert_eq!(covered, 604);
//! # Ok::<(), wird_plan::PlanError>(())
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | Builder-style configuration with validation |
//! | `slot` | Unit ranges and schedule slots |
//! | `day` | Day-level grouping of slots |
//! | `build` | The plan builder |
//! | `result` | Built schedule with day and slot lookups |
//! | `error` | Error types |

mod build;
mod config;
mod day;
mod error;
mod result;
mod slot;

pub use build::build_plan;
pub use config::{PlanConfig, PlanMode};
pub use day::DayPlan;
pub use error::PlanError;
pub use result::PlanResult;
pub use slot::{Slot, UnitRange};
