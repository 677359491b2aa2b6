//! Cycle arithmetic and range display for multi-khatam schedules.
//!
//! When a schedule covers several complete read-throughs of the text,
//! absolute unit positions keep counting past the end of one copy.
//! This crate translates absolute positions back into "which
//! repetition, which position within it" and renders unit ranges
//! relative to those cycle boundaries.
//!
//! # Quick start
//!
//! ```
//! use wird_cycle::{UnitKind, format_range};
//!
//! let pages = UnitKind::Pages.per_cycle();
//! assert_eq!(format_range(3, 7, pages), "K1 3–7");
//! assert_eq!(format_range(602, 606, pages), "K1 602–604 + K2 1–2");
//! ```

mod cycle;
mod format;
mod units;

pub use cycle::{cycle_of, position_of};
pub use format::format_range;
pub use units::UnitKind;
