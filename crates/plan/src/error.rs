//! Error types for the wird-plan crate.

/// Error type for all fallible operations in the wird-plan crate.
///
/// Plan construction has a single failure class: a malformed
/// configuration. Everything downstream of a validated configuration is
/// total — running out of material is represented by empty slots, not by
/// an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Returned when a configuration field is zero, out of bounds, or
    /// inconsistent.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
