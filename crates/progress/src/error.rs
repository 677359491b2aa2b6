//! Error types for checklist state.

/// Errors arising from malformed checklist data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    /// A slot key did not parse as `"day:slot"` with positive parts.
    #[error("invalid slot key: {key:?} (expected \"day:slot\")")]
    InvalidKey {
        /// The offending key text.
        key: String,
    },
}
