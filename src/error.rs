use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised before the frame loop runs (import and configuration).
///
/// The per-frame motion and collision code never fails; everything that can
/// go wrong is rejected here first.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Input text was not valid JSON / did not match the record shape.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record failed validation; the whole batch is rejected.
    #[error("invalid record #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// Configuration value outside its allowed range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Nothing to import.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),
}

impl EngineError {
    pub(crate) fn record(index: usize, reason: impl Into<String>) -> Self {
        EngineError::InvalidRecord {
            index,
            reason: reason.into(),
        }
    }
}
