//! Error types for the mapfmt formatter.
//!
//! Every failure the rendering pipeline can produce is a variant of
//! [`PrintError`]. Whether a given error aborts a render call or merely
//! suppresses one directive's output is decided by the printer's
//! `suppress_errors` flag, not by the error itself.

use thiserror::Error;

/// The error type for all mapfmt rendering operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrintError {
    /// A supplied binding source is not a mapping, record, or pointer to one.
    #[error("invalid binding source: {kind} cannot provide named bindings")]
    InvalidBindingSource {
        /// The kind name of the rejected source value.
        kind: String,
    },

    /// A mapping source uses keys that are not text.
    #[error("invalid mapping key: expected text keys, found {kind}")]
    InvalidMappingKey {
        /// The kind name of the offending key.
        kind: String,
    },

    /// A resolved binding's value is null or of a kind the renderer does not
    /// support (only raised in strict mode; suppressed mode renders nothing).
    #[error("cannot render value of kind {kind} bound to key '{key}'")]
    UnresolvableValue {
        /// The directive key whose value could not be rendered.
        key: String,
        /// The kind name of the unrenderable value.
        kind: String,
    },

    /// A precision-selected index on a sequence or multi-result callable
    /// exceeds its bounds.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        /// The requested element index.
        index: usize,
        /// The number of available elements.
        len: usize,
    },

    /// A custom key-not-found or value-printer hook reported a failure.
    #[error("strategy failure: {0}")]
    StrategyFailure(String),
}

impl PrintError {
    /// Returns `true` if this error was reported by a caller-supplied hook
    /// rather than by the built-in pipeline.
    pub fn is_strategy_failure(&self) -> bool {
        matches!(self, Self::StrategyFailure(_))
    }
}
