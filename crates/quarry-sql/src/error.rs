//! Error types for query building and execution.

use thiserror::Error;

/// Errors raised by the builder, the grammar compiler, or a bound engine.
#[derive(Debug, Error)]
pub enum Error {
    /// A terminal operation was attempted with no engine bound.
    #[error("no engine configured for this query")]
    EngineNotConfigured,

    /// A chain call received malformed input; fails before compilation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A statement was compiled before a table was set.
    #[error("no table set for this query")]
    MissingTable,

    /// Builder/compiler mismatch that should be unreachable in correct
    /// builds. Not meant to be caught or retried.
    #[error("internal error: {0}")]
    Internal(&'static str),

    /// Opaque pass-through of an engine-level failure.
    #[error("engine error: {0}")]
    Engine(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps a driver or connection failure reported by an engine.
    pub fn engine<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Engine(Box::new(source))
    }
}

/// Result type alias for query operations.
pub type Result<T> = std::result::Result<T, Error>;
