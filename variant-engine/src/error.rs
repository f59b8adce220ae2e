//! Error types for the variant engine

use thiserror::Error;

/// Variant engine error types
///
/// The engine favors graceful degradation over failure: unparseable
/// metadata, empty catalogs, and unmatched selections are all valid
/// outcomes, not errors. Only caller-side misuse and catalog staleness
/// surface here.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The variant list changed since the catalog was built
    #[error("Stale catalog: variant list changed since it was built")]
    StaleCatalog,

    /// Selection carries an attribute the catalog does not know
    #[error("Unknown attribute in selection: {0}")]
    UnknownAttribute(String),

    /// Selection carries a value outside the attribute's catalog values
    #[error("Value '{value}' is not a catalog value for attribute '{attribute}'")]
    UnknownValue { attribute: String, value: String },
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
