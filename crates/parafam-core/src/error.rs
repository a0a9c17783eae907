//! Error types for Parafam

use thiserror::Error;

/// Main error type for Parafam construction operations
#[derive(Debug, Error)]
pub enum FamilyError {
    /// Classification rejected the parameter set.
    #[error("Bad parameters. Unable to construct the function.")]
    BadParameters,

    /// A registered builder produced a value of the wrong dynamic type.
    #[error("family `{family}` constructed a value that is not a `{expected}`")]
    ContractViolation {
        /// The family name the builder was registered under.
        family: String,
        /// The type the registration promised.
        expected: String,
    },

    /// A control option key was bound to a non-boolean value.
    #[error("control option `{key}` expects a boolean, got {value}")]
    InvalidControlOption {
        /// The offending control key.
        key: String,
        /// Display rendering of the rejected value.
        value: String,
    },

    /// No family with this name is registered.
    #[error("no family registered under `{0}`")]
    UnknownFamily(String),

    /// A typed reconstruction was given a record for a different family.
    #[error("record names family `{actual}`, expected `{expected}`")]
    RecordMismatch {
        /// The family the caller asked for.
        expected: String,
        /// The family named by the record.
        actual: String,
    },

    /// Error raised by a family's own constructor; propagated unchanged.
    #[error("domain error: {0}")]
    Domain(String),
}

/// Result type alias for Parafam construction operations
pub type Result<T> = std::result::Result<T, FamilyError>;
