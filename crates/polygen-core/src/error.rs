//! Error types for generation

use thiserror::Error;

/// Result type alias for generator operations
pub type GenResult<T> = Result<T, GenError>;

/// Error type for a single (type, profile) generation unit
///
/// Errors never cascade: a failure aborts only the unit that raised it and the
/// driver collects every failure of a run before reporting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// A `Named` reference could not be resolved, or a symbol was defined twice
    #[error("malformed type `{symbol}`: {reason}")]
    MalformedType { symbol: String, reason: String },

    /// The profile has no nullability policy for the primitive kind
    #[error("profile `{profile}` has no nullability policy for `{primitive}`")]
    UnsupportedNullability { primitive: String, profile: String },

    /// The profile has no direct type mapping for the primitive kind
    #[error("profile `{profile}` has no type mapping for primitive `{primitive}`")]
    UnsupportedPrimitive { primitive: String, profile: String },

    /// The profile has no syntax for an array or map type
    #[error("profile `{profile}` has no syntax for `{construct}`")]
    UnsupportedConstruct { construct: String, profile: String },

    /// Resolved representation and supplied fields disagree
    #[error("emission of `{symbol}` failed: {reason}")]
    Emission { symbol: String, reason: String },

    /// No emitter is registered for the profile
    #[error("no emitter registered for profile `{profile}`")]
    UnsupportedTarget { profile: String },
}

impl GenError {
    /// Shorthand for an unresolved `Named` reference
    pub fn unresolved(symbol: impl Into<String>, referenced_from: &str) -> Self {
        GenError::MalformedType {
            symbol: symbol.into(),
            reason: format!("unresolved reference from `{referenced_from}`"),
        }
    }

    /// Shorthand for a structural emission mismatch
    pub fn emission(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        GenError::Emission {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }

    /// Returns a stable numeric code for the error kind
    pub fn error_code(&self) -> u32 {
        match self {
            GenError::MalformedType { .. } => 1,
            GenError::UnsupportedNullability { .. } => 2,
            GenError::UnsupportedPrimitive { .. } => 3,
            GenError::Emission { .. } => 4,
            GenError::UnsupportedTarget { .. } => 5,
            GenError::UnsupportedConstruct { .. } => 6,
        }
    }

    /// Whether the driver may skip the failing target and carry on
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GenError::UnsupportedTarget { .. })
    }
}


#[cfg(test)]
#[path = "error/error_parameterized_tests.rs"]
mod error_parameterized_tests;
