//! Common error infrastructure for combo-core.
//!
//! Domain-specific errors (`CatalogError`, `CodecError`) are defined next to
//! the data they validate. This module provides the shared classification
//! used by loaders and tools when reporting them.
//!
//! "No matching chain" is never an error: starting or extending a combo that
//! fails to match is a normal boolean outcome. Errors only describe designer
//! data that cannot be loaded.

/// Severity level of an error, used for categorization and reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid designer data that must be fixed before loading can succeed.
    ///
    /// Examples: chain without steps, unknown branch key
    Validation,

    /// Data is structurally corrupt and cannot be interpreted at all.
    ///
    /// Examples: flat tree child counts overrun the node sequence
    Corrupt,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Corrupt => "corrupt",
        }
    }

    /// Returns true if the data is damaged rather than merely invalid.
    pub const fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt)
    }
}

/// Common trait for all combo-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Return a stable `SCREAMING_CASE` code from `error_code`
pub trait ComboError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_strings_are_stable() {
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
        assert_eq!(ErrorSeverity::Corrupt.as_str(), "corrupt");
        assert!(ErrorSeverity::Corrupt.is_corrupt());
        assert!(!ErrorSeverity::Validation.is_corrupt());
    }
}
