//! # Error Types
//!
//! Structured error types for met_core. Every failure a caller can see is
//! one of these variants, with enough context to report the problem or
//! handle it programmatically - no stringly-typed errors, no panics.
//!
//! ## Example
//!
//! ```rust
//! use met_core::errors::{MetError, MetResult};
//!
//! fn validate_density(density_g_cm3: f64) -> MetResult<()> {
//!     if density_g_cm3 <= 0.0 {
//!         return Err(MetError::invalid_input(
//!             "density_g_cm3",
//!             density_g_cm3.to_string(),
//!             "Density must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for met_core operations
pub type MetResult<T> = Result<T, MetError>;

/// Structured error type for catalog, resolution, and calculation failures.
///
/// Each variant carries the identifiers or values that caused the failure,
/// so the boundary can translate it into a caller-visible message without
/// losing which record or field was at fault.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum MetError {
    /// An input value is invalid (non-numeric, non-finite, out of range)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing or empty
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A composition list is structurally invalid (e.g. empty)
    #[error("Invalid composition: {reason}")]
    InvalidComposition { reason: String },

    /// One or more element symbols could not be resolved in the catalog
    #[error("Element(s) not found: {}", .symbols.join(", "))]
    ElementNotFound { symbols: Vec<String> },

    /// A referenced standard alloy does not exist
    #[error("Standard alloy not found: {alloy_id}")]
    AlloyNotFound { alloy_id: String },

    /// No part record exists for the given part code
    #[error("Part not found: {part_code}")]
    PartNotFound { part_code: String },

    /// An operation is illegal in the record's current state
    #[error("Invalid operation '{operation}': {reason}")]
    InvalidOperation { operation: String, reason: String },

    /// A formula denominator evaluated to exactly zero
    #[error("Division by zero in {calculation}")]
    DivisionByZero { calculation: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl MetError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        MetError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        MetError::MissingField {
            field: field.into(),
        }
    }

    /// Create an InvalidComposition error
    pub fn invalid_composition(reason: impl Into<String>) -> Self {
        MetError::InvalidComposition {
            reason: reason.into(),
        }
    }

    /// Create an ElementNotFound error naming the unresolved symbols
    pub fn element_not_found(symbols: Vec<String>) -> Self {
        MetError::ElementNotFound { symbols }
    }

    /// Create an AlloyNotFound error
    pub fn alloy_not_found(alloy_id: impl Into<String>) -> Self {
        MetError::AlloyNotFound {
            alloy_id: alloy_id.into(),
        }
    }

    /// Create a PartNotFound error
    pub fn part_not_found(part_code: impl Into<String>) -> Self {
        MetError::PartNotFound {
            part_code: part_code.into(),
        }
    }

    /// Create an InvalidOperation error
    pub fn invalid_operation(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        MetError::InvalidOperation {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(calculation: impl Into<String>) -> Self {
        MetError::DivisionByZero {
            calculation: calculation.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            MetError::InvalidInput { .. } => "INVALID_INPUT",
            MetError::MissingField { .. } => "MISSING_FIELD",
            MetError::InvalidComposition { .. } => "INVALID_COMPOSITION",
            MetError::ElementNotFound { .. } => "ELEMENT_NOT_FOUND",
            MetError::AlloyNotFound { .. } => "ALLOY_NOT_FOUND",
            MetError::PartNotFound { .. } => "PART_NOT_FOUND",
            MetError::InvalidOperation { .. } => "INVALID_OPERATION",
            MetError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            MetError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Check if this error indicates a missing record (vs. bad input)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MetError::ElementNotFound { .. }
                | MetError::AlloyNotFound { .. }
                | MetError::PartNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = MetError::invalid_input("fluid_density", "abc", "not a number");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: MetError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_element_not_found_names_symbols() {
        let error = MetError::element_not_found(vec!["Xx".to_string(), "Zz".to_string()]);
        let message = error.to_string();
        assert!(message.contains("Xx"));
        assert!(message.contains("Zz"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(MetError::missing_field("part_code").error_code(), "MISSING_FIELD");
        assert_eq!(
            MetError::division_by_zero("archimedes_density").error_code(),
            "DIVISION_BY_ZERO"
        );
        assert_eq!(
            MetError::alloy_not_found("3f0a").error_code(),
            "ALLOY_NOT_FOUND"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(MetError::part_not_found("P-100").is_not_found());
        assert!(!MetError::missing_field("part_code").is_not_found());
    }
}
