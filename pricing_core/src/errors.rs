//! # Error Types
//!
//! Structured error types for pricing_core. The quote engine itself is total:
//! bad numeric input is coerced and unknown catalog references are skipped, so
//! `calculate` never fails. Errors only arise at the catalog snapshot
//! boundary, where JSON from the external store is parsed and checked.
//!
//! ## Example
//!
//! ```rust
//! use pricing_core::errors::{PricingError, PricingResult};
//!
//! fn check_rate(id: &str, rate: f64) -> PricingResult<()> {
//!     if !rate.is_finite() || rate < 0.0 {
//!         return Err(PricingError::invalid_rate(id, rate.to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for pricing_core operations
pub type PricingResult<T> = Result<T, PricingError>;

/// Structured error type for catalog snapshot handling.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum PricingError {
    /// Two catalog entries in the same section share an id
    #[error("Duplicate catalog id '{id}' in {section}")]
    DuplicateId { section: String, id: String },

    /// A catalog rate is negative or not a finite number
    #[error("Invalid rate for '{id}': {value}")]
    InvalidRate { id: String, value: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl PricingError {
    /// Create a DuplicateId error
    pub fn duplicate_id(section: impl Into<String>, id: impl Into<String>) -> Self {
        PricingError::DuplicateId {
            section: section.into(),
            id: id.into(),
        }
    }

    /// Create an InvalidRate error
    pub fn invalid_rate(id: impl Into<String>, value: impl Into<String>) -> Self {
        PricingError::InvalidRate {
            id: id.into(),
            value: value.into(),
        }
    }

    /// Create a Serialization error
    pub fn serialization(reason: impl Into<String>) -> Self {
        PricingError::Serialization {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PricingError::DuplicateId { .. } => "DUPLICATE_ID",
            PricingError::InvalidRate { .. } => "INVALID_RATE",
            PricingError::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }
}
