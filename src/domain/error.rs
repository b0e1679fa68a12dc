//! Domain validation errors for core domain types.
//!
//! These errors are returned by `new` constructors that validate inputs,
//! so the scorer and gate never see out-of-range values.
//!
//! # Examples
//!
//! ```
//! use rarescout::domain::error::DomainError;
//! use rarescout::domain::rarity::TotalSupply;
//!
//! let result = TotalSupply::new(0);
//! assert!(matches!(result, Err(DomainError::NonPositiveSupply { supply: 0 })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Total supply must be positive for rarity fractions to be defined.
    #[error("total supply must be positive, got {supply}")]
    NonPositiveSupply {
        /// The invalid supply that was provided.
        supply: i64,
    },

    /// Thresholds must be finite and non-negative.
    #[error("score threshold must be a finite non-negative number, got {threshold}")]
    InvalidThreshold {
        /// The invalid threshold that was provided.
        threshold: f64,
    },
}
