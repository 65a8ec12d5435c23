//! Error Types for Scoring Configuration and Input Checks
//!
//! ## Design Philosophy
//!
//! The scoring functions themselves never fail: a broken threshold set yields a
//! worst-case score of `0.0`, an empty series yields a flat trend. Errors only
//! appear on the typed construction paths, where a host can ask *why* its input
//! was rejected before it reaches the fail-closed defaults.
//!
//! 1. **Small Size**: Variants carry only counts, `&'static str` reasons and
//!    field names, so the enum stays `Copy` and fits in a couple of words.
//!
//! 2. **No Heap Allocation**: Usable from `no_std` builds without `alloc`.
//!
//! ## Error Categories
//!
//! ### Configuration
//! - `ThresholdCount`: fewer than 13 values in a positional threshold buffer
//! - `ThresholdOrder`: a warning bound sits outside its critical bound
//!
//! ### Readings
//! - `InvalidValue`: NaN or infinite sensor field
//! - `InsufficientData`: history window too short for a forecast
//!
//! ```rust
//! use aquafeed_core::{ScoringError, ThresholdSet};
//!
//! match ThresholdSet::from_slice(&[6.0, 5.0]) {
//!     Ok(_) => unreachable!(),
//!     Err(ScoringError::ThresholdCount { required, available }) => {
//!         assert_eq!((required, available), (13, 2));
//!     }
//!     Err(_) => unreachable!(),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for scoring configuration and input checks
pub type ScoringResult<T> = Result<T, ScoringError>;

/// Scoring errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ScoringError {
    /// Positional threshold buffer is too short
    #[error("Threshold set needs {required} values, got {available}")]
    ThresholdCount {
        /// Number of positional thresholds the scorer reads
        required: usize,
        /// Number of values the caller supplied
        available: usize,
    },

    /// Threshold bounds are not nested the way the tiers expect
    #[error("Threshold ordering violated: {reason}")]
    ThresholdOrder {
        /// Which pair of bounds is out of order
        reason: &'static str,
    },

    /// Reading is NaN or infinite
    #[error("Invalid value in field {field}")]
    InvalidValue {
        /// Name of the offending reading field
        field: &'static str,
    },

    /// Not enough history samples
    #[error("Insufficient data: need {required}, have {available}")]
    InsufficientData {
        /// Minimum number of samples needed
        required: usize,
        /// Actual number of samples available
        available: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ScoringError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ThresholdCount { required, available } =>
                defmt::write!(fmt, "Need {} thresholds, have {}", required, available),
            Self::ThresholdOrder { reason } =>
                defmt::write!(fmt, "Threshold order: {}", reason),
            Self::InvalidValue { field } =>
                defmt::write!(fmt, "Invalid value: {}", field),
            Self::InsufficientData { required, available } =>
                defmt::write!(fmt, "Need {} samples, have {}", required, available),
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = ScoringError::ThresholdCount { required: 13, available: 4 };
        assert_eq!(err.to_string(), "Threshold set needs 13 values, got 4");

        let err = ScoringError::InvalidValue { field: "ph" };
        assert_eq!(err.to_string(), "Invalid value in field ph");
    }
}
