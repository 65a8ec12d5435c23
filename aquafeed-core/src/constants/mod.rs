//! Constants for AquaFeed Core
//!
//! Every tier boundary, penalty and default threshold used by the scorers is
//! defined here, with its unit and the farm practice it encodes.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Water**: Default water-quality thresholds for a grow-out pond
//! - **Penalties**: Environment score deductions per dimension and tier
//! - **Feeding**: Feeding-adjustment tiers, deltas and rate bounds
//! - **Forecast**: History window and forecast model coefficients
//! - **Aeration**: Aerator switch limits and confidence levels
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include the unit in the name where there is one
//! 3. Keep related constants together

/// Default water-quality thresholds.
pub mod water;

/// Environment score penalties.
pub mod penalties;

/// Feeding-adjustment tiers and feeding-rate limits.
pub mod feeding;

/// Forecast windows and model coefficients.
pub mod forecast;

/// Aerator on/off limits.
pub mod aeration;

// Re-export commonly used constants for convenience
pub use water::THRESHOLD_COUNT;

pub use feeding::{
    ADJUSTMENT_MAX_PCT, ADJUSTMENT_MIN_PCT, BASELINE_FEEDING_RATE_GMIN,
    FEEDING_RATE_MAX_GMIN, FEEDING_RATE_MIN_GMIN,
};

pub use forecast::{FORECAST_WINDOW, MAX_FORECAST_HOURS, MAX_FORECAST_POINTS};
