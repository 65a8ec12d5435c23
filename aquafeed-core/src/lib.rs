//! Core scoring engine for AquaFeed
//!
//! Turns water-quality and fish-behavior readings into feeding decisions.
//! Designed to run next to sensor ingestion on constrained hosts.
//!
//! Key constraints:
//! - No heap allocation in the scoring path
//! - Every call is a pure function of its inputs
//! - Bad configuration degrades feeding, never panics
//!
//! ```
//! use aquafeed_core::{EnvironmentScorer, SensorReading, ThresholdSet, feeding_adjustment};
//!
//! let scorer = EnvironmentScorer::new(ThresholdSet::default());
//! let reading = SensorReading::new(6.5, 7.8, 10.0, 0.1, 27.0, 0.9);
//!
//! let score = scorer.score(&reading);
//! let adjustment = feeding_adjustment(&reading, score);
//! assert!((0.0..=1.0).contains(&score));
//! assert!((-40.0..=15.0).contains(&adjustment));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod aerator;
pub mod constants;
pub mod environment;
pub mod errors;
pub mod feeding;
pub mod forecast;
pub mod metrics;
pub mod reading;
pub mod rules;
pub mod stats;
pub mod thresholds;

// Public API
pub use aerator::{
    aerator_recommendation, AeratorAction, AeratorImpact, AeratorReason, AeratorRecommendation,
    AeratorUrgency,
};
pub use environment::{environment_score, EnvironmentScorer, PenaltyBreakdown};
pub use errors::{ScoringError, ScoringResult};
pub use feeding::{
    feeding_adjustment, FeedingAction, FeedingAdjuster, FeedingAdvisor, FeedingReason,
    FeedingRecommendation,
};
pub use forecast::{forecast, Forecast, ForecastModel, ForecastParameter};
pub use metrics::{feed_conversion_ratio, feed_waste_ratio, FeedMetrics};
pub use reading::{Checkable, SensorReading};
pub use stats::{mean, trend, variance};
pub use thresholds::ThresholdSet;

/// Crate version, as reported to hosts
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
