//! Environment Score Penalties
//!
//! Deductions from a perfect score of 1.0. Each dimension has at most two
//! tiers; the critical tier replaces the warning tier, it does not add to it.
//!
//! ```text
//! Dimension      Critical   Warning
//! DO             0.40       0.25
//! pH             0.25       0.15
//! Turbidity      0.20       0.15
//! Ammonia        0.30       0.20
//! Temperature    0.10       -
//! Activity       0.15       -
//! ```
//!
//! Worst case sums to 1.40, so a fully degraded pond clamps to 0.0.

/// Score of a pond with no penalties.
pub const PERFECT_SCORE: f32 = 1.0;

/// Lowest possible environment score.
pub const WORST_SCORE: f32 = 0.0;

/// Dissolved oxygen below critical minimum.
pub const DO_CRITICAL_PENALTY: f32 = 0.40;

/// Dissolved oxygen below warning minimum.
pub const DO_WARNING_PENALTY: f32 = 0.25;

/// pH outside the critical band.
pub const PH_CRITICAL_PENALTY: f32 = 0.25;

/// pH outside the preferred band.
pub const PH_WARNING_PENALTY: f32 = 0.15;

/// Turbidity above critical maximum.
pub const TURBIDITY_CRITICAL_PENALTY: f32 = 0.20;

/// Turbidity above warning maximum.
pub const TURBIDITY_WARNING_PENALTY: f32 = 0.15;

/// Ammonia above critical maximum.
pub const AMMONIA_CRITICAL_PENALTY: f32 = 0.30;

/// Ammonia above warning maximum.
pub const AMMONIA_WARNING_PENALTY: f32 = 0.20;

/// Temperature outside the feeding band.
pub const TEMPERATURE_PENALTY: f32 = 0.10;

/// Fish activity below minimum.
pub const ACTIVITY_PENALTY: f32 = 0.15;
