//! Feeding Adjustment Tiers and Rate Limits
//!
//! The adjustment is a percentage applied to a baseline feeding rate. Tier
//! boundaries here are fixed farm policy and do not follow the caller's
//! `ThresholdSet`; only the environment score carries the site-specific view.

// ===== ADJUSTMENT BOUNDS =====

/// Largest cut applied in one recommendation (%).
///
/// Cutting more than 40% at once starves the stronger feeders.
pub const ADJUSTMENT_MIN_PCT: f32 = -40.0;

/// Largest increase applied in one recommendation (%).
pub const ADJUSTMENT_MAX_PCT: f32 = 15.0;

// ===== ENVIRONMENT SCORE TIERS =====

/// Environment score below which feeding is cut hard.
pub const ENV_SCORE_POOR: f32 = 0.5;

/// Environment score below which feeding is cut moderately.
pub const ENV_SCORE_FAIR: f32 = 0.7;

/// Environment score above which a small increase is allowed.
pub const ENV_SCORE_EXCELLENT: f32 = 0.9;

/// Delta for a poor environment (%).
pub const ENV_POOR_DELTA_PCT: f32 = -30.0;

/// Delta for a fair environment (%).
pub const ENV_FAIR_DELTA_PCT: f32 = -15.0;

/// Delta for an excellent environment (%).
pub const ENV_EXCELLENT_DELTA_PCT: f32 = 5.0;

// ===== DISSOLVED OXYGEN TIERS =====

/// Dissolved oxygen hard-cut boundary (mg/L).
pub const DO_LOW_MGL: f32 = 5.5;

/// Dissolved oxygen soft-cut boundary (mg/L).
pub const DO_MARGINAL_MGL: f32 = 6.0;

/// Delta for low dissolved oxygen (%).
pub const DO_LOW_DELTA_PCT: f32 = -20.0;

/// Delta for marginal dissolved oxygen (%).
pub const DO_MARGINAL_DELTA_PCT: f32 = -10.0;

// ===== TURBIDITY TIERS =====

/// Turbidity hard-cut boundary (NTU).
pub const TURBIDITY_HIGH_NTU: f32 = 30.0;

/// Turbidity soft-cut boundary (NTU).
pub const TURBIDITY_ELEVATED_NTU: f32 = 25.0;

/// Delta for high turbidity (%).
pub const TURBIDITY_HIGH_DELTA_PCT: f32 = -15.0;

/// Delta for elevated turbidity (%).
pub const TURBIDITY_ELEVATED_DELTA_PCT: f32 = -8.0;

// ===== AMMONIA TIERS =====

/// Ammonia hard-cut boundary (mg/L).
pub const AMMONIA_HIGH_MGL: f32 = 0.4;

/// Ammonia soft-cut boundary (mg/L).
pub const AMMONIA_ELEVATED_MGL: f32 = 0.25;

/// Delta for high ammonia (%).
pub const AMMONIA_HIGH_DELTA_PCT: f32 = -20.0;

/// Delta for elevated ammonia (%).
pub const AMMONIA_ELEVATED_DELTA_PCT: f32 = -10.0;

// ===== ACTIVITY TIERS =====

/// Activity index below which fish are considered sluggish.
pub const ACTIVITY_LOW: f32 = 0.6;

/// Activity index above which fish are feeding aggressively.
pub const ACTIVITY_HIGH: f32 = 0.85;

/// Delta for sluggish fish (%).
pub const ACTIVITY_LOW_DELTA_PCT: f32 = -12.0;

/// Delta for active fish (%).
pub const ACTIVITY_HIGH_DELTA_PCT: f32 = 5.0;

// ===== TEMPERATURE TIER =====

/// Lower edge of the feeding temperature band (°C).
pub const TEMP_LOW_C: f32 = 24.0;

/// Upper edge of the feeding temperature band (°C).
pub const TEMP_HIGH_C: f32 = 31.0;

/// Delta outside the feeding temperature band (%).
pub const TEMP_OUT_OF_BAND_DELTA_PCT: f32 = -10.0;

// ===== FEEDING RATE =====

/// Baseline feeding rate before adjustment (g/min).
pub const BASELINE_FEEDING_RATE_GMIN: f32 = 280.0;

/// Lowest rate a feeder is driven at (g/min).
pub const FEEDING_RATE_MIN_GMIN: f32 = 100.0;

/// Highest rate a feeder is driven at (g/min).
pub const FEEDING_RATE_MAX_GMIN: f32 = 400.0;

// ===== RECOMMENDATION REASONS =====
// Reason triggers are looser than the adjustment tiers: they explain a cut
// a little before it bites.

/// Environment score that is reported as poor water quality.
pub const REASON_ENV_SCORE_BELOW: f32 = 0.6;

/// Dissolved oxygen reported as low (mg/L).
pub const REASON_DO_BELOW_MGL: f32 = 6.0;

/// Turbidity reported as feed waste (NTU).
pub const REASON_TURBIDITY_ABOVE_NTU: f32 = 28.0;

/// Ammonia reported as elevated (mg/L).
pub const REASON_AMMONIA_ABOVE_MGL: f32 = 0.3;

/// Activity reported as reduced.
pub const REASON_ACTIVITY_BELOW: f32 = 0.65;

/// Adjustment below which the action is a full reduction (%).
pub const REDUCE_ACTION_BELOW_PCT: f32 = -15.0;

// ===== FEED METRICS =====

/// Samples required before FCR is estimated from history.
pub const FCR_MIN_SAMPLES: usize = 24;

/// FCR assumed for a pond without enough history.
pub const FCR_DEFAULT: f32 = 1.5;

/// Lowest FCR reported.
pub const FCR_MIN: f32 = 1.1;

/// Highest FCR reported.
pub const FCR_MAX: f32 = 2.2;

/// Samples required before waste ratio is estimated from history.
pub const WASTE_MIN_SAMPLES: usize = 12;

/// Waste ratio assumed for a pond without enough history (%).
pub const WASTE_DEFAULT_PCT: f32 = 15.0;

/// Highest waste ratio reported (%).
pub const WASTE_MAX_PCT: f32 = 35.0;

/// Waste that is never recovered, even in clear water (%).
pub const WASTE_FLOOR_PCT: f32 = 5.0;

/// Energy cost per kg of FCR (currency units).
pub const ENERGY_COST_PER_FCR: f32 = 0.45;

/// Energy cost per unit of waste fraction (currency units).
pub const ENERGY_COST_PER_WASTE: f32 = 0.20;
