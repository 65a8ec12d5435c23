//! Water-Quality Thresholds
//!
//! Default operating limits for a tropical grow-out pond (shrimp or tilapia).
//! These values seed `ThresholdSet::default()`; a host running a different
//! species should supply its own set.

/// Number of positional values in a flat threshold buffer.
pub const THRESHOLD_COUNT: usize = 13;

// ===== DISSOLVED OXYGEN =====

/// Dissolved oxygen below which feeding response drops (mg/L).
///
/// Appetite and feed conversion fall off under ~6 mg/L.
pub const DO_MIN_MGL: f32 = 6.0;

/// Dissolved oxygen below which stock is at risk (mg/L).
///
/// Below 5 mg/L uneaten feed adds oxygen demand the pond cannot absorb.
pub const DO_CRIT_MIN_MGL: f32 = 5.0;

// ===== pH =====

/// Lower bound of the preferred pH band.
pub const PH_MIN: f32 = 7.5;

/// Upper bound of the preferred pH band.
pub const PH_MAX: f32 = 8.5;

/// Critical acidic limit.
pub const PH_CRIT_MIN: f32 = 6.5;

/// Critical alkaline limit.
///
/// Free ammonia fraction climbs steeply above pH 8.8.
pub const PH_CRIT_MAX: f32 = 8.8;

// ===== TURBIDITY =====

/// Turbidity above which uneaten feed is suspected (NTU).
pub const TURBIDITY_MAX_NTU: f32 = 25.0;

/// Turbidity above which feeding should be cut hard (NTU).
pub const TURBIDITY_CRIT_MAX_NTU: f32 = 30.0;

// ===== AMMONIA =====

/// Total ammonia nitrogen warning level (mg/L).
pub const AMMONIA_MAX_MGL: f32 = 0.25;

/// Total ammonia nitrogen critical level (mg/L).
pub const AMMONIA_CRIT_MAX_MGL: f32 = 0.5;

// ===== TEMPERATURE =====

/// Lower bound of the feeding temperature band (°C).
pub const TEMP_MIN_C: f32 = 24.0;

/// Upper bound of the feeding temperature band (°C).
pub const TEMP_MAX_C: f32 = 31.0;

// ===== FISH ACTIVITY =====

/// Minimum fish activity index for normal feeding (0.0-1.0).
///
/// Derived from camera or hydroacoustic activity sensing.
pub const ACTIVITY_MIN: f32 = 0.6;
