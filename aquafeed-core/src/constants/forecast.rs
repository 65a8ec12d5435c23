//! Forecast Windows and Model Coefficients
//!
//! Hourly samples are assumed: a 24-sample window is one day of history and
//! one forecast step is one hour.

/// Samples used for trend and variance.
pub const FORECAST_WINDOW: usize = 24;

/// Samples used for the recent feeding-rate average.
pub const FEEDING_WINDOW: usize = 6;

/// Longest horizon produced (hours).
pub const MAX_FORECAST_HOURS: usize = 12;

/// Parameters forecast per hour.
pub const FORECAST_PARAMETERS: usize = 3;

/// Capacity of a forecast result.
pub const MAX_FORECAST_POINTS: usize = MAX_FORECAST_HOURS * FORECAST_PARAMETERS;

/// Horizon over which environmental effects are fully applied (hours).
pub const EFFECT_HORIZON_HOURS: f32 = 6.0;

// ===== DISSOLVED OXYGEN =====

/// Temperature at which warming stops lowering DO (°C).
pub const DO_REFERENCE_TEMP_C: f32 = 30.0;

/// DO gained per °C below the reference temperature.
pub const DO_TEMP_COEFF: f32 = 0.1;

/// Turbidity at which suspended load stops lowering DO (NTU).
pub const DO_REFERENCE_TURBIDITY_NTU: f32 = 25.0;

/// DO gained per NTU below the reference turbidity.
pub const DO_TURBIDITY_COEFF: f32 = 0.03;

/// Forecast DO range (mg/L).
pub const DO_FORECAST_MIN_MGL: f32 = 3.0;
/// Forecast DO range (mg/L).
pub const DO_FORECAST_MAX_MGL: f32 = 10.0;

/// Base confidence of the DO model.
pub const DO_CONFIDENCE_BASE: f32 = 0.92;
/// Confidence lost per unit of DO variance.
pub const DO_CONFIDENCE_VARIANCE_COEFF: f32 = 0.1;
/// Confidence lost per hour ahead.
pub const DO_CONFIDENCE_HOUR_COEFF: f32 = 0.02;
/// Confidence range of the DO model.
pub const DO_CONFIDENCE_MIN: f32 = 0.75;
/// Confidence range of the DO model.
pub const DO_CONFIDENCE_MAX: f32 = 0.95;

// ===== pH =====

/// Average ammonia above which nitrification acidifies the pond (mg/L).
pub const PH_AMMONIA_TRIGGER_MGL: f32 = 0.3;

/// pH drop over the effect horizon when ammonia is high.
pub const PH_AMMONIA_DROP: f32 = -0.2;

/// Forecast pH range.
pub const PH_FORECAST_MIN: f32 = 6.0;
/// Forecast pH range.
pub const PH_FORECAST_MAX: f32 = 9.5;

/// Base confidence of the pH model.
pub const PH_CONFIDENCE_BASE: f32 = 0.90;
/// Confidence lost per unit of pH variance.
pub const PH_CONFIDENCE_VARIANCE_COEFF: f32 = 0.08;
/// Confidence lost per hour ahead.
pub const PH_CONFIDENCE_HOUR_COEFF: f32 = 0.015;
/// Confidence range of the pH model.
pub const PH_CONFIDENCE_MIN: f32 = 0.80;
/// Confidence range of the pH model.
pub const PH_CONFIDENCE_MAX: f32 = 0.95;

// ===== TURBIDITY =====

/// Feeding rate at which feed neither adds nor removes turbidity (g/min).
pub const TURBIDITY_REFERENCE_FEED_GMIN: f32 = 250.0;

/// NTU added per g/min above the reference rate.
pub const TURBIDITY_FEED_COEFF: f32 = 0.02;

/// NTU settled per hour.
pub const TURBIDITY_SETTLING_PER_HOUR: f32 = 0.5;

/// Base confidence of the turbidity model.
pub const TURBIDITY_CONFIDENCE_BASE: f32 = 0.88;
/// Confidence lost per unit of turbidity variance.
pub const TURBIDITY_CONFIDENCE_VARIANCE_COEFF: f32 = 0.05;
/// Confidence lost per hour ahead.
pub const TURBIDITY_CONFIDENCE_HOUR_COEFF: f32 = 0.018;
/// Confidence range of the turbidity model.
pub const TURBIDITY_CONFIDENCE_MIN: f32 = 0.78;
/// Confidence range of the turbidity model.
pub const TURBIDITY_CONFIDENCE_MAX: f32 = 0.92;
