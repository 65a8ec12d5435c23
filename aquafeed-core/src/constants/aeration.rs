//! Aerator Control Limits
//!
//! Limits for switching a paddlewheel aerator. Turning on is decided against
//! absolute DO and ammonia levels plus the recent DO change; turning off needs
//! a clear surplus of oxygen, so the two sides are deliberately asymmetric.

// ===== DO CHANGE WINDOW =====

/// Samples used for the recent DO change (last minus first).
pub const DO_CHANGE_WINDOW: usize = 10;

/// DO change below which the pond counts as stable (mg/L, absolute).
pub const DO_STABLE_BAND_MGL: f32 = 0.3;

// ===== TURN-ON LIMITS =====

/// DO below which aeration is urgent (mg/L).
pub const DO_CRITICAL_MGL: f32 = 5.5;

/// Ammonia above which circulation is urgent (mg/L).
pub const AMMONIA_DANGER_MGL: f32 = 0.1;

/// DO below which a falling trend triggers preventive aeration (mg/L).
pub const DO_DECLINE_WATCH_MGL: f32 = 6.2;

/// DO change over the window that counts as a decline (mg/L).
pub const DO_DECLINE_CHANGE_MGL: f32 = -0.15;

/// DO below which elevated ammonia triggers aeration (mg/L).
pub const DO_SUBOPTIMAL_MGL: f32 = 6.5;

/// Ammonia above which it counts as elevated (mg/L).
pub const AMMONIA_ELEVATED_MGL: f32 = 0.05;

/// DO gain expected within 30 minutes of switching on (mg/L).
pub const EXPECTED_DO_RISE_MGL: f32 = 1.5;

// ===== TURN-OFF LIMITS =====

/// DO above which a stable pond can run without aeration (mg/L).
pub const DO_TARGET_MGL: f32 = 6.5;

/// Water temperature below which shutting off is safe (°C).
///
/// Warm water holds less oxygen and loses it faster overnight.
pub const SHUTOFF_TEMP_MAX_C: f32 = 29.0;

/// DO above which aeration is surplus regardless of trend (mg/L).
pub const DO_SURPLUS_MGL: f32 = 7.0;

/// Ammonia below which it counts as minimal (mg/L).
pub const AMMONIA_MINIMAL_MGL: f32 = 0.03;

// ===== CONFIDENCE =====

/// Confidence for critical DO (%).
pub const CONFIDENCE_CRITICAL_DO: u8 = 95;

/// Confidence for dangerous ammonia (%).
pub const CONFIDENCE_DANGEROUS_AMMONIA: u8 = 92;

/// Confidence for a DO decline (%).
pub const CONFIDENCE_DO_DECLINE: u8 = 88;

/// Confidence for combined sub-optimal DO and ammonia (%).
pub const CONFIDENCE_SUBOPTIMAL: u8 = 82;

/// Confidence for shutting off a stable pond (%).
pub const CONFIDENCE_STABLE_SHUTOFF: u8 = 88;

/// Confidence for shutting off on DO surplus (%).
pub const CONFIDENCE_SURPLUS_SHUTOFF: u8 = 82;

/// Confidence for keeping the current state (%).
pub const CONFIDENCE_MAINTAIN: u8 = 75;
