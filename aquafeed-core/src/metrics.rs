//! Feed Metrics
//!
//! Rough feed-efficiency estimates from a window of recent readings. Neither
//! metric measures feed directly; both infer it from how the pond responds.
//!
//! - **FCR** (feed conversion ratio, kg feed per kg gain) improves with active
//!   fish and good oxygen and pH.
//! - **Waste ratio** (% of feed uneaten) rises with turbidity and ammonia, the
//!   two things uneaten pellets produce as they break down.
//!
//! Short windows return farm defaults instead of extrapolating from a handful
//! of samples.

use crate::{constants::feeding::*, reading::SensorReading, stats::round_hundredths};

const FCR_ACTIVITY_REFERENCE: f32 = 0.7;
const FCR_ACTIVITY_WEIGHT: f32 = 0.5;
const FCR_QUALITY_REFERENCE: f32 = 0.8;
const FCR_QUALITY_WEIGHT: f32 = 0.3;

const DO_GOOD_MGL: f32 = 6.0;
const DO_POOR_SCORE: f32 = 0.7;
const PH_GOOD_MIN: f32 = 7.5;
const PH_GOOD_MAX: f32 = 8.5;
const PH_POOR_SCORE: f32 = 0.8;

const WASTE_TURBIDITY_BASE_NTU: f32 = 15.0;
const WASTE_TURBIDITY_WEIGHT: f32 = 0.8;
const WASTE_AMMONIA_BASE_MGL: f32 = 0.15;
const WASTE_AMMONIA_WEIGHT: f32 = 20.0;

fn average(history: &[SensorReading], field: impl Fn(&SensorReading) -> f32) -> f32 {
    if history.is_empty() {
        return 0.0;
    }
    let sum: f64 = history.iter().map(|r| field(r) as f64).sum();
    (sum / history.len() as f64) as f32
}

fn water_quality(reading: &SensorReading) -> f32 {
    let do_score = if reading.dissolved_oxygen_mgl >= DO_GOOD_MGL {
        1.0
    } else {
        DO_POOR_SCORE
    };
    let ph_score = if reading.ph >= PH_GOOD_MIN && reading.ph <= PH_GOOD_MAX {
        1.0
    } else {
        PH_POOR_SCORE
    };
    (do_score + ph_score) / 2.0
}

/// Estimated feed conversion ratio over `history`
///
/// [`FCR_DEFAULT`] below [`FCR_MIN_SAMPLES`] samples, otherwise clamped to
/// `[FCR_MIN, FCR_MAX]`.
pub fn feed_conversion_ratio(history: &[SensorReading]) -> f32 {
    if history.len() < FCR_MIN_SAMPLES {
        return FCR_DEFAULT;
    }

    let avg_activity = average(history, |r| r.fish_activity_index);
    let avg_quality = average(history, water_quality);

    let activity_bonus = (avg_activity - FCR_ACTIVITY_REFERENCE) * FCR_ACTIVITY_WEIGHT;
    let quality_bonus = (avg_quality - FCR_QUALITY_REFERENCE) * FCR_QUALITY_WEIGHT;

    (FCR_DEFAULT - activity_bonus - quality_bonus).clamp(FCR_MIN, FCR_MAX)
}

/// Estimated feed waste over `history`, in percent
///
/// [`WASTE_DEFAULT_PCT`] below [`WASTE_MIN_SAMPLES`] samples, otherwise capped
/// at [`WASTE_MAX_PCT`].
pub fn feed_waste_ratio(history: &[SensorReading]) -> f32 {
    if history.len() < WASTE_MIN_SAMPLES {
        return WASTE_DEFAULT_PCT;
    }

    let avg_turbidity = average(history, |r| r.turbidity_ntu);
    let avg_ammonia = average(history, |r| r.ammonia_mgl);

    let turbidity_waste =
        ((avg_turbidity - WASTE_TURBIDITY_BASE_NTU) * WASTE_TURBIDITY_WEIGHT).max(0.0);
    let ammonia_waste = ((avg_ammonia - WASTE_AMMONIA_BASE_MGL) * WASTE_AMMONIA_WEIGHT).max(0.0);

    (turbidity_waste + ammonia_waste + WASTE_FLOOR_PCT).min(WASTE_MAX_PCT)
}

/// Feed efficiency summary for a reporting window
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeedMetrics {
    /// Feed conversion ratio
    pub avg_fcr: f32,
    /// Feed waste (%)
    pub avg_waste_ratio: f32,
    /// Energy cost per kg of biomass produced
    pub energy_cost_per_kg: f32,
    /// Share of feed eaten (%)
    pub feed_efficiency: f32,
}

impl FeedMetrics {
    /// Summarize a history window, every figure rounded to two decimals
    pub fn from_history(history: &[SensorReading]) -> Self {
        let fcr = feed_conversion_ratio(history);
        let waste = feed_waste_ratio(history);
        let energy_cost = fcr * ENERGY_COST_PER_FCR + (waste / 100.0) * ENERGY_COST_PER_WASTE;
        let efficiency = (100.0 - waste).max(0.0);

        Self {
            avg_fcr: round_hundredths(fcr),
            avg_waste_ratio: round_hundredths(waste),
            energy_cost_per_kg: round_hundredths(energy_cost),
            feed_efficiency: round_hundredths(efficiency),
        }
    }
}
