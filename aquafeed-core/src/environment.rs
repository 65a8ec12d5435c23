//! Environment Quality Scorer
//!
//! ## Overview
//!
//! Reduces one [`SensorReading`] to a single number in `[0, 1]` describing how
//! favorable the pond is for feeding right now. The score starts at 1.0 and
//! each monitored dimension deducts a penalty when its reading leaves the band
//! set by the caller's [`ThresholdSet`].
//!
//! ## Penalty Tiers
//!
//! ```text
//! Dimension      Critical                          Warning
//! DO             < do_crit_min          0.40       < do_min               0.25
//! pH             outside crit band      0.25       outside pref band      0.15
//! Turbidity      > turb_crit_max        0.20       > turb_max             0.15
//! Ammonia        > ammo_crit_max        0.30       > ammo_max             0.20
//! Temperature    outside temp band      0.10
//! Activity       < activity_min         0.15
//! ```
//!
//! Within a dimension the critical tier is checked first and shadows the
//! warning tier. Across dimensions penalties add, and the total is clamped to
//! `[0, 1]` only at the end.
//!
//! ## Fail-Closed Thresholds
//!
//! The flat entry point [`environment_score`] takes thresholds as an optional
//! positional buffer. A missing or short buffer scores `0.0`: a misconfigured
//! host then cuts feeding instead of overfeeding a pond nobody is watching.

use crate::{
    constants::penalties::*,
    reading::SensorReading,
    rules::{Condition, Tier, TieredRule},
    thresholds::ThresholdSet,
};

/// Per-dimension penalties for one reading, after tier selection
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PenaltyBreakdown {
    /// Dissolved oxygen penalty
    pub dissolved_oxygen: f32,
    /// pH penalty
    pub ph: f32,
    /// Turbidity penalty
    pub turbidity: f32,
    /// Ammonia penalty
    pub ammonia: f32,
    /// Temperature penalty
    pub temperature: f32,
    /// Fish activity penalty
    pub activity: f32,
}

impl PenaltyBreakdown {
    /// Sum of all penalties, before clamping
    pub fn total(&self) -> f32 {
        self.dissolved_oxygen
            + self.ph
            + self.turbidity
            + self.ammonia
            + self.temperature
            + self.activity
    }

    /// Score these penalties produce
    pub fn score(&self) -> f32 {
        // Subtract in dimension order so the f32 result is reproducible
        let mut score = PERFECT_SCORE;
        score -= self.dissolved_oxygen;
        score -= self.ph;
        score -= self.turbidity;
        score -= self.ammonia;
        score -= self.temperature;
        score -= self.activity;
        score.clamp(WORST_SCORE, PERFECT_SCORE)
    }
}

/// Scores readings against a fixed threshold set
#[derive(Debug, Clone)]
pub struct EnvironmentScorer {
    thresholds: ThresholdSet,
    dissolved_oxygen: TieredRule<2>,
    ph: TieredRule<2>,
    turbidity: TieredRule<2>,
    ammonia: TieredRule<2>,
    temperature: TieredRule<1>,
    activity: TieredRule<1>,
}

impl Default for EnvironmentScorer {
    fn default() -> Self {
        Self::new(ThresholdSet::default())
    }
}

impl EnvironmentScorer {
    /// Build the tier rules for a threshold set
    pub fn new(t: ThresholdSet) -> Self {
        Self {
            thresholds: t,
            dissolved_oxygen: TieredRule::new([
                Tier::new(Condition::Below(t.do_crit_min), DO_CRITICAL_PENALTY),
                Tier::new(Condition::Below(t.do_min), DO_WARNING_PENALTY),
            ]),
            ph: TieredRule::new([
                Tier::new(
                    Condition::Outside { low: t.ph_crit_min, high: t.ph_crit_max },
                    PH_CRITICAL_PENALTY,
                ),
                Tier::new(
                    Condition::Outside { low: t.ph_min, high: t.ph_max },
                    PH_WARNING_PENALTY,
                ),
            ]),
            turbidity: TieredRule::new([
                Tier::new(Condition::Above(t.turb_crit_max), TURBIDITY_CRITICAL_PENALTY),
                Tier::new(Condition::Above(t.turb_max), TURBIDITY_WARNING_PENALTY),
            ]),
            ammonia: TieredRule::new([
                Tier::new(Condition::Above(t.ammo_crit_max), AMMONIA_CRITICAL_PENALTY),
                Tier::new(Condition::Above(t.ammo_max), AMMONIA_WARNING_PENALTY),
            ]),
            temperature: TieredRule::new([Tier::new(
                Condition::Outside { low: t.temp_min, high: t.temp_max },
                TEMPERATURE_PENALTY,
            )]),
            activity: TieredRule::new([Tier::new(
                Condition::Below(t.activity_min),
                ACTIVITY_PENALTY,
            )]),
        }
    }

    /// Thresholds this scorer was built with
    pub fn thresholds(&self) -> &ThresholdSet {
        &self.thresholds
    }

    /// Penalty charged by each dimension
    pub fn breakdown(&self, reading: &SensorReading) -> PenaltyBreakdown {
        PenaltyBreakdown {
            dissolved_oxygen: self.dissolved_oxygen.evaluate(reading.dissolved_oxygen_mgl),
            ph: self.ph.evaluate(reading.ph),
            turbidity: self.turbidity.evaluate(reading.turbidity_ntu),
            ammonia: self.ammonia.evaluate(reading.ammonia_mgl),
            temperature: self.temperature.evaluate(reading.temperature_c),
            activity: self.activity.evaluate(reading.fish_activity_index),
        }
    }

    /// Environment score in `[0, 1]`
    pub fn score(&self, reading: &SensorReading) -> f32 {
        self.breakdown(reading).score()
    }
}

/// Score a reading against a positional threshold buffer
///
/// Returns `0.0` when `thresholds` is `None` or holds fewer than 13 values.
pub fn environment_score(reading: &SensorReading, thresholds: Option<&[f32]>) -> f32 {
    let Some(values) = thresholds else {
        log_warn!("Environment score: no thresholds supplied, scoring 0.0");
        return WORST_SCORE;
    };

    match ThresholdSet::from_slice(values) {
        Ok(set) => EnvironmentScorer::new(set).score(reading),
        Err(_err) => {
            log_warn!("Environment score: {}, scoring 0.0", _err);
            WORST_SCORE
        }
    }
}
