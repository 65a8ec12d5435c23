//! Feeding Adjustment and Recommendation
//!
//! ## Adjustment
//!
//! [`FeedingAdjuster`] maps the environment score plus five raw readings to a
//! percentage change of the baseline feeding rate. Each dimension is a tiered
//! rule (first match wins), all dimensions add, and the sum is clamped to
//! `[-40, +15]`:
//!
//! ```text
//! Env score     < 0.5 → -30    < 0.7 → -15    > 0.9 → +5
//! DO (mg/L)     < 5.5 → -20    < 6.0 → -10
//! Turbidity     > 30  → -15    > 25  → -8
//! Ammonia       > 0.4 → -20    > 0.25 → -10
//! Activity      < 0.6 → -12    > 0.85 → +5
//! Temperature   outside 24-31 °C → -10
//! ```
//!
//! The boundaries are farm policy, not site thresholds: the same DO reading
//! cuts feeding by the same amount whatever `ThresholdSet` the environment
//! score was computed with.
//!
//! ## Recommendation
//!
//! [`FeedingAdvisor`] turns the adjustment into an absolute feeder rate and
//! attaches the reasons an operator would want to see next to it.

use core::fmt;

use heapless::Vec;

use crate::{
    constants::feeding::*,
    environment::EnvironmentScorer,
    metrics::{feed_conversion_ratio, feed_waste_ratio},
    reading::SensorReading,
    rules::{Condition, Tier, TieredRule},
    stats::round_hundredths,
};

const ENV_SCORE_RULE: TieredRule<3> = TieredRule::new([
    Tier::new(Condition::Below(ENV_SCORE_POOR), ENV_POOR_DELTA_PCT),
    Tier::new(Condition::Below(ENV_SCORE_FAIR), ENV_FAIR_DELTA_PCT),
    Tier::new(Condition::Above(ENV_SCORE_EXCELLENT), ENV_EXCELLENT_DELTA_PCT),
]);

const DO_RULE: TieredRule<2> = TieredRule::new([
    Tier::new(Condition::Below(DO_LOW_MGL), DO_LOW_DELTA_PCT),
    Tier::new(Condition::Below(DO_MARGINAL_MGL), DO_MARGINAL_DELTA_PCT),
]);

const TURBIDITY_RULE: TieredRule<2> = TieredRule::new([
    Tier::new(Condition::Above(TURBIDITY_HIGH_NTU), TURBIDITY_HIGH_DELTA_PCT),
    Tier::new(Condition::Above(TURBIDITY_ELEVATED_NTU), TURBIDITY_ELEVATED_DELTA_PCT),
]);

const AMMONIA_RULE: TieredRule<2> = TieredRule::new([
    Tier::new(Condition::Above(AMMONIA_HIGH_MGL), AMMONIA_HIGH_DELTA_PCT),
    Tier::new(Condition::Above(AMMONIA_ELEVATED_MGL), AMMONIA_ELEVATED_DELTA_PCT),
]);

const ACTIVITY_RULE: TieredRule<2> = TieredRule::new([
    Tier::new(Condition::Below(ACTIVITY_LOW), ACTIVITY_LOW_DELTA_PCT),
    Tier::new(Condition::Above(ACTIVITY_HIGH), ACTIVITY_HIGH_DELTA_PCT),
]);

const TEMPERATURE_RULE: TieredRule<1> = TieredRule::new([Tier::new(
    Condition::Outside { low: TEMP_LOW_C, high: TEMP_HIGH_C },
    TEMP_OUT_OF_BAND_DELTA_PCT,
)]);

/// Feeding-rate percentage adjustment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedingAdjuster;

impl FeedingAdjuster {
    /// Create an adjuster using the farm feeding policy
    pub const fn new() -> Self {
        Self
    }

    /// Adjustment (%) from flat readings, clamped to `[-40, 15]`
    pub fn adjust(
        &self,
        dissolved_oxygen_mgl: f32,
        turbidity_ntu: f32,
        ammonia_mgl: f32,
        fish_activity_index: f32,
        temperature_c: f32,
        env_score: f32,
    ) -> f32 {
        let mut adjustment = 0.0f32;
        adjustment += ENV_SCORE_RULE.evaluate(env_score);
        adjustment += DO_RULE.evaluate(dissolved_oxygen_mgl);
        adjustment += TURBIDITY_RULE.evaluate(turbidity_ntu);
        adjustment += AMMONIA_RULE.evaluate(ammonia_mgl);
        adjustment += ACTIVITY_RULE.evaluate(fish_activity_index);
        adjustment += TEMPERATURE_RULE.evaluate(temperature_c);

        adjustment.clamp(ADJUSTMENT_MIN_PCT, ADJUSTMENT_MAX_PCT)
    }

    /// Adjustment (%) for a reading and its environment score
    pub fn adjust_reading(&self, reading: &SensorReading, env_score: f32) -> f32 {
        self.adjust(
            reading.dissolved_oxygen_mgl,
            reading.turbidity_ntu,
            reading.ammonia_mgl,
            reading.fish_activity_index,
            reading.temperature_c,
            env_score,
        )
    }
}

/// Feeding-rate adjustment (%) for a reading, clamped to `[-40, 15]`
pub fn feeding_adjustment(reading: &SensorReading, env_score: f32) -> f32 {
    FeedingAdjuster::new().adjust_reading(reading, env_score)
}

/// Why a recommendation departs from the baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeedingReason {
    /// Environment score below 0.6
    PoorWaterQuality,
    /// DO below 6.0 mg/L
    LowDissolvedOxygen,
    /// Turbidity above 28 NTU
    HighTurbidity,
    /// Ammonia above 0.3 mg/L
    ElevatedAmmonia,
    /// Activity index below 0.65
    ReducedActivity,
    /// Temperature outside 24-31 °C
    SuboptimalTemperature,
}

/// Number of distinct [`FeedingReason`]s
pub const MAX_FEEDING_REASONS: usize = 6;

impl fmt::Display for FeedingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::PoorWaterQuality => "Poor water quality conditions",
            Self::LowDissolvedOxygen => "Low dissolved oxygen levels",
            Self::HighTurbidity => "High turbidity indicating feed waste",
            Self::ElevatedAmmonia => "Elevated ammonia levels",
            Self::ReducedActivity => "Reduced fish activity",
            Self::SuboptimalTemperature => "Suboptimal temperature",
        };
        f.write_str(text)
    }
}

/// What the operator should do with the feeder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeedingAction {
    /// Conditions are good, feed a little more
    IncreaseSlightly,
    /// Keep the current rate
    Maintain,
    /// Small cut with no single condition to blame
    PreventiveReduce,
    /// Small cut driven by one or more conditions
    ReduceSlightly,
    /// Cut of more than 15%
    Reduce,
}

impl FeedingAction {
    fn from_adjustment(adjustment: f32, has_reasons: bool) -> Self {
        if has_reasons {
            if adjustment < REDUCE_ACTION_BELOW_PCT {
                Self::Reduce
            } else if adjustment < 0.0 {
                Self::ReduceSlightly
            } else {
                Self::Maintain
            }
        } else if adjustment > 0.0 {
            Self::IncreaseSlightly
        } else if adjustment == 0.0 {
            Self::Maintain
        } else {
            Self::PreventiveReduce
        }
    }
}

/// Recommended feeding rate with its justification
#[derive(Debug, Clone, PartialEq)]
pub struct FeedingRecommendation {
    /// Recommended feeder rate (g/min)
    pub recommended_rate_gmin: f32,
    /// Adjustment applied to the baseline (%)
    pub adjustment_percentage: f32,
    /// Environment score the adjustment was based on
    pub environment_score: f32,
    /// Feed conversion ratio over the supplied history
    pub feed_conversion_ratio: f32,
    /// Feed waste (%) over the supplied history
    pub feed_waste_ratio: f32,
    /// Conditions behind the adjustment, in fixed order
    pub reasons: Vec<FeedingReason, MAX_FEEDING_REASONS>,
    /// Operator action
    pub action: FeedingAction,
}

impl fmt::Display for FeedingRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reasons.is_empty() {
            let text = match self.action {
                FeedingAction::IncreaseSlightly => {
                    "Optimal feeding conditions - slight increase recommended"
                }
                FeedingAction::PreventiveReduce => "Preventive adjustment to maintain water quality",
                _ => "Environment stable - maintain current feeding rate",
            };
            return f.write_str(text);
        }

        let action = match self.action {
            FeedingAction::Reduce => "Reduce feeding",
            FeedingAction::ReduceSlightly => "Slightly reduce feeding",
            _ => "Maintain feeding",
        };
        write!(f, "{action} due to: ")?;
        for (i, reason) in self.reasons.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{reason}")?;
        }
        Ok(())
    }
}

/// Produces feeding recommendations around a baseline rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedingAdvisor {
    baseline_rate_gmin: f32,
    adjuster: FeedingAdjuster,
}

impl Default for FeedingAdvisor {
    fn default() -> Self {
        Self::with_baseline(BASELINE_FEEDING_RATE_GMIN)
    }
}

impl FeedingAdvisor {
    /// Advisor for a feeder with the given baseline rate (g/min)
    pub fn with_baseline(baseline_rate_gmin: f32) -> Self {
        Self {
            baseline_rate_gmin,
            adjuster: FeedingAdjuster::new(),
        }
    }

    /// Baseline rate (g/min)
    pub fn baseline_rate_gmin(&self) -> f32 {
        self.baseline_rate_gmin
    }

    /// Recommend a rate for `current`, with metrics over `history`
    pub fn recommend(
        &self,
        scorer: &EnvironmentScorer,
        current: &SensorReading,
        history: &[SensorReading],
    ) -> FeedingRecommendation {
        let env_score = scorer.score(current);
        let adjustment = self.adjuster.adjust_reading(current, env_score);
        let rate = (self.baseline_rate_gmin * (1.0 + adjustment / 100.0))
            .clamp(FEEDING_RATE_MIN_GMIN, FEEDING_RATE_MAX_GMIN);

        let reasons = reasons_for(current, env_score);
        let action = FeedingAction::from_adjustment(adjustment, !reasons.is_empty());

        FeedingRecommendation {
            recommended_rate_gmin: round_hundredths(rate),
            adjustment_percentage: round_hundredths(adjustment),
            environment_score: round_hundredths(env_score),
            feed_conversion_ratio: feed_conversion_ratio(history),
            feed_waste_ratio: feed_waste_ratio(history),
            reasons,
            action,
        }
    }
}

fn reasons_for(reading: &SensorReading, env_score: f32) -> Vec<FeedingReason, MAX_FEEDING_REASONS> {
    let checks = [
        (env_score < REASON_ENV_SCORE_BELOW, FeedingReason::PoorWaterQuality),
        (
            reading.dissolved_oxygen_mgl < REASON_DO_BELOW_MGL,
            FeedingReason::LowDissolvedOxygen,
        ),
        (
            reading.turbidity_ntu > REASON_TURBIDITY_ABOVE_NTU,
            FeedingReason::HighTurbidity,
        ),
        (
            reading.ammonia_mgl > REASON_AMMONIA_ABOVE_MGL,
            FeedingReason::ElevatedAmmonia,
        ),
        (
            reading.fish_activity_index < REASON_ACTIVITY_BELOW,
            FeedingReason::ReducedActivity,
        ),
        (
            TEMPERATURE_RULE.matched(reading.temperature_c).is_some(),
            FeedingReason::SuboptimalTemperature,
        ),
    ];

    checks
        .into_iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, reason)| reason)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calm() -> SensorReading {
        SensorReading::new(6.5, 7.8, 10.0, 0.1, 27.0, 0.9)
    }

    #[test]
    fn excellent_pond_gets_bonus() {
        // env bonus +5, activity bonus +5
        assert_eq!(feeding_adjustment(&calm(), 1.0), 10.0);
    }

    #[test]
    fn env_score_tiers() {
        let reading = SensorReading { fish_activity_index: 0.7, ..calm() };
        assert_eq!(feeding_adjustment(&reading, 0.4), -30.0);
        assert_eq!(feeding_adjustment(&reading, 0.6), -15.0);
        assert_eq!(feeding_adjustment(&reading, 0.8), 0.0);
        assert_eq!(feeding_adjustment(&reading, 0.95), 5.0);
        // Boundaries are strict
        assert_eq!(feeding_adjustment(&reading, 0.5), -15.0);
        assert_eq!(feeding_adjustment(&reading, 0.9), 0.0);
    }

    #[test]
    fn dimension_tiers_are_exclusive() {
        let adjuster = FeedingAdjuster::new();
        // DO 5.0 hits only the -20 tier, not -20 and -10
        assert_eq!(adjuster.adjust(5.0, 10.0, 0.1, 0.7, 27.0, 0.8), -20.0);
        assert_eq!(adjuster.adjust(5.8, 10.0, 0.1, 0.7, 27.0, 0.8), -10.0);
        assert_eq!(adjuster.adjust(6.5, 31.0, 0.1, 0.7, 27.0, 0.8), -15.0);
        assert_eq!(adjuster.adjust(6.5, 26.0, 0.1, 0.7, 27.0, 0.8), -8.0);
        assert_eq!(adjuster.adjust(6.5, 10.0, 0.5, 0.7, 27.0, 0.8), -20.0);
        assert_eq!(adjuster.adjust(6.5, 10.0, 0.3, 0.7, 27.0, 0.8), -10.0);
        assert_eq!(adjuster.adjust(6.5, 10.0, 0.1, 0.5, 27.0, 0.8), -12.0);
        assert_eq!(adjuster.adjust(6.5, 10.0, 0.1, 0.7, 23.0, 0.8), -10.0);
    }

    #[test]
    fn floor_clamp() {
        let awful = SensorReading::new(4.0, 5.0, 40.0, 1.0, 35.0, 0.1);
        assert_eq!(feeding_adjustment(&awful, 0.0), -40.0);
    }

    #[test]
    fn nan_skips_dimension() {
        let reading = SensorReading { dissolved_oxygen_mgl: f32::NAN, ..calm() };
        assert_eq!(feeding_adjustment(&reading, 1.0), 10.0);
        assert_eq!(feeding_adjustment(&calm(), f32::NAN), 5.0);
    }

    #[test]
    fn recommendation_in_good_conditions() {
        let scorer = EnvironmentScorer::default();
        let rec = FeedingAdvisor::default().recommend(&scorer, &calm(), &[]);

        assert_eq!(rec.environment_score, 1.0);
        assert_eq!(rec.adjustment_percentage, 10.0);
        assert_eq!(rec.recommended_rate_gmin, 308.0);
        assert!(rec.reasons.is_empty());
        assert_eq!(rec.action, FeedingAction::IncreaseSlightly);
        assert_eq!(rec.feed_conversion_ratio, FCR_DEFAULT);
        assert_eq!(rec.feed_waste_ratio, WASTE_DEFAULT_PCT);
    }

    #[test]
    fn recommendation_lists_reasons_in_order() {
        let scorer = EnvironmentScorer::default();
        let stressed = SensorReading::new(5.2, 7.8, 29.0, 0.35, 27.0, 0.62);
        let rec = FeedingAdvisor::default().recommend(&scorer, &stressed, &[]);

        assert_eq!(
            rec.reasons.as_slice(),
            &[
                FeedingReason::PoorWaterQuality,
                FeedingReason::LowDissolvedOxygen,
                FeedingReason::HighTurbidity,
                FeedingReason::ElevatedAmmonia,
                FeedingReason::ReducedActivity,
            ]
        );
        assert_eq!(rec.action, FeedingAction::Reduce);
        assert_eq!(rec.adjustment_percentage, -40.0);
        assert_eq!(rec.recommended_rate_gmin, 168.0);
    }

    #[test]
    fn rate_respects_feeder_limits() {
        let scorer = EnvironmentScorer::default();
        let rec = FeedingAdvisor::with_baseline(390.0).recommend(&scorer, &calm(), &[]);
        assert_eq!(rec.recommended_rate_gmin, FEEDING_RATE_MAX_GMIN);

        let awful = SensorReading::new(4.0, 5.0, 40.0, 1.0, 35.0, 0.1);
        let rec = FeedingAdvisor::with_baseline(120.0).recommend(&scorer, &awful, &[]);
        assert_eq!(rec.recommended_rate_gmin, FEEDING_RATE_MIN_GMIN);
    }

    #[cfg(feature = "std")]
    #[test]
    fn recommendation_text() {
        let scorer = EnvironmentScorer::default();
        let advisor = FeedingAdvisor::default();

        let rec = advisor.recommend(&scorer, &calm(), &[]);
        assert_eq!(
            rec.to_string(),
            "Optimal feeding conditions - slight increase recommended"
        );

        let cold = SensorReading { temperature_c: 22.0, fish_activity_index: 0.7, ..calm() };
        let rec = advisor.recommend(&scorer, &cold, &[]);
        assert_eq!(
            rec.to_string(),
            "Slightly reduce feeding due to: Suboptimal temperature"
        );
    }
}
