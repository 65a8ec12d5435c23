//! Tiered Rules
//!
//! Both scorers are built from the same shape of rule: a short ordered list of
//! tiers per dimension, evaluated top to bottom, stopping at the first tier
//! whose condition holds.
//!
//! ```text
//! DO rule:  [ Below(do_crit_min) -> 0.40,  Below(do_min) -> 0.25 ]
//!
//! DO = 4.0, do_crit_min = 5.0  →  first tier matches  →  0.40
//! DO = 5.5, do_min      = 6.0  →  second tier matches →  0.25
//! DO = 7.0                     →  nothing matches     →  0.00
//! ```
//!
//! Ordering is the tie-break. A critical tier listed first shadows the warning
//! tier below it, so a reading is never charged for both.
//!
//! ## NaN Handling
//!
//! Conditions use plain IEEE comparisons. A NaN reading fails every one of
//! them and the rule contributes nothing. Callers that must refuse NaN do so
//! up front with [`crate::reading::SensorReading::check`].

/// Condition a single reading is tested against
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    /// Holds when `value < bound`
    Below(f32),
    /// Holds when `value > bound`
    Above(f32),
    /// Holds when `value < low || value > high`
    Outside {
        /// Lower edge of the allowed band
        low: f32,
        /// Upper edge of the allowed band
        high: f32,
    },
}

impl Condition {
    /// Test a value against this condition
    #[inline]
    pub fn matches(&self, value: f32) -> bool {
        match *self {
            Condition::Below(bound) => value < bound,
            Condition::Above(bound) => value > bound,
            Condition::Outside { low, high } => value < low || value > high,
        }
    }
}

/// One tier of a rule: a condition and the amount applied when it holds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    /// When this tier applies
    pub condition: Condition,
    /// What it contributes (penalty for the environment score, percentage
    /// delta for the feeding adjustment)
    pub amount: f32,
}

impl Tier {
    /// Create a tier
    pub const fn new(condition: Condition, amount: f32) -> Self {
        Self { condition, amount }
    }
}

/// Ordered tiers for one dimension, first match wins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TieredRule<const N: usize> {
    tiers: [Tier; N],
}

impl<const N: usize> TieredRule<N> {
    /// Create a rule from tiers in priority order
    pub const fn new(tiers: [Tier; N]) -> Self {
        Self { tiers }
    }

    /// The first tier whose condition holds, if any
    pub fn matched(&self, value: f32) -> Option<&Tier> {
        self.tiers.iter().find(|tier| tier.condition.matches(value))
    }

    /// Amount contributed by this rule, `0.0` when no tier holds
    #[inline]
    pub fn evaluate(&self, value: f32) -> f32 {
        self.matched(value).map_or(0.0, |tier| tier.amount)
    }
}
