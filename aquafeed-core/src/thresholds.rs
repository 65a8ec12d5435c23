//! Named Threshold Set
//!
//! Hosts have historically passed thresholds as a flat buffer of 13 floats in
//! a fixed order. That order is kept for the flat boundary, but inside the
//! crate each value has a name:
//!
//! ```text
//! index  field           unit
//!   0    do_min          mg/L
//!   1    do_crit_min     mg/L
//!   2    ph_min          -
//!   3    ph_max          -
//!   4    ph_crit_min     -
//!   5    ph_crit_max     -
//!   6    turb_max        NTU
//!   7    turb_crit_max   NTU
//!   8    ammo_max        mg/L
//!   9    ammo_crit_max   mg/L
//!  10    temp_min        °C
//!  11    temp_max        °C
//!  12    activity_min    0.0-1.0
//! ```
//!
//! `from_slice` only checks the length. Bound ordering is a separate, opt-in
//! check through [`ThresholdSet::validated`]; an unordered set still scores,
//! it just scores against the bounds it was given.

use crate::{
    constants::water::*,
    errors::{ScoringError, ScoringResult},
    reading::Checkable,
};

/// Field names in positional order
const FIELD_NAMES: [&str; THRESHOLD_COUNT] = [
    "do_min",
    "do_crit_min",
    "ph_min",
    "ph_max",
    "ph_crit_min",
    "ph_crit_max",
    "turb_max",
    "turb_crit_max",
    "ammo_max",
    "ammo_crit_max",
    "temp_min",
    "temp_max",
    "activity_min",
];

/// Thresholds for the environment scorer
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThresholdSet {
    /// Dissolved oxygen warning minimum (mg/L)
    pub do_min: f32,
    /// Dissolved oxygen critical minimum (mg/L)
    pub do_crit_min: f32,
    /// Preferred pH lower bound
    pub ph_min: f32,
    /// Preferred pH upper bound
    pub ph_max: f32,
    /// Critical pH lower bound
    pub ph_crit_min: f32,
    /// Critical pH upper bound
    pub ph_crit_max: f32,
    /// Turbidity warning maximum (NTU)
    pub turb_max: f32,
    /// Turbidity critical maximum (NTU)
    pub turb_crit_max: f32,
    /// Ammonia warning maximum (mg/L)
    pub ammo_max: f32,
    /// Ammonia critical maximum (mg/L)
    pub ammo_crit_max: f32,
    /// Feeding temperature lower bound (°C)
    pub temp_min: f32,
    /// Feeding temperature upper bound (°C)
    pub temp_max: f32,
    /// Minimum fish activity index
    pub activity_min: f32,
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            do_min: DO_MIN_MGL,
            do_crit_min: DO_CRIT_MIN_MGL,
            ph_min: PH_MIN,
            ph_max: PH_MAX,
            ph_crit_min: PH_CRIT_MIN,
            ph_crit_max: PH_CRIT_MAX,
            turb_max: TURBIDITY_MAX_NTU,
            turb_crit_max: TURBIDITY_CRIT_MAX_NTU,
            ammo_max: AMMONIA_MAX_MGL,
            ammo_crit_max: AMMONIA_CRIT_MAX_MGL,
            temp_min: TEMP_MIN_C,
            temp_max: TEMP_MAX_C,
            activity_min: ACTIVITY_MIN,
        }
    }
}

impl ThresholdSet {
    /// Build from a positional buffer
    ///
    /// Needs at least [`THRESHOLD_COUNT`] values; anything past the 13th is
    /// ignored.
    pub fn from_slice(values: &[f32]) -> ScoringResult<Self> {
        let Some(v) = values.get(..THRESHOLD_COUNT) else {
            return Err(ScoringError::ThresholdCount {
                required: THRESHOLD_COUNT,
                available: values.len(),
            });
        };

        Ok(Self::from_positional(v))
    }

    fn from_positional(v: &[f32]) -> Self {
        Self {
            do_min: v[0],
            do_crit_min: v[1],
            ph_min: v[2],
            ph_max: v[3],
            ph_crit_min: v[4],
            ph_crit_max: v[5],
            turb_max: v[6],
            turb_crit_max: v[7],
            ammo_max: v[8],
            ammo_crit_max: v[9],
            temp_min: v[10],
            temp_max: v[11],
            activity_min: v[12],
        }
    }

    /// Positional form, in the order `from_slice` reads
    pub fn to_array(&self) -> [f32; THRESHOLD_COUNT] {
        [
            self.do_min,
            self.do_crit_min,
            self.ph_min,
            self.ph_max,
            self.ph_crit_min,
            self.ph_crit_max,
            self.turb_max,
            self.turb_crit_max,
            self.ammo_max,
            self.ammo_crit_max,
            self.temp_min,
            self.temp_max,
            self.activity_min,
        ]
    }

    /// Check that every bound is finite and every warning bound sits inside
    /// its critical bound
    ///
    /// A NaN bound would fail every comparison and silently switch its tier
    /// off, so non-finite values are reported before ordering is checked.
    pub fn validate(&self) -> ScoringResult<()> {
        for (field, value) in FIELD_NAMES.into_iter().zip(self.to_array()) {
            if !value.is_checked() {
                return Err(ScoringError::InvalidValue { field });
            }
        }

        if self.do_crit_min > self.do_min {
            return Err(ScoringError::ThresholdOrder {
                reason: "do_crit_min exceeds do_min",
            });
        }
        if self.ph_crit_min > self.ph_min {
            return Err(ScoringError::ThresholdOrder {
                reason: "ph_crit_min exceeds ph_min",
            });
        }
        if self.ph_min > self.ph_max {
            return Err(ScoringError::ThresholdOrder {
                reason: "ph_min exceeds ph_max",
            });
        }
        if self.ph_max > self.ph_crit_max {
            return Err(ScoringError::ThresholdOrder {
                reason: "ph_max exceeds ph_crit_max",
            });
        }
        if self.turb_max > self.turb_crit_max {
            return Err(ScoringError::ThresholdOrder {
                reason: "turb_max exceeds turb_crit_max",
            });
        }
        if self.ammo_max > self.ammo_crit_max {
            return Err(ScoringError::ThresholdOrder {
                reason: "ammo_max exceeds ammo_crit_max",
            });
        }
        if self.temp_min > self.temp_max {
            return Err(ScoringError::ThresholdOrder {
                reason: "temp_min exceeds temp_max",
            });
        }
        Ok(())
    }

    /// Consume the set, returning it only if its bounds are ordered
    pub fn validated(self) -> ScoringResult<Self> {
        self.validate().map(|()| self)
    }
}

impl TryFrom<&[f32]> for ThresholdSet {
    type Error = ScoringError;

    fn try_from(values: &[f32]) -> ScoringResult<Self> {
        Self::from_slice(values)
    }
}

impl From<[f32; THRESHOLD_COUNT]> for ThresholdSet {
    fn from(values: [f32; THRESHOLD_COUNT]) -> Self {
        Self::from_positional(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FARM: [f32; 13] = [
        6.0, 5.0, 6.5, 8.5, 6.0, 9.0, 20.0, 40.0, 0.2, 0.5, 24.0, 31.0, 0.5,
    ];

    #[test]
    fn positional_order() {
        let set = ThresholdSet::from_slice(&FARM).unwrap();
        assert_eq!(set.do_min, 6.0);
        assert_eq!(set.do_crit_min, 5.0);
        assert_eq!(set.ph_crit_max, 9.0);
        assert_eq!(set.turb_crit_max, 40.0);
        assert_eq!(set.activity_min, 0.5);
        assert_eq!(set.to_array(), FARM);
    }

    #[test]
    fn short_buffer_rejected() {
        let err = ThresholdSet::from_slice(&FARM[..12]).unwrap_err();
        assert_eq!(
            err,
            ScoringError::ThresholdCount { required: 13, available: 12 }
        );
        assert!(ThresholdSet::from_slice(&[]).is_err());
    }

    #[test]
    fn extra_values_ignored() {
        let mut long = [0.0f32; 16];
        long[..13].copy_from_slice(&FARM);
        long[13] = 99.0;
        assert_eq!(ThresholdSet::from_slice(&long).unwrap().to_array(), FARM);
    }

    #[test]
    fn default_is_ordered() {
        assert!(ThresholdSet::default().validate().is_ok());
        assert!(ThresholdSet::from(FARM).validated().is_ok());
    }

    #[test]
    fn nan_bound_rejected() {
        let set = ThresholdSet {
            do_min: f32::NAN,
            ..ThresholdSet::default()
        };
        assert_eq!(
            set.validate(),
            Err(ScoringError::InvalidValue { field: "do_min" })
        );
    }

    #[test]
    fn infinite_bound_rejected() {
        let mut values = FARM;
        values[12] = f32::INFINITY;
        assert_eq!(
            ThresholdSet::from(values).validated(),
            Err(ScoringError::InvalidValue { field: "activity_min" })
        );
    }

    #[test]
    fn swapped_do_bounds_reported() {
        let set = ThresholdSet {
            do_min: 5.0,
            do_crit_min: 6.0,
            ..ThresholdSet::default()
        };
        assert_eq!(
            set.validated(),
            Err(ScoringError::ThresholdOrder { reason: "do_crit_min exceeds do_min" })
        );
    }

    #[test]
    fn inverted_ph_band_reported() {
        let set = ThresholdSet {
            ph_min: 8.6,
            ..ThresholdSet::default()
        };
        assert!(matches!(
            set.validate(),
            Err(ScoringError::ThresholdOrder { .. })
        ));
    }
}
