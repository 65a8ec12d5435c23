//! Sensor Reading Snapshot
//!
//! One sample of pond conditions, as handed over by the ingestion layer. No
//! cross-field invariant is enforced here; a pH of 15 is carried through and
//! scored like any other value. Hosts that want NaN and infinity rejected call
//! [`SensorReading::check`] before scoring.

use crate::errors::{ScoringError, ScoringResult};

/// Water-quality and fish-behavior sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorReading {
    /// Dissolved oxygen (mg/L)
    pub dissolved_oxygen_mgl: f32,
    /// pH
    pub ph: f32,
    /// Turbidity (NTU)
    pub turbidity_ntu: f32,
    /// Total ammonia nitrogen (mg/L)
    pub ammonia_mgl: f32,
    /// Water temperature (°C)
    pub temperature_c: f32,
    /// Fish activity index (0.0 = still, 1.0 = feeding frenzy)
    pub fish_activity_index: f32,
    /// Feeder output at sample time (g/min), when known
    #[cfg_attr(feature = "serde", serde(default))]
    pub feeding_rate_gmin: Option<f32>,
}

impl SensorReading {
    /// Create a reading without a feeder rate
    pub const fn new(
        dissolved_oxygen_mgl: f32,
        ph: f32,
        turbidity_ntu: f32,
        ammonia_mgl: f32,
        temperature_c: f32,
        fish_activity_index: f32,
    ) -> Self {
        Self {
            dissolved_oxygen_mgl,
            ph,
            turbidity_ntu,
            ammonia_mgl,
            temperature_c,
            fish_activity_index,
            feeding_rate_gmin: None,
        }
    }

    /// Attach the feeder rate observed with this sample
    pub fn with_feeding_rate(mut self, feeding_rate_gmin: f32) -> Self {
        self.feeding_rate_gmin = Some(feeding_rate_gmin);
        self
    }

    /// Reject NaN or infinite fields
    ///
    /// Scoring itself never calls this; comparisons against NaN simply fail
    /// and the affected penalty is skipped.
    pub fn check(&self) -> ScoringResult<()> {
        let fields = [
            ("dissolved_oxygen_mgl", self.dissolved_oxygen_mgl),
            ("ph", self.ph),
            ("turbidity_ntu", self.turbidity_ntu),
            ("ammonia_mgl", self.ammonia_mgl),
            ("temperature_c", self.temperature_c),
            ("fish_activity_index", self.fish_activity_index),
        ];

        for (field, value) in fields {
            if !value.is_checked() {
                return Err(ScoringError::InvalidValue { field });
            }
        }

        match self.feeding_rate_gmin {
            Some(rate) if !rate.is_checked() => Err(ScoringError::InvalidValue {
                field: "feeding_rate_gmin",
            }),
            _ => Ok(()),
        }
    }
}

/// Values that can be checked for numeric sanity
pub trait Checkable {
    /// `true` unless the value is NaN or infinite
    fn is_checked(&self) -> bool;
}

impl Checkable for f32 {
    fn is_checked(&self) -> bool {
        self.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_reading_passes() {
        let reading = SensorReading::new(6.5, 7.8, 12.0, 0.1, 27.0, 0.8).with_feeding_rate(280.0);
        assert!(reading.check().is_ok());
        assert_eq!(reading.feeding_rate_gmin, Some(280.0));
    }

    #[test]
    fn nan_field_named() {
        let reading = SensorReading::new(6.5, f32::NAN, 12.0, 0.1, 27.0, 0.8);
        assert_eq!(reading.check(), Err(ScoringError::InvalidValue { field: "ph" }));
    }

    #[test]
    fn infinite_feed_rate_rejected() {
        let reading = SensorReading::new(6.5, 7.8, 12.0, 0.1, 27.0, 0.8)
            .with_feeding_rate(f32::INFINITY);
        assert_eq!(
            reading.check(),
            Err(ScoringError::InvalidValue { field: "feeding_rate_gmin" })
        );
    }

    #[test]
    fn out_of_range_is_not_invalid() {
        // pH 15 is nonsense but finite; range policing is the scorer's job
        let reading = SensorReading::new(6.5, 15.0, 12.0, 0.1, 27.0, 0.8);
        assert!(reading.check().is_ok());
    }

    #[test]
    fn checkable_floats() {
        assert!(5.0f32.is_checked());
        assert!(!f32::NAN.is_checked());
        assert!(!f32::NEG_INFINITY.is_checked());
    }
}
