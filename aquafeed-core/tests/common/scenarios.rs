//! Reference thresholds and readings
//!
//! `FARM_THRESHOLDS` is the positional set used in host integration docs;
//! readings are named after the condition they model.

use aquafeed_core::{SensorReading, ThresholdSet};

/// Positional thresholds as a host would pass them
pub const FARM_THRESHOLDS: [f32; 13] = [
    6.0,  // do_min
    5.0,  // do_crit_min
    6.5,  // ph_min
    8.5,  // ph_max
    6.0,  // ph_crit_min
    9.0,  // ph_crit_max
    20.0, // turb_max
    40.0, // turb_crit_max
    0.2,  // ammo_max
    0.5,  // ammo_crit_max
    24.0, // temp_min
    31.0, // temp_max
    0.5,  // activity_min
];

/// Named form of [`FARM_THRESHOLDS`]
pub fn farm_thresholds() -> ThresholdSet {
    ThresholdSet::from(FARM_THRESHOLDS)
}

/// Every reading comfortably inside the farm thresholds
pub fn calm_pond() -> SensorReading {
    SensorReading::new(6.5, 7.2, 10.0, 0.1, 27.0, 0.9)
}

/// Every dimension in its critical tier
pub fn collapsed_pond() -> SensorReading {
    SensorReading::new(3.5, 5.0, 55.0, 0.9, 34.0, 0.2)
}
