//! Threshold and reading configuration through serde_json

#![cfg(feature = "serde")]

mod common;

use aquafeed_core::{environment_score, EnvironmentScorer, SensorReading, ThresholdSet};
use common::scenarios::{calm_pond, farm_thresholds, FARM_THRESHOLDS};

#[test]
fn threshold_set_round_trips() {
    let original = farm_thresholds();
    let json = serde_json::to_string(&original).unwrap();
    let parsed: ThresholdSet = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn site_config_loads_by_field_name() {
    let json = r#"{
        "do_min": 6.0, "do_crit_min": 5.0,
        "ph_min": 6.5, "ph_max": 8.5, "ph_crit_min": 6.0, "ph_crit_max": 9.0,
        "turb_max": 20.0, "turb_crit_max": 40.0,
        "ammo_max": 0.2, "ammo_crit_max": 0.5,
        "temp_min": 24.0, "temp_max": 31.0,
        "activity_min": 0.5
    }"#;

    let set: ThresholdSet = serde_json::from_str(json).unwrap();
    assert_eq!(set.to_array(), FARM_THRESHOLDS);

    let scorer = EnvironmentScorer::new(set.validated().unwrap());
    assert_eq!(
        scorer.score(&calm_pond()),
        environment_score(&calm_pond(), Some(&FARM_THRESHOLDS)),
    );
}

#[test]
fn incomplete_config_is_rejected() {
    let json = r#"{ "do_min": 6.0, "do_crit_min": 5.0 }"#;
    assert!(serde_json::from_str::<ThresholdSet>(json).is_err());
}

#[test]
fn reading_without_feeder_rate() {
    let json = r#"{
        "dissolved_oxygen_mgl": 6.5, "ph": 7.2, "turbidity_ntu": 10.0,
        "ammonia_mgl": 0.1, "temperature_c": 27.0, "fish_activity_index": 0.9
    }"#;

    let reading: SensorReading = serde_json::from_str(json).unwrap();
    assert_eq!(reading, calm_pond());
    assert_eq!(reading.feeding_rate_gmin, None);
}
