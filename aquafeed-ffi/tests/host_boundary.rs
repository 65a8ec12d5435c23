//! Host-boundary tests: calls made exactly as a C or wasm host makes them

use core::{ffi::CStr, ptr};

use aquafeed::{
    aquafeed_version, calculate_environment_score, calculate_feeding_adjustment,
    calculate_trend, calculate_variance,
};
use proptest::prelude::*;

const FARM: [f32; 13] = [
    6.0, 5.0, 6.5, 8.5, 6.0, 9.0, 20.0, 40.0, 0.2, 0.5, 24.0, 31.0, 0.5,
];

fn score(thresholds: *const f32, len: i32) -> f32 {
    unsafe { calculate_environment_score(6.5, 7.2, 10.0, 0.1, 27.0, 0.9, thresholds, len) }
}

#[test]
fn end_to_end_scenario() {
    let score = score(FARM.as_ptr(), 13);
    assert_eq!(score, 1.0);
    assert_eq!(calculate_feeding_adjustment(6.5, 10.0, 0.1, 0.9, 27.0, score), 10.0);
}

#[test]
fn null_thresholds_score_zero() {
    assert_eq!(score(ptr::null(), 13), 0.0);
}

#[test]
fn short_or_negative_length_scores_zero() {
    assert_eq!(score(FARM.as_ptr(), 12), 0.0);
    assert_eq!(score(FARM.as_ptr(), 0), 0.0);
    assert_eq!(score(FARM.as_ptr(), -13), 0.0);
}

#[test]
fn critical_do_costs_exactly_its_penalty() {
    let score =
        unsafe { calculate_environment_score(4.0, 7.2, 10.0, 0.1, 27.0, 0.9, FARM.as_ptr(), 13) };
    assert!((score - 0.60).abs() < 1e-6);
}

#[test]
fn adjustment_clamps_to_floor() {
    assert_eq!(calculate_feeding_adjustment(4.0, 50.0, 1.0, 0.1, 35.0, 0.0), -40.0);
}

#[test]
fn trend_of_rising_series() {
    let values = [1.0f32, 2.0, 3.0, 4.0, 5.0];
    let slope = unsafe { calculate_trend(values.as_ptr(), 5) };
    assert!((slope - 1.0).abs() < 1e-6);
}

#[test]
fn trend_sentinels() {
    let values = [5.0f32, 5.0, 5.0];
    unsafe {
        assert_eq!(calculate_trend(values.as_ptr(), 3), 0.0);
        assert_eq!(calculate_trend(values.as_ptr(), 1), 0.0);
        assert_eq!(calculate_trend(ptr::null(), 3), 0.0);
        assert_eq!(calculate_trend(values.as_ptr(), -2), 0.0);
    }
}

#[test]
fn variance_of_textbook_series() {
    let values = [2.0f32, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let var = unsafe { calculate_variance(values.as_ptr(), 8) };
    assert!((var - 4.0).abs() < 1e-6);
}

#[test]
fn variance_sentinels() {
    let values = [1.0f32];
    unsafe {
        assert_eq!(calculate_variance(ptr::null(), 4), 0.0);
        assert_eq!(calculate_variance(values.as_ptr(), 0), 0.0);
        assert_eq!(calculate_variance(values.as_ptr(), -1), 0.0);
    }
}

#[test]
fn version_is_nul_terminated() {
    let version = unsafe { CStr::from_ptr(aquafeed_version()) };
    assert_eq!(version.to_str(), Ok(aquafeed_core::VERSION));
}

proptest! {
    #[test]
    fn score_bounded_for_any_buffer(
        values in prop::collection::vec(-100.0..100.0f32, 0..20),
        dissolved_oxygen in 0.0..15.0f32,
        activity in 0.0..1.0f32,
    ) {
        let score = unsafe {
            calculate_environment_score(
                dissolved_oxygen, 7.5, 15.0, 0.2, 27.0, activity,
                values.as_ptr(), values.len() as i32,
            )
        };
        prop_assert!((0.0..=1.0).contains(&score));
        if values.len() < 13 {
            prop_assert_eq!(score, 0.0);
        }
    }
}
