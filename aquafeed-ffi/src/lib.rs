//! AquaFeed C ABI
//!
//! Flat `extern "C"` entry points over [`aquafeed_core`], for wasm32 modules
//! and native hosts that cannot link Rust directly.
//!
//! ## Entry Points
//!
//! | Symbol | Returns |
//! |---|---|
//! | `calculate_environment_score` | score in `[0, 1]` |
//! | `calculate_feeding_adjustment` | percentage in `[-40, 15]` |
//! | `calculate_trend` | least-squares slope per sample |
//! | `calculate_variance` | population variance |
//! | `aquafeed_version` | NUL-terminated version string |
//!
//! None of these fail: a null pointer or negative length is an absent
//! sequence, and absent or short sequences produce the documented sentinel
//! (`0.0` in every case).
//!
//! ## Usage
//!
//! ```c
//! float thresholds[13] = {6, 5, 6.5, 8.5, 6, 9, 20, 40, 0.2, 0.5, 24, 31, 0.5};
//! float score = calculate_environment_score(6.5, 7.2, 10, 0.1, 27, 0.9, thresholds, 13);
//! float adjustment = calculate_feeding_adjustment(6.5, 10, 0.1, 0.9, 27, score);
//! ```

#![deny(unsafe_op_in_unsafe_fn)]

use core::ffi::c_char;

use aquafeed_core::{environment_score, trend, variance, FeedingAdjuster, SensorReading};

mod conversion;

use conversion::host_slice;

static VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");

/// Score one reading against a positional threshold buffer
///
/// Returns `0.0` when `thresholds` is null, `len` is negative, or fewer than
/// 13 values are supplied.
///
/// # Safety
///
/// If `thresholds` is non-null and `len` is non-negative, `thresholds` must
/// point to `len` readable `f32` values.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn calculate_environment_score(
    dissolved_oxygen: f32,
    ph: f32,
    turbidity: f32,
    ammonia: f32,
    temperature: f32,
    fish_activity: f32,
    thresholds: *const f32,
    len: i32,
) -> f32 {
    let reading = SensorReading::new(
        dissolved_oxygen,
        ph,
        turbidity,
        ammonia,
        temperature,
        fish_activity,
    );
    let thresholds = unsafe { host_slice(thresholds, len) };
    environment_score(&reading, thresholds)
}

/// Feeding-rate percentage adjustment for one reading
#[no_mangle]
pub extern "C" fn calculate_feeding_adjustment(
    dissolved_oxygen: f32,
    turbidity: f32,
    ammonia: f32,
    fish_activity: f32,
    temperature: f32,
    env_score: f32,
) -> f32 {
    FeedingAdjuster::new().adjust(
        dissolved_oxygen,
        turbidity,
        ammonia,
        fish_activity,
        temperature,
        env_score,
    )
}

/// Least-squares slope of a sample series
///
/// # Safety
///
/// If `values` is non-null and `len` is non-negative, `values` must point to
/// `len` readable `f32` values.
#[no_mangle]
pub unsafe extern "C" fn calculate_trend(values: *const f32, len: i32) -> f32 {
    unsafe { host_slice(values, len) }.map_or(0.0, trend)
}

/// Population variance of a sample series
///
/// # Safety
///
/// If `values` is non-null and `len` is non-negative, `values` must point to
/// `len` readable `f32` values.
#[no_mangle]
pub unsafe extern "C" fn calculate_variance(values: *const f32, len: i32) -> f32 {
    unsafe { host_slice(values, len) }.map_or(0.0, variance)
}

/// Library version as a static NUL-terminated string
#[no_mangle]
pub extern "C" fn aquafeed_version() -> *const c_char {
    VERSION.as_ptr().cast()
}
