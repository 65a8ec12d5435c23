//! Common test utilities for integration tests
//!
//! This module provides:
//! - Pond reading generators with daily oxygen and temperature cycles
//! - Fixed threshold sets and reference readings
//! - Tolerance helpers for f32 assertions

#![allow(dead_code)]

pub mod generators;
pub mod scenarios;

/// Absolute tolerance used across integration tests
pub const TOLERANCE: f32 = 1e-5;

/// Compare floats within [`TOLERANCE`]
pub fn approx_eq(a: f32, b: f32) -> bool {
    libm::fabsf(a - b) < TOLERANCE
}
