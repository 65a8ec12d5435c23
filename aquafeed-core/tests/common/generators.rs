//! Pond data generators
//!
//! Produces hourly readings that follow the shape of a real grow-out pond:
//! - DO peaks mid-afternoon with photosynthesis and bottoms out before dawn
//! - Water temperature lags air temperature by a few hours
//! - Turbidity and ammonia climb slowly between water exchanges
//!
//! The noise source is a fixed-seed LCG so every run sees the same data.

use aquafeed_core::SensorReading;

const HOURS_PER_DAY: f32 = 24.0;
const TWO_PI: f32 = 2.0 * core::f32::consts::PI;

/// Hourly pond reading generator
pub struct PondGenerator {
    seed: u32,
    hour: u32,
    /// Mean DO over the day (mg/L)
    pub base_do: f32,
    /// Peak-to-mean DO swing (mg/L)
    pub do_swing: f32,
    /// Mean water temperature (°C)
    pub base_temp: f32,
    /// Turbidity at hour zero (NTU)
    pub base_turbidity: f32,
    /// NTU added per hour
    pub turbidity_drift: f32,
    /// Ammonia at hour zero (mg/L)
    pub base_ammonia: f32,
    /// Feeder rate (g/min)
    pub feeding_rate: f32,
    /// Noise amplitude as a fraction of each value
    pub noise: f32,
}

impl PondGenerator {
    /// Healthy pond defaults
    pub fn healthy() -> Self {
        Self {
            seed: 42,
            hour: 0,
            base_do: 7.0,
            do_swing: 0.6,
            base_temp: 28.0,
            base_turbidity: 12.0,
            turbidity_drift: 0.0,
            base_ammonia: 0.08,
            feeding_rate: 280.0,
            noise: 0.01,
        }
    }

    /// Pond heading into an oxygen crash: low DO, murky, rising ammonia
    pub fn crashing() -> Self {
        Self {
            base_do: 5.0,
            do_swing: 1.2,
            base_turbidity: 24.0,
            turbidity_drift: 0.4,
            base_ammonia: 0.3,
            feeding_rate: 320.0,
            ..Self::healthy()
        }
    }

    /// Next hourly reading
    pub fn next_reading(&mut self) -> SensorReading {
        let h = self.hour as f32;
        self.hour += 1;

        // DO peaks around 15:00, minimum around 03:00
        let phase = TWO_PI * (h - 9.0) / HOURS_PER_DAY;
        let dissolved_oxygen = self.base_do + self.do_swing * libm::sinf(phase);
        let temperature = self.base_temp + 1.5 * libm::sinf(phase - 0.5);
        let turbidity = self.base_turbidity + self.turbidity_drift * h;
        let ammonia = self.base_ammonia + 0.002 * h;
        let activity = 0.75 + 0.1 * libm::sinf(phase);

        SensorReading::new(
            dissolved_oxygen * self.jitter(),
            7.9 * self.jitter(),
            turbidity * self.jitter(),
            ammonia * self.jitter(),
            temperature,
            activity,
        )
        .with_feeding_rate(self.feeding_rate)
    }

    /// `N` consecutive readings, oldest first
    pub fn day<const N: usize>(&mut self) -> [SensorReading; N] {
        core::array::from_fn(|_| self.next_reading())
    }

    fn jitter(&mut self) -> f32 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        let uniform = (self.seed as f32) / (u32::MAX as f32);
        1.0 + (uniform - 0.5) * 2.0 * self.noise
    }
}
