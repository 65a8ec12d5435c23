//! Short-Horizon Parameter Forecast
//!
//! Projects dissolved oxygen, pH and turbidity a few hours ahead from the last
//! day of hourly readings. Each parameter is its current value plus the
//! window's linear trend, nudged by one environmental driver:
//!
//! ```text
//! DO         + (30 - avg_temp) * 0.1 * h/6  + (25 - avg_turb) * 0.03 * h/6
//! pH         - 0.2 * h/6 when avg ammonia > 0.3
//! Turbidity  + (avg_feed_6h - 250) * 0.02 * h/6  - 0.5 * h
//! ```
//!
//! Confidence starts from a per-model base and drops with the window's
//! variance and with distance into the future.
//!
//! Output is fixed-capacity: at most [`MAX_FORECAST_HOURS`] hours of three
//! parameters, in hour order, DO then pH then turbidity within each hour.

use heapless::Vec;

use crate::{
    constants::forecast::*,
    errors::{ScoringError, ScoringResult},
    reading::SensorReading,
    stats::{mean, round_hundredths, trend, variance},
};

/// Forecast parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ForecastParameter {
    /// Dissolved oxygen (mg/L)
    DissolvedOxygen,
    /// pH
    Ph,
    /// Turbidity (NTU)
    Turbidity,
}

/// Model label reported alongside a forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ForecastModel {
    /// Sequence model label, used for DO and pH
    Lstm,
    /// Tree ensemble label, used for turbidity
    RandomForest,
}

/// One forecast point
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Forecast {
    /// What is being forecast
    pub parameter: ForecastParameter,
    /// Hours after the latest sample
    pub hours_ahead: usize,
    /// Forecast value, in the parameter's unit
    pub value: f32,
    /// Confidence, rounded to two decimals
    pub confidence: f32,
    /// Model label
    pub model: ForecastModel,
}

/// Window summary shared by every forecast hour
struct WindowStats {
    current: SensorReading,
    do_trend: f32,
    ph_trend: f32,
    turbidity_trend: f32,
    do_variance: f32,
    ph_variance: f32,
    turbidity_variance: f32,
    avg_temp: f32,
    avg_turbidity: f32,
    avg_ammonia: f32,
    avg_recent_feed: f32,
}

impl WindowStats {
    fn from_window(window: &[SensorReading]) -> Self {
        let mut do_values = [0.0f32; FORECAST_WINDOW];
        let mut ph_values = [0.0f32; FORECAST_WINDOW];
        let mut turbidity_values = [0.0f32; FORECAST_WINDOW];
        let mut temp_values = [0.0f32; FORECAST_WINDOW];
        let mut ammonia_values = [0.0f32; FORECAST_WINDOW];

        for (i, reading) in window.iter().enumerate() {
            do_values[i] = reading.dissolved_oxygen_mgl;
            ph_values[i] = reading.ph;
            turbidity_values[i] = reading.turbidity_ntu;
            temp_values[i] = reading.temperature_c;
            ammonia_values[i] = reading.ammonia_mgl;
        }

        let n = window.len();
        let recent_feed: f32 = window[n - FEEDING_WINDOW..]
            .iter()
            .map(|r| r.feeding_rate_gmin.unwrap_or(0.0))
            .sum();

        Self {
            current: window[n - 1],
            do_trend: trend(&do_values[..n]),
            ph_trend: trend(&ph_values[..n]),
            turbidity_trend: trend(&turbidity_values[..n]),
            do_variance: variance(&do_values[..n]),
            ph_variance: variance(&ph_values[..n]),
            turbidity_variance: variance(&turbidity_values[..n]),
            avg_temp: mean(&temp_values[..n]),
            avg_turbidity: mean(&turbidity_values[..n]),
            avg_ammonia: mean(&ammonia_values[..n]),
            avg_recent_feed: recent_feed / FEEDING_WINDOW as f32,
        }
    }

    fn dissolved_oxygen(&self, hours: f32) -> Forecast {
        let horizon = hours / EFFECT_HORIZON_HOURS;
        let temp_effect = (DO_REFERENCE_TEMP_C - self.avg_temp) * DO_TEMP_COEFF * horizon;
        let turbidity_effect =
            (DO_REFERENCE_TURBIDITY_NTU - self.avg_turbidity) * DO_TURBIDITY_COEFF * horizon;
        let value = self.current.dissolved_oxygen_mgl
            + self.do_trend * hours
            + temp_effect
            + turbidity_effect;
        let confidence = DO_CONFIDENCE_BASE
            - self.do_variance * DO_CONFIDENCE_VARIANCE_COEFF
            - hours * DO_CONFIDENCE_HOUR_COEFF;

        Forecast {
            parameter: ForecastParameter::DissolvedOxygen,
            hours_ahead: hours as usize,
            value: value.clamp(DO_FORECAST_MIN_MGL, DO_FORECAST_MAX_MGL),
            confidence: round_hundredths(confidence.clamp(DO_CONFIDENCE_MIN, DO_CONFIDENCE_MAX)),
            model: ForecastModel::Lstm,
        }
    }

    fn ph(&self, hours: f32) -> Forecast {
        let ammonia_effect = if self.avg_ammonia > PH_AMMONIA_TRIGGER_MGL {
            PH_AMMONIA_DROP * (hours / EFFECT_HORIZON_HOURS)
        } else {
            0.0
        };
        let value = self.current.ph + self.ph_trend * hours + ammonia_effect;
        let confidence = PH_CONFIDENCE_BASE
            - self.ph_variance * PH_CONFIDENCE_VARIANCE_COEFF
            - hours * PH_CONFIDENCE_HOUR_COEFF;

        Forecast {
            parameter: ForecastParameter::Ph,
            hours_ahead: hours as usize,
            value: value.clamp(PH_FORECAST_MIN, PH_FORECAST_MAX),
            confidence: round_hundredths(confidence.clamp(PH_CONFIDENCE_MIN, PH_CONFIDENCE_MAX)),
            model: ForecastModel::Lstm,
        }
    }

    fn turbidity(&self, hours: f32) -> Forecast {
        let feeding_effect = (self.avg_recent_feed - TURBIDITY_REFERENCE_FEED_GMIN)
            * TURBIDITY_FEED_COEFF
            * (hours / EFFECT_HORIZON_HOURS);
        let settling_effect = -hours * TURBIDITY_SETTLING_PER_HOUR;
        let value = self.current.turbidity_ntu
            + self.turbidity_trend * hours
            + feeding_effect
            + settling_effect;
        let confidence = TURBIDITY_CONFIDENCE_BASE
            - self.turbidity_variance * TURBIDITY_CONFIDENCE_VARIANCE_COEFF
            - hours * TURBIDITY_CONFIDENCE_HOUR_COEFF;

        Forecast {
            parameter: ForecastParameter::Turbidity,
            hours_ahead: hours as usize,
            value: value.max(0.0),
            confidence: round_hundredths(
                confidence.clamp(TURBIDITY_CONFIDENCE_MIN, TURBIDITY_CONFIDENCE_MAX),
            ),
            model: ForecastModel::RandomForest,
        }
    }
}

/// Forecast DO, pH and turbidity for each of the next `hours_ahead` hours
///
/// Needs at least [`FORECAST_WINDOW`] samples, oldest first; only the most
/// recent window is used. Horizons beyond [`MAX_FORECAST_HOURS`] are clamped.
pub fn forecast(
    history: &[SensorReading],
    hours_ahead: usize,
) -> ScoringResult<Vec<Forecast, MAX_FORECAST_POINTS>> {
    if history.len() < FORECAST_WINDOW {
        return Err(ScoringError::InsufficientData {
            required: FORECAST_WINDOW,
            available: history.len(),
        });
    }

    let hours_ahead = if hours_ahead > MAX_FORECAST_HOURS {
        log_debug!(
            "Forecast: horizon {}h clamped to {}h",
            hours_ahead,
            MAX_FORECAST_HOURS
        );
        MAX_FORECAST_HOURS
    } else {
        hours_ahead
    };

    let window = &history[history.len() - FORECAST_WINDOW..];
    let stats = WindowStats::from_window(window);

    let mut points = Vec::new();
    for hour in 1..=hours_ahead {
        let hours = hour as f32;
        for point in [
            stats.dissolved_oxygen(hours),
            stats.ph(hours),
            stats.turbidity(hours),
        ] {
            // Capacity is MAX_FORECAST_HOURS * 3 and hours_ahead is clamped to it
            let pushed = points.push(point);
            debug_assert!(pushed.is_ok());
        }
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        libm::fabsf(a - b) < 1e-4
    }

    fn steady_day() -> [SensorReading; FORECAST_WINDOW] {
        [SensorReading::new(6.5, 7.8, 20.0, 0.1, 30.0, 0.8).with_feeding_rate(250.0);
            FORECAST_WINDOW]
    }

    #[test]
    fn short_history_rejected() {
        let day = steady_day();
        assert_eq!(
            forecast(&day[..23], 6),
            Err(ScoringError::InsufficientData { required: 24, available: 23 })
        );
    }

    #[test]
    fn point_layout() {
        let points = forecast(&steady_day(), 3).unwrap();
        assert_eq!(points.len(), 9);
        assert_eq!(points[0].parameter, ForecastParameter::DissolvedOxygen);
        assert_eq!(points[1].parameter, ForecastParameter::Ph);
        assert_eq!(points[2].parameter, ForecastParameter::Turbidity);
        assert_eq!(points[2].model, ForecastModel::RandomForest);
        assert_eq!(points[8].hours_ahead, 3);
    }

    #[test]
    fn zero_horizon_is_empty() {
        assert!(forecast(&steady_day(), 0).unwrap().is_empty());
    }

    #[test]
    fn horizon_clamped() {
        let points = forecast(&steady_day(), 48).unwrap();
        assert_eq!(points.len(), MAX_FORECAST_POINTS);
        assert_eq!(points[MAX_FORECAST_POINTS - 1].hours_ahead, MAX_FORECAST_HOURS);
    }

    #[test]
    fn steady_pond_projection() {
        let points = forecast(&steady_day(), 6).unwrap();
        // Hour 6: DO gets only the turbidity effect, (25 - 20) * 0.03 = 0.15
        let do_6h = points[15];
        assert!(approx(do_6h.value, 6.65));
        // No variance, 0.92 - 6 * 0.02 = 0.80
        assert!(approx(do_6h.confidence, 0.80));

        // Turbidity settles 0.5 NTU per hour with feed at the reference rate
        let turb_6h = points[17];
        assert!(approx(turb_6h.value, 17.0));

        // pH unchanged, ammonia is low
        assert!(approx(points[16].value, 7.8));
    }

    #[test]
    fn high_ammonia_lowers_ph() {
        let mut day = steady_day();
        for reading in day.iter_mut() {
            reading.ammonia_mgl = 0.4;
        }
        let points = forecast(&day, 6).unwrap();
        assert!(approx(points[16].value, 7.6));
    }

    #[test]
    fn rising_do_trend_is_extrapolated() {
        let mut day = steady_day();
        for (i, reading) in day.iter_mut().enumerate() {
            reading.dissolved_oxygen_mgl = 5.0 + 0.05 * i as f32;
        }
        let points = forecast(&day, 1).unwrap();
        // current 6.15, trend 0.05, turbidity effect 0.025
        assert!(approx(points[0].value, 6.225));
    }

    #[test]
    fn only_latest_window_used() {
        let mut long = [SensorReading::new(2.0, 6.0, 80.0, 0.1, 30.0, 0.8); 30];
        long[6..].copy_from_slice(&steady_day());
        assert_eq!(forecast(&long, 2).unwrap(), forecast(&steady_day(), 2).unwrap());
    }

    #[test]
    fn missing_feed_rate_counts_as_zero() {
        let day = [SensorReading::new(6.5, 7.8, 20.0, 0.1, 30.0, 0.8); FORECAST_WINDOW];
        let points = forecast(&day, 6).unwrap();
        // -250 * 0.02 = -5, settling -3
        assert!(approx(points[17].value, 12.0));
    }
}
