//! Trend and Forecast Example
//!
//! Builds a day of hourly readings with a slow oxygen decline, then looks at
//! the series statistics, the next six hours of forecasts, and feed metrics.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_trend_forecast
//! ```

use aquafeed_core::{forecast, trend, variance, FeedMetrics, SensorReading};

fn main() {
    println!("AquaFeed Trend & Forecast Example");
    println!("=================================\n");

    let history: Vec<SensorReading> = (0..24)
        .map(|h| {
            let h = h as f32;
            SensorReading::new(
                7.2 - 0.04 * h,
                7.9 - 0.005 * h,
                14.0 + 0.3 * h,
                0.12 + 0.01 * h,
                28.0,
                0.8 - 0.005 * h,
            )
            .with_feeding_rate(300.0)
        })
        .collect();

    let do_series: Vec<f32> = history.iter().map(|r| r.dissolved_oxygen_mgl).collect();
    let turbidity_series: Vec<f32> = history.iter().map(|r| r.turbidity_ntu).collect();

    println!("Last 24 hours");
    println!(
        "  DO trend: {:+.3} mg/L/h  variance: {:.4}",
        trend(&do_series),
        variance(&do_series)
    );
    println!(
        "  Turbidity trend: {:+.3} NTU/h  variance: {:.4}\n",
        trend(&turbidity_series),
        variance(&turbidity_series)
    );

    match forecast(&history, 6) {
        Ok(points) => {
            println!("Forecast");
            for point in &points {
                println!(
                    "  +{}h {:<16} {:>6.2}  (confidence {:.0}%, {:?})",
                    point.hours_ahead,
                    format!("{:?}", point.parameter),
                    point.value,
                    point.confidence * 100.0,
                    point.model,
                );
            }
        }
        Err(e) => println!("Forecast unavailable: {}", e),
    }

    // Not enough history yet
    if let Err(e) = forecast(&history[..10], 6) {
        println!("\nWith 10 samples: {}", e);
    }

    let metrics = FeedMetrics::from_history(&history);
    println!("\nFeed metrics");
    println!("  FCR: {:.2}", metrics.avg_fcr);
    println!("  Waste: {:.2}%", metrics.avg_waste_ratio);
    println!("  Efficiency: {:.2}%", metrics.feed_efficiency);
    println!("  Energy cost: {:.2} per kg", metrics.energy_cost_per_kg);
}
