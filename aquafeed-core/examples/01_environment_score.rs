//! Environment Score Example
//!
//! Scores a handful of pond conditions against one site's thresholds and
//! shows the feeding adjustment each one produces.
//!
//! ## What You'll Learn
//!
//! - Passing thresholds positionally, as a host integration does
//! - Reading the per-dimension penalty breakdown
//! - How a missing threshold buffer fails closed
//! - Turning a score into a feeder rate recommendation
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_environment_score
//! ```

use aquafeed_core::{
    environment_score, feeding_adjustment, EnvironmentScorer, FeedingAdvisor, SensorReading,
    ThresholdSet,
};

fn main() {
    println!("AquaFeed Environment Score Example");
    println!("==================================\n");

    // do_min, do_crit_min, ph_min, ph_max, ph_crit_min, ph_crit_max,
    // turb_max, turb_crit_max, ammo_max, ammo_crit_max,
    // temp_min, temp_max, activity_min
    let site: [f32; 13] = [
        6.0, 5.0, 6.5, 8.5, 6.0, 9.0, 20.0, 40.0, 0.2, 0.5, 24.0, 31.0, 0.5,
    ];

    let thresholds = match ThresholdSet::from_slice(&site).and_then(ThresholdSet::validated) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("Bad site thresholds: {}", e);
            return;
        }
    };
    let scorer = EnvironmentScorer::new(thresholds);

    let cases = [
        ("Calm morning", SensorReading::new(6.5, 7.2, 10.0, 0.1, 27.0, 0.9)),
        ("Low oxygen", SensorReading::new(5.4, 7.4, 12.0, 0.1, 28.0, 0.7)),
        ("After heavy feeding", SensorReading::new(6.2, 7.9, 33.0, 0.35, 29.0, 0.6)),
        ("Heat wave", SensorReading::new(4.6, 8.8, 45.0, 0.6, 33.0, 0.3)),
    ];

    for (label, reading) in &cases {
        let breakdown = scorer.breakdown(reading);
        let score = breakdown.score();
        let adjustment = feeding_adjustment(reading, score);

        println!("{}", label);
        println!(
            "  penalties: DO {:.2} pH {:.2} turb {:.2} NH3 {:.2} temp {:.2} activity {:.2}",
            breakdown.dissolved_oxygen,
            breakdown.ph,
            breakdown.turbidity,
            breakdown.ammonia,
            breakdown.temperature,
            breakdown.activity,
        );
        println!("  score: {:.2}  adjustment: {:+.0}%\n", score, adjustment);
    }

    // A host that forgets to send thresholds gets zero, which cuts feeding
    let calm = cases[0].1;
    let unconfigured = environment_score(&calm, None);
    println!("No thresholds supplied");
    println!(
        "  score: {:.2}  adjustment: {:+.0}%\n",
        unconfigured,
        feeding_adjustment(&calm, unconfigured)
    );

    // Full recommendation on a 280 g/min baseline
    let advisor = FeedingAdvisor::default();
    for (label, reading) in &cases {
        let rec = advisor.recommend(&scorer, reading, &[]);
        println!("{:<22} {:>6.1} g/min  {}", label, rec.recommended_rate_gmin, rec);
    }
}
