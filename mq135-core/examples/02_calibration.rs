//! Calibration Example
//!
//! Calibrates a simulated sensor against a reference instrument reading and
//! shows how to fall back to the previous baseline when the search fails.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_calibration
//! ```
//!
//! Calibration results are logged by default. `RUST_LOG=mq135_core=info`
//! also logs every resistance sample.

use mq135_core::{
    sampler::FixedSampler,
    GasSensorModel, SensorResult,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn calibrate_or_revert(
    sensor: &mut GasSensorModel<FixedSampler>,
    reference_ppm: f32,
    temperature: f32,
    humidity: f32,
) -> SensorResult<()> {
    let previous = sensor.r_zero();
    let mut yields = 0u32;
    let mut scheduler = || yields += 1;

    let outcome = sensor.calibrate(reference_ppm, temperature, humidity, &mut scheduler)?;
    println!(
        "  target {:6.1} ppm: {} after {} iterations, RZero {:.2} -> {:.2} kOhm ({} yields)",
        reference_ppm,
        if outcome.is_success() { "converged" } else { "FAILED" },
        outcome.iterations(),
        previous,
        outcome.r_zero(),
        yields,
    );

    if !outcome.is_success() {
        sensor.set_r_zero(previous)?;
        println!("  reverted RZero to {:.2} kOhm", sensor.r_zero());
    }
    Ok(())
}

fn main() -> SensorResult<()> {
    // Forward the crate's `log` records to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mq135_core::model::calibration=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("MQ135 Calibration Example");
    println!("=========================\n");

    let mut sensor = GasSensorModel::new(FixedSampler::new(1800, 1800), 34);
    let (temperature, humidity) = (21.0, 40.0);

    println!("Before: {:.1} ppm", sensor.corrected_ppm(temperature, humidity)?);
    println!(
        "Clean-air RZero estimate: {:.2} kOhm\n",
        sensor.corrected_derived_r_zero(temperature, humidity)?
    );

    // Reachable target: reference instrument reads 650 ppm
    calibrate_or_revert(&mut sensor, 650.0, temperature, humidity)?;
    println!("After: {:.1} ppm\n", sensor.corrected_ppm(temperature, humidity)?);

    // Unreachable target: no positive baseline reads 0 ppm
    calibrate_or_revert(&mut sensor, 0.0, temperature, humidity)?;

    Ok(())
}
