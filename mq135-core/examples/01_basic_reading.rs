//! Basic CO2 Reading Example
//!
//! Reads a simulated MQ135 at a few different gas levels and prints the
//! intermediate values of the measurement chain.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_reading
//! ```

use mq135_core::{sampler::FixedSampler, GasSensorModel, SensorError};

fn main() {
    println!("MQ135 Basic Reading Example");
    println!("===========================\n");

    // Sensor divider on GPIO34, reference divider on the default GPIO33
    let mut sensor = GasSensorModel::new(FixedSampler::new(1800, 2000), 34);
    let (temperature, humidity) = (23.0, 48.0);

    println!("Conditions: {:.1}°C, {:.0}% RH", temperature, humidity);
    println!("Correction factor: {:.4}", sensor.correction_factor(temperature, humidity));
    println!("RZero: {:.2} kOhm\n", sensor.r_zero());

    for signal in [1200u16, 1800, 2400, 3000, 0] {
        sensor.sampler_mut().set_signal(signal);

        let reading = match sensor.resistance() {
            Ok(rs) => sensor.corrected_ppm(temperature, humidity).map(|ppm| (rs, ppm)),
            Err(e) => Err(e),
        };

        match reading {
            Ok((rs, ppm)) => println!("  signal {:4}: Rs = {:6.2} kOhm, CO2 = {:7.1} ppm", signal, rs, ppm),
            Err(SensorError::InvalidMeasurement { raw }) => {
                println!("  signal {:4}: rejected, raw code {} means the divider is floating", signal, raw)
            }
            Err(e) => println!("  signal {:4}: error {}", signal, e),
        }
    }

    sensor.sampler_mut().set_signal(1800);
    match sensor.corrected_derived_r_zero(temperature, humidity) {
        Ok(r_zero) => println!("\nClean-air RZero estimate: {:.2} kOhm", r_zero),
        Err(e) => println!("\nClean-air RZero unavailable: {}", e),
    }
    println!("ADC conversions: {}", sensor.release().reads());
}
