//! Constants for the MQ135 Model
//!
//! Every default used by the configuration structs lives here, with the
//! source of each value. Deployments tune a sensor batch through
//! [`crate::config`]; these constants only seed the defaults.
//!
//! ## Organization
//!
//! - **Curve**: power-law fit of the datasheet Rs/R0 → ppm characteristic
//! - **Correction**: temperature/humidity dependence polynomial
//! - **Circuit**: ADC and voltage-divider values of the reference board
//! - **Calibration**: search step, iteration ceilings and yield cadence

/// Datasheet curve fit and atmospheric reference.
pub mod curve;

/// Temperature and humidity dependence coefficients.
pub mod correction;

/// Analog front-end values of the reference hardware.
pub mod circuit;

/// Calibration search parameters.
pub mod calibration;

// Re-export commonly used constants for convenience
pub use curve::{PARA, PARB, ATMOCO2_PPM, DEFAULT_RZERO_KOHM};
pub use correction::{CORA, CORB, CORC, CORD, REFERENCE_HUMIDITY_PCT};
pub use circuit::{ADC_FULL_SCALE, REFERENCE_VOLTAGE_V, REFERENCE_RESISTOR_KOHM, DEFAULT_REFERENCE_CHANNEL};
pub use calibration::{CALIBRATION_STEP_KOHM, MAX_CALIBRATION_ITERATIONS, CALIBRATION_SUCCESS_WINDOW, YIELD_INTERVAL};
