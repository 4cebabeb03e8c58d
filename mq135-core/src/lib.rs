//! Calibration and measurement model for MQ135 gas sensors
//!
//! Turns two analog samples into a CO2 estimate and calibrates the sensor's
//! baseline resistance against a known concentration.
//! Designed for microcontrollers sampling the sensor through an ADC.
//!
//! Key constraints:
//! - `no_std`, no heap allocation
//! - Every conversion returns an explicit result; NaN never leaks out
//! - Hardware stays behind the [`AnalogSampler`] and [`CooperativeYield`] traits
//!
//! ```no_run
//! use mq135_core::{GasSensorModel, sampler::FixedSampler};
//!
//! let mut sensor = GasSensorModel::new(FixedSampler::new(1650, 2010), 34);
//!
//! // Read corrected CO2 concentration
//! match sensor.corrected_ppm(23.5, 48.0) {
//!     Ok(ppm) => {}, // Good to go
//!     Err(e) => {}, // Handle invalid measurement
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod logging;

pub mod config;
pub mod constants;
pub mod errors;
pub mod model;
pub mod sampler;
pub mod traits;

// Public API
pub use config::SensorConfig;
pub use errors::{SensorError, SensorResult};
pub use model::{CalibrationOutcome, GasSensorModel};
pub use traits::{AnalogSampler, ChannelId, CooperativeYield};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
