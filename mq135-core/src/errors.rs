//! Error Types for Measurement and Calibration Faults
//!
//! ## Design Philosophy
//!
//! The sensor model runs on small microcontrollers, so errors follow the same
//! rules as the rest of the crate:
//!
//! 1. **Small Size**: every variant carries at most a couple of scalars.
//!
//! 2. **No Heap Allocation**: messages are `&'static str`, never `String`.
//!
//! 3. **Copy Semantics**: errors are returned from every conversion and are
//!    cheap to copy into logs or status registers.
//!
//! ## Error Categories
//!
//! ### Measurement Faults
//! - `InvalidMeasurement`: signal sample at or near zero, or above full scale
//! - `NonPositiveResistance`: the divider formula produced `Rs <= 0`
//! - `NonFinite`: an intermediate value left the finite range
//!
//! ### Model Faults
//! - `InvalidCorrection`: temperature/humidity drove the correction factor
//!   to zero or below
//! - `InvalidBaseline`: `RZero` is not strictly positive
//!
//! ### System Issues
//! - `SamplerFault`: the analog sampler reported an error
//! - `InvalidConfig`: a configuration value cannot be used
//!
//! A calibration run that does not converge is *not* an error. It is reported
//! through [`CalibrationOutcome::Failed`](crate::model::CalibrationOutcome).
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use mq135_core::{GasSensorModel, SensorError, sampler::FixedSampler};
//!
//! let mut sensor = GasSensorModel::new(FixedSampler::new(1200, 1500), 34);
//!
//! match sensor.corrected_ppm(21.0, 45.0) {
//!     Ok(_ppm) => {
//!         // publish_reading(ppm);
//!     }
//!     Err(SensorError::InvalidMeasurement { .. }) => {
//!         // Divider output floating or shorted - check wiring
//!     }
//!     Err(SensorError::InvalidBaseline { .. }) => {
//!         // Calibration walked RZero out of range - restore a known value
//!     }
//!     Err(_) => {
//!         // Other errors - log and investigate
//!     }
//! }
//! ```

use thiserror_no_std::Error;

use crate::traits::ChannelId;

/// Result type for sensor model operations
pub type SensorResult<T> = Result<T, SensorError>;

/// Sensor model errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SensorError {
    /// Signal sample is zero, near zero, or beyond the converter's full scale
    #[error("Invalid measurement: raw sample {raw}")]
    InvalidMeasurement {
        /// Raw code that was rejected
        raw: u16,
    },

    /// Divider formula produced a resistance that is not strictly positive
    #[error("Resistance {resistance} kOhm is not positive")]
    NonPositiveResistance {
        /// Computed resistance in kOhm
        resistance: f32,
    },

    /// Temperature/humidity correction factor is unusable
    #[error("Correction factor {factor} is not positive")]
    InvalidCorrection {
        /// Computed correction factor
        factor: f32,
    },

    /// Baseline resistance is not strictly positive
    #[error("RZero {r_zero} kOhm is not positive")]
    InvalidBaseline {
        /// Baseline resistance at the time of the call
        r_zero: f32,
    },

    /// Computation produced NaN or infinity
    #[error("Invalid value: not a valid number")]
    NonFinite,

    /// The analog sampler reported a hardware error
    #[error("Sampler fault on channel {channel}")]
    SamplerFault {
        /// Channel that was being sampled
        channel: ChannelId,
    },

    /// A configuration value cannot be used
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What was wrong
        reason: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidMeasurement { raw } =>
                defmt::write!(fmt, "Invalid measurement: raw {}", raw),
            Self::NonPositiveResistance { resistance } =>
                defmt::write!(fmt, "Resistance {} kOhm not positive", resistance),
            Self::InvalidCorrection { factor } =>
                defmt::write!(fmt, "Correction factor {} not positive", factor),
            Self::InvalidBaseline { r_zero } =>
                defmt::write!(fmt, "RZero {} kOhm not positive", r_zero),
            Self::NonFinite =>
                defmt::write!(fmt, "Invalid value"),
            Self::SamplerFault { channel } =>
                defmt::write!(fmt, "Sampler fault on channel {}", channel),
            Self::InvalidConfig { reason } =>
                defmt::write!(fmt, "Invalid configuration: {}", reason),
        }
    }
}

/// Reject NaN and infinity at a conversion boundary
pub(crate) fn ensure_finite(value: f32) -> SensorResult<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SensorError::NonFinite)
    }
}
