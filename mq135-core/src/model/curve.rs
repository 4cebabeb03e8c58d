//! Power-law mapping between resistance and concentration
//!
//! Forward:
//! ```text
//! ppm = para * (Rs / R0) ^ (-parb)
//! ```
//!
//! Inverse, solving the same curve for R0 at a known concentration:
//! ```text
//! R0 = Rs * (ppm / para) ^ (1 / parb)
//! ```
//!
//! `libm::powf` keeps both directions available without `std`.

use crate::{
    config::CurveConfig,
    errors::{ensure_finite, SensorError, SensorResult},
};

fn check_resistance(resistance: f32) -> SensorResult<f32> {
    if resistance.is_finite() && resistance > 0.0 {
        Ok(resistance)
    } else {
        Err(SensorError::NonPositiveResistance { resistance })
    }
}

/// Concentration (ppm) for a resistance against the baseline `r_zero`
pub fn ppm_from_resistance(resistance: f32, r_zero: f32, curve: &CurveConfig) -> SensorResult<f32> {
    if !(r_zero.is_finite() && r_zero > 0.0) {
        return Err(SensorError::InvalidBaseline { r_zero });
    }
    let resistance = check_resistance(resistance)?;
    ensure_finite(curve.para * libm::powf(resistance / r_zero, -curve.parb))
}

/// Baseline that makes `resistance` read exactly `reference_ppm`
pub fn r_zero_for(resistance: f32, reference_ppm: f32, curve: &CurveConfig) -> SensorResult<f32> {
    let resistance = check_resistance(resistance)?;
    if !(reference_ppm.is_finite() && reference_ppm > 0.0) {
        return Err(SensorError::InvalidConfig { reason: "reference concentration must be positive" });
    }
    ensure_finite(resistance * libm::powf(reference_ppm / curve.para, 1.0 / curve.parb))
}

/// Baseline assuming the sensor currently sits in clean outdoor air
pub fn atmospheric_r_zero(resistance: f32, curve: &CurveConfig) -> SensorResult<f32> {
    r_zero_for(resistance, curve.atmo_co2_ppm, curve)
}
