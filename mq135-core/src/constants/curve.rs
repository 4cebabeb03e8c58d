//! Datasheet Curve Parameters
//!
//! The MQ135 datasheet plots Rs/R0 against concentration on log-log axes.
//! For CO2 the curve is well approximated by
//!
//! ```text
//! ppm = PARA * (Rs / R0) ^ (-PARB)
//! ```

/// Scaling factor of the CO2 power-law fit.
///
/// Source: least-squares fit of the MQ135 datasheet CO2 curve
pub const PARA: f32 = 116.6020682;

/// Exponent of the CO2 power-law fit (applied negated).
///
/// Source: least-squares fit of the MQ135 datasheet CO2 curve
pub const PARB: f32 = 2.769034857;

/// Atmospheric CO2 concentration assumed during clean-air calibration (ppm).
///
/// Outdoor background has risen past 420 ppm; 400 ppm is the value the
/// curve constants above were fitted against.
pub const ATMOCO2_PPM: f32 = 400.0;

/// Baseline resistance before any calibration has run (kOhm).
///
/// Source: typical MQ135 module after 24h burn-in
pub const DEFAULT_RZERO_KOHM: f32 = 76.63;
