//! Temperature and Humidity Dependence
//!
//! The datasheet dependence chart is modelled as a quadratic in temperature
//! plus a linear humidity term, normalised so that the factor is close to 1
//! at 20°C and 33% RH:
//!
//! ```text
//! factor = CORA*t² - CORB*t + CORC - (h - 33)*CORD
//! ```
//!
//! The fit is only meaningful inside the sensor's rated range (-10..45°C,
//! <95% RH). Nothing clamps inputs outside it.

/// Quadratic temperature coefficient.
pub const CORA: f32 = 0.00035;

/// Linear temperature coefficient (subtracted).
pub const CORB: f32 = 0.02718;

/// Constant term.
pub const CORC: f32 = 1.39538;

/// Humidity coefficient per %RH away from the reference humidity.
pub const CORD: f32 = 0.0018;

/// Relative humidity the datasheet curves were recorded at (%).
///
/// Source: MQ135 datasheet, "Sensitivity characteristics" test conditions
pub const REFERENCE_HUMIDITY_PCT: f32 = 33.0;
