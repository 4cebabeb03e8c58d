//! Analog Front-End of the Reference Board
//!
//! The reference design feeds the sensor divider into one ADC channel and a
//! fixed divider into a second channel. Reading both and taking the ratio
//! cancels supply drift:
//!
//! ```text
//! Rs = DIVIDER_GAIN * Vref_ch * R_ref / Vsig - DIVIDER_OFFSET
//! ```

use crate::traits::ChannelId;

/// Full-scale code of a 12-bit converter.
pub const ADC_FULL_SCALE: u16 = 4095;

/// Voltage corresponding to the full-scale code (V).
///
/// ESP32 ADC1 at 11 dB attenuation after characterisation
pub const REFERENCE_VOLTAGE_V: f32 = 2.450;

/// Known resistor in the reference divider (kOhm).
pub const REFERENCE_RESISTOR_KOHM: f32 = 10.0;

/// Gain term of the divider topology.
pub const DIVIDER_GAIN: f32 = 3.0;

/// Offset term of the divider topology (kOhm).
pub const DIVIDER_OFFSET_KOHM: f32 = 2.0;

/// Lowest signal code accepted as a real reading.
///
/// A zero code means the divider output is floating or shorted to ground.
pub const MIN_SIGNAL_RAW: u16 = 1;

/// Channel wired to the fixed reference divider (GPIO33 on the reference board).
pub const DEFAULT_REFERENCE_CHANNEL: ChannelId = 33;
