//! Sensor configuration
//!
//! The datasheet fit, the correction polynomial and the analog front-end all
//! vary between sensor batches and boards. Each concern gets its own small
//! struct with documented defaults from [`crate::constants`]; [`SensorConfig`]
//! bundles them for the model.
//!
//! ```rust
//! use mq135_core::config::{SensorConfig, CircuitConfig};
//!
//! let config = SensorConfig::default()
//!     .with_circuit(CircuitConfig::arduino_5v())
//!     .with_initial_r_zero(41.8);
//!
//! assert!(config.validate().is_ok());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        calibration::{CALIBRATION_STEP_KOHM, CALIBRATION_SUCCESS_WINDOW, MAX_CALIBRATION_ITERATIONS, YIELD_INTERVAL},
        circuit::{
            ADC_FULL_SCALE, DEFAULT_REFERENCE_CHANNEL, DIVIDER_GAIN, DIVIDER_OFFSET_KOHM, MIN_SIGNAL_RAW,
            REFERENCE_RESISTOR_KOHM, REFERENCE_VOLTAGE_V,
        },
        correction::{CORA, CORB, CORC, CORD, REFERENCE_HUMIDITY_PCT},
        curve::{ATMOCO2_PPM, DEFAULT_RZERO_KOHM, PARA, PARB},
    },
    errors::{SensorError, SensorResult},
    traits::ChannelId,
};

/// Power-law fit of the Rs/R0 → ppm characteristic
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CurveConfig {
    /// Scaling factor
    pub para: f32,
    /// Exponent, applied negated
    pub parb: f32,
    /// Concentration assumed when deriving RZero from clean air (ppm)
    pub atmo_co2_ppm: f32,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            para: PARA,
            parb: PARB,
            atmo_co2_ppm: ATMOCO2_PPM,
        }
    }
}

impl CurveConfig {
    /// Curve fitted for a different sensor batch
    pub fn new(para: f32, parb: f32, atmo_co2_ppm: f32) -> Self {
        Self { para, parb, atmo_co2_ppm }
    }

    /// Use a current background CO2 value instead of the fit's 400 ppm
    pub fn with_atmospheric_co2(mut self, ppm: f32) -> Self {
        self.atmo_co2_ppm = ppm;
        self
    }

    fn validate(&self) -> SensorResult<()> {
        if !(self.para.is_finite() && self.para > 0.0) {
            return Err(SensorError::InvalidConfig { reason: "curve scale must be positive" });
        }
        if !(self.parb.is_finite() && self.parb != 0.0) {
            return Err(SensorError::InvalidConfig { reason: "curve exponent must be non-zero" });
        }
        if !(self.atmo_co2_ppm.is_finite() && self.atmo_co2_ppm > 0.0) {
            return Err(SensorError::InvalidConfig { reason: "atmospheric CO2 must be positive" });
        }
        Ok(())
    }
}

/// Temperature/humidity correction polynomial
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CorrectionConfig {
    /// Quadratic temperature coefficient
    pub cora: f32,
    /// Linear temperature coefficient
    pub corb: f32,
    /// Constant term
    pub corc: f32,
    /// Humidity coefficient
    pub cord: f32,
    /// Humidity at which the humidity term vanishes (%RH)
    pub reference_humidity_pct: f32,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            cora: CORA,
            corb: CORB,
            corc: CORC,
            cord: CORD,
            reference_humidity_pct: REFERENCE_HUMIDITY_PCT,
        }
    }
}

impl CorrectionConfig {
    fn validate(&self) -> SensorResult<()> {
        let all_finite = [self.cora, self.corb, self.corc, self.cord, self.reference_humidity_pct]
            .iter()
            .all(|c| c.is_finite());
        if !all_finite {
            return Err(SensorError::InvalidConfig { reason: "correction coefficients must be finite" });
        }
        Ok(())
    }
}

/// Analog front-end: converter scale and divider topology
///
/// `Rs = divider_gain * V_ref * reference_resistor / V_signal - divider_offset`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CircuitConfig {
    /// Full-scale code of the converter
    pub adc_full_scale: u16,
    /// Voltage at full scale (V)
    pub reference_voltage: f32,
    /// Known resistor in the reference divider (kOhm)
    pub reference_resistor_kohm: f32,
    /// Gain term of the divider formula
    pub divider_gain: f32,
    /// Offset term of the divider formula (kOhm)
    pub divider_offset_kohm: f32,
    /// Signal codes below this are treated as a disconnected divider
    pub min_signal_raw: u16,
}

impl Default for CircuitConfig {
    fn default() -> Self {
        Self::esp32_reference()
    }
}

impl CircuitConfig {
    /// ESP32 board with 12-bit ADC and the 3/2 ratiometric divider
    pub const fn esp32_reference() -> Self {
        Self {
            adc_full_scale: ADC_FULL_SCALE,
            reference_voltage: REFERENCE_VOLTAGE_V,
            reference_resistor_kohm: REFERENCE_RESISTOR_KOHM,
            divider_gain: DIVIDER_GAIN,
            divider_offset_kohm: DIVIDER_OFFSET_KOHM,
            min_signal_raw: MIN_SIGNAL_RAW,
        }
    }

    /// Arduino Uno/Nano: 10-bit converter on a 5V reference
    pub const fn arduino_5v() -> Self {
        Self {
            adc_full_scale: 1023,
            reference_voltage: 5.0,
            reference_resistor_kohm: REFERENCE_RESISTOR_KOHM,
            divider_gain: DIVIDER_GAIN,
            divider_offset_kohm: DIVIDER_OFFSET_KOHM,
            min_signal_raw: MIN_SIGNAL_RAW,
        }
    }

    /// Other divider topologies
    pub fn with_divider(mut self, gain: f32, offset_kohm: f32) -> Self {
        self.divider_gain = gain;
        self.divider_offset_kohm = offset_kohm;
        self
    }

    /// Reject signal codes below `min_raw` as invalid measurements
    pub fn with_min_signal(mut self, min_raw: u16) -> Self {
        self.min_signal_raw = min_raw.max(1);
        self
    }

    /// Convert a raw code to volts
    #[inline]
    pub fn code_to_volts(&self, raw: u16) -> f32 {
        raw as f32 * self.reference_voltage / self.adc_full_scale as f32
    }

    fn validate(&self) -> SensorResult<()> {
        if self.adc_full_scale == 0 {
            return Err(SensorError::InvalidConfig { reason: "ADC full scale must be non-zero" });
        }
        if !(self.reference_voltage.is_finite() && self.reference_voltage > 0.0) {
            return Err(SensorError::InvalidConfig { reason: "reference voltage must be positive" });
        }
        if !(self.reference_resistor_kohm.is_finite() && self.reference_resistor_kohm > 0.0) {
            return Err(SensorError::InvalidConfig { reason: "reference resistor must be positive" });
        }
        if !(self.divider_gain.is_finite() && self.divider_offset_kohm.is_finite()) {
            return Err(SensorError::InvalidConfig { reason: "divider constants must be finite" });
        }
        if self.min_signal_raw == 0 {
            return Err(SensorError::InvalidConfig { reason: "minimum signal must exclude zero" });
        }
        Ok(())
    }
}

/// Calibration search tuning
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationConfig {
    /// RZero change per iteration (kOhm, positive)
    pub step_kohm: f32,
    /// Hard ceiling on iterations
    pub max_iterations: u32,
    /// Stopping index below which the search counts as converged
    pub success_window: u32,
    /// Iterations between scheduler yields, 0 disables yielding
    pub yield_interval: u32,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            step_kohm: CALIBRATION_STEP_KOHM,
            max_iterations: MAX_CALIBRATION_ITERATIONS,
            success_window: CALIBRATION_SUCCESS_WINDOW,
            yield_interval: YIELD_INTERVAL,
        }
    }
}

impl CalibrationConfig {
    /// Step size in kOhm; the sign is ignored
    pub fn with_step(mut self, step_kohm: f32) -> Self {
        self.step_kohm = libm::fabsf(step_kohm);
        self
    }

    /// Yield every `iterations` steps, or never when 0
    pub fn with_yield_interval(mut self, iterations: u32) -> Self {
        self.yield_interval = iterations;
        self
    }

    /// Replace the success window and the hard iteration cap
    pub fn with_limits(mut self, success_window: u32, max_iterations: u32) -> Self {
        self.success_window = success_window;
        self.max_iterations = max_iterations;
        self
    }

    fn validate(&self) -> SensorResult<()> {
        if !(self.step_kohm.is_finite() && self.step_kohm > 0.0) {
            return Err(SensorError::InvalidConfig { reason: "calibration step must be positive" });
        }
        if self.max_iterations == 0 {
            return Err(SensorError::InvalidConfig { reason: "calibration needs at least one iteration" });
        }
        Ok(())
    }
}

/// Complete configuration of one sensor instance
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// Channel wired to the fixed reference divider
    pub reference_channel: ChannelId,
    /// RZero before the first calibration (kOhm)
    pub initial_r_zero: f32,
    /// Power-law curve
    pub curve: CurveConfig,
    /// Temperature/humidity correction
    pub correction: CorrectionConfig,
    /// Divider and ADC front end
    pub circuit: CircuitConfig,
    /// Baseline search limits
    pub calibration: CalibrationConfig,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            reference_channel: DEFAULT_REFERENCE_CHANNEL,
            initial_r_zero: DEFAULT_RZERO_KOHM,
            curve: CurveConfig::default(),
            correction: CorrectionConfig::default(),
            circuit: CircuitConfig::default(),
            calibration: CalibrationConfig::default(),
        }
    }
}

impl SensorConfig {
    /// Move the reference divider to another channel
    pub fn with_reference_channel(mut self, channel: ChannelId) -> Self {
        self.reference_channel = channel;
        self
    }

    /// Baseline used until the first calibration
    pub fn with_initial_r_zero(mut self, r_zero: f32) -> Self {
        self.initial_r_zero = r_zero;
        self
    }

    /// Replace the gas curve
    pub fn with_curve(mut self, curve: CurveConfig) -> Self {
        self.curve = curve;
        self
    }

    /// Replace the correction polynomial
    pub fn with_correction(mut self, correction: CorrectionConfig) -> Self {
        self.correction = correction;
        self
    }

    /// Replace the front-end description
    pub fn with_circuit(mut self, circuit: CircuitConfig) -> Self {
        self.circuit = circuit;
        self
    }

    /// Replace the search limits
    pub fn with_calibration(mut self, calibration: CalibrationConfig) -> Self {
        self.calibration = calibration;
        self
    }

    /// Check every value the model divides by or raises to a power
    pub fn validate(&self) -> SensorResult<()> {
        if !(self.initial_r_zero.is_finite() && self.initial_r_zero > 0.0) {
            return Err(SensorError::InvalidBaseline { r_zero: self.initial_r_zero });
        }
        self.curve.validate()?;
        self.correction.validate()?;
        self.circuit.validate()?;
        self.calibration.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_board() {
        let config = SensorConfig::default();
        assert_eq!(config.reference_channel, 33);
        assert_eq!(config.initial_r_zero, 76.63);
        assert_eq!(config.circuit.adc_full_scale, 4095);
        assert_eq!(config.calibration.max_iterations, 10_000);
        assert_eq!(config.calibration.success_window, 1_000);
        assert_eq!(config.calibration.yield_interval, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn full_scale_code_is_reference_voltage() {
        let circuit = CircuitConfig::esp32_reference();
        assert!((circuit.code_to_volts(4095) - 2.45).abs() < 1e-6);
        assert_eq!(circuit.code_to_volts(0), 0.0);
    }

    #[test]
    fn rejects_unusable_values() {
        let bad_baseline = SensorConfig::default().with_initial_r_zero(0.0);
        assert!(matches!(bad_baseline.validate(), Err(SensorError::InvalidBaseline { .. })));

        let flat_curve = SensorConfig::default().with_curve(CurveConfig::new(116.6, 0.0, 400.0));
        assert!(matches!(flat_curve.validate(), Err(SensorError::InvalidConfig { .. })));

        let mut circuit = CircuitConfig::default();
        circuit.adc_full_scale = 0;
        assert!(SensorConfig::default().with_circuit(circuit).validate().is_err());

        let mut calibration = CalibrationConfig::default();
        calibration.step_kohm = 0.0;
        assert!(SensorConfig::default().with_calibration(calibration).validate().is_err());
    }

    #[test]
    fn builder_setters_normalise_input() {
        assert_eq!(CalibrationConfig::default().with_step(-0.5).step_kohm, 0.5);
        assert_eq!(CircuitConfig::default().with_min_signal(0).min_signal_raw, 1);
    }
}
