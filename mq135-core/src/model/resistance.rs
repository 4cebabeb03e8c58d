//! Ratiometric resistance estimate
//!
//! The signal divider and the fixed reference divider share a supply, so
//! reading both in quick succession and using their ratio cancels supply
//! ripple and slow reference drift:
//!
//! ```text
//! V = raw * reference_voltage / full_scale
//! Rs = gain * V_ref * R_ref / V_signal - offset
//! ```
//!
//! With the reference board's gain of 3 and offset of 2 kOhm, equal codes on
//! both channels read as 28 kOhm.

use crate::{
    config::CircuitConfig,
    errors::{ensure_finite, SensorError, SensorResult},
};

/// Sensor resistance (kOhm) from a signal/reference sample pair
pub fn resistance_from_samples(signal: u16, reference: u16, circuit: &CircuitConfig) -> SensorResult<f32> {
    if signal < circuit.min_signal_raw || signal > circuit.adc_full_scale {
        return Err(SensorError::InvalidMeasurement { raw: signal });
    }
    if reference > circuit.adc_full_scale {
        return Err(SensorError::InvalidMeasurement { raw: reference });
    }

    let signal_v = circuit.code_to_volts(signal);
    let reference_v = circuit.code_to_volts(reference);
    let rs = circuit.divider_gain * reference_v * circuit.reference_resistor_kohm / signal_v
        - circuit.divider_offset_kohm;

    diag_info!("signal = {} V, ref = {} V, Rs = {} kOhm", signal_v, reference_v, rs);

    let rs = ensure_finite(rs)?;
    if rs <= 0.0 {
        return Err(SensorError::NonPositiveResistance { resistance: rs });
    }
    Ok(rs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn equal_codes_read_gain_minus_offset() {
        let circuit = CircuitConfig::default();
        let rs = resistance_from_samples(2000, 2000, &circuit).unwrap();
        assert!((rs - 28.0).abs() < 1e-4);
    }

    #[test]
    fn zero_signal_is_invalid_measurement() {
        let circuit = CircuitConfig::default();
        assert_eq!(
            resistance_from_samples(0, 2000, &circuit),
            Err(SensorError::InvalidMeasurement { raw: 0 })
        );
    }

    #[test]
    fn near_zero_threshold_is_configurable() {
        let circuit = CircuitConfig::default().with_min_signal(16);
        assert!(resistance_from_samples(15, 2000, &circuit).is_err());
        assert!(resistance_from_samples(16, 2000, &circuit).is_ok());
    }

    #[test]
    fn codes_above_full_scale_are_rejected() {
        let circuit = CircuitConfig::arduino_5v();
        assert_eq!(
            resistance_from_samples(1024, 500, &circuit),
            Err(SensorError::InvalidMeasurement { raw: 1024 })
        );
        assert_eq!(
            resistance_from_samples(500, 2000, &circuit),
            Err(SensorError::InvalidMeasurement { raw: 2000 })
        );
    }

    #[test]
    fn dead_reference_gives_non_positive_resistance() {
        let circuit = CircuitConfig::default();
        let result = resistance_from_samples(2000, 0, &circuit);
        assert!(matches!(result, Err(SensorError::NonPositiveResistance { .. })));
    }

    #[test]
    fn custom_divider_topology() {
        // Plain load-resistor divider: Rs = R_ref * V_ref / V_sig - R_ref
        let circuit = CircuitConfig::default().with_divider(1.0, 10.0);
        let rs = resistance_from_samples(1000, 3000, &circuit).unwrap();
        assert!((rs - 20.0).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn positive_for_valid_pairs(signal in 1u16..=4095, reference in 300u16..=4095) {
            let rs = resistance_from_samples(signal, reference, &CircuitConfig::default()).unwrap();
            prop_assert!(rs > 0.0);
        }

        #[test]
        fn decreasing_in_signal(signal in 1u16..4095, reference in 300u16..=4095) {
            let circuit = CircuitConfig::default();
            let lower = resistance_from_samples(signal, reference, &circuit).unwrap();
            let higher = resistance_from_samples(signal + 1, reference, &circuit).unwrap();
            prop_assert!(higher < lower);
        }
    }
}
