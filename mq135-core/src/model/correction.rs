//! Temperature and humidity compensation
//!
//! Metal-oxide sensitivity drifts with both temperature and moisture. The
//! correction is a multiplicative factor on Rs, normalised to the
//! datasheet's 33% RH test condition.
//!
//! No range check is applied. Inputs outside the sensor's rated range
//! extrapolate the polynomial and can produce a factor that is physically
//! meaningless; only a factor that would break the division is rejected.

use crate::{
    config::CorrectionConfig,
    errors::{SensorError, SensorResult},
};

/// Unitless factor `cora*t² - corb*t + corc - (h - h_ref)*cord`
pub fn correction_factor(temperature: f32, humidity: f32, correction: &CorrectionConfig) -> f32 {
    correction.cora * temperature * temperature - correction.corb * temperature + correction.corc
        - (humidity - correction.reference_humidity_pct) * correction.cord
}

/// Divide a raw resistance by the environmental correction factor
pub fn corrected_resistance(
    resistance: f32,
    temperature: f32,
    humidity: f32,
    correction: &CorrectionConfig,
) -> SensorResult<f32> {
    let factor = correction_factor(temperature, humidity, correction);
    if !(factor.is_finite() && factor > 0.0) {
        return Err(SensorError::InvalidCorrection { factor });
    }
    Ok(resistance / factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_celsius_reference_humidity_is_constant_term() {
        let correction = CorrectionConfig::default();
        assert_eq!(correction_factor(0.0, 33.0, &correction), correction.corc);
    }

    #[test]
    fn room_temperature_factor() {
        // 0.00035*625 - 0.02718*25 + 1.39538 = 0.93463, not the constant term
        let correction = CorrectionConfig::default();
        let factor = correction_factor(25.0, 33.0, &correction);
        assert!((factor - 0.93463).abs() < 1e-5);
        assert!((factor - correction.corc).abs() > 0.1);
    }

    #[test]
    fn humid_air_lowers_factor() {
        let correction = CorrectionConfig::default();
        let dry = correction_factor(20.0, 20.0, &correction);
        let humid = correction_factor(20.0, 80.0, &correction);
        assert!((dry - humid - 60.0 * correction.cord).abs() < 1e-5);
    }

    #[test]
    fn zero_factor_is_rejected() {
        let correction = CorrectionConfig {
            cora: 0.0,
            corb: 0.0,
            corc: 0.0,
            cord: 0.0,
            reference_humidity_pct: 33.0,
        };
        assert_eq!(
            corrected_resistance(30.0, 20.0, 40.0, &correction),
            Err(SensorError::InvalidCorrection { factor: 0.0 })
        );
    }

    #[test]
    fn out_of_range_humidity_extrapolates() {
        // 1000% RH drives the default polynomial negative
        let result = corrected_resistance(30.0, 20.0, 1000.0, &CorrectionConfig::default());
        assert!(matches!(result, Err(SensorError::InvalidCorrection { .. })));
    }

    proptest! {
        #[test]
        fn humidity_term_vanishes_at_reference(t in -40.0f32..85.0) {
            let correction = CorrectionConfig::default();
            let polynomial = correction.cora * t * t - correction.corb * t + correction.corc;
            prop_assert_eq!(correction_factor(t, 33.0, &correction), polynomial);
        }
    }
}
