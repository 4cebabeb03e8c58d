//! RZero calibration search
//!
//! Walks the baseline in fixed steps until the estimate crosses the target
//! concentration:
//!
//! ```text
//! estimate > target  →  step = -step_kohm, stop once estimate <= target
//! estimate <= target →  step = +step_kohm, stop once estimate >= target
//! ```
//!
//! Lowering R0 raises Rs/R0 and so lowers ppm, which is why an overshooting
//! estimate walks the baseline down.
//!
//! Two ceilings apply. The loop runs for at most `max_iterations`, but only a
//! stop at an index below `success_window` is reported as converged. A run
//! that crosses the target later still leaves RZero where it crossed and is
//! reported as [`CalibrationOutcome::Failed`]. The baseline is never rolled
//! back; reverting is up to the caller.

use crate::{
    config::CalibrationConfig,
    errors::{SensorError, SensorResult},
    traits::CooperativeYield,
};

/// Terminal state of a calibration run
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationOutcome {
    /// Target crossed inside the success window
    Converged {
        /// Index of the iteration that crossed the target
        iterations: u32,
        /// Baseline after the run (kOhm)
        r_zero: f32,
    },
    /// Target crossed too late, or never
    Failed {
        /// Crossing index, or `max_iterations` when the loop ran out
        iterations: u32,
        /// Last baseline the search visited (kOhm)
        r_zero: f32,
    },
}

impl CalibrationOutcome {
    /// Whether the walk stopped inside the success window
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Converged { .. })
    }

    /// Index of the iteration the walk stopped on
    pub fn iterations(&self) -> u32 {
        match *self {
            Self::Converged { iterations, .. } | Self::Failed { iterations, .. } => iterations,
        }
    }

    /// Baseline the walk ended on (kOhm)
    pub fn r_zero(&self) -> f32 {
        match *self {
            Self::Converged { r_zero, .. } | Self::Failed { r_zero, .. } => r_zero,
        }
    }
}

/// Search `r_zero` until `estimate(r_zero)` crosses `target_ppm`
///
/// `estimate` maps a candidate baseline to a concentration. An
/// `InvalidBaseline` from it means the walk has left the positive range;
/// that iteration simply does not satisfy the stop condition. A starting
/// baseline outside the positive range reads as below target, so the walk
/// climbs back. Any other error aborts the run with `r_zero` left at the
/// value that failed.
pub fn search_r_zero<F, Y>(
    r_zero: &mut f32,
    target_ppm: f32,
    config: &CalibrationConfig,
    mut estimate: F,
    scheduler: &mut Y,
) -> SensorResult<CalibrationOutcome>
where
    F: FnMut(f32) -> SensorResult<f32>,
    Y: CooperativeYield + ?Sized,
{
    if !target_ppm.is_finite() {
        return Err(SensorError::NonFinite);
    }

    let above = match estimate(*r_zero) {
        Ok(ppm) => ppm > target_ppm,
        Err(SensorError::InvalidBaseline { .. }) => false,
        Err(e) => return Err(e),
    };
    let step = if above { -config.step_kohm } else { config.step_kohm };

    let mut iteration = 0;
    while iteration < config.max_iterations {
        *r_zero += step;

        let crossed = match estimate(*r_zero) {
            Ok(ppm) if step < 0.0 => ppm <= target_ppm,
            Ok(ppm) => ppm >= target_ppm,
            Err(SensorError::InvalidBaseline { .. }) => false,
            Err(e) => return Err(e),
        };
        if crossed {
            break;
        }

        if config.yield_interval != 0 && iteration % config.yield_interval == 0 {
            scheduler.yield_now();
        }
        iteration += 1;
    }

    if iteration < config.success_window {
        diag_info!("Calibrated in {} iterations, RZero = {}", iteration, *r_zero);
        Ok(CalibrationOutcome::Converged { iterations: iteration, r_zero: *r_zero })
    } else {
        diag_error!("Failed to calibrate in {} iterations", iteration);
        Ok(CalibrationOutcome::Failed { iterations: iteration, r_zero: *r_zero })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::NoYield;

    /// Monotonic stand-in for the corrected-ppm estimate: ppm = 10 * r_zero
    fn linear(r_zero: f32) -> SensorResult<f32> {
        if r_zero > 0.0 {
            Ok(10.0 * r_zero)
        } else {
            Err(SensorError::InvalidBaseline { r_zero })
        }
    }

    #[test]
    fn non_positive_start_walks_up() {
        let mut r_zero = -1.0;
        let outcome = search_r_zero(&mut r_zero, 5.0, &CalibrationConfig::default(), linear, &mut NoYield)
            .unwrap();
        assert!(outcome.is_success());
        assert!(r_zero >= 0.5 - 1e-3 && r_zero < 0.65, "{}", r_zero);
    }

    #[test]
    fn walks_up_when_undershooting() {
        let mut r_zero = 10.0;
        let outcome = search_r_zero(&mut r_zero, 150.0, &CalibrationConfig::default(), linear, &mut NoYield)
            .unwrap();
        assert!(outcome.is_success());
        assert!((r_zero - 15.0).abs() <= 0.1 + 1e-3);
        assert_eq!(outcome.r_zero(), r_zero);
    }

    #[test]
    fn walks_down_when_overshooting() {
        let mut r_zero = 20.0;
        let outcome = search_r_zero(&mut r_zero, 150.0, &CalibrationConfig::default(), linear, &mut NoYield)
            .unwrap();
        assert!(outcome.is_success());
        assert!(r_zero <= 15.0 + 1e-3 && r_zero > 14.9 - 1e-3);
    }

    #[test]
    fn equal_estimate_stops_on_first_step() {
        let mut r_zero = 10.0;
        let outcome = search_r_zero(&mut r_zero, 100.0, &CalibrationConfig::default(), linear, &mut NoYield)
            .unwrap();
        assert_eq!(outcome.iterations(), 0);
        assert!((r_zero - 10.1).abs() < 1e-4);
    }

    #[test]
    fn yields_every_interval() {
        let mut yields = 0u32;
        let mut r_zero = 10.0;
        let mut hook = || yields += 1;
        // Crosses on iteration 99: yields at 0, 30, 60, 90
        search_r_zero(&mut r_zero, 200.0, &CalibrationConfig::default(), linear, &mut hook).unwrap();
        assert_eq!(yields, 4);
    }

    #[test]
    fn zero_interval_never_yields() {
        let mut yields = 0u32;
        let mut r_zero = 10.0;
        let mut hook = || yields += 1;
        let config = CalibrationConfig::default().with_yield_interval(0);
        search_r_zero(&mut r_zero, 200.0, &config, linear, &mut hook).unwrap();
        assert_eq!(yields, 0);
    }

    #[test]
    fn other_errors_abort() {
        let mut r_zero = 10.0;
        let mut calls = 0;
        let flaky = |r: f32| {
            calls += 1;
            if calls > 3 { Err(SensorError::InvalidMeasurement { raw: 0 }) } else { linear(r) }
        };
        let result = search_r_zero(&mut r_zero, 500.0, &CalibrationConfig::default(), flaky, &mut NoYield);
        assert_eq!(result, Err(SensorError::InvalidMeasurement { raw: 0 }));
        assert!((r_zero - 10.3).abs() < 1e-4);
    }

    #[test]
    fn non_finite_target_is_rejected() {
        let mut r_zero = 10.0;
        let result = search_r_zero(&mut r_zero, f32::NAN, &CalibrationConfig::default(), linear, &mut NoYield);
        assert_eq!(result, Err(SensorError::NonFinite));
        assert_eq!(r_zero, 10.0);
    }
}
