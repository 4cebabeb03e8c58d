//! Calibration Search Parameters

/// Change applied to RZero on every search iteration (kOhm).
pub const CALIBRATION_STEP_KOHM: f32 = 0.1;

/// Hard ceiling on search iterations.
pub const MAX_CALIBRATION_ITERATIONS: u32 = 10_000;

/// Searches stopping at or beyond this iteration index are reported as failed.
///
/// Iterations between this window and [`MAX_CALIBRATION_ITERATIONS`] still
/// run and still move RZero. Whether the gap is a safety margin or a latent
/// defect is undecided, so both values are kept as they are.
pub const CALIBRATION_SUCCESS_WINDOW: u32 = 1_000;

/// Iterations between voluntary yields to the scheduler.
pub const YIELD_INTERVAL: u32 = 30;
