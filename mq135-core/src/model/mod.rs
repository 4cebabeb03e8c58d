//! MQ135 Gas Sensor Model
//!
//! ## Measurement Chain
//!
//! ```text
//! ADC codes ──► Rs (kOhm) ──► Rs / factor(t, h) ──► ppm = para·(Rs/R0)^-parb
//!  signal,ref    resistance     correction            curve
//! ```
//!
//! Each stage is a pure function in its own module so it can be tested
//! without hardware. [`GasSensorModel`] binds them to a sampler, a channel
//! pair, a configuration and the one piece of mutable state: the calibrated
//! baseline RZero.
//!
//! ## Calibration
//!
//! Two ways to obtain RZero:
//!
//! - **Clean-air derivation**: [`GasSensorModel::derived_r_zero`] solves the
//!   curve assuming the sensor currently sees atmospheric CO2. It is a query
//!   and never changes the stored baseline.
//! - **Reference search**: [`GasSensorModel::calibrate`] walks the stored
//!   baseline until the corrected estimate matches a concentration measured
//!   by a reference instrument.
//!
//! ## Usage Example
//!
//! ```rust
//! use mq135_core::{GasSensorModel, sampler::{FixedSampler, NoYield}};
//!
//! let mut sensor = GasSensorModel::new(FixedSampler::new(1800, 1800), 34);
//!
//! let outcome = sensor.calibrate(415.0, 22.0, 40.0, &mut NoYield)?;
//! if !outcome.is_success() {
//!     sensor.set_r_zero(76.63)?;
//! }
//!
//! let ppm = sensor.corrected_ppm(22.0, 40.0)?;
//! assert!(ppm > 0.0);
//! # Ok::<(), mq135_core::SensorError>(())
//! ```
//!
//! ## Sharing
//!
//! The model holds no lock. One instance belongs to one task; if several
//! tasks need readings, put the instance behind the platform's mutex or
//! route requests to its owning task.

mod calibration;
mod correction;
mod curve;
mod resistance;

pub use calibration::{search_r_zero, CalibrationOutcome};
pub use correction::{correction_factor, corrected_resistance};
pub use curve::{atmospheric_r_zero, ppm_from_resistance, r_zero_for};
pub use resistance::resistance_from_samples;

use crate::{
    config::SensorConfig,
    errors::{SensorError, SensorResult},
    traits::{AnalogSampler, ChannelId, CooperativeYield},
};

/// Block on one conversion, mapping hardware errors to `SamplerFault`
fn read_channel<S: AnalogSampler>(sampler: &mut S, channel: ChannelId) -> SensorResult<u16> {
    nb::block!(sampler.sample(channel)).map_err(|_| {
        diag_error!("ADC conversion failed on channel {}", channel);
        SensorError::SamplerFault { channel }
    })
}

/// Sample the signal then the reference channel and estimate Rs
fn measure_resistance<S: AnalogSampler>(
    sampler: &mut S,
    channel: ChannelId,
    config: &SensorConfig,
) -> SensorResult<f32> {
    let signal = read_channel(sampler, channel)?;
    let reference = read_channel(sampler, config.reference_channel)?;
    resistance_from_samples(signal, reference, &config.circuit)
}

fn measure_corrected_resistance<S: AnalogSampler>(
    sampler: &mut S,
    channel: ChannelId,
    config: &SensorConfig,
    temperature: f32,
    humidity: f32,
) -> SensorResult<f32> {
    let resistance = measure_resistance(sampler, channel, config)?;
    corrected_resistance(resistance, temperature, humidity, &config.correction)
}

/// One MQ135 sensor bound to an analog channel
#[derive(Debug)]
pub struct GasSensorModel<S> {
    sampler: S,
    channel: ChannelId,
    r_zero: f32,
    config: SensorConfig,
}

impl<S: AnalogSampler> GasSensorModel<S> {
    /// Sensor on `channel` with the reference board's configuration
    pub fn new(sampler: S, channel: ChannelId) -> Self {
        let config = SensorConfig::default();
        Self {
            sampler,
            channel,
            r_zero: config.initial_r_zero,
            config,
        }
    }

    /// Sensor with a tuned configuration
    pub fn with_config(sampler: S, channel: ChannelId, config: SensorConfig) -> SensorResult<Self> {
        config.validate()?;
        Ok(Self {
            sampler,
            channel,
            r_zero: config.initial_r_zero,
            config,
        })
    }

    /// Signal channel
    pub fn channel(&self) -> ChannelId {
        self.channel
    }

    /// Reference divider channel
    pub fn reference_channel(&self) -> ChannelId {
        self.config.reference_channel
    }

    /// Active configuration
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Current baseline resistance (kOhm)
    pub fn r_zero(&self) -> f32 {
        self.r_zero
    }

    /// Restore a known-good baseline, e.g. after a failed calibration
    pub fn set_r_zero(&mut self, r_zero: f32) -> SensorResult<()> {
        if !(r_zero.is_finite() && r_zero > 0.0) {
            return Err(SensorError::InvalidBaseline { r_zero });
        }
        self.r_zero = r_zero;
        Ok(())
    }

    /// Direct access to the sampler
    pub fn sampler_mut(&mut self) -> &mut S {
        &mut self.sampler
    }

    /// Give the sampler back to the caller
    pub fn release(self) -> S {
        self.sampler
    }

    /// Environmental correction factor; pure, no sampling
    pub fn correction_factor(&self, temperature: f32, humidity: f32) -> f32 {
        correction_factor(temperature, humidity, &self.config.correction)
    }

    /// Sensor resistance in kOhm
    pub fn resistance(&mut self) -> SensorResult<f32> {
        measure_resistance(&mut self.sampler, self.channel, &self.config)
    }

    /// Sensor resistance in kOhm, compensated for temperature and humidity
    pub fn corrected_resistance(&mut self, temperature: f32, humidity: f32) -> SensorResult<f32> {
        measure_corrected_resistance(&mut self.sampler, self.channel, &self.config, temperature, humidity)
    }

    /// CO2 concentration in ppm, assuming CO2 is the only reducing gas
    pub fn ppm(&mut self) -> SensorResult<f32> {
        let resistance = self.resistance()?;
        ppm_from_resistance(resistance, self.r_zero, &self.config.curve)
    }

    /// CO2 concentration in ppm, compensated for temperature and humidity
    pub fn corrected_ppm(&mut self, temperature: f32, humidity: f32) -> SensorResult<f32> {
        let resistance = self.corrected_resistance(temperature, humidity)?;
        ppm_from_resistance(resistance, self.r_zero, &self.config.curve)
    }

    /// RZero the sensor would have if it currently sat in atmospheric CO2
    ///
    /// Does not change the stored baseline.
    pub fn derived_r_zero(&mut self) -> SensorResult<f32> {
        let resistance = self.resistance()?;
        atmospheric_r_zero(resistance, &self.config.curve)
    }

    /// Compensated variant of [`derived_r_zero`](Self::derived_r_zero)
    pub fn corrected_derived_r_zero(&mut self, temperature: f32, humidity: f32) -> SensorResult<f32> {
        let resistance = self.corrected_resistance(temperature, humidity)?;
        atmospheric_r_zero(resistance, &self.config.curve)
    }

    /// Adjust the stored baseline until the corrected estimate reads `cal_ppm`
    ///
    /// Every iteration takes a fresh sample pair, and the scheduler gets a
    /// chance to run other tasks every `yield_interval` iterations. The
    /// baseline keeps whatever value the search last set, on success and on
    /// failure alike.
    pub fn calibrate<Y>(
        &mut self,
        cal_ppm: f32,
        temperature: f32,
        humidity: f32,
        scheduler: &mut Y,
    ) -> SensorResult<CalibrationOutcome>
    where
        Y: CooperativeYield + ?Sized,
    {
        let Self { sampler, channel, r_zero, config } = self;
        let channel = *channel;
        let config = &*config;

        search_r_zero(
            r_zero,
            cal_ppm,
            &config.calibration,
            |candidate| {
                let resistance = measure_corrected_resistance(&mut *sampler, channel, config, temperature, humidity)?;
                ppm_from_resistance(resistance, candidate, &config.curve)
            },
            scheduler,
        )
    }
}
