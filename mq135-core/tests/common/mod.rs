//! Shared collaborators for integration tests
//!
//! - `ScriptedSampler`: per-channel codes, optional busy polls and faults
//! - `CountingYield`: records how often the model yields
//! - fixture helpers built on the default reference-board configuration

#![allow(dead_code)]

use mq135_core::{
    config::SensorConfig,
    model::{corrected_resistance, ppm_from_resistance, resistance_from_samples},
    traits::{AnalogSampler, ChannelId, CooperativeYield},
};

pub const SIGNAL_CHANNEL: ChannelId = 34;
pub const REFERENCE_CHANNEL: ChannelId = 33;

/// Hardware error injected by `ScriptedSampler`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdcTimeout;

/// Sampler with scripted behaviour per conversion
#[derive(Debug, Clone)]
pub struct ScriptedSampler {
    pub signal: u16,
    pub reference: u16,
    /// `WouldBlock` polls before each conversion completes
    pub busy_polls: u32,
    /// Conversions to serve before every further one fails
    pub fail_after: Option<u32>,
    pending: u32,
    pub conversions: u32,
    pub polls: u32,
}

impl ScriptedSampler {
    pub fn new(signal: u16, reference: u16) -> Self {
        Self {
            signal,
            reference,
            busy_polls: 0,
            fail_after: None,
            pending: 0,
            conversions: 0,
            polls: 0,
        }
    }

    pub fn busy(mut self, polls: u32) -> Self {
        self.busy_polls = polls;
        self
    }

    pub fn failing_after(mut self, conversions: u32) -> Self {
        self.fail_after = Some(conversions);
        self
    }
}

impl AnalogSampler for ScriptedSampler {
    type Error = AdcTimeout;

    fn sample(&mut self, channel: ChannelId) -> nb::Result<u16, AdcTimeout> {
        self.polls += 1;
        if self.pending < self.busy_polls {
            self.pending += 1;
            return Err(nb::Error::WouldBlock);
        }
        self.pending = 0;

        if let Some(limit) = self.fail_after {
            if self.conversions >= limit {
                return Err(nb::Error::Other(AdcTimeout));
            }
        }
        self.conversions += 1;

        if channel == REFERENCE_CHANNEL {
            Ok(self.reference)
        } else {
            Ok(self.signal)
        }
    }
}

/// Scheduler that only counts
#[derive(Debug, Default)]
pub struct CountingYield {
    pub yields: u32,
}

impl CooperativeYield for CountingYield {
    fn yield_now(&mut self) {
        self.yields += 1;
    }
}

/// Corrected resistance the default configuration computes for a code pair
pub fn expected_corrected_resistance(signal: u16, reference: u16, temperature: f32, humidity: f32) -> f32 {
    let config = SensorConfig::default();
    let rs = resistance_from_samples(signal, reference, &config.circuit).unwrap();
    corrected_resistance(rs, temperature, humidity, &config.correction).unwrap()
}

/// Concentration the corrected estimate reads once the baseline equals `r_zero`
pub fn target_for_baseline(signal: u16, reference: u16, temperature: f32, humidity: f32, r_zero: f32) -> f32 {
    let resistance = expected_corrected_resistance(signal, reference, temperature, humidity);
    ppm_from_resistance(resistance, r_zero, &SensorConfig::default().curve).unwrap()
}
