//! Reference collaborator implementations
//!
//! Hardware ports live in board crates. The types here cover host builds,
//! simulations and tests.

use core::convert::Infallible;

use crate::{
    config::SensorConfig,
    constants::circuit::DEFAULT_REFERENCE_CHANNEL,
    traits::{AnalogSampler, ChannelId, CooperativeYield},
};

/// Sampler returning preset codes
///
/// The reference channel reads `reference`; every other channel reads
/// `signal`.
#[derive(Debug, Clone)]
pub struct FixedSampler {
    signal: u16,
    reference: u16,
    reference_channel: ChannelId,
    reads: u32,
}

impl FixedSampler {
    /// Sampler wired like the reference board
    pub fn new(signal: u16, reference: u16) -> Self {
        Self {
            signal,
            reference,
            reference_channel: DEFAULT_REFERENCE_CHANNEL,
            reads: 0,
        }
    }

    /// Sampler serving the reference code on `config.reference_channel`
    pub fn for_config(signal: u16, reference: u16, config: &SensorConfig) -> Self {
        Self::new(signal, reference).with_reference_channel(config.reference_channel)
    }

    /// Move the reference divider to another channel
    ///
    /// Must match [`SensorConfig::reference_channel`] of the model reading
    /// this sampler, otherwise the model gets the signal code for both
    /// channels. [`for_config`](Self::for_config) keeps them in step.
    pub fn with_reference_channel(mut self, channel: ChannelId) -> Self {
        self.reference_channel = channel;
        self
    }

    /// Code served on every channel but the reference
    pub fn set_signal(&mut self, signal: u16) {
        self.signal = signal;
    }

    /// Code served on the reference channel
    pub fn set_reference(&mut self, reference: u16) {
        self.reference = reference;
    }

    /// Number of conversions served so far
    pub fn reads(&self) -> u32 {
        self.reads
    }
}

impl AnalogSampler for FixedSampler {
    type Error = Infallible;

    fn sample(&mut self, channel: ChannelId) -> nb::Result<u16, Infallible> {
        self.reads = self.reads.saturating_add(1);
        if channel == self.reference_channel {
            Ok(self.reference)
        } else {
            Ok(self.signal)
        }
    }
}

/// Scheduler hook for single-task firmware
#[derive(Debug, Clone, Copy, Default)]
pub struct NoYield;

impl CooperativeYield for NoYield {
    fn yield_now(&mut self) {}
}
