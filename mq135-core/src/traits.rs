//! Collaborator traits
//!
//! The model never touches hardware directly. Boards plug in through two
//! small traits, which keeps the numeric core testable on a host and lets
//! each HAL keep its own ADC characterisation.

/// Identifier of an analog input (GPIO number on most boards)
pub type ChannelId = u8;

/// Source of raw analog samples
///
/// Follows the `nb` convention used by embedded-hal one-shot ADCs: a
/// conversion in progress returns `WouldBlock` and the model polls until the
/// value is ready.
///
/// ## Example Implementation
///
/// ```rust
/// use mq135_core::traits::{AnalogSampler, ChannelId};
///
/// struct Esp32Adc {
///     // ... ADC1 driver and calibration curve
/// }
///
/// impl AnalogSampler for Esp32Adc {
///     type Error = ();
///
///     fn sample(&mut self, channel: ChannelId) -> nb::Result<u16, ()> {
///         // Start a one-shot conversion on `channel` and return the code
///         let _ = channel;
///         Ok(2048)
///     }
/// }
/// ```
pub trait AnalogSampler {
    /// Hardware error reported by the converter
    type Error: core::fmt::Debug;

    /// Read one raw code in `[0, full_scale]` from `channel`
    fn sample(&mut self, channel: ChannelId) -> nb::Result<u16, Self::Error>;
}

impl<T: AnalogSampler + ?Sized> AnalogSampler for &mut T {
    type Error = T::Error;

    fn sample(&mut self, channel: ChannelId) -> nb::Result<u16, Self::Error> {
        T::sample(self, channel)
    }
}

/// Voluntary suspension point for cooperative schedulers
///
/// Called periodically from long-running loops. An RTOS port would delay
/// one tick; a bare-metal superloop can use [`NoYield`](crate::sampler::NoYield).
pub trait CooperativeYield {
    /// Let other ready tasks run before returning
    fn yield_now(&mut self);
}

impl<F: FnMut()> CooperativeYield for F {
    fn yield_now(&mut self) {
        self()
    }
}
