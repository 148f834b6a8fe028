//! LED output contract.

/// Proportional (PWM) LED channels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PwmChannel {
    Red,
    Blue,
}

/// RGB LED with two dimmable channels and a plain on/off indicator.
pub trait LedDriver {
    type Error;

    /// Applies a raw PWM level. Devices clamp to their own wrap value.
    fn set_level(&mut self, channel: PwmChannel, level: u16) -> Result<(), Self::Error>;

    /// Drives the green indicator.
    fn set_indicator(&mut self, on: bool) -> Result<(), Self::Error>;
}
