use embedded_hal::{digital::OutputPin, pwm::SetDutyCycle};
use joylight_core::output::{LedDriver, PwmChannel};

#[derive(Debug)]
pub enum RgbLedError<RedErr, BlueErr, GreenErr> {
    Red(RedErr),
    Blue(BlueErr),
    Green(GreenErr),
}

/// RGB LED with red/blue on PWM channels and green on a plain GPIO.
#[derive(Debug)]
pub struct RgbLed<R, B, G> {
    red: R,
    blue: B,
    green: G,
    pwm_max: u16,
}

impl<R, B, G> RgbLed<R, B, G>
where
    R: SetDutyCycle,
    B: SetDutyCycle,
    G: OutputPin,
{
    /// `pwm_max` is the level that maps to a fully-on channel; levels are
    /// scaled onto each channel's own duty range.
    pub fn new(red: R, blue: B, green: G, pwm_max: u16) -> Self {
        Self {
            red,
            blue,
            green,
            pwm_max: pwm_max.max(1),
        }
    }
}

impl<R, B, G> LedDriver for RgbLed<R, B, G>
where
    R: SetDutyCycle,
    B: SetDutyCycle,
    G: OutputPin,
{
    type Error = RgbLedError<R::Error, B::Error, G::Error>;

    fn set_level(&mut self, channel: PwmChannel, level: u16) -> Result<(), Self::Error> {
        // Wrap-based counters are one count longer than the wrap value.
        let denominator = self.pwm_max.saturating_add(1);
        let numerator = level.min(self.pwm_max);

        match channel {
            PwmChannel::Red => self
                .red
                .set_duty_cycle_fraction(numerator, denominator)
                .map_err(RgbLedError::Red),
            PwmChannel::Blue => self
                .blue
                .set_duty_cycle_fraction(numerator, denominator)
                .map_err(RgbLedError::Blue),
        }
    }

    fn set_indicator(&mut self, on: bool) -> Result<(), Self::Error> {
        if on {
            self.green.set_high().map_err(RgbLedError::Green)
        } else {
            self.green.set_low().map_err(RgbLedError::Green)
        }
    }
}
