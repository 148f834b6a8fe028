use joylight_core::input::{AnalogInput, Axis};

/// Two-axis stick read through a caller-supplied one-shot conversion.
///
/// The ADC driver's pin types are board specific, so the binary hands in a
/// closure that owns the ADC and both channel pins.
pub struct JoystickAxes<F> {
    read: F,
}

impl<F, E> JoystickAxes<F>
where
    F: FnMut(Axis) -> Result<u16, E>,
{
    pub const fn new(read: F) -> Self {
        Self { read }
    }
}

impl<F, E> AnalogInput for JoystickAxes<F>
where
    F: FnMut(Axis) -> Result<u16, E>,
{
    type Error = E;

    fn read(&mut self, axis: Axis) -> Result<u16, Self::Error> {
        (self.read)(axis)
    }
}
