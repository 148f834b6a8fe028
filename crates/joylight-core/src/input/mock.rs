use super::{AnalogInput, Axis, ButtonEvent, InputProvider};

/// No-hardware button source used during bring-up.
#[derive(Default, Debug, Clone, Copy)]
pub struct MockInput;

impl MockInput {
    pub const fn new() -> Self {
        Self
    }
}

impl InputProvider for MockInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<ButtonEvent>, Self::Error> {
        Ok(None)
    }
}

/// Stick frozen at a fixed position.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FixedStick {
    pub vertical: u16,
    pub horizontal: u16,
}

impl FixedStick {
    pub const fn new(vertical: u16, horizontal: u16) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// Both axes at the 12-bit rest value.
    pub const fn centered() -> Self {
        Self::new(2048, 2048)
    }
}

impl AnalogInput for FixedStick {
    type Error = core::convert::Infallible;

    fn read(&mut self, axis: Axis) -> Result<u16, Self::Error> {
        Ok(match axis {
            Axis::Vertical => self.vertical,
            Axis::Horizontal => self.horizontal,
        })
    }
}
