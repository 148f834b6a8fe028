//! Input abstraction layer.

pub mod mock;
mod queue;
mod slot;

pub use queue::EventQueue;
pub use slot::IrqSlot;

/// Push-button lines the firmware listens to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ButtonLine {
    /// Switch built into the joystick (pressing the stick).
    Joystick,
    /// Stand-alone button A.
    ButtonA,
}

impl ButtonLine {
    pub const COUNT: usize = 2;

    pub const fn index(self) -> usize {
        match self {
            Self::Joystick => 0,
            Self::ButtonA => 1,
        }
    }
}

/// One falling edge, stamped with the millisecond clock when it was seen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ButtonEvent {
    pub line: ButtonLine,
    pub at_ms: u32,
}

impl ButtonEvent {
    pub const fn new(line: ButtonLine, at_ms: u32) -> Self {
        Self { line, at_ms }
    }
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<ButtonEvent>, Self::Error>;

    /// Events lost since the previous call, if the provider can overflow.
    fn take_dropped(&mut self) -> u32 {
        0
    }
}

/// Stick axes, numbered by their ADC channel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Axis {
    /// Channel 0. Larger samples mean the stick is pushed up.
    Vertical,
    /// Channel 1. Larger samples mean the stick is pushed right.
    Horizontal,
}

impl Axis {
    pub const fn channel(self) -> u8 {
        match self {
            Self::Vertical => 0,
            Self::Horizontal => 1,
        }
    }
}

/// Source of raw joystick samples.
pub trait AnalogInput {
    type Error;

    /// Reads one axis. Synchronous; expected to be a few microseconds.
    fn read(&mut self, axis: Axis) -> Result<u16, Self::Error>;
}
