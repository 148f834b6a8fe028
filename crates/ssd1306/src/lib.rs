#![cfg_attr(not(test), no_std)]

//! SSD1306 (128x64 monochrome OLED) driver primitives over I2C.

mod framebuffer;
pub mod protocol;

#[cfg(feature = "embedded-graphics")]
mod graphics;

pub use framebuffer::FrameBuffer;

use embedded_hal::i2c::{I2c, Operation};

/// Driver configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// 7-bit bus address.
    pub address: u8,
    /// Contrast applied right after the power-up sequence.
    pub contrast: u8,
    /// Swap lit and dark pixels in hardware.
    pub inverted: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: protocol::DEFAULT_ADDRESS,
            contrast: 0xFF,
            inverted: false,
        }
    }
}

/// Driver errors.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error<I2cErr> {
    /// I2C transaction failed.
    I2c(I2cErr),
}

pub type DriverResult<I2cErr> = Result<(), Error<I2cErr>>;

/// SSD1306 driver.
#[derive(Debug)]
pub struct Ssd1306<I2C> {
    i2c: I2C,
    config: Config,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2c,
{
    /// Creates a new driver instance. The panel is untouched until [`Self::init`].
    pub fn new(i2c: I2C, config: Config) -> Self {
        Self { i2c, config }
    }

    /// Returns current configuration.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Releases the owned bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Runs the power-up sequence and applies the configured contrast/inversion.
    pub fn init(&mut self) -> DriverResult<I2C::Error> {
        self.send_commands(&protocol::INIT_SEQUENCE)?;
        self.set_contrast(self.config.contrast)?;
        self.send_commands(&[protocol::invert_command(self.config.inverted)])
    }

    pub fn set_contrast(&mut self, level: u8) -> DriverResult<I2C::Error> {
        self.config.contrast = level;
        self.send_commands(&protocol::contrast_commands(level))
    }

    pub fn display_on(&mut self) -> DriverResult<I2C::Error> {
        self.send_commands(&[protocol::DISPLAY_ON])
    }

    pub fn display_off(&mut self) -> DriverResult<I2C::Error> {
        self.send_commands(&[protocol::DISPLAY_OFF])
    }

    /// Flushes a full framebuffer.
    ///
    /// The control byte and the pixel payload go out as one bus write: adjacent
    /// write operations in a transaction are not separated by a restart.
    pub fn flush_full(&mut self, frame: &FrameBuffer) -> DriverResult<I2C::Error> {
        self.send_commands(&protocol::full_window_commands())?;

        let mut ops = [
            Operation::Write(&[protocol::CONTROL_DATA]),
            Operation::Write(frame.bytes()),
        ];
        self.i2c
            .transaction(self.config.address, &mut ops)
            .map_err(Error::I2c)
    }

    fn send_commands(&mut self, commands: &[u8]) -> DriverResult<I2C::Error> {
        let mut ops = [
            Operation::Write(&[protocol::CONTROL_COMMAND]),
            Operation::Write(commands),
        ];
        self.i2c
            .transaction(self.config.address, &mut ops)
            .map_err(Error::I2c)
    }
}
