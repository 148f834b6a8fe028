use embedded_graphics::{
    Drawable,
    pixelcolor::BinaryColor,
    prelude::{Point, Primitive, Size},
    primitives::{PrimitiveStyle, Rectangle},
};
use embedded_hal::i2c::I2c;
use joylight_core::render::{Color, Rect, Surface};
use log::info;
use ssd1306::{Config, Error, FrameBuffer, Ssd1306};

/// Board-level OLED: SSD1306 driver plus the frame it flushes.
pub struct OledDisplay<I2C> {
    driver: Ssd1306<I2C>,
    frame: FrameBuffer,
}

impl<I2C> OledDisplay<I2C>
where
    I2C: I2c,
{
    pub fn new(i2c: I2C, config: Config) -> Self {
        Self {
            driver: Ssd1306::new(i2c, config),
            frame: FrameBuffer::new(),
        }
    }

    /// Runs the panel power-up sequence and pushes a blank frame.
    pub fn initialize(&mut self) -> Result<(), Error<I2C::Error>> {
        let address = self.driver.config().address;
        self.driver.init()?;
        self.frame.clear(false);
        self.driver.flush_full(&self.frame)?;
        info!("oled: init ok addr=0x{:02x}", address);
        Ok(())
    }
}

fn binary(color: Color) -> BinaryColor {
    if color.is_on() {
        BinaryColor::On
    } else {
        BinaryColor::Off
    }
}

fn rectangle(rect: Rect) -> Rectangle {
    Rectangle::new(
        Point::new(rect.left as i32, rect.top as i32),
        Size::new(rect.width as u32, rect.height as u32),
    )
}

impl<I2C> Surface for OledDisplay<I2C>
where
    I2C: I2c,
{
    type Error = Error<I2C::Error>;

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let _ = rectangle(rect)
            .into_styled(PrimitiveStyle::with_fill(binary(color)))
            .draw(&mut self.frame);
    }

    fn outline_rect(&mut self, rect: Rect, color: Color) {
        let _ = rectangle(rect)
            .into_styled(PrimitiveStyle::with_stroke(binary(color), 1))
            .draw(&mut self.frame);
    }

    fn clear(&mut self, color: Color) {
        self.frame.clear(color.is_on());
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.driver.flush_full(&self.frame)
    }
}
