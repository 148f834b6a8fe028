use core::convert::Infallible;

use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
};

use crate::{
    FrameBuffer,
    protocol::{HEIGHT, WIDTH},
};

/// Panel extent as embedded-graphics sees it.
const PANEL: Size = Size::new(WIDTH as u32, HEIGHT as u32);

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        // Off-panel pixels are dropped here or by `set_pixel`.
        pixels
            .into_iter()
            .filter_map(|Pixel(point, color)| {
                let col = usize::try_from(point.x).ok()?;
                let row = usize::try_from(point.y).ok()?;
                Some((col, row, color.is_on()))
            })
            .for_each(|(col, row, on)| {
                self.set_pixel(col, row, on);
            });

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        FrameBuffer::clear(self, color.is_on());
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        PANEL
    }
}
