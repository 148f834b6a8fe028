//! In-memory framebuffer for the SSD1306.

use crate::protocol::{self, BUFFER_SIZE, PAGES, WIDTH};

/// 1bpp framebuffer laid out exactly like GDDRAM in horizontal mode.
///
/// Byte `page * WIDTH + x` holds rows `page * 8 ..= page * 8 + 7` of column
/// `x`, bit 0 being the top row.
#[derive(Clone)]
pub struct FrameBuffer {
    bytes: [u8; BUFFER_SIZE],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Creates a new dark framebuffer.
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; BUFFER_SIZE],
        }
    }

    /// Returns the underlying framebuffer bytes.
    pub fn bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.bytes
    }

    /// Clears framebuffer to dark (`on = false`) or lit (`on = true`).
    pub fn clear(&mut self, on: bool) {
        self.bytes.fill(if on { 0xFF } else { 0x00 });
    }

    /// Sets a pixel state.
    ///
    /// Returns `true` when pixel is in bounds, `false` otherwise.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> bool {
        let Some((index, mask)) = protocol::pixel_location(x, y) else {
            return false;
        };

        if on {
            self.bytes[index] |= mask;
        } else {
            self.bytes[index] &= !mask;
        }

        true
    }

    /// Reads a pixel state.
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        let (index, mask) = protocol::pixel_location(x, y)?;
        Some((self.bytes[index] & mask) != 0)
    }

    /// Returns the column bytes of page 0..8.
    pub fn page(&self, page: usize) -> Option<&[u8]> {
        if page >= PAGES {
            return None;
        }

        let start = page * WIDTH;
        Some(&self.bytes[start..start + WIDTH])
    }

    /// Number of lit pixels, mostly useful to assert on in tests.
    pub fn lit_count(&self) -> u32 {
        self.bytes.iter().map(|b| b.count_ones()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::HEIGHT;

    #[test]
    fn pixel_bits_stack_downwards_within_page() {
        let mut fb = FrameBuffer::new();

        assert!(fb.set_pixel(0, 0, true));
        assert!(fb.set_pixel(0, 7, true));
        assert!(fb.set_pixel(1, 8, true));

        assert_eq!(fb.page(0).unwrap()[0], 0b1000_0001);
        assert_eq!(fb.page(1).unwrap()[1], 0b0000_0001);
    }

    #[test]
    fn out_of_bounds_pixel_is_ignored() {
        let mut fb = FrameBuffer::new();

        assert!(!fb.set_pixel(WIDTH, 0, true));
        assert!(!fb.set_pixel(0, HEIGHT, true));
        assert_eq!(fb.lit_count(), 0);
    }

    #[test]
    fn clearing_a_pixel_keeps_its_neighbours() {
        let mut fb = FrameBuffer::new();
        fb.clear(true);

        assert!(fb.set_pixel(WIDTH - 1, HEIGHT - 1, false));
        assert_eq!(fb.pixel(WIDTH - 1, HEIGHT - 1), Some(false));
        assert_eq!(fb.pixel(WIDTH - 1, HEIGHT - 2), Some(true));
        assert_eq!(fb.lit_count(), (BUFFER_SIZE * 8 - 1) as u32);
        assert_eq!(fb.page(PAGES), None);
    }
}
