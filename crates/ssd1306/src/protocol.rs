//! I2C command protocol helpers for the SSD1306 controller.

/// Panel width in pixels.
pub const WIDTH: usize = 128;
/// Panel height in pixels.
pub const HEIGHT: usize = 64;
/// Number of 8-row pages in GDDRAM.
pub const PAGES: usize = HEIGHT / 8;
/// Total framebuffer size in bytes.
pub const BUFFER_SIZE: usize = WIDTH * PAGES;

/// Default 7-bit I2C address (SA0 tied low).
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Control byte announcing a command stream.
pub const CONTROL_COMMAND: u8 = 0x00;
/// Control byte announcing a GDDRAM data stream.
pub const CONTROL_DATA: u8 = 0x40;

pub const SET_CONTRAST: u8 = 0x81;
pub const ENTIRE_ON_RESUME: u8 = 0xA4;
pub const NORMAL_DISPLAY: u8 = 0xA6;
pub const INVERT_DISPLAY: u8 = 0xA7;
pub const DISPLAY_OFF: u8 = 0xAE;
pub const DISPLAY_ON: u8 = 0xAF;
pub const SET_MEMORY_MODE: u8 = 0x20;
pub const SET_COLUMN_ADDRESS: u8 = 0x21;
pub const SET_PAGE_ADDRESS: u8 = 0x22;
pub const SET_START_LINE: u8 = 0x40;
pub const SET_SEGMENT_REMAP: u8 = 0xA0;
pub const SET_MUX_RATIO: u8 = 0xA8;
pub const SET_COM_SCAN_DEC: u8 = 0xC8;
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
pub const SET_COM_PINS: u8 = 0xDA;
pub const SET_CLOCK_DIV: u8 = 0xD5;
pub const SET_PRECHARGE: u8 = 0xD9;
pub const SET_VCOM_DESELECT: u8 = 0xDB;
pub const SET_CHARGE_PUMP: u8 = 0x8D;

/// Horizontal addressing: column pointer wraps into the next page.
const MEMORY_MODE_HORIZONTAL: u8 = 0x00;

/// Power-up sequence for a 128x64 module with internal charge pump.
///
/// Leaves the panel on, in horizontal addressing mode, with column 0 on the
/// left and page 0 on top.
pub const INIT_SEQUENCE: [u8; 25] = [
    DISPLAY_OFF,
    SET_CLOCK_DIV,
    0x80,
    SET_MUX_RATIO,
    (HEIGHT - 1) as u8,
    SET_DISPLAY_OFFSET,
    0x00,
    SET_START_LINE,
    SET_CHARGE_PUMP,
    0x14,
    SET_MEMORY_MODE,
    MEMORY_MODE_HORIZONTAL,
    SET_SEGMENT_REMAP | 0x01,
    SET_COM_SCAN_DEC,
    SET_COM_PINS,
    0x12,
    SET_CONTRAST,
    0xFF,
    SET_PRECHARGE,
    0xF1,
    SET_VCOM_DESELECT,
    0x30,
    ENTIRE_ON_RESUME,
    NORMAL_DISPLAY,
    DISPLAY_ON,
];

/// Builds the command window covering the whole panel.
///
/// After this window is set, a data stream of [`BUFFER_SIZE`] bytes fills
/// GDDRAM page by page.
#[inline]
pub const fn full_window_commands() -> [u8; 6] {
    [
        SET_COLUMN_ADDRESS,
        0,
        (WIDTH - 1) as u8,
        SET_PAGE_ADDRESS,
        0,
        (PAGES - 1) as u8,
    ]
}

#[inline]
pub const fn contrast_commands(level: u8) -> [u8; 2] {
    [SET_CONTRAST, level]
}

#[inline]
pub const fn invert_command(inverted: bool) -> u8 {
    if inverted {
        INVERT_DISPLAY
    } else {
        NORMAL_DISPLAY
    }
}

/// Maps a pixel to its `(byte index, bit mask)` in page-major GDDRAM order.
///
/// Returns `None` for out-of-panel coordinates.
#[inline]
pub fn pixel_location(x: usize, y: usize) -> Option<(usize, u8)> {
    if x >= WIDTH || y >= HEIGHT {
        return None;
    }

    Some(((y / 8) * WIDTH + x, 1u8 << (y % 8)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_covers_every_page() {
        assert_eq!(PAGES, 8);
        assert_eq!(BUFFER_SIZE, 1024);
    }

    #[test]
    fn init_sequence_starts_dark_and_ends_lit() {
        assert_eq!(INIT_SEQUENCE[0], DISPLAY_OFF);
        assert_eq!(INIT_SEQUENCE[INIT_SEQUENCE.len() - 1], DISPLAY_ON);

        let mux = INIT_SEQUENCE
            .iter()
            .position(|&b| b == SET_MUX_RATIO)
            .unwrap();
        assert_eq!(INIT_SEQUENCE[mux + 1], 63);
    }

    #[test]
    fn full_window_spans_panel() {
        assert_eq!(full_window_commands(), [0x21, 0, 127, 0x22, 0, 7]);
    }

    #[test]
    fn pixel_location_is_page_major_lsb_top() {
        assert_eq!(pixel_location(0, 0), Some((0, 0x01)));
        assert_eq!(pixel_location(0, 7), Some((0, 0x80)));
        assert_eq!(pixel_location(3, 9), Some((WIDTH + 3, 0x02)));
        assert_eq!(pixel_location(127, 63), Some((BUFFER_SIZE - 1, 0x80)));
    }

    #[test]
    fn out_of_panel_pixel_has_no_location() {
        assert_eq!(pixel_location(WIDTH, 0), None);
        assert_eq!(pixel_location(0, HEIGHT), None);
    }
}
