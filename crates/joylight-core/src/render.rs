//! Drawing surface contract consumed by the render loop.

/// Pixel color on a monochrome panel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    /// Unlit pixel.
    Background,
    /// Lit pixel.
    Foreground,
}

impl Color {
    pub const fn is_on(self) -> bool {
        matches!(self, Self::Foreground)
    }
}

/// Axis-aligned rectangle in display-native `(row, column)` units.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rect {
    pub top: u8,
    pub left: u8,
    pub width: u8,
    pub height: u8,
}

impl Rect {
    pub const fn new(top: u8, left: u8, width: u8, height: u8) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Square of side `size` with its top-left corner at `(top, left)`.
    pub const fn square(top: u8, left: u8, size: u8) -> Self {
        Self::new(top, left, size, size)
    }

    /// Rectangle `inset` pixels inside a `width x height` panel on every side.
    pub const fn inset(width: u8, height: u8, inset: u8) -> Self {
        Self::new(
            inset,
            inset,
            width.saturating_sub(inset.saturating_mul(2)),
            height.saturating_sub(inset.saturating_mul(2)),
        )
    }
}

/// Buffered bitmap display.
///
/// Drawing only touches the buffer; nothing reaches the panel until
/// [`Surface::flush`].
pub trait Surface {
    type Error;

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn outline_rect(&mut self, rect: Rect, color: Color);

    fn clear(&mut self, color: Color);

    fn flush(&mut self) -> Result<(), Self::Error>;
}
