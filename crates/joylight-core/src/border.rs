//! Decorative frame cycled by the joystick button.

use crate::{
    config::DisplayGeometry,
    render::{Color, Rect, Surface},
};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum BorderStyle {
    /// One outline three pixels in from the panel edge.
    #[default]
    Simple,
    /// Four nested outlines filling the outer four pixels.
    Layered,
    /// No frame; the whole panel is blanked.
    Cleared,
}

impl BorderStyle {
    pub const COUNT: u8 = 3;

    pub const fn index(self) -> u8 {
        match self {
            Self::Simple => 0,
            Self::Layered => 1,
            Self::Cleared => 2,
        }
    }

    pub const fn from_index(index: u8) -> Self {
        match index % Self::COUNT {
            0 => Self::Simple,
            1 => Self::Layered,
            _ => Self::Cleared,
        }
    }

    /// Advances modulo three.
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Outline insets, in drawing order.
    pub const fn insets(self) -> &'static [u8] {
        match self {
            Self::Simple => &[3],
            Self::Layered => &[4, 1, 2, 3],
            Self::Cleared => &[],
        }
    }

    /// Draws this style into the buffer without flushing.
    pub fn draw<S: Surface>(self, surface: &mut S, geometry: DisplayGeometry) {
        if self == Self::Cleared {
            surface.clear(Color::Background);
            return;
        }

        for &inset in self.insets() {
            surface.outline_rect(
                Rect::inset(geometry.width, geometry.height, inset),
                Color::Foreground,
            );
        }
    }
}
