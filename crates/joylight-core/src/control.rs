//! State toggled by button presses and read by every render cycle.

use crate::{border::BorderStyle, input::ButtonLine};

/// Mode flags owned by the foreground loop.
///
/// Only accepted button events change it, and they are applied by the same
/// context that renders, so a render never sees half an update.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ControlState {
    pub green_on: bool,
    pub outputs_enabled: bool,
    pub border: BorderStyle,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            green_on: false,
            outputs_enabled: true,
            border: BorderStyle::Simple,
        }
    }
}

/// What an accepted press changed; the caller performs the side effects.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StateChange {
    /// Joystick press: indicator flipped and border advanced.
    Indicator { on: bool, border: BorderStyle },
    /// Button A press: proportional outputs switched on or off.
    Outputs { enabled: bool },
}

impl ControlState {
    pub fn apply(&mut self, line: ButtonLine) -> StateChange {
        match line {
            ButtonLine::Joystick => {
                self.green_on = !self.green_on;
                self.border = self.border.next();
                StateChange::Indicator {
                    on: self.green_on,
                    border: self.border,
                }
            }
            ButtonLine::ButtonA => {
                self.outputs_enabled = !self.outputs_enabled;
                StateChange::Outputs {
                    enabled: self.outputs_enabled,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joystick_press_toggles_indicator_and_advances_border() {
        let mut state = ControlState::default();

        assert_eq!(
            state.apply(ButtonLine::Joystick),
            StateChange::Indicator {
                on: true,
                border: BorderStyle::Layered
            }
        );
        assert_eq!(
            state.apply(ButtonLine::Joystick),
            StateChange::Indicator {
                on: false,
                border: BorderStyle::Cleared
            }
        );
        assert!(state.outputs_enabled);
    }

    #[test]
    fn button_a_toggles_outputs_only() {
        let mut state = ControlState::default();

        assert_eq!(
            state.apply(ButtonLine::ButtonA),
            StateChange::Outputs { enabled: false }
        );
        assert_eq!(state.border, BorderStyle::Simple);
        assert!(!state.green_on);
        assert_eq!(
            state.apply(ButtonLine::ButtonA),
            StateChange::Outputs { enabled: true }
        );
    }
}
