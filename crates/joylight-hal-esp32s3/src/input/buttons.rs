use esp_hal::gpio::{Event, Input};
use joylight_core::input::{ButtonEvent, ButtonLine, EventQueue};

/// The two push-buttons, interrupting on falling edges once armed.
///
/// Owned by the GPIO interrupt handler. Servicing only stamps and queues
/// edges; debouncing happens in the foreground.
pub struct ButtonPins<'d> {
    joystick: Input<'d>,
    button_a: Input<'d>,
}

impl<'d> ButtonPins<'d> {
    /// Takes pull-up inputs. Interrupts stay off until [`Self::arm`].
    pub fn new(joystick: Input<'d>, button_a: Input<'d>) -> Self {
        Self { joystick, button_a }
    }

    /// Enables falling-edge interrupts on both lines.
    ///
    /// Call it only once the handler can reach these pins, see
    /// `joylight_core::input::IrqSlot::install`.
    pub fn arm(&mut self) {
        self.joystick.listen(Event::FallingEdge);
        self.button_a.listen(Event::FallingEdge);
    }

    /// Acknowledges pending edges and queues one event per line that fired.
    ///
    /// Returns the number of events queued. Interrupts from pins this struct
    /// does not own are left untouched.
    pub fn service<const N: usize>(&mut self, now_ms: u32, queue: &EventQueue<N>) -> usize {
        let mut queued = 0;

        for (pin, line) in [
            (&mut self.joystick, ButtonLine::Joystick),
            (&mut self.button_a, ButtonLine::ButtonA),
        ] {
            if !pin.is_interrupt_set() {
                continue;
            }
            pin.clear_interrupt();

            if queue.push(ButtonEvent::new(line, now_ms)) {
                queued += 1;
            }
        }

        queued
    }
}
