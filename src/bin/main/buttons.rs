use esp_hal::{handler, ram, time::Instant};
use joylight_core::input::{EventQueue, IrqSlot};
use joylight_hal_esp32s3::input::buttons::ButtonPins;

use super::BUTTON_QUEUE_DEPTH;

/// Edges handed from the GPIO interrupt to the control loop.
pub(super) static BUTTON_EVENTS: EventQueue<BUTTON_QUEUE_DEPTH> = EventQueue::new();

static BUTTONS: IrqSlot<ButtonPins<'static>> = IrqSlot::new();

/// Hands the pins to the interrupt handler and only then enables their edges.
pub(super) fn install(buttons: ButtonPins<'static>) {
    BUTTONS.install(buttons, ButtonPins::arm);
}

/// Milliseconds since boot on the same clock the control loop uses.
pub(super) fn now_ms() -> u32 {
    Instant::now().duration_since_epoch().as_millis() as u32
}

#[handler]
#[ram]
pub(super) fn gpio_interrupt() {
    let now_ms = now_ms();
    BUTTONS.with(|buttons| buttons.service(now_ms, &BUTTON_EVENTS));
}
