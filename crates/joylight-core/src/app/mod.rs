//! Control loop tying buttons, stick, LEDs and display together.

use log::{debug, info, warn};

use crate::{
    config::{ConfigError, ControlConfig},
    control::{ControlState, StateChange},
    debounce::{DebounceGate, window_elapsed},
    input::{AnalogInput, Axis, ButtonEvent, InputProvider},
    intensity::{duty_cycle_pct, intensity},
    output::{LedDriver, PwmChannel},
    render::{Color, Rect, Surface},
    telemetry::Telemetry,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    /// Nothing was due.
    Idle,
    /// Only the border (and the cursor on top of it) was redrawn.
    BorderRedrawn,
    /// A full sample/output/render cycle ran.
    Rendered { telemetry: Option<Telemetry> },
}

/// Collaborator failures. None of them are recoverable inside the loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AppError<AnalogErr, LedErr, DisplayErr, InputErr> {
    Analog(AnalogErr),
    Led(LedErr),
    Display(DisplayErr),
    Input(InputErr),
}

pub type AppErrorOf<IN, AN, LED, SURF> = AppError<
    <AN as AnalogInput>::Error,
    <LED as LedDriver>::Error,
    <SURF as Surface>::Error,
    <IN as InputProvider>::Error,
>;

/// Top-left corner of the cursor footprint, in display rows/columns.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CursorPosition {
    pub row: u8,
    pub col: u8,
}

pub struct JoystickApp<IN, AN, LED, SURF>
where
    IN: InputProvider,
    AN: AnalogInput,
    LED: LedDriver,
    SURF: Surface,
{
    input: IN,
    analog: AN,
    leds: LED,
    surface: SURF,
    config: ControlConfig,
    state: ControlState,
    debounce: DebounceGate,
    prior_cursor: Option<CursorPosition>,
    pending_border: bool,
    last_render_ms: Option<u32>,
    last_telemetry_ms: u32,
}

include!("lifecycle.rs");
include!("input.rs");
include!("runtime.rs");
include!("cursor.rs");
