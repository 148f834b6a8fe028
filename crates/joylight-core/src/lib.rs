#![cfg_attr(not(test), no_std)]

//! Board-independent control logic for the joystick/LED/OLED firmware.
//!
//! Everything here is driven through small collaborator traits so the same
//! state machine runs on the board and under host tests.

pub mod app;
pub mod border;
pub mod config;
pub mod control;
pub mod debounce;
pub mod input;
pub mod intensity;
pub mod output;
pub mod render;
pub mod telemetry;
