#![no_std]

//! ESP32-S3 board adapters for the joylight control loop.

pub mod input;
pub mod output;
pub mod platform;
