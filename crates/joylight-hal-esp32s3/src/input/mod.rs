pub mod buttons;
pub mod joystick;
