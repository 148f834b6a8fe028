pub mod leds;
