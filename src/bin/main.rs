#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]

use embassy_executor::Spawner;
use embassy_time::Timer;
use esp_hal::{
    analog::adc::{Adc, AdcConfig, Attenuation},
    clock::CpuClock,
    gpio::{DriveMode, Input, InputConfig, Io, Level, Output, OutputConfig, Pull},
    i2c::master::{Config as I2cConfig, I2c},
    ledc::{
        LSGlobalClkSource, Ledc, LowSpeed,
        channel::{self, ChannelIFace},
        timer::{self, TimerIFace},
    },
    time::Rate,
    timer::timg::TimerGroup,
};
use joylight_core::{
    app::{JoystickApp, TickResult},
    config::ControlConfig,
    input::Axis,
};
use joylight_hal_esp32s3::{
    input::{buttons::ButtonPins, joystick::JoystickAxes},
    output::leds::RgbLed,
    platform::display::OledDisplay,
};
use log::{LevelFilter, error, info};

use buttons::{BUTTON_EVENTS, now_ms};

#[path = "main/buttons.rs"]
mod buttons;

const BUTTON_QUEUE_DEPTH: usize = 8;
const POLL_PERIOD_MS: u64 = 2;
const PWM_FREQUENCY_KHZ: u32 = 5;
const OLED_I2C_KHZ: u32 = 400;

#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
    loop {}
}

// This creates a default app-descriptor required by the esp-idf bootloader.
// For more information see: <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/system/app_image_format.html#application-description>
esp_bootloader_esp_idf::esp_app_desc!();

async fn park() -> ! {
    loop {
        Timer::after_secs(1).await;
    }
}

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    esp_println::logger::init_logger(LevelFilter::Info);
    esp_println::println!("boot: joylight starting");

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Joystick on ADC1: VRy=GPIO1 (channel 0), VRx=GPIO2 (channel 1).
    let mut adc_config = AdcConfig::new();
    let mut vry_pin = adc_config.enable_pin(peripherals.GPIO1, Attenuation::_11dB);
    let mut vrx_pin = adc_config.enable_pin(peripherals.GPIO2, Attenuation::_11dB);
    let mut adc = Adc::new(peripherals.ADC1, adc_config);
    let axes = JoystickAxes::new(move |axis: Axis| match axis {
        Axis::Vertical => nb::block!(adc.read_oneshot(&mut vry_pin)),
        Axis::Horizontal => nb::block!(adc.read_oneshot(&mut vrx_pin)),
    });

    // RGB LED: R=GPIO13 and B=GPIO12 on 12-bit LEDC, G=GPIO11 plain output.
    let mut ledc = Ledc::new(peripherals.LEDC);
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);
    let mut pwm_timer = ledc.timer::<LowSpeed>(timer::Number::Timer0);
    pwm_timer
        .configure(timer::config::Config {
            duty: timer::config::Duty::Duty12Bit,
            clock_source: timer::LSClockSource::APBClk,
            frequency: Rate::from_khz(PWM_FREQUENCY_KHZ),
        })
        .unwrap();

    let mut red = ledc.channel(channel::Number::Channel0, peripherals.GPIO13);
    red.configure(channel::config::Config {
        timer: &pwm_timer,
        duty_pct: 0,
        drive_mode: DriveMode::PushPull,
    })
    .unwrap();
    let mut blue = ledc.channel(channel::Number::Channel1, peripherals.GPIO12);
    blue.configure(channel::config::Config {
        timer: &pwm_timer,
        duty_pct: 0,
        drive_mode: DriveMode::PushPull,
    })
    .unwrap();
    let green = Output::new(peripherals.GPIO11, Level::Low, OutputConfig::default());

    let control_config = ControlConfig::default();
    let leds = RgbLed::new(red, blue, green, control_config.pwm_max);

    // OLED: I2C0 SDA=GPIO14 SCL=GPIO15.
    let i2c = I2c::new(
        peripherals.I2C0,
        I2cConfig::default().with_frequency(Rate::from_khz(OLED_I2C_KHZ)),
    )
    .unwrap()
    .with_sda(peripherals.GPIO14)
    .with_scl(peripherals.GPIO15);

    let mut display = OledDisplay::new(i2c, ssd1306::Config::default());
    esp_println::println!("display: init begin (SDA=14 SCL=15 addr=0x3C)");
    if let Err(err) = display.initialize() {
        esp_println::println!("display: initialize failed");
        error!("display initialize failed: {:?}", err);
        park().await;
    }
    esp_println::println!("display: initialize ok");

    // Buttons: joystick switch=GPIO5, A=GPIO6, active low.
    let joystick_button = Input::new(
        peripherals.GPIO5,
        InputConfig::default().with_pull(Pull::Up),
    );
    let button_a = Input::new(
        peripherals.GPIO6,
        InputConfig::default().with_pull(Pull::Up),
    );

    let mut io = Io::new(peripherals.IO_MUX);
    io.set_interrupt_handler(buttons::gpio_interrupt);
    buttons::install(ButtonPins::new(joystick_button, button_a));

    let mut app = match JoystickApp::new(&BUTTON_EVENTS, axes, leds, display, control_config) {
        Ok(app) => app,
        Err(err) => {
            error!("control config rejected: {:?}", err);
            park().await;
        }
    };
    if let Err(err) = app.start() {
        error!("control loop start failed: {:?}", err);
        park().await;
    }

    info!("Joystick pins: VRy=GPIO1 VRx=GPIO2 SW=GPIO5 A=GPIO6");
    info!("LED pins: R=GPIO13 B=GPIO12 G=GPIO11 pwm={}kHz", PWM_FREQUENCY_KHZ);

    let fault = loop {
        match app.tick(now_ms()) {
            Ok(TickResult::Rendered {
                telemetry: Some(telemetry),
            }) => info!("{}", telemetry),
            Ok(_) => {}
            Err(err) => break err,
        }

        Timer::after_millis(POLL_PERIOD_MS).await;
    };

    error!("control loop halted: {:?}", fault);
    park().await
}
