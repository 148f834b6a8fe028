//! Named tunables with their valid ranges.

use crate::intensity;

/// Panel size and the area the cursor may travel in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DisplayGeometry {
    pub width: u8,
    pub height: u8,
    /// Horizontal travel of the cursor's left edge.
    pub usable_width: u8,
    /// Vertical travel of the cursor's top edge.
    pub usable_height: u8,
    /// Side of the square cursor footprint.
    pub cursor_size: u8,
}

impl Default for DisplayGeometry {
    fn default() -> Self {
        Self {
            width: 128,
            height: 64,
            usable_width: 120,
            usable_height: 56,
            cursor_size: 8,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// `adc_center` must lie strictly inside `1..adc_max`.
    CenterOutOfRange,
    /// The largest intensity the mapper can produce exceeds `pwm_max`.
    IntensityExceedsPwm { max_intensity: u16, pwm_max: u16 },
    /// Debounce window is zero or too close to the clock wrap period.
    DebounceWindow,
    /// Render period is zero or telemetry runs faster than rendering.
    Cadence,
    /// Cursor travel plus footprint does not fit the panel.
    Geometry,
}

/// Everything the control loop needs to know about the board.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ControlConfig {
    /// Largest raw sample the ADC produces (4095 for 12 bits).
    pub adc_max: u16,
    /// Raw sample of the stick at rest.
    pub adc_center: u16,
    /// PWM wrap value; levels are `0..=pwm_max`.
    pub pwm_max: u16,
    pub debounce_ms: u32,
    pub render_period_ms: u32,
    pub telemetry_period_ms: u32,
    pub geometry: DisplayGeometry,
}

/// Upper bound for the debounce window; the ms clock wraps after ~49 days.
pub const MAX_DEBOUNCE_MS: u32 = 60_000;

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            adc_max: 4095,
            adc_center: 2048,
            pwm_max: 4095,
            debounce_ms: 200,
            render_period_ms: 100,
            telemetry_period_ms: 1_000,
            geometry: DisplayGeometry::default(),
        }
    }
}

impl ControlConfig {
    pub const fn with_adc_center(mut self, adc_center: u16) -> Self {
        self.adc_center = adc_center;
        self
    }

    pub const fn with_pwm_max(mut self, pwm_max: u16) -> Self {
        self.pwm_max = pwm_max;
        self
    }

    pub const fn with_debounce_ms(mut self, debounce_ms: u32) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub const fn with_render_period_ms(mut self, render_period_ms: u32) -> Self {
        self.render_period_ms = render_period_ms;
        self
    }

    pub const fn with_telemetry_period_ms(mut self, telemetry_period_ms: u32) -> Self {
        self.telemetry_period_ms = telemetry_period_ms;
        self
    }

    /// Largest value [`intensity::intensity`] can return under this config.
    pub fn max_intensity(&self) -> u16 {
        intensity::max_intensity(self.adc_max, self.adc_center)
    }

    /// Checks every documented range, returning the config unchanged on success.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.adc_center == 0 || self.adc_center >= self.adc_max {
            return Err(ConfigError::CenterOutOfRange);
        }

        let max_intensity = self.max_intensity();
        if max_intensity > self.pwm_max {
            return Err(ConfigError::IntensityExceedsPwm {
                max_intensity,
                pwm_max: self.pwm_max,
            });
        }

        if self.debounce_ms == 0 || self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ConfigError::DebounceWindow);
        }

        if self.render_period_ms == 0 || self.telemetry_period_ms < self.render_period_ms {
            return Err(ConfigError::Cadence);
        }

        let g = self.geometry;
        let fits_x = g.usable_width as u16 + g.cursor_size as u16 <= g.width as u16;
        let fits_y = g.usable_height as u16 + g.cursor_size as u16 <= g.height as u16;
        if g.cursor_size == 0 || !fits_x || !fits_y {
            return Err(ConfigError::Geometry);
        }

        Ok(self)
    }
}
