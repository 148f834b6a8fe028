impl<IN, AN, LED, SURF> JoystickApp<IN, AN, LED, SURF>
where
    IN: InputProvider,
    AN: AnalogInput,
    LED: LedDriver,
    SURF: Surface,
{
    /// One full cycle: sample, drive LEDs, move the cursor, flush.
    ///
    /// The previous footprint is erased before the border is redrawn so a
    /// cursor parked on the frame never leaves a hole in it.
    pub fn render_cycle(
        &mut self,
        now_ms: u32,
    ) -> Result<Option<Telemetry>, AppErrorOf<IN, AN, LED, SURF>> {
        let vry = self
            .analog
            .read(Axis::Vertical)
            .map_err(AppError::Analog)?;
        let vrx = self
            .analog
            .read(Axis::Horizontal)
            .map_err(AppError::Analog)?;

        let center = self.config.adc_center;
        let adc_max = self.config.adc_max;
        let blue = intensity(vry, center, adc_max);
        let red = intensity(vrx, center, adc_max);

        if self.state.outputs_enabled {
            self.leds
                .set_level(PwmChannel::Blue, blue)
                .map_err(AppError::Led)?;
            self.leds
                .set_level(PwmChannel::Red, red)
                .map_err(AppError::Led)?;
        }

        let cursor = self.cursor_for(vrx, vry);
        let size = self.config.geometry.cursor_size;

        if let Some(prior) = self.prior_cursor {
            self.surface
                .fill_rect(prior.footprint(size), Color::Background);
        }
        self.state.border.draw(&mut self.surface, self.config.geometry);

        self.prior_cursor = Some(cursor);
        self.surface
            .fill_rect(cursor.footprint(size), Color::Foreground);
        self.surface.flush().map_err(AppError::Display)?;

        self.pending_border = false;
        self.last_render_ms = Some(now_ms);

        if !window_elapsed(now_ms, self.last_telemetry_ms, self.config.telemetry_period_ms) {
            return Ok(None);
        }
        self.last_telemetry_ms = now_ms;

        // Duty reflects what the LEDs show, which is dark while disabled.
        let (red, blue) = if self.state.outputs_enabled {
            (red, blue)
        } else {
            (0, 0)
        };
        let pwm_max = self.config.pwm_max;
        Ok(Some(Telemetry {
            vrx,
            vry,
            red_duty_pct: duty_cycle_pct(red, pwm_max),
            blue_duty_pct: duty_cycle_pct(blue, pwm_max),
            outputs_enabled: self.state.outputs_enabled,
        }))
    }

    /// Shows a new border style without waiting for the next cycle.
    fn redraw_border(&mut self) -> Result<(), AppErrorOf<IN, AN, LED, SURF>> {
        self.state.border.draw(&mut self.surface, self.config.geometry);
        if let Some(cursor) = self.prior_cursor {
            self.surface.fill_rect(
                cursor.footprint(self.config.geometry.cursor_size),
                Color::Foreground,
            );
        }
        self.surface.flush().map_err(AppError::Display)?;
        self.pending_border = false;
        Ok(())
    }
}
