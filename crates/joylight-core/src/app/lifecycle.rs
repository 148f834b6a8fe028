impl<IN, AN, LED, SURF> JoystickApp<IN, AN, LED, SURF>
where
    IN: InputProvider,
    AN: AnalogInput,
    LED: LedDriver,
    SURF: Surface,
{
    pub fn new(
        input: IN,
        analog: AN,
        leds: LED,
        surface: SURF,
        config: ControlConfig,
    ) -> Result<Self, ConfigError> {
        let config = config.validate()?;

        Ok(Self {
            input,
            analog,
            leds,
            surface,
            config,
            state: ControlState::default(),
            debounce: DebounceGate::new(config.debounce_ms),
            prior_cursor: None,
            pending_border: false,
            last_render_ms: None,
            last_telemetry_ms: 0,
        })
    }

    /// Puts every output in its power-on state: LEDs dark, panel blank.
    pub fn start(&mut self) -> Result<(), AppErrorOf<IN, AN, LED, SURF>> {
        self.leds
            .set_level(PwmChannel::Red, 0)
            .map_err(AppError::Led)?;
        self.leds
            .set_level(PwmChannel::Blue, 0)
            .map_err(AppError::Led)?;
        self.leds
            .set_indicator(self.state.green_on)
            .map_err(AppError::Led)?;

        self.surface.clear(Color::Background);
        self.surface.flush().map_err(AppError::Display)?;

        info!(
            "control loop ready: center={} pwm_max={} debounce={}ms render={}ms",
            self.config.adc_center,
            self.config.pwm_max,
            self.config.debounce_ms,
            self.config.render_period_ms
        );
        Ok(())
    }

    /// Drains pending button events, then renders if a cycle is due.
    ///
    /// Call it much more often than `render_period_ms`; button side effects
    /// land within one call of the edge.
    pub fn tick(&mut self, now_ms: u32) -> Result<TickResult, AppErrorOf<IN, AN, LED, SURF>> {
        self.process_inputs()?;

        let render_due = self
            .last_render_ms
            .is_none_or(|last| window_elapsed(now_ms, last, self.config.render_period_ms));
        if render_due {
            let telemetry = self.render_cycle(now_ms)?;
            return Ok(TickResult::Rendered { telemetry });
        }

        if self.pending_border {
            self.redraw_border()?;
            return Ok(TickResult::BorderRedrawn);
        }

        Ok(TickResult::Idle)
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn config(&self) -> ControlConfig {
        self.config
    }

    pub fn prior_cursor(&self) -> Option<CursorPosition> {
        self.prior_cursor
    }

    pub fn leds(&self) -> &LED {
        &self.leds
    }

    pub fn surface(&self) -> &SURF {
        &self.surface
    }

    /// Releases the owned collaborators.
    pub fn release(self) -> (IN, AN, LED, SURF) {
        (self.input, self.analog, self.leds, self.surface)
    }
}
