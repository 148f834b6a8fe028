impl<IN, AN, LED, SURF> JoystickApp<IN, AN, LED, SURF>
where
    IN: InputProvider,
    AN: AnalogInput,
    LED: LedDriver,
    SURF: Surface,
{
    fn process_inputs(&mut self) -> Result<(), AppErrorOf<IN, AN, LED, SURF>> {
        let dropped = self.input.take_dropped();
        if dropped > 0 {
            warn!("input: {} button edges dropped, queue full", dropped);
        }

        while let Some(event) = self.input.poll_event().map_err(AppError::Input)? {
            self.handle_event(event)?;
        }

        Ok(())
    }

    /// Debounces one edge and, if it is a real press, applies all of its side
    /// effects before returning.
    ///
    /// Returns whether the edge was accepted.
    pub fn handle_event(
        &mut self,
        event: ButtonEvent,
    ) -> Result<bool, AppErrorOf<IN, AN, LED, SURF>> {
        if !self.debounce.accept(event) {
            return Ok(false);
        }

        match self.state.apply(event.line) {
            StateChange::Indicator { on, border } => {
                self.leds.set_indicator(on).map_err(AppError::Led)?;
                self.pending_border = true;
                debug!("button: joystick at {}ms green={} border={:?}", event.at_ms, on, border);
            }
            StateChange::Outputs { enabled } => {
                if !enabled {
                    self.leds
                        .set_level(PwmChannel::Red, 0)
                        .map_err(AppError::Led)?;
                    self.leds
                        .set_level(PwmChannel::Blue, 0)
                        .map_err(AppError::Led)?;
                }
                debug!("button: A at {}ms outputs_enabled={}", event.at_ms, enabled);
            }
        }

        Ok(true)
    }
}
