impl CursorPosition {
    pub const fn footprint(self, size: u8) -> Rect {
        Rect::square(self.row, self.col, size)
    }
}

impl<IN, AN, LED, SURF> JoystickApp<IN, AN, LED, SURF>
where
    IN: InputProvider,
    AN: AnalogInput,
    LED: LedDriver,
    SURF: Surface,
{
    /// Scales samples onto the usable area. Vertical is inverted so pushing
    /// the stick up moves the cursor up.
    fn cursor_for(&self, vrx: u16, vry: u16) -> CursorPosition {
        let adc_max = self.config.adc_max.max(1) as u32;
        let geometry = self.config.geometry;

        let vry = (vry as u32).min(adc_max);
        let vrx = (vrx as u32).min(adc_max);

        CursorPosition {
            row: ((adc_max - vry) * geometry.usable_height as u32 / adc_max) as u8,
            col: (vrx * geometry.usable_width as u32 / adc_max) as u8,
        }
    }
}
