//! Periodic diagnostic line.

use core::fmt;

/// Snapshot of one render cycle, emitted at most once per telemetry period.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Telemetry {
    /// Raw horizontal sample (drives red).
    pub vrx: u16,
    /// Raw vertical sample (drives blue).
    pub vry: u16,
    /// Applied duty, so 0 while outputs are off.
    pub red_duty_pct: u8,
    pub blue_duty_pct: u8,
    pub outputs_enabled: bool,
}

impl fmt::Display for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VRx: {} | Duty Cycle R: {}% | VRy: {} | Duty Cycle B: {}%",
            self.vrx, self.red_duty_pct, self.vry, self.blue_duty_pct
        )?;
        if !self.outputs_enabled {
            f.write_str(" (outputs off)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_format() {
        let telemetry = Telemetry {
            vrx: 4095,
            vry: 2048,
            red_duty_pct: 100,
            blue_duty_pct: 0,
            outputs_enabled: true,
        };
        assert_eq!(
            telemetry.to_string(),
            "VRx: 4095 | Duty Cycle R: 100% | VRy: 2048 | Duty Cycle B: 0%"
        );
    }

    #[test]
    fn disabled_outputs_are_flagged() {
        let telemetry = Telemetry {
            vrx: 0,
            vry: 0,
            red_duty_pct: 0,
            blue_duty_pct: 0,
            outputs_enabled: false,
        };
        assert_eq!(
            telemetry.to_string(),
            "VRx: 0 | Duty Cycle R: 0% | VRy: 0 | Duty Cycle B: 0% (outputs off)"
        );
    }
}
