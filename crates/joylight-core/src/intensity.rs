//! Stick deflection to LED brightness.

/// Largest deflection reachable on both sides of `center`.
#[inline]
pub fn symmetric_span(adc_max: u16, center: u16) -> u16 {
    center.min(adc_max.saturating_sub(center))
}

/// Largest value [`intensity`] returns for this ADC range.
#[inline]
pub fn max_intensity(adc_max: u16, center: u16) -> u16 {
    symmetric_span(adc_max, center).saturating_mul(2)
}

/// Maps a raw sample to a PWM level proportional to its distance from `center`.
///
/// Samples above `adc_max` are clamped, and the deflection saturates at the
/// symmetric span so both stick ends produce the same maximum.
pub fn intensity(sample: u16, center: u16, adc_max: u16) -> u16 {
    let sample = sample.min(adc_max);
    let deflection = if sample > center {
        sample - center
    } else {
        center - sample
    };

    deflection.min(symmetric_span(adc_max, center)) * 2
}

/// Rounded `level / pwm_max * 100`.
pub fn duty_cycle_pct(level: u16, pwm_max: u16) -> u8 {
    let pwm_max = pwm_max.max(1) as u32;
    let level = (level as u32).min(pwm_max);
    ((level * 100 + pwm_max / 2) / pwm_max) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: u16 = 2048;
    const ADC_MAX: u16 = 4095;

    #[test]
    fn rest_position_is_dark() {
        assert_eq!(intensity(CENTER, CENTER, ADC_MAX), 0);
    }

    #[test]
    fn symmetric_around_center() {
        for d in 0..=2047u16 {
            assert_eq!(
                intensity(CENTER + d, CENTER, ADC_MAX),
                intensity(CENTER - d, CENTER, ADC_MAX),
                "deflection {d}"
            );
        }
    }

    #[test]
    fn both_ends_reach_the_same_maximum() {
        assert_eq!(intensity(0, CENTER, ADC_MAX), 4094);
        assert_eq!(intensity(ADC_MAX, CENTER, ADC_MAX), 4094);
        assert_eq!(max_intensity(ADC_MAX, CENTER), 4094);
    }

    #[test]
    fn linear_inside_the_span() {
        assert_eq!(intensity(CENTER + 100, CENTER, ADC_MAX), 200);
        assert_eq!(intensity(CENTER - 1, CENTER, ADC_MAX), 2);
    }

    #[test]
    fn oversized_sample_is_clamped() {
        assert_eq!(intensity(u16::MAX, CENTER, ADC_MAX), 4094);
    }

    #[test]
    fn never_exceeds_pwm_wrap() {
        for sample in 0..=ADC_MAX {
            assert!(intensity(sample, CENTER, ADC_MAX) <= 4095);
        }
    }

    #[test]
    fn duty_cycle_rounds_to_whole_percent() {
        assert_eq!(duty_cycle_pct(0, 4095), 0);
        assert_eq!(duty_cycle_pct(4094, 4095), 100);
        assert_eq!(duty_cycle_pct(2047, 4095), 50);
        assert_eq!(duty_cycle_pct(200, 4095), 5);
        assert_eq!(duty_cycle_pct(9999, 4095), 100);
    }
}
