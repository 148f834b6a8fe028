//! Time-window debounce for interrupt-driven button edges.

use log::debug;

use crate::input::{ButtonEvent, ButtonLine};

/// `true` once at least `window_ms` passed since `last_ms`.
///
/// The subtraction wraps, so a single rollover of the millisecond clock
/// between the two stamps is handled as long as `window_ms` is far below the
/// wrap period.
#[inline]
pub fn window_elapsed(now_ms: u32, last_ms: u32, window_ms: u32) -> bool {
    now_ms.wrapping_sub(last_ms) >= window_ms
}

/// Per-line record of the last accepted edge.
///
/// Lines never influence each other; a line that never fired accepts its
/// first edge unconditionally.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DebounceGate {
    window_ms: u32,
    last_accepted: [Option<u32>; ButtonLine::COUNT],
}

impl DebounceGate {
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            last_accepted: [None; ButtonLine::COUNT],
        }
    }

    /// Decides whether `event` is a real press and records it if so.
    pub fn accept(&mut self, event: ButtonEvent) -> bool {
        let slot = &mut self.last_accepted[event.line.index()];
        let accepted = match *slot {
            None => true,
            Some(last_ms) => window_elapsed(event.at_ms, last_ms, self.window_ms),
        };

        if accepted {
            *slot = Some(event.at_ms);
        } else {
            debug!("debounce: dropped {:?} at {}ms", event.line, event.at_ms);
        }

        accepted
    }

    pub fn last_accepted(&self, line: ButtonLine) -> Option<u32> {
        self.last_accepted[line.index()]
    }
}
