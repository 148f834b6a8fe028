use core::cell::RefCell;

use critical_section::Mutex;

/// Hardware owned by an interrupt handler, installed once from the foreground.
///
/// The handler reaches the value through [`Self::with`]; until
/// [`Self::install`] runs it sees nothing. Installing stores the value and
/// arms its interrupt sources inside one critical section, so the handler can
/// never fire for a source it cannot acknowledge.
pub struct IrqSlot<T> {
    inner: Mutex<RefCell<Option<T>>>,
}

impl<T> IrqSlot<T> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Stores `value`, then calls `arm` on it before leaving the critical
    /// section. A previously installed value is returned unarmed as-is.
    pub fn install(&self, value: T, arm: impl FnOnce(&mut T)) -> Option<T> {
        critical_section::with(|cs| {
            let mut slot = self.inner.borrow_ref_mut(cs);
            let previous = slot.take();
            arm(slot.insert(value));
            previous
        })
    }

    /// Runs `f` on the installed value, if any.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).as_mut().map(f))
    }
}

impl<T> Default for IrqSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;

    #[derive(Debug, Default)]
    struct Pins {
        armed: bool,
        serviced: u32,
    }

    impl Pins {
        fn arm(&mut self) {
            self.armed = true;
        }
    }

    #[test]
    fn empty_slot_ignores_the_handler() {
        let slot = IrqSlot::<Pins>::new();

        assert_eq!(slot.with(|pins| pins.serviced += 1), None);
    }

    #[test]
    fn installed_value_is_armed_and_serviced() {
        let slot = IrqSlot::new();

        assert!(slot.install(Pins::default(), Pins::arm).is_none());
        assert_eq!(slot.with(|pins| pins.armed), Some(true));

        slot.with(|pins| pins.serviced += 1);
        assert_eq!(slot.with(|pins| pins.serviced), Some(1));
    }

    #[test]
    fn handler_never_sees_an_unarmed_value() {
        static SLOT: IrqSlot<Pins> = IrqSlot::new();
        static DONE: AtomicBool = AtomicBool::new(false);

        let handler = std::thread::spawn(|| {
            let mut unarmed = 0u32;
            let mut seen = false;
            while !DONE.load(Ordering::Acquire) || !seen {
                match SLOT.with(|pins| pins.armed) {
                    Some(false) => unarmed += 1,
                    Some(true) => seen = true,
                    None => {}
                }
                std::thread::yield_now();
            }
            unarmed
        });

        SLOT.install(Pins::default(), |pins| {
            std::thread::sleep(std::time::Duration::from_millis(5));
            pins.arm();
        });
        DONE.store(true, Ordering::Release);

        assert_eq!(handler.join().unwrap(), 0);
    }
}
