use core::cell::RefCell;
use core::convert::Infallible;

use critical_section::Mutex;
use heapless::Deque;

use super::{ButtonEvent, InputProvider};

struct QueueState<const N: usize> {
    events: Deque<ButtonEvent, N>,
    dropped: u32,
}

/// Interrupt-to-foreground handoff for button edges.
///
/// Meant to live in a `static`: the interrupt handler calls [`Self::push`],
/// the foreground loop drains it through [`InputProvider`]. Every access runs
/// inside a critical section, so it stays sound with preemptive handlers or
/// a second core.
pub struct EventQueue<const N: usize> {
    inner: Mutex<RefCell<QueueState<N>>>,
}

impl<const N: usize> EventQueue<N> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(QueueState {
                events: Deque::new(),
                dropped: 0,
            })),
        }
    }

    /// Enqueues an edge. When full the new event is discarded and counted.
    pub fn push(&self, event: ButtonEvent) -> bool {
        critical_section::with(|cs| {
            let mut state = self.inner.borrow_ref_mut(cs);
            if state.events.push_back(event).is_ok() {
                true
            } else {
                state.dropped = state.dropped.saturating_add(1);
                false
            }
        })
    }

    pub fn pop(&self) -> Option<ButtonEvent> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).events.pop_front())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow_ref(cs).events.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns and resets the overflow counter.
    pub fn take_dropped(&self) -> u32 {
        critical_section::with(|cs| core::mem::take(&mut self.inner.borrow_ref_mut(cs).dropped))
    }
}

impl<const N: usize> Default for EventQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> InputProvider for &EventQueue<N> {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Option<ButtonEvent>, Self::Error> {
        Ok(self.pop())
    }

    fn take_dropped(&mut self) -> u32 {
        EventQueue::take_dropped(*self)
    }
}
