//! Step counter
//!
//! An integer that moves up or down by a fixed step and can be reset to the
//! value it started with. Arithmetic saturates at the `i64` bounds.

use log::debug;

pub const DEFAULT_INITIAL_VALUE: i64 = 0;
pub const DEFAULT_STEP: i64 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    value: i64,
    initial: i64,
    step: i64,
}

impl Counter {
    /// Creates a counter at `initial` that moves by `step`
    pub fn new(initial: i64, step: i64) -> Self {
        Self {
            value: initial,
            initial,
            step,
        }
    }

    /// Current value
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Value captured at construction, restored by [`reset`](Self::reset)
    pub fn initial(&self) -> i64 {
        self.initial
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(self.step);
        debug!("counter incremented to {}", self.value);
    }

    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(self.step);
        debug!("counter decremented to {}", self.value);
    }

    pub fn reset(&mut self) {
        self.value = self.initial;
        debug!("counter reset to {}", self.value);
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_VALUE, DEFAULT_STEP)
    }
}
