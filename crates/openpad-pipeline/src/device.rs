//! Collaborators supplied by the board integration
//!
//! The pipeline never touches pins, registers or timers directly. A board
//! provides an [`InputDevice`] for raw input and a [`Clock`] for debounce
//! timing.

use openpad_state::{Capabilities, GamepadState};
use std::time::Instant;

/// Source of raw input for one board.
pub trait InputDevice {
    /// One-time hardware initialization, called by [`Gamepad::setup`](crate::Gamepad::setup).
    fn setup(&mut self) {}

    /// Samples every input. Digital bits are raw (not debounced); absent
    /// sticks may hold any value and are centered by the pipeline.
    fn read_raw_state(&mut self) -> GamepadState;

    /// Physical features of the board.
    fn capabilities(&self) -> Capabilities;
}

impl<D: InputDevice + ?Sized> InputDevice for &mut D {
    fn setup(&mut self) {
        (**self).setup();
    }

    fn read_raw_state(&mut self) -> GamepadState {
        (**self).read_raw_state()
    }

    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }
}

/// Monotonic millisecond counter.
///
/// The value may wrap around `u32::MAX`; only differences are meaningful.
pub trait Clock {
    /// Current time in milliseconds.
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// [`Clock`] backed by [`Instant`], counting from its creation.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    /// Starts a clock at zero.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u32 {
        let elapsed = self.start.elapsed().as_millis() & u128::from(u32::MAX);
        u32::try_from(elapsed).unwrap_or(u32::MAX)
    }
}
