//! Per-input debouncing
//!
//! Every digital input is filtered on its own: a raw value that disagrees with
//! the stable value only replaces it after disagreeing continuously for the
//! whole window. Returning to the stable value before then cancels the change.
//! A window of 0 disables filtering.

use openpad_state::{Button, DIGITAL_INPUT_COUNT, GamepadState, MASK_ALL_INPUTS};

#[derive(Debug, Clone)]
pub struct Debouncer {
    window_ms: u32,
    stable: u32,
    /// When each input started disagreeing with its stable value.
    pending_since: [Option<u32>; DIGITAL_INPUT_COUNT],
}

impl Debouncer {
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            stable: 0,
            pending_since: [None; DIGITAL_INPUT_COUNT],
        }
    }

    /// Pass-through debouncer.
    pub fn disabled() -> Self {
        Self::new(0)
    }

    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }

    pub fn is_enabled(&self) -> bool {
        self.window_ms > 0
    }

    /// Current stable input bits.
    pub fn stable(&self) -> u32 {
        self.stable
    }

    /// Forces the stable bits and drops any pending transitions.
    pub fn reset(&mut self, bits: u32) {
        self.stable = bits & MASK_ALL_INPUTS;
        self.pending_since = [None; DIGITAL_INPUT_COUNT];
    }

    /// Filters `raw` input bits sampled at `now_ms` and returns the stable bits.
    ///
    /// `now_ms` is a wrapping millisecond counter; only differences between
    /// samples are used.
    pub fn debounce_bits(&mut self, raw: u32, now_ms: u32) -> u32 {
        let raw = raw & MASK_ALL_INPUTS;
        if !self.is_enabled() {
            self.reset(raw);
            return raw;
        }

        for (button, since) in Button::ALL.iter().zip(self.pending_since.iter_mut()) {
            let mask = button.mask();
            if (raw ^ self.stable) & mask == 0 {
                *since = None;
                continue;
            }

            let started = *since.get_or_insert(now_ms);
            if now_ms.wrapping_sub(started) >= self.window_ms {
                self.stable ^= mask;
                *since = None;
            }
        }
        self.stable
    }

    /// Replaces the digital inputs of `state` with their debounced values.
    /// Analog fields are left alone.
    pub fn debounce(&mut self, state: &mut GamepadState, now_ms: u32) {
        state.buttons = self.debounce_bits(state.buttons, now_ms);
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(crate::DEFAULT_DEBOUNCE_MS)
    }
}
