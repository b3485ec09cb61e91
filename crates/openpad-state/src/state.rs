//! Per-cycle gamepad snapshot

use crate::{Button, Compass, JOYSTICK_MID, MASK_ALL_INPUTS, MASK_DPAD};
use serde::{Deserialize, Serialize};

/// Authoritative input snapshot for one polling cycle.
///
/// Stick axes use the full `u16` range with [`JOYSTICK_MID`] as center and Y
/// growing downward. Triggers are 0 when released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamepadState {
    pub buttons: u32,
    pub lx: u16,
    pub ly: u16,
    pub rx: u16,
    pub ry: u16,
    pub lt: u8,
    pub rt: u8,
}

impl Default for GamepadState {
    fn default() -> Self {
        Self {
            buttons: 0,
            lx: JOYSTICK_MID,
            ly: JOYSTICK_MID,
            rx: JOYSTICK_MID,
            ry: JOYSTICK_MID,
            lt: 0,
            rt: 0,
        }
    }
}

impl GamepadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_buttons(buttons: &[Button]) -> Self {
        Self {
            buttons: Button::mask_of(buttons),
            ..Self::default()
        }
    }

    pub fn pressed(&self, button: Button) -> bool {
        self.buttons & button.mask() != 0
    }

    /// True when every bit of `mask` is held.
    pub fn pressed_all(&self, mask: u32) -> bool {
        mask != 0 && self.buttons & mask == mask
    }

    pub fn press(&mut self, button: Button) {
        self.buttons |= button.mask();
    }

    pub fn release(&mut self, button: Button) {
        self.buttons &= !button.mask();
    }

    pub fn set(&mut self, button: Button, value: bool) {
        if value {
            self.press(button);
        } else {
            self.release(button);
        }
    }

    pub fn dpad(&self) -> u32 {
        self.buttons & MASK_DPAD
    }

    pub fn set_dpad(&mut self, bits: u32) {
        self.buttons = (self.buttons & !MASK_DPAD) | (bits & MASK_DPAD);
    }

    pub fn clear_dpad(&mut self) {
        self.buttons &= !MASK_DPAD;
    }

    pub fn compass(&self) -> Compass {
        Compass::from_buttons(self.buttons)
    }

    pub fn center_left_stick(&mut self) {
        self.lx = JOYSTICK_MID;
        self.ly = JOYSTICK_MID;
    }

    pub fn center_right_stick(&mut self) {
        self.rx = JOYSTICK_MID;
        self.ry = JOYSTICK_MID;
    }

    /// Drops any bits above the named inputs.
    pub fn sanitized(mut self) -> Self {
        self.buttons &= MASK_ALL_INPUTS;
        self
    }
}
