//! D-pad mode processing
//!
//! Converts D-pad bits into stick positions, centers sticks the board does
//! not have and applies axis inversion.

use openpad_options::{Configuration, DpadMode};
use openpad_state::{
    Capabilities, GamepadState, JOYSTICK_MAX, JOYSTICK_MID, JOYSTICK_MIN, MASK_DOWN, MASK_LEFT,
    MASK_RIGHT, MASK_UP,
};

/// Horizontal stick value for the D-pad bits in `buttons`.
///
/// Expects SOCD-resolved input; if both Left and Right are set, Left wins.
pub fn dpad_to_analog_x(buttons: u32) -> u16 {
    if buttons & MASK_LEFT != 0 {
        JOYSTICK_MIN
    } else if buttons & MASK_RIGHT != 0 {
        JOYSTICK_MAX
    } else {
        JOYSTICK_MID
    }
}

/// Vertical stick value for the D-pad bits in `buttons`. Up is `JOYSTICK_MIN`.
pub fn dpad_to_analog_y(buttons: u32) -> u16 {
    if buttons & MASK_UP != 0 {
        JOYSTICK_MIN
    } else if buttons & MASK_DOWN != 0 {
        JOYSTICK_MAX
    } else {
        JOYSTICK_MID
    }
}

/// Applies the D-pad mode to `state`.
///
/// In the analog modes the D-pad drives the chosen stick and its bits are
/// cleared. Sticks missing from `caps` are reported centered unless the D-pad
/// is driving them.
pub fn apply_dpad_mode(state: &mut GamepadState, mode: DpadMode, caps: &Capabilities) {
    match mode {
        DpadMode::LeftAnalog => {
            if !caps.has_right_stick {
                state.center_right_stick();
            }
            state.lx = dpad_to_analog_x(state.buttons);
            state.ly = dpad_to_analog_y(state.buttons);
            state.clear_dpad();
        }
        DpadMode::RightAnalog => {
            if !caps.has_left_stick {
                state.center_left_stick();
            }
            state.rx = dpad_to_analog_x(state.buttons);
            state.ry = dpad_to_analog_y(state.buttons);
            state.clear_dpad();
        }
        DpadMode::Digital => {
            if !caps.has_left_stick {
                state.center_left_stick();
            }
            if !caps.has_right_stick {
                state.center_right_stick();
            }
        }
    }
}

/// Reflects a stick value around the midpoint. Full deflection maps to full
/// deflection in the other direction and center stays center.
///
/// `JOYSTICK_MID` and its mirror partner `JOYSTICK_MID - 1` are both fixed,
/// which keeps the mapping its own inverse.
pub fn invert_axis(value: u16) -> u16 {
    const BELOW_MID: u16 = JOYSTICK_MAX ^ JOYSTICK_MID;
    match value {
        JOYSTICK_MID | BELOW_MID => value,
        _ => JOYSTICK_MAX ^ value,
    }
}

/// Inverts the stick axes selected in `config`, on both sticks.
pub fn apply_axis_inversion(state: &mut GamepadState, config: &Configuration) {
    if config.invert_x_axis {
        state.lx = invert_axis(state.lx);
        state.rx = invert_axis(state.rx);
    }
    if config.invert_y_axis {
        state.ly = invert_axis(state.ly);
        state.ry = invert_axis(state.ry);
    }
}
