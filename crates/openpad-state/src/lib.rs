//! Gamepad input state for OpenPad
//!
//! This crate defines the per-cycle input snapshot shared by every stage of
//! the OpenPad pipeline:
//! - **GamepadState**: 18 digital inputs packed one bit each, four 16-bit
//!   stick axes and two 8-bit triggers
//! - **Button**: the named digital inputs and their bit masks
//! - **Capabilities**: which sticks and analog triggers a board really has
//! - **Compass**: the 8-direction + center view of the D-pad bits used by
//!   stick emulation and every report hat encoding
//!
//! # Example
//!
//! ```
//! use openpad_state::{Button, Compass, GamepadState};
//!
//! let mut state = GamepadState::default();
//! state.press(Button::Up);
//! state.press(Button::Right);
//! assert_eq!(Compass::from_buttons(state.buttons), Compass::NorthEast);
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod button;
pub mod capabilities;
pub mod compass;
pub mod state;

pub use button::*;
pub use capabilities::*;
pub use compass::*;
pub use state::*;

/// Lowest stick value (full left / full up).
pub const JOYSTICK_MIN: u16 = 0x0000;
/// Centered stick value.
pub const JOYSTICK_MID: u16 = 0x8000;
/// Highest stick value (full right / full down).
pub const JOYSTICK_MAX: u16 = 0xFFFF;

/// Number of named digital inputs, D-pad included.
pub const DIGITAL_INPUT_COUNT: usize = 18;
