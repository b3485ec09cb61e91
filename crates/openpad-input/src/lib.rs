//! Input processing stages for OpenPad
//!
//! Each stage operates on a [`GamepadState`](openpad_state::GamepadState) in
//! place and keeps only the small amount of history it needs:
//! - **Debouncer**: per-input stability window over a millisecond clock
//! - **SocdCleaner**: resolves opposite D-pad directions by policy
//! - **Mode processing**: D-pad to stick emulation, absent-stick centering
//!   and axis inversion
//! - **HotkeyEngine**: button chords that rewrite the live configuration
//!
//! # Example
//!
//! ```
//! use openpad_input::{SocdCleaner, apply_dpad_mode};
//! use openpad_options::{DpadMode, SocdMode};
//! use openpad_state::{Button, Capabilities, GamepadState, JOYSTICK_MAX, JOYSTICK_MIN};
//!
//! let mut state = GamepadState::with_buttons(&[Button::Up, Button::Down, Button::Right]);
//! let mut socd = SocdCleaner::new();
//! state.buttons = socd.resolve(SocdMode::UpPriority, state.buttons);
//!
//! apply_dpad_mode(&mut state, DpadMode::LeftAnalog, &Capabilities::default());
//! assert_eq!((state.lx, state.ly), (JOYSTICK_MAX, JOYSTICK_MIN));
//! assert_eq!(state.dpad(), 0);
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod debounce;
pub mod dpad;
pub mod hotkey;
pub mod socd;

pub use debounce::Debouncer;
pub use dpad::{
    apply_axis_inversion, apply_dpad_mode, dpad_to_analog_x, dpad_to_analog_y, invert_axis,
};
pub use hotkey::{DEFAULT_F1_CHORD, DEFAULT_F2_CHORD, Hotkey, HotkeyEngine};
pub use socd::SocdCleaner;

/// Default debounce window in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u32 = 5;
