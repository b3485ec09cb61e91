//! Gamepad pipeline for OpenPad
//!
//! This crate wires the OpenPad stages into a single polling loop driven by
//! the board integration.
//!
//! # Overview
//!
//! - **Gamepad**: owns the device, clock, options store and every stage's
//!   history; [`Gamepad::poll`] produces one report per call
//! - **InputDevice / Clock**: the two collaborators a board must supply
//! - **PadSettings**: build-time settings (debounce window, hotkey chords,
//!   option defaults), loadable from JSON
//!
//! # Architecture
//!
//! ```text
//! InputDevice ─→ Debouncer ─→ SocdCleaner ─→ HotkeyEngine ─→ D-pad mode ─→ inversion ─→ encode
//!                   ↑                             ↓
//!                 Clock                      OptionsStore (commit on change)
//! ```
//!
//! The pipeline is single-threaded and never blocks or fails. Storage is the
//! only fallible boundary; its errors are logged and dropped.
//!
//! # Example
//!
//! ```
//! use openpad_options::{InputMode, MemoryBackend};
//! use openpad_pipeline::prelude::*;
//! use openpad_state::{Button, Capabilities, GamepadState};
//!
//! struct Stick(GamepadState);
//!
//! impl InputDevice for Stick {
//!     fn read_raw_state(&mut self) -> GamepadState {
//!         self.0
//!     }
//!
//!     fn capabilities(&self) -> Capabilities {
//!         Capabilities::digital()
//!     }
//! }
//!
//! let settings = PadSettings {
//!     debounce_ms: 0,
//!     ..PadSettings::default()
//! };
//! let device = Stick(GamepadState::with_buttons(&[Button::B1]));
//! let mut pad = Gamepad::new(device, SystemClock::new(), MemoryBackend::default(), settings)?;
//! pad.setup();
//!
//! let cycle = pad.poll();
//! assert_eq!(cycle.report.input_mode(), InputMode::XInput);
//! assert!(cycle.state.pressed(Button::B1));
//! # Ok::<(), SettingsError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod device;
pub mod gamepad;
pub mod prelude;

pub use config::PadSettings;
pub use device::{Clock, InputDevice, SystemClock};
pub use gamepad::{Cycle, Gamepad};

use openpad_state::Button;
use thiserror::Error;

/// Invalid [`PadSettings`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Hotkey chord {0} has no buttons")]
    EmptyChord(&'static str),

    #[error("Hotkey chord {chord} contains D-pad direction {button:?}")]
    DpadInChord { chord: &'static str, button: Button },

    #[error("Hotkey chords share buttons: {0:?}")]
    OverlappingChords(Vec<Button>),

    #[error("Invalid settings JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Json(e.to_string())
    }
}

pub type SettingsResult<T> = Result<T, SettingsError>;
