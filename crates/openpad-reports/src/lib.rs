//! USB report encoders for OpenPad
//!
//! Turns a processed [`GamepadState`](openpad_state::GamepadState) into the
//! exact bytes each host protocol expects:
//! - **HID**: 7-byte generic gamepad report (DirectInput / PS3 style)
//! - **Switch**: 8-byte HORIPAD-compatible report
//! - **XInput**: 20-byte Xbox 360 report
//!
//! Every multi-byte field is little-endian. The hat of the HID and Switch
//! reports is derived from the D-pad compass, so unresolved opposite
//! directions are reported as centered.
//!
//! # Example
//!
//! ```
//! use openpad_options::InputMode;
//! use openpad_reports::{encode, report_size};
//! use openpad_state::{Button, Capabilities, GamepadState};
//!
//! let state = GamepadState::with_buttons(&[Button::B1, Button::Up]);
//! let report = encode(InputMode::Hid, &state, &Capabilities::digital());
//! assert_eq!(report.to_vec(), [0x02, 0x00, 0x00, 0x80, 0x80, 0x80, 0x80]);
//! assert_eq!(report.size(), report_size(InputMode::Hid));
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod hid;
pub mod report;
pub mod switch;
pub mod xinput;

pub use hid::*;
pub use report::*;
pub use switch::*;
pub use xinput::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Invalid report size: expected {expected}, got {actual}")]
    InvalidReportSize { expected: usize, actual: usize },

    #[error("Invalid report header: id {id}, size {size}")]
    InvalidHeader { id: u8, size: u8 },

    #[error("Output buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
}

pub type ReportResult<T> = Result<T, ReportError>;
