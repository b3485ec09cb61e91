//! Prelude for openpad-pipeline
//!
//! Re-exports what a board integration needs to drive a gamepad.
//!
//! ```
//! use openpad_pipeline::prelude::*;
//!
//! let settings = PadSettings::default();
//! assert_eq!(settings.validate(), Ok(()));
//! ```

pub use crate::config::PadSettings;
pub use crate::device::{Clock, InputDevice, SystemClock};
pub use crate::gamepad::{Cycle, Gamepad};
pub use crate::{SettingsError, SettingsResult};
pub use openpad_input::Hotkey;
pub use openpad_reports::{Report, ReportHistory};
