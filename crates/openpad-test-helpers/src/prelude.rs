//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use openpad_test_helpers::prelude::*;
//! ```

pub use crate::mock::{FailingBackend, ManualClock, ScriptedDevice};
pub use crate::must::{must, must_err, must_some, must_with};
pub use crate::{assert_pressed, assert_report_bytes};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
