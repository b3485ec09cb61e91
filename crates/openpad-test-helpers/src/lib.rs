//! Shared test utilities for OpenPad.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with good error messages and `#[track_caller]`
//! - [`assertions`] - Assertion macros for gamepad state
//! - [`mock`] - Manual clock, scripted input device and a storage backend
//!   that fails on demand
//! - [`prelude`] - Convenience re-exports
//!
//! # Usage
//!
//! ```rust,ignore
//! use openpad_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::unwrap_used, clippy::panic, reason = "test-only helpers")]

pub mod assertions;
pub mod mock;
pub mod must;
pub mod prelude;

pub use must::*;
