//! Runtime options and persistence for OpenPad
//!
//! This crate owns the runtime-mutable part of gamepad behavior and its
//! persisted form.
//!
//! ## Features
//! - `Configuration` with input mode, D-pad mode, SOCD mode and axis inversion
//! - Fixed, append-only byte layout for the stored record
//! - Dirty-checked commits: only changed fields are written and the backing
//!   medium is flushed at most once per commit
//! - Untrusted reads: any out-of-range stored value falls back to a default

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod backend;
pub mod layout;
pub mod store;
pub mod types;

pub use backend::*;
pub use layout::*;
pub use store::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Access out of range: offset {offset}, length {len}, capacity {capacity}")]
    OutOfRange {
        offset: usize,
        len: usize,
        capacity: usize,
    },

    #[error("Write failed at offset {0}")]
    WriteFailed(usize),

    #[error("Read failed at offset {0}")]
    ReadFailed(usize),

    #[error("Flush failed: {0}")]
    FlushFailed(String),
}

pub type StorageResult<T> = Result<T, StorageError>;
