//! Stored record layout
//!
//! One byte per field at a fixed offset. Offsets are append-only: existing
//! fields never move so records written by older firmware stay loadable.
//! Erased media reads back as `0xFF`, which no field accepts, so a fresh
//! device decodes to defaults.

use crate::{Configuration, DpadMode, InputMode, SocdMode};

pub const RECORD_LEN: usize = 5;
pub const ERASED_BYTE: u8 = 0xFF;

pub type Record = [u8; RECORD_LEN];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    InputMode,
    DpadMode,
    SocdMode,
    InvertXAxis,
    InvertYAxis,
}

impl Field {
    pub const ALL: [Field; RECORD_LEN] = [
        Field::InputMode,
        Field::DpadMode,
        Field::SocdMode,
        Field::InvertXAxis,
        Field::InvertYAxis,
    ];

    pub const fn offset(self) -> usize {
        match self {
            Field::InputMode => 0,
            Field::DpadMode => 1,
            Field::SocdMode => 2,
            Field::InvertXAxis => 3,
            Field::InvertYAxis => 4,
        }
    }

    pub fn encode(self, config: &Configuration) -> u8 {
        match self {
            Field::InputMode => config.input_mode.as_raw(),
            Field::DpadMode => config.dpad_mode.as_raw(),
            Field::SocdMode => config.socd_mode.as_raw(),
            Field::InvertXAxis => u8::from(config.invert_x_axis),
            Field::InvertYAxis => u8::from(config.invert_y_axis),
        }
    }

    /// Applies `raw` to `config`. Returns `false`, leaving `config` untouched,
    /// when `raw` is not a valid value for this field.
    pub fn decode_into(self, raw: u8, config: &mut Configuration) -> bool {
        match self {
            Field::InputMode => InputMode::from_raw(raw).map(|v| config.input_mode = v),
            Field::DpadMode => DpadMode::from_raw(raw).map(|v| config.dpad_mode = v),
            Field::SocdMode => SocdMode::from_raw(raw).map(|v| config.socd_mode = v),
            Field::InvertXAxis => decode_bool(raw).map(|v| config.invert_x_axis = v),
            Field::InvertYAxis => decode_bool(raw).map(|v| config.invert_y_axis = v),
        }
        .is_some()
    }

    pub fn read(self, record: &Record) -> u8 {
        record.get(self.offset()).copied().unwrap_or(ERASED_BYTE)
    }

    pub fn store(self, record: &mut Record, raw: u8) {
        if let Some(slot) = record.get_mut(self.offset()) {
            *slot = raw;
        }
    }
}

fn decode_bool(raw: u8) -> Option<bool> {
    match raw {
        0 => Some(false),
        1 => Some(true),
        _ => None,
    }
}

pub fn encode_record(config: &Configuration) -> Record {
    let mut record = [ERASED_BYTE; RECORD_LEN];
    for field in Field::ALL {
        field.store(&mut record, field.encode(config));
    }
    record
}

/// Decodes a stored record, starting from `defaults` and keeping the default
/// for every field whose stored byte is out of range. Also returns those
/// fields.
pub fn decode_record(record: &Record, defaults: &Configuration) -> (Configuration, Vec<Field>) {
    let mut config = *defaults;
    let mut defaulted = Vec::new();
    for field in Field::ALL {
        if !field.decode_into(field.read(record), &mut config) {
            defaulted.push(field);
        }
    }
    (config, defaulted)
}
