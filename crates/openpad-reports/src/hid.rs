//! Generic HID gamepad report (DirectInput / PS3-style)
//!
//! Layout, 7 bytes: `buttons: u16 LE`, `hat: u8`, `lx ly rx ry: u8`.

use crate::{ReportError, ReportResult};
use openpad_state::{Button, Compass, GamepadState};

pub const HID_REPORT_SIZE: usize = 7;

pub const HID_MASK_SQUARE: u16 = 1 << 0;
pub const HID_MASK_CROSS: u16 = 1 << 1;
pub const HID_MASK_CIRCLE: u16 = 1 << 2;
pub const HID_MASK_TRIANGLE: u16 = 1 << 3;
pub const HID_MASK_L1: u16 = 1 << 4;
pub const HID_MASK_R1: u16 = 1 << 5;
pub const HID_MASK_L2: u16 = 1 << 6;
pub const HID_MASK_R2: u16 = 1 << 7;
pub const HID_MASK_SELECT: u16 = 1 << 8;
pub const HID_MASK_START: u16 = 1 << 9;
pub const HID_MASK_L3: u16 = 1 << 10;
pub const HID_MASK_R3: u16 = 1 << 11;
pub const HID_MASK_PS: u16 = 1 << 12;
pub const HID_MASK_TP: u16 = 1 << 13;

pub const HID_HAT_UP: u8 = 0;
pub const HID_HAT_UPRIGHT: u8 = 1;
pub const HID_HAT_RIGHT: u8 = 2;
pub const HID_HAT_DOWNRIGHT: u8 = 3;
pub const HID_HAT_DOWN: u8 = 4;
pub const HID_HAT_DOWNLEFT: u8 = 5;
pub const HID_HAT_LEFT: u8 = 6;
pub const HID_HAT_UPLEFT: u8 = 7;
pub const HID_HAT_NOTHING: u8 = 8;

const BUTTON_MAP: [(Button, u16); 14] = [
    (Button::B1, HID_MASK_CROSS),
    (Button::B2, HID_MASK_CIRCLE),
    (Button::B3, HID_MASK_SQUARE),
    (Button::B4, HID_MASK_TRIANGLE),
    (Button::L1, HID_MASK_L1),
    (Button::R1, HID_MASK_R1),
    (Button::L2, HID_MASK_L2),
    (Button::R2, HID_MASK_R2),
    (Button::S1, HID_MASK_SELECT),
    (Button::S2, HID_MASK_START),
    (Button::L3, HID_MASK_L3),
    (Button::R3, HID_MASK_R3),
    (Button::A1, HID_MASK_PS),
    (Button::A2, HID_MASK_TP),
];

/// Hat value for a D-pad direction.
pub fn hid_hat(direction: Compass) -> u8 {
    match direction {
        Compass::North => HID_HAT_UP,
        Compass::NorthEast => HID_HAT_UPRIGHT,
        Compass::East => HID_HAT_RIGHT,
        Compass::SouthEast => HID_HAT_DOWNRIGHT,
        Compass::South => HID_HAT_DOWN,
        Compass::SouthWest => HID_HAT_DOWNLEFT,
        Compass::West => HID_HAT_LEFT,
        Compass::NorthWest => HID_HAT_UPLEFT,
        Compass::Center => HID_HAT_NOTHING,
    }
}

/// Top byte of a 16-bit stick value.
pub(crate) fn axis_u8(value: u16) -> u8 {
    let [_, high] = value.to_le_bytes();
    high
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HidReport {
    pub buttons: u16,
    pub hat: u8,
    pub lx: u8,
    pub ly: u8,
    pub rx: u8,
    pub ry: u8,
}

impl HidReport {
    pub fn encode(state: &GamepadState) -> Self {
        let buttons = BUTTON_MAP
            .iter()
            .filter(|(button, _)| state.pressed(*button))
            .fold(0u16, |acc, (_, mask)| acc | mask);

        Self {
            buttons,
            hat: hid_hat(state.compass()),
            lx: axis_u8(state.lx),
            ly: axis_u8(state.ly),
            rx: axis_u8(state.rx),
            ry: axis_u8(state.ry),
        }
    }

    pub fn to_bytes(&self) -> [u8; HID_REPORT_SIZE] {
        let [b0, b1] = self.buttons.to_le_bytes();
        [b0, b1, self.hat, self.lx, self.ly, self.rx, self.ry]
    }

    pub fn parse(data: &[u8]) -> ReportResult<Self> {
        let Ok([b0, b1, hat, lx, ly, rx, ry]) = <[u8; HID_REPORT_SIZE]>::try_from(data) else {
            return Err(ReportError::InvalidReportSize {
                expected: HID_REPORT_SIZE,
                actual: data.len(),
            });
        };

        Ok(Self {
            buttons: u16::from_le_bytes([b0, b1]),
            hat,
            lx,
            ly,
            rx,
            ry,
        })
    }

    pub fn pressed(&self, mask: u16) -> bool {
        self.buttons & mask != 0
    }
}

impl Default for HidReport {
    fn default() -> Self {
        Self {
            buttons: 0,
            hat: HID_HAT_NOTHING,
            lx: 0x80,
            ly: 0x80,
            rx: 0x80,
            ry: 0x80,
        }
    }
}
