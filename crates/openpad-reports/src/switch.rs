//! Nintendo Switch (HORIPAD-compatible) report
//!
//! Layout, 8 bytes: `buttons: u16 LE`, `hat: u8`, `lx ly rx ry: u8`,
//! `vendor: u8` (always 0). The hat table matches the HID one today but is
//! kept separate so either can change independently.

use crate::hid::axis_u8;
use crate::{ReportError, ReportResult};
use openpad_state::{Button, Compass, GamepadState};

pub const SWITCH_REPORT_SIZE: usize = 8;

pub const SWITCH_MASK_Y: u16 = 1 << 0;
pub const SWITCH_MASK_B: u16 = 1 << 1;
pub const SWITCH_MASK_A: u16 = 1 << 2;
pub const SWITCH_MASK_X: u16 = 1 << 3;
pub const SWITCH_MASK_L: u16 = 1 << 4;
pub const SWITCH_MASK_R: u16 = 1 << 5;
pub const SWITCH_MASK_ZL: u16 = 1 << 6;
pub const SWITCH_MASK_ZR: u16 = 1 << 7;
pub const SWITCH_MASK_MINUS: u16 = 1 << 8;
pub const SWITCH_MASK_PLUS: u16 = 1 << 9;
pub const SWITCH_MASK_L3: u16 = 1 << 10;
pub const SWITCH_MASK_R3: u16 = 1 << 11;
pub const SWITCH_MASK_HOME: u16 = 1 << 12;
pub const SWITCH_MASK_CAPTURE: u16 = 1 << 13;

pub const SWITCH_HAT_UP: u8 = 0;
pub const SWITCH_HAT_UPRIGHT: u8 = 1;
pub const SWITCH_HAT_RIGHT: u8 = 2;
pub const SWITCH_HAT_DOWNRIGHT: u8 = 3;
pub const SWITCH_HAT_DOWN: u8 = 4;
pub const SWITCH_HAT_DOWNLEFT: u8 = 5;
pub const SWITCH_HAT_LEFT: u8 = 6;
pub const SWITCH_HAT_UPLEFT: u8 = 7;
pub const SWITCH_HAT_NOTHING: u8 = 8;

const BUTTON_MAP: [(Button, u16); 14] = [
    (Button::B1, SWITCH_MASK_B),
    (Button::B2, SWITCH_MASK_A),
    (Button::B3, SWITCH_MASK_Y),
    (Button::B4, SWITCH_MASK_X),
    (Button::L1, SWITCH_MASK_L),
    (Button::R1, SWITCH_MASK_R),
    (Button::L2, SWITCH_MASK_ZL),
    (Button::R2, SWITCH_MASK_ZR),
    (Button::S1, SWITCH_MASK_MINUS),
    (Button::S2, SWITCH_MASK_PLUS),
    (Button::L3, SWITCH_MASK_L3),
    (Button::R3, SWITCH_MASK_R3),
    (Button::A1, SWITCH_MASK_HOME),
    (Button::A2, SWITCH_MASK_CAPTURE),
];

pub fn switch_hat(direction: Compass) -> u8 {
    match direction {
        Compass::North => SWITCH_HAT_UP,
        Compass::NorthEast => SWITCH_HAT_UPRIGHT,
        Compass::East => SWITCH_HAT_RIGHT,
        Compass::SouthEast => SWITCH_HAT_DOWNRIGHT,
        Compass::South => SWITCH_HAT_DOWN,
        Compass::SouthWest => SWITCH_HAT_DOWNLEFT,
        Compass::West => SWITCH_HAT_LEFT,
        Compass::NorthWest => SWITCH_HAT_UPLEFT,
        Compass::Center => SWITCH_HAT_NOTHING,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchReport {
    pub buttons: u16,
    pub hat: u8,
    pub lx: u8,
    pub ly: u8,
    pub rx: u8,
    pub ry: u8,
    pub vendor: u8,
}

impl SwitchReport {
    pub fn encode(state: &GamepadState) -> Self {
        let buttons = BUTTON_MAP
            .iter()
            .filter(|(button, _)| state.pressed(*button))
            .fold(0u16, |acc, (_, mask)| acc | mask);

        Self {
            buttons,
            hat: switch_hat(state.compass()),
            lx: axis_u8(state.lx),
            ly: axis_u8(state.ly),
            rx: axis_u8(state.rx),
            ry: axis_u8(state.ry),
            vendor: 0,
        }
    }

    pub fn to_bytes(&self) -> [u8; SWITCH_REPORT_SIZE] {
        let [b0, b1] = self.buttons.to_le_bytes();
        [b0, b1, self.hat, self.lx, self.ly, self.rx, self.ry, self.vendor]
    }

    pub fn parse(data: &[u8]) -> ReportResult<Self> {
        let Ok([b0, b1, hat, lx, ly, rx, ry, vendor]) =
            <[u8; SWITCH_REPORT_SIZE]>::try_from(data)
        else {
            return Err(ReportError::InvalidReportSize {
                expected: SWITCH_REPORT_SIZE,
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
            vendor,
        })
    }

    pub fn pressed(&self, mask: u16) -> bool {
        self.buttons & mask != 0
    }
}
