//! Xbox 360 (XInput) report
//!
//! Layout, 20 bytes: `report_id: u8` (0), `report_size: u8` (20),
//! `buttons1: u8`, `buttons2: u8`, `lt: u8`, `rt: u8`,
//! `lx ly rx ry: i16 LE`, 6 reserved zero bytes.
//!
//! Axes are re-centered around zero. XInput Y points up while
//! [`GamepadState`] Y points down, so Y axes are complemented first.

use crate::{ReportError, ReportResult};
use openpad_state::{Button, Capabilities, GamepadState};

/// Value of the size byte, which is also the report length.
pub const XINPUT_ENDPOINT_SIZE: u8 = 20;
pub const XINPUT_REPORT_SIZE: usize = XINPUT_ENDPOINT_SIZE as usize;
pub const XINPUT_REPORT_ID: u8 = 0;

pub const XBOX_MASK_UP: u8 = 1 << 0;
pub const XBOX_MASK_DOWN: u8 = 1 << 1;
pub const XBOX_MASK_LEFT: u8 = 1 << 2;
pub const XBOX_MASK_RIGHT: u8 = 1 << 3;
pub const XBOX_MASK_START: u8 = 1 << 4;
pub const XBOX_MASK_BACK: u8 = 1 << 5;
pub const XBOX_MASK_LS: u8 = 1 << 6;
pub const XBOX_MASK_RS: u8 = 1 << 7;

pub const XBOX_MASK_LB: u8 = 1 << 0;
pub const XBOX_MASK_RB: u8 = 1 << 1;
pub const XBOX_MASK_HOME: u8 = 1 << 2;
pub const XBOX_MASK_A: u8 = 1 << 4;
pub const XBOX_MASK_B: u8 = 1 << 5;
pub const XBOX_MASK_X: u8 = 1 << 6;
pub const XBOX_MASK_Y: u8 = 1 << 7;

const BUTTONS1_MAP: [(Button, u8); 8] = [
    (Button::Up, XBOX_MASK_UP),
    (Button::Down, XBOX_MASK_DOWN),
    (Button::Left, XBOX_MASK_LEFT),
    (Button::Right, XBOX_MASK_RIGHT),
    (Button::S2, XBOX_MASK_START),
    (Button::S1, XBOX_MASK_BACK),
    (Button::L3, XBOX_MASK_LS),
    (Button::R3, XBOX_MASK_RS),
];

const BUTTONS2_MAP: [(Button, u8); 7] = [
    (Button::L1, XBOX_MASK_LB),
    (Button::R1, XBOX_MASK_RB),
    (Button::A1, XBOX_MASK_HOME),
    (Button::B1, XBOX_MASK_A),
    (Button::B2, XBOX_MASK_B),
    (Button::B3, XBOX_MASK_X),
    (Button::B4, XBOX_MASK_Y),
];

fn collect(state: &GamepadState, map: &[(Button, u8)]) -> u8 {
    map.iter()
        .filter(|(button, _)| state.pressed(*button))
        .fold(0u8, |acc, (_, mask)| acc | mask)
}

/// Maps `0..=0xFFFF` onto `i16::MIN..=i16::MAX` (`value - 32768`).
pub fn xinput_axis(value: u16) -> i16 {
    i16::from_le_bytes((value ^ 0x8000).to_le_bytes())
}

fn digital_trigger(pressed: bool) -> u8 {
    if pressed { 0xFF } else { 0x00 }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XInputReport {
    pub buttons1: u8,
    pub buttons2: u8,
    pub lt: u8,
    pub rt: u8,
    pub lx: i16,
    pub ly: i16,
    pub rx: i16,
    pub ry: i16,
}

impl XInputReport {
    /// Encodes `state`. Triggers come from the analog values when `caps` says
    /// the board has analog triggers, otherwise from L2/R2.
    pub fn encode(state: &GamepadState, caps: &Capabilities) -> Self {
        let (lt, rt) = if caps.has_analog_triggers {
            (state.lt, state.rt)
        } else {
            (
                digital_trigger(state.pressed(Button::L2)),
                digital_trigger(state.pressed(Button::R2)),
            )
        };

        Self {
            buttons1: collect(state, &BUTTONS1_MAP),
            buttons2: collect(state, &BUTTONS2_MAP),
            lt,
            rt,
            lx: xinput_axis(state.lx),
            ly: xinput_axis(!state.ly),
            rx: xinput_axis(state.rx),
            ry: xinput_axis(!state.ry),
        }
    }

    pub fn to_bytes(&self) -> [u8; XINPUT_REPORT_SIZE] {
        let [lx0, lx1] = self.lx.to_le_bytes();
        let [ly0, ly1] = self.ly.to_le_bytes();
        let [rx0, rx1] = self.rx.to_le_bytes();
        let [ry0, ry1] = self.ry.to_le_bytes();
        [
            XINPUT_REPORT_ID,
            XINPUT_ENDPOINT_SIZE,
            self.buttons1,
            self.buttons2,
            self.lt,
            self.rt,
            lx0,
            lx1,
            ly0,
            ly1,
            rx0,
            rx1,
            ry0,
            ry1,
            0,
            0,
            0,
            0,
            0,
            0,
        ]
    }

    /// Parses a report, checking its length, id and size byte. Reserved bytes
    /// are not inspected.
    pub fn parse(data: &[u8]) -> ReportResult<Self> {
        let Ok(
            [id, size, buttons1, buttons2, lt, rt, lx0, lx1, ly0, ly1, rx0, rx1, ry0, ry1, ..],
        ) = <[u8; XINPUT_REPORT_SIZE]>::try_from(data)
        else {
            return Err(ReportError::InvalidReportSize {
                expected: XINPUT_REPORT_SIZE,
                actual: data.len(),
            });
        };
        if id != XINPUT_REPORT_ID || size != XINPUT_ENDPOINT_SIZE {
            return Err(ReportError::InvalidHeader { id, size });
        }

        Ok(Self {
            buttons1,
            buttons2,
            lt,
            rt,
            lx: i16::from_le_bytes([lx0, lx1]),
            ly: i16::from_le_bytes([ly0, ly1]),
            rx: i16::from_le_bytes([rx0, rx1]),
            ry: i16::from_le_bytes([ry0, ry1]),
        })
    }
}

impl Default for XInputReport {
    fn default() -> Self {
        Self::encode(&GamepadState::default(), &Capabilities::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openpad_state::{JOYSTICK_MAX, JOYSTICK_MID, JOYSTICK_MIN};

    #[test]
    fn test_axis_recentering() {
        assert_eq!(xinput_axis(JOYSTICK_MIN), i16::MIN);
        assert_eq!(xinput_axis(JOYSTICK_MID), 0);
        assert_eq!(xinput_axis(JOYSTICK_MAX), i16::MAX);
    }

    #[test]
    fn test_y_axis_points_up() {
        let state = GamepadState {
            ly: JOYSTICK_MIN,
            ry: JOYSTICK_MAX,
            ..GamepadState::default()
        };
        let report = XInputReport::encode(&state, &Capabilities::full());
        assert_eq!(report.ly, i16::MAX);
        assert_eq!(report.ry, i16::MIN);
        // Complementing the midpoint lands one step below center.
        assert_eq!(XInputReport::default().ly, -1);
        assert_eq!(XInputReport::default().lx, 0);
    }

    #[test]
    fn test_digital_triggers() {
        let state = GamepadState {
            lt: 0x40,
            ..GamepadState::with_buttons(&[Button::R2])
        };
        let report = XInputReport::encode(&state, &Capabilities::digital());
        assert_eq!((report.lt, report.rt), (0x00, 0xFF));

        let report = XInputReport::encode(&state, &Capabilities::full());
        assert_eq!((report.lt, report.rt), (0x40, 0x00));
    }

    #[test]
    fn test_button_bytes() {
        let state = GamepadState::with_buttons(&[
            Button::Up,
            Button::S1,
            Button::R3,
            Button::A1,
            Button::B4,
        ]);
        let report = XInputReport::encode(&state, &Capabilities::digital());
        assert_eq!(report.buttons1, XBOX_MASK_UP | XBOX_MASK_BACK | XBOX_MASK_RS);
        assert_eq!(report.buttons2, XBOX_MASK_HOME | XBOX_MASK_Y);
    }

    #[test]
    fn test_bytes_header_and_reserved() {
        let bytes = XInputReport::default().to_bytes();
        assert_eq!(bytes.get(..2), Some(&[0x00, 0x14][..]));
        assert_eq!(bytes.get(14..), Some(&[0u8; 6][..]));
    }

    #[test]
    fn test_parse_checks_header() {
        let mut bytes = XInputReport::default().to_bytes();
        if let Some(id) = bytes.first_mut() {
            *id = 1;
        }
        assert!(matches!(
            XInputReport::parse(&bytes),
            Err(ReportError::InvalidHeader { id: 1, size: 20 })
        ));
    }
}
