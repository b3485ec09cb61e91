//! Encoder selection and duplicate-report suppression

use crate::{
    HID_REPORT_SIZE, HidReport, ReportError, ReportResult, SWITCH_REPORT_SIZE, SwitchReport,
    XINPUT_REPORT_SIZE, XInputReport,
};
use openpad_options::InputMode;
use openpad_state::{Capabilities, GamepadState};

/// A report encoded for one host protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Hid(HidReport),
    Switch(SwitchReport),
    XInput(XInputReport),
}

impl Report {
    pub fn input_mode(&self) -> InputMode {
        match self {
            Report::Hid(_) => InputMode::Hid,
            Report::Switch(_) => InputMode::Switch,
            Report::XInput(_) => InputMode::XInput,
        }
    }

    /// Length of the report on the wire.
    pub fn size(&self) -> usize {
        report_size(self.input_mode())
    }

    fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        match self {
            Report::Hid(report) => f(report.to_bytes().as_slice()),
            Report::Switch(report) => f(report.to_bytes().as_slice()),
            Report::XInput(report) => f(report.to_bytes().as_slice()),
        }
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.with_bytes(<[u8]>::to_vec)
    }

    /// Copies the wire bytes to the start of `out` and returns how many were
    /// written.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::BufferTooSmall`] if `out` cannot hold the report.
    pub fn write_to(&self, out: &mut [u8]) -> ReportResult<usize> {
        self.with_bytes(|bytes| {
            let available = out.len();
            let Some(dst) = out.get_mut(..bytes.len()) else {
                return Err(ReportError::BufferTooSmall {
                    needed: bytes.len(),
                    available,
                });
            };
            dst.copy_from_slice(bytes);
            Ok(bytes.len())
        })
    }
}

/// Encodes `state` for `mode`. Pure; calling it again with the same inputs
/// yields the same report.
pub fn encode(mode: InputMode, state: &GamepadState, caps: &Capabilities) -> Report {
    match mode {
        InputMode::Hid => Report::Hid(HidReport::encode(state)),
        InputMode::Switch => Report::Switch(SwitchReport::encode(state)),
        InputMode::XInput => Report::XInput(XInputReport::encode(state, caps)),
    }
}

pub const fn report_size(mode: InputMode) -> usize {
    match mode {
        InputMode::Hid => HID_REPORT_SIZE,
        InputMode::Switch => SWITCH_REPORT_SIZE,
        InputMode::XInput => XINPUT_REPORT_SIZE,
    }
}

/// Last report handed to the host, owned by the transport.
///
/// Used to skip sending a report that is byte-identical to the previous one.
#[derive(Debug, Clone, Default)]
pub struct ReportHistory {
    last: Option<Report>,
}

impl ReportHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `report` and returns whether it differs from the previous one.
    /// The first report, and any report after a protocol switch, counts as
    /// changed.
    pub fn changed(&mut self, report: &Report) -> bool {
        if self.last.as_ref() == Some(report) {
            return false;
        }
        self.last = Some(*report);
        true
    }

    pub fn last(&self) -> Option<&Report> {
        self.last.as_ref()
    }

    /// Forgets the previous report so the next one is always sent.
    pub fn clear(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openpad_state::Button;

    #[test]
    fn test_report_sizes() {
        assert_eq!(report_size(InputMode::Hid), 7);
        assert_eq!(report_size(InputMode::Switch), 8);
        assert_eq!(report_size(InputMode::XInput), 20);
        let caps = Capabilities::digital();
        for &mode in InputMode::ALL {
            let report = encode(mode, &GamepadState::default(), &caps);
            assert_eq!(report.input_mode(), mode);
            assert_eq!(report.to_vec().len(), report_size(mode));
        }
    }

    #[test]
    fn test_write_to() -> Result<(), ReportError> {
        let report = encode(InputMode::Hid, &GamepadState::default(), &Capabilities::digital());
        let mut buffer = [0xAAu8; 64];
        let written = report.write_to(&mut buffer)?;
        assert_eq!(written, HID_REPORT_SIZE);
        assert_eq!(buffer.get(..written), Some(report.to_vec().as_slice()));
        assert_eq!(buffer.get(written), Some(&0xAA));

        let mut small = [0u8; 4];
        assert!(matches!(
            report.write_to(&mut small),
            Err(ReportError::BufferTooSmall { needed: 7, available: 4 })
        ));
        Ok(())
    }

    #[test]
    fn test_history_suppresses_duplicates() {
        let caps = Capabilities::digital();
        let idle = encode(InputMode::Switch, &GamepadState::default(), &caps);
        let pressed = encode(
            InputMode::Switch,
            &GamepadState::with_buttons(&[Button::B1]),
            &caps,
        );

        let mut history = ReportHistory::new();
        assert!(history.changed(&idle));
        assert!(!history.changed(&idle));
        assert!(history.changed(&pressed));
        assert!(history.changed(&idle));
        assert_eq!(history.last(), Some(&idle));

        history.clear();
        assert!(history.changed(&idle));
    }

    #[test]
    fn test_history_protocol_switch_counts_as_change() {
        let caps = Capabilities::digital();
        let state = GamepadState::default();
        let mut history = ReportHistory::new();
        assert!(history.changed(&encode(InputMode::Hid, &state, &caps)));
        assert!(history.changed(&encode(InputMode::Switch, &state, &caps)));
    }
}
