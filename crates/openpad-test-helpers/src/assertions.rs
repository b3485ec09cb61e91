//! Assertion macros for gamepad state.

use openpad_state::Button;

/// Names of the buttons set in `bits`, for assertion messages.
pub fn pressed_names(bits: u32) -> Vec<Button> {
    Button::pressed_in(bits).collect()
}

/// Assert that exactly the listed buttons are held in a `GamepadState`.
///
/// ```rust
/// use openpad_state::{Button, GamepadState};
/// use openpad_test_helpers::assert_pressed;
///
/// let state = GamepadState::with_buttons(&[Button::B1, Button::Up]);
/// assert_pressed!(state, [Button::Up, Button::B1]);
/// assert_pressed!(GamepadState::default(), []);
/// ```
#[macro_export]
macro_rules! assert_pressed {
    ($state:expr, [$($button:expr),* $(,)?] $(,)?) => {{
        let actual: u32 = $state.buttons;
        let expected: u32 = ::openpad_state::Button::mask_of(&[$($button),*]);
        if actual != expected {
            panic!(
                "assertion failed: pressed buttons differ\n  expected: {:?}\n    actual: {:?}",
                $crate::assertions::pressed_names(expected),
                $crate::assertions::pressed_names(actual),
            );
        }
    }};
}

/// Assert that a report's wire bytes equal the given bytes.
///
/// ```rust
/// use openpad_options::InputMode;
/// use openpad_reports::encode;
/// use openpad_state::{Capabilities, GamepadState};
/// use openpad_test_helpers::assert_report_bytes;
///
/// let report = encode(InputMode::Hid, &GamepadState::default(), &Capabilities::digital());
/// assert_report_bytes!(report, [0x00, 0x00, 0x08, 0x80, 0x80, 0x80, 0x80]);
/// ```
#[macro_export]
macro_rules! assert_report_bytes {
    ($report:expr, [$($byte:expr),* $(,)?] $(,)?) => {{
        let actual: Vec<u8> = $report.to_vec();
        let expected: Vec<u8> = vec![$($byte),*];
        if actual != expected {
            panic!(
                "assertion failed: report bytes differ\n  expected: {:02x?}\n    actual: {:02x?}",
                expected, actual,
            );
        }
    }};
}
