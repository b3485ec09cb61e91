//! Button-chord hotkeys
//!
//! Holding every button of a function chord together with exactly one D-pad
//! direction triggers an action. Most actions rewrite the live
//! [`Configuration`]; the caller decides whether to persist it using
//! [`Hotkey::changes_configuration`].
//!
//! | chord | Up | Down | Left | Right |
//! |---|---|---|---|---|
//! | F1 (default S1+S2) | Home button | D-pad digital | D-pad as left stick | D-pad as right stick |
//! | F2 (default L3+R3) | SOCD up priority | SOCD neutral | SOCD last input | toggle Y inversion |

use openpad_options::{Configuration, DpadMode, SocdMode};
use openpad_state::{
    Button, GamepadState, MASK_DOWN, MASK_L3, MASK_LEFT, MASK_R3, MASK_RIGHT, MASK_S1, MASK_S2,
    MASK_UP,
};
use tracing::info;

/// Default F1 chord: both system buttons.
pub const DEFAULT_F1_CHORD: u32 = MASK_S1 | MASK_S2;
/// Default F2 chord: both stick clicks.
pub const DEFAULT_F2_CHORD: u32 = MASK_L3 | MASK_R3;

/// Action recognized in one poll cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Hotkey {
    #[default]
    None,
    DpadDigital,
    DpadLeftAnalog,
    DpadRightAnalog,
    /// Presses A1 for this cycle only.
    HomeButton,
    SocdUpPriority,
    SocdNeutral,
    SocdLastInput,
    InvertYAxis,
}

impl Hotkey {
    pub fn is_none(self) -> bool {
        self == Hotkey::None
    }

    /// Whether the action writes to the configuration and should be committed.
    pub fn changes_configuration(self) -> bool {
        !matches!(self, Hotkey::None | Hotkey::HomeButton)
    }

    fn from_f1(dpad: u32) -> Self {
        match dpad {
            MASK_UP => Hotkey::HomeButton,
            MASK_DOWN => Hotkey::DpadDigital,
            MASK_LEFT => Hotkey::DpadLeftAnalog,
            MASK_RIGHT => Hotkey::DpadRightAnalog,
            _ => Hotkey::None,
        }
    }

    fn from_f2(dpad: u32) -> Self {
        match dpad {
            MASK_UP => Hotkey::SocdUpPriority,
            MASK_DOWN => Hotkey::SocdNeutral,
            MASK_LEFT => Hotkey::SocdLastInput,
            MASK_RIGHT => Hotkey::InvertYAxis,
            _ => Hotkey::None,
        }
    }
}

/// Recognizes hotkey chords and applies their effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotkeyEngine {
    f1: u32,
    f2: u32,
    last: Hotkey,
}

impl HotkeyEngine {
    /// Creates an engine for the given chord masks. Chords are expected to be
    /// non-empty and free of D-pad bits.
    pub fn new(f1: u32, f2: u32) -> Self {
        Self {
            f1,
            f2,
            last: Hotkey::None,
        }
    }

    pub fn f1_chord(&self) -> u32 {
        self.f1
    }

    pub fn f2_chord(&self) -> u32 {
        self.f2
    }

    /// Action reported by the previous call.
    pub fn last(&self) -> Hotkey {
        self.last
    }

    /// Checks `state` for a hotkey and applies it.
    ///
    /// On recognition the D-pad bits and the chord's bits are removed from
    /// `state` so the host never sees them. A held chord is reported on every
    /// cycle; setting a mode again is a no-op and the Y inversion toggle only
    /// flips on the first cycle of a hold.
    pub fn evaluate(&mut self, state: &mut GamepadState, config: &mut Configuration) -> Hotkey {
        let dpad = state.dpad();
        let (action, chord) = if state.pressed_all(self.f1) {
            (Hotkey::from_f1(dpad), self.f1)
        } else if state.pressed_all(self.f2) {
            (Hotkey::from_f2(dpad), self.f2)
        } else {
            (Hotkey::None, 0)
        };

        if !action.is_none() {
            state.clear_dpad();
            state.buttons &= !chord;
            self.apply(action, state, config);
        }

        self.last = action;
        action
    }

    fn apply(&self, action: Hotkey, state: &mut GamepadState, config: &mut Configuration) {
        let before = *config;
        match action {
            Hotkey::None => {}
            Hotkey::HomeButton => state.press(Button::A1),
            Hotkey::DpadDigital => config.dpad_mode = DpadMode::Digital,
            Hotkey::DpadLeftAnalog => config.dpad_mode = DpadMode::LeftAnalog,
            Hotkey::DpadRightAnalog => config.dpad_mode = DpadMode::RightAnalog,
            Hotkey::SocdUpPriority => config.socd_mode = SocdMode::UpPriority,
            Hotkey::SocdNeutral => config.socd_mode = SocdMode::Neutral,
            Hotkey::SocdLastInput => config.socd_mode = SocdMode::LastInputPriority,
            Hotkey::InvertYAxis => {
                if self.last != Hotkey::InvertYAxis {
                    config.invert_y_axis = !config.invert_y_axis;
                }
            }
        }

        if *config != before {
            info!(
                "Hotkey {:?} applied: dpad_mode={:?}, socd_mode={:?}, invert_y_axis={}",
                action, config.dpad_mode, config.socd_mode, config.invert_y_axis
            );
        }
    }
}

impl Default for HotkeyEngine {
    fn default() -> Self {
        Self::new(DEFAULT_F1_CHORD, DEFAULT_F2_CHORD)
    }
}
