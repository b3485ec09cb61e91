//! Property tests for the input stages.

use openpad_input::{Debouncer, Hotkey, HotkeyEngine, SocdCleaner, apply_dpad_mode};
use openpad_options::{Configuration, DpadMode, SocdMode};
use openpad_state::{
    Capabilities, GamepadState, MASK_ALL_INPUTS, MASK_DOWN, MASK_DPAD, MASK_LEFT, MASK_RIGHT,
    MASK_UP,
};
use proptest::prelude::*;

fn socd_mode() -> impl Strategy<Value = SocdMode> {
    prop::sample::select(SocdMode::ALL.to_vec())
}

fn dpad_mode() -> impl Strategy<Value = DpadMode> {
    prop::sample::select(DpadMode::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_socd_never_emits_opposites(
        polls in prop::collection::vec((socd_mode(), 0u32..=MASK_ALL_INPUTS), 1..64),
    ) {
        let mut socd = SocdCleaner::new();
        for (mode, buttons) in polls {
            let out = socd.resolve(mode, buttons);
            prop_assert_ne!(out & (MASK_UP | MASK_DOWN), MASK_UP | MASK_DOWN);
            prop_assert_ne!(out & (MASK_LEFT | MASK_RIGHT), MASK_LEFT | MASK_RIGHT);
            prop_assert_eq!(out & !MASK_DPAD, buttons & !MASK_DPAD);
            // Only ever removes directions.
            prop_assert_eq!(out & MASK_DPAD & !buttons, 0);
        }
    }

    #[test]
    fn prop_socd_repeat_poll_is_stable(
        mode in socd_mode(),
        history in prop::collection::vec(0u32..16, 0..16),
        buttons in 0u32..16,
    ) {
        let mut socd = SocdCleaner::new();
        for bits in history {
            socd.resolve(mode, bits);
        }
        let first = socd.resolve(mode, buttons);
        let second = socd.resolve(mode, buttons);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_short_bounces_never_change_stable(
        window in 2u32..50,
        stable in 0u32..=MASK_ALL_INPUTS,
        noise in prop::collection::vec(0u32..=MASK_ALL_INPUTS, 1..32),
    ) {
        let mut debouncer = Debouncer::new(window);
        debouncer.reset(stable);
        // Each glitch lasts one millisecond and is followed by a clean sample.
        let mut now = 1_000u32;
        for glitch in noise {
            prop_assert_eq!(debouncer.debounce_bits(glitch, now), stable);
            now = now.wrapping_add(1);
            prop_assert_eq!(debouncer.debounce_bits(stable, now), stable);
            now = now.wrapping_add(1);
        }
    }

    #[test]
    fn prop_held_input_accepted_exactly_at_window(
        window in 1u32..100,
        start in any::<u32>(),
        raw in 0u32..=MASK_ALL_INPUTS,
    ) {
        let mut debouncer = Debouncer::new(window);
        for offset in 0..window {
            prop_assert_eq!(debouncer.debounce_bits(raw, start.wrapping_add(offset)), 0);
        }
        prop_assert_eq!(debouncer.debounce_bits(raw, start.wrapping_add(window)), raw);
    }

    #[test]
    fn prop_fired_hotkey_consumes_chord_and_dpad(buttons in 0u32..=MASK_ALL_INPUTS) {
        let mut engine = HotkeyEngine::default();
        let mut config = Configuration::default();
        let mut state = GamepadState { buttons, ..GamepadState::default() };
        let action = engine.evaluate(&mut state, &mut config);
        if action.is_none() {
            prop_assert_eq!(state.buttons, buttons);
        } else {
            prop_assert_eq!(state.dpad(), 0);
            let consumed = if buttons & engine.f1_chord() == engine.f1_chord() {
                engine.f1_chord()
            } else {
                engine.f2_chord()
            };
            let mut remaining = state.buttons;
            if action == Hotkey::HomeButton {
                remaining &= !openpad_state::MASK_A1;
            }
            prop_assert_eq!(remaining & consumed, 0);
        }
    }

    #[test]
    fn prop_analog_modes_clear_dpad(
        mode in dpad_mode(),
        buttons in 0u32..=MASK_ALL_INPUTS,
    ) {
        let mut state = GamepadState { buttons, ..GamepadState::default() };
        apply_dpad_mode(&mut state, mode, &Capabilities::digital());
        match mode {
            DpadMode::Digital => {
                prop_assert_eq!(state.buttons, buttons);
            }
            DpadMode::LeftAnalog | DpadMode::RightAnalog => {
                prop_assert_eq!(state.buttons, buttons & !MASK_DPAD);
            }
        }
    }
}
