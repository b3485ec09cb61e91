//! End-to-end tests for the gamepad pipeline.

use openpad_options::{Configuration, DpadMode, InputMode, SocdMode, StorageError};
use openpad_pipeline::prelude::*;
use openpad_reports::report_size;
use openpad_state::{Button, Capabilities, GamepadState, JOYSTICK_MAX, JOYSTICK_MID};
use openpad_test_helpers::prelude::*;

type TestPad = Gamepad<ScriptedDevice, ManualClock, FailingBackend>;

struct Rig {
    pad: TestPad,
    device: ScriptedDevice,
    clock: ManualClock,
    storage: FailingBackend,
}

fn rig_with(settings: PadSettings, storage: FailingBackend) -> Rig {
    let device = ScriptedDevice::digital();
    let clock = ManualClock::new();
    let mut pad = must(Gamepad::new(
        device.clone(),
        clock.clone(),
        storage.clone(),
        settings,
    ));
    pad.setup();
    Rig {
        pad,
        device,
        clock,
        storage,
    }
}

fn undebounced(defaults: Configuration) -> PadSettings {
    PadSettings {
        debounce_ms: 0,
        defaults,
        ..PadSettings::default()
    }
}

#[test]
fn test_setup_runs_device_setup_once() {
    let rig = rig_with(PadSettings::default(), FailingBackend::healthy());
    assert_eq!(rig.device.setup_calls(), 1);
    assert_eq!(rig.device.reads(), 0);
}

#[test]
fn test_hid_hotkey_switches_to_left_analog() {
    let defaults = Configuration::default().with_input_mode(InputMode::Hid);
    let mut rig = rig_with(undebounced(defaults), FailingBackend::healthy());

    rig.device.hold(&[Button::S1, Button::S2, Button::Left]);
    let cycle = rig.pad.poll();
    assert_eq!(cycle.hotkey, Hotkey::DpadLeftAnalog);
    assert_pressed!(cycle.state, []);
    assert_report_bytes!(cycle.report, [0x00, 0x00, 0x08, 0x80, 0x80, 0x80, 0x80]);
    assert_eq!(rig.pad.configuration().dpad_mode, DpadMode::LeftAnalog);

    // Erased medium: every field is written once, then one flush.
    assert_eq!(rig.storage.bytes(), vec![2, 1, 1, 0, 0]);
    assert_eq!(rig.storage.write_count(), 5);
    assert_eq!(rig.storage.flush_count(), 1);

    // Holding the chord keeps reporting it without touching storage.
    let cycle = rig.pad.poll();
    assert_eq!(cycle.hotkey, Hotkey::DpadLeftAnalog);
    assert_eq!(rig.storage.write_count(), 5);
    assert_eq!(rig.storage.flush_count(), 1);

    // The D-pad now drives the left stick.
    rig.device.hold(&[Button::Right, Button::B1]);
    let cycle = rig.pad.poll();
    assert_eq!(cycle.hotkey, Hotkey::None);
    assert_pressed!(cycle.state, [Button::B1]);
    assert_eq!((cycle.state.lx, cycle.state.ly), (JOYSTICK_MAX, JOYSTICK_MID));
    assert_report_bytes!(cycle.report, [0x02, 0x00, 0x08, 0xFF, 0x80, 0x80, 0x80]);
}

#[test]
fn test_chord_recognized_while_dpad_drives_stick() {
    let defaults = Configuration::default().with_dpad_mode(DpadMode::LeftAnalog);
    let mut rig = rig_with(undebounced(defaults), FailingBackend::healthy());

    rig.device.hold(&[Button::S1, Button::S2, Button::Down]);
    let cycle = rig.pad.poll();
    assert_eq!(cycle.hotkey, Hotkey::DpadDigital);
    assert_eq!(rig.pad.configuration().dpad_mode, DpadMode::Digital);
    // The selecting direction never reaches the stick.
    assert_eq!(cycle.state.ly, JOYSTICK_MID);
}

#[test]
fn test_home_hotkey_presses_a1_without_saving() {
    let mut rig = rig_with(undebounced(Configuration::default()), FailingBackend::healthy());
    rig.device.hold(&[Button::S1, Button::S2, Button::Up]);
    let cycle = rig.pad.poll();
    assert_eq!(cycle.hotkey, Hotkey::HomeButton);
    assert_pressed!(cycle.state, [Button::A1]);
    assert_eq!(rig.storage.write_count(), 0);
}

#[test]
fn test_socd_hotkey_takes_effect_next_cycle() {
    let mut rig = rig_with(undebounced(Configuration::default()), FailingBackend::healthy());

    rig.device.hold(&[Button::Up, Button::Down]);
    assert_pressed!(rig.pad.poll().state, []);

    rig.device.hold(&[Button::L3, Button::R3, Button::Up]);
    assert_eq!(rig.pad.poll().hotkey, Hotkey::SocdUpPriority);
    assert_eq!(rig.pad.configuration().socd_mode, SocdMode::UpPriority);

    rig.device.hold(&[Button::Up, Button::Down]);
    assert_pressed!(rig.pad.poll().state, [Button::Up]);
}

#[test]
fn test_invert_y_toggles_once_per_hold() {
    let mut rig = rig_with(undebounced(Configuration::default()), FailingBackend::healthy());
    let chord = [Button::L3, Button::R3, Button::Right];

    rig.device.hold(&chord);
    for _ in 0..4 {
        assert_eq!(rig.pad.poll().hotkey, Hotkey::InvertYAxis);
        assert!(rig.pad.configuration().invert_y_axis);
    }
    let invert_y = must_some(rig.storage.bytes().get(4).copied(), "invert Y byte");
    assert_eq!(invert_y, 1);
    assert_eq!(rig.storage.flush_count(), 1);

    rig.device.release_all();
    rig.pad.poll();
    rig.device.hold(&chord);
    rig.pad.poll();
    assert!(!rig.pad.configuration().invert_y_axis);
    assert_eq!(rig.storage.bytes().get(4), Some(&0));
    assert_eq!(rig.storage.flush_count(), 2);
}

#[test]
fn test_inverted_emulated_stick() {
    let defaults = Configuration::default()
        .with_dpad_mode(DpadMode::RightAnalog)
        .with_inversion(true, true);
    let mut rig = rig_with(undebounced(defaults), FailingBackend::healthy());
    rig.device.hold(&[Button::Down, Button::Left]);
    let state = rig.pad.poll().state;
    assert_eq!((state.rx, state.ry), (JOYSTICK_MAX, 0));
    assert_eq!((state.lx, state.ly), (JOYSTICK_MID, JOYSTICK_MID));
}

#[test]
fn test_debounce_uses_clock() {
    let mut rig = rig_with(PadSettings::default(), FailingBackend::healthy());
    rig.device.hold(&[Button::B1]);

    assert!(!rig.pad.poll().state.pressed(Button::B1));
    rig.clock.advance(4);
    assert!(!rig.pad.poll().state.pressed(Button::B1));
    rig.clock.advance(1);
    let cycle = rig.pad.poll();
    assert!(cycle.state.pressed(Button::B1));
    // XInput A
    assert_eq!(cycle.report.to_vec().get(3), Some(&0x10));
}

#[test]
fn test_boot_selection_persists_switch_mode() {
    let mut rig = rig_with(PadSettings::default(), FailingBackend::healthy());
    rig.device.hold(&[Button::B1]);
    assert_eq!(rig.pad.select_boot_input_mode(), InputMode::Switch);
    assert_eq!(rig.storage.bytes().first(), Some(&1));
    assert_eq!(rig.storage.flush_count(), 1);

    rig.device.release_all();
    let report = rig.pad.poll().report;
    assert_eq!(report.input_mode(), InputMode::Switch);
    assert_eq!(report.size(), report_size(InputMode::Switch));
}

#[test]
fn test_boot_selection_without_buttons_keeps_mode() {
    let mut rig = rig_with(PadSettings::default(), FailingBackend::healthy());
    assert_eq!(rig.pad.select_boot_input_mode(), InputMode::XInput);
    assert_eq!(rig.storage.write_count(), 0);
}

#[test]
fn test_stored_options_are_loaded() {
    let storage = FailingBackend::from_bytes(vec![2, 1, 2, 0, 1]);
    let rig = rig_with(PadSettings::default(), storage);
    let expected = Configuration::default()
        .with_input_mode(InputMode::Hid)
        .with_dpad_mode(DpadMode::LeftAnalog)
        .with_socd_mode(SocdMode::LastInputPriority)
        .with_inversion(false, true);
    assert_eq!(rig.pad.configuration(), &expected);
}

#[test]
fn test_invalid_stored_values_use_settings_defaults() {
    let storage = FailingBackend::from_bytes(vec![9, 0xFF, 0, 7, 1]);
    let defaults = Configuration::default().with_input_mode(InputMode::Switch);
    let settings = PadSettings {
        defaults,
        ..PadSettings::default()
    };
    let rig = rig_with(settings, storage);
    let config = rig.pad.configuration();
    assert_eq!(config.input_mode, InputMode::Switch);
    assert_eq!(config.dpad_mode, DpadMode::Digital);
    assert_eq!(config.socd_mode, SocdMode::UpPriority);
    assert!(!config.invert_x_axis);
    assert!(config.invert_y_axis);
}

#[test]
fn test_read_failure_falls_back_to_defaults() {
    let storage = FailingBackend::from_bytes(vec![2, 1, 2, 0, 1]);
    storage.fail_reads(true);
    let rig = rig_with(PadSettings::default(), storage);
    assert_eq!(rig.pad.configuration(), &Configuration::default());
}

#[test]
fn test_storage_failure_is_dropped_and_retried() {
    let mut rig = rig_with(undebounced(Configuration::default()), FailingBackend::healthy());
    rig.storage.fail_writes(true);

    rig.device.hold(&[Button::S1, Button::S2, Button::Right]);
    let cycle = rig.pad.poll();
    assert_eq!(cycle.hotkey, Hotkey::DpadRightAnalog);
    assert_eq!(rig.pad.configuration().dpad_mode, DpadMode::RightAnalog);
    assert_eq!(rig.storage.write_count(), 0);

    rig.storage.fail_writes(false);
    rig.pad.poll();
    assert_eq!(rig.storage.bytes().get(1), Some(&2));
    assert_eq!(rig.storage.flush_count(), 1);
}

#[test]
fn test_set_configuration_reports_storage_errors() {
    let mut rig = rig_with(PadSettings::default(), FailingBackend::healthy());
    let config = Configuration::default().with_socd_mode(SocdMode::LastInputPriority);

    rig.storage.fail_flushes(true);
    assert!(matches!(
        rig.pad.set_configuration(config),
        Err(StorageError::FlushFailed(_))
    ));
    assert_eq!(rig.pad.configuration(), &config);

    rig.storage.fail_flushes(false);
    let outcome = must(rig.pad.set_configuration(config));
    assert_eq!(outcome.fields_written, 0);
    assert!(outcome.flushed);
}

#[test]
fn test_invalid_settings_rejected() {
    let settings = PadSettings {
        f1_chord: vec![Button::Up],
        ..PadSettings::default()
    };
    let error = must_err(Gamepad::new(
        ScriptedDevice::digital(),
        ManualClock::new(),
        FailingBackend::healthy(),
        settings,
    ));
    assert_eq!(
        error,
        SettingsError::DpadInChord {
            chord: "f1",
            button: Button::Up
        }
    );
}

#[test]
fn test_sticks_pass_through_on_full_board() {
    let device = ScriptedDevice::new(Capabilities::full());
    let mut pad = must(Gamepad::new(
        device.clone(),
        ManualClock::new(),
        FailingBackend::healthy(),
        undebounced(Configuration::default()),
    ));
    pad.setup();

    device.hold_state(GamepadState {
        lx: 0x1000,
        ry: 0xF000,
        lt: 0x33,
        ..GamepadState::default()
    });
    let cycle = pad.poll();
    assert_eq!((cycle.state.lx, cycle.state.ry), (0x1000, 0xF000));
    // Analog trigger forwarded by XInput.
    assert_eq!(cycle.report.to_vec().get(4), Some(&0x33));
}
