//! The per-cycle gamepad pipeline

use crate::{Clock, InputDevice, PadSettings, SettingsResult};
use openpad_input::{
    Debouncer, Hotkey, HotkeyEngine, SocdCleaner, apply_axis_inversion, apply_dpad_mode,
};
use openpad_options::{
    CommitOutcome, Configuration, InputMode, OptionsBackend, OptionsStore, StorageResult,
};
use openpad_reports::{Report, encode};
use openpad_state::{Button, Capabilities, GamepadState};
use tracing::{debug, info, warn};

/// Result of one [`Gamepad::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    /// Report for the current input mode, ready for the transport.
    pub report: Report,
    /// Hotkey recognized in this cycle, [`Hotkey::None`] most of the time.
    pub hotkey: Hotkey,
    /// The fully processed state the report was encoded from.
    pub state: GamepadState,
}

/// Boot-time input mode selection: holding one of these buttons while the
/// board powers up switches the host protocol.
const BOOT_INPUT_MODES: [(Button, InputMode); 3] = [
    (Button::B1, InputMode::Switch),
    (Button::B2, InputMode::XInput),
    (Button::B3, InputMode::Hid),
];

/// A gamepad: input device, clock and options storage wired through the
/// processing stages.
///
/// Each [`poll`](Gamepad::poll) runs, in order:
///
/// ```text
/// read → debounce → SOCD → hotkeys (+ commit) → D-pad mode → inversion → encode
/// ```
///
/// Hotkeys run before D-pad emulation so that chords are recognized on the
/// raw directions even while the D-pad is driving a stick.
#[derive(Debug)]
pub struct Gamepad<D, C, B>
where
    D: InputDevice,
    C: Clock,
    B: OptionsBackend,
{
    device: D,
    clock: C,
    store: OptionsStore<B>,
    settings: PadSettings,
    config: Configuration,
    capabilities: Capabilities,
    debouncer: Debouncer,
    socd: SocdCleaner,
    hotkeys: HotkeyEngine,
}

impl<D, C, B> Gamepad<D, C, B>
where
    D: InputDevice,
    C: Clock,
    B: OptionsBackend,
{
    /// Builds a gamepad. Nothing is read from the device or storage until
    /// [`setup`](Gamepad::setup); until then the settings defaults are active.
    ///
    /// # Errors
    ///
    /// Returns any error from [`PadSettings::validate`].
    pub fn new(device: D, clock: C, backend: B, settings: PadSettings) -> SettingsResult<Self> {
        settings.validate()?;
        let capabilities = device.capabilities();

        Ok(Self {
            store: OptionsStore::with_defaults(backend, settings.defaults),
            config: settings.defaults,
            debouncer: Debouncer::new(settings.debounce_ms),
            socd: SocdCleaner::new(),
            hotkeys: HotkeyEngine::new(settings.f1_mask(), settings.f2_mask()),
            device,
            clock,
            settings,
            capabilities,
        })
    }

    /// Initializes the device and loads the stored options.
    pub fn setup(&mut self) -> Configuration {
        self.device.setup();
        self.capabilities = self.device.capabilities();
        self.config = self.store.load();
        info!(
            "Gamepad ready: input_mode={:?}, dpad_mode={:?}, socd_mode={:?}",
            self.config.input_mode, self.config.dpad_mode, self.config.socd_mode
        );
        self.config
    }

    /// Applies boot-time input mode selection from the buttons held right
    /// now: B1 selects Switch, B2 XInput and B3 HID, checked in that order.
    /// A changed mode is persisted.
    ///
    /// Returns the input mode in effect afterwards.
    pub fn select_boot_input_mode(&mut self) -> InputMode {
        let state = self.device.read_raw_state().sanitized();
        let selected = BOOT_INPUT_MODES
            .iter()
            .find(|(button, _)| state.pressed(*button))
            .map(|(_, mode)| *mode);

        if let Some(mode) = selected {
            if mode != self.config.input_mode {
                info!("Boot input mode selected: {:?}", mode);
                self.config.input_mode = mode;
                self.persist();
            }
        }
        self.config.input_mode
    }

    /// Runs one input cycle and returns the report to send.
    ///
    /// Never fails. A storage error while saving a hotkey change is logged
    /// and the change stays active in memory; the next configuration change
    /// retries the write.
    pub fn poll(&mut self) -> Cycle {
        let mut state = self.device.read_raw_state().sanitized();
        self.debouncer.debounce(&mut state, self.clock.now_ms());
        state.buttons = self.socd.resolve(self.config.socd_mode, state.buttons);

        let hotkey = self.hotkeys.evaluate(&mut state, &mut self.config);
        if hotkey.changes_configuration() {
            self.persist();
        }

        apply_dpad_mode(&mut state, self.config.dpad_mode, &self.capabilities);
        apply_axis_inversion(&mut state, &self.config);

        Cycle {
            report: encode(self.config.input_mode, &state, &self.capabilities),
            hotkey,
            state,
        }
    }

    /// Replaces the live configuration and persists it.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the commit fails. The new configuration
    /// is active either way.
    pub fn set_configuration(&mut self, config: Configuration) -> StorageResult<CommitOutcome> {
        self.config = config;
        self.store.commit(&self.config)
    }

    /// The live configuration.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn settings(&self) -> &PadSettings {
        &self.settings
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn store(&self) -> &OptionsStore<B> {
        &self.store
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn persist(&mut self) {
        match self.store.commit(&self.config) {
            Ok(outcome) if !outcome.is_noop() => {
                debug!(
                    fields = outcome.fields_written,
                    flushed = outcome.flushed,
                    "Persisted options"
                );
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Failed to persist options"),
        }
    }
}
