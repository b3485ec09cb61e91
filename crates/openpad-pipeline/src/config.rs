//! Build-time pad settings
//!
//! Settings a board integrator chooses once: debounce window, hotkey chords
//! and the defaults used when the stored options are missing or invalid.
//! They are plain data, loadable from JSON, and validated before use.

use crate::{SettingsError, SettingsResult};
use openpad_input::DEFAULT_DEBOUNCE_MS;
use openpad_options::Configuration;
use openpad_state::Button;
use serde::{Deserialize, Serialize};

/// Pad settings.
///
/// Every field has a default, so a partial JSON document only overrides what
/// it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadSettings {
    /// Debounce window in milliseconds, 0 to disable.
    pub debounce_ms: u32,
    /// Buttons forming the F1 chord (D-pad and home hotkeys).
    pub f1_chord: Vec<Button>,
    /// Buttons forming the F2 chord (SOCD and inversion hotkeys).
    pub f2_chord: Vec<Button>,
    /// Options used for fields that are missing or invalid in storage.
    pub defaults: Configuration,
}

impl Default for PadSettings {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            f1_chord: vec![Button::S1, Button::S2],
            f2_chord: vec![Button::L3, Button::R3],
            defaults: Configuration::default(),
        }
    }
}

impl PadSettings {
    /// Parses and validates settings from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Json`] for malformed JSON and any error from
    /// [`PadSettings::validate`].
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let settings: PadSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serializes the settings as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Json`] if serialization fails.
    pub fn to_json(&self) -> SettingsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that the hotkey chords can be recognized.
    ///
    /// # Errors
    ///
    /// - [`SettingsError::EmptyChord`] if a chord has no buttons
    /// - [`SettingsError::DpadInChord`] if a chord uses a D-pad direction,
    ///   which would collide with hotkey direction selection
    /// - [`SettingsError::OverlappingChords`] if both chords share a button
    pub fn validate(&self) -> SettingsResult<()> {
        for (name, chord) in [("f1", &self.f1_chord), ("f2", &self.f2_chord)] {
            if chord.is_empty() {
                return Err(SettingsError::EmptyChord(name));
            }
            if let Some(button) = chord.iter().copied().find(|b| b.is_dpad()) {
                return Err(SettingsError::DpadInChord { chord: name, button });
            }
        }

        let shared = self.f1_mask() & self.f2_mask();
        if shared != 0 {
            let buttons: Vec<Button> = Button::pressed_in(shared).collect();
            return Err(SettingsError::OverlappingChords(buttons));
        }
        Ok(())
    }

    pub fn f1_mask(&self) -> u32 {
        Button::mask_of(&self.f1_chord)
    }

    pub fn f2_mask(&self) -> u32 {
        Button::mask_of(&self.f2_chord)
    }
}
