//! Physical features a board may or may not have

use serde::{Deserialize, Serialize};

/// What the board physically provides. Absent sticks are always reported
/// centered; absent analog triggers are synthesized from L2/R2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    pub has_analog_triggers: bool,
    pub has_left_stick: bool,
    pub has_right_stick: bool,
}

impl Capabilities {
    /// All-digital board such as an arcade stick or hitbox.
    pub fn digital() -> Self {
        Self::default()
    }

    pub fn full() -> Self {
        Self {
            has_analog_triggers: true,
            has_left_stick: true,
            has_right_stick: true,
        }
    }
}
