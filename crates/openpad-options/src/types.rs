//! Configuration types

use serde::{Deserialize, Serialize};

/// Host protocol, selects the report encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InputMode {
    #[default]
    XInput,
    Switch,
    Hid,
}

/// What the D-pad drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DpadMode {
    #[default]
    Digital,
    LeftAnalog,
    RightAnalog,
}

/// Simultaneous opposite cardinal direction cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SocdMode {
    /// U+D = U, L+R = neutral
    UpPriority,
    /// U+D = neutral, L+R = neutral
    #[default]
    Neutral,
    /// Most recently pressed direction wins, per axis
    LastInputPriority,
}

macro_rules! raw_enum {
    ($ty:ident { $($variant:ident = $raw:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub const fn as_raw(self) -> u8 {
                match self {
                    $($ty::$variant => $raw),+
                }
            }

            pub const fn from_raw(raw: u8) -> Option<Self> {
                match raw {
                    $($raw => Some($ty::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

raw_enum!(InputMode {
    XInput = 0,
    Switch = 1,
    Hid = 2,
});

raw_enum!(DpadMode {
    Digital = 0,
    LeftAnalog = 1,
    RightAnalog = 2,
});

raw_enum!(SocdMode {
    UpPriority = 0,
    Neutral = 1,
    LastInputPriority = 2,
});

/// Runtime-mutable, persisted gamepad options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub input_mode: InputMode,
    pub dpad_mode: DpadMode,
    pub socd_mode: SocdMode,
    pub invert_x_axis: bool,
    pub invert_y_axis: bool,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_mode(mut self, mode: InputMode) -> Self {
        self.input_mode = mode;
        self
    }

    pub fn with_dpad_mode(mut self, mode: DpadMode) -> Self {
        self.dpad_mode = mode;
        self
    }

    pub fn with_socd_mode(mut self, mode: SocdMode) -> Self {
        self.socd_mode = mode;
        self
    }

    pub fn with_inversion(mut self, invert_x: bool, invert_y: bool) -> Self {
        self.invert_x_axis = invert_x;
        self.invert_y_axis = invert_y;
        self
    }
}
