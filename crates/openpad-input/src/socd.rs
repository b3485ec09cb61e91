//! Simultaneous Opposing Cardinal Direction (SOCD) cleaning
//!
//! Resolves Up+Down and Left+Right on the D-pad according to a [`SocdMode`].
//! Only the four D-pad bits are ever touched.

use openpad_options::SocdMode;
use openpad_state::{MASK_DOWN, MASK_DPAD, MASK_LEFT, MASK_RIGHT, MASK_UP};

/// Press history for one pair of opposite directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AxisHistory {
    negative: u32,
    positive: u32,
    previous: u32,
    winner: u32,
}

impl AxisHistory {
    const fn new(negative: u32, positive: u32) -> Self {
        Self {
            negative,
            positive,
            previous: 0,
            winner: 0,
        }
    }

    const fn mask(&self) -> u32 {
        self.negative | self.positive
    }

    /// Records this poll's bits and returns the last-input-priority result.
    fn track(&mut self, buttons: u32) -> u32 {
        let both = self.mask();
        let current = buttons & both;

        if current == both {
            if self.previous == self.negative {
                self.winner = self.positive;
            } else if self.previous == self.positive {
                self.winner = self.negative;
            } else if self.previous != both {
                // Both arrived in the same poll.
                self.winner = 0;
            }
        } else {
            self.winner = 0;
        }
        self.previous = current;

        if current == both { self.winner } else { current }
    }

    fn reset(&mut self) {
        self.previous = 0;
        self.winner = 0;
    }
}

/// Drops both directions of any opposing pair in `buttons` restricted to `axis`.
fn neutral(buttons: u32, axis: u32) -> u32 {
    let current = buttons & axis;
    if current == axis { 0 } else { current }
}

/// Stateful SOCD resolver.
///
/// History is recorded on every call regardless of mode, so switching to
/// [`SocdMode::LastInputPriority`] while directions are held behaves as if it
/// had been active all along.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocdCleaner {
    vertical: AxisHistory,
    horizontal: AxisHistory,
}

impl SocdCleaner {
    pub fn new() -> Self {
        Self {
            vertical: AxisHistory::new(MASK_UP, MASK_DOWN),
            horizontal: AxisHistory::new(MASK_LEFT, MASK_RIGHT),
        }
    }

    /// Resolves opposing directions in `buttons` and returns the cleaned bits.
    pub fn resolve(&mut self, mode: SocdMode, buttons: u32) -> u32 {
        let last_vertical = self.vertical.track(buttons);
        let last_horizontal = self.horizontal.track(buttons);
        let vertical_axis = MASK_UP | MASK_DOWN;
        let horizontal_axis = MASK_LEFT | MASK_RIGHT;

        let dpad = match mode {
            SocdMode::UpPriority => {
                let vertical = if buttons & vertical_axis == vertical_axis {
                    MASK_UP
                } else {
                    buttons & vertical_axis
                };
                vertical | neutral(buttons, horizontal_axis)
            }
            SocdMode::Neutral => {
                neutral(buttons, vertical_axis) | neutral(buttons, horizontal_axis)
            }
            SocdMode::LastInputPriority => last_vertical | last_horizontal,
        };

        (buttons & !MASK_DPAD) | dpad
    }

    /// Forgets all press history.
    pub fn reset(&mut self) {
        self.vertical.reset();
        self.horizontal.reset();
    }
}

impl Default for SocdCleaner {
    fn default() -> Self {
        Self::new()
    }
}
