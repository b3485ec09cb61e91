//! Named digital inputs and their bit masks

use serde::{Deserialize, Serialize};

pub const MASK_UP: u32 = 1 << 0;
pub const MASK_DOWN: u32 = 1 << 1;
pub const MASK_LEFT: u32 = 1 << 2;
pub const MASK_RIGHT: u32 = 1 << 3;
pub const MASK_DPAD: u32 = MASK_UP | MASK_DOWN | MASK_LEFT | MASK_RIGHT;

// Face buttons. Generic: K1 K2 P1 P2, Switch: B A Y X, Xbox: A B X Y
pub const MASK_B1: u32 = 1 << 4;
pub const MASK_B2: u32 = 1 << 5;
pub const MASK_B3: u32 = 1 << 6;
pub const MASK_B4: u32 = 1 << 7;
pub const MASK_L1: u32 = 1 << 8;
pub const MASK_R1: u32 = 1 << 9;
pub const MASK_L2: u32 = 1 << 10;
pub const MASK_R2: u32 = 1 << 11;
pub const MASK_S1: u32 = 1 << 12;
pub const MASK_S2: u32 = 1 << 13;
pub const MASK_L3: u32 = 1 << 14;
pub const MASK_R3: u32 = 1 << 15;
pub const MASK_A1: u32 = 1 << 16;
pub const MASK_A2: u32 = 1 << 17;

/// Every bit that carries a named input.
pub const MASK_ALL_INPUTS: u32 = (1 << 18) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    B1,
    B2,
    B3,
    B4,
    L1,
    R1,
    L2,
    R2,
    /// Select / Minus / Back
    S1,
    /// Start / Plus / Menu
    S2,
    L3,
    R3,
    /// Home / Guide / PS
    A1,
    /// Capture / Touchpad
    A2,
}

impl Button {
    pub const ALL: [Button; 18] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::B1,
        Button::B2,
        Button::B3,
        Button::B4,
        Button::L1,
        Button::R1,
        Button::L2,
        Button::R2,
        Button::S1,
        Button::S2,
        Button::L3,
        Button::R3,
        Button::A1,
        Button::A2,
    ];

    pub const fn mask(self) -> u32 {
        match self {
            Button::Up => MASK_UP,
            Button::Down => MASK_DOWN,
            Button::Left => MASK_LEFT,
            Button::Right => MASK_RIGHT,
            Button::B1 => MASK_B1,
            Button::B2 => MASK_B2,
            Button::B3 => MASK_B3,
            Button::B4 => MASK_B4,
            Button::L1 => MASK_L1,
            Button::R1 => MASK_R1,
            Button::L2 => MASK_L2,
            Button::R2 => MASK_R2,
            Button::S1 => MASK_S1,
            Button::S2 => MASK_S2,
            Button::L3 => MASK_L3,
            Button::R3 => MASK_R3,
            Button::A1 => MASK_A1,
            Button::A2 => MASK_A2,
        }
    }

    pub const fn is_dpad(self) -> bool {
        self.mask() & MASK_DPAD != 0
    }

    /// Combined mask for a set of buttons.
    pub fn mask_of(buttons: &[Button]) -> u32 {
        buttons.iter().fold(0, |acc, b| acc | b.mask())
    }

    /// Buttons whose bits are set in `bits`, in bit order.
    pub fn pressed_in(bits: u32) -> impl Iterator<Item = Button> {
        Button::ALL
            .into_iter()
            .filter(move |b| bits & b.mask() != 0)
    }
}
