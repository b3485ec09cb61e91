//! Compass view of the D-pad
//!
//! Stick emulation and all three report hat encodings are keyed off the same
//! 8-direction + center mapping. Combinations that are not exactly one of the
//! eight directions (opposites still held, three or four bits) are `Center`.

use crate::{MASK_DOWN, MASK_DPAD, MASK_LEFT, MASK_RIGHT, MASK_UP};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Compass {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    #[default]
    Center,
}

impl Compass {
    pub const DIRECTIONS: [Compass; 8] = [
        Compass::North,
        Compass::NorthEast,
        Compass::East,
        Compass::SouthEast,
        Compass::South,
        Compass::SouthWest,
        Compass::West,
        Compass::NorthWest,
    ];

    pub fn from_buttons(buttons: u32) -> Self {
        match buttons & MASK_DPAD {
            MASK_UP => Compass::North,
            m if m == MASK_UP | MASK_RIGHT => Compass::NorthEast,
            MASK_RIGHT => Compass::East,
            m if m == MASK_DOWN | MASK_RIGHT => Compass::SouthEast,
            MASK_DOWN => Compass::South,
            m if m == MASK_DOWN | MASK_LEFT => Compass::SouthWest,
            MASK_LEFT => Compass::West,
            m if m == MASK_UP | MASK_LEFT => Compass::NorthWest,
            _ => Compass::Center,
        }
    }

    /// D-pad bits for this direction.
    pub const fn dpad_bits(self) -> u32 {
        match self {
            Compass::North => MASK_UP,
            Compass::NorthEast => MASK_UP | MASK_RIGHT,
            Compass::East => MASK_RIGHT,
            Compass::SouthEast => MASK_DOWN | MASK_RIGHT,
            Compass::South => MASK_DOWN,
            Compass::SouthWest => MASK_DOWN | MASK_LEFT,
            Compass::West => MASK_LEFT,
            Compass::NorthWest => MASK_UP | MASK_LEFT,
            Compass::Center => 0,
        }
    }

    /// Clockwise index starting at north, `None` for center.
    pub const fn clockwise_index(self) -> Option<u8> {
        match self {
            Compass::North => Some(0),
            Compass::NorthEast => Some(1),
            Compass::East => Some(2),
            Compass::SouthEast => Some(3),
            Compass::South => Some(4),
            Compass::SouthWest => Some(5),
            Compass::West => Some(6),
            Compass::NorthWest => Some(7),
            Compass::Center => None,
        }
    }

    pub const fn is_center(self) -> bool {
        matches!(self, Compass::Center)
    }
}
