use sequence::{Direction, Orientation};

/// The arrow keys, identified by their DOM `keyCode` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ArrowKey {
    Left,
    Up,
    Right,
    Down,
}

impl ArrowKey {
    pub fn from_key_code(key_code: u32) -> Option<Self> {
        match key_code {
            37 => Some(Self::Left),
            38 => Some(Self::Up),
            39 => Some(Self::Right),
            40 => Some(Self::Down),
            _ => None,
        }
    }

    pub fn key_code(self) -> u32 {
        match self {
            Self::Left => 37,
            Self::Up => 38,
            Self::Right => 39,
            Self::Down => 40,
        }
    }

    /// Left/right drive horizontal sequences, up/down drive vertical ones. Keys on the other
    /// axis are ignored.
    pub fn direction(self, orientation: Orientation) -> Option<Direction> {
        match (orientation, self) {
            (Orientation::Horizontal, Self::Left) | (Orientation::Vertical, Self::Up) => {
                Some(Direction::Previous)
            }
            (Orientation::Horizontal, Self::Right) | (Orientation::Vertical, Self::Down) => {
                Some(Direction::Next)
            }
            _ => None,
        }
    }
}

/// Maps a raw key code to a navigation direction for `orientation`.
pub fn key_direction(orientation: Orientation, key_code: u32) -> Option<Direction> {
    ArrowKey::from_key_code(key_code)?.direction(orientation)
}
