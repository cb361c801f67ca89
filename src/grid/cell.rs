use crate::Config;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// `0` is dead, `1` is alive, anything else is rejected.
    pub fn from_state(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Dead),
            1 => Some(Self::Alive),
            _ => None,
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            Config::ALIVE_SYMBOL => Some(Self::Alive),
            Config::DEAD_SYMBOL => Some(Self::Dead),
            _ => None,
        }
    }

    pub fn state(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Alive => Config::ALIVE_SYMBOL,
            Self::Dead => Config::DEAD_SYMBOL,
        }
    }

    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }

    /// B3/S23: survive with 2 or 3 living neighbors, get born with exactly 3.
    pub fn next(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Self::Alive, 2 | 3) | (Self::Dead, 3) => Self::Alive,
            _ => Self::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}
