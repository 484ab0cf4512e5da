use crate::GridError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compass heading on a grid, numbered clockwise from north.
///
/// Rows grow downwards, so north is `y - 1` and east is `x + 1`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Direction {
    #[default]
    N = 0,
    NE = 1,
    E = 2,
    SE = 3,
    S = 4,
    SW = 5,
    W = 6,
    NW = 7,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Direction for any integer, wrapped modulo 8.
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(8) as usize]
    }

    pub fn reverse(self) -> Self {
        Self::from_index(self.index() as i64 + 4)
    }

    /// Unit step `(dx, dy)` taken when moving one cell in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::N => (0, -1),
            Direction::NE => (1, -1),
            Direction::E => (1, 0),
            Direction::SE => (1, 1),
            Direction::S => (0, 1),
            Direction::SW => (-1, 1),
            Direction::W => (-1, 0),
            Direction::NW => (-1, -1),
        }
    }

    /// Turn clockwise by `degrees` (counter-clockwise when negative),
    /// snapping to the nearest 45° compass point.
    pub fn rotate(self, degrees: f64) -> Self {
        // Reduce before the cast; huge angles would saturate an i64.
        let turn = rounded_steps(degrees).rem_euclid(8.0) as i64;
        Self::from_index(self.index() as i64 + turn)
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
        }
    }
}

/// Number of 45° steps in `degrees`, with halves rounded away from zero.
///
/// Saturates for angles beyond the `i64` range; [`Direction::rotate`] does
/// not go through this.
pub fn rotation_steps(degrees: f64) -> i64 {
    rounded_steps(degrees) as i64
}

fn rounded_steps(degrees: f64) -> f64 {
    let steps = degrees / 45.0;
    if degrees > 0.0 {
        (steps + 0.5).floor()
    } else {
        (steps - 0.5).ceil()
    }
}

impl TryFrom<u8> for Direction {
    type Error = GridError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(GridError::InvalidDirection(value))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|d| d.abbreviation() == upper)
            .ok_or_else(|| format!("Unknown direction: {}", s))
    }
}
