//! Directions of travel inside the cube and the cells a straight run covers.
//!
//! A move is a straight run of `length` cells leaving the last placed cell along
//! one of six axis-aligned directions. Directions come in inverse pairs
//! (UP/DOWN, LEFT/RIGHT, FORWARD/BACK).

use std::fmt;
use std::str::FromStr;

use crate::grid::{axis_component, cell_bit, Axis};

/// One of the six axis-aligned unit steps.
///
/// Discriminants follow the search order, and a direction's inverse sits at the
/// mirrored position (`5 - d`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Left = 1,
    Back = 2,
    Forward = 3,
    Right = 4,
    Down = 5,
}

impl Direction {
    /// All directions in the order the solver tries them.
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::Left,
        Direction::Back,
        Direction::Forward,
        Direction::Right,
        Direction::Down,
    ];

    /// The direction pointing the opposite way along the same axis.
    #[inline(always)]
    pub const fn inverse(self) -> Direction {
        Self::ALL[5 - self as usize]
    }

    /// The axis this direction moves along.
    #[inline(always)]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::X,
            Direction::Up | Direction::Down => Axis::Y,
            Direction::Forward | Direction::Back => Axis::Z,
        }
    }

    /// +1 for directions that increase their axis coordinate, -1 otherwise.
    #[inline(always)]
    pub const fn sign(self) -> i32 {
        match self {
            Direction::Up | Direction::Right | Direction::Back => 1,
            Direction::Down | Direction::Left | Direction::Forward => -1,
        }
    }

    /// The (dx, dy, dz) unit step.
    pub const fn delta(self) -> (i32, i32, i32) {
        let sign = self.sign();
        match self.axis() {
            Axis::X => (sign, 0, 0),
            Axis::Y => (0, sign, 0),
            Axis::Z => (0, 0, sign),
        }
    }

    /// The signed change in cell index for one step in a `DIM`-sided cube.
    #[inline(always)]
    pub const fn index_delta<const DIM: usize>(self) -> isize {
        let stride = match self.axis() {
            Axis::X => DIM * DIM,
            Axis::Y => DIM,
            Axis::Z => 1,
        };
        self.sign() as isize * stride as isize
    }

    /// Returns true if `next` may follow `self`: runs must turn, never continue
    /// straight or fold back.
    #[inline(always)]
    pub fn may_follow(self, next: Direction) -> bool {
        next != self && next != self.inverse()
    }

    /// Checks whether a run of `length` cells from `cell` stays inside the cube.
    ///
    /// Increasing directions fail when `coordinate + length >= DIM`, decreasing ones
    /// when `coordinate - length < 0`, on this direction's axis only.
    #[inline]
    pub const fn fits<const DIM: usize>(self, cell: usize, length: u8) -> bool {
        let coordinate = axis_component::<DIM>(cell, self.axis());
        let length = length as i32;
        if self.sign() > 0 {
            coordinate + length < DIM as i32
        } else {
            coordinate - length >= 0
        }
    }

    /// The cell reached after `length` steps from `cell`. Only meaningful when
    /// [`Direction::fits`] holds.
    #[inline]
    pub const fn advance<const DIM: usize>(self, cell: usize, length: u8) -> usize {
        (cell as isize + self.index_delta::<DIM>() * length as isize) as usize
    }

    /// Bitmask of the `length` cells a run covers, excluding `cell` itself.
    ///
    /// Only meaningful when [`Direction::fits`] holds.
    pub const fn footprint<const DIM: usize>(self, cell: usize, length: u8) -> u64 {
        let mut mask = 0;
        let mut step = 1;
        while step <= length {
            mask |= cell_bit(self.advance::<DIM>(cell, step));
            step += 1;
        }
        mask
    }

    /// Upper-case name used in solution listings.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Left => "LEFT",
            Direction::Back => "BACK",
            Direction::Forward => "FORWARD",
            Direction::Right => "RIGHT",
            Direction::Down => "DOWN",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for a direction name that is not one of the six upper-case names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction {0:?}")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|direction| direction.name() == name)
            .ok_or_else(|| UnknownDirection(name.to_string()))
    }
}
