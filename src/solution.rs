//! Solutions: a starting cell plus one direction per run.
//!
//! The solver hands out borrowed [`Solution`] views backed by a stack array;
//! listings read back from text are owned [`SolutionRecord`]s.

use std::fmt;

use crate::geometry::Direction;
use crate::grid::{cell_bit, coord_to_idx, in_bounds, Coord};

/// A single straight run: where it heads and how many new cells it covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub direction: Direction,
    pub length: u8,
}

impl Move {
    pub const fn new(direction: Direction, length: u8) -> Self {
        Self { direction, length }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction, self.length)
    }
}

/// A complete folding, borrowed from whoever owns the moves.
#[derive(Clone, Copy, Debug)]
pub struct Solution<'a> {
    pub start: Coord,
    pub moves: &'a [Move],
}

/// An owned solution, as parsed from a listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionRecord {
    pub start: Coord,
    pub moves: Vec<Move>,
}

impl SolutionRecord {
    pub fn as_solution(&self) -> Solution<'_> {
        Solution {
            start: self.start,
            moves: &self.moves,
        }
    }
}

/// Why a solution does not describe a legal folding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error("start {0:?} is outside the cube")]
    StartOutOfBounds(Coord),
    #[error("expected {expected} moves, found {found}")]
    MoveCount { expected: usize, found: usize },
    #[error("move {index} has length {found}, the snake needs {expected}")]
    WrongLength {
        index: usize,
        expected: u8,
        found: u8,
    },
    #[error("move {index} ({direction}) does not turn after {previous}")]
    NoTurn {
        index: usize,
        previous: Direction,
        direction: Direction,
    },
    #[error("move {index} ({direction} {length}) leaves the cube")]
    OutOfBounds {
        index: usize,
        direction: Direction,
        length: u8,
    },
    #[error("move {index} ({direction} {length}) runs into an occupied cell")]
    Collision {
        index: usize,
        direction: Direction,
        length: u8,
    },
}

impl<'a> Solution<'a> {
    /// Walks the path cell by cell.
    ///
    /// Yields the starting cell tagged `None`, then every cell each move adds, tagged
    /// with that move's index. Coordinates are not bounds checked; call
    /// [`Solution::replay`] first when the solution is untrusted.
    pub fn path(&self) -> impl Iterator<Item = (Option<usize>, Coord)> + 'a {
        let start = self.start;
        let moves = self.moves;
        let steps = moves.iter().enumerate().flat_map(|(index, mv)| {
            std::iter::repeat((index, mv.direction.delta())).take(mv.length as usize)
        });
        let cells = steps.scan(start, |current, (index, (dx, dy, dz))| {
            *current = (current.0 + dx, current.1 + dy, current.2 + dz);
            Some((Some(index), *current))
        });
        std::iter::once((None, start)).chain(cells)
    }

    /// Re-lays the snake in a `DIM`-sided cube, checking every folding rule against
    /// the expected run lengths.
    ///
    /// Returns the final occupancy mask on success.
    pub fn replay<const DIM: usize>(&self, lengths: &[u8]) -> Result<u64, ReplayError> {
        if !in_bounds::<DIM>(self.start) {
            return Err(ReplayError::StartOutOfBounds(self.start));
        }
        if self.moves.len() != lengths.len() {
            return Err(ReplayError::MoveCount {
                expected: lengths.len(),
                found: self.moves.len(),
            });
        }

        let (x, y, z) = self.start;
        let mut last_cell = coord_to_idx::<DIM>(x, y, z);
        let mut occupied = cell_bit(last_cell);
        let mut previous: Option<Direction> = None;

        for (index, (mv, &expected)) in self.moves.iter().zip(lengths).enumerate() {
            let Move { direction, length } = *mv;
            if length != expected {
                return Err(ReplayError::WrongLength {
                    index,
                    expected,
                    found: length,
                });
            }
            if let Some(previous) = previous {
                if !previous.may_follow(direction) {
                    return Err(ReplayError::NoTurn {
                        index,
                        previous,
                        direction,
                    });
                }
            }
            if !direction.fits::<DIM>(last_cell, length) {
                return Err(ReplayError::OutOfBounds {
                    index,
                    direction,
                    length,
                });
            }

            let footprint = direction.footprint::<DIM>(last_cell, length);
            if occupied & footprint != 0 {
                return Err(ReplayError::Collision {
                    index,
                    direction,
                    length,
                });
            }

            occupied |= footprint;
            last_cell = direction.advance::<DIM>(last_cell, length);
            previous = Some(direction);
        }

        Ok(occupied)
    }
}

impl fmt::Display for Solution<'_> {
    /// `START: x,y,z MOVES: DIR len, DIR len, ...`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y, z) = self.start;
        write!(f, "START: {x},{y},{z} MOVES: ")?;
        for (index, mv) in self.moves.iter().enumerate() {
            if index != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    fn record(start: Coord, moves: &[(Direction, u8)]) -> SolutionRecord {
        SolutionRecord {
            start,
            moves: moves
                .iter()
                .map(|&(direction, length)| Move::new(direction, length))
                .collect(),
        }
    }

    #[test]
    fn test_display_format() {
        let solution = record((0, 1, 2), &[(Up, 2), (Left, 1), (Back, 3)]);
        assert_eq!(
            solution.as_solution().to_string(),
            "START: 0,1,2 MOVES: UP 2, LEFT 1, BACK 3"
        );
    }

    #[test]
    fn test_path_visits_every_added_cell() {
        let solution = record((0, 0, 0), &[(Right, 2), (Up, 1)]);
        let path: Vec<_> = solution.as_solution().path().collect();
        assert_eq!(
            path,
            vec![
                (None, (0, 0, 0)),
                (Some(0), (1, 0, 0)),
                (Some(0), (2, 0, 0)),
                (Some(1), (2, 1, 0)),
            ]
        );
    }

    #[test]
    fn test_replay_accepts_valid_folding() {
        let solution = record((0, 0, 0), &[(Up, 1), (Right, 1)]);
        let occupied = solution.as_solution().replay::<2>(&[1, 1]).unwrap();
        assert_eq!(occupied.count_ones(), 3);
        assert_eq!(occupied, cell_bit(0) | cell_bit(2) | cell_bit(6));
    }

    #[test]
    fn test_replay_rejects_start_outside() {
        let solution = record((2, 0, 0), &[(Up, 1)]);
        assert_eq!(
            solution.as_solution().replay::<2>(&[1]),
            Err(ReplayError::StartOutOfBounds((2, 0, 0)))
        );
    }

    #[test]
    fn test_replay_rejects_wrong_move_count() {
        let solution = record((0, 0, 0), &[(Up, 1)]);
        assert_eq!(
            solution.as_solution().replay::<2>(&[1, 1]),
            Err(ReplayError::MoveCount {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_replay_rejects_wrong_length() {
        let solution = record((0, 0, 0), &[(Up, 1), (Right, 2)]);
        assert_eq!(
            solution.as_solution().replay::<3>(&[1, 1]),
            Err(ReplayError::WrongLength {
                index: 1,
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn test_replay_rejects_straight_and_reversed_runs() {
        let straight = record((0, 0, 0), &[(Up, 1), (Up, 1)]);
        assert_eq!(
            straight.as_solution().replay::<3>(&[1, 1]),
            Err(ReplayError::NoTurn {
                index: 1,
                previous: Up,
                direction: Up
            })
        );

        let reversed = record((0, 1, 0), &[(Up, 1), (Down, 1)]);
        assert!(matches!(
            reversed.as_solution().replay::<3>(&[1, 1]),
            Err(ReplayError::NoTurn { index: 1, .. })
        ));
    }

    #[test]
    fn test_replay_rejects_leaving_the_cube() {
        let solution = record((1, 0, 0), &[(Right, 1)]);
        assert_eq!(
            solution.as_solution().replay::<2>(&[1]),
            Err(ReplayError::OutOfBounds {
                index: 0,
                direction: Right,
                length: 1
            })
        );
    }

    #[test]
    fn test_replay_rejects_collision() {
        // square loop back onto the starting cell
        let solution = record((0, 0, 0), &[(Up, 1), (Right, 1), (Down, 1), (Left, 1)]);
        assert_eq!(
            solution.as_solution().replay::<2>(&[1, 1, 1, 1]),
            Err(ReplayError::Collision {
                index: 3,
                direction: Left,
                length: 1
            })
        );
    }
}
