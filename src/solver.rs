//! Exhaustive backtracking search for snake foldings.
//!
//! Key points:
//! - Bitmask for occupied cells (one `u64`, one bit per cell)
//! - Pre-computed run footprints for instant bounds and collision checks
//! - Fixed-size direction array, no heap allocation in the hot loop
//! - State is mutated in place and restored on the way back up

use std::array;
use std::io;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::geometry::Direction;
use crate::grid::{cell_bit, idx_to_coord};
use crate::puzzle::SnakePuzzle;
use crate::report::{Reporter, Stats, DEFAULT_PROGRESS_INTERVAL};
use crate::solution::{Move, Solution};

/// Pre-computed result of laying one run from one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Footprint {
    /// Bit `i` is set if the run covers cell `i`; the origin cell is excluded.
    mask: u64,
    /// Cell the run ends on.
    end: usize,
}

/// Lookup table indexed by `[cell][direction][length]`.
///
/// `None` marks a run that would leave the cube.
struct FootprintTable<const DIM: usize> {
    entries: Vec<Option<Footprint>>,
}

impl<const DIM: usize> FootprintTable<DIM> {
    fn build(grid_size: usize) -> Self {
        let mut entries = Vec::with_capacity(grid_size * Direction::ALL.len() * DIM);
        for cell in 0..grid_size {
            for direction in Direction::ALL {
                for length in 0..DIM as u8 {
                    entries.push(try_create_footprint::<DIM>(cell, direction, length));
                }
            }
        }
        Self { entries }
    }

    #[inline(always)]
    fn get(&self, cell: usize, direction: Direction, length: u8) -> Option<Footprint> {
        let length = length as usize;
        if length >= DIM {
            return None;
        }
        self.entries[(cell * Direction::ALL.len() + direction as usize) * DIM + length]
    }
}

/// Returns `None` if the run would fall outside the cube or adds no cells.
fn try_create_footprint<const DIM: usize>(
    cell: usize,
    direction: Direction,
    length: u8,
) -> Option<Footprint> {
    if length == 0 || !direction.fits::<DIM>(cell, length) {
        return None;
    }
    Some(Footprint {
        mask: direction.footprint::<DIM>(cell, length),
        end: direction.advance::<DIM>(cell, length),
    })
}

/// Totals for a finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchSummary {
    pub attempts: u64,
    pub solutions_found: u64,
    pub elapsed: Duration,
}

/// Depth-first solver for one snake puzzle.
///
/// Directions are tried in [`Direction::ALL`] order at every depth, and starting
/// cells in increasing index order, so the order solutions are reported in is fixed.
pub struct Solver<'p, R, const DIM: usize, const GRID_SIZE: usize, const NUM_MOVES: usize> {
    puzzle: &'p SnakePuzzle<DIM, GRID_SIZE, NUM_MOVES>,
    reporter: R,
    footprints: FootprintTable<DIM>,
    /// Attempts between progress reports; 0 disables them.
    progress_interval: u64,
    /// Calls into the recursive step, never reset.
    attempts: u64,
    /// Direction chosen for each move laid so far.
    directions: [Direction; NUM_MOVES],
    /// Number of moves laid so far.
    move_id: usize,
    occupied: u64,
    solutions_found: u64,
    start_cube: usize,
    start_time: Instant,
}

impl<'p, R: Reporter, const DIM: usize, const GRID_SIZE: usize, const NUM_MOVES: usize>
    Solver<'p, R, DIM, GRID_SIZE, NUM_MOVES>
{
    pub fn new(puzzle: &'p SnakePuzzle<DIM, GRID_SIZE, NUM_MOVES>, reporter: R) -> Self {
        Self {
            puzzle,
            reporter,
            footprints: FootprintTable::build(GRID_SIZE),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            attempts: 0,
            directions: [Direction::Up; NUM_MOVES],
            move_id: 0,
            occupied: 0,
            solutions_found: 0,
            start_cube: 0,
            start_time: Instant::now(),
        }
    }

    /// Sets the number of attempts between progress reports (0 disables them).
    pub fn with_progress_interval(mut self, progress_interval: u64) -> Self {
        self.progress_interval = progress_interval;
        self
    }

    /// Searches from every cell of the cube, in increasing index order.
    pub fn solve_all(&mut self) -> io::Result<SearchSummary> {
        self.run(0..GRID_SIZE)
    }

    /// Searches from each of `starts`, then reports final stats.
    ///
    /// The clock restarts here; attempts and solutions keep accumulating across runs.
    pub fn run(&mut self, starts: impl IntoIterator<Item = usize>) -> io::Result<SearchSummary> {
        info!(
            "searching {} moves covering {} cells",
            NUM_MOVES,
            self.puzzle.cells_covered()
        );
        self.start_time = Instant::now();

        for start_cube in starts {
            self.search_from(start_cube)?;
        }

        self.reporter.report_progress(&self.stats())?;
        let summary = SearchSummary {
            attempts: self.attempts,
            solutions_found: self.solutions_found,
            elapsed: self.start_time.elapsed(),
        };
        info!(
            "search finished: {} solutions, {} attempts in {:.3}s",
            summary.solutions_found,
            summary.attempts,
            summary.elapsed.as_secs_f64()
        );
        Ok(summary)
    }

    /// Runs the complete search for one starting cell.
    ///
    /// Occupancy is reset to just `start_cube` and depth to 0. On return the
    /// occupancy is that singleton again.
    pub fn search_from(&mut self, start_cube: usize) -> io::Result<()> {
        debug!("starting cell {:?}", idx_to_coord::<DIM>(start_cube));
        self.start_cube = start_cube;
        self.occupied = cell_bit(start_cube);
        self.move_id = 0;
        self.step(start_cube)
    }

    /// Tries every valid next run from `last_cube`, recursing into each.
    fn step(&mut self, last_cube: usize) -> io::Result<()> {
        self.attempts += 1;

        if self.progress_interval != 0 && self.attempts % self.progress_interval == 0 {
            self.reporter.report_progress(&self.stats())?;
        }

        if self.move_id == NUM_MOVES {
            self.solutions_found += 1;
            return self.report_solution();
        }

        let length = self.puzzle.moves[self.move_id];
        let previous = self.move_id.checked_sub(1).map(|i| self.directions[i]);

        for direction in Direction::ALL {
            if let Some(previous) = previous {
                if !previous.may_follow(direction) {
                    continue;
                }
            }

            let Some(footprint) = self.footprints.get(last_cube, direction, length) else {
                continue;
            };

            // fast collision check using bitmask AND
            if self.occupied & footprint.mask != 0 {
                continue;
            }

            self.occupied |= footprint.mask;
            self.directions[self.move_id] = direction;
            self.move_id += 1;

            let result = self.step(footprint.end);

            self.move_id -= 1;
            self.occupied &= !footprint.mask;
            result?;
        }

        Ok(())
    }

    fn report_solution(&mut self) -> io::Result<()> {
        let moves: [Move; NUM_MOVES] =
            array::from_fn(|i| Move::new(self.directions[i], self.puzzle.moves[i]));
        let solution = Solution {
            start: idx_to_coord::<DIM>(self.start_cube),
            moves: &moves,
        };
        self.reporter.report_solution(&solution)
    }

    /// Current progress snapshot.
    pub fn stats(&self) -> Stats {
        Stats {
            attempts: self.attempts,
            elapsed: self.start_time.elapsed(),
            solutions_found: self.solutions_found,
            start: idx_to_coord::<DIM>(self.start_cube),
        }
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn solutions_found(&self) -> u64 {
        self.solutions_found
    }

    /// Occupancy mask as it stands between searches.
    pub fn occupied(&self) -> u64 {
        self.occupied
    }

    /// Consumes the solver, handing back its reporter.
    pub fn into_reporter(self) -> R {
        self.reporter
    }
}
