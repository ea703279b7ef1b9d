//! Progress and solution reporting.
//!
//! Solutions go to the primary stream one line at a time, flushed as soon as they
//! are found. Progress lines go to the diagnostic stream.

use std::fmt;
use std::io::{self, Stderr, Stdout, Write};
use std::time::Duration;

use crate::grid::Coord;
use crate::solution::Solution;

/// Attempts between progress lines unless configured otherwise.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 10_000_000;

/// A snapshot of search progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stats {
    pub attempts: u64,
    pub elapsed: Duration,
    pub solutions_found: u64,
    /// Starting cell currently being searched.
    pub start: Coord,
}

impl Stats {
    /// Attempts per second, or 0 before any time has elapsed.
    pub fn rate(&self) -> f64 {
        let seconds = self.elapsed.as_secs_f64();
        if seconds > 0.0 {
            self.attempts as f64 / seconds
        } else {
            0.0
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y, z) = self.start;
        write!(
            f,
            "{:>12} attempts | {:7.4} sec | {:8.0} attempts / sec | {:>3} solutions found | searching for ({},{},{})",
            self.attempts,
            self.elapsed.as_secs_f64(),
            self.rate(),
            self.solutions_found,
            x,
            y,
            z
        )
    }
}

/// Receives progress snapshots and solutions as the search produces them.
pub trait Reporter {
    fn report_progress(&mut self, stats: &Stats) -> io::Result<()>;
    fn report_solution(&mut self, solution: &Solution<'_>) -> io::Result<()>;
}

/// Writes solutions to `out` and progress lines to `err`.
pub struct StreamReporter<O: Write, E: Write> {
    out: O,
    err: E,
    /// Suppresses progress lines.
    quiet: bool,
}

impl StreamReporter<Stdout, Stderr> {
    /// Reporter over the process's stdout and stderr.
    pub fn stdio(quiet: bool) -> Self {
        Self::new(io::stdout(), io::stderr(), quiet)
    }
}

impl<O: Write, E: Write> StreamReporter<O, E> {
    pub fn new(out: O, err: E, quiet: bool) -> Self {
        Self { out, err, quiet }
    }

    /// Returns the underlying (solutions, progress) streams.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> Reporter for StreamReporter<O, E> {
    fn report_progress(&mut self, stats: &Stats) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.err, "{stats}")
    }

    fn report_solution(&mut self, solution: &Solution<'_>) -> io::Result<()> {
        writeln!(self.out, "{solution}")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Direction;
    use crate::solution::Move;

    #[test]
    fn test_stats_line_format() {
        let stats = Stats {
            attempts: 10_000_000,
            elapsed: Duration::from_secs(2),
            solutions_found: 3,
            start: (1, 2, 3),
        };
        assert_eq!(
            stats.to_string(),
            "    10000000 attempts |  2.0000 sec |  5000000 attempts / sec |   3 solutions found | searching for (1,2,3)"
        );
    }

    #[test]
    fn test_rate_is_zero_without_elapsed_time() {
        let stats = Stats {
            attempts: 5,
            elapsed: Duration::ZERO,
            solutions_found: 0,
            start: (0, 0, 0),
        };
        assert_eq!(stats.rate(), 0.0);
    }

    #[test]
    fn test_stream_reporter_splits_streams() {
        let mut reporter = StreamReporter::new(Vec::new(), Vec::new(), false);
        let moves = [Move::new(Direction::Back, 1)];
        reporter
            .report_solution(&Solution {
                start: (0, 0, 0),
                moves: &moves,
            })
            .unwrap();
        reporter
            .report_progress(&Stats {
                attempts: 1,
                elapsed: Duration::from_secs(1),
                solutions_found: 1,
                start: (0, 0, 0),
            })
            .unwrap();

        let (out, err) = reporter.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "START: 0,0,0 MOVES: BACK 1\n");
        assert!(String::from_utf8(err).unwrap().contains("1 solutions found"));
    }

    #[test]
    fn test_quiet_reporter_drops_progress() {
        let mut reporter = StreamReporter::new(Vec::new(), Vec::new(), true);
        reporter
            .report_progress(&Stats {
                attempts: 1,
                elapsed: Duration::from_secs(1),
                solutions_found: 0,
                start: (0, 0, 0),
            })
            .unwrap();
        let (_, err) = reporter.into_inner();
        assert!(err.is_empty());
    }
}
