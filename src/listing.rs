//! Reading solution listings back in.
//!
//! A listing is what the solver writes to stdout, one solution per line:
//!
//! ```text
//! START: 0,0,2 MOVES: UP 2, LEFT 3, BACK 3, ...
//! ```
//!
//! Blank lines and `---` separators are skipped.

use std::io::{self, BufRead};

use rustc_hash::FxHashMap;

use crate::geometry::{Direction, UnknownDirection};
use crate::grid::Coord;
use crate::solution::{Move, SolutionRecord};

/// Why a single listing line failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("missing \"START: \" prefix")]
    MissingStart,
    #[error("missing \" MOVES: \" separator")]
    MissingMoves,
    #[error("bad coordinate {0:?}")]
    BadCoordinate(String),
    #[error("bad move {0:?}")]
    BadMove(String),
    #[error(transparent)]
    UnknownDirection(#[from] UnknownDirection),
}

/// Failure while loading a listing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read listing: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {kind}")]
    Line { line: usize, kind: LineError },
}

/// Parses one `START: x,y,z MOVES: DIR len, ...` line.
pub fn parse_line(line: &str) -> Result<SolutionRecord, LineError> {
    let rest = line
        .trim()
        .strip_prefix("START: ")
        .ok_or(LineError::MissingStart)?;
    let (start, moves) = rest
        .split_once(" MOVES: ")
        .ok_or(LineError::MissingMoves)?;

    let start = parse_coord(start)?;
    let moves = moves
        .split(", ")
        .map(parse_move)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SolutionRecord { start, moves })
}

fn parse_coord(text: &str) -> Result<Coord, LineError> {
    let mut parts = text.split(',').map(|part| part.trim().parse::<i32>());
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(Ok(x)), Some(Ok(y)), Some(Ok(z)), None) => Ok((x, y, z)),
        _ => Err(LineError::BadCoordinate(text.to_string())),
    }
}

fn parse_move(text: &str) -> Result<Move, LineError> {
    let bad_move = || LineError::BadMove(text.to_string());
    let (name, length) = text.trim().split_once(' ').ok_or_else(bad_move)?;
    let direction = name.parse::<Direction>()?;
    let length = length.parse::<u8>().map_err(|_| bad_move())?;
    Ok(Move::new(direction, length))
}

/// Loads every solution in a listing.
pub fn load_all<R: BufRead>(reader: R) -> Result<Vec<SolutionRecord>, ParseError> {
    let mut solutions = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed == "---" {
            continue;
        }
        let record = parse_line(trimmed).map_err(|kind| ParseError::Line {
            line: index + 1,
            kind,
        })?;
        solutions.push(record);
    }

    Ok(solutions)
}

/// Tallies solutions per starting cell.
pub fn count_by_start(solutions: &[SolutionRecord]) -> FxHashMap<Coord, usize> {
    let mut counts = FxHashMap::default();
    for solution in solutions {
        *counts.entry(solution.start).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn test_parse_line() {
        let record = parse_line("START: 0,0,2 MOVES: UP 2, LEFT 3, BACK 1").unwrap();
        assert_eq!(record.start, (0, 0, 2));
        assert_eq!(
            record.moves,
            vec![Move::new(Up, 2), Move::new(Left, 3), Move::new(Back, 1)]
        );
    }

    #[test]
    fn test_parse_line_roundtrips_display() {
        let line = "START: 3,1,0 MOVES: DOWN 1, FORWARD 2, RIGHT 1";
        assert_eq!(parse_line(line).unwrap().as_solution().to_string(), line);
    }

    #[test]
    fn test_parse_line_errors() {
        assert_eq!(parse_line("0,0,0 MOVES: UP 1"), Err(LineError::MissingStart));
        assert_eq!(parse_line("START: 0,0,0 UP 1"), Err(LineError::MissingMoves));
        assert_eq!(
            parse_line("START: 0,0 MOVES: UP 1"),
            Err(LineError::BadCoordinate("0,0".to_string()))
        );
        assert_eq!(
            parse_line("START: 0,0,0 MOVES: UP"),
            Err(LineError::BadMove("UP".to_string()))
        );
        assert_eq!(
            parse_line("START: 0,0,0 MOVES: UP x"),
            Err(LineError::BadMove("UP x".to_string()))
        );
        assert_eq!(
            parse_line("START: 0,0,0 MOVES: SIDEWAYS 1"),
            Err(LineError::UnknownDirection(UnknownDirection(
                "SIDEWAYS".to_string()
            )))
        );
    }

    #[test]
    fn test_load_all_skips_separators() {
        let listing = "START: 0,0,0 MOVES: UP 1, BACK 1\n---\n\nSTART: 1,1,1 MOVES: DOWN 1, LEFT 1\n";
        let solutions = load_all(listing.as_bytes()).unwrap();
        assert_eq!(solutions.len(), 2);
        assert_eq!(solutions[1].start, (1, 1, 1));
    }

    #[test]
    fn test_load_all_reports_line_number() {
        let listing = "START: 0,0,0 MOVES: UP 1\n\ngarbage\n";
        match load_all(listing.as_bytes()) {
            Err(ParseError::Line { line, kind }) => {
                assert_eq!(line, 3);
                assert_eq!(kind, LineError::MissingStart);
            }
            other => panic!("expected a line error, got {other:?}"),
        }
    }

    #[test]
    fn test_count_by_start() {
        let listing = "START: 0,0,0 MOVES: UP 1\nSTART: 0,0,0 MOVES: BACK 1\nSTART: 1,0,0 MOVES: UP 1\n";
        let counts = count_by_start(&load_all(listing.as_bytes()).unwrap());
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&(0, 0, 0)], 2);
        assert_eq!(counts[&(1, 0, 0)], 1);
    }
}
