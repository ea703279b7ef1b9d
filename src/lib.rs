//! Snake Cube Solver Library
//!
//! Enumerates every way to fold a snake of straight runs into a cube.

pub mod geometry;
pub mod grid;
pub mod listing;
pub mod puzzle;
pub mod report;
pub mod solution;
pub mod solver;
