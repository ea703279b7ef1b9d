//! Cell addressing and rendering for an N×N×N cube.
//!
//! Generic over the cube dimension (`DIM`) and total cell count (`GRID_SIZE = DIM^3`).
//! Cells are addressed by a flat x-major index; for a 4x4x4 cube that is the packed
//! layout x in bits 4-5, y in bits 2-3, z in bits 0-1. Occupancy is a `u64` with one
//! bit per cell index.

use crate::solution::Solution;

/// A 3D coordinate of a unit cell.
pub type Coord = (i32, i32, i32);

/// One of the three cube axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Converts (x, y, z) coordinates to a linear cell index.
///
/// Index order is x-major: `idx = x * DIM * DIM + y * DIM + z`.
#[inline(always)]
pub const fn coord_to_idx<const DIM: usize>(x: i32, y: i32, z: i32) -> usize {
    (x as usize) * DIM * DIM + (y as usize) * DIM + (z as usize)
}

/// Converts a linear cell index to (x, y, z) coordinates.
#[inline(always)]
pub const fn idx_to_coord<const DIM: usize>(cell_index: usize) -> Coord {
    (
        axis_component::<DIM>(cell_index, Axis::X),
        axis_component::<DIM>(cell_index, Axis::Y),
        axis_component::<DIM>(cell_index, Axis::Z),
    )
}

/// Extracts one axis coordinate (in `0..DIM`) from a cell index.
#[inline(always)]
pub const fn axis_component<const DIM: usize>(cell_index: usize, axis: Axis) -> i32 {
    let value = match axis {
        Axis::X => cell_index / (DIM * DIM),
        Axis::Y => (cell_index / DIM) % DIM,
        Axis::Z => cell_index % DIM,
    };
    value as i32
}

/// Returns true if every component of `coord` lies in `0..DIM`.
#[inline]
pub fn in_bounds<const DIM: usize>((x, y, z): Coord) -> bool {
    let range = 0..DIM as i32;
    range.contains(&x) && range.contains(&y) && range.contains(&z)
}

/// Occupancy bit for a cell index.
#[inline(always)]
pub const fn cell_bit(cell_index: usize) -> u64 {
    1u64 << cell_index
}

/// Label for the cells a segment adds: 0-9, then A-Z, then a-z, then '#'.
fn segment_label(segment: usize) -> char {
    match segment {
        0..=9 => char::from(b'0' + segment as u8),
        10..=35 => char::from(b'A' + (segment - 10) as u8),
        36..=61 => char::from(b'a' + (segment - 36) as u8),
        _ => '#',
    }
}

/// Formats a solution's path as z-slices side by side.
///
/// The starting cell shows as '*', every other covered cell shows the label of the
/// move that reached it, and empty cells show as '.'. Rows run from top (y=DIM-1)
/// to bottom (y=0), columns from x=0 to x=DIM-1.
pub fn format_path<const DIM: usize, const GRID_SIZE: usize>(solution: &Solution<'_>) -> String {
    let mut grid = ['.'; GRID_SIZE];
    for (segment, coord) in solution.path() {
        if !in_bounds::<DIM>(coord) {
            continue;
        }
        let (x, y, z) = coord;
        grid[coord_to_idx::<DIM>(x, y, z)] = match segment {
            None => '*',
            Some(segment) => segment_label(segment),
        };
    }

    let mut output = String::new();
    let mut header = String::new();
    for z in 0..DIM {
        if z > 0 {
            header.push_str("  ");
        }
        header.push_str(&format!("{:<width$}", format!("z{z}"), width = DIM));
    }
    output.push_str(header.trim_end());
    output.push('\n');

    for y in (0..DIM).rev() {
        for z in 0..DIM {
            if z > 0 {
                output.push_str("  ");
            }
            for x in 0..DIM {
                output.push(grid[x * DIM * DIM + y * DIM + z]);
            }
        }
        output.push('\n');
    }

    output
}
