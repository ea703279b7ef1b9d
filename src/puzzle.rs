//! Snake puzzle definitions.
//!
//! A snake is described by the lengths of its straight runs: each entry is the
//! number of new cells the run adds after the cell the previous run ended on.

/// Snake puzzle definition with compile-time parameters.
///
/// - `DIM`: cube dimension per axis
/// - `GRID_SIZE`: total cells in the cube (must equal DIM^3)
/// - `NUM_MOVES`: number of straight runs in the snake
pub struct SnakePuzzle<const DIM: usize, const GRID_SIZE: usize, const NUM_MOVES: usize> {
    /// Length of each run, in the order the runs are laid down.
    pub moves: [u8; NUM_MOVES],
}

impl<const DIM: usize, const GRID_SIZE: usize, const NUM_MOVES: usize>
    SnakePuzzle<DIM, GRID_SIZE, NUM_MOVES>
{
    /// Creates a new puzzle definition with compile-time validation.
    pub const fn new(moves: [u8; NUM_MOVES]) -> Self {
        assert!(DIM * DIM * DIM == GRID_SIZE, "GRID_SIZE must equal DIM^3");
        assert!(GRID_SIZE <= 64, "GRID_SIZE must be <= 64 (u64 bitmask)");
        let mut covered = 1;
        let mut i = 0;
        while i < NUM_MOVES {
            assert!(moves[i] >= 1, "every run must add at least one cell");
            covered += moves[i] as usize;
            i += 1;
        }
        assert!(covered <= GRID_SIZE, "snake is longer than the cube has cells");
        Self { moves }
    }

    /// Number of cells a complete solution covers, starting cell included.
    pub const fn cells_covered(&self) -> usize {
        let mut covered = 1;
        let mut i = 0;
        while i < NUM_MOVES {
            covered += self.moves[i] as usize;
            i += 1;
        }
        covered
    }
}

/// Run lengths of the 4x4x4 snake.
pub const MOVE_SIZES: [u8; SNAKE_NUM_MOVES] = [
    2, 3, 3, 3, 1, 3, 1, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 1, 3, 2, 2, 1, 3, 1, 2, 1, 1, 1, 1, 1,
    2, 1, 1, 1, 1, 3, 1, 3,
];

/// 4x4x4 snake constants.
pub const SNAKE_DIM: usize = 4;
pub const SNAKE_GRID_SIZE: usize = 64;
pub const SNAKE_NUM_MOVES: usize = 39;

/// 4x4x4 snake puzzle definition.
pub const SNAKE_PUZZLE: SnakePuzzle<SNAKE_DIM, SNAKE_GRID_SIZE, SNAKE_NUM_MOVES> =
    SnakePuzzle::new(MOVE_SIZES);

/// Run lengths of the classic 3x3x3 wooden snake.
///
/// Its 17 straight pieces hold 3,2,2,3,2,3,2,2,3,3,2,2,2,3,3,3,3 cubes; each piece
/// shares its first cube with the previous piece's last, so the first run adds two
/// cells and every later piece of `k` cubes adds `k - 1`.
pub const CLASSIC_MOVE_SIZES: [u8; CLASSIC_NUM_MOVES] =
    [2, 1, 1, 2, 1, 2, 1, 1, 2, 2, 1, 1, 1, 2, 2, 2, 2];

/// Classic 3x3x3 snake constants.
pub const CLASSIC_DIM: usize = 3;
pub const CLASSIC_GRID_SIZE: usize = 27;
pub const CLASSIC_NUM_MOVES: usize = 17;

/// Classic 3x3x3 snake puzzle definition.
pub const CLASSIC_PUZZLE: SnakePuzzle<CLASSIC_DIM, CLASSIC_GRID_SIZE, CLASSIC_NUM_MOVES> =
    SnakePuzzle::new(CLASSIC_MOVE_SIZES);
