//! Board representation, move generation primitives and inversion parity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PuzzleError;

/// A tile label. `0` is the blank.
pub type Tile = u8;

/// The blank tile label.
pub const BLANK: Tile = 0;

/// Smallest supported board side (the 8-puzzle).
pub const MIN_SIDE: usize = 3;

/// Largest supported board side (the 15-puzzle).
pub const MAX_SIDE: usize = 4;

/// A move, named after the direction the tile next to the blank slides.
///
/// `Up` moves the tile below the blank up, so the blank travels one row down.
/// The declaration order is the expansion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    /// All moves in expansion order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Left, Move::Down, Move::Right];

    /// Displacement of the blank as `(row, col)`.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (1, 0),
            Move::Left => (0, 1),
            Move::Down => (-1, 0),
            Move::Right => (0, -1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "up",
            Move::Left => "left",
            Move::Down => "down",
            Move::Right => "right",
        };
        write!(f, "{}", s)
    }
}

/// An N×N tile configuration with its blank position.
///
/// Rows are stored in row-major order. A `Board` obtained from
/// [`Board::from_flat`] always holds a permutation of `0..N²`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    board: Vec<Vec<Tile>>,
    row: usize,
    col: usize,
}

impl Board {
    /// The canonical solved board: `1..N²-1` in order, blank last.
    pub fn solved(size: usize) -> Self {
        let mut board = Vec::with_capacity(size);
        let mut value: Tile = 1;

        for i in 0..size {
            let mut row = Vec::with_capacity(size);
            for j in 0..size {
                if i == size - 1 && j == size - 1 {
                    row.push(BLANK);
                } else {
                    row.push(value);
                    value += 1;
                }
            }
            board.push(row);
        }

        Self {
            size,
            board,
            row: size - 1,
            col: size - 1,
        }
    }

    /// Reshape a flat sequence of `N²` labels into a board.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidConfiguration`] when the length is not
    /// the square of a supported side, or the labels are not a permutation
    /// of `0..N²`.
    pub fn from_flat(tiles: &[Tile]) -> Result<Self, PuzzleError> {
        let size = side_for_len(tiles.len())?;

        let mut seen = vec![false; tiles.len()];
        for &tile in tiles {
            let slot = seen.get_mut(tile as usize).ok_or_else(|| {
                PuzzleError::invalid(format!(
                    "tile {tile} out of range for a {size}x{size} board"
                ))
            })?;
            if *slot {
                return Err(PuzzleError::invalid(format!("tile {tile} appears more than once")));
            }
            *slot = true;
        }

        let blank = tiles
            .iter()
            .position(|&t| t == BLANK)
            .ok_or_else(|| PuzzleError::invalid("no blank (0) tile"))?;

        let board = tiles.chunks(size).map(<[Tile]>::to_vec).collect();

        Ok(Self {
            size,
            board,
            row: blank / size,
            col: blank % size,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Blank position as `(row, col)`.
    pub fn blank(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.board[row][col]
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.board
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.board.iter().flat_map(|row| row.iter().copied())
    }

    pub fn to_flat(&self) -> Vec<Tile> {
        self.tiles().collect()
    }

    /// Where the blank lands after `movement`, if that stays on the board.
    pub fn target_of(&self, movement: Move) -> Option<(usize, usize)> {
        let (dr, dc) = movement.as_offset();

        let new_row = self.row as isize + dr;
        let new_col = self.col as isize + dc;
        let bound = self.size as isize;

        if new_row >= 0 && new_row < bound && new_col >= 0 && new_col < bound {
            Some((new_row as usize, new_col as usize))
        } else {
            None
        }
    }

    pub fn apply_move(&mut self, movement: Move) -> bool {
        match self.target_of(movement) {
            Some((new_row, new_col)) => {
                self.board[self.row][self.col] = self.board[new_row][new_col];
                self.board[new_row][new_col] = BLANK;

                self.row = new_row;
                self.col = new_col;
                true
            }
            None => false,
        }
    }

    /// A copy of this board with `dir` applied, or `None` if `dir` is illegal.
    pub fn try_move(&self, dir: Move) -> Option<Self> {
        let mut new_board = self.clone();
        if new_board.apply_move(dir) {
            Some(new_board)
        } else {
            None
        }
    }

    /// Number of tile pairs out of order in the row-major sequence, blank excluded.
    pub fn count_inversions(&self) -> usize {
        let flattened = self.to_flat();
        flattened
            .iter()
            .enumerate()
            .filter(|&(_, &val)| val != BLANK)
            .map(|(i, &val)| {
                flattened[i + 1..]
                    .iter()
                    .filter(|&&next| next != BLANK && next < val)
                    .count()
            })
            .sum()
    }

    /// Permutation parity invariant under legal moves.
    ///
    /// Odd sides: a horizontal move never changes the inversion count and a
    /// vertical move changes it by an even amount. Even sides: a vertical move
    /// flips inversion parity and blank row parity together.
    pub fn parity(&self) -> usize {
        if self.size % 2 == 1 {
            self.count_inversions() % 2
        } else {
            (self.count_inversions() + self.row) % 2
        }
    }

    /// Whether `goal` is reachable from this board by legal moves.
    pub fn can_reach(&self, goal: &Board) -> bool {
        self.size == goal.size && self.parity() == goal.parity()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.board {
            for &val in row {
                write!(f, "{:2} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn side_for_len(len: usize) -> Result<usize, PuzzleError> {
    (MIN_SIDE..=MAX_SIDE)
        .find(|side| side * side == len)
        .ok_or_else(|| {
            PuzzleError::invalid(format!(
                "{len} tiles do not form a {MIN_SIDE}x{MIN_SIDE} to {MAX_SIDE}x{MAX_SIDE} board"
            ))
        })
}
