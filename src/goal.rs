//! The fixed target configuration of a puzzle instance.

use crate::error::PuzzleError;
use crate::heuristic::CombineRule;
use crate::puzzle::{Board, Tile};

/// Target board plus the lookup tables derived from it.
///
/// Built once per session and shared read-only by every state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    board: Board,
    /// Goal `(row, col)` of each tile, indexed by label. Sized to the board.
    positions: Vec<(usize, usize)>,
    combine: CombineRule,
}

impl Goal {
    pub fn new(board: Board, combine: CombineRule) -> Self {
        let size = board.size();
        let mut positions = vec![(0, 0); size * size];
        for (index, tile) in board.tiles().enumerate() {
            positions[tile as usize] = (index / size, index % size);
        }

        Self {
            board,
            positions,
            combine,
        }
    }

    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidConfiguration`] if `tiles` is not a
    /// well-formed board.
    pub fn from_flat(tiles: &[Tile], combine: CombineRule) -> Result<Self, PuzzleError> {
        Ok(Self::new(Board::from_flat(tiles)?, combine))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn combine(&self) -> CombineRule {
        self.combine
    }

    /// Goal coordinates of `tile`.
    pub fn position_of(&self, tile: Tile) -> (usize, usize) {
        self.positions[tile as usize]
    }

    pub fn is_reached_by(&self, board: &Board) -> bool {
        *board == self.board
    }
}
