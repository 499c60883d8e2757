//! Cost selectors and the pure cost functions behind them.
//!
//! Frontier priority is `search_type.g(state) + heuristic.h(state)`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::goal::Goal;
use crate::puzzle::{Board, BLANK};
use crate::state::PuzzleState;

/// The g-cost component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    /// Always zero: greedy best-first on the heuristic alone.
    Uniform,
    /// Path length so far (A*).
    Depth,
}

impl SearchType {
    pub const ALL: [SearchType; 2] = [SearchType::Uniform, SearchType::Depth];

    pub fn g(self, state: &PuzzleState) -> u32 {
        match self {
            SearchType::Uniform => 0,
            SearchType::Depth => state.depth(),
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchType::Uniform => write!(f, "uniform"),
            SearchType::Depth => write!(f, "depth"),
        }
    }
}

/// The h-cost component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    Mismatch,
    Manhattan,
    Combined,
}

impl Heuristic {
    pub const ALL: [Heuristic; 3] = [Heuristic::Mismatch, Heuristic::Manhattan, Heuristic::Combined];

    pub fn h(self, state: &PuzzleState) -> u32 {
        match self {
            Heuristic::Mismatch => state.mismatch_cost(),
            Heuristic::Manhattan => state.manhattan_cost(),
            Heuristic::Combined => state.combined_cost(),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::Mismatch => write!(f, "mismatch"),
            Heuristic::Manhattan => write!(f, "manhattan"),
            Heuristic::Combined => write!(f, "combined"),
        }
    }
}

/// How the combined cost merges mismatch and Manhattan costs.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum CombineRule {
    /// `max(mismatch, manhattan)`.
    #[default]
    Max,
    /// `mismatch + manhattan`.
    Sum,
}

impl CombineRule {
    pub fn apply(self, mismatch: u32, manhattan: u32) -> u32 {
        match self {
            CombineRule::Max => mismatch.max(manhattan),
            CombineRule::Sum => mismatch + manhattan,
        }
    }
}

/// Cells whose label differs from the goal's label at the same position.
///
/// The blank is compared like any other cell.
pub fn mismatch_cost(board: &Board, goal: &Goal) -> u32 {
    board
        .tiles()
        .zip(goal.board().tiles())
        .filter(|(have, want)| have != want)
        .count() as u32
}

/// Sum of row and column offsets of every non-blank tile from its goal cell.
pub fn manhattan_cost(board: &Board, goal: &Goal) -> u32 {
    let mut distance = 0;
    for (i, row) in board.rows().iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            if value != BLANK {
                let (target_row, target_col) = goal.position_of(value);
                distance += i.abs_diff(target_row) + j.abs_diff(target_col);
            }
        }
    }
    distance as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal3() -> Goal {
        Goal::new(Board::solved(3), CombineRule::Max)
    }

    #[test]
    fn goal_costs_nothing() {
        let goal = goal3();
        assert_eq!(mismatch_cost(goal.board(), &goal), 0);
        assert_eq!(manhattan_cost(goal.board(), &goal), 0);
    }

    #[test]
    fn single_slide_costs() {
        let goal = goal3();
        let board = Board::from_flat(&[1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        // Tile 8 and the blank are both out of place.
        assert_eq!(mismatch_cost(&board, &goal), 2);
        assert_eq!(manhattan_cost(&board, &goal), 1);
    }

    #[test]
    fn manhattan_matches_hand_count() {
        let goal = goal3();
        let board = Board::from_flat(&[2, 0, 3, 1, 8, 5, 4, 7, 6]).unwrap();
        // Every tile except 3 is one cell away from home.
        assert_eq!(manhattan_cost(&board, &goal), 7);
        assert_eq!(mismatch_cost(&board, &goal), 8);
    }

    #[test]
    fn manhattan_on_fifteen_puzzle() {
        let goal = Goal::new(Board::solved(4), CombineRule::Max);
        let board =
            Board::from_flat(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 0, 14, 15]).unwrap();
        assert_eq!(manhattan_cost(&board, &goal), 2);
        assert_eq!(mismatch_cost(&board, &goal), 3);
    }

    #[test]
    fn combine_rules() {
        assert_eq!(CombineRule::Max.apply(3, 5), 5);
        assert_eq!(CombineRule::Sum.apply(3, 5), 8);
        assert_eq!(CombineRule::default(), CombineRule::Max);
    }

    #[test]
    fn selectors_read_state_fields() {
        let goal = std::rc::Rc::new(goal3());
        let board = Board::from_flat(&[1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        let root = PuzzleState::root(board, goal);
        let child = &root.expand_children(crate::state::StateId::ROOT)[0];

        assert_eq!(SearchType::Uniform.g(child), 0);
        assert_eq!(SearchType::Depth.g(child), 1);
        assert_eq!(Heuristic::Mismatch.h(&root), 2);
        assert_eq!(Heuristic::Manhattan.h(&root), 1);
        assert_eq!(Heuristic::Combined.h(&root), 2);
    }
}
