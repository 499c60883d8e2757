//! Search tree nodes.

use std::fmt;
use std::rc::Rc;

use crate::goal::Goal;
use crate::heuristic::{manhattan_cost, mismatch_cost};
use crate::puzzle::{Board, Move};

/// Index of a state in its [`crate::arena::StateArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// The root is always the first state of a session.
    pub const ROOT: StateId = StateId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A board snapshot with its costs, fixed at construction.
///
/// `parent` is an arena index used only for path reconstruction.
#[derive(Debug, Clone)]
pub struct PuzzleState {
    board: Board,
    goal: Rc<Goal>,
    depth: u32,
    mismatch_cost: u32,
    manhattan_cost: u32,
    combined_cost: u32,
    parent: Option<StateId>,
    move_label: Option<Move>,
}

impl PuzzleState {
    pub fn root(board: Board, goal: Rc<Goal>) -> Self {
        Self::new(board, goal, 0, None, None)
    }

    fn new(
        board: Board,
        goal: Rc<Goal>,
        depth: u32,
        parent: Option<StateId>,
        move_label: Option<Move>,
    ) -> Self {
        let mismatch_cost = mismatch_cost(&board, &goal);
        let manhattan_cost = manhattan_cost(&board, &goal);
        let combined_cost = goal.combine().apply(mismatch_cost, manhattan_cost);

        Self {
            board,
            goal,
            depth,
            mismatch_cost,
            manhattan_cost,
            combined_cost,
            parent,
            move_label,
        }
    }

    /// One child per legal move, in [`Move::ALL`] order.
    ///
    /// `own_id` is this state's arena index, recorded as each child's parent.
    /// Yields 2 children for a corner blank, 3 for an edge, 4 for an interior cell.
    pub fn expand_children(&self, own_id: StateId) -> Vec<PuzzleState> {
        Move::ALL
            .iter()
            .filter_map(|&dir| {
                self.board.try_move(dir).map(|child| {
                    PuzzleState::new(
                        child,
                        Rc::clone(&self.goal),
                        self.depth + 1,
                        Some(own_id),
                        Some(dir),
                    )
                })
            })
            .collect()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    pub fn blank_position(&self) -> (usize, usize) {
        self.board.blank()
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn mismatch_cost(&self) -> u32 {
        self.mismatch_cost
    }

    pub fn manhattan_cost(&self) -> u32 {
        self.manhattan_cost
    }

    pub fn combined_cost(&self) -> u32 {
        self.combined_cost
    }

    pub fn parent(&self) -> Option<StateId> {
        self.parent
    }

    /// The move that produced this state; `None` for the root.
    pub fn move_label(&self) -> Option<Move> {
        self.move_label
    }

    pub fn is_goal(&self) -> bool {
        self.goal.is_reached_by(&self.board)
    }
}
