//! Best-first search over tile configurations.
//!
//! [`Session::seed`] validates one puzzle instance and builds its root state.
//! [`Session::search`] consumes the session and runs the loop:
//!
//! 1. Count an iteration; stop with [`Outcome::BudgetExceeded`] once the
//!    policy budget is spent.
//! 2. If the current state is the goal, stop with [`Outcome::Solved`].
//! 3. If its visited key is new, record it, expand it and push the children
//!    with priority `g + h`.
//! 4. Pop the next state; an empty frontier ends with
//!    [`Outcome::FrontierExhausted`].

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::rc::Rc;

use log::{debug, info, trace, warn};

use crate::arena::StateArena;
use crate::error::PuzzleError;
use crate::frontier::Frontier;
use crate::goal::Goal;
use crate::heuristic::{Heuristic, SearchType};
use crate::policy::{DedupKey, SearchPolicy, SolvabilityCheck};
use crate::puzzle::{Board, Move, Tile};
use crate::state::{PuzzleState, StateId};

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved {
        /// Moves from the start to the goal.
        depth: u32,
        expansions: u64,
        goal: StateId,
    },
    /// The parity pre-check rejected the start; no search ran.
    Unsolvable,
    BudgetExceeded { expansions: u64 },
    /// Every reachable key was expanded without meeting the goal.
    FrontierExhausted { expansions: u64 },
}

impl Outcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved { .. })
    }

    pub fn depth(&self) -> Option<u32> {
        match self {
            Outcome::Solved { depth, .. } => Some(*depth),
            _ => None,
        }
    }

    pub fn expansions(&self) -> u64 {
        match self {
            Outcome::Solved { expansions, .. }
            | Outcome::BudgetExceeded { expansions }
            | Outcome::FrontierExhausted { expansions } => *expansions,
            Outcome::Unsolvable => 0,
        }
    }
}

/// A seeded puzzle instance, ready to search once.
#[derive(Debug, Clone)]
pub struct Session {
    arena: StateArena,
    goal: Rc<Goal>,
    policy: SearchPolicy,
}

impl Session {
    /// Validate `puzzle` and `goal` and build the root state.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidConfiguration`] if either sequence is not
    /// a board, or their sizes differ, and [`PuzzleError::UnsupportedPolicy`]
    /// if `policy` does not validate.
    pub fn seed(puzzle: &[Tile], goal: &[Tile], policy: SearchPolicy) -> Result<Self, PuzzleError> {
        policy.validate()?;
        let start = Board::from_flat(puzzle)?;
        let goal = Goal::from_flat(goal, policy.combine)?;
        if start.size() != goal.size() {
            return Err(PuzzleError::invalid(format!(
                "start is {0}x{0} but goal is {1}x{1}",
                start.size(),
                goal.size()
            )));
        }

        debug!(
            "seeded {}x{} puzzle {:?}, blank at {:?}",
            start.size(),
            start.size(),
            puzzle,
            start.blank()
        );

        let goal = Rc::new(goal);
        let root = PuzzleState::root(start, Rc::clone(&goal));
        Ok(Self {
            arena: StateArena::with_root(root),
            goal,
            policy,
        })
    }

    pub fn root(&self) -> &PuzzleState {
        self.arena.root()
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    /// Result of the solvability pre-check under the session policy.
    pub fn is_solvable(&self) -> bool {
        match self.policy.solvability {
            SolvabilityCheck::Parity => self.root().board().can_reach(self.goal.board()),
            SolvabilityCheck::Disabled => true,
        }
    }

    pub fn search(self, search_type: SearchType, heuristic: Heuristic) -> SearchRun {
        let solvable = self.is_solvable();
        let Session {
            mut arena, policy, ..
        } = self;

        if !solvable {
            warn!("{search_type}/{heuristic}: start cannot reach goal, skipping search");
            return SearchRun {
                search_type,
                heuristic,
                outcome: Outcome::Unsolvable,
                arena,
                visited: 0,
                frontier_high_water: 0,
            };
        }

        let mut frontier = Frontier::new();
        let mut visited: BTreeMap<VisitedKey, StateId> = BTreeMap::new();
        let mut expansions: u64 = 0;
        let mut current = StateId::ROOT;

        let outcome = loop {
            if expansions >= policy.max_expansions {
                warn!(
                    "{search_type}/{heuristic}: budget of {} expansions exhausted",
                    policy.max_expansions
                );
                break Outcome::BudgetExceeded { expansions };
            }
            expansions += 1;

            let state = arena.get(current);
            if state.is_goal() {
                info!(
                    "search: {search_type}, heuristic: {heuristic}, steps: {}, expansions: {expansions}",
                    state.depth()
                );
                break Outcome::Solved {
                    depth: state.depth(),
                    expansions,
                    goal: current,
                };
            }

            let key = VisitedKey::new(state, search_type, policy.dedup_key);
            if let Entry::Vacant(slot) = visited.entry(key) {
                slot.insert(current);
                let children = arena.expand(current).to_vec();
                trace!("expanded {current} into {} children", children.len());
                for child in children {
                    let child_state = arena.get(child);
                    let priority = heuristic.h(child_state) + search_type.g(child_state);
                    frontier.push(child, priority);
                }
            }

            match frontier.pop() {
                Some(next) => current = next,
                None => {
                    warn!("{search_type}/{heuristic}: frontier exhausted after {expansions} expansions");
                    break Outcome::FrontierExhausted { expansions };
                }
            }
        };

        debug!(
            "{search_type}/{heuristic}: {} states generated, {} visited keys, frontier high water {}",
            arena.len(),
            visited.len(),
            frontier.high_water()
        );

        SearchRun {
            search_type,
            heuristic,
            outcome,
            visited: visited.len(),
            frontier_high_water: frontier.high_water(),
            arena,
        }
    }
}

/// Visited-set key: the tile sequence, plus the g-cost unless the policy
/// keys on configuration alone.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct VisitedKey {
    tiles: Vec<Tile>,
    cost: Option<u32>,
}

impl VisitedKey {
    fn new(state: &PuzzleState, search_type: SearchType, dedup: DedupKey) -> Self {
        let cost = match dedup {
            DedupKey::ConfigurationAndCost => Some(search_type.g(state)),
            DedupKey::ConfigurationOnly => None,
        };
        Self {
            tiles: state.board().to_flat(),
            cost,
        }
    }
}

/// The finished search, with every state it generated.
#[derive(Debug, Clone)]
pub struct SearchRun {
    search_type: SearchType,
    heuristic: Heuristic,
    outcome: Outcome,
    arena: StateArena,
    visited: usize,
    frontier_high_water: usize,
}

/// One step of a solution path.
#[derive(Debug, Clone, Copy)]
pub struct PathStep<'a> {
    pub board: &'a Board,
    /// The move that produced `board`; `None` for the start.
    pub via: Option<Move>,
}

impl SearchRun {
    pub fn search_type(&self) -> SearchType {
        self.search_type
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn arena(&self) -> &StateArena {
        &self.arena
    }

    /// Distinct visited keys recorded.
    pub fn visited(&self) -> usize {
        self.visited
    }

    pub fn frontier_high_water(&self) -> usize {
        self.frontier_high_water
    }

    /// Start-to-goal path, if the search succeeded.
    pub fn path(&self) -> Option<Vec<PathStep<'_>>> {
        let Outcome::Solved { goal, .. } = self.outcome else {
            return None;
        };
        Some(
            self.arena
                .lineage(goal)
                .into_iter()
                .map(|id| {
                    let state = self.arena.get(id);
                    PathStep {
                        board: state.board(),
                        via: state.move_label(),
                    }
                })
                .collect(),
        )
    }

    /// Moves of the solution, if any.
    pub fn moves(&self) -> Option<Vec<Move>> {
        match self.outcome {
            Outcome::Solved { goal, .. } => Some(self.arena.moves_to(goal)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOAL: [Tile; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

    fn run(puzzle: &[Tile], search_type: SearchType, heuristic: Heuristic) -> SearchRun {
        Session::seed(puzzle, &GOAL, SearchPolicy::default())
            .unwrap()
            .search(search_type, heuristic)
    }

    #[test]
    fn already_solved_is_depth_zero() {
        let run = run(&GOAL, SearchType::Depth, Heuristic::Manhattan);
        assert_eq!(run.outcome().depth(), Some(0));
        assert_eq!(run.outcome().expansions(), 1);
        assert_eq!(run.moves(), Some(vec![]));
    }

    #[test]
    fn one_move_solved_by_every_combination() {
        for search_type in SearchType::ALL {
            for heuristic in Heuristic::ALL {
                let run = run(&[1, 2, 3, 4, 5, 6, 7, 0, 8], search_type, heuristic);
                assert_eq!(run.outcome().depth(), Some(1), "{search_type}/{heuristic}");
                assert!(run.outcome().expansions() <= 2, "{search_type}/{heuristic}");
                assert_eq!(run.moves(), Some(vec![Move::Left]));
            }
        }
    }

    #[test]
    fn swapped_tiles_are_unsolvable() {
        let run = run(&[2, 1, 3, 4, 5, 6, 7, 8, 0], SearchType::Depth, Heuristic::Manhattan);
        assert_eq!(run.outcome(), Outcome::Unsolvable);
        assert_eq!(run.arena().len(), 1, "no state may be expanded");
        assert!(run.path().is_none());
    }

    #[test]
    fn budget_exceeded_is_reported() {
        let policy = SearchPolicy {
            max_expansions: 3,
            ..SearchPolicy::default()
        };
        let run = Session::seed(&[8, 7, 4, 5, 1, 3, 2, 6, 0], &GOAL, policy)
            .unwrap()
            .search(SearchType::Uniform, Heuristic::Mismatch);
        assert_eq!(run.outcome(), Outcome::BudgetExceeded { expansions: 3 });
    }

    #[test]
    fn disabled_parity_exhausts_reachable_space() {
        let policy = SearchPolicy {
            max_expansions: 1_000_000,
            dedup_key: DedupKey::ConfigurationOnly,
            solvability: SolvabilityCheck::Disabled,
            ..SearchPolicy::default()
        };
        let run = Session::seed(&[2, 1, 3, 4, 5, 6, 7, 8, 0], &GOAL, policy)
            .unwrap()
            .search(SearchType::Uniform, Heuristic::Manhattan);
        // Half of 9! configurations are reachable.
        assert_eq!(run.visited(), 181_440);
        assert!(matches!(run.outcome(), Outcome::FrontierExhausted { .. }));
    }

    #[test]
    fn seed_rejects_mismatched_sizes() {
        let goal15: Vec<Tile> = (1..16).chain([0]).collect();
        let err = Session::seed(&GOAL, &goal15, SearchPolicy::default()).unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidConfiguration { .. }));
    }

    #[test]
    fn seed_rejects_zero_budget() {
        let policy = SearchPolicy {
            max_expansions: 0,
            ..SearchPolicy::default()
        };
        assert!(Session::seed(&GOAL, &GOAL, policy).is_err());
    }

    #[test]
    fn visited_key_includes_cost_only_when_asked() {
        let goal = Rc::new(Goal::new(Board::solved(3), Default::default()));
        let root = PuzzleState::root(Board::solved(3), goal);
        let child = root.expand_children(StateId::ROOT).remove(0);
        let back = child
            .expand_children(StateId(1))
            .into_iter()
            .find(|s| s.board() == root.board())
            .unwrap();

        let with_cost =
            |s: &PuzzleState| VisitedKey::new(s, SearchType::Depth, DedupKey::ConfigurationAndCost);
        let without =
            |s: &PuzzleState| VisitedKey::new(s, SearchType::Depth, DedupKey::ConfigurationOnly);

        assert_ne!(with_cost(&root), with_cost(&back));
        assert_eq!(without(&root), without(&back));
        assert_eq!(
            VisitedKey::new(&root, SearchType::Uniform, DedupKey::ConfigurationAndCost),
            VisitedKey::new(&back, SearchType::Uniform, DedupKey::ConfigurationAndCost)
        );
    }

    #[test]
    fn no_key_is_expanded_twice() {
        let run = run(&[2, 0, 3, 1, 8, 5, 4, 7, 6], SearchType::Depth, Heuristic::Mismatch);
        assert!(run.outcome().is_solved());

        let arena = run.arena();
        let mut seen = std::collections::BTreeSet::new();
        for index in 0..arena.len() {
            let id = StateId(index);
            if arena.is_expanded(id) {
                let state = arena.get(id);
                let key = (state.board().to_flat(), state.depth());
                assert!(seen.insert(key), "{id} re-expanded an existing key");
            }
        }
        assert_eq!(seen.len(), run.visited());
    }
}
