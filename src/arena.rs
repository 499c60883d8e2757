//! Index-addressed storage for every state produced by one search.

use crate::puzzle::Move;
use crate::state::{PuzzleState, StateId};

/// Owns all states of a session. Parents are referenced by [`StateId`].
#[derive(Debug, Clone)]
pub struct StateArena {
    states: Vec<PuzzleState>,
    /// Children per state, `None` until that state is expanded.
    children: Vec<Option<Vec<StateId>>>,
}

impl StateArena {
    pub fn with_root(root: PuzzleState) -> Self {
        Self {
            states: vec![root],
            children: vec![None],
        }
    }

    pub fn get(&self, id: StateId) -> &PuzzleState {
        &self.states[id.0]
    }

    pub fn root(&self) -> &PuzzleState {
        self.get(StateId::ROOT)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn is_expanded(&self, id: StateId) -> bool {
        self.children[id.0].is_some()
    }

    pub fn children(&self, id: StateId) -> Option<&[StateId]> {
        self.children[id.0].as_deref()
    }

    /// Expand `id` and return its children.
    ///
    /// Children are generated on the first call only; later calls return the
    /// same ids.
    pub fn expand(&mut self, id: StateId) -> &[StateId] {
        if self.children[id.0].is_none() {
            let generated = self.states[id.0].expand_children(id);
            let mut ids = Vec::with_capacity(generated.len());
            for child in generated {
                ids.push(StateId(self.states.len()));
                self.states.push(child);
                self.children.push(None);
            }
            self.children[id.0] = Some(ids);
        }
        self.children[id.0].as_deref().unwrap_or_default()
    }

    /// State ids from the root to `id`, inclusive.
    pub fn lineage(&self, id: StateId) -> Vec<StateId> {
        let mut path = vec![id];
        let mut current = self.get(id);
        while let Some(parent) = current.parent() {
            path.push(parent);
            current = self.get(parent);
        }
        path.reverse();
        path
    }

    /// Moves that lead from the root to `id`.
    pub fn moves_to(&self, id: StateId) -> Vec<Move> {
        self.lineage(id)
            .into_iter()
            .filter_map(|step| self.get(step).move_label())
            .collect()
    }
}
