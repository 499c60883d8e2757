//! Best-first frontier.
//!
//! Entries pop in ascending `(priority, insertion sequence)` order. That is
//! the same order a stable sort of the whole queue after every insertion
//! would produce, without re-sorting.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::state::StateId;

/// Frontier ordering key. Lower priority first; ties go to the earlier insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub priority: u32,
    pub sequence: u64,
}

/// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    id: StateId,
}

#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
    high_water: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: StateId, priority: u32) {
        let key = FrontierKey {
            priority,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            id,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    pub fn pop(&mut self) -> Option<StateId> {
        self.heap.pop().map(|entry| entry.id)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_returns_lowest_priority_first() {
        let mut frontier = Frontier::new();
        frontier.push(StateId(0), 10);
        frontier.push(StateId(1), 5);
        frontier.push(StateId(2), 15);

        assert_eq!(frontier.pop(), Some(StateId(1)));
        assert_eq!(frontier.pop(), Some(StateId(0)));
        assert_eq!(frontier.pop(), Some(StateId(2)));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut frontier = Frontier::new();
        frontier.push(StateId(4), 3);
        frontier.push(StateId(2), 3);
        frontier.push(StateId(9), 1);
        frontier.push(StateId(1), 3);

        let order: Vec<_> = std::iter::from_fn(|| frontier.pop()).collect();
        assert_eq!(order, vec![StateId(9), StateId(4), StateId(2), StateId(1)]);
    }

    #[test]
    fn matches_stable_resort_after_each_batch() {
        // Reference model: append, stable sort, pop front.
        let batches: [&[(usize, u32)]; 3] = [
            &[(1, 4), (2, 2), (3, 4)],
            &[(4, 2), (5, 1)],
            &[(6, 4), (7, 2), (8, 3)],
        ];
        let mut model: Vec<(usize, u32)> = Vec::new();
        let mut frontier = Frontier::new();

        for batch in batches {
            for &(id, priority) in batch {
                model.push((id, priority));
                frontier.push(StateId(id), priority);
            }
            model.sort_by_key(|&(_, priority)| priority);
            let expected = model.remove(0).0;
            assert_eq!(frontier.pop(), Some(StateId(expected)));
        }
    }

    #[test]
    fn high_water_tracks_max_size() {
        let mut frontier = Frontier::new();
        frontier.push(StateId(0), 1);
        frontier.push(StateId(1), 2);
        frontier.push(StateId(2), 3);
        assert_eq!(frontier.high_water(), 3);

        let _ = frontier.pop();
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.high_water(), 3, "high water should not decrease on pop");
    }
}
