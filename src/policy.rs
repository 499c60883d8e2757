//! Search policy: budget, dedup key and solvability pre-check.

use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;
use crate::heuristic::CombineRule;

/// Default cap on loop iterations per search.
pub const DEFAULT_MAX_EXPANSIONS: u64 = 300_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPolicy {
    /// Hard cap on loop iterations, root pop included.
    pub max_expansions: u64,
    pub dedup_key: DedupKey,
    pub solvability: SolvabilityCheck,
    /// Rule behind [`crate::heuristic::Heuristic::Combined`].
    pub combine: CombineRule,
}

impl SearchPolicy {
    /// # Errors
    ///
    /// Returns [`PuzzleError::UnsupportedPolicy`] for a zero budget.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.max_expansions == 0 {
            return Err(PuzzleError::UnsupportedPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            dedup_key: DedupKey::ConfigurationAndCost,
            solvability: SolvabilityCheck::Parity,
            combine: CombineRule::Max,
        }
    }
}

/// What identifies a state in the visited set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DedupKey {
    /// Tile sequence plus the state's g-cost. The same board reached at a
    /// different depth under [`crate::heuristic::SearchType::Depth`] is
    /// expanded again.
    #[default]
    ConfigurationAndCost,
    /// Tile sequence only (textbook closed list).
    ConfigurationOnly,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolvabilityCheck {
    /// Compare permutation parity of start and goal before searching.
    #[default]
    Parity,
    /// Treat every input as solvable. Unreachable goals then run until the
    /// budget or the frontier runs out.
    Disabled,
}
