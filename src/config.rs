//! Puzzle sets and run configuration.
//!
//! A run configuration is read from JSON:
//!
//! ```json
//! {
//!   "name": "eight",
//!   "goal": [1, 2, 3, 4, 5, 6, 7, 8, 0],
//!   "puzzles": [[1, 2, 3, 7, 5, 0, 6, 8, 4]],
//!   "policy": { "max_expansions": 300000, "combine": "max" }
//! }
//! ```
//!
//! `name` and `policy` may be omitted.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, PuzzleError};
use crate::policy::SearchPolicy;
use crate::puzzle::{Board, Tile};

/// Scrambled instances sharing one goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleSet {
    #[serde(default)]
    pub name: String,
    pub goal: Vec<Tile>,
    pub puzzles: Vec<Vec<Tile>>,
}

impl PuzzleSet {
    /// Five 8-puzzle instances against the standard goal.
    pub fn eight_puzzle() -> Self {
        Self {
            name: "eight".into(),
            goal: Board::solved(3).to_flat(),
            puzzles: vec![
                vec![1, 2, 3, 7, 5, 0, 6, 8, 4],
                vec![2, 0, 3, 1, 8, 5, 4, 7, 6],
                vec![7, 2, 5, 0, 1, 4, 6, 3, 8],
                vec![5, 7, 0, 2, 1, 3, 8, 4, 6],
                vec![8, 7, 4, 5, 1, 3, 2, 6, 0],
            ],
        }
    }

    /// Five 15-puzzle instances against the standard goal.
    pub fn fifteen_puzzle() -> Self {
        Self {
            name: "fifteen".into(),
            goal: Board::solved(4).to_flat(),
            puzzles: vec![
                vec![5, 2, 11, 3, 7, 1, 15, 4, 9, 13, 8, 0, 14, 6, 10, 12],
                vec![5, 2, 11, 3, 7, 1, 15, 4, 9, 13, 0, 8, 14, 6, 10, 12],
                vec![5, 2, 11, 3, 7, 1, 0, 4, 9, 13, 15, 8, 14, 6, 10, 12],
                vec![5, 2, 0, 3, 7, 1, 11, 4, 9, 13, 15, 8, 14, 6, 10, 12],
                vec![5, 1, 2, 3, 7, 0, 11, 4, 9, 13, 15, 8, 14, 6, 10, 12],
            ],
        }
    }

    /// Check that the goal and every instance are boards of the same size.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidConfiguration`] naming the first bad entry.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.puzzles.is_empty() {
            return Err(PuzzleError::invalid(format!(
                "puzzle set '{}' has no instances",
                self.name
            )));
        }
        let goal = Board::from_flat(&self.goal)?;
        for (index, puzzle) in self.puzzles.iter().enumerate() {
            let board = Board::from_flat(puzzle).map_err(|err| {
                PuzzleError::invalid(format!("instance {index}: {err}"))
            })?;
            if board.size() != goal.size() {
                return Err(PuzzleError::invalid(format!(
                    "instance {index} has {} tiles, goal has {}",
                    puzzle.len(),
                    self.goal.len()
                )));
            }
        }
        Ok(())
    }
}

/// Everything a batch needs: the instances and the search policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(flatten)]
    pub puzzles: PuzzleSet,
    #[serde(default)]
    pub policy: SearchPolicy,
}

impl RunConfig {
    pub fn new(puzzles: PuzzleSet, policy: SearchPolicy) -> Self {
        Self { puzzles, policy }
    }

    /// Parse and validate a JSON run configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Puzzle`] if the content fails validation.
    pub fn from_json(text: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: RunConfig = serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })?;
        config.puzzles.validate()?;
        config.policy.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// As [`RunConfig::from_json`], plus [`ConfigError::Io`] if the file
    /// cannot be read.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let origin = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: origin.clone(),
            source,
        })?;
        Self::from_json(&text, &origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::DedupKey;

    #[test]
    fn presets_are_valid() {
        assert!(PuzzleSet::eight_puzzle().validate().is_ok());
        assert!(PuzzleSet::fifteen_puzzle().validate().is_ok());
    }

    #[test]
    fn presets_are_solvable() {
        for set in [PuzzleSet::eight_puzzle(), PuzzleSet::fifteen_puzzle()] {
            let goal = Board::from_flat(&set.goal).unwrap();
            for puzzle in &set.puzzles {
                let board = Board::from_flat(puzzle).unwrap();
                assert!(board.can_reach(&goal), "{puzzle:?} in {}", set.name);
            }
        }
    }

    #[test]
    fn from_json_with_defaults() {
        let config = RunConfig::from_json(
            r#"{ "goal": [1,2,3,4,5,6,7,8,0], "puzzles": [[1,2,3,4,5,6,7,0,8]] }"#,
            "inline",
        )
        .unwrap();
        assert_eq!(config.puzzles.puzzles.len(), 1);
        assert_eq!(config.policy, SearchPolicy::default());
        assert!(config.puzzles.name.is_empty());
    }

    #[test]
    fn from_json_reads_policy() {
        let config = RunConfig::from_json(
            r#"{
                "name": "tiny",
                "goal": [1,2,3,4,5,6,7,8,0],
                "puzzles": [[1,2,3,4,5,6,7,0,8]],
                "policy": { "max_expansions": 10, "dedup_key": "configuration_only" }
            }"#,
            "inline",
        )
        .unwrap();
        assert_eq!(config.policy.max_expansions, 10);
        assert_eq!(config.policy.dedup_key, DedupKey::ConfigurationOnly);
    }

    #[test]
    fn from_json_rejects_bad_instance() {
        let err = RunConfig::from_json(
            r#"{ "goal": [1,2,3,4,5,6,7,8,0], "puzzles": [[1,2,3,4,5,6,7,8,8]] }"#,
            "inline",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Puzzle(_)));
        assert!(err.to_string().contains("instance 0"));
    }

    #[test]
    fn from_json_rejects_mixed_sizes() {
        let set = PuzzleSet {
            name: "mixed".into(),
            goal: Board::solved(3).to_flat(),
            puzzles: vec![Board::solved(4).to_flat()],
        };
        assert!(set.validate().is_err());
    }

    #[test]
    fn from_json_rejects_syntax_errors() {
        let err = RunConfig::from_json("{ not json", "broken.json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.to_string(), "cannot parse puzzle set broken.json");
    }

    #[test]
    fn load_reports_missing_file() {
        let err = RunConfig::load(Path::new("/nonexistent/puzzles.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn empty_set_rejected() {
        let set = PuzzleSet {
            name: "none".into(),
            goal: Board::solved(3).to_flat(),
            puzzles: vec![],
        };
        assert!(set.validate().is_err());
    }
}
