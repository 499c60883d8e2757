//! Runs every instance of a puzzle set under each search combination.

use log::info;

use crate::config::RunConfig;
use crate::error::PuzzleError;
use crate::heuristic::{Heuristic, SearchType};
use crate::puzzle::{Move, Tile};
use crate::search::{Outcome, Session};

/// A `(search_type, heuristic)` pair.
pub type Combination = (SearchType, Heuristic);

/// All six combinations, search type major.
pub fn all_combinations() -> Vec<Combination> {
    SearchType::ALL
        .iter()
        .flat_map(|&search_type| {
            Heuristic::ALL
                .iter()
                .map(move |&heuristic| (search_type, heuristic))
        })
        .collect()
}

/// One instance under one combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    /// Index into the puzzle set.
    pub instance: usize,
    pub start: Vec<Tile>,
    pub outcome: Outcome,
    /// Solution moves when solved.
    pub moves: Option<Vec<Move>>,
}

/// Every instance under one combination, with averages.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinationReport {
    pub search_type: SearchType,
    pub heuristic: Heuristic,
    pub runs: Vec<RunRecord>,
}

impl CombinationReport {
    pub fn solved(&self) -> usize {
        self.runs.iter().filter(|run| run.outcome.is_solved()).count()
    }

    /// Mean solution depth; unsolved runs count as zero.
    pub fn average_depth(&self) -> f64 {
        self.mean(|run| run.outcome.depth().unwrap_or(0) as f64)
    }

    pub fn average_expansions(&self) -> f64 {
        self.mean(|run| run.outcome.expansions() as f64)
    }

    fn mean(&self, value: impl Fn(&RunRecord) -> f64) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        self.runs.iter().map(value).sum::<f64>() / self.runs.len() as f64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub name: String,
    pub combinations: Vec<CombinationReport>,
}

/// Search every instance of `config` under each of `combinations`, in order.
///
/// # Errors
///
/// Returns the first [`PuzzleError`] raised while seeding an instance.
pub fn solve(
    config: &RunConfig,
    combinations: &[Combination],
) -> Result<BatchReport, PuzzleError> {
    config.puzzles.validate()?;

    let mut reports = Vec::with_capacity(combinations.len());
    for &(search_type, heuristic) in combinations {
        let mut runs = Vec::with_capacity(config.puzzles.puzzles.len());
        for (instance, puzzle) in config.puzzles.puzzles.iter().enumerate() {
            let session = Session::seed(puzzle, &config.puzzles.goal, config.policy)?;
            let run = session.search(search_type, heuristic);
            runs.push(RunRecord {
                instance,
                start: puzzle.clone(),
                outcome: run.outcome(),
                moves: run.moves(),
            });
        }

        let report = CombinationReport {
            search_type,
            heuristic,
            runs,
        };
        info!(
            "{search_type}/{heuristic}: average steps {:.2}, average expansions {:.2}, solved {}/{}",
            report.average_depth(),
            report.average_expansions(),
            report.solved(),
            report.runs.len()
        );
        reports.push(report);
    }

    Ok(BatchReport {
        name: config.puzzles.name.clone(),
        combinations: reports,
    })
}
