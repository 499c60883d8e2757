use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;

use tile_search::batch::{self, all_combinations};
use tile_search::config::{PuzzleSet, RunConfig};
use tile_search::heuristic::{CombineRule, Heuristic, SearchType};
use tile_search::policy::{DedupKey, SolvabilityCheck};
use tile_search::report;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    Eight,
    Fifteen,
}

/// Solve sliding-tile puzzles with best-first search.
#[derive(Parser, Debug)]
#[command(name = "tile-search")]
struct Args {
    /// Built-in puzzle set, used when no --config is given
    #[arg(short, long, value_enum, default_value_t = Preset::Eight)]
    preset: Preset,

    /// JSON run configuration (goal, puzzles, optional policy)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Expansion budget per search
    #[arg(short, long)]
    budget: Option<u64>,

    /// Only run this search type
    #[arg(long, value_enum)]
    search_type: Option<SearchType>,

    /// Only run this heuristic
    #[arg(long, value_enum)]
    heuristic: Option<Heuristic>,

    /// Visited-set key
    #[arg(long, value_enum)]
    dedup: Option<DedupKey>,

    /// Combined-cost rule
    #[arg(long, value_enum)]
    combine: Option<CombineRule>,

    /// Skip the parity pre-check
    #[arg(long)]
    no_parity: bool,

    /// Print each solution path
    #[arg(long)]
    show_path: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RunConfig::load(path)
            .with_context(|| format!("loading run configuration from {}", path.display()))?,
        None => {
            let puzzles = match args.preset {
                Preset::Eight => PuzzleSet::eight_puzzle(),
                Preset::Fifteen => PuzzleSet::fifteen_puzzle(),
            };
            RunConfig::new(puzzles, Default::default())
        }
    };

    if let Some(budget) = args.budget {
        config.policy.max_expansions = budget;
    }
    if let Some(dedup) = args.dedup {
        config.policy.dedup_key = dedup;
    }
    if let Some(combine) = args.combine {
        config.policy.combine = combine;
    }
    if args.no_parity {
        config.policy.solvability = SolvabilityCheck::Disabled;
    }

    let combinations: Vec<_> = all_combinations()
        .into_iter()
        .filter(|(search_type, heuristic)| {
            args.search_type.map_or(true, |wanted| wanted == *search_type)
                && args.heuristic.map_or(true, |wanted| wanted == *heuristic)
        })
        .collect();

    info!(
        "running {} instances of '{}' under {} combinations, policy {:?}",
        config.puzzles.puzzles.len(),
        config.puzzles.name,
        combinations.len(),
        config.policy
    );

    let result = batch::solve(&config, &combinations).context("running batch")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_batch(&mut out, &result, args.show_path).context("writing report")?;
    out.flush()?;

    Ok(())
}
