//! Console rendering of batch results.

use std::io::{self, Write};

use crossterm::style::{style, Stylize};

use crate::batch::{BatchReport, CombinationReport, RunRecord};
use crate::heuristic::{Heuristic, SearchType};
use crate::puzzle::{Board, Move};
use crate::search::Outcome;

pub fn write_run(
    out: &mut impl Write,
    search_type: SearchType,
    heuristic: Heuristic,
    run: &RunRecord,
) -> io::Result<()> {
    write!(out, "search: {search_type}, heuristic: {heuristic}, ")?;
    match run.outcome {
        Outcome::Solved {
            depth, expansions, ..
        } => writeln!(out, "steps: {depth}, expansions: {expansions}"),
        Outcome::Unsolvable => writeln!(out, "{}", style("unsolvable").red()),
        Outcome::BudgetExceeded { expansions } => writeln!(
            out,
            "{} after {expansions} expansions",
            style("budget exceeded").yellow()
        ),
        Outcome::FrontierExhausted { expansions } => writeln!(
            out,
            "{} after {expansions} expansions",
            style("frontier exhausted").yellow()
        ),
    }
}

/// Replay `moves` from `start`, printing each board with the move that led to it.
pub fn write_path(out: &mut impl Write, start: &Board, moves: &[Move]) -> io::Result<()> {
    let mut board = start.clone();
    writeln!(out, "start\n{board}")?;
    for &item in moves {
        board.apply_move(item);
        writeln!(out, "{}\n{board}", style(item).cyan())?;
    }
    Ok(())
}

pub fn write_combination(out: &mut impl Write, combo: &CombinationReport) -> io::Result<()> {
    writeln!(
        out,
        "average number of steps: {:.2}, average number of expansions: {:.2} ({}/{} solved)",
        combo.average_depth(),
        combo.average_expansions(),
        combo.solved(),
        combo.runs.len()
    )?;
    writeln!(out, "------------------")
}

pub fn write_batch(out: &mut impl Write, report: &BatchReport, show_path: bool) -> io::Result<()> {
    if !report.name.is_empty() {
        writeln!(out, "{}", style(format!("puzzle set: {}", report.name)).bold())?;
    }
    for combo in &report.combinations {
        writeln!(
            out,
            "{}",
            style(format!("{} / {}", combo.search_type, combo.heuristic)).bold()
        )?;
        for run in &combo.runs {
            write_run(out, combo.search_type, combo.heuristic, run)?;
            if show_path {
                if let (Some(moves), Ok(start)) = (&run.moves, Board::from_flat(&run.start)) {
                    write_path(out, &start, moves)?;
                }
            }
        }
        write_combination(out, combo)?;
        writeln!(out)?;
    }
    Ok(())
}
