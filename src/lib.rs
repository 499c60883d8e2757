//! Best-first search for the 8-puzzle and 15-puzzle.
//!
//! A [`search::Session`] is seeded with one scrambled board and a goal, then
//! searched once under a [`heuristic::SearchType`] (g-cost) and a
//! [`heuristic::Heuristic`] (h-cost). [`batch::solve`] runs a whole
//! [`config::PuzzleSet`] under several combinations and averages the results.
//!
//! ```
//! use tile_search::heuristic::{Heuristic, SearchType};
//! use tile_search::policy::SearchPolicy;
//! use tile_search::search::Session;
//!
//! let session = Session::seed(
//!     &[1, 2, 3, 4, 5, 6, 7, 0, 8],
//!     &[1, 2, 3, 4, 5, 6, 7, 8, 0],
//!     SearchPolicy::default(),
//! )
//! .unwrap();
//! let run = session.search(SearchType::Depth, Heuristic::Manhattan);
//! assert_eq!(run.outcome().depth(), Some(1));
//! ```

#![forbid(unsafe_code)]

pub mod arena;
pub mod batch;
pub mod config;
pub mod error;
pub mod frontier;
pub mod goal;
pub mod heuristic;
pub mod policy;
pub mod puzzle;
pub mod report;
pub mod search;
pub mod state;
