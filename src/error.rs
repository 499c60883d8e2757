//! Typed errors.
//!
//! `PuzzleError` covers rejected input at the ingestion boundary. Search
//! results that are not a solution (unsolvable input, exhausted budget) are
//! not errors; they are reported through [`crate::search::Outcome`].

use std::fmt;

/// Failure to accept a puzzle instance or a search policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Wrong length, non-permutation, or start and goal of different sizes.
    InvalidConfiguration { detail: String },
    /// A policy value the engine cannot run with.
    UnsupportedPolicy { detail: String },
}

impl PuzzleError {
    pub(crate) fn invalid(detail: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            detail: detail.into(),
        }
    }
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { detail } => {
                write!(f, "invalid puzzle configuration: {detail}")
            }
            Self::UnsupportedPolicy { detail } => write!(f, "unsupported search policy: {detail}"),
        }
    }
}

impl std::error::Error for PuzzleError {}

/// Failure to load a run configuration from disk.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: String,
        source: std::io::Error,
    },
    Parse {
        path: String,
        source: serde_json::Error,
    },
    /// The file parsed but describes an unusable puzzle set.
    Puzzle(PuzzleError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, .. } => write!(f, "cannot read puzzle set {path}"),
            Self::Parse { path, .. } => write!(f, "cannot parse puzzle set {path}"),
            Self::Puzzle(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Puzzle(err) => Some(err),
        }
    }
}

impl From<PuzzleError> for ConfigError {
    fn from(err: PuzzleError) -> Self {
        Self::Puzzle(err)
    }
}
