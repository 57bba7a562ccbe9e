//! Crossword fill constraint solver
//!
//! This library fills a fixed crossword structure from a word list by
//! enforcing node and arc consistency (AC-3) over per-slot domains and then
//! running backtracking search with MRV, degree, and least-constraining-value
//! heuristics.

pub mod config;
pub mod csp;
pub mod grid;
pub mod puzzle;
pub mod utils;

pub use config::Settings;
pub use puzzle::{CrosswordProblem, Solution};

use anyhow::Result;
use std::path::Path;

/// Load inputs, prune, and search; `Ok(None)` means no solution exists
pub fn solve_crossword<P: AsRef<Path>, Q: AsRef<Path>>(
    settings: Settings,
    structure_path: P,
    words_path: Q,
) -> Result<Option<Solution>> {
    puzzle::solve_files(settings, structure_path, words_path)
}
