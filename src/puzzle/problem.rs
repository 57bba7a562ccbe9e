//! Crossword fill problem orchestration

use super::{Solution, SolutionValidator};
use crate::config::Settings;
use crate::csp::{
    ac3, enforce_node_consistency, Crossword, DomainStore, SearchOptions, Searcher, Variable,
};
use crate::grid::{load_structure_from_file, load_words_from_file};
use anyhow::{Context, Result};
use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};

/// A crossword fill problem: settings plus the immutable constraint model
pub struct CrosswordProblem {
    settings: Settings,
    crossword: Crossword,
}

impl CrosswordProblem {
    /// Create a problem by loading structure and word-list files
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(
        settings: Settings,
        structure_path: P,
        words_path: Q,
    ) -> Result<Self> {
        let grid =
            load_structure_from_file(&structure_path).context("Failed to load structure")?;
        let words = load_words_from_file(&words_path).context("Failed to load word list")?;

        Ok(Self::with_crossword(settings, Crossword::new(grid, words)))
    }

    /// Create a problem from an already-built model (useful for testing)
    pub fn with_crossword(settings: Settings, crossword: Crossword) -> Self {
        Self {
            settings,
            crossword,
        }
    }

    /// Prune domains and search for a satisfying assignment
    ///
    /// `Ok(None)` means the puzzle is unsatisfiable (or the configured
    /// timeout expired); that is an expected outcome, not an error.
    pub fn solve(&self) -> Result<Option<Solution>> {
        let start_time = Instant::now();

        let mut domains = DomainStore::new(&self.crossword);
        enforce_node_consistency(&self.crossword, &mut domains);

        if !ac3(&self.crossword, &mut domains, None) {
            return Ok(None);
        }

        let options = SearchOptions {
            deadline: self
                .settings
                .solver
                .timeout_seconds
                .map(|secs| Instant::now() + Duration::from_secs(secs)),
            parallel_root: self.settings.solver.parallel_root,
        };

        let searcher = Searcher::new(&self.crossword, &domains, options);
        let Some(assignment) = searcher.solve() else {
            return Ok(None);
        };

        let validation = SolutionValidator::validate(&self.crossword, &assignment);
        if !validation.is_valid {
            anyhow::bail!("Search produced an invalid assignment: {}", validation);
        }

        Ok(Some(Solution::new(
            &self.crossword,
            &assignment,
            start_time.elapsed(),
        )))
    }

    /// Slot and domain statistics after the initial consistency pass, without
    /// running the search
    pub fn analyze(&self) -> PuzzleAnalysis {
        let mut domains = DomainStore::new(&self.crossword);
        enforce_node_consistency(&self.crossword, &mut domains);
        let arc_consistent = ac3(&self.crossword, &mut domains, None);

        let domain_sizes = self
            .crossword
            .variables()
            .iter()
            .enumerate()
            .map(|(id, &var)| (var, domains.len(id)))
            .collect();

        PuzzleAnalysis {
            slot_count: self.crossword.var_count(),
            overlap_count: self.crossword.overlap_count(),
            word_count: self.crossword.words().len(),
            arc_consistent,
            domain_sizes,
        }
    }

    pub fn crossword(&self) -> &Crossword {
        &self.crossword
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

/// Pre-search statistics for a puzzle
#[derive(Debug, Clone)]
pub struct PuzzleAnalysis {
    pub slot_count: usize,
    pub overlap_count: usize,
    pub word_count: usize,
    /// False when propagation alone already proves unsatisfiability
    pub arc_consistent: bool,
    /// Post-propagation candidate count per slot
    pub domain_sizes: Vec<(Variable, usize)>,
}

impl fmt::Display for PuzzleAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Puzzle Analysis:")?;
        writeln!(f, "  Slots: {}", self.slot_count)?;
        writeln!(f, "  Crossings: {}", self.overlap_count)?;
        writeln!(f, "  Words: {}", self.word_count)?;
        if self.arc_consistent {
            writeln!(f, "  Domains after propagation:")?;
            for (var, size) in &self.domain_sizes {
                writeln!(f, "    {}: {} candidates", var, size)?;
            }
        } else {
            writeln!(f, "  Unsatisfiable: propagation emptied a domain")?;
        }
        Ok(())
    }
}

/// Load inputs and run the whole pipeline in one call
pub fn solve_files<P: AsRef<Path>, Q: AsRef<Path>>(
    settings: Settings,
    structure_path: P,
    words_path: Q,
) -> Result<Option<Solution>> {
    CrosswordProblem::new(settings, structure_path, words_path)?.solve()
}
