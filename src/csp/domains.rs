//! Per-variable candidate domains

use super::variables::{Crossword, VarId};
use crate::grid::WordId;
use std::collections::BTreeSet;

/// Mutable candidate sets, one per variable
///
/// Initialized to the full word list and only ever shrunk by the consistency
/// engine. `BTreeSet` keeps iteration in word-id order, which is word order,
/// so everything downstream is deterministic.
#[derive(Debug, Clone)]
pub struct DomainStore {
    domains: Vec<BTreeSet<WordId>>,
}

impl DomainStore {
    /// Give every variable the entire word list as its starting domain
    pub fn new(crossword: &Crossword) -> Self {
        let full: BTreeSet<WordId> = crossword.words().ids().collect();
        Self {
            domains: vec![full; crossword.var_count()],
        }
    }

    /// Current candidate set of a variable
    pub fn domain(&self, var: VarId) -> &BTreeSet<WordId> {
        &self.domains[var]
    }

    /// Number of remaining candidates
    pub fn len(&self, var: VarId) -> usize {
        self.domains[var].len()
    }

    /// Whether the domain has been wiped out
    pub fn is_empty(&self, var: VarId) -> bool {
        self.domains[var].is_empty()
    }

    pub fn contains(&self, var: VarId, word: WordId) -> bool {
        self.domains[var].contains(&word)
    }

    /// Remove a single candidate; returns whether it was present
    pub fn remove(&mut self, var: VarId, word: WordId) -> bool {
        self.domains[var].remove(&word)
    }

    /// Keep only candidates satisfying the predicate
    pub fn retain<F>(&mut self, var: VarId, mut keep: F)
    where
        F: FnMut(WordId) -> bool,
    {
        self.domains[var].retain(|&word| keep(word));
    }

    /// Remaining candidates in word order
    pub fn candidates(&self, var: VarId) -> Vec<WordId> {
        self.domains[var].iter().copied().collect()
    }
}
