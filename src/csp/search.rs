//! Backtracking search with MRV, degree, and least-constraining-value heuristics

use super::domains::DomainStore;
use super::variables::{Crossword, VarId};
use crate::grid::WordId;
use rayon::prelude::*;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::time::Instant;

/// A partial binding of variables to words, with exact undo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    bindings: Vec<Option<WordId>>,
    bound: usize,
}

impl Assignment {
    pub fn new(var_count: usize) -> Self {
        Self {
            bindings: vec![None; var_count],
            bound: 0,
        }
    }

    /// Tentatively bind a variable to a word
    pub fn bind(&mut self, var: VarId, word: WordId) {
        debug_assert!(self.bindings[var].is_none(), "variable bound twice");
        self.bindings[var] = Some(word);
        self.bound += 1;
    }

    /// Undo a trial binding
    pub fn unbind(&mut self, var: VarId) {
        debug_assert!(self.bindings[var].is_some(), "unbinding an unbound variable");
        self.bindings[var] = None;
        self.bound -= 1;
    }

    pub fn get(&self, var: VarId) -> Option<WordId> {
        self.bindings[var]
    }

    pub fn is_bound(&self, var: VarId) -> bool {
        self.bindings[var].is_some()
    }

    /// Every variable bound to a word
    pub fn is_complete(&self) -> bool {
        self.bound == self.bindings.len()
    }

    /// All (variable, word) pairs bound so far, in variable order
    pub fn bound_pairs(&self) -> impl Iterator<Item = (VarId, WordId)> + '_ {
        self.bindings
            .iter()
            .enumerate()
            .filter_map(|(var, binding)| binding.map(|word| (var, word)))
    }
}

/// Knobs for a single search run
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Abort and report failure once this instant passes
    pub deadline: Option<Instant>,
    /// Explore the root variable's candidates on a rayon pool
    pub parallel_root: bool,
}

/// Depth-first backtracking over the post-propagation domains
///
/// Domains are read-only during search; pruning happens once up front in the
/// consistency engine, not between search steps. The `consistent` predicate
/// provides forward checking against bound neighbors only.
pub struct Searcher<'a> {
    crossword: &'a Crossword,
    domains: &'a DomainStore,
    options: SearchOptions,
}

impl<'a> Searcher<'a> {
    pub fn new(crossword: &'a Crossword, domains: &'a DomainStore, options: SearchOptions) -> Self {
        Self {
            crossword,
            domains,
            options,
        }
    }

    /// Run the search; `None` means no satisfying assignment exists (or the
    /// deadline expired)
    pub fn solve(&self) -> Option<Assignment> {
        if self.options.parallel_root {
            return self.solve_parallel_root();
        }

        let mut assignment = Assignment::new(self.crossword.var_count());
        if self.backtrack(&mut assignment) {
            Some(assignment)
        } else {
            None
        }
    }

    /// Split the first variable's candidates across a rayon pool
    ///
    /// Each branch owns a cloned assignment; `find_map_first` keeps the
    /// leftmost success, so the result matches the sequential search.
    fn solve_parallel_root(&self) -> Option<Assignment> {
        let root = Assignment::new(self.crossword.var_count());
        if root.is_complete() {
            return Some(root);
        }

        let Some(var) = self.select_unassigned_variable(&root) else {
            return Some(root);
        };

        self.order_domain_values(var, &root)
            .into_par_iter()
            .find_map_first(|word| {
                let mut assignment = root.clone();
                assignment.bind(var, word);
                if self.consistent(&assignment) && self.backtrack(&mut assignment) {
                    Some(assignment)
                } else {
                    None
                }
            })
    }

    fn backtrack(&self, assignment: &mut Assignment) -> bool {
        if self.deadline_expired() {
            return false;
        }
        if assignment.is_complete() {
            return true;
        }

        let Some(var) = self.select_unassigned_variable(assignment) else {
            return true;
        };

        for word in self.order_domain_values(var, assignment) {
            assignment.bind(var, word);
            if self.consistent(assignment) && self.backtrack(assignment) {
                return true;
            }
            assignment.unbind(var);
        }

        false
    }

    fn deadline_expired(&self) -> bool {
        self.options
            .deadline
            .is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// MRV with degree tie-break, then canonical variable order
    pub fn select_unassigned_variable(&self, assignment: &Assignment) -> Option<VarId> {
        (0..self.crossword.var_count())
            .filter(|&var| !assignment.is_bound(var))
            .min_by_key(|&var| {
                (
                    self.domains.len(var),
                    Reverse(self.crossword.degree(var)),
                    var,
                )
            })
    }

    /// Candidates ordered by how few options they eliminate from unassigned
    /// neighbors' domains; ties stay in word order
    pub fn order_domain_values(&self, var: VarId, assignment: &Assignment) -> Vec<WordId> {
        let mut candidates = self.domains.candidates(var);
        candidates.sort_by_key(|&word| self.ruled_out_count(var, word, assignment));
        candidates
    }

    /// How many neighbor-domain words binding `var` to `word` would rule out
    fn ruled_out_count(&self, var: VarId, word: WordId, assignment: &Assignment) -> usize {
        let words = self.crossword.words();
        self.crossword
            .neighbors(var)
            .iter()
            .filter(|&&neighbor| !assignment.is_bound(neighbor))
            .map(|&neighbor| {
                let Some((i, j)) = self.crossword.overlap(var, neighbor) else {
                    return 0;
                };
                let Some(&ch) = words.glyphs(word).get(i) else {
                    return self.domains.len(neighbor);
                };
                self.domains
                    .domain(neighbor)
                    .iter()
                    .filter(|&&other| words.glyphs(other).get(j) != Some(&ch))
                    .count()
            })
            .sum()
    }

    /// Whether the partial assignment violates any constraint: bound words
    /// must be pairwise distinct, match their slot lengths, and agree at
    /// every overlap between bound neighbors
    pub fn consistent(&self, assignment: &Assignment) -> bool {
        let words = self.crossword.words();
        let mut seen = HashSet::new();

        for (var, word) in assignment.bound_pairs() {
            if !seen.insert(word) {
                return false;
            }
            if words.char_len(word) != self.crossword.variable(var).length {
                return false;
            }
        }

        for (var, word) in assignment.bound_pairs() {
            for &neighbor in self.crossword.neighbors(var) {
                let Some(other) = assignment.get(neighbor) else {
                    continue;
                };
                let Some((i, j)) = self.crossword.overlap(var, neighbor) else {
                    continue;
                };
                if words.glyphs(word).get(i) != words.glyphs(other).get(j) {
                    return false;
                }
            }
        }

        true
    }
}
