//! Slot variables, overlaps, and the crossword constraint model

use crate::grid::{Grid, WordList};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Reading direction of a slot
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Across,
    Down,
}

/// A slot in the grid: a maximal run of fillable cells in one direction
///
/// Identity is (row, col, orientation, length), and the derived `Ord` on that
/// field order is the canonical variable ordering used for deterministic
/// tie-breaking throughout the solver.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Variable {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub length: usize,
}

impl Variable {
    /// Grid coordinates of the slot's k-th cell
    pub fn cell(&self, k: usize) -> (usize, usize) {
        match self.orientation {
            Orientation::Across => (self.row, self.col + k),
            Orientation::Down => (self.row + k, self.col),
        }
    }

    /// All cells covered by the slot, in reading order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |k| self.cell(k))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.orientation {
            Orientation::Across => "across",
            Orientation::Down => "down",
        };
        write!(
            f,
            "({}, {}) {} length {}",
            self.row, self.col, direction, self.length
        )
    }
}

/// Index of a variable within a [`Crossword`] model
pub type VarId = usize;

/// The immutable constraint model: structure, word list, slots, and the
/// precomputed overlap relation
#[derive(Debug, Clone)]
pub struct Crossword {
    grid: Grid,
    words: WordList,
    variables: Vec<Variable>,
    overlaps: HashMap<(VarId, VarId), (usize, usize)>,
    neighbors: Vec<Vec<VarId>>,
}

impl Crossword {
    /// Derive the slot set and overlap relation from a structure grid
    pub fn new(grid: Grid, words: WordList) -> Self {
        let variables = find_slots(&grid);

        let mut overlaps = HashMap::new();
        let mut neighbors = vec![Vec::new(); variables.len()];

        for (x, y) in (0..variables.len()).tuple_combinations() {
            if let Some((i, j)) = overlap_between(&variables[x], &variables[y]) {
                overlaps.insert((x, y), (i, j));
                overlaps.insert((y, x), (j, i));
                neighbors[x].push(y);
                neighbors[y].push(x);
            }
        }

        for list in &mut neighbors {
            list.sort_unstable();
        }

        Self {
            grid,
            words,
            variables,
            overlaps,
            neighbors,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// All slots in canonical order
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn var_count(&self) -> usize {
        self.variables.len()
    }

    pub fn variable(&self, id: VarId) -> Variable {
        self.variables[id]
    }

    /// Shared-cell character indices (i, j) for a crossing pair, if any
    pub fn overlap(&self, x: VarId, y: VarId) -> Option<(usize, usize)> {
        self.overlaps.get(&(x, y)).copied()
    }

    /// Ids of all slots crossing the given one
    pub fn neighbors(&self, id: VarId) -> &[VarId] {
        &self.neighbors[id]
    }

    /// Number of crossing slots
    pub fn degree(&self, id: VarId) -> usize {
        self.neighbors[id].len()
    }

    /// Total number of crossing pairs
    pub fn overlap_count(&self) -> usize {
        self.overlaps.len() / 2
    }
}

/// Extract maximal fillable runs of length >= 2 in both directions
///
/// Single fillable cells are not slots; they stay blank in the rendered
/// output unless a crossing slot covers them.
fn find_slots(grid: &Grid) -> Vec<Variable> {
    let mut slots = Vec::new();

    for row in 0..grid.height {
        let mut col = 0;
        while col < grid.width {
            let start = col;
            while col < grid.width && grid.is_fillable(row, col) {
                col += 1;
            }
            let length = col - start;
            if length >= 2 {
                slots.push(Variable {
                    row,
                    col: start,
                    orientation: Orientation::Across,
                    length,
                });
            }
            col += 1;
        }
    }

    for col in 0..grid.width {
        let mut row = 0;
        while row < grid.height {
            let start = row;
            while row < grid.height && grid.is_fillable(row, col) {
                row += 1;
            }
            let length = row - start;
            if length >= 2 {
                slots.push(Variable {
                    row: start,
                    col,
                    orientation: Orientation::Down,
                    length,
                });
            }
            row += 1;
        }
    }

    slots.sort_unstable();
    debug_assert!(slots.iter().all(|slot| slot.length >= 2));
    slots
}

/// Overlap indices for two slots sharing exactly one cell
///
/// Parallel slots never intersect (maximal runs are separated by blocked
/// cells), so only perpendicular pairs are considered.
fn overlap_between(a: &Variable, b: &Variable) -> Option<(usize, usize)> {
    match (a.orientation, b.orientation) {
        (Orientation::Across, Orientation::Down) => {
            let crosses = a.col <= b.col
                && b.col < a.col + a.length
                && b.row <= a.row
                && a.row < b.row + b.length;
            crosses.then(|| (b.col - a.col, a.row - b.row))
        }
        (Orientation::Down, Orientation::Across) => {
            overlap_between(b, a).map(|(i, j)| (j, i))
        }
        _ => None,
    }
}
