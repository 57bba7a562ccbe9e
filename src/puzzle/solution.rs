//! Solution representation for filled crosswords

use crate::csp::{Assignment, Crossword, Orientation};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

/// A complete, validated fill of the grid
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    /// One entry per slot, in canonical slot order
    pub entries: Vec<SolutionEntry>,
    pub width: usize,
    pub height: usize,
    /// Time taken to find this solution
    #[serde(skip)]
    pub solve_time: Duration,
    pub metadata: SolutionMetadata,
}

/// A single filled slot
#[derive(Debug, Clone, Serialize)]
pub struct SolutionEntry {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub word: String,
}

/// Summary facts about a solution
#[derive(Debug, Clone, Serialize)]
pub struct SolutionMetadata {
    pub slot_count: usize,
    pub across_count: usize,
    pub down_count: usize,
    /// Fillable cells covered by at least one slot
    pub filled_cells: usize,
}

impl Solution {
    /// Build a solution from a complete assignment
    pub fn new(crossword: &Crossword, assignment: &Assignment, solve_time: Duration) -> Self {
        let entries: Vec<SolutionEntry> = assignment
            .bound_pairs()
            .map(|(var_id, word_id)| {
                let var = crossword.variable(var_id);
                SolutionEntry {
                    row: var.row,
                    col: var.col,
                    orientation: var.orientation,
                    word: crossword.words().word(word_id).to_string(),
                }
            })
            .collect();

        let across_count = entries
            .iter()
            .filter(|entry| entry.orientation == Orientation::Across)
            .count();
        let down_count = entries.len() - across_count;

        let grid = crossword.grid();
        let mut solution = Self {
            entries,
            width: grid.width,
            height: grid.height,
            solve_time,
            metadata: SolutionMetadata {
                slot_count: 0,
                across_count,
                down_count,
                filled_cells: 0,
            },
        };
        solution.metadata.slot_count = solution.entries.len();
        solution.metadata.filled_cells = solution
            .letter_grid()
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count();
        solution
    }

    /// 2D character array of the fill; `None` for cells no slot covers
    pub fn letter_grid(&self) -> Vec<Vec<Option<char>>> {
        let mut letters = vec![vec![None; self.width]; self.height];
        for entry in &self.entries {
            for (k, ch) in entry.word.chars().enumerate() {
                let (row, col) = match entry.orientation {
                    Orientation::Across => (entry.row, entry.col + k),
                    Orientation::Down => (entry.row + k, entry.col),
                };
                letters[row][col] = Some(ch);
            }
        }
        letters
    }

    /// Convert to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize solution")
    }

    /// Save the solution as JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_json()?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write solution to: {}", path.as_ref().display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Grid, WordList};

    fn solved() -> (Crossword, Solution) {
        let crossword = Crossword::new(
            Grid::parse("#_##\n____\n#_##\n").unwrap(),
            WordList::parse("dog\ngoat\n"),
        );
        let mut assignment = Assignment::new(2);
        // Variable 0 is the down slot, 1 the across slot
        let dog = crossword
            .words()
            .ids()
            .find(|&id| crossword.words().word(id) == "dog")
            .unwrap();
        let goat = crossword
            .words()
            .ids()
            .find(|&id| crossword.words().word(id) == "goat")
            .unwrap();
        assignment.bind(0, dog);
        assignment.bind(1, goat);

        let solution = Solution::new(&crossword, &assignment, Duration::from_millis(5));
        (crossword, solution)
    }

    #[test]
    fn test_entries_and_metadata() {
        let (_, solution) = solved();
        assert_eq!(solution.metadata.slot_count, 2);
        assert_eq!(solution.metadata.across_count, 1);
        assert_eq!(solution.metadata.down_count, 1);
        // 3 + 4 cells minus the shared one
        assert_eq!(solution.metadata.filled_cells, 6);
    }

    #[test]
    fn test_letter_grid_placement() {
        let (_, solution) = solved();
        let letters = solution.letter_grid();

        // Down "dog" in column 1, across "goat" in row 1, crossing on 'o'
        assert_eq!(letters[0][1], Some('d'));
        assert_eq!(letters[1][1], Some('o'));
        assert_eq!(letters[2][1], Some('g'));
        assert_eq!(letters[1][0], Some('g'));
        assert_eq!(letters[1][3], Some('t'));
        assert_eq!(letters[0][0], None);
    }

    #[test]
    fn test_json_export() {
        let (_, solution) = solved();
        let json = solution.to_json().unwrap();
        assert!(json.contains("goat"));
        assert!(json.contains("across"));
    }

    #[test]
    fn test_save_to_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("out/solution.json");
        let (_, solution) = solved();

        solution.save_to_file(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("dog"));
    }
}
