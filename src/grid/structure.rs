//! Structure grid representation and parsing

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The character marking a fillable cell in a structure file; anything else is blocked
pub const FILLABLE: char = '_';

/// Errors produced while parsing puzzle inputs
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("structure contains no rows")]
    EmptyStructure,

    #[error("structure rows are all empty")]
    ZeroWidth,
}

/// The fixed shape of a crossword: which cells can hold a letter
///
/// Immutable once parsed; all slot and overlap derivation reads from this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Build a grid from per-row fillable flags, padding short rows as blocked
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, FormatError> {
        if rows.is_empty() {
            return Err(FormatError::EmptyStructure);
        }

        let height = rows.len();
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        if width == 0 {
            return Err(FormatError::ZeroWidth);
        }

        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            let len = row.len();
            cells.extend(row);
            cells.extend(std::iter::repeat(false).take(width - len));
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse a structure description: one line per row, `'_'` fillable, any
    /// other character blocked. Ragged rows are padded as blocked.
    pub fn parse(content: &str) -> Result<Self, FormatError> {
        let rows: Vec<Vec<bool>> = content
            .lines()
            .map(|line| line.chars().map(|ch| ch == FILLABLE).collect())
            .collect();

        Self::from_rows(rows)
    }

    /// Convert 2D coordinates to the flat cell index
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Whether the cell at the given coordinates can hold a letter; out of
    /// bounds counts as blocked
    pub fn is_fillable(&self, row: usize, col: usize) -> bool {
        if row < self.height && col < self.width {
            self.cells[self.index(row, col)]
        } else {
            false
        }
    }

    /// Count fillable cells
    pub fn fillable_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = if self.is_fillable(row, col) { '·' } else { '█' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_structure() {
        let grid = Grid::parse("_#_\n___\n").unwrap();
        assert_eq!(grid.width, 3);
        assert_eq!(grid.height, 2);
        assert!(grid.is_fillable(0, 0));
        assert!(!grid.is_fillable(0, 1));
        assert_eq!(grid.fillable_count(), 5);
    }

    #[test]
    fn test_short_rows_pad_as_blocked() {
        let grid = Grid::parse("____\n__\n").unwrap();
        assert_eq!(grid.width, 4);
        assert_eq!(grid.height, 2);
        assert!(grid.is_fillable(1, 1));
        assert!(!grid.is_fillable(1, 2));
        assert!(!grid.is_fillable(1, 3));
    }

    #[test]
    fn test_out_of_bounds_is_blocked() {
        let grid = Grid::parse("__\n").unwrap();
        assert!(!grid.is_fillable(5, 0));
        assert!(!grid.is_fillable(0, 2));
    }

    #[test]
    fn test_empty_structure_rejected() {
        assert!(matches!(Grid::parse(""), Err(FormatError::EmptyStructure)));
    }

    #[test]
    fn test_blank_row_counts_as_blocked() {
        // A fully blank line is a row of blocked cells, not an error
        let grid = Grid::parse("___\n\n___\n").unwrap();
        assert_eq!(grid.height, 3);
        assert!(!grid.is_fillable(1, 0));
        assert!(!grid.is_fillable(1, 2));
    }

    #[test]
    fn test_crlf_line_endings() {
        let grid = Grid::parse("__\r\n__\r\n").unwrap();
        assert_eq!(grid.width, 2);
        assert_eq!(grid.height, 2);
        assert_eq!(grid.fillable_count(), 4);
    }
}
