//! Text rendering and console output formatting

use crate::grid::Grid;
use crate::puzzle::Solution;

/// Renders solutions and structures as text
pub struct SolutionFormatter;

impl SolutionFormatter {
    /// Render a filled grid: blocked cells as '█', uncovered fillable cells
    /// as ' ', filled cells as their letter. Row-major, one row per line.
    pub fn format_grid(grid: &Grid, solution: &Solution) -> String {
        let letters = solution.letter_grid();
        let mut output = String::with_capacity(grid.height * (grid.width + 1));

        for row in 0..grid.height {
            for col in 0..grid.width {
                if grid.is_fillable(row, col) {
                    output.push(letters[row][col].unwrap_or(' '));
                } else {
                    output.push('█');
                }
            }
            output.push('\n');
        }

        output
    }

    /// One line per filled slot, in canonical slot order
    pub fn format_entries(solution: &Solution) -> String {
        let mut output = String::new();
        for entry in &solution.entries {
            let direction = match entry.orientation {
                crate::csp::Orientation::Across => "across",
                crate::csp::Orientation::Down => "down",
            };
            output.push_str(&format!(
                "({}, {}) {}: {}\n",
                entry.row, entry.col, direction, entry.word
            ));
        }
        output
    }

    /// Render the bare structure, for analysis output
    pub fn format_structure(grid: &Grid) -> String {
        grid.to_string()
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if the terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
