//! SVG image rendering of a filled grid

use crate::config::OutputConfig;
use crate::grid::Grid;
use crate::puzzle::Solution;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;

/// Render the filled grid as an SVG document
///
/// One square cell per grid cell: blocked cells stay on the dark canvas,
/// fillable cells are drawn light with their letter centered. Geometry comes
/// from the output config (cell size and border inset).
pub fn render_svg(grid: &Grid, solution: &Solution, config: &OutputConfig) -> String {
    let cell = config.cell_size;
    let border = config.cell_border;
    let width = grid.width as u32 * cell;
    let height = grid.height as u32 * cell;
    let font_size = cell * 3 / 5;
    let letters = solution.letter_grid();

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        width, height, width, height
    );
    let _ = writeln!(
        svg,
        r#"  <rect width="{}" height="{}" fill="black"/>"#,
        width, height
    );

    for row in 0..grid.height {
        for col in 0..grid.width {
            if !grid.is_fillable(row, col) {
                continue;
            }

            let x = col as u32 * cell + border;
            let y = row as u32 * cell + border;
            let interior = cell - 2 * border;
            let _ = writeln!(
                svg,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="white"/>"#,
                x, y, interior, interior
            );

            if let Some(letter) = letters[row][col] {
                let cx = col as u32 * cell + cell / 2;
                let cy = row as u32 * cell + cell / 2;
                let _ = writeln!(
                    svg,
                    r#"  <text x="{}" y="{}" font-size="{}" font-family="sans-serif" fill="black" text-anchor="middle" dominant-baseline="central">{}</text>"#,
                    cx, cy, font_size, escape(letter)
                );
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Render and write the SVG to a file
pub fn save_svg<P: AsRef<Path>>(
    path: P,
    grid: &Grid,
    solution: &Solution,
    config: &OutputConfig,
) -> Result<()> {
    let content = render_svg(grid, solution, config);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write image to: {}", path.as_ref().display()))
}

fn escape(letter: char) -> String {
    match letter {
        '&' => "&amp;".to_string(),
        '<' => "&lt;".to_string(),
        '>' => "&gt;".to_string(),
        other => other.to_string(),
    }
}
