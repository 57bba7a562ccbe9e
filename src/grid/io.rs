//! File I/O for structure grids and word lists

use super::{Grid, WordList};
use anyhow::{Context, Result};
use std::path::Path;

/// Load a structure grid from a text file
pub fn load_structure_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read structure file: {}", path.as_ref().display()))?;

    Grid::parse(&content)
        .with_context(|| format!("Failed to parse structure file: {}", path.as_ref().display()))
}

/// Load a word list from a newline-delimited text file
pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> Result<WordList> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read word list file: {}", path.as_ref().display()))?;

    Ok(WordList::parse(&content))
}

/// Create example structure and word-list files for trying out the solver
pub fn create_example_inputs<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // One down slot crossing one across slot
    let cross_content = "_###\n____\n_###\n";
    std::fs::write(dir.join("cross.txt"), cross_content).context("Failed to write cross.txt")?;

    // Two across slots tied together by a down slot through the middle column
    let ladder_content = "___\n#_#\n___\n";
    std::fs::write(dir.join("ladder.txt"), ladder_content)
        .context("Failed to write ladder.txt")?;

    let words_content = "ago\nate\ncat\ndog\ngoat\nrat\nswim\nten\ntwo\n";
    std::fs::write(dir.join("words.txt"), words_content).context("Failed to write words.txt")?;

    Ok(())
}
