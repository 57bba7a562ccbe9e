//! Puzzle input handling: structure grids and word lists

pub mod io;
pub mod structure;
pub mod words;

pub use io::{create_example_inputs, load_structure_from_file, load_words_from_file};
pub use structure::{FormatError, Grid};
pub use words::{WordId, WordList};
