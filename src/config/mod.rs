//! Configuration management for the crossword filler

pub mod settings;

pub use settings::{CliOverrides, OutputConfig, OutputFormat, Settings, SolverConfig};
