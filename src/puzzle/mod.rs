//! Problem orchestration, solutions, and validation

pub mod problem;
pub mod solution;
pub mod validator;

pub use problem::{solve_files, CrosswordProblem, PuzzleAnalysis};
pub use solution::{Solution, SolutionEntry, SolutionMetadata};
pub use validator::{SolutionValidator, ValidationResult};
