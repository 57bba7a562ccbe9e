//! Constraint-satisfaction core: variables, domains, consistency, and search

pub mod consistency;
pub mod domains;
pub mod search;
pub mod variables;

pub use consistency::{ac3, enforce_node_consistency, revise};
pub use domains::DomainStore;
pub use search::{Assignment, SearchOptions, Searcher};
pub use variables::{Crossword, Orientation, VarId, Variable};
