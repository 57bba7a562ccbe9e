//! Rendering and output utilities

pub mod display;
pub mod svg;

pub use display::{Color, ColorOutput, SolutionFormatter};
pub use svg::{render_svg, save_svg};
