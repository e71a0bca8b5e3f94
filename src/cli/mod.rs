//! Command line interface for textsim.

pub mod args;
pub mod commands;
pub mod output;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use output::*;
