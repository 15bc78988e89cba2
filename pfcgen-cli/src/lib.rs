//! CLI interface for pfcgen
//!
//! Argument parsing and the glue that turns validated arguments into frames
//! on the wire.

pub mod args;
pub mod run;

pub use args::Cli;
pub use run::{run, send};
