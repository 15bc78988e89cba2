//! pfcgen Core Library
//!
//! Error handling, shared types, generator configuration and the raw
//! link-layer transmit path used by the pfcgen frame generator.

pub mod config;
pub mod error;
pub mod interface;
pub mod transmit;
pub mod types;

// Re-export commonly used types
pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use interface::Interface;
pub use transmit::{FrameSink, TransmitStats, Transmitter};
pub use types::*;
