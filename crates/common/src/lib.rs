//! Swipeable Common Utilities
//!
//! Shared infrastructure for all Swipeable crates:
//! - Error types and result aliases
//! - Clock sources for gesture timestamps
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
