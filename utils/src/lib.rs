//! Shared utilities for the Rev node.

pub mod logging;

pub use logging::{init_logging, LogFormat};
