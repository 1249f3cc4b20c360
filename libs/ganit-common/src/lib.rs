//! Ganit Common Library
//!
//! Shared error type, layered configuration loading and logging setup used by
//! the Ganit crates and the `ganit` binary.

pub mod config;
pub mod error;
pub mod logging;

// Re-exports for convenience
pub use config::{load_config, load_config_from_file, save_config_to_file};
pub use error::{Error, Result};
pub use logging::{init_logging, init_test_logging, LogConfig, LogFormat};
