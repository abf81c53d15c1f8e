//! Common types and errors for fibseq.
//!
//! This crate provides shared functionality used across the fibseq workspace:
//! - Error types using `thiserror` for type-safe error handling
//! - Configuration structures for the generator and driver
//! - TOML configuration file loading

pub mod config;
pub mod config_file;
pub mod error;

pub use config::{DEFAULT_ITERATIONS, DriverConfig, RunConfig, SequenceConfig};
pub use config_file::{ConfigFile, ConfigFileError, LoggingConfig};
pub use error::SequenceError;
