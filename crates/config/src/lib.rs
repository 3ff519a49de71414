//! Layered configuration loading.
//!
//! Merges the JSON config files found under a root directory and keeps a
//! `_provenance` trail of which files contributed.

#![warn(missing_docs)]

mod loader;

pub use loader::{load_config, Config, ConfigError};
