//! Configuration file loading for ragask
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. `RAGASK_*` environment variables (`RAGASK_SERVICE__BASE_URL=...`)
//! 3. Project root: `./ragask.toml` or `./.ragask.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/ragask/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileConfig, FileOutputConfig, FileServiceConfig};
pub use loader::ConfigLoader;
