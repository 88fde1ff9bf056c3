//! Application configuration module.
//!
//! Manages the TOML config file holding the backend origin, and resolves
//! the effective base URL from flag, environment and file.

#[allow(clippy::module_inception)]
mod config;
mod paths;

#[allow(clippy::module_name_repetitions)]
pub use config::{AppConfig, BASE_URL_ENV};
pub use paths::resolve_config_path;
