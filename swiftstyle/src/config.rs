//! Configuration loading and models.
//!
//! Configuration lives in a `.swiftstyle.toml` file discovered by walking up
//! from the analysis target. CLI flags always win over file configuration.

mod loader;
mod models;

pub use models::{Config, LayersConfig, StyleConfig};

use std::path::Path;

impl Config {
    /// Loads configuration for the given path by walking up the directory
    /// tree until a `.swiftstyle.toml` is found. Falls back to defaults.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        loader::load_from_path(path)
    }
}
