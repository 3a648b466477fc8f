//! Export settings and the static lookup tables.
//!
//! - [`ExportConfig`] - Settings read from the environment (`.env` supported)
//! - [`ConsoleType`] - Console codes and display names
//! - [`CartLayoutId`] / [`CartLayout`] - Cartridge board layouts
//! - [`GameConfig`] - Known cartridges by ROM code

pub mod cartridge;
pub mod console;

use std::env;

pub use cartridge::{
    game_config, game_configs, CartChip, CartChipRole, CartLayout, CartLayoutId, GameConfig,
};
pub use console::{ConsoleType, ParseConsoleError};

/// Public address of the hardware database site
pub const DEFAULT_SITE_ROOT: &str = "https://gbhwdb.gekkio.fi";

/// Environment variable overriding [`DEFAULT_SITE_ROOT`]
pub const SITE_ROOT_ENV: &str = "GBHWDB_SITE_ROOT";

/// Settings shared by all exports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Base of the generated `url` column, without trailing slash
    pub site_root: String,
}

impl ExportConfig {
    /// Load settings from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        // Try loading .env file
        let _ = dotenvy::dotenv();

        match env::var(SITE_ROOT_ENV) {
            Ok(root) if !root.trim().is_empty() => Self::default().with_site_root(&root),
            _ => Self::default(),
        }
    }

    /// Set the site root
    pub fn with_site_root(mut self, site_root: &str) -> Self {
        self.site_root = site_root.trim().trim_end_matches('/').to_string();
        self
    }

    /// Canonical page of a console submission
    pub fn submission_url(&self, console: ConsoleType, slug: &str) -> String {
        format!("{}/consoles/{}/{}.html", self.site_root, console.code(), slug)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            site_root: DEFAULT_SITE_ROOT.to_string(),
        }
    }
}
