//! Configuration loading and management.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use escala_core::RankTable;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the registry database file.
    pub database_path: PathBuf,

    /// Optional rank → weight override for the seniority tie-break.
    /// When absent, the built-in ladder is used.
    pub rank_weights: Option<HashMap<String, u32>>,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            database_path: data_dir.join("escala.db"),
            rank_weights: None,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (ESCALA_*)
        figment = figment.merge(Env::prefixed("ESCALA_"));

        figment.extract()
    }

    /// The rank table to rank with: the configured override, or the
    /// built-in ladder.
    pub fn rank_table(&self) -> RankTable {
        self.rank_weights
            .clone()
            .map_or_else(RankTable::default, RankTable::new)
    }
}

/// Returns the platform-specific config directory for escala.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("escala"))
}

/// Returns the platform-specific data directory for escala.
///
/// On Linux: `~/.local/share/escala`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("escala"))
}
