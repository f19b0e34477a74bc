use pagesmith_model::Breakpoint;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "pagesmith.config.json";

/// Pagesmith configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding the saved project
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,

    /// Undo levels kept per session (0 = unlimited)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Breakpoint used by `render` when none is given
    #[serde(default)]
    pub default_breakpoint: Breakpoint,

    /// Where `export` writes artifacts
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
}

fn default_storage_dir() -> String {
    ".pagesmith".to_string()
}

fn default_history_limit() -> usize {
    0
}

fn default_export_dir() -> String {
    "exports".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let config_path = dir.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn get_storage_dir(&self, dir: &Path) -> PathBuf {
        dir.join(&self.storage_dir)
    }

    pub fn get_export_dir(&self, dir: &Path) -> PathBuf {
        dir.join(&self.export_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            history_limit: default_history_limit(),
            default_breakpoint: Breakpoint::Desktop,
            export_dir: default_export_dir(),
        }
    }
}
