//! Configuration loading
//!
//! Both tools share one optional TOML file. Search order:
//! 1. `GH_TOOLS_CONFIG` env var
//! 2. `./gh-tools.toml`
//! 3. `$XDG_CONFIG_HOME/gh-tools/config.toml`
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Env var naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "GH_TOOLS_CONFIG";

/// Top-level configuration (from gh-tools.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub gh: GhConfig,
    #[serde(default)]
    pub issue: IssueConfig,
}

/// External CLI section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GhConfig {
    /// Executable to spawn
    #[serde(default = "default_program")]
    pub program: String,
    /// Shown when the executable cannot be run
    #[serde(default = "default_install_hint")]
    pub install_hint: String,
}

/// Issue fetcher section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueConfig {
    /// Directory that receives issue-<N>.json
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_program() -> String {
    "gh".to_string()
}

fn default_install_hint() -> String {
    "https://cli.github.com/".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for GhConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            install_hint: default_install_hint(),
        }
    }
}

impl Default for IssueConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl ToolsConfig {
    /// Load config from the standard locations, falling back to defaults
    pub fn load() -> Self {
        if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
            let path = PathBuf::from(&env_path);
            if path.exists() {
                if let Some(config) = Self::try_load(&path) {
                    tracing::info!("Loaded config from {}={}", CONFIG_ENV_VAR, path.display());
                    return config;
                }
            } else {
                tracing::warn!("{}={} does not exist", CONFIG_ENV_VAR, env_path);
            }
        }

        let mut config_paths = vec![PathBuf::from("gh-tools.toml")];
        if let Some(config_dir) = dirs::config_dir() {
            config_paths.push(config_dir.join("gh-tools").join("config.toml"));
        }

        for path in config_paths {
            if path.exists() {
                if let Some(config) = Self::try_load(&path) {
                    tracing::info!("Loaded config from {}", path.display());
                    return config;
                }
            }
        }

        tracing::debug!("No config file found, using defaults");
        Self::default()
    }

    /// Parse a config file, logging and skipping it when unusable
    fn try_load(path: &Path) -> Option<Self> {
        match Self::load_from_path(path) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("Failed to load config {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Load from a specific path
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}
