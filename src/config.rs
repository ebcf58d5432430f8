use anyhow::{Context, Result};
use directories::ProjectDirs;
use gitbar_core::app::DEFAULT_REPOSITORY_MARKER;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::CliArgs;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Config {
    pub version: u32,
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub repository: RepositoryConfig,
}

/// Explicit tool locations; unset entries fall back to discovery
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct ToolsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcs_tool: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct RepositoryConfig {
    /// Entry whose presence marks a repository root
    pub marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            tools: ToolsConfig::default(),
            repository: RepositoryConfig::default(),
        }
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_REPOSITORY_MARKER.to_string(),
        }
    }
}

pub fn get_default_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "gitbar")
        .context("Failed to determine project directories")?;

    let config_dir = proj_dirs.config_dir();
    Ok(config_dir.join("gitbar.toml"))
}

/// Expands a leading `~/` to the home directory
pub fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p,
            None => get_default_config_path()?,
        };

        if !path.exists() {
            let default_config = Config::default();
            // Create directory if it doesn't exist
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .context("Failed to create config directory")?;
            }
            default_config.save(&path)?;
            return Ok(default_config);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.tools.vcs_tool = config.tools.vcs_tool.as_deref().map(expand_home);
        config.tools.shell = config.tools.shell.as_deref().map(expand_home);

        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    pub fn from_cli_and_file(cli_args: &CliArgs) -> Result<Self> {
        let mut config = Self::load(cli_args.config.clone())?;

        // CLI args override config file
        if let Some(vcs_tool) = &cli_args.vcs_tool {
            config.tools.vcs_tool = Some(vcs_tool.clone());
        }
        if let Some(shell) = &cli_args.shell {
            config.tools.shell = Some(shell.clone());
        }

        Ok(config)
    }
}
