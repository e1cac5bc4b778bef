use anyhow::{Context, Result};
use genaccessors::FieldList;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "genaccessors.toml";

/// Configuration stored in genaccessors.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub fields: FieldList,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub strict: bool,
}

/// Settings resolved from the command line, config file and defaults.
#[derive(Debug)]
pub struct RunContext {
    /// Config file that was loaded, if any
    pub config_path: Option<PathBuf>,
    pub fields: FieldList,
    /// `None` means standard output
    pub output: Option<PathBuf>,
    pub strict: bool,
}

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub fields: Vec<String>,
    pub output: Option<PathBuf>,
    pub strict: bool,
}

impl GeneratorConfig {
    /// Load and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

impl RunContext {
    /// Resolve settings relative to the current directory
    pub fn resolve(overrides: Overrides) -> Result<Self> {
        let current_dir = std::env::current_dir().context("Failed to get current directory")?;
        Self::resolve_in(&current_dir, overrides)
    }

    /// Resolve settings, looking for the default config file in `dir`
    pub fn resolve_in(dir: &Path, overrides: Overrides) -> Result<Self> {
        let config_path = match overrides.config {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file {} does not exist", path.display());
                }
                Some(path)
            }
            None => {
                let candidate = dir.join(DEFAULT_CONFIG_FILE);
                candidate.exists().then_some(candidate)
            }
        };

        let config = match &config_path {
            Some(path) => GeneratorConfig::load(path)?,
            None => GeneratorConfig::default(),
        };

        let fields = if overrides.fields.is_empty() {
            config.fields
        } else {
            FieldList::new(overrides.fields)
        };

        // Relative paths in a config file are relative to that file.
        let config_output = match (&config_path, config.output) {
            (Some(path), Some(output)) => {
                let base = path.parent().unwrap_or_else(|| Path::new(""));
                Some(base.join(output))
            }
            (_, output) => output,
        };

        Ok(Self {
            config_path,
            fields,
            output: overrides.output.or(config_output),
            strict: overrides.strict || config.strict,
        })
    }
}
