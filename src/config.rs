use crate::cli::output::OutputFormat;
use crate::convert::Style;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".casekit.toml";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub style: String,
    pub format: String,
    pub skip_blank_lines: bool,
    pub fail_fast: bool,
}

/// One config file. Keys left out of the file stay `None` and do not touch
/// the layers below.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigLayer {
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub skip_blank_lines: Option<bool>,
    #[serde(default)]
    pub fail_fast: Option<bool>,
}

impl ConfigLayer {
    fn validate(&self) -> Result<()> {
        if let Some(style) = &self.style {
            style.parse::<Style>().map_err(|e| anyhow!(e))?;
        }
        if let Some(format) = &self.format {
            format.parse::<OutputFormat>().map_err(|e| anyhow!(e))?;
        }
        Ok(())
    }
}

fn default_style() -> String {
    "snake".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_skip_blank_lines() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: default_style(),
            format: default_format(),
            skip_blank_lines: default_skip_blank_lines(),
            fail_fast: false,
        }
    }
}

/// Values given on the command line; `None` leaves the file value in place.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub style: Option<Style>,
    pub format: Option<OutputFormat>,
    pub fail_fast: bool,
    pub keep_blank_lines: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let global = Self::global_config_path();
        Self::load_from(global.as_deref(), Path::new(LOCAL_CONFIG_FILE), overrides)
    }

    /// Layered load with explicit file locations (useful for testing)
    pub fn load_from(global_path: Option<&Path>, local_path: &Path, overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global_path {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "loading global config");
                let global_config = Self::from_file(global_path)?;
                config = config.merge(global_config);
            }
        }

        // Local config overrides global
        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "loading local config");
            let local_config = Self::from_file(local_path)?;
            config = config.merge(local_config);
        }

        if let Some(style) = overrides.style {
            config.style = style.to_string();
        }
        if let Some(format) = overrides.format {
            config.format = format.to_string();
        }
        if overrides.fail_fast {
            config.fail_fast = true;
        }
        if overrides.keep_blank_lines {
            config.skip_blank_lines = false;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<ConfigLayer> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let layer: ConfigLayer = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        layer
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(layer)
    }

    fn merge(mut self, layer: ConfigLayer) -> Self {
        // Only keys present in the layer override what is below it
        if let Some(style) = layer.style {
            self.style = style;
        }
        if let Some(format) = layer.format {
            self.format = format;
        }
        if let Some(skip_blank_lines) = layer.skip_blank_lines {
            self.skip_blank_lines = skip_blank_lines;
        }
        if let Some(fail_fast) = layer.fail_fast {
            self.fail_fast = fail_fast;
        }
        self
    }

    pub fn style(&self) -> Result<Style> {
        self.style.parse().map_err(|e: String| anyhow!(e))
    }

    pub fn format(&self) -> Result<OutputFormat> {
        self.format.parse().map_err(|e: String| anyhow!(e))
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "casekit").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
