//! Configuration loading for the simulator

use crate::grid::{Grid, DEFAULT_GRID_SIZE};
use crate::output::OutputFormat;
use crate::source::STDIN_PATH;
use crate::{Result, SimError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable naming a config file when no path is given
pub const CONFIG_ENV_VAR: &str = "ROBOSIM_CONFIG";

/// Explicit path wins over the environment value
pub fn config_path(flag: Option<String>, env_value: Option<String>) -> Option<String> {
    flag.or(env_value)
}

/// Everything a run needs once flags and config are merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub grid: Grid,
    pub format: OutputFormat,
    pub input: String,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SimConfig {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GridConfig {
    pub size: Option<i32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InputConfig {
    pub path: Option<String>,
}

impl SimConfig {
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();
        let contents = fs::read_to_string(config_path).map_err(|e| {
            SimError::Config(format!("Failed to read {}: {}", config_path.display(), e))
        })?;

        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        // An empty document means "all defaults"
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: SimConfig = serde_yaml::from_str(contents)?;
        Ok(config)
    }

    /// Get grid size with default fallback
    pub fn grid_size(&self) -> i32 {
        self.grid.size.unwrap_or(DEFAULT_GRID_SIZE)
    }

    /// Validated grid built from the configured size
    pub fn grid(&self) -> Result<Grid> {
        Grid::new(self.grid_size())
    }

    /// Get output format with default fallback
    pub fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    pub fn input_path(&self) -> Option<&str> {
        self.input.path.as_deref()
    }

    /// Merge command-line values over this config. Each setting takes the
    /// flag if given, then the config value, then the built-in default.
    pub fn resolve(
        &self,
        grid_size: Option<i32>,
        format: Option<OutputFormat>,
        input: Option<String>,
    ) -> Result<RunSettings> {
        let grid = match grid_size {
            Some(size) => Grid::new(size)?,
            None => self.grid()?,
        };
        let format = format.unwrap_or_else(|| self.output_format());
        let input = input
            .or_else(|| self.input_path().map(str::to_string))
            .unwrap_or_else(|| STDIN_PATH.to_string());

        Ok(RunSettings {
            grid,
            format,
            input,
        })
    }
}
