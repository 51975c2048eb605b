//! Configuration settings for the Game of Life driver

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Generations printed by `run` and advanced by `batch`
    pub generations: usize,
    /// Upper bound on generations simulated by `analyze`
    pub max_analysis_generations: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    pub seed_file: PathBuf,
    pub pattern_directory: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// When set, generations are written here instead of printed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                generations: 10,
                max_analysis_generations: 1000,
            },
            input: InputConfig {
                seed_file: PathBuf::from("input/patterns/glider.txt"),
                pattern_directory: PathBuf::from("input/patterns"),
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                output_directory: None,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.max_analysis_generations == 0 {
            anyhow::bail!("Maximum analysis generations must be positive");
        }

        Ok(())
    }

    /// Check that the configured seed file exists
    pub fn validate_seed_file(&self) -> Result<()> {
        if !self.input.seed_file.exists() {
            anyhow::bail!("Seed file does not exist: {}", self.input.seed_file.display());
        }
        Ok(())
    }

    /// Load settings from `path`, falling back to defaults when it does not exist
    pub fn load_or_default(path: &PathBuf) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            log::warn!("Config file {} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(max_generations) = cli_overrides.max_analysis_generations {
            self.simulation.max_analysis_generations = max_generations;
        }
        if let Some(ref seed_file) = cli_overrides.seed_file {
            self.input.seed_file = seed_file.clone();
        }
        if let Some(ref pattern_directory) = cli_overrides.pattern_directory {
            self.input.pattern_directory = pattern_directory.clone();
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = Some(output_dir.clone());
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub generations: Option<usize>,
    pub max_analysis_generations: Option<usize>,
    pub seed_file: Option<PathBuf>,
    pub pattern_directory: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output_dir: Option<PathBuf>,
}
