//! Configuration settings for the crossword filler

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub solver: SolverConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Abort search and report "no solution" after this many seconds
    pub timeout_seconds: Option<u64>,
    /// Explore the first variable's candidates on a thread pool
    pub parallel_root: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// What the optional output file contains
    pub format: OutputFormat,
    /// Edge length of one image cell, in pixels
    pub cell_size: u32,
    /// Inset between a cell and its drawn interior, in pixels
    pub cell_border: u32,
}

/// Interpretation of the output file argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// SVG image of the filled grid
    Svg,
    /// JSON dump of the solution entries
    Json,
    /// The same text rendering that goes to stdout
    Text,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            solver: SolverConfig {
                timeout_seconds: None,
                parallel_root: false,
            },
            output: OutputConfig {
                format: OutputFormat::Svg,
                cell_size: 100,
                cell_border: 2,
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

        settings.validate()?;
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
        if self.solver.timeout_seconds == Some(0) {
            anyhow::bail!("Timeout must be positive when set");
        }

        if self.output.cell_size == 0 {
            anyhow::bail!("Cell size must be positive");
        }

        if self.output.cell_border * 2 >= self.output.cell_size {
            anyhow::bail!(
                "Cell border {} leaves no interior in a cell of size {}",
                self.output.cell_border,
                self.output.cell_size
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(timeout) = cli_overrides.timeout_seconds {
            self.solver.timeout_seconds = Some(timeout);
        }
        if cli_overrides.parallel {
            self.solver.parallel_root = true;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub timeout_seconds: Option<u64>,
    pub parallel: bool,
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_validate() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.yaml");

        let mut settings = Settings::default();
        settings.solver.timeout_seconds = Some(30);
        settings.output.format = OutputFormat::Json;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.solver.timeout_seconds, Some(30));
        assert_eq!(loaded.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut settings = Settings::default();
        settings.solver.timeout_seconds = Some(0);
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.output.cell_border = 50;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            timeout_seconds: Some(10),
            parallel: true,
            format: Some(OutputFormat::Text),
        };
        settings.merge_with_cli(&overrides);

        assert_eq!(settings.solver.timeout_seconds, Some(10));
        assert!(settings.solver.parallel_root);
        assert_eq!(settings.output.format, OutputFormat::Text);
    }
}
