//! Export job configuration loading and validation.

use playgraph_common::{PlayGraphError, Result};
use playgraph_series::SeriesOptions;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Logging section of the job configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level filter (e.g., "info", "debug")
    pub level: String,
    /// Optional log file path
    pub file: Option<String>,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// One export job: where to read observations, how to densify them, where to
/// write the chart payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    /// Path of the sparse observations JSON file (`[[week, plays], …]`)
    pub input: PathBuf,
    /// Path of the chart payload to write; stdout when omitted
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// Densification options
    #[serde(default)]
    pub series: SeriesOptions,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSection,
}

impl JobConfig {
    /// Validate the final configuration before running a job
    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(PlayGraphError::validation_field(
                "input path cannot be empty",
                "input",
            ));
        }
        if let (Some(start), Some(end)) = (self.series.start, self.series.end) {
            if start > end {
                return Err(PlayGraphError::validation_field(
                    format!("start week {} is after end week {}", start, end),
                    "series",
                ));
            }
        }
        Ok(())
    }
}

/// Configuration loader for the export tool
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file with environment variable
    /// overrides
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<JobConfig> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: JobConfig = toml::from_str(&content)?;

        Self::apply_env_overrides(&mut config)?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from the path in `PLAYGRAPH_CONFIG_PATH`, falling
    /// back to `playgraph.toml` in the working directory
    pub fn load() -> Result<JobConfig> {
        if let Ok(config_path) = env::var("PLAYGRAPH_CONFIG_PATH") {
            Self::load_from_file(&config_path)
        } else if Path::new("playgraph.toml").exists() {
            Self::load_from_file("playgraph.toml")
        } else {
            Err(PlayGraphError::config(
                "no configuration file found; pass --config or set PLAYGRAPH_CONFIG_PATH",
            ))
        }
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut JobConfig) -> Result<()> {
        if let Ok(input) = env::var("PLAYGRAPH_INPUT") {
            config.input = PathBuf::from(input);
        }

        if let Ok(output) = env::var("PLAYGRAPH_OUTPUT") {
            config.output = Some(PathBuf::from(output));
        }

        if let Ok(start) = env::var("PLAYGRAPH_START_WEEK") {
            config.series.start = Some(start.parse().map_err(|e| {
                PlayGraphError::config_with_source(
                    format!("failed to parse PLAYGRAPH_START_WEEK '{}'", start),
                    e,
                )
            })?);
        }

        if let Ok(end) = env::var("PLAYGRAPH_END_WEEK") {
            config.series.end = Some(end.parse().map_err(|e| {
                PlayGraphError::config_with_source(
                    format!("failed to parse PLAYGRAPH_END_WEEK '{}'", end),
                    e,
                )
            })?);
        }

        if let Ok(averages) = env::var("PLAYGRAPH_SHOW_AVERAGES") {
            config.series.show_averages = averages.parse().map_err(|e| {
                PlayGraphError::config_with_source(
                    format!("failed to parse PLAYGRAPH_SHOW_AVERAGES '{}'", averages),
                    e,
                )
            })?;
        }

        if let Ok(level) = env::var("PLAYGRAPH_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_section_defaults() {
        let section = LoggingSection::default();
        assert_eq!(section.level, "info");
        assert!(section.file.is_none());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let config = JobConfig {
            input: PathBuf::from("plays.json"),
            output: None,
            series: SeriesOptions {
                start: Some(10),
                end: Some(2),
                show_averages: false,
            },
            logging: LoggingSection::default(),
        };

        let result = config.validate();
        assert!(matches!(
            result,
            Err(PlayGraphError::Validation { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_input_path() {
        let config = JobConfig {
            input: PathBuf::new(),
            output: None,
            series: SeriesOptions::default(),
            logging: LoggingSection::default(),
        };

        assert!(config.validate().is_err());
    }
}
