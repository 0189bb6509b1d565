use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pipeline configuration.
///
/// Every field has a default, so a configuration file only needs to list
/// what it changes.
///
/// ```toml
/// temperatures = [295.0, 325.0, 345.0, 375.0]
/// output = "co2_eos_plot.svg"
///
/// [density]
/// min = 50.0
/// max = 1000.0
/// points = 50
///
/// [chart]
/// width = 1000
/// height = 700
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Isotherm temperatures, in K.
    pub temperatures: Vec<f64>,
    /// Where the chart is written. The extension selects the format.
    pub output: PathBuf,
    pub density: DensityRange,
    pub chart: ChartSize,
}

/// Linearly spaced densities, in kg/m³, both endpoints included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DensityRange {
    pub min: f64,
    pub max: f64,
    pub points: usize,
}

/// Chart size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            temperatures: vec![295.0, 325.0, 345.0, 375.0],
            output: PathBuf::from("co2_eos_plot.svg"),
            density: DensityRange::default(),
            chart: ChartSize::default(),
        }
    }
}

impl Default for DensityRange {
    fn default() -> Self {
        Self {
            min: 50.0,
            max: 1000.0,
            points: 50,
        }
    }
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 700,
        }
    }
}

/// Errors that can occur while loading or validating a [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {reason}")]
    Invalid { reason: &'static str },
}

impl Config {
    /// Reads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid TOML, has an
    /// unknown key, or has a value of the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Validates that the configuration describes a non-empty, physical grid.
    ///
    /// # Errors
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.temperatures.is_empty() {
            return Err("at least one temperature is required");
        }
        if self
            .temperatures
            .iter()
            .any(|t| !t.is_finite() || *t <= 0.0)
        {
            return Err("temperatures must be finite and strictly positive");
        }
        if !self.density.min.is_finite() || self.density.min <= 0.0 {
            return Err("density.min must be finite and strictly positive");
        }
        if !self.density.max.is_finite() || self.density.max <= self.density.min {
            return Err("density.max must be finite and greater than density.min");
        }
        if self.density.points < 2 {
            return Err("density.points must be at least 2");
        }
        if self.chart.width == 0 || self.chart.height == 0 {
            return Err("chart.width and chart.height must be non-zero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_run() {
        let config = Config::default();

        assert_eq!(config.temperatures, vec![295.0, 325.0, 345.0, 375.0]);
        assert_eq!(config.density.points, 50);
        assert_eq!(config.output, PathBuf::from("co2_eos_plot.svg"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_text_yields_defaults() -> Result<(), ConfigError> {
        assert_eq!(Config::from_toml_str("")?, Config::default());
        Ok(())
    }

    #[test]
    fn partial_file_overrides_only_listed_fields() -> Result<(), ConfigError> {
        let config = Config::from_toml_str(
            r#"
            temperatures = [310.0]

            [density]
            points = 10
            "#,
        )?;

        assert_eq!(config.temperatures, vec![310.0]);
        assert_eq!(config.density.points, 10);
        assert_eq!(config.density.max, DensityRange::default().max);
        assert_eq!(config.chart, ChartSize::default());

        Ok(())
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            Config::from_toml_str("substance = \"water\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[density]\nstep = 5.0"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn serialized_config_reads_back() -> Result<(), Box<dyn std::error::Error>> {
        let config = Config {
            temperatures: vec![300.0, 400.0],
            output: PathBuf::from("out/plot.svg"),
            ..Config::default()
        };

        let text = toml::to_string(&config)?;
        assert_eq!(Config::from_toml_str(&text)?, config);

        Ok(())
    }

    #[test]
    fn validation_reports_the_first_problem() {
        let check = |config: Config| config.validate().err();

        assert!(
            check(Config {
                temperatures: vec![],
                ..Config::default()
            })
            .is_some()
        );
        assert!(
            check(Config {
                temperatures: vec![300.0, -1.0],
                ..Config::default()
            })
            .is_some()
        );
        assert!(
            check(Config {
                density: DensityRange {
                    min: 100.0,
                    max: 100.0,
                    points: 5,
                },
                ..Config::default()
            })
            .is_some()
        );
        assert!(
            check(Config {
                density: DensityRange {
                    points: 1,
                    ..DensityRange::default()
                },
                ..Config::default()
            })
            .is_some()
        );
        assert!(
            check(Config {
                chart: ChartSize {
                    width: 0,
                    height: 700,
                },
                ..Config::default()
            })
            .is_some()
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("pvt-cli-no-such-config.toml");
        assert!(matches!(Config::load(&path), Err(ConfigError::Io { .. })));
    }
}
