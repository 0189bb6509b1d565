//! Density sweep → Peng-Robinson grid → MPa → chart.

use std::path::PathBuf;

use ndarray::{Array1, ArrayView1};
use pvt_core::Component;
use pvt_plot::{Chart, PlotError};
use pvt_thermo::{
    EosError, PressureGrid,
    density::{self, DensityGrid},
    fluid::{CarbonDioxide, CubicFluid},
    model::peng_robinson::{Isotherms, PengRobinson},
};
use thiserror::Error;

use crate::config::{Config, ConfigError};

pub const TITLE: &str = "CO2 Pressure vs. Density (Peng-Robinson EOS)";
pub const X_LABEL: &str = "Density (kg/m³)";
pub const Y_LABEL: &str = "Pressure (MPa)";

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Pressures in Pa, one row per configured temperature.
    pub grid: PressureGrid,
    /// Densities in kg/m³, one per grid column.
    pub densities: Array1<f64>,
    /// Path of the written chart.
    pub output: PathBuf,
}

/// Errors that can stop a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Eos(#[from] EosError),

    #[error(transparent)]
    Plot(#[from] PlotError),
}

/// Runs the full pipeline for carbon dioxide and writes the chart.
///
/// # Errors
///
/// Returns the first failure: an invalid configuration, a rejected grid, or
/// a chart that cannot be written. Nothing is retried.
pub fn run(config: &Config) -> Result<Report, PipelineError> {
    let (grid, densities) = evaluate(config)?;

    chart(&grid, densities.view(), config).save(&config.output)?;

    Ok(Report {
        grid,
        densities,
        output: config.output.clone(),
    })
}

/// Evaluates the pressure grid without rendering it.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the evaluator rejects
/// the grid.
pub fn evaluate(config: &Config) -> Result<(PressureGrid, Array1<f64>), PipelineError> {
    config
        .validate()
        .map_err(|reason| ConfigError::Invalid { reason })?;

    let fluid = CarbonDioxide;
    let range = config.density;

    let densities = density::density_sweep(range.min, range.max, range.points)?;
    let molar_volumes = DensityGrid::new(fluid.molar_mass()).call(densities.clone())?;

    let grid = PengRobinson::new(&fluid.constants())?.call(Isotherms {
        temperatures: Array1::from(config.temperatures.clone()),
        molar_volumes,
    })?;

    Ok((grid, densities))
}

/// Builds the pressure vs. density chart, one series per temperature.
#[must_use]
pub fn chart(grid: &PressureGrid, densities: ArrayView1<'_, f64>, config: &Config) -> Chart {
    let megapascals = grid.to_megapascals();

    let chart = Chart::new()
        .title(TITLE)
        .x_label(X_LABEL)
        .y_label(Y_LABEL)
        .y_floor(0.0)
        .size(config.chart.width, config.chart.height);

    grid.temperatures()
        .iter()
        .zip(megapascals.rows())
        .fold(chart, |chart, (t, isotherm)| {
            let points: Vec<[f64; 2]> = densities
                .iter()
                .zip(isotherm.iter())
                .map(|(&rho, &p)| [rho, p])
                .collect();
            chart.add_series(&format!("{t} K"), &points)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_grid_has_one_row_per_temperature() -> Result<(), PipelineError> {
        let (grid, densities) = evaluate(&Config::default())?;

        assert_eq!(grid.shape(), (4, 50));
        assert_eq!(densities.len(), 50);
        assert!(grid.is_finite());

        Ok(())
    }

    #[test]
    fn columns_follow_molar_mass_over_density() -> Result<(), PipelineError> {
        let (grid, densities) = evaluate(&Config::default())?;

        for (v, rho) in grid.molar_volumes().iter().zip(densities.iter()) {
            assert_relative_eq!(*v, 0.044 / rho, max_relative = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn invalid_config_stops_before_evaluation() {
        let config = Config {
            temperatures: vec![],
            ..Config::default()
        };
        assert!(matches!(
            evaluate(&config),
            Err(PipelineError::Config(ConfigError::Invalid { .. }))
        ));
    }

    #[test]
    fn densities_reaching_the_co_volume_are_rejected() {
        // 0.044 kg/mol / 2.667e-5 m³/mol ≈ 1650 kg/m³
        let config = Config {
            density: crate::config::DensityRange {
                min: 100.0,
                max: 2000.0,
                points: 20,
            },
            ..Config::default()
        };
        assert!(matches!(evaluate(&config), Err(PipelineError::Eos(_))));
    }

    #[test]
    fn chart_has_one_series_per_temperature() -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::default();
        let (grid, densities) = evaluate(&config)?;

        let path = std::env::temp_dir()
            .join(format!("pvt-cli-series-{}.svg", std::process::id()));
        chart(&grid, densities.view(), &config).save(&path)?;

        let svg = std::fs::read_to_string(&path)?;
        std::fs::remove_file(&path)?;

        for label in ["295 K", "325 K", "345 K", "375 K"] {
            assert_eq!(svg.matches(label).count(), 1, "legend entry for {label}");
        }

        Ok(())
    }

    #[test]
    fn unsupported_extension_is_a_plot_error() {
        let config = Config {
            output: std::env::temp_dir().join("pvt-cli-plot.bmp"),
            ..Config::default()
        };
        assert!(matches!(
            run(&config),
            Err(PipelineError::Plot(PlotError::UnsupportedFormat { .. }))
        ));
    }
}
