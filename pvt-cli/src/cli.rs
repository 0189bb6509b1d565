use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

/// Plot Peng-Robinson isotherms of carbon dioxide as pressure vs. density.
///
/// Without arguments the default grid is evaluated and written to
/// `co2_eos_plot.svg`.
#[derive(Debug, Parser)]
#[command(name = "pvt", version, about)]
pub struct Args {
    /// TOML configuration file. Omitted keys keep their defaults.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output image path. Overrides `output` from the configuration.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Builds the effective configuration from the arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file was given and cannot be loaded.
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let mut config = match self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(output) = self.output {
            config.output = output;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_arguments_use_defaults() -> Result<(), ConfigError> {
        let args = Args::parse_from(["pvt"]);
        assert_eq!(args.into_config()?, Config::default());
        Ok(())
    }

    #[test]
    fn output_flag_overrides_the_path() -> Result<(), ConfigError> {
        let args = Args::parse_from(["pvt", "--output", "isotherms.svg"]);
        let config = args.into_config()?;

        assert_eq!(config.output, PathBuf::from("isotherms.svg"));
        assert_eq!(config.temperatures, Config::default().temperatures);
        Ok(())
    }

    #[test]
    fn config_file_is_loaded() -> Result<(), Box<dyn std::error::Error>> {
        let path = std::env::temp_dir().join(format!("pvt-cli-args-{}.toml", std::process::id()));
        std::fs::write(&path, "temperatures = [320.0, 340.0]\noutput = \"from-file.svg\"\n")?;

        let path_arg = path.display().to_string();
        let args = Args::parse_from(["pvt", "-c", path_arg.as_str(), "-o", "from-flag.svg"]);
        let config = args.into_config();
        std::fs::remove_file(&path)?;
        let config = config?;

        assert_eq!(config.temperatures, vec![320.0, 340.0]);
        assert_eq!(config.output, PathBuf::from("from-flag.svg"));
        Ok(())
    }
}
