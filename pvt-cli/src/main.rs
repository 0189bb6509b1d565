use std::{error::Error, process::ExitCode};

use clap::Parser;
use pvt_cli::{cli::Args, pipeline};

fn main() -> ExitCode {
    match try_run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn try_run() -> Result<(), Box<dyn Error>> {
    let config = Args::parse().into_config()?;
    let report = pipeline::run(&config)?;
    println!("Plot saved as {}", report.output.display());
    Ok(())
}
