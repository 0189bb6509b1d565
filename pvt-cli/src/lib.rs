//! Pipeline driver for plotting Peng-Robinson isotherms of carbon dioxide.
//!
//! - [`config`]: TOML configuration with defaults for every field
//! - [`cli`]: command line arguments for the `pvt` binary
//! - [`pipeline`]: grid generation, evaluation, unit conversion, and rendering

pub mod cli;
pub mod config;
pub mod pipeline;
