use std::fmt::Display;

use thiserror::Error;

/// Errors that can occur when rendering or saving a [`Chart`](crate::Chart).
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("chart has no series to draw")]
    NoSeries,

    #[error("unsupported output format `{extension}` (supported: svg)")]
    UnsupportedFormat { extension: String },

    #[error("failed to render chart: {0}")]
    Render(String),
}

impl PlotError {
    pub(crate) fn render<E: Display>(err: E) -> Self {
        Self::Render(err.to_string())
    }
}
