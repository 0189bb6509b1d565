use thiserror::Error;

/// Errors that may occur when evaluating an equation of state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EosError {
    /// The temperatures, molar volumes, or densities are outside the model's
    /// valid domain.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// The substance constants make the equation parameters undefined.
    ///
    /// For example, a critical pressure of zero leaves the co-volume `b`
    /// undefined.
    #[error("singular configuration: {reason}")]
    SingularConfiguration { reason: &'static str },
}

/// Reasons an input vector is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidInput {
    #[error("no temperatures were provided")]
    EmptyTemperatures,

    #[error("no molar volumes were provided")]
    EmptyMolarVolumes,

    #[error("no densities were provided")]
    EmptyDensities,

    #[error("temperature[{index}] = {value} K must be finite and strictly positive")]
    Temperature { index: usize, value: f64 },

    #[error("molar volume[{index}] = {value} m³/mol must be finite and strictly positive")]
    MolarVolume { index: usize, value: f64 },

    #[error(
        "molar volume[{index}] = {value} m³/mol must exceed the co-volume b = {co_volume} m³/mol"
    )]
    BelowCoVolume {
        index: usize,
        value: f64,
        co_volume: f64,
    },

    #[error("density[{index}] = {value} kg/m³ must be finite and strictly positive")]
    Density { index: usize, value: f64 },

    #[error("pressure at row {row}, column {column} is {value}, not a finite number")]
    NonFinitePressure { row: usize, column: usize, value: f64 },

    #[error("invalid density range: {reason}")]
    DensityRange { reason: &'static str },
}
