//! The Peng-Robinson cubic equation of state.
//!
//! ```text
//! P = R·T / (V − b) − a(T) / (V·(V + b) + b·(V − b))
//! ```
//!
//! with
//!
//! ```text
//! b     = Ω·R·Tc / Pc
//! κ     = 0.37464 + 1.54226·ω − 0.26992·ω²
//! α(T)  = (1 + κ·(1 − √(T / Tc)))²
//! a(T)  = Ψ·α(T)·R²·Tc² / Pc
//! ```

use ndarray::{Array1, Array2, ArrayView1};
use pvt_core::Component;

use crate::{
    EosError, InvalidInput, PressureGrid, SubstanceConstants, substance::is_positive_finite,
};

/// Universal constant `Ψ` of the attraction parameter.
pub const PSI: f64 = 0.45724;

/// Universal constant `Ω` of the co-volume.
pub const OMEGA: f64 = 0.07780;

/// Evaluates pressure over every (temperature, molar volume) pair.
///
/// Temperatures are in K and molar volumes in m³/mol. The returned grid has
/// one row per temperature and one column per molar volume, in Pa.
///
/// # Errors
///
/// - [`EosError::SingularConfiguration`] if the constants are invalid.
/// - [`EosError::InvalidInput`] if either vector is empty, a temperature is
///   not strictly positive, a molar volume does not exceed the co-volume, or
///   a pressure is not finite.
pub fn evaluate(
    temperatures: &[f64],
    molar_volumes: &[f64],
    constants: &SubstanceConstants,
) -> Result<PressureGrid, EosError> {
    PengRobinson::new(constants)?
        .pressure_grid(ArrayView1::from(temperatures), ArrayView1::from(molar_volumes))
}

/// Peng-Robinson parameters derived from a set of [`SubstanceConstants`].
///
/// Construction validates the constants and computes the parameters that do
/// not depend on temperature. The temperature-dependent attraction parameter
/// is computed per isotherm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PengRobinson {
    tc: f64,
    pc: f64,
    r: f64,
    kappa: f64,
    b: f64,
}

impl PengRobinson {
    /// Derives the model parameters from substance constants.
    ///
    /// # Errors
    ///
    /// Returns [`EosError::SingularConfiguration`] if the constants fail
    /// [`SubstanceConstants::validate`].
    pub fn new(constants: &SubstanceConstants) -> Result<Self, EosError> {
        constants.validate()?;

        let tc = constants.tc();
        let pc = constants.pc();
        let r = constants.r();
        let w = constants.acentric_factor;

        Ok(Self {
            tc,
            pc,
            r,
            kappa: 0.37464 + 1.54226 * w - 0.26992 * w.powi(2),
            b: OMEGA * r * tc / pc,
        })
    }

    /// The co-volume `b`, in m³/mol.
    #[must_use]
    pub fn co_volume(&self) -> f64 {
        self.b
    }

    /// The acentric-factor coefficient `κ`.
    #[must_use]
    pub fn kappa(&self) -> f64 {
        self.kappa
    }

    /// The temperature correction `α(T)` for a temperature in K.
    #[must_use]
    pub fn alpha(&self, temperature: f64) -> f64 {
        let tr = temperature / self.tc;
        (1.0 + self.kappa * (1.0 - tr.sqrt())).powi(2)
    }

    /// The attraction parameter `a(T)`, in Pa·m⁶/mol², for a temperature in K.
    #[must_use]
    pub fn attraction(&self, temperature: f64) -> f64 {
        PSI * self.alpha(temperature) * (self.r.powi(2) * self.tc.powi(2)) / self.pc
    }

    /// Evaluates the pressure grid.
    ///
    /// `a(T)` is computed once per row and shared by every column of that
    /// row; `b` is shared by the whole grid.
    ///
    /// # Errors
    ///
    /// Returns [`EosError::InvalidInput`] if either vector is empty, a
    /// temperature is not finite and strictly positive, a molar volume is
    /// not finite and strictly greater than [`co_volume`](Self::co_volume),
    /// or a cell overflows to a non-finite pressure.
    pub fn pressure_grid(
        &self,
        temperatures: ArrayView1<'_, f64>,
        molar_volumes: ArrayView1<'_, f64>,
    ) -> Result<PressureGrid, EosError> {
        self.check_temperatures(temperatures)?;
        self.check_molar_volumes(molar_volumes)?;

        let attraction: Array1<f64> = temperatures.mapv(|t| self.attraction(t));

        let pascals = Array2::from_shape_fn(
            (temperatures.len(), molar_volumes.len()),
            |(i, j)| self.pressure_at(temperatures[i], attraction[i], molar_volumes[j]),
        );

        if let Some(((row, column), &value)) =
            pascals.indexed_iter().find(|(_, p)| !p.is_finite())
        {
            return Err(InvalidInput::NonFinitePressure { row, column, value }.into());
        }

        Ok(PressureGrid::new(
            temperatures.to_owned(),
            molar_volumes.to_owned(),
            pascals,
        ))
    }

    /// Pressure for one cell, given the row's precomputed `a(T)`.
    fn pressure_at(&self, t: f64, a: f64, v: f64) -> f64 {
        let b = self.b;
        self.r * t / (v - b) - a / (v * (v + b) + b * (v - b))
    }

    fn check_temperatures(&self, temperatures: ArrayView1<'_, f64>) -> Result<(), InvalidInput> {
        if temperatures.is_empty() {
            return Err(InvalidInput::EmptyTemperatures);
        }
        match temperatures
            .iter()
            .position(|&value| !is_positive_finite(value))
        {
            Some(index) => Err(InvalidInput::Temperature {
                index,
                value: temperatures[index],
            }),
            None => Ok(()),
        }
    }

    fn check_molar_volumes(&self, molar_volumes: ArrayView1<'_, f64>) -> Result<(), InvalidInput> {
        if molar_volumes.is_empty() {
            return Err(InvalidInput::EmptyMolarVolumes);
        }
        for (index, &value) in molar_volumes.iter().enumerate() {
            if !is_positive_finite(value) {
                return Err(InvalidInput::MolarVolume { index, value });
            }
            if value <= self.b {
                return Err(InvalidInput::BelowCoVolume {
                    index,
                    value,
                    co_volume: self.b,
                });
            }
        }
        Ok(())
    }
}

/// Temperatures (K) and molar volumes (m³/mol) spanning a pressure grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Isotherms {
    pub temperatures: Array1<f64>,
    pub molar_volumes: Array1<f64>,
}

impl Component for PengRobinson {
    type Input = Isotherms;
    type Output = PressureGrid;
    type Error = EosError;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        self.pressure_grid(input.temperatures.view(), input.molar_volumes.view())
    }
}
