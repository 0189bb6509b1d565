//! Density sweeps and their conversion to molar volumes.

use ndarray::{Array1, ArrayView1};
use pvt_core::Component;
use uom::si::{f64::MolarMass, molar_mass::kilogram_per_mole};

use crate::{EosError, InvalidInput, substance::is_positive_finite};

/// Returns `points` densities linearly spaced from `min` to `max`, in kg/m³.
///
/// Both endpoints are included.
///
/// # Errors
///
/// Returns [`InvalidInput::DensityRange`] if `min` is not strictly positive,
/// `max` does not exceed `min`, or fewer than two points are requested.
pub fn density_sweep(min: f64, max: f64, points: usize) -> Result<Array1<f64>, EosError> {
    let invalid = |reason| InvalidInput::DensityRange { reason };

    if !is_positive_finite(min) {
        return Err(invalid("minimum density must be finite and strictly positive").into());
    }
    if !max.is_finite() || max <= min {
        return Err(invalid("maximum density must be finite and greater than the minimum").into());
    }
    if points < 2 {
        return Err(invalid("at least two density points are required").into());
    }

    Ok(Array1::linspace(min, max, points))
}

/// Converts densities (kg/m³) to molar volumes (m³/mol) with `V = M / ρ`.
///
/// # Errors
///
/// Returns [`EosError::InvalidInput`] if `densities` is empty or any density
/// is not finite and strictly positive.
pub fn molar_volumes(
    molar_mass: MolarMass,
    densities: ArrayView1<'_, f64>,
) -> Result<Array1<f64>, EosError> {
    if densities.is_empty() {
        return Err(InvalidInput::EmptyDensities.into());
    }
    if let Some(index) = densities.iter().position(|&rho| !is_positive_finite(rho)) {
        return Err(InvalidInput::Density {
            index,
            value: densities[index],
        }
        .into());
    }

    let m = molar_mass.get::<kilogram_per_mole>();
    Ok(densities.mapv(|rho| m / rho))
}

/// Converts densities to molar volumes for a fixed molar mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityGrid {
    molar_mass: MolarMass,
}

impl DensityGrid {
    #[must_use]
    pub fn new(molar_mass: MolarMass) -> Self {
        Self { molar_mass }
    }
}

impl Component for DensityGrid {
    type Input = Array1<f64>;
    type Output = Array1<f64>;
    type Error = EosError;

    fn call(&self, densities: Self::Input) -> Result<Self::Output, Self::Error> {
        molar_volumes(self.molar_mass, densities.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    use crate::fluid::{CarbonDioxide, CubicFluid};

    #[test]
    fn sweep_includes_endpoints() -> Result<(), EosError> {
        let rho = density_sweep(50.0, 1000.0, 50)?;

        assert_eq!(rho.len(), 50);
        assert_relative_eq!(rho[0], 50.0);
        assert_relative_eq!(rho[49], 1000.0, max_relative = 1e-12);
        // Spacing is (1000 - 50) / 49.
        assert_relative_eq!(rho[1] - rho[0], 950.0 / 49.0, max_relative = 1e-12);

        Ok(())
    }

    #[test]
    fn sweep_rejects_bad_ranges() {
        for (min, max, points) in [
            (0.0, 1000.0, 50),
            (-5.0, 1000.0, 50),
            (500.0, 500.0, 50),
            (500.0, 100.0, 50),
            (50.0, f64::INFINITY, 50),
            (50.0, 1000.0, 1),
        ] {
            assert!(
                matches!(
                    density_sweep(min, max, points),
                    Err(EosError::InvalidInput(InvalidInput::DensityRange { .. }))
                ),
                "accepted min={min}, max={max}, points={points}"
            );
        }
    }

    #[test]
    fn molar_volume_is_molar_mass_over_density() -> Result<(), EosError> {
        let v = molar_volumes(CarbonDioxide.molar_mass(), array![50.0, 440.0, 1000.0].view())?;

        assert_relative_eq!(v[0], 0.044 / 50.0);
        assert_relative_eq!(v[1], 1e-4, max_relative = 1e-12);
        assert_relative_eq!(v[2], 0.044 / 1000.0);

        Ok(())
    }

    #[test]
    fn molar_volumes_reject_bad_densities() {
        let m = CarbonDioxide.molar_mass();

        assert!(matches!(
            molar_volumes(m, array![100.0, 0.0].view()),
            Err(EosError::InvalidInput(InvalidInput::Density { index: 1, .. }))
        ));
        assert!(matches!(
            molar_volumes(m, Array1::<f64>::zeros(0).view()),
            Err(EosError::InvalidInput(InvalidInput::EmptyDensities))
        ));
    }

    #[test]
    fn component_converts_densities() -> Result<(), EosError> {
        let grid = DensityGrid::new(CarbonDioxide.molar_mass());
        let v = grid.call(array![88.0])?;
        assert_relative_eq!(v[0], 5e-4, max_relative = 1e-12);
        Ok(())
    }
}
