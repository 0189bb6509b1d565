use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use uom::si::{f64::Pressure, pressure::pascal};

/// Pressures evaluated over a temperature × molar volume grid.
///
/// Row `i` holds the isotherm at `temperatures()[i]`; column `j` corresponds
/// to `molar_volumes()[j]`. Values are stored in Pa.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureGrid {
    temperatures: Array1<f64>,
    molar_volumes: Array1<f64>,
    pascals: Array2<f64>,
}

impl PressureGrid {
    pub(crate) fn new(
        temperatures: Array1<f64>,
        molar_volumes: Array1<f64>,
        pascals: Array2<f64>,
    ) -> Self {
        debug_assert_eq!(pascals.dim(), (temperatures.len(), molar_volumes.len()));
        Self {
            temperatures,
            molar_volumes,
            pascals,
        }
    }

    /// Returns `(temperature count, molar volume count)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.pascals.dim()
    }

    /// Temperatures along the rows, in K.
    #[must_use]
    pub fn temperatures(&self) -> ArrayView1<'_, f64> {
        self.temperatures.view()
    }

    /// Molar volumes along the columns, in m³/mol.
    #[must_use]
    pub fn molar_volumes(&self) -> ArrayView1<'_, f64> {
        self.molar_volumes.view()
    }

    /// The full grid of pressures, in Pa.
    #[must_use]
    pub fn pascals(&self) -> ArrayView2<'_, f64> {
        self.pascals.view()
    }

    /// Returns the pressure at row `i` and column `j`, if in bounds.
    #[must_use]
    pub fn pressure(&self, i: usize, j: usize) -> Option<Pressure> {
        self.pascals.get((i, j)).map(|&p| Pressure::new::<pascal>(p))
    }

    /// Iterates over `(temperature, isotherm)` pairs, one per row.
    pub fn rows(&self) -> impl Iterator<Item = (f64, ArrayView1<'_, f64>)> {
        self.temperatures
            .iter()
            .copied()
            .zip(self.pascals.rows())
    }

    /// Returns a copy of the grid converted to MPa.
    #[must_use]
    pub fn to_megapascals(&self) -> Array2<f64> {
        self.pascals.mapv(|p| p / 1e6)
    }

    /// Returns true if every pressure in the grid is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.pascals.iter().all(|p| p.is_finite())
    }
}
