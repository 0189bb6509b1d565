use uom::si::{
    f64::{MolarHeatCapacity, MolarMass, Pressure, ThermodynamicTemperature},
    molar_heat_capacity::joule_per_kelvin_mole,
    molar_mass::kilogram_per_mole,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::SubstanceConstants;

use super::CubicFluid;

/// Marker type for carbon dioxide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarbonDioxide;

impl CubicFluid for CarbonDioxide {
    fn constants(&self) -> SubstanceConstants {
        SubstanceConstants {
            critical_temperature: ThermodynamicTemperature::new::<kelvin>(304.2),
            critical_pressure: Pressure::new::<pascal>(7.377e6),
            acentric_factor: 0.228,
            gas_constant: MolarHeatCapacity::new::<joule_per_kelvin_mole>(8.314),
        }
    }

    fn molar_mass(&self) -> MolarMass {
        MolarMass::new::<kilogram_per_mole>(0.044)
    }
}
