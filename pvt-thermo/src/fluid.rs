mod carbon_dioxide;

use uom::si::f64::MolarMass;

use crate::SubstanceConstants;

pub use carbon_dioxide::CarbonDioxide;

/// Trait used to define the constants a cubic equation of state needs for a
/// fluid.
///
/// Typically implemented for zero-sized marker fluids like [`CarbonDioxide`].
///
/// ```
/// use pvt_thermo::{SubstanceConstants, fluid::CubicFluid};
/// use uom::si::{
///     f64::{MolarHeatCapacity, MolarMass, Pressure, ThermodynamicTemperature},
///     molar_heat_capacity::joule_per_kelvin_mole,
///     molar_mass::kilogram_per_mole,
///     pressure::pascal,
///     thermodynamic_temperature::kelvin,
/// };
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// struct Nitrogen;
///
/// impl CubicFluid for Nitrogen {
///     fn constants(&self) -> SubstanceConstants {
///         SubstanceConstants {
///             critical_temperature: ThermodynamicTemperature::new::<kelvin>(126.2),
///             critical_pressure: Pressure::new::<pascal>(3.39e6),
///             acentric_factor: 0.039,
///             gas_constant: MolarHeatCapacity::new::<joule_per_kelvin_mole>(8.314),
///         }
///     }
///
///     fn molar_mass(&self) -> MolarMass {
///         MolarMass::new::<kilogram_per_mole>(0.028)
///     }
/// }
/// ```
pub trait CubicFluid {
    /// Returns the critical point, acentric factor, and gas constant.
    fn constants(&self) -> SubstanceConstants;

    /// Returns the molar mass used to convert density to molar volume.
    fn molar_mass(&self) -> MolarMass;
}
