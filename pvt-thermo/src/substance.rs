use uom::si::{
    f64::{MolarHeatCapacity, Pressure, ThermodynamicTemperature},
    molar_heat_capacity::joule_per_kelvin_mole,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::EosError;

/// Substance-specific constants required by a cubic equation of state.
///
/// A plain value object: build one directly or take it from a
/// [`CubicFluid`](crate::fluid::CubicFluid) preset such as
/// [`CarbonDioxide`](crate::fluid::CarbonDioxide).
///
/// # Example
///
/// ```
/// use pvt_thermo::SubstanceConstants;
/// use uom::si::{
///     f64::{MolarHeatCapacity, Pressure, ThermodynamicTemperature},
///     molar_heat_capacity::joule_per_kelvin_mole,
///     pressure::megapascal,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let constants = SubstanceConstants {
///     critical_temperature: ThermodynamicTemperature::new::<kelvin>(304.2),
///     critical_pressure: Pressure::new::<megapascal>(7.377),
///     acentric_factor: 0.228,
///     gas_constant: MolarHeatCapacity::new::<joule_per_kelvin_mole>(8.314),
/// };
///
/// assert!(constants.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubstanceConstants {
    pub critical_temperature: ThermodynamicTemperature,
    pub critical_pressure: Pressure,
    pub acentric_factor: f64,
    pub gas_constant: MolarHeatCapacity,
}

impl SubstanceConstants {
    /// Validates that the constants define a non-singular equation of state.
    ///
    /// # Errors
    ///
    /// Returns [`EosError::SingularConfiguration`] if the critical temperature,
    /// critical pressure, or gas constant is not finite and strictly positive,
    /// or if the acentric factor is not finite.
    pub fn validate(&self) -> Result<(), EosError> {
        let singular = |reason| EosError::SingularConfiguration { reason };

        if !is_positive_finite(self.tc()) {
            return Err(singular("critical temperature must be finite and strictly positive"));
        }
        if !is_positive_finite(self.pc()) {
            return Err(singular("critical pressure must be finite and strictly positive"));
        }
        if !is_positive_finite(self.r()) {
            return Err(singular("gas constant must be finite and strictly positive"));
        }
        if !self.acentric_factor.is_finite() {
            return Err(singular("acentric factor must be finite"));
        }
        Ok(())
    }

    /// Critical temperature in K.
    pub(crate) fn tc(&self) -> f64 {
        self.critical_temperature.get::<kelvin>()
    }

    /// Critical pressure in Pa.
    pub(crate) fn pc(&self) -> f64 {
        self.critical_pressure.get::<pascal>()
    }

    /// Gas constant in J/(mol·K).
    pub(crate) fn r(&self) -> f64 {
        self.gas_constant.get::<joule_per_kelvin_mole>()
    }
}

/// Returns true if `value` is finite and strictly positive.
pub(crate) fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::fluid::{CarbonDioxide, CubicFluid};

    #[test]
    fn carbon_dioxide_is_valid() {
        assert!(CarbonDioxide.constants().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_critical_pressure() {
        let constants = SubstanceConstants {
            critical_pressure: Pressure::new::<pascal>(0.0),
            ..CarbonDioxide.constants()
        };
        assert!(matches!(
            constants.validate(),
            Err(EosError::SingularConfiguration { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_critical_temperature() {
        let constants = SubstanceConstants {
            critical_temperature: ThermodynamicTemperature::new::<kelvin>(-1.0),
            ..CarbonDioxide.constants()
        };
        assert!(matches!(
            constants.validate(),
            Err(EosError::SingularConfiguration { .. })
        ));
    }

    #[test]
    fn positive_finite_excludes_zero_and_non_finite() {
        assert!(is_positive_finite(1e-300));
        assert!(is_positive_finite(304.2));

        for value in [0.0, -0.0, -3.0, f64::NAN, f64::INFINITY] {
            assert!(!is_positive_finite(value), "accepted {value}");
        }
    }

    #[test]
    fn rejects_non_finite_constants() {
        let constants = SubstanceConstants {
            gas_constant: MolarHeatCapacity::new::<joule_per_kelvin_mole>(f64::NAN),
            ..CarbonDioxide.constants()
        };
        assert!(constants.validate().is_err());

        let constants = SubstanceConstants {
            acentric_factor: f64::INFINITY,
            ..CarbonDioxide.constants()
        };
        assert!(constants.validate().is_err());
    }
}
