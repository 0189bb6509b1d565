//! Cubic equation of state modeling for pressure-volume-temperature grids.
//!
//! The pieces connect through plain data:
//!
//! 1. [`density`] turns a density sweep into molar volumes for a fluid.
//! 2. [`model::peng_robinson`] evaluates the Peng-Robinson equation of state
//!    over every (temperature, molar volume) pair.
//! 3. The resulting [`PressureGrid`] is handed to whatever consumes it.
//!
//! ```
//! use pvt_thermo::{
//!     density,
//!     fluid::{CarbonDioxide, CubicFluid},
//!     model::peng_robinson,
//! };
//!
//! let densities = density::density_sweep(50.0, 1000.0, 50)?;
//! let volumes = density::molar_volumes(CarbonDioxide.molar_mass(), densities.view())?;
//!
//! let grid = peng_robinson::evaluate(
//!     &[295.0, 325.0, 345.0, 375.0],
//!     &volumes.to_vec(),
//!     &CarbonDioxide.constants(),
//! )?;
//!
//! assert_eq!(grid.shape(), (4, 50));
//! # Ok::<(), pvt_thermo::EosError>(())
//! ```

mod error;
mod grid;
mod substance;

pub mod density;
pub mod fluid;
pub mod model;

pub use error::{EosError, InvalidInput};
pub use grid::PressureGrid;
pub use substance::SubstanceConstants;
