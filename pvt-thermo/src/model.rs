//! Equation of state models.

pub mod peng_robinson;

pub use peng_robinson::PengRobinson;
