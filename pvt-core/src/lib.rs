//! Core abstractions shared by the `pvt` crates.
//!
//! [`Component`] is a deterministic, fallible map from a typed input to a
//! typed output. The density grid and the Peng-Robinson model implement it.

mod component;

pub use component::Component;
