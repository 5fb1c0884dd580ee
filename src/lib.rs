//! CO2-equivalent credit calculator
//!
//! Re-exports [`rscc_core`] and, with the `python` feature, builds the `_lib`
//! Python extension module.

pub use rscc_core::*;

#[cfg(feature = "python")]
mod python;
