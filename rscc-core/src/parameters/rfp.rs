//! Radiative Forcing Protocol Parameters
//!
//! The RfP method treats avoided CH4 as a forcing pulse that decays
//! exponentially with the atmospheric lifetime, while CO2 forcing is held
//! constant over the horizon.

use crate::errors::RSCCResult;
use crate::types::FloatValue;
use crate::validation::{require_non_negative, require_positive};
use serde::{Deserialize, Serialize};

/// Parameters for the RfP credit method
///
/// The effective CH4 equivalence factor is
///
/// $$C_{RfP} = \frac{RE_{CH4}}{RE_{CO2}} \cdot \frac{\tau (1 - e^{-T/\tau})}{T}$$
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RfpParameters {
    /// Time horizon over which forcing is integrated
    /// unit: years
    /// default: 5.0
    pub time_horizon: FloatValue,

    /// Atmospheric lifetime (e-folding time) of CH4
    /// unit: years
    /// default: 12.0
    pub ch4_lifetime: FloatValue,

    /// Ratio of instantaneous radiative efficiencies, RE_CH4 / RE_CO2
    /// unit: dimensionless
    /// default: 173.0
    pub re_ratio: FloatValue,
}

impl Default for RfpParameters {
    fn default() -> Self {
        Self {
            time_horizon: 5.0,
            ch4_lifetime: 12.0,
            re_ratio: 173.0,
        }
    }
}

impl RfpParameters {
    /// The horizon and lifetime are divisors so both must be strictly positive.
    pub fn validate(&self) -> RSCCResult<()> {
        require_positive("time_horizon", self.time_horizon)?;
        require_positive("ch4_lifetime", self.ch4_lifetime)?;
        require_non_negative("re_ratio", self.re_ratio)?;
        Ok(())
    }
}
