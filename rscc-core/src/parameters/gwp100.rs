//! GWP100 Parameters

use crate::errors::RSCCResult;
use crate::types::FloatValue;
use crate::validation::require_non_negative;
use serde::{Deserialize, Serialize};

/// Parameters for the GWP100 credit method
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Gwp100Parameters {
    /// 100-year Global Warming Potential of CH4 relative to CO2
    /// unit: dimensionless
    /// default: 28.0
    pub gwp100: FloatValue,
}

impl Default for Gwp100Parameters {
    fn default() -> Self {
        Self { gwp100: 28.0 }
    }
}

impl Gwp100Parameters {
    pub fn validate(&self) -> RSCCResult<()> {
        require_non_negative("gwp100", self.gwp100)?;
        Ok(())
    }
}
