//! Scenario configuration
//!
//! A scenario bundles the avoided emissions with the parameters of both
//! methods. Scenarios are read from TOML; any value left out falls back to the
//! documented default scenario.
//!
//! ```toml
//! [emissions]
//! co2_avoided = 10.0
//! ch4_avoided = 1.0
//!
//! [gwp100]
//! gwp100 = 28.0
//!
//! [rfp]
//! time_horizon = 5
//! ch4_lifetime = 12.0
//! re_ratio = 173.0
//! ```

use crate::errors::{RSCCError, RSCCResult};
use crate::parameters::{Gwp100Parameters, RfpParameters};
use crate::types::EmissionInput;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Complete set of inputs for one comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    pub emissions: EmissionInput,
    pub gwp100: Gwp100Parameters,
    pub rfp: RfpParameters,
}

impl Scenario {
    /// Parse a scenario from a TOML document.
    pub fn from_toml_str(contents: &str) -> RSCCResult<Self> {
        toml::from_str(contents).map_err(|e| RSCCError::ScenarioParse(e.to_string()))
    }

    /// Read and parse a scenario file.
    pub fn from_path(path: impl AsRef<Path>) -> RSCCResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| RSCCError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), "Loaded scenario file");
        Self::from_toml_str(&contents)
    }

    /// Serialise the scenario as TOML.
    pub fn to_toml_string(&self) -> RSCCResult<String> {
        toml::to_string(self).map_err(|e| RSCCError::ScenarioParse(e.to_string()))
    }

    pub fn validate(&self) -> RSCCResult<()> {
        self.emissions.validate()?;
        self.gwp100.validate()?;
        self.rfp.validate()?;
        Ok(())
    }
}
