//! GWP100 credit method
//!
//! $$\text{Credits}_{GWP100} = E_{CO2} + E_{CH4} \cdot GWP_{100}$$

use crate::errors::RSCCResult;
use crate::methods::CreditMethod;
use crate::parameters::Gwp100Parameters;
use crate::types::{Contribution, CreditResult, EmissionInput, FloatValue, LABEL_CH4, LABEL_CO2};
use crate::validation::require_finite_result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Credits computed with the GWP100 method
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gwp100Outcome {
    /// unit: t CO2e
    pub total_credits: FloatValue,
    /// unit: t CO2e
    pub co2_contribution: FloatValue,
    /// unit: t CO2e
    pub ch4_contribution: FloatValue,
}

impl Gwp100Outcome {
    /// Generic view of the outcome
    pub fn to_credit_result(&self) -> CreditResult {
        CreditResult {
            method: GWP100_NAME.to_string(),
            total_credits: self.total_credits,
            breakdown: vec![
                Contribution::new(LABEL_CO2, self.co2_contribution),
                Contribution::new(LABEL_CH4, self.ch4_contribution),
            ],
            conversion_factor: None,
        }
    }
}

const GWP100_NAME: &str = "GWP100";

/// Applies a fixed equivalence factor to avoided CH4
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Gwp100Method {
    parameters: Gwp100Parameters,
}

impl Gwp100Method {
    /// Create a GWP100 method with the default factor of 28
    pub fn new() -> Self {
        Self::from_parameters(Gwp100Parameters::default())
    }

    pub fn from_parameters(parameters: Gwp100Parameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &Gwp100Parameters {
        &self.parameters
    }

    /// Validate and evaluate the method for `input`.
    pub fn evaluate(&self, input: &EmissionInput) -> RSCCResult<Gwp100Outcome> {
        input.validate()?;
        self.parameters.validate()?;

        let co2_contribution = input.co2_avoided;
        let ch4_contribution =
            require_finite_result("ch4_contribution", input.ch4_avoided * self.parameters.gwp100)?;
        let total_credits =
            require_finite_result("total_credits", co2_contribution + ch4_contribution)?;

        debug!(
            co2_avoided = input.co2_avoided,
            ch4_avoided = input.ch4_avoided,
            gwp100 = self.parameters.gwp100,
            total_credits,
            "Computed GWP100 credits"
        );

        Ok(Gwp100Outcome {
            total_credits,
            co2_contribution,
            ch4_contribution,
        })
    }
}

impl CreditMethod for Gwp100Method {
    fn name(&self) -> &'static str {
        GWP100_NAME
    }

    fn compute(&self, input: &EmissionInput) -> RSCCResult<CreditResult> {
        Ok(self.evaluate(input)?.to_credit_result())
    }
}

/// Credits for avoided emissions using a fixed GWP100 factor.
pub fn compute_gwp100(
    co2_avoided: FloatValue,
    ch4_avoided: FloatValue,
    gwp100: FloatValue,
) -> RSCCResult<Gwp100Outcome> {
    let input = EmissionInput {
        co2_avoided,
        ch4_avoided,
    };
    Gwp100Method::from_parameters(Gwp100Parameters { gwp100 }).evaluate(&input)
}
