//! Side-by-side evaluation of both credit methods

use crate::errors::RSCCResult;
use crate::methods::{Gwp100Method, Gwp100Outcome, RfpMethod, RfpOutcome};
use crate::scenario::Scenario;
use crate::types::{CreditResult, FloatValue};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Results of both methods for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodComparison {
    /// Inputs the results were computed from
    pub scenario: Scenario,
    pub gwp100: Gwp100Outcome,
    pub rfp: RfpOutcome,
    /// RfP total minus GWP100 total
    /// unit: t CO2e
    pub delta: FloatValue,
    /// Generic view of both results, GWP100 first
    pub results: Vec<CreditResult>,
}

impl MethodComparison {
    /// Horizon the RfP result was computed over
    /// unit: years
    pub fn time_horizon(&self) -> FloatValue {
        self.scenario.rfp.time_horizon
    }
}

/// Evaluate both methods for `scenario`.
///
/// The scenario is validated as a whole first so an invalid RfP parameter
/// does not leave a half-computed comparison behind.
pub fn compare(scenario: &Scenario) -> RSCCResult<MethodComparison> {
    scenario.validate()?;

    let gwp100 = Gwp100Method::from_parameters(scenario.gwp100).evaluate(&scenario.emissions)?;
    let rfp = RfpMethod::from_parameters(scenario.rfp).evaluate(&scenario.emissions)?;
    let delta = rfp.total_credits - gwp100.total_credits;

    info!(
        gwp100_total = gwp100.total_credits,
        rfp_total = rfp.total_credits,
        delta,
        time_horizon = scenario.rfp.time_horizon,
        "Compared credit methods"
    );

    Ok(MethodComparison {
        scenario: *scenario,
        gwp100,
        rfp,
        delta,
        results: vec![gwp100.to_credit_result(), rfp.to_credit_result()],
    })
}
