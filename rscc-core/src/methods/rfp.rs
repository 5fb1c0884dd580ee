//! Radiative Forcing Protocol credit method
//!
//! Avoided CH4 is treated as a forcing pulse decaying with lifetime $\tau$.
//! Its integral over the horizon $T$ is
//!
//! $$I_{CH4} = \int_0^T e^{-t/\tau}\, dt = \tau \left(1 - e^{-T/\tau}\right)$$
//!
//! CO2 forcing is approximated as constant over the horizon, so the
//! horizon-average equivalence factor is
//!
//! $$C_{RfP} = \frac{RE_{CH4}}{RE_{CO2}} \cdot \frac{I_{CH4}}{T}$$
//!
//! which tends to the radiative efficiency ratio as $T \to 0$ and to zero as
//! $T \to \infty$.

use crate::errors::RSCCResult;
use crate::methods::CreditMethod;
use crate::parameters::RfpParameters;
use crate::types::{Contribution, CreditResult, EmissionInput, FloatValue, LABEL_CH4, LABEL_CO2};
use crate::validation::{require_finite_result, require_non_negative, require_positive};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const RFP_NAME: &str = "RfP";

/// Credits computed with the RfP method, including the intermediate quantities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RfpOutcome {
    /// unit: t CO2e
    pub total_credits: FloatValue,
    /// unit: t CO2e
    pub co2_contribution: FloatValue,
    /// unit: t CO2e
    pub ch4_contribution: FloatValue,
    /// Horizon-average CH4 equivalence factor
    /// unit: dimensionless
    pub conversion_factor: FloatValue,
    /// Integrated CH4 forcing pulse per unit radiative efficiency
    /// unit: years
    pub integrated_ch4: FloatValue,
    /// The pulse has fully decayed within the horizon to machine precision
    pub saturated: bool,
}

impl RfpOutcome {
    /// Generic view of the outcome
    pub fn to_credit_result(&self) -> CreditResult {
        CreditResult {
            method: RFP_NAME.to_string(),
            total_credits: self.total_credits,
            breakdown: vec![
                Contribution::new(LABEL_CO2, self.co2_contribution),
                Contribution::new(LABEL_CH4, self.ch4_contribution),
            ],
            conversion_factor: Some(self.conversion_factor),
        }
    }
}

/// Derives a horizon-dependent equivalence factor for avoided CH4
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RfpMethod {
    parameters: RfpParameters,
}

impl RfpMethod {
    /// Create an RfP method with the default 5 year horizon
    pub fn new() -> Self {
        Self::from_parameters(RfpParameters::default())
    }

    pub fn from_parameters(parameters: RfpParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &RfpParameters {
        &self.parameters
    }

    /// Integral of a unit forcing pulse decaying with `ch4_lifetime` over `[0, time_horizon]`
    ///
    /// `1 - e^{-x}` is evaluated as `-expm1(-x)` to keep full precision for
    /// horizons much shorter than the lifetime.
    pub fn integrated_forcing(time_horizon: FloatValue, ch4_lifetime: FloatValue) -> FloatValue {
        ch4_lifetime * -(-time_horizon / ch4_lifetime).exp_m1()
    }

    /// Mean of the decaying pulse over the horizon, `I_CH4 / T`, in `(0, 1]`.
    ///
    /// Below `T / tau = f64::EPSILON` the first order expansion `1 - x / 2` is
    /// used, so horizons whose ratio to the lifetime underflows still give the
    /// `T -> 0` limit of 1 rather than `0 / 0`.
    fn average_decay(time_horizon: FloatValue, ch4_lifetime: FloatValue) -> FloatValue {
        let x = time_horizon / ch4_lifetime;
        if x < FloatValue::EPSILON {
            1.0 - 0.5 * x
        } else {
            -(-x).exp_m1() / x
        }
    }

    /// Horizon-average CH4 equivalence factor
    ///
    /// Strictly between zero and `re_ratio` for `1e-15 * tau <= T` and `T`
    /// finite. Much shorter horizons round to `re_ratio` exactly, the `T -> 0`
    /// limit. Horizons long enough for the factor to drop below the smallest
    /// positive `f64` give zero.
    pub fn conversion_factor(
        time_horizon: FloatValue,
        ch4_lifetime: FloatValue,
        re_ratio: FloatValue,
    ) -> FloatValue {
        re_ratio * Self::average_decay(time_horizon, ch4_lifetime)
    }

    /// Whether `e^{-T/tau}` is below machine epsilon, i.e. the integrated pulse
    /// is indistinguishable from the lifetime.
    pub fn is_saturated(time_horizon: FloatValue, ch4_lifetime: FloatValue) -> bool {
        (-time_horizon / ch4_lifetime).exp() < FloatValue::EPSILON
    }

    /// Radiative efficiency ratio that reproduces `reference_factor` as the
    /// horizon-average equivalence factor.
    ///
    /// This inverts [`RfpMethod::conversion_factor`]. With the IPCC GWP20 of 84,
    /// a 20 year horizon and a 12 year lifetime it gives the ratio of about 173
    /// used by default.
    pub fn implied_re_ratio(
        reference_factor: FloatValue,
        time_horizon: FloatValue,
        ch4_lifetime: FloatValue,
    ) -> RSCCResult<FloatValue> {
        require_non_negative("reference_factor", reference_factor)?;
        require_positive("time_horizon", time_horizon)?;
        require_positive("ch4_lifetime", ch4_lifetime)?;

        let ratio = reference_factor / Self::average_decay(time_horizon, ch4_lifetime);
        require_finite_result("re_ratio", ratio)
    }

    /// Validate and evaluate the method for `input`.
    pub fn evaluate(&self, input: &EmissionInput) -> RSCCResult<RfpOutcome> {
        input.validate()?;
        self.parameters.validate()?;

        let RfpParameters {
            time_horizon,
            ch4_lifetime,
            re_ratio,
        } = self.parameters;

        let integrated_ch4 = Self::integrated_forcing(time_horizon, ch4_lifetime);
        let conversion_factor = Self::conversion_factor(time_horizon, ch4_lifetime, re_ratio);

        let co2_contribution = input.co2_avoided;
        let ch4_contribution =
            require_finite_result("ch4_contribution", input.ch4_avoided * conversion_factor)?;
        let total_credits =
            require_finite_result("total_credits", co2_contribution + ch4_contribution)?;

        let saturated = Self::is_saturated(time_horizon, ch4_lifetime);
        if saturated {
            warn!(
                time_horizon,
                ch4_lifetime,
                "Time horizon is long enough that the CH4 pulse has fully decayed; \
                 the conversion factor only scales with 1 / time_horizon"
            );
        }

        debug!(
            time_horizon,
            ch4_lifetime,
            re_ratio,
            integrated_ch4,
            conversion_factor,
            total_credits,
            "Computed RfP credits"
        );

        Ok(RfpOutcome {
            total_credits,
            co2_contribution,
            ch4_contribution,
            conversion_factor,
            integrated_ch4,
            saturated,
        })
    }
}

impl CreditMethod for RfpMethod {
    fn name(&self) -> &'static str {
        RFP_NAME
    }

    fn compute(&self, input: &EmissionInput) -> RSCCResult<CreditResult> {
        Ok(self.evaluate(input)?.to_credit_result())
    }
}

/// Credits for avoided emissions using the Radiative Forcing Protocol.
pub fn compute_rfp(
    co2_avoided: FloatValue,
    ch4_avoided: FloatValue,
    time_horizon: FloatValue,
    ch4_lifetime: FloatValue,
    re_ratio: FloatValue,
) -> RSCCResult<RfpOutcome> {
    let input = EmissionInput {
        co2_avoided,
        ch4_avoided,
    };
    RfpMethod::from_parameters(RfpParameters {
        time_horizon,
        ch4_lifetime,
        re_ratio,
    })
    .evaluate(&input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RSCCError;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_scenario() {
        let outcome = compute_rfp(10.0, 1.0, 5.0, 12.0, 173.0).unwrap();

        let expected_integrated = 12.0 * (1.0 - (-5.0_f64 / 12.0).exp());
        assert_relative_eq!(outcome.integrated_ch4, expected_integrated, epsilon = 1e-12);
        assert!((outcome.integrated_ch4 - 4.0891).abs() < 1e-4);
        assert!((outcome.conversion_factor - 141.4833).abs() < 1e-4);
        assert!((outcome.total_credits - 151.4833).abs() < 1e-4);
        assert!(!outcome.saturated);
    }

    #[test]
    fn test_factor_bounded_by_re_ratio() {
        for horizon in [0.5, 1.0, 5.0, 20.0, 50.0, 100.0, 500.0] {
            let factor = RfpMethod::conversion_factor(horizon, 12.0, 173.0);
            assert!(
                factor > 0.0 && factor < 173.0,
                "horizon {horizon}: factor {factor} outside (0, 173)"
            );
        }
    }

    #[test]
    fn test_short_horizon_limit() {
        let factor = RfpMethod::conversion_factor(0.001, 12.0, 173.0);
        assert!(((factor - 173.0) / 173.0).abs() < 0.01);
    }

    #[test]
    fn test_underflowing_horizon_gives_short_horizon_limit() {
        // T / tau underflows to zero; the factor must not collapse to 0 / 0 or 0
        assert_eq!(RfpMethod::conversion_factor(5e-324, 12.0, 173.0), 173.0);
        assert_eq!(RfpMethod::conversion_factor(1e-300, 12.0, 173.0), 173.0);

        let outcome = compute_rfp(0.0, 1.0, 5e-324, 12.0, 173.0).unwrap();
        assert_eq!(outcome.conversion_factor, 173.0);
    }

    #[test]
    fn test_factor_strictly_below_re_ratio_above_epsilon_scale() {
        let factor = RfpMethod::conversion_factor(12.0 * 1e-15, 12.0, 173.0);
        assert!(factor < 173.0 && factor > 172.9);
    }

    #[test]
    fn test_overflow_rejected() {
        let err = compute_rfp(1e308, 1e308, 5.0, 12.0, 173.0).unwrap_err();
        assert!(matches!(err, RSCCError::InvalidInput { .. }));
        assert_eq!(err.field(), Some("ch4_contribution"));

        let err = compute_rfp(1.7e308, 1e306, 5.0, 12.0, 173.0).unwrap_err();
        assert_eq!(err.field(), Some("total_credits"));
    }

    #[test]
    fn test_long_horizon_limit() {
        let outcome = compute_rfp(0.0, 1.0, 1000.0, 12.0, 173.0).unwrap();
        assert!(outcome.conversion_factor < 2.1);
        assert_relative_eq!(outcome.integrated_ch4, 12.0, epsilon = 1e-12);
        assert!(outcome.saturated);
    }

    #[test]
    fn test_factor_strictly_decreasing() {
        let mut previous = FloatValue::INFINITY;
        for step in 1..=400 {
            let horizon = step as FloatValue * 0.25;
            let factor = RfpMethod::conversion_factor(horizon, 12.0, 173.0);
            assert!(
                factor < previous,
                "factor not decreasing at horizon {horizon}: {factor} >= {previous}"
            );
            previous = factor;
        }
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let err = compute_rfp(10.0, 1.0, 0.0, 12.0, 173.0).unwrap_err();
        assert!(matches!(err, RSCCError::InvalidInput { .. }));
        assert_eq!(err.field(), Some("time_horizon"));
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        assert!(compute_rfp(10.0, -1.0, 5.0, 12.0, 173.0).is_err());
        assert!(compute_rfp(10.0, 1.0, -5.0, 12.0, 173.0).is_err());
        assert!(compute_rfp(10.0, 1.0, 5.0, 0.0, 173.0).is_err());
        assert!(compute_rfp(10.0, 1.0, 5.0, -12.0, 173.0).is_err());
        assert!(compute_rfp(10.0, 1.0, 5.0, 12.0, -173.0).is_err());
        assert!(compute_rfp(10.0, 1.0, f64::NAN, 12.0, 173.0).is_err());
    }

    #[test]
    fn test_implied_re_ratio_from_gwp20() {
        let ratio = RfpMethod::implied_re_ratio(84.0, 20.0, 12.0).unwrap();
        assert!((ratio - 172.6).abs() < 0.1, "got {ratio}");
        assert_eq!(ratio.round(), 173.0);

        // Feeding the ratio back reproduces the reference factor
        let factor = RfpMethod::conversion_factor(20.0, 12.0, ratio);
        assert_relative_eq!(factor, 84.0, epsilon = 1e-9);
    }

    #[test]
    fn test_credit_result_carries_factor() {
        let result = RfpMethod::new().compute(&EmissionInput::default()).unwrap();
        assert_eq!(result.method, "RfP");
        let factor = result.conversion_factor.unwrap();
        assert_relative_eq!(
            result.contribution(LABEL_CH4).unwrap(),
            factor,
            epsilon = 1e-12
        );
    }
}
