//! Value types shared by the credit methods.

use crate::errors::RSCCResult;
use crate::validation::require_non_negative;
use serde::{Deserialize, Serialize};

/// Floating point type used for every quantity in the crate.
pub type FloatValue = f64;

pub const LABEL_CO2: &str = "CO2";
pub const LABEL_CH4: &str = "CH4";

/// Quantities of avoided emissions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmissionInput {
    /// CO2 emissions avoided
    /// unit: t CO2
    /// default: 10.0
    pub co2_avoided: FloatValue,
    /// CH4 emissions avoided
    /// unit: t CH4
    /// default: 1.0
    pub ch4_avoided: FloatValue,
}

impl Default for EmissionInput {
    fn default() -> Self {
        Self {
            co2_avoided: 10.0,
            ch4_avoided: 1.0,
        }
    }
}

impl EmissionInput {
    /// Create a validated emission input.
    pub fn new(co2_avoided: FloatValue, ch4_avoided: FloatValue) -> RSCCResult<Self> {
        let input = Self {
            co2_avoided,
            ch4_avoided,
        };
        input.validate()?;
        Ok(input)
    }

    /// Both quantities must be finite and non-negative.
    pub fn validate(&self) -> RSCCResult<()> {
        require_non_negative("co2_avoided", self.co2_avoided)?;
        require_non_negative("ch4_avoided", self.ch4_avoided)?;
        Ok(())
    }
}

/// One labelled term of a credit total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub label: String,
    /// unit: t CO2e
    pub value: FloatValue,
}

impl Contribution {
    pub fn new(label: &str, value: FloatValue) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// Outcome of applying a credit method to an [`EmissionInput`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditResult {
    /// Name of the method that produced the result
    pub method: String,
    /// unit: t CO2e
    pub total_credits: FloatValue,
    /// Contributions in input order (CO2 first, then CH4)
    pub breakdown: Vec<Contribution>,
    /// Effective CH4 equivalence factor. Only set by horizon-dependent methods.
    pub conversion_factor: Option<FloatValue>,
}

impl CreditResult {
    /// Look up a contribution by label
    pub fn contribution(&self, label: &str) -> Option<FloatValue> {
        self.breakdown
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_emissions() {
        let input = EmissionInput::default();
        assert_eq!(input.co2_avoided, 10.0);
        assert_eq!(input.ch4_avoided, 1.0);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_negative_ch4_rejected() {
        let err = EmissionInput::new(10.0, -1.0).unwrap_err();
        assert_eq!(err.field(), Some("ch4_avoided"));
    }

    #[test]
    fn test_contribution_lookup() {
        let result = CreditResult {
            method: "test".to_string(),
            total_credits: 3.0,
            breakdown: vec![Contribution::new(LABEL_CO2, 1.0), Contribution::new(LABEL_CH4, 2.0)],
            conversion_factor: None,
        };
        assert_eq!(result.contribution(LABEL_CH4), Some(2.0));
        assert_eq!(result.contribution("N2O"), None);
    }

    #[test]
    fn test_partial_deserialization() {
        let json = r#"{"ch4_avoided": 2.5}"#;
        let input: EmissionInput =
            serde_json::from_str(json).expect("Partial deserialization failed");
        assert_eq!(input.ch4_avoided, 2.5);
        assert_eq!(input.co2_avoided, 10.0);
    }
}
