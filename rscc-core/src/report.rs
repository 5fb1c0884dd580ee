//! Plain text rendering of a comparison
//!
//! Totals and contributions are shown to one decimal place and intermediate
//! factors to two. Inputs are echoed as given, with at least one decimal.

use crate::comparison::MethodComparison;
use crate::types::FloatValue;
use std::fmt;

/// Echo an input value, keeping a trailing `.0` on whole numbers.
fn format_input(value: FloatValue) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Time horizons are whole years in practice and are shown without decimals when whole.
fn format_years(value: FloatValue) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Text report of a comparison, rendered through [`fmt::Display`]
///
/// Inputs are echoed from the scenario stored on the comparison itself.
pub struct ComparisonReport<'a> {
    comparison: &'a MethodComparison,
}

impl<'a> ComparisonReport<'a> {
    pub fn new(comparison: &'a MethodComparison) -> Self {
        Self { comparison }
    }
}

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scenario = &self.comparison.scenario;
        let e_co2 = format_input(scenario.emissions.co2_avoided);
        let e_ch4 = format_input(scenario.emissions.ch4_avoided);
        let gwp = &self.comparison.gwp100;
        let rfp = &self.comparison.rfp;

        writeln!(f, "GWP100 Method")?;
        writeln!(f, "  Credits = E_CO2 + (E_CH4 x GWP100)")?;
        writeln!(f, "  CO2 Contribution: {} tonnes", e_co2)?;
        writeln!(
            f,
            "  CH4 Contribution: {} x {} = {:.1} tonnes",
            e_ch4,
            format_input(scenario.gwp100.gwp100),
            gwp.ch4_contribution
        )?;
        writeln!(f, "  Total Credits: {:.1} tonnes CO2e", gwp.total_credits)?;
        writeln!(f)?;

        writeln!(f, "Radiative Forcing Protocol")?;
        writeln!(f, "  Step 1: Integrated CH4 Forcing")?;
        writeln!(f, "    I_CH4 = tau_CH4 x (1 - e^(-T/tau_CH4))")?;
        writeln!(
            f,
            "    tau_CH4 = {} years",
            format_input(scenario.rfp.ch4_lifetime)
        )?;
        writeln!(f, "    T = {} years", format_years(scenario.rfp.time_horizon))?;
        writeln!(
            f,
            "    Integrated CH4 Forcing = {:.2} (unitless)",
            rfp.integrated_ch4
        )?;
        writeln!(f, "  Step 2: Effective Conversion Factor")?;
        writeln!(f, "    C_RfP = (I_CH4 / T) x (RE_CH4 / RE_CO2)")?;
        writeln!(f, "    RE Ratio = {}", format_input(scenario.rfp.re_ratio))?;
        writeln!(
            f,
            "    Effective Conversion Factor = {:.2}",
            rfp.conversion_factor
        )?;
        writeln!(f, "  CO2 Contribution: {} tonnes", e_co2)?;
        writeln!(
            f,
            "  CH4 Contribution: {} x {:.2} = {:.1} tonnes",
            e_ch4, rfp.conversion_factor, rfp.ch4_contribution
        )?;
        writeln!(f, "  Total Credits: {:.1} tonnes CO2e", rfp.total_credits)?;
        if rfp.saturated {
            writeln!(
                f,
                "  Note: the CH4 pulse has fully decayed within the horizon"
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Method Comparison")?;
        writeln!(f, "  GWP100 Credits: {:.1} tCO2e", gwp.total_credits)?;
        writeln!(
            f,
            "  RfP Credits: {:.1} tCO2e ({:.1} tCO2e difference)",
            rfp.total_credits, self.comparison.delta
        )?;
        writeln!(
            f,
            "  Comparison over {}-year period",
            format_years(self.comparison.time_horizon())
        )
    }
}

/// Render both methods, their derivation steps and the difference between them.
pub fn render_comparison(comparison: &MethodComparison) -> String {
    ComparisonReport::new(comparison).to_string()
}

/// Derivation of the default radiative efficiency ratio.
pub const WHY_173: &str = "\
Why 173?

From IPCC data, the 20-year Global Warming Potential (GWP20) of CH4 is about 84:

  GWP20(CH4) = integral_0^20 RF_CH4(t) dt / integral_0^20 RF_CO2(t) dt ~ 84

Step 1: Integrated forcing for CH4
  With an atmospheric lifetime tau_CH4 = 12 years, a CH4 pulse integrated over 20 years gives
  I_CH4 = RE_CH4 x tau_CH4 x (1 - e^(-20/tau_CH4))

Step 2: Integrated forcing for CO2
  CO2 forcing is approximated as constant over 20 years:
  I_CO2 ~ 20 x RE_CO2

Step 3: GWP20
  GWP20(CH4) = I_CH4 / I_CO2 = (RE_CH4 / RE_CO2) x tau_CH4 x (1 - e^(-20/tau_CH4)) / 20 ~ 84

  With tau_CH4 = 12 years: 12 x (1 - e^(-20/12)) ~ 9.73, and 9.73 / 20 ~ 0.487

  Therefore RE_CH4 / RE_CO2 ~ 84 / 0.487 ~ 173

Instantaneously, CH4's radiative efficiency is about 173 times that of CO2.
Over 20 years, factoring in methane decay, the net effect is a GWP20 of ~84.
";

/// Formulae behind both methods.
pub const METHODOLOGY: &str = "\
GWP100 Method
  Credits_GWP100 = E_CO2 + (E_CH4 x GWP100)
  where E_CO2 is CO2 emissions avoided, E_CH4 is CH4 emissions avoided and
  GWP100 is the Global Warming Potential over a 100-year horizon.

Radiative Forcing Protocol (RfP)
  Integrated forcing:           I_CH4 = tau_CH4 x (1 - e^(-T/tau_CH4))
  Effective conversion factor:  C_RfP = (I_CH4 / T) x (RE_CH4 / RE_CO2)
  Final credit calculation:     Credits_RfP = E_CO2 + (E_CH4 x C_RfP)
";
