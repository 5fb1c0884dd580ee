//! Credit methods
//!
//! A credit method converts avoided emissions into tonnes of CO2-equivalent.
//! Both methods count avoided CO2 one-for-one and differ only in the factor
//! applied to avoided CH4.
//!
//! - [`Gwp100Method`]: fixed 100-year Global Warming Potential
//! - [`RfpMethod`]: horizon-dependent factor from the integrated decay of a CH4 forcing pulse

mod gwp100;
mod rfp;

pub use gwp100::{compute_gwp100, Gwp100Method, Gwp100Outcome};
pub use rfp::{compute_rfp, RfpMethod, RfpOutcome};

use crate::errors::RSCCResult;
use crate::types::{CreditResult, EmissionInput};

/// Common interface of the credit methods
///
/// Implementations hold their parameters and are stateless otherwise, so a
/// single instance can be shared between threads and reused for any number of
/// inputs.
pub trait CreditMethod: std::fmt::Debug + Send + Sync {
    /// Short display name of the method
    fn name(&self) -> &'static str;

    /// Convert the avoided emissions into credits.
    ///
    /// Inputs and parameters are validated before any arithmetic.
    fn compute(&self, input: &EmissionInput) -> RSCCResult<CreditResult>;
}
