//! Carbon-credit equivalence for avoided CO2 and CH4 emissions
//!
//! Two methods are provided:
//! - GWP100: a fixed multiplicative equivalence factor for CH4
//! - Radiative Forcing Protocol (RfP): a horizon-dependent factor derived from
//!   the integrated decay of a CH4 forcing pulse
//!
//! All calculations are pure functions of their inputs. Inputs are validated
//! before any arithmetic and rejected with [`errors::RSCCError::InvalidInput`].

pub mod comparison;
pub mod errors;
pub mod methods;
pub mod parameters;
pub mod report;
pub mod scenario;
pub mod types;
pub mod validation;

pub use comparison::{compare, MethodComparison};
pub use methods::{compute_gwp100, compute_rfp, CreditMethod, Gwp100Method, RfpMethod};
pub use scenario::Scenario;
