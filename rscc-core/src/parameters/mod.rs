//! Parameter sets for the credit methods
//!
//! Each method has an associated parameters struct with defaults matching the
//! documented default scenario. All structs use `#[serde(default)]` so partial
//! configuration files only need to name the values they change.

mod gwp100;
mod rfp;

pub use gwp100::Gwp100Parameters;
pub use rfp::RfpParameters;
