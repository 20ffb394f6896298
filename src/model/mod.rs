//! Core data structures.
//!
//! [`CveRecord`] is the typed form of an upstream CVE database record;
//! [`RiskAssessment`] is the normalized value derived from it by the risk
//! classifier.

mod assessment;
mod record;

pub use assessment::*;
pub use record::*;
