//! Result bundle returned to the caller
//!
//! Everything here is a value object owned by the caller: the engine keeps
//! no reference to a result after returning it.

use serde::{Deserialize, Serialize};

use crate::benefit::SsaCalculation;
use crate::healthcare::{MedicaidEligibility, MedicareCalculation, NetBenefit};
use crate::inputs::ClaimAge;

/// One point of the claim-age sensitivity curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimAgeSweepPoint {
    pub age: ClaimAge,
    pub ss_monthly: f64,
    pub net_monthly: f64,
}

/// Complete output of one benefit computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResults {
    pub ssa: SsaCalculation,
    pub medicare: MedicareCalculation,
    pub medicaid: MedicaidEligibility,
    pub net: NetBenefit,

    /// One entry per allowed claim age, 62 through 70 ascending
    pub sweep: Vec<ClaimAgeSweepPoint>,
}
