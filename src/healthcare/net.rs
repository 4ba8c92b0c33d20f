//! Net benefit synthesis
//!
//! Net = Social Security income minus out-of-pocket premiums after any
//! employer offset. The result is deliberately never clamped at zero: a
//! negative net benefit is real information for the claimant.

use serde::{Deserialize, Serialize};

use super::medicaid::MedicaidEligibility;
use super::medicare::MedicareCalculation;

/// Combined monthly picture of benefit and healthcare cost
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetBenefit {
    pub ss_monthly: f64,
    pub medicare_premiums: f64,
    pub employer_offset: f64,

    /// May be negative when premiums exceed the benefit
    pub net_monthly: f64,

    pub dual_eligible: bool,

    /// Net under Medicaid premium absorption; present only when dual
    /// eligible, alongside the standard figure so both can be shown
    pub dual_net_monthly: Option<f64>,
}

/// Combine benefit, premiums, and employer offset into net figures
pub fn calculate_net_benefit(
    ss_monthly: f64,
    medicare: &MedicareCalculation,
    medicaid: &MedicaidEligibility,
    employer_offset: f64,
) -> NetBenefit {
    let premiums = medicare.total_monthly;
    let offset = employer_offset.max(0.0);

    let net_monthly = ss_monthly - (premiums - offset).max(0.0);

    let dual_net_monthly = medicaid
        .eligible
        .then(|| ss_monthly - (medicaid.adjusted_premiums - offset).max(0.0));

    NetBenefit {
        ss_monthly,
        medicare_premiums: premiums,
        employer_offset: offset,
        net_monthly,
        dual_eligible: medicaid.eligible,
        dual_net_monthly,
    }
}
