//! Medicaid dual-eligibility check
//!
//! A claimant below both the state income threshold and the asset limit is
//! dual eligible, and Medicaid absorbs their Medicare premiums.

use serde::{Deserialize, Serialize};

use crate::config::MedicaidConfig;

/// Result of the eligibility check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicaidEligibility {
    pub eligible: bool,

    /// Human-readable explanation of the determination
    pub reason: Option<String>,

    /// Monthly premiums owed when dual eligible; always 0 since Medicaid
    /// covers them
    pub adjusted_premiums: f64,
}

/// Check dual-eligibility from monthly income, state, and countable assets
pub fn check_medicaid_eligibility(
    monthly_income: f64,
    state_code: &str,
    assets: f64,
    medicaid: &MedicaidConfig,
) -> MedicaidEligibility {
    let monthly_threshold = medicaid.income_threshold(state_code) / 12.0;

    let income_eligible = monthly_income <= monthly_threshold;
    let asset_eligible = assets <= medicaid.asset_limit_single;

    if income_eligible && asset_eligible {
        return MedicaidEligibility {
            eligible: true,
            reason: Some(format!(
                "Monthly income ${:.0} is below {} threshold",
                monthly_income, state_code
            )),
            adjusted_premiums: 0.0,
        };
    }

    if !income_eligible {
        return MedicaidEligibility {
            eligible: false,
            reason: Some(format!(
                "Income exceeds {} Medicaid threshold (${:.0}/mo)",
                state_code, monthly_threshold
            )),
            adjusted_premiums: 0.0,
        };
    }

    MedicaidEligibility {
        eligible: false,
        reason: Some("Assets exceed Medicaid limit".to_string()),
        adjusted_premiums: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigTable;

    fn medicaid() -> MedicaidConfig {
        ConfigTable::default_2025().medicaid
    }

    #[test]
    fn test_eligible_in_expansion_state() {
        // CA threshold 20,783/yr = 1,732/mo
        let result = check_medicaid_eligibility(900.0, "CA", 0.0, &medicaid());

        assert!(result.eligible);
        assert_eq!(result.adjusted_premiums, 0.0);
        assert!(result.reason.unwrap().contains("below CA threshold"));
    }

    #[test]
    fn test_income_disqualifies() {
        let result = check_medicaid_eligibility(2_500.0, "CA", 0.0, &medicaid());

        assert!(!result.eligible);
        assert!(result.reason.unwrap().contains("exceeds CA Medicaid threshold"));
    }

    #[test]
    fn test_assets_disqualify_despite_low_income() {
        let result = check_medicaid_eligibility(900.0, "CA", 50_000.0, &medicaid());

        assert!(!result.eligible);
        assert_eq!(result.reason.unwrap(), "Assets exceed Medicaid limit");
    }

    #[test]
    fn test_restrictive_state_threshold() {
        // TX threshold 4,500/yr = 375/mo
        let eligible = check_medicaid_eligibility(300.0, "TX", 0.0, &medicaid());
        let ineligible = check_medicaid_eligibility(900.0, "TX", 0.0, &medicaid());

        assert!(eligible.eligible);
        assert!(!ineligible.eligible);
    }
}
