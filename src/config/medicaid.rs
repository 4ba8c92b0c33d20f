//! Medicaid income thresholds by state and asset limits
//!
//! Thresholds are annual income figures. Expansion states sit near 138% of
//! the federal poverty level; non-expansion states are far lower. States
//! not in the table use the federal baseline.

use std::collections::HashMap;

/// Medicaid eligibility tables
#[derive(Debug, Clone)]
pub struct MedicaidConfig {
    /// Annual income thresholds by state code
    income_thresholds: HashMap<String, f64>,

    /// Federal baseline for states not in the table (100% FPL)
    default_income_threshold: f64,

    /// Countable asset limit for a single applicant
    pub asset_limit_single: f64,

    /// Countable asset limit for a married couple
    pub asset_limit_married: f64,
}

impl MedicaidConfig {
    /// Build the 2025 table set from in-code constants
    pub fn default_2025() -> Self {
        let mut thresholds = HashMap::new();

        // Expansion states: 138% FPL
        for state in ["CA", "NY", "WA", "MA", "IL"] {
            thresholds.insert(state.to_string(), 20_783.0);
        }

        // Non-expansion states with restrictive limits
        for state in ["TX", "FL", "GA"] {
            thresholds.insert(state.to_string(), 4_500.0);
        }

        Self {
            income_thresholds: thresholds,
            default_income_threshold: 15_060.0,
            asset_limit_single: 2_000.0,
            asset_limit_married: 3_000.0,
        }
    }

    /// Create from loaded CSV tables
    pub fn from_loaded(loaded: &super::loader::LoadedConfig) -> Self {
        Self {
            income_thresholds: loaded.medicaid_thresholds.clone(),
            default_income_threshold: loaded.medicaid_default_threshold,
            asset_limit_single: loaded.medicaid_asset_limit_single,
            asset_limit_married: loaded.medicaid_asset_limit_married,
        }
    }

    /// Annual income threshold for a state, using the federal baseline for
    /// unknown codes
    pub fn income_threshold(&self, state_code: &str) -> f64 {
        self.income_thresholds
            .get(state_code)
            .copied()
            .unwrap_or(self.default_income_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_thresholds() {
        let medicaid = MedicaidConfig::default_2025();

        assert_eq!(medicaid.income_threshold("CA"), 20_783.0);
        assert_eq!(medicaid.income_threshold("TX"), 4_500.0);

        // Unknown states use the federal baseline
        assert_eq!(medicaid.income_threshold("OH"), 15_060.0);
        assert_eq!(medicaid.income_threshold("ZZ"), 15_060.0);
    }

    #[test]
    fn test_asset_limits() {
        let medicaid = MedicaidConfig::default_2025();

        assert_eq!(medicaid.asset_limit_single, 2_000.0);
        assert_eq!(medicaid.asset_limit_married, 3_000.0);
    }
}
