//! Mode conversion between Quick and Detailed inputs
//!
//! Quick mode trades precision for a five-field form; these mappings apply
//! the smart defaults that make that possible and preserve the common
//! fields when a user demotes a Detailed scenario back to Quick.

use chrono::Datelike;

use crate::config::ConfigTable;
use crate::inputs::data::{
    ClaimAge, DetailedModeInputs, FilingStatus, PlanType, QuickModeInputs,
};

/// Share of income assumed to survive into MAGI
const MAGI_INCOME_RATIO: f64 = 0.9;
/// Ceiling on the quick-mode MAGI proxy
const MAGI_PROXY_CAP: f64 = 80_000.0;
/// Typical Advantage premium assumed for quick scenarios
const QUICK_ADVANTAGE_PREMIUM: f64 = 20.0;
/// Years-worked assumption when Detailed mode has no figure
const DEFAULT_YEARS_WORKED: u32 = 25;
/// Assumed current age when seeding a first-run form
const DEFAULT_CURRENT_AGE: i32 = 45;

/// Expand Quick inputs into the Detailed shape with conservative defaults
///
/// `use_aime` stays false: the caller estimates AIME from `income_today`
/// before computing.
pub fn quick_to_detailed(quick: &QuickModeInputs, config: &ConfigTable) -> DetailedModeInputs {
    DetailedModeInputs {
        birth_year: quick.birth_year,
        claim_age: quick.claim_age,
        aime: None,
        earnings_history: None,
        use_aime: false,
        filing_status: FilingStatus::Single,
        magi: (quick.income_today * MAGI_INCOME_RATIO).min(MAGI_PROXY_CAP),
        state_code: quick.state_code.clone(),
        plan_type: PlanType::Advantage,
        medigap_premium_override: None,
        part_d_premium_override: None,
        advantage_premium_override: Some(QUICK_ADVANTAGE_PREMIUM),
        employer_healthcare_offset: 0.0,
        assumptions_year: config.ssa.plan_year(),
        has_part_a_coverage: true,
        part_a_premium: None,
    }
}

/// Collapse Detailed inputs back into the Quick shape
///
/// Carries the common fields; MAGI stands in for current income and the
/// years-worked count falls back to a fixed assumption.
pub fn detailed_to_quick(detailed: &DetailedModeInputs) -> QuickModeInputs {
    QuickModeInputs {
        birth_year: detailed.birth_year,
        claim_age: detailed.claim_age,
        income_today: detailed.magi,
        years_worked: DEFAULT_YEARS_WORKED,
        state_code: detailed.state_code.clone(),
    }
}

/// Seed a first-run Quick form for a 45-year-old claiming at FRA
pub fn default_quick_inputs(config: &ConfigTable) -> QuickModeInputs {
    let birth_year = chrono::Local::now().year() - DEFAULT_CURRENT_AGE;

    QuickModeInputs {
        birth_year,
        claim_age: default_claim_age(birth_year, config),
        income_today: 75_000.0,
        years_worked: DEFAULT_YEARS_WORKED,
        state_code: "CA".to_string(),
    }
}

/// Seed a first-run Detailed form
pub fn default_detailed_inputs(config: &ConfigTable) -> DetailedModeInputs {
    let birth_year = chrono::Local::now().year() - DEFAULT_CURRENT_AGE;

    DetailedModeInputs {
        birth_year,
        claim_age: default_claim_age(birth_year, config),
        aime: Some(5_000.0),
        earnings_history: None,
        use_aime: true,
        filing_status: FilingStatus::Single,
        magi: 75_000.0,
        state_code: "CA".to_string(),
        plan_type: PlanType::Original,
        medigap_premium_override: None,
        part_d_premium_override: None,
        advantage_premium_override: None,
        employer_healthcare_offset: 0.0,
        assumptions_year: config.ssa.plan_year(),
        has_part_a_coverage: true,
        part_a_premium: None,
    }
}

/// Whether a Quick-mode income merits an IRMAA warning in the UI
///
/// Pure predicate over the MAGI proxy and the lowest surcharge bracket.
pub fn should_show_irmaa_warning(
    income: f64,
    filing_status: FilingStatus,
    config: &ConfigTable,
) -> bool {
    income * MAGI_INCOME_RATIO > config.medicare.irmaa_threshold(filing_status)
}

fn default_claim_age(birth_year: i32, config: &ConfigTable) -> ClaimAge {
    let fra_floor = config.ssa.fra(birth_year).floor() as u8;
    ClaimAge::new(fra_floor).unwrap_or(ClaimAge::EARLIEST)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_fixture() -> QuickModeInputs {
        QuickModeInputs {
            birth_year: 1962,
            claim_age: ClaimAge::new(65).unwrap(),
            income_today: 60_000.0,
            years_worked: 30,
            state_code: "NY".to_string(),
        }
    }

    #[test]
    fn test_quick_to_detailed_defaults() {
        let config = ConfigTable::default_2025();
        let detailed = quick_to_detailed(&quick_fixture(), &config);

        assert_eq!(detailed.birth_year, 1962);
        assert_eq!(detailed.claim_age.years(), 65);
        assert_eq!(detailed.state_code, "NY");
        assert!(!detailed.use_aime);
        assert_eq!(detailed.filing_status, FilingStatus::Single);
        assert_eq!(detailed.plan_type, PlanType::Advantage);
        assert_eq!(detailed.advantage_premium_override, Some(20.0));
        assert!(detailed.has_part_a_coverage);
        assert!((detailed.magi - 54_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_magi_proxy_is_capped() {
        let config = ConfigTable::default_2025();
        let mut quick = quick_fixture();
        quick.income_today = 250_000.0;

        let detailed = quick_to_detailed(&quick, &config);
        assert_eq!(detailed.magi, 80_000.0);
    }

    #[test]
    fn test_mode_round_trip_preserves_common_fields() {
        let config = ConfigTable::default_2025();
        let quick = quick_fixture();

        let detailed = quick_to_detailed(&quick, &config);
        let back = detailed_to_quick(&detailed);

        assert_eq!(back.birth_year, quick.birth_year);
        assert_eq!(back.claim_age, quick.claim_age);
        assert_eq!(back.state_code, quick.state_code);
    }

    #[test]
    fn test_irmaa_warning_threshold() {
        let config = ConfigTable::default_2025();

        assert!(!should_show_irmaa_warning(75_000.0, FilingStatus::Single, &config));
        // 90% of 120k = 108k, above the 103k single threshold
        assert!(should_show_irmaa_warning(120_000.0, FilingStatus::Single, &config));
        // Married thresholds are twice as high
        assert!(!should_show_irmaa_warning(120_000.0, FilingStatus::Married, &config));
    }

    #[test]
    fn test_default_inputs_claim_at_fra() {
        let config = ConfigTable::default_2025();
        let quick = default_quick_inputs(&config);

        // A 45-year-old was born after 1960, so FRA is 67
        assert_eq!(quick.claim_age.years(), 67);
        assert_eq!(quick.years_worked, 25);
    }
}
