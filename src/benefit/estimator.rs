//! Primary Insurance Amount and claim-age adjustment
//!
//! PIA applies marginal replacement rates of 90%, 32%, and 15% to the AIME
//! portions split at the two bend points for the claimant's eligibility
//! year. Claiming before FRA reduces the benefit by 5/9 of 1% for each of
//! the first 36 early months and 5/12 of 1% beyond; claiming after FRA
//! earns 8% per year in delayed credits, capped at age 70.

use serde::{Deserialize, Serialize};

use crate::config::{
    SsaConfig, DELAYED_CREDIT_PER_MONTH, EARLY_REDUCTION_ADDITIONAL, EARLY_REDUCTION_FIRST_36,
    PIA_RATE_FIRST, PIA_RATE_SECOND, PIA_RATE_THIRD,
};
use crate::inputs::{AimeSource, ClaimAge};

use super::aime::calculate_aime;

/// Output of the benefit estimator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SsaCalculation {
    /// Average Indexed Monthly Earnings
    pub aime: f64,

    /// Primary Insurance Amount, the benefit at FRA
    pub pia: f64,

    pub monthly_at_fra: f64,
    pub monthly_at_claim_age: f64,

    /// Signed fractional adjustment: negative for early-claim reduction,
    /// positive for delayed credits
    pub reduction_or_credit: f64,

    /// Full Retirement Age in years (fractional for 1955-1959 cohorts)
    pub fra: f64,
}

/// Benefit and adjustment at one claim age
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClaimAdjustment {
    /// Monthly benefit after adjustment, rounded to cents
    pub monthly_benefit: f64,

    /// Signed fraction applied to the PIA
    pub adjustment: f64,

    /// Months before (negative) or after (positive) FRA
    pub months_early_or_late: i32,
}

/// Compute PIA from AIME via the bend-point formula
///
/// The result is floored to the nearest $0.10 per SSA rounding rules.
pub fn calculate_pia(aime: f64, birth_year: i32, ssa: &SsaConfig) -> f64 {
    let bend = ssa.bend_points_for(birth_year + 62);

    let mut pia = aime.min(bend.first) * PIA_RATE_FIRST;

    if aime > bend.first {
        pia += (aime.min(bend.second) - bend.first) * PIA_RATE_SECOND;
    }

    if aime > bend.second {
        pia += (aime - bend.second) * PIA_RATE_THIRD;
    }

    (pia * 10.0).floor() / 10.0
}

/// Adjust a PIA for the chosen claim age
pub fn claim_age_adjustment(
    pia: f64,
    claim_age: ClaimAge,
    birth_year: i32,
    ssa: &SsaConfig,
) -> ClaimAdjustment {
    let months_diff = claim_age.months() - ssa.fra_months(birth_year);

    if months_diff == 0 {
        return ClaimAdjustment {
            monthly_benefit: pia,
            adjustment: 0.0,
            months_early_or_late: 0,
        };
    }

    if months_diff < 0 {
        early_reduction(pia, -months_diff)
    } else {
        delayed_credit(pia, months_diff)
    }
}

fn early_reduction(pia: f64, months_early: i32) -> ClaimAdjustment {
    let first_36 = months_early.min(36);
    let mut reduction = first_36 as f64 * EARLY_REDUCTION_FIRST_36;

    if months_early > 36 {
        reduction += (months_early - 36) as f64 * EARLY_REDUCTION_ADDITIONAL;
    }

    ClaimAdjustment {
        monthly_benefit: round_cents(pia * (1.0 - reduction)),
        adjustment: -reduction,
        months_early_or_late: -months_early,
    }
}

fn delayed_credit(pia: f64, months_delayed: i32) -> ClaimAdjustment {
    let credit = months_delayed as f64 * DELAYED_CREDIT_PER_MONTH;

    ClaimAdjustment {
        monthly_benefit: round_cents(pia * (1.0 + credit)),
        adjustment: credit,
        months_early_or_late: months_delayed,
    }
}

/// Full benefit estimate: AIME, PIA, and the claim-age-adjusted benefit
pub fn estimate(
    source: &AimeSource,
    birth_year: i32,
    claim_age: ClaimAge,
    ssa: &SsaConfig,
) -> SsaCalculation {
    let aime = match source {
        AimeSource::Direct(aime) => *aime,
        AimeSource::History(earnings) => calculate_aime(earnings, birth_year, ssa),
    };

    let pia = calculate_pia(aime, birth_year, ssa);
    let adjustment = claim_age_adjustment(pia, claim_age, birth_year, ssa);

    SsaCalculation {
        aime,
        pia,
        monthly_at_fra: pia,
        monthly_at_claim_age: adjustment.monthly_benefit,
        reduction_or_credit: adjustment.adjustment,
        fra: ssa.fra(birth_year),
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigTable;
    use approx::assert_relative_eq;

    fn ssa() -> SsaConfig {
        ConfigTable::default_2025().ssa
    }

    fn age(years: u8) -> ClaimAge {
        ClaimAge::new(years).unwrap()
    }

    #[test]
    fn test_pia_bend_point_formula() {
        let ssa = ssa();

        // 1963 cohort turns 62 in 2025: bend points 1226 / 7391
        // 5000 AIME: 1226 * 0.90 + 3774 * 0.32 = 1103.40 + 1207.68 = 2311.08
        let pia = calculate_pia(5_000.0, 1963, &ssa);
        assert_relative_eq!(pia, 2_311.0, epsilon = 1e-9);

        // Below the first bend point only the 90% band applies
        let low = calculate_pia(1_000.0, 1963, &ssa);
        assert_relative_eq!(low, 900.0, epsilon = 1e-9);

        // Above the second bend point the 15% band kicks in
        let high = calculate_pia(9_000.0, 1963, &ssa);
        let expected: f64 = 1_226.0 * 0.90 + (7_391.0 - 1_226.0) * 0.32 + (9_000.0 - 7_391.0) * 0.15;
        assert!((high - (expected * 10.0).floor() / 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_pia_rounds_down_to_dime() {
        let ssa = ssa();

        // 1234 AIME: 1103.40 + 8 * 0.32 = 1105.96 -> floors to 1105.90
        let pia = calculate_pia(1_234.0, 1963, &ssa);
        assert!((pia - 1_105.9).abs() < 1e-9, "PIA mismatch: {}", pia);
    }

    #[test]
    fn test_fra_claim_has_no_adjustment() {
        let ssa = ssa();

        let adj = claim_age_adjustment(2_000.0, age(67), 1960, &ssa);
        assert_eq!(adj.adjustment, 0.0);
        assert_eq!(adj.months_early_or_late, 0);
        assert_eq!(adj.monthly_benefit, 2_000.0);
    }

    #[test]
    fn test_early_claim_reduction_at_62() {
        let ssa = ssa();

        // 60 months early for a 1960 cohort: 36 * 5/9% + 24 * 5/12% = 30%
        let adj = claim_age_adjustment(2_000.0, age(62), 1960, &ssa);
        assert_eq!(adj.months_early_or_late, -60);
        assert!((adj.adjustment + 0.30).abs() < 1e-9);
        assert!((adj.monthly_benefit - 1_400.0).abs() < 0.005);
    }

    #[test]
    fn test_shallow_reduction_beyond_36_months() {
        let ssa = ssa();

        // 48 months early: 36 * 5/9% + 12 * 5/12% = 20% + 5% = 25%
        let adj = claim_age_adjustment(2_000.0, age(63), 1960, &ssa);
        assert!((adj.adjustment + 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_delayed_credit_at_70() {
        let ssa = ssa();

        // 36 months late: 36 * 2/3% = 24%
        let adj = claim_age_adjustment(2_000.0, age(70), 1960, &ssa);
        assert_eq!(adj.months_early_or_late, 36);
        assert!((adj.adjustment - 0.24).abs() < 1e-9);
        assert!((adj.monthly_benefit - 2_480.0).abs() < 0.005);
    }

    #[test]
    fn test_fractional_fra_cohort() {
        let ssa = ssa();

        // 1957 cohort: FRA 66.5, so claiming at 66 is 6 months early
        let adj = claim_age_adjustment(2_000.0, age(66), 1957, &ssa);
        assert_eq!(adj.months_early_or_late, -6);
        let expected = 6.0 * EARLY_REDUCTION_FIRST_36;
        assert!((adj.adjustment + expected).abs() < 1e-12);
    }

    #[test]
    fn test_estimate_from_direct_aime() {
        let ssa = ssa();

        let calc = estimate(&AimeSource::Direct(5_000.0), 1960, age(67), &ssa);
        assert_eq!(calc.aime, 5_000.0);
        assert_eq!(calc.fra, 67.0);
        assert_eq!(calc.reduction_or_credit, 0.0);
        assert_eq!(calc.monthly_at_claim_age, calc.monthly_at_fra);
        assert_eq!(calc.monthly_at_fra, calc.pia);
    }

    #[test]
    fn test_monthly_benefit_monotone_in_claim_age() {
        let ssa = ssa();

        let mut last = 0.0;
        for claim_age in ClaimAge::all() {
            let calc = estimate(&AimeSource::Direct(5_000.0), 1960, claim_age, &ssa);
            assert!(
                calc.monthly_at_claim_age >= last,
                "benefit decreased at age {}",
                claim_age
            );
            last = calc.monthly_at_claim_age;
        }
    }
}
