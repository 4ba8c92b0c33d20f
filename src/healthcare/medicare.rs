//! Medicare premium calculation with IRMAA surcharges
//!
//! Premium amounts come in pre-resolved (overrides already applied), so
//! this module only branches on plan type and looks up surcharges. IRMAA
//! is a function of MAGI and filing status alone; premium overrides never
//! move a claimant between brackets.

use serde::{Deserialize, Serialize};

use crate::config::MedicareConfig;
use crate::inputs::{PlanType, ResolvedInputs};

/// Itemized monthly Medicare cost
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicareCalculation {
    pub part_a_premium: f64,
    pub part_b_base: f64,
    pub part_b_irmaa: f64,
    pub part_b_total: f64,
    pub part_d_base: f64,
    pub part_d_irmaa: f64,
    pub part_d_total: f64,
    pub medigap_premium: f64,
    pub advantage_premium: f64,

    /// The sum actually charged given the plan type
    pub total_monthly: f64,

    pub irmaa_applied: bool,
}

/// One display row of the premium breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PremiumLine {
    pub label: String,
    pub amount: f64,
}

/// Compute itemized Medicare premiums for a resolved scenario
pub fn calculate_medicare_premiums(
    inputs: &ResolvedInputs,
    medicare: &MedicareConfig,
) -> MedicareCalculation {
    let mut part_b_surcharge = 0.0;
    let mut part_d_surcharge = 0.0;

    if inputs.magi > 0.0 {
        let bracket = medicare.irmaa_bracket(inputs.magi, inputs.filing_status);
        part_b_surcharge = bracket.part_b_surcharge;
        part_d_surcharge = bracket.part_d_surcharge;
    }
    let irmaa_applied = part_b_surcharge > 0.0 || part_d_surcharge > 0.0;

    let part_b_total = inputs.part_b_base + part_b_surcharge;

    match inputs.plan_type {
        PlanType::Original => {
            let part_d_total = inputs.part_d_base + part_d_surcharge;

            MedicareCalculation {
                part_a_premium: inputs.part_a_premium,
                part_b_base: inputs.part_b_base,
                part_b_irmaa: part_b_surcharge,
                part_b_total,
                part_d_base: inputs.part_d_base,
                part_d_irmaa: part_d_surcharge,
                part_d_total,
                medigap_premium: inputs.medigap_premium,
                advantage_premium: 0.0,
                total_monthly: inputs.part_a_premium
                    + part_b_total
                    + part_d_total
                    + inputs.medigap_premium,
                irmaa_applied,
            }
        }
        PlanType::Advantage => {
            // Drug coverage is bundled into the Advantage premium, but the
            // Part D IRMAA surcharge is still billed separately
            MedicareCalculation {
                part_a_premium: inputs.part_a_premium,
                part_b_base: inputs.part_b_base,
                part_b_irmaa: part_b_surcharge,
                part_b_total,
                part_d_base: 0.0,
                part_d_irmaa: part_d_surcharge,
                part_d_total: part_d_surcharge,
                medigap_premium: 0.0,
                advantage_premium: inputs.advantage_premium,
                total_monthly: inputs.part_a_premium
                    + part_b_total
                    + part_d_surcharge
                    + inputs.advantage_premium,
                irmaa_applied,
            }
        }
    }
}

impl MedicareCalculation {
    /// Labeled premium rows for display, in billing order
    pub fn premium_breakdown(&self, plan_type: PlanType) -> Vec<PremiumLine> {
        let mut breakdown = Vec::new();

        if self.part_a_premium > 0.0 {
            breakdown.push(PremiumLine {
                label: "Part A (Hospital)".to_string(),
                amount: self.part_a_premium,
            });
        }

        breakdown.push(PremiumLine {
            label: if self.irmaa_applied {
                format!("Part B (Medical + IRMAA ${:.2})", self.part_b_irmaa)
            } else {
                "Part B (Medical)".to_string()
            },
            amount: self.part_b_total,
        });

        match plan_type {
            PlanType::Original => {
                if self.part_d_total > 0.0 {
                    breakdown.push(PremiumLine {
                        label: if self.irmaa_applied {
                            format!("Part D (Drugs + IRMAA ${:.2})", self.part_d_irmaa)
                        } else {
                            "Part D (Prescription Drugs)".to_string()
                        },
                        amount: self.part_d_total,
                    });
                }

                if self.medigap_premium > 0.0 {
                    breakdown.push(PremiumLine {
                        label: "Medigap Supplement".to_string(),
                        amount: self.medigap_premium,
                    });
                }
            }
            PlanType::Advantage => {
                if self.advantage_premium > 0.0 {
                    breakdown.push(PremiumLine {
                        label: "Medicare Advantage (Part C)".to_string(),
                        amount: self.advantage_premium,
                    });
                }

                if self.part_d_irmaa > 0.0 {
                    breakdown.push(PremiumLine {
                        label: "Part D IRMAA".to_string(),
                        amount: self.part_d_irmaa,
                    });
                }
            }
        }

        breakdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigTable;
    use crate::inputs::{resolve, ClaimAge, DetailedModeInputs, FilingStatus};

    fn resolved(plan_type: PlanType, magi: f64, filing: FilingStatus) -> ResolvedInputs {
        let config = ConfigTable::default_2025();
        let inputs = DetailedModeInputs {
            birth_year: 1960,
            claim_age: ClaimAge::new(67).unwrap(),
            aime: Some(5_000.0),
            earnings_history: None,
            use_aime: true,
            filing_status: filing,
            magi,
            state_code: "CA".to_string(),
            plan_type,
            medigap_premium_override: None,
            part_d_premium_override: None,
            advantage_premium_override: None,
            employer_healthcare_offset: 0.0,
            assumptions_year: 2025,
            has_part_a_coverage: true,
            part_a_premium: None,
        };
        resolve(&inputs, &config).unwrap()
    }

    #[test]
    fn test_original_plan_below_irmaa() {
        let config = ConfigTable::default_2025();
        let inputs = resolved(PlanType::Original, 75_000.0, FilingStatus::Single);

        let calc = calculate_medicare_premiums(&inputs, &config.medicare);
        assert!(!calc.irmaa_applied);
        assert_eq!(calc.part_b_irmaa, 0.0);
        assert_eq!(calc.part_d_irmaa, 0.0);
        assert_eq!(calc.part_b_total, 185.0);
        assert_eq!(calc.part_d_total, 50.0);
        assert_eq!(calc.medigap_premium, 150.0);
        assert_eq!(calc.advantage_premium, 0.0);
        assert_eq!(calc.total_monthly, 385.0);
    }

    #[test]
    fn test_irmaa_gating_on_zero_magi() {
        let config = ConfigTable::default_2025();
        let inputs = resolved(PlanType::Original, 0.0, FilingStatus::Single);

        let calc = calculate_medicare_premiums(&inputs, &config.medicare);
        assert!(!calc.irmaa_applied);
        assert_eq!(calc.part_b_irmaa, 0.0);
        assert_eq!(calc.part_d_irmaa, 0.0);
    }

    #[test]
    fn test_original_plan_with_irmaa() {
        let config = ConfigTable::default_2025();
        let inputs = resolved(PlanType::Original, 140_000.0, FilingStatus::Single);

        let calc = calculate_medicare_premiums(&inputs, &config.medicare);
        assert!(calc.irmaa_applied);
        assert_eq!(calc.part_b_irmaa, 185.0);
        assert_eq!(calc.part_d_irmaa, 33.30);
        assert_eq!(calc.part_b_total, 370.0);
        assert!((calc.part_d_total - 83.30).abs() < 1e-9);
    }

    #[test]
    fn test_advantage_plan_keeps_part_d_irmaa_only() {
        let config = ConfigTable::default_2025();
        let inputs = resolved(PlanType::Advantage, 140_000.0, FilingStatus::Single);

        let calc = calculate_medicare_premiums(&inputs, &config.medicare);
        assert_eq!(calc.part_d_base, 0.0);
        assert_eq!(calc.part_d_total, 33.30);
        assert_eq!(calc.medigap_premium, 0.0);
        // A=0, B=185+185, D surcharge=33.30, Advantage default=0
        assert!((calc.total_monthly - 403.30).abs() < 1e-9);
    }

    #[test]
    fn test_overrides_do_not_move_irmaa() {
        let config = ConfigTable::default_2025();
        let mut inputs = resolved(PlanType::Original, 140_000.0, FilingStatus::Single);
        inputs.part_d_base = 15.0;
        inputs.medigap_premium = 300.0;

        let calc = calculate_medicare_premiums(&inputs, &config.medicare);
        assert_eq!(calc.part_d_irmaa, 33.30);
        assert_eq!(calc.part_b_irmaa, 185.0);
        assert!((calc.part_d_total - 48.30).abs() < 1e-9);
        assert_eq!(calc.medigap_premium, 300.0);
    }

    #[test]
    fn test_premium_breakdown_lines() {
        let config = ConfigTable::default_2025();
        let inputs = resolved(PlanType::Original, 75_000.0, FilingStatus::Single);

        let calc = calculate_medicare_premiums(&inputs, &config.medicare);
        let lines = calc.premium_breakdown(PlanType::Original);

        // Part A is $0, so it is omitted
        let labels: Vec<&str> = lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Part B (Medical)", "Part D (Prescription Drugs)", "Medigap Supplement"]
        );
        let total: f64 = lines.iter().map(|l| l.amount).sum();
        assert!((total - calc.total_monthly).abs() < 1e-9);
    }
}
