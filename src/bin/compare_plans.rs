//! Compare Original Medicare against Medicare Advantage across a MAGI grid
//!
//! Usage: cargo run --bin compare_plans

use benefit_engine::{
    ClaimAge, DetailedModeInputs, Engine, FilingStatus, PlanType,
};
use rayon::prelude::*;
use std::time::Instant;

/// One comparison cell: plan type at one MAGI level
#[derive(Debug, Clone)]
struct PlanComparison {
    magi: f64,
    plan_type: PlanType,
    irmaa_applied: bool,
    total_premiums: f64,
    net_monthly: f64,
}

fn scenario(magi: f64, plan_type: PlanType) -> DetailedModeInputs {
    DetailedModeInputs {
        birth_year: 1960,
        claim_age: ClaimAge::new(67).expect("67 is a valid claim age"),
        aime: Some(6_000.0),
        earnings_history: None,
        use_aime: true,
        filing_status: FilingStatus::Single,
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
    }
}

fn main() {
    env_logger::init();

    let magi_grid = [
        50_000.0, 90_000.0, 110_000.0, 140_000.0, 170_000.0, 200_000.0, 450_000.0, 600_000.0,
    ];

    let engine = Engine::new();
    let start = Instant::now();

    let cells: Vec<(f64, PlanType)> = magi_grid
        .iter()
        .flat_map(|&magi| [(magi, PlanType::Original), (magi, PlanType::Advantage)])
        .collect();

    // Compute all cells in parallel
    let comparisons: Vec<PlanComparison> = cells
        .par_iter()
        .map(|&(magi, plan_type)| {
            let results = engine
                .compute_detailed(&scenario(magi, plan_type))
                .expect("grid scenario should validate");
            PlanComparison {
                magi,
                plan_type,
                irmaa_applied: results.medicare.irmaa_applied,
                total_premiums: results.medicare.total_monthly,
                net_monthly: results.net.net_monthly,
            }
        })
        .collect();

    println!("Computed {} cells in {:?}\n", comparisons.len(), start.elapsed());

    println!(
        "{:>10} {:>10} {:>7} {:>12} {:>12}",
        "MAGI", "Plan", "IRMAA", "Premiums", "Net/mo"
    );
    println!("{}", "-".repeat(56));

    for row in &comparisons {
        println!(
            "{:>10.0} {:>10} {:>7} {:>12.2} {:>12.2}",
            row.magi,
            format!("{:?}", row.plan_type),
            if row.irmaa_applied { "yes" } else { "no" },
            row.total_premiums,
            row.net_monthly,
        );
    }

    // Premium gap summary per MAGI level
    println!("\nOriginal-vs-Advantage premium gap:");
    for &magi in &magi_grid {
        let original = comparisons
            .iter()
            .find(|c| c.magi == magi && c.plan_type == PlanType::Original);
        let advantage = comparisons
            .iter()
            .find(|c| c.magi == magi && c.plan_type == PlanType::Advantage);
        if let (Some(o), Some(a)) = (original, advantage) {
            println!(
                "  MAGI {:>8.0}: ${:.2}/mo more for Original",
                magi,
                o.total_premiums - a.total_premiums
            );
        }
    }
}
