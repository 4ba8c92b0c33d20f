//! Benefit Engine CLI
//!
//! Runs a sample benefit scenario and prints the itemized results

use benefit_engine::{inputs::modes::default_detailed_inputs, Engine, PlanType};
use std::fs::File;
use std::io::Write;

fn main() {
    env_logger::init();

    println!("Benefit Engine v0.1.0");
    println!("=====================\n");

    let engine = Engine::new();

    // Sample scenario: 1960 cohort claiming at FRA with Original Medicare
    let mut inputs = default_detailed_inputs(engine.config());
    inputs.birth_year = 1960;
    inputs.plan_type = PlanType::Original;

    println!("Scenario:");
    println!("  Birth Year: {}", inputs.birth_year);
    println!("  Claim Age: {}", inputs.claim_age);
    println!("  AIME: ${:.2}", inputs.aime.unwrap_or(0.0));
    println!("  Filing Status: {:?}", inputs.filing_status);
    println!("  MAGI: ${:.2}", inputs.magi);
    println!("  State: {}", inputs.state_code);
    println!("  Plan: {:?}", inputs.plan_type);
    println!();

    let results = engine
        .compute_detailed(&inputs)
        .expect("sample scenario should validate");

    println!("Social Security:");
    println!("  AIME:               ${:>10.2}", results.ssa.aime);
    println!("  PIA (at FRA {:.1}):  ${:>10.2}", results.ssa.fra, results.ssa.pia);
    println!("  Monthly at claim:   ${:>10.2}", results.ssa.monthly_at_claim_age);
    println!("  Adjustment:         {:>10.2}%", results.ssa.reduction_or_credit * 100.0);
    println!();

    println!("Medicare (monthly):");
    for line in results.medicare.premium_breakdown(inputs.plan_type) {
        println!("  {:<40} ${:>8.2}", line.label, line.amount);
    }
    println!("  {:<40} ${:>8.2}", "Total", results.medicare.total_monthly);
    println!();

    println!("Medicaid:");
    println!("  Dual eligible: {}", results.medicaid.eligible);
    if let Some(reason) = &results.medicaid.reason {
        println!("  {}", reason);
    }
    println!();

    println!("Net monthly benefit: ${:.2}", results.net.net_monthly);
    if let Some(dual) = results.net.dual_net_monthly {
        println!("Net if dual eligible: ${:.2}", dual);
    }

    // Claim-age sensitivity table
    println!("\nClaim-Age Sweep:");
    println!("{:>4} {:>14} {:>14}", "Age", "SS Monthly", "Net Monthly");
    println!("{}", "-".repeat(34));
    for point in &results.sweep {
        println!(
            "{:>4} {:>14.2} {:>14.2}",
            point.age, point.ss_monthly, point.net_monthly
        );
    }

    // Write the sweep to CSV
    let csv_path = "claim_age_sweep.csv";
    let mut file = File::create(csv_path).expect("Unable to create CSV file");
    writeln!(file, "Age,SSMonthly,NetMonthly").unwrap();
    for point in &results.sweep {
        writeln!(
            file,
            "{},{:.2},{:.2}",
            point.age, point.ss_monthly, point.net_monthly
        )
        .unwrap();
    }
    println!("\nSweep written to: {}", csv_path);
}
