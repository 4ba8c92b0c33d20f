//! Quick-mode claim-age sweep report
//!
//! Usage: cargo run --bin sweep_report -- --birth-year 1962 --income 85000 --state NY

use benefit_engine::{ClaimAge, Engine, QuickModeInputs};
use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Claim-age sensitivity report from five quick inputs")]
struct Args {
    /// Birth year of the claimant
    #[arg(long, default_value_t = 1960)]
    birth_year: i32,

    /// Intended claim age (62-70)
    #[arg(long, default_value_t = 67)]
    claim_age: u8,

    /// Current annual income in dollars
    #[arg(long, default_value_t = 75000.0)]
    income: f64,

    /// Years worked so far
    #[arg(long, default_value_t = 25)]
    years_worked: u32,

    /// Two-letter state code
    #[arg(long, default_value = "CA")]
    state: String,

    /// Load configuration tables from this directory instead of built-ins
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Write the sweep to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let engine = match &args.config_dir {
        Some(dir) => Engine::from_csv_path(dir)?,
        None => Engine::new(),
    };

    let inputs = QuickModeInputs {
        birth_year: args.birth_year,
        claim_age: ClaimAge::new(args.claim_age)?,
        income_today: args.income,
        years_worked: args.years_worked,
        state_code: args.state.clone(),
    };

    let results = engine.compute_quick(&inputs)?;

    println!(
        "Estimated AIME ${:.0}, PIA ${:.2}, FRA {:.1}",
        results.ssa.aime, results.ssa.pia, results.ssa.fra
    );
    println!(
        "At claim age {}: ${:.2}/mo gross, ${:.2}/mo net of premiums",
        inputs.claim_age, results.ssa.monthly_at_claim_age, results.net.net_monthly
    );
    if results.medicaid.eligible {
        println!("Dual eligible: net ${:.2}/mo with Medicaid absorbing premiums",
            results.net.dual_net_monthly.unwrap_or(results.net.ss_monthly));
    }

    println!("\n{:>4} {:>14} {:>14}", "Age", "SS Monthly", "Net Monthly");
    println!("{}", "-".repeat(34));
    for point in &results.sweep {
        println!(
            "{:>4} {:>14.2} {:>14.2}",
            point.age, point.ss_monthly, point.net_monthly
        );
    }

    if let Some(path) = &args.csv {
        let mut file = File::create(path)?;
        writeln!(file, "Age,SSMonthly,NetMonthly")?;
        for point in &results.sweep {
            writeln!(file, "{},{:.2},{:.2}", point.age, point.ss_monthly, point.net_monthly)?;
        }
        println!("\nSweep written to: {}", path.display());
    }

    Ok(())
}
