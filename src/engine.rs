//! Computation engine and claim-age sweep
//!
//! Pre-loads the configuration tables once, then runs any number of
//! scenarios against them. Each computation is pure and self-contained:
//! no caching, no shared state, safe to call concurrently. Swapping
//! tables means building a new engine (or replacing the whole table via
//! `config_mut`), never patching entries in place, so an in-flight sweep
//! can never mix table years.

use std::path::Path;

use crate::benefit::{estimate, estimate_aime_from_income};
use crate::config::ConfigTable;
use crate::error::{ConfigError, ValidationError};
use crate::healthcare::{
    calculate_medicare_premiums, calculate_net_benefit, check_medicaid_eligibility,
};
use crate::inputs::modes::quick_to_detailed;
use crate::inputs::{
    resolve, validate_birth_year, ClaimAge, DetailedModeInputs, QuickModeInputs, ResolvedInputs,
    ScenarioInputs,
};
use crate::results::{ClaimAgeSweepPoint, ScenarioResults};

/// Benefit computation engine with pre-loaded configuration
///
/// # Example
/// ```ignore
/// let engine = Engine::new();
/// let results = engine.compute(&ScenarioInputs::Quick(inputs))?;
/// println!("net at {}: ${:.2}", inputs.claim_age, results.net.net_monthly);
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    config: ConfigTable,
}

impl Engine {
    /// Create an engine with the in-code 2025 tables
    pub fn new() -> Self {
        Self {
            config: ConfigTable::default_2025(),
        }
    }

    /// Create an engine by loading tables from CSV files
    pub fn from_csv() -> Result<Self, ConfigError> {
        Ok(Self {
            config: ConfigTable::from_csv()?,
        })
    }

    /// Create an engine from a specific configuration directory
    pub fn from_csv_path(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self {
            config: ConfigTable::from_csv_path(path)?,
        })
    }

    /// Create an engine with pre-built tables
    pub fn with_config(config: ConfigTable) -> Self {
        Self { config }
    }

    /// Get a reference to the configuration tables
    pub fn config(&self) -> &ConfigTable {
        &self.config
    }

    /// Get a mutable reference for wholesale table replacement
    pub fn config_mut(&mut self) -> &mut ConfigTable {
        &mut self.config
    }

    /// Compute full results for either input mode
    pub fn compute(&self, inputs: &ScenarioInputs) -> Result<ScenarioResults, ValidationError> {
        match inputs {
            ScenarioInputs::Quick(quick) => self.compute_quick(quick),
            ScenarioInputs::Detailed(detailed) => self.compute_detailed(detailed),
        }
    }

    /// Quick path: estimate AIME from current income, then run the
    /// detailed path on the expanded inputs
    pub fn compute_quick(&self, quick: &QuickModeInputs) -> Result<ScenarioResults, ValidationError> {
        validate_birth_year(quick.birth_year)?;

        let aime = estimate_aime_from_income(
            quick.income_today,
            quick.birth_year,
            quick.years_worked,
            &self.config.ssa,
        );

        let mut detailed = quick_to_detailed(quick, &self.config);
        detailed.aime = Some(aime);
        detailed.use_aime = true;

        self.compute_detailed(&detailed)
    }

    /// Detailed path: resolve inputs once, then compute
    pub fn compute_detailed(
        &self,
        detailed: &DetailedModeInputs,
    ) -> Result<ScenarioResults, ValidationError> {
        let resolved = resolve(detailed, &self.config)?;
        Ok(self.compute_resolved(&resolved))
    }

    fn compute_resolved(&self, resolved: &ResolvedInputs) -> ScenarioResults {
        let (ssa, medicare, medicaid, net) = self.run_pipeline(resolved, resolved.claim_age);

        // Re-run the whole pipeline per claim age for the sensitivity curve
        let sweep = ClaimAge::all()
            .map(|age| {
                let (ssa_at, _, _, net_at) = self.run_pipeline(resolved, age);
                ClaimAgeSweepPoint {
                    age,
                    ss_monthly: ssa_at.monthly_at_claim_age,
                    net_monthly: net_at.net_monthly,
                }
            })
            .collect();

        ScenarioResults {
            ssa,
            medicare,
            medicaid,
            net,
            sweep,
        }
    }

    fn run_pipeline(
        &self,
        resolved: &ResolvedInputs,
        claim_age: ClaimAge,
    ) -> (
        crate::benefit::SsaCalculation,
        crate::healthcare::MedicareCalculation,
        crate::healthcare::MedicaidEligibility,
        crate::healthcare::NetBenefit,
    ) {
        let ssa = estimate(
            &resolved.aime_source,
            resolved.birth_year,
            claim_age,
            &self.config.ssa,
        );

        let medicare = calculate_medicare_premiums(resolved, &self.config.medicare);

        let medicaid = check_medicaid_eligibility(
            ssa.monthly_at_claim_age,
            &resolved.state_code,
            0.0,
            &self.config.medicaid,
        );

        let net = calculate_net_benefit(
            ssa.monthly_at_claim_age,
            &medicare,
            &medicaid,
            resolved.employer_offset,
        );

        (ssa, medicare, medicaid, net)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
