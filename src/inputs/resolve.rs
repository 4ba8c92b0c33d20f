//! Input resolution: one validation-and-defaulting pass before computation
//!
//! Every optional field and config-table default is applied here, so the
//! calculators downstream operate on a fully-populated record and contain
//! no fallback logic of their own.

use crate::config::ConfigTable;
use crate::error::ValidationError;
use crate::inputs::data::{
    ClaimAge, DetailedModeInputs, EarningsRecord, FilingStatus, PlanType, MAX_BIRTH_YEAR,
    MIN_BIRTH_YEAR,
};

/// Where the AIME comes from, settled at resolution time
#[derive(Debug, Clone)]
pub enum AimeSource {
    /// Caller-supplied AIME, taken as-is
    Direct(f64),
    /// Year-by-year earnings to aggregate under the highest-35 rule
    History(Vec<EarningsRecord>),
}

/// Fully-populated computation inputs
///
/// Premium fields hold final dollar amounts: caller overrides where given,
/// otherwise the configuration table's defaults for the assumptions year.
#[derive(Debug, Clone)]
pub struct ResolvedInputs {
    pub birth_year: i32,
    pub claim_age: ClaimAge,
    pub aime_source: AimeSource,
    pub filing_status: FilingStatus,
    pub magi: f64,
    pub state_code: String,
    pub plan_type: PlanType,
    pub part_a_premium: f64,
    pub part_b_base: f64,
    pub part_d_base: f64,
    pub medigap_premium: f64,
    pub advantage_premium: f64,
    pub employer_offset: f64,
    pub assumptions_year: i32,
}

/// Check a birth year against the supported range
pub fn validate_birth_year(birth_year: i32) -> Result<(), ValidationError> {
    if (MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR).contains(&birth_year) {
        Ok(())
    } else {
        Err(ValidationError::BirthYearOutOfRange(birth_year))
    }
}

/// Validate Detailed inputs and resolve every default
pub fn resolve(
    inputs: &DetailedModeInputs,
    config: &ConfigTable,
) -> Result<ResolvedInputs, ValidationError> {
    validate_birth_year(inputs.birth_year)?;

    let aime_source = if inputs.use_aime {
        match inputs.aime {
            Some(aime) if aime > 0.0 => AimeSource::Direct(aime),
            _ => return Err(ValidationError::MissingAime),
        }
    } else {
        match &inputs.earnings_history {
            Some(history) if !history.is_empty() => AimeSource::History(history.clone()),
            _ => return Err(ValidationError::EmptyEarningsHistory),
        }
    };

    let premiums = config.medicare.premiums_for(inputs.assumptions_year);

    let part_a_premium = if inputs.has_part_a_coverage {
        inputs.part_a_premium.unwrap_or(premiums.part_a_standard)
    } else {
        premiums.part_a_no_credits
    };

    Ok(ResolvedInputs {
        birth_year: inputs.birth_year,
        claim_age: inputs.claim_age,
        aime_source,
        filing_status: inputs.filing_status,
        magi: inputs.magi,
        state_code: inputs.state_code.clone(),
        plan_type: inputs.plan_type,
        part_a_premium,
        part_b_base: premiums.part_b_base,
        part_d_base: inputs.part_d_premium_override.unwrap_or(premiums.part_d_base),
        medigap_premium: inputs
            .medigap_premium_override
            .unwrap_or(premiums.medigap_default),
        advantage_premium: inputs
            .advantage_premium_override
            .unwrap_or(premiums.advantage_default),
        employer_offset: inputs.employer_healthcare_offset,
        assumptions_year: inputs.assumptions_year,
    })
}
