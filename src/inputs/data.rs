//! Input data model for benefit scenarios
//!
//! All types are plain value objects: built fresh per computation, never
//! mutated by the engine, safe to share across threads.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Earliest supported birth year
pub const MIN_BIRTH_YEAR: i32 = 1875;
/// Latest supported birth year
pub const MAX_BIRTH_YEAR: i32 = 2100;

/// Age at which Social Security benefits may be claimed, 62 through 70
///
/// Construction validates the range, so a `ClaimAge` held anywhere in the
/// engine is known good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ClaimAge(u8);

impl ClaimAge {
    /// Earliest allowed claim age
    pub const MIN: u8 = 62;
    /// Latest claim age; delayed credits stop accruing here
    pub const MAX: u8 = 70;

    /// The earliest claim age as a value
    pub const EARLIEST: ClaimAge = ClaimAge(Self::MIN);

    /// Validate and wrap a claim age
    pub fn new(age: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&age) {
            Ok(Self(age))
        } else {
            Err(ValidationError::ClaimAgeOutOfRange(age))
        }
    }

    /// Age in whole years
    pub fn years(self) -> u8 {
        self.0
    }

    /// Age expressed in months
    pub fn months(self) -> i32 {
        self.0 as i32 * 12
    }

    /// All allowed claim ages in ascending order
    pub fn all() -> impl Iterator<Item = ClaimAge> {
        (Self::MIN..=Self::MAX).map(ClaimAge)
    }
}

impl TryFrom<u8> for ClaimAge {
    type Error = ValidationError;

    fn try_from(age: u8) -> Result<Self, Self::Error> {
        Self::new(age)
    }
}

impl From<ClaimAge> for u8 {
    fn from(age: ClaimAge) -> u8 {
        age.0
    }
}

impl fmt::Display for ClaimAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tax filing status; affects only IRMAA bracket selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilingStatus {
    Single,
    Married,
}

/// Medicare coverage arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanType {
    /// Original Medicare: Parts A/B/D plus optional Medigap supplement
    Original,
    /// Medicare Advantage (Part C) with drug coverage bundled in
    Advantage,
}

/// One calendar year of earnings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EarningsRecord {
    pub year: i32,
    pub amount: f64,
}

/// Minimal five-field entry form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickModeInputs {
    pub birth_year: i32,
    pub claim_age: ClaimAge,

    /// Annual income today, used to estimate lifetime earnings
    pub income_today: f64,

    #[serde(default = "default_years_worked")]
    pub years_worked: u32,

    /// Two-letter state code for the Medicaid threshold lookup
    pub state_code: String,
}

/// Full control surface for a benefit scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedModeInputs {
    pub birth_year: i32,
    pub claim_age: ClaimAge,

    /// Supplied AIME; required positive when `use_aime` is set
    #[serde(default)]
    pub aime: Option<f64>,

    /// Year-by-year earnings; required non-empty when `use_aime` is unset
    #[serde(default)]
    pub earnings_history: Option<Vec<EarningsRecord>>,

    /// Whether to trust `aime` directly instead of aggregating earnings
    pub use_aime: bool,

    pub filing_status: FilingStatus,

    /// Modified adjusted gross income for IRMAA; <= 0 means not provided
    pub magi: f64,

    pub state_code: String,
    pub plan_type: PlanType,

    #[serde(default)]
    pub medigap_premium_override: Option<f64>,

    #[serde(default)]
    pub part_d_premium_override: Option<f64>,

    #[serde(default)]
    pub advantage_premium_override: Option<f64>,

    /// Employer or HSA healthcare subsidy, monthly dollars
    #[serde(default)]
    pub employer_healthcare_offset: f64,

    /// Which year's premium tables to use
    #[serde(default = "default_assumptions_year")]
    pub assumptions_year: i32,

    /// Whether 40 work credits make Part A premium-free
    pub has_part_a_coverage: bool,

    /// Part A premium override when covered
    #[serde(default)]
    pub part_a_premium: Option<f64>,
}

fn default_years_worked() -> u32 {
    25
}

fn default_assumptions_year() -> i32 {
    2025
}

/// Scenario input in either mode, tagged so dispatch is exhaustive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScenarioInputs {
    Quick(QuickModeInputs),
    Detailed(DetailedModeInputs),
}
