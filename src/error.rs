//! Error types for input validation and configuration loading

use thiserror::Error;

/// Input validation failures, reported synchronously to the caller
///
/// These are contract violations on the caller's side and are never
/// defaulted away or clamped inside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Claim age outside the allowed 62-70 window
    #[error("claim age {0} is outside the allowed range 62-70")]
    ClaimAgeOutOfRange(u8),

    /// Birth year outside the supported range
    #[error("birth year {0} is outside the supported range 1875-2100")]
    BirthYearOutOfRange(i32),

    /// AIME input selected but no positive AIME value supplied
    #[error("AIME input selected but no positive AIME value supplied")]
    MissingAime,

    /// Earnings-history input selected but the history is empty
    #[error("earnings-history input selected but the history is empty")]
    EmptyEarningsHistory,
}

/// Failures while loading configuration tables from CSV
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid integer in configuration CSV: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("invalid number in configuration CSV: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
}
