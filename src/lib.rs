//! Benefit Engine - Social Security and healthcare cost computation for retirement planning
//!
//! This library provides:
//! - AIME/PIA benefit estimation with bend-point formulas and claim-age adjustment
//! - Medicare premium calculation with IRMAA surcharges (Original and Advantage plans)
//! - Medicaid dual-eligibility checks by state
//! - Net benefit synthesis and a full claim-age sensitivity sweep
//! - Versioned configuration tables, injectable and CSV-loadable

pub mod benefit;
pub mod config;
pub mod engine;
pub mod error;
pub mod healthcare;
pub mod inputs;
pub mod results;

// Re-export commonly used types
pub use config::ConfigTable;
pub use engine::Engine;
pub use error::{ConfigError, ValidationError};
pub use inputs::{
    ClaimAge, DetailedModeInputs, FilingStatus, PlanType, QuickModeInputs, ScenarioInputs,
};
pub use results::{ClaimAgeSweepPoint, ScenarioResults};
