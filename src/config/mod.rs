//! Versioned configuration tables for benefit computations
//!
//! The engine never reads module-level constants; every calculator receives
//! a `ConfigTable` so annual constant updates and historical-table testing
//! need no code changes. A table is immutable once built; hot reloads swap
//! the whole table.

mod medicaid;
mod medicare;
mod ssa;
pub mod loader;

pub use medicaid::MedicaidConfig;
pub use medicare::{IrmaaBracket, MedicareConfig, MedicarePremiums};
pub use ssa::{
    BendPoints, SsaConfig, DELAYED_CREDIT_PER_MONTH, EARLY_REDUCTION_ADDITIONAL,
    EARLY_REDUCTION_FIRST_36, PIA_RATE_FIRST, PIA_RATE_SECOND, PIA_RATE_THIRD,
    WAGE_BASE_FALLBACK,
};
pub use loader::LoadedConfig;

use std::path::Path;

use crate::error::ConfigError;

/// Container for all benefit configuration tables
#[derive(Debug, Clone)]
pub struct ConfigTable {
    pub ssa: SsaConfig,
    pub medicare: MedicareConfig,
    pub medicaid: MedicaidConfig,
}

impl ConfigTable {
    /// Create tables from the in-code 2025 constants
    pub fn default_2025() -> Self {
        Self {
            ssa: SsaConfig::default_2025(),
            medicare: MedicareConfig::default_2025(),
            medicaid: MedicaidConfig::default_2025(),
        }
    }

    /// Load tables from CSV files in the default location (data/config/)
    pub fn from_csv() -> Result<Self, ConfigError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_CONFIG_PATH))
    }

    /// Load tables from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, ConfigError> {
        let loaded = LoadedConfig::load_from(path)?;

        Ok(Self {
            ssa: SsaConfig::from_loaded(&loaded),
            medicare: MedicareConfig::from_loaded(&loaded),
            medicaid: MedicaidConfig::from_loaded(&loaded),
        })
    }
}
