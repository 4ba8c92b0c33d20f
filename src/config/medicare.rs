//! Medicare premium tables and IRMAA brackets
//!
//! Premiums are keyed by plan year; IRMAA brackets are the surcharge
//! schedule for the compiled table year, one ladder per filing status.

use std::collections::BTreeMap;

use crate::inputs::FilingStatus;

/// Base premium set for one plan year, in monthly dollars
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MedicarePremiums {
    /// Part A with 40 work credits ($0 for most retirees)
    pub part_a_standard: f64,
    /// Part A without sufficient work credits
    pub part_a_no_credits: f64,
    /// Part B standard premium
    pub part_b_base: f64,
    /// Typical Part D premium (varies by plan)
    pub part_d_base: f64,
    /// National-average Medigap supplement premium
    pub medigap_default: f64,
    /// National-average Medicare Advantage premium
    pub advantage_default: f64,
}

/// One IRMAA income bracket with its Part B and Part D surcharges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrmaaBracket {
    /// Inclusive lower MAGI bound
    pub min_magi: f64,
    /// Exclusive upper MAGI bound; `None` for the top bracket
    pub max_magi: Option<f64>,
    pub part_b_surcharge: f64,
    pub part_d_surcharge: f64,
}

impl IrmaaBracket {
    /// Whether a MAGI falls inside this bracket
    pub fn contains(&self, magi: f64) -> bool {
        magi >= self.min_magi && self.max_magi.map_or(true, |max| magi < max)
    }

    /// Whether this bracket carries any surcharge
    pub fn has_surcharge(&self) -> bool {
        self.part_b_surcharge > 0.0 || self.part_d_surcharge > 0.0
    }
}

/// Medicare premium and surcharge tables
#[derive(Debug, Clone)]
pub struct MedicareConfig {
    /// Premium sets keyed by plan year
    premiums: BTreeMap<i32, MedicarePremiums>,

    /// IRMAA ladder for single filers, ascending by MAGI
    single_brackets: Vec<IrmaaBracket>,

    /// IRMAA ladder for married-filing-jointly, ascending by MAGI
    married_brackets: Vec<IrmaaBracket>,
}

impl MedicareConfig {
    /// Build the 2025 table set from in-code constants
    pub fn default_2025() -> Self {
        Self {
            premiums: BTreeMap::from([(2025, MedicarePremiums {
                part_a_standard: 0.0,
                part_a_no_credits: 505.0,
                part_b_base: 185.0,
                part_d_base: 50.0,
                medigap_default: 150.0,
                advantage_default: 0.0,
            })]),
            single_brackets: Self::default_single_brackets(),
            married_brackets: Self::default_married_brackets(),
        }
    }

    /// Create from loaded CSV tables
    pub fn from_loaded(loaded: &super::loader::LoadedConfig) -> Self {
        Self {
            premiums: loaded.medicare_premiums.clone(),
            single_brackets: loaded.irmaa_single.clone(),
            married_brackets: loaded.irmaa_married.clone(),
        }
    }

    /// Premium set for a plan year, falling back to the latest table year
    pub fn premiums_for(&self, year: i32) -> MedicarePremiums {
        if let Some(p) = self.premiums.get(&year) {
            return *p;
        }
        match self.premiums.iter().next_back() {
            Some((latest, p)) => {
                log::warn!("no Medicare premiums for {}, using {} table", year, latest);
                *p
            }
            None => MedicarePremiums::default(),
        }
    }

    /// IRMAA ladder for a filing status
    pub fn irmaa_brackets(&self, filing_status: FilingStatus) -> &[IrmaaBracket] {
        match filing_status {
            FilingStatus::Single => &self.single_brackets,
            FilingStatus::Married => &self.married_brackets,
        }
    }

    /// Resolve the IRMAA bracket for a MAGI and filing status
    ///
    /// Falls back to the top bracket when no range matches.
    pub fn irmaa_bracket(&self, magi: f64, filing_status: FilingStatus) -> IrmaaBracket {
        let brackets = self.irmaa_brackets(filing_status);
        brackets
            .iter()
            .find(|b| b.contains(magi))
            .or_else(|| brackets.last())
            .copied()
            .unwrap_or(IrmaaBracket {
                min_magi: 0.0,
                max_magi: None,
                part_b_surcharge: 0.0,
                part_d_surcharge: 0.0,
            })
    }

    /// Lowest MAGI at which any IRMAA surcharge applies
    pub fn irmaa_threshold(&self, filing_status: FilingStatus) -> f64 {
        self.irmaa_brackets(filing_status)
            .iter()
            .find(|b| b.has_surcharge())
            .map(|b| b.min_magi)
            .unwrap_or(f64::INFINITY)
    }

    fn default_single_brackets() -> Vec<IrmaaBracket> {
        vec![
            IrmaaBracket { min_magi: 0.0, max_magi: Some(103_000.0), part_b_surcharge: 0.0, part_d_surcharge: 0.0 },
            IrmaaBracket { min_magi: 103_000.0, max_magi: Some(129_000.0), part_b_surcharge: 74.00, part_d_surcharge: 12.90 },
            IrmaaBracket { min_magi: 129_000.0, max_magi: Some(161_000.0), part_b_surcharge: 185.00, part_d_surcharge: 33.30 },
            IrmaaBracket { min_magi: 161_000.0, max_magi: Some(193_000.0), part_b_surcharge: 295.80, part_d_surcharge: 53.80 },
            IrmaaBracket { min_magi: 193_000.0, max_magi: Some(500_000.0), part_b_surcharge: 406.60, part_d_surcharge: 74.20 },
            IrmaaBracket { min_magi: 500_000.0, max_magi: None, part_b_surcharge: 443.90, part_d_surcharge: 81.00 },
        ]
    }

    fn default_married_brackets() -> Vec<IrmaaBracket> {
        vec![
            IrmaaBracket { min_magi: 0.0, max_magi: Some(206_000.0), part_b_surcharge: 0.0, part_d_surcharge: 0.0 },
            IrmaaBracket { min_magi: 206_000.0, max_magi: Some(258_000.0), part_b_surcharge: 74.00, part_d_surcharge: 12.90 },
            IrmaaBracket { min_magi: 258_000.0, max_magi: Some(322_000.0), part_b_surcharge: 185.00, part_d_surcharge: 33.30 },
            IrmaaBracket { min_magi: 322_000.0, max_magi: Some(386_000.0), part_b_surcharge: 295.80, part_d_surcharge: 53.80 },
            IrmaaBracket { min_magi: 386_000.0, max_magi: Some(750_000.0), part_b_surcharge: 406.60, part_d_surcharge: 74.20 },
            IrmaaBracket { min_magi: 750_000.0, max_magi: None, part_b_surcharge: 443.90, part_d_surcharge: 81.00 },
        ]
    }
}
