//! CSV-based configuration loader
//!
//! Loads the benefit constants from CSV files in data/config/ so annual
//! SSA/CMS updates are data changes, not code changes.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::path::Path;

use crate::config::medicare::{IrmaaBracket, MedicarePremiums};
use crate::config::ssa::BendPoints;
use crate::error::ConfigError;

/// Default path to the configuration directory
pub const DEFAULT_CONFIG_PATH: &str = "data/config";

/// Load bend points from CSV
/// Expected columns: year,first,second
pub fn load_bend_points(path: &Path) -> Result<BTreeMap<i32, BendPoints>, ConfigError> {
    let file = File::open(path.join("bend_points.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut points = BTreeMap::new();

    for result in reader.records() {
        let record = result?;
        let year: i32 = record[0].parse()?;
        let first: f64 = record[1].parse()?;
        let second: f64 = record[2].parse()?;
        points.insert(year, BendPoints { first, second });
    }

    Ok(points)
}

/// Load wage-index factors from CSV
/// Expected columns: year,factor
pub fn load_wage_index_factors(path: &Path) -> Result<BTreeMap<i32, f64>, ConfigError> {
    let file = File::open(path.join("wage_index_factors.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut factors = BTreeMap::new();

    for result in reader.records() {
        let record = result?;
        let year: i32 = record[0].parse()?;
        let factor: f64 = record[1].parse()?;
        factors.insert(year, factor);
    }

    Ok(factors)
}

/// Load taxable wage bases from CSV
/// Expected columns: year,amount
pub fn load_wage_bases(path: &Path) -> Result<BTreeMap<i32, f64>, ConfigError> {
    let file = File::open(path.join("wage_bases.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut bases = BTreeMap::new();

    for result in reader.records() {
        let record = result?;
        let year: i32 = record[0].parse()?;
        let amount: f64 = record[1].parse()?;
        bases.insert(year, amount);
    }

    Ok(bases)
}

/// Load Medicare premium sets from CSV
/// Expected columns: year,part_a_standard,part_a_no_credits,part_b_base,
/// part_d_base,medigap_default,advantage_default
pub fn load_medicare_premiums(path: &Path) -> Result<BTreeMap<i32, MedicarePremiums>, ConfigError> {
    let file = File::open(path.join("medicare_premiums.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut premiums = BTreeMap::new();

    for result in reader.records() {
        let record = result?;
        let year: i32 = record[0].parse()?;
        premiums.insert(year, MedicarePremiums {
            part_a_standard: record[1].parse()?,
            part_a_no_credits: record[2].parse()?,
            part_b_base: record[3].parse()?,
            part_d_base: record[4].parse()?,
            medigap_default: record[5].parse()?,
            advantage_default: record[6].parse()?,
        });
    }

    Ok(premiums)
}

/// Load IRMAA brackets from CSV, split by filing status
/// Expected columns: filing_status,min_magi,max_magi,part_b_surcharge,
/// part_d_surcharge (empty max_magi marks the open top bracket)
pub fn load_irmaa_brackets(
    path: &Path,
) -> Result<(Vec<IrmaaBracket>, Vec<IrmaaBracket>), ConfigError> {
    let file = File::open(path.join("irmaa_brackets.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut single = Vec::new();
    let mut married = Vec::new();

    for result in reader.records() {
        let record = result?;
        let max_field = record[2].trim();
        let bracket = IrmaaBracket {
            min_magi: record[1].parse()?,
            max_magi: if max_field.is_empty() {
                None
            } else {
                Some(max_field.parse()?)
            },
            part_b_surcharge: record[3].parse()?,
            part_d_surcharge: record[4].parse()?,
        };
        match record[0].trim() {
            "MARRIED" => married.push(bracket),
            _ => single.push(bracket),
        }
    }

    single.sort_by(|a, b| a.min_magi.total_cmp(&b.min_magi));
    married.sort_by(|a, b| a.min_magi.total_cmp(&b.min_magi));

    Ok((single, married))
}

/// Load Medicaid income thresholds from CSV
/// Expected columns: state,annual_income (state DEFAULT sets the baseline)
pub fn load_medicaid_thresholds(path: &Path) -> Result<(HashMap<String, f64>, f64), ConfigError> {
    let file = File::open(path.join("medicaid_thresholds.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut thresholds = HashMap::new();
    let mut default = 15_060.0;

    for result in reader.records() {
        let record = result?;
        let state = record[0].trim().to_string();
        let amount: f64 = record[1].parse()?;
        if state == "DEFAULT" {
            default = amount;
        } else {
            thresholds.insert(state, amount);
        }
    }

    Ok((thresholds, default))
}

/// Load Medicaid asset limits from CSV
/// Expected columns: status,limit (SINGLE and MARRIED rows)
pub fn load_medicaid_asset_limits(path: &Path) -> Result<(f64, f64), ConfigError> {
    let file = File::open(path.join("medicaid_asset_limits.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut single = 2_000.0;
    let mut married = 3_000.0;

    for result in reader.records() {
        let record = result?;
        let limit: f64 = record[1].parse()?;
        match record[0].trim() {
            "MARRIED" => married = limit,
            _ => single = limit,
        }
    }

    Ok((single, married))
}

/// All configuration tables loaded from a directory
pub struct LoadedConfig {
    /// Latest premium year in the tables; anchors quick-mode estimation
    pub plan_year: i32,
    pub bend_points: BTreeMap<i32, BendPoints>,
    pub wage_index_factors: BTreeMap<i32, f64>,
    pub wage_bases: BTreeMap<i32, f64>,
    pub medicare_premiums: BTreeMap<i32, MedicarePremiums>,
    pub irmaa_single: Vec<IrmaaBracket>,
    pub irmaa_married: Vec<IrmaaBracket>,
    pub medicaid_thresholds: HashMap<String, f64>,
    pub medicaid_default_threshold: f64,
    pub medicaid_asset_limit_single: f64,
    pub medicaid_asset_limit_married: f64,
}

impl LoadedConfig {
    /// Load all tables from the default path
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load all tables from a specific directory
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let medicare_premiums = load_medicare_premiums(path)?;
        let plan_year = medicare_premiums.keys().next_back().copied().unwrap_or(2025);
        let (irmaa_single, irmaa_married) = load_irmaa_brackets(path)?;
        let (medicaid_thresholds, medicaid_default_threshold) = load_medicaid_thresholds(path)?;
        let (asset_single, asset_married) = load_medicaid_asset_limits(path)?;

        Ok(Self {
            plan_year,
            bend_points: load_bend_points(path)?,
            wage_index_factors: load_wage_index_factors(path)?,
            wage_bases: load_wage_bases(path)?,
            medicare_premiums,
            irmaa_single,
            irmaa_married,
            medicaid_thresholds,
            medicaid_default_threshold,
            medicaid_asset_limit_single: asset_single,
            medicaid_asset_limit_married: asset_married,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let result = LoadedConfig::load_default();
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let config = result.unwrap();

        assert!(config.bend_points.contains_key(&2025));
        assert!(config.wage_index_factors.len() >= 5);
        assert!(config.wage_bases.len() >= 5);
        assert!(config.medicare_premiums.contains_key(&2025));
        assert_eq!(config.irmaa_single.len(), 6);
        assert_eq!(config.irmaa_married.len(), 6);
        assert!(config.medicaid_thresholds.contains_key("CA"));
        assert!(config.medicaid_asset_limit_single > 0.0);
        assert_eq!(config.plan_year, 2025);
    }
}
