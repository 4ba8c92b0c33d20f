//! Social Security formula constants: bend points, FRA, and wage indexing
//!
//! The PIA model separates:
//! - Bend-point thresholds (vary by the year the claimant turns 62)
//! - Marginal replacement rates (fixed by statute)
//! - Wage-index factors and taxable wage bases (vary by calendar year)
//!
//! Year-keyed lookups fall back to the latest table year so a stale table
//! still produces a directionally useful estimate.

use std::collections::BTreeMap;

/// Marginal replacement rate below the first bend point
pub const PIA_RATE_FIRST: f64 = 0.90;
/// Marginal replacement rate between the bend points
pub const PIA_RATE_SECOND: f64 = 0.32;
/// Marginal replacement rate above the second bend point
pub const PIA_RATE_THIRD: f64 = 0.15;

/// Early-claim reduction for the first 36 months: 5/9 of 1% per month
pub const EARLY_REDUCTION_FIRST_36: f64 = 5.0 / 9.0 / 100.0;
/// Early-claim reduction beyond 36 months: 5/12 of 1% per month
pub const EARLY_REDUCTION_ADDITIONAL: f64 = 5.0 / 12.0 / 100.0;
/// Delayed retirement credit: 8% per year, accrued monthly
pub const DELAYED_CREDIT_PER_MONTH: f64 = 8.0 / 12.0 / 100.0;

/// Cap applied when a year has no wage-base entry
pub const WAGE_BASE_FALLBACK: f64 = 200_000.0;

/// Bend-point thresholds for one eligibility year, in dollars of AIME
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BendPoints {
    pub first: f64,
    pub second: f64,
}

/// SSA formula tables keyed by calendar year
#[derive(Debug, Clone)]
pub struct SsaConfig {
    /// Year the tables were compiled for; anchors quick-mode estimation
    plan_year: i32,

    /// Bend points keyed by the year the claimant turns 62
    bend_points: BTreeMap<i32, BendPoints>,

    /// Wage-index factors relative to the latest index year
    wage_index_factors: BTreeMap<i32, f64>,

    /// Maximum taxable earnings by year
    wage_bases: BTreeMap<i32, f64>,

    /// Assumed annual wage growth for years outside the factor table
    wage_growth_rate: f64,
}

impl SsaConfig {
    /// Build the 2025 table set from in-code constants
    pub fn default_2025() -> Self {
        Self {
            plan_year: 2025,
            bend_points: Self::default_bend_points(),
            wage_index_factors: Self::default_wage_index_factors(),
            wage_bases: Self::default_wage_bases(),
            wage_growth_rate: 0.03,
        }
    }

    /// Create from loaded CSV tables
    pub fn from_loaded(loaded: &super::loader::LoadedConfig) -> Self {
        Self {
            plan_year: loaded.plan_year,
            bend_points: loaded.bend_points.clone(),
            wage_index_factors: loaded.wage_index_factors.clone(),
            wage_bases: loaded.wage_bases.clone(),
            wage_growth_rate: 0.03,
        }
    }

    /// Year the tables were compiled for
    pub fn plan_year(&self) -> i32 {
        self.plan_year
    }

    /// Assumed annual wage growth rate
    pub fn wage_growth_rate(&self) -> f64 {
        self.wage_growth_rate
    }

    /// Bend points for the year the claimant turns 62
    ///
    /// Falls back to the latest table year when the requested year has no
    /// entry, since slightly stale bend points beat a failed computation.
    pub fn bend_points_for(&self, year: i32) -> BendPoints {
        if let Some(bp) = self.bend_points.get(&year) {
            return *bp;
        }
        match self.bend_points.iter().next_back() {
            Some((latest, bp)) => {
                log::warn!("no bend points for {}, using {} table", year, latest);
                *bp
            }
            None => BendPoints::default(),
        }
    }

    /// Taxable wage base for a calendar year
    pub fn wage_base_for(&self, year: i32) -> f64 {
        self.wage_bases.get(&year).copied().unwrap_or(WAGE_BASE_FALLBACK)
    }

    /// Wage-index factor for a year in the table, if present
    pub fn wage_index_factor(&self, year: i32) -> Option<f64> {
        self.wage_index_factors.get(&year).copied()
    }

    /// Wage-index factor, extrapolated at the assumed growth rate when the
    /// year is outside the table
    pub fn wage_index_factor_or_estimated(&self, year: i32) -> f64 {
        if let Some(factor) = self.wage_index_factor(year) {
            return factor;
        }
        let Some((&latest_year, &latest_factor)) = self.wage_index_factors.iter().next_back()
        else {
            return 1.0;
        };
        let growth = 1.0 + self.wage_growth_rate;
        if year > latest_year {
            latest_factor * growth.powi(year - latest_year)
        } else {
            latest_factor / growth.powi(latest_year - year)
        }
    }

    /// Full Retirement Age in years for a birth year
    ///
    /// Step function rising from 65 to 67; 1955-1959 cohorts get two extra
    /// months per year.
    pub fn fra(&self, birth_year: i32) -> f64 {
        match birth_year {
            ..=1937 => 65.0,
            1938..=1954 => 66.0,
            1955..=1959 => 66.0 + (birth_year - 1954) as f64 * 2.0 / 12.0,
            _ => 67.0,
        }
    }

    /// FRA expressed in months of age
    pub fn fra_months(&self, birth_year: i32) -> i32 {
        (self.fra(birth_year) * 12.0).round() as i32
    }

    /// Bend points by the year the claimant turns 62
    fn default_bend_points() -> BTreeMap<i32, BendPoints> {
        BTreeMap::from([
            (2023, BendPoints { first: 1115.0, second: 6721.0 }),
            (2024, BendPoints { first: 1174.0, second: 7078.0 }),
            (2025, BendPoints { first: 1226.0, second: 7391.0 }),
            (2026, BendPoints { first: 1280.0, second: 7710.0 }),
            (2027, BendPoints { first: 1335.0, second: 8040.0 }),
        ])
    }

    /// Wage-index factors relative to the latest index year
    fn default_wage_index_factors() -> BTreeMap<i32, f64> {
        BTreeMap::from([
            (2015, 0.7654),
            (2016, 0.7765),
            (2017, 0.7987),
            (2018, 0.8234),
            (2019, 0.8543),
            (2020, 0.8765),
            (2021, 0.8988),
            (2022, 0.9456),
            (2023, 1.0),
        ])
    }

    /// Maximum taxable earnings by year
    fn default_wage_bases() -> BTreeMap<i32, f64> {
        BTreeMap::from([
            (2015, 118_500.0),
            (2016, 118_500.0),
            (2017, 127_200.0),
            (2018, 128_400.0),
            (2019, 132_900.0),
            (2020, 137_700.0),
            (2021, 142_800.0),
            (2022, 147_000.0),
            (2023, 160_200.0),
            (2024, 168_600.0),
            (2025, 176_100.0),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fra_step_function() {
        let ssa = SsaConfig::default_2025();

        assert_eq!(ssa.fra(1930), 65.0);
        assert_eq!(ssa.fra(1940), 66.0);
        assert_eq!(ssa.fra(1954), 66.0);
        assert!((ssa.fra(1955) - (66.0 + 2.0 / 12.0)).abs() < 1e-12);
        assert!((ssa.fra(1957) - 66.5).abs() < 1e-12);
        assert!((ssa.fra(1959) - (66.0 + 10.0 / 12.0)).abs() < 1e-12);
        assert_eq!(ssa.fra(1960), 67.0);
        assert_eq!(ssa.fra(1990), 67.0);
    }

    #[test]
    fn test_fra_months() {
        let ssa = SsaConfig::default_2025();

        assert_eq!(ssa.fra_months(1954), 792);
        assert_eq!(ssa.fra_months(1955), 794);
        assert_eq!(ssa.fra_months(1960), 804);
    }

    #[test]
    fn test_bend_point_lookup_and_fallback() {
        let ssa = SsaConfig::default_2025();

        let bp = ssa.bend_points_for(2025);
        assert_eq!(bp.first, 1226.0);
        assert_eq!(bp.second, 7391.0);

        // Missing years resolve to the latest table year
        let stale = ssa.bend_points_for(2022);
        assert_eq!(stale.first, 1335.0);
        let future = ssa.bend_points_for(2040);
        assert_eq!(future.second, 8040.0);
    }

    #[test]
    fn test_wage_base_fallback() {
        let ssa = SsaConfig::default_2025();

        assert_eq!(ssa.wage_base_for(2023), 160_200.0);
        assert_eq!(ssa.wage_base_for(1999), WAGE_BASE_FALLBACK);
    }

    #[test]
    fn test_wage_index_factor_extrapolation() {
        let ssa = SsaConfig::default_2025();

        assert_eq!(ssa.wage_index_factor_or_estimated(2023), 1.0);

        // One year past the table grows by the wage growth rate
        let future = ssa.wage_index_factor_or_estimated(2024);
        assert!((future - 1.03).abs() < 1e-9);

        // Years before the table shrink by the same rate
        let past = ssa.wage_index_factor_or_estimated(2013);
        assert!((past - 1.0 / 1.03_f64.powi(10)).abs() < 1e-9);
    }
}
