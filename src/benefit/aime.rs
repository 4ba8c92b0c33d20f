//! Average Indexed Monthly Earnings
//!
//! AIME is the wage-indexed average of the highest 35 years of earnings.
//! Fewer than 35 years counts the missing years as zero, matching SSA
//! policy. Earnings from two years before eligibility onward are taken at
//! face value; older years are indexed up to the eligibility-year wage
//! level.

use crate::config::SsaConfig;
use crate::inputs::EarningsRecord;

/// Divisor for the 35 highest years, in months
const AIME_DIVISOR_MONTHS: f64 = 420.0;
/// Number of top earning years included in the average
const TOP_YEARS: usize = 35;
/// Assumed age at which a synthetic earnings history starts
const CAREER_START_AGE: i32 = 22;

/// Compute AIME from an earnings history, rounded to whole dollars
pub fn calculate_aime(earnings: &[EarningsRecord], birth_year: i32, ssa: &SsaConfig) -> f64 {
    let year_62 = birth_year + 62;
    let index_year = year_62 - 2;
    let index_year_factor = ssa.wage_index_factor(index_year).unwrap_or(1.0);

    let mut indexed: Vec<f64> = earnings
        .iter()
        .map(|record| {
            // Earnings at age 60+ enter unindexed
            if record.year >= index_year {
                return record.amount;
            }

            let record_factor = ssa.wage_index_factor_or_estimated(record.year);
            let capped = record.amount.min(ssa.wage_base_for(record.year));
            capped * (index_year_factor / record_factor)
        })
        .collect();

    indexed.sort_by(|a, b| b.total_cmp(a));

    let sum_top: f64 = indexed.iter().take(TOP_YEARS).sum();
    (sum_top / AIME_DIVISOR_MONTHS).round()
}

/// Estimate AIME from a single current-income figure
///
/// Builds a synthetic history by deflating today's income backward at the
/// configured wage-growth rate, capped at each year's taxable wage base,
/// then runs the standard AIME aggregation. Anchored on the table plan
/// year so the estimate is reproducible. Quick mode only.
pub fn estimate_aime_from_income(
    income_today: f64,
    birth_year: i32,
    years_worked: u32,
    ssa: &SsaConfig,
) -> f64 {
    let current_year = ssa.plan_year();
    let start_year = (birth_year + CAREER_START_AGE).max(current_year - years_worked as i32);
    let growth = 1.0 + ssa.wage_growth_rate();

    let earnings: Vec<EarningsRecord> = (start_year..=current_year)
        .map(|year| {
            let years_ago = current_year - year;
            let deflated = income_today / growth.powi(years_ago);
            EarningsRecord {
                year,
                amount: deflated.min(ssa.wage_base_for(year)),
            }
        })
        .collect();

    calculate_aime(&earnings, birth_year, ssa)
}

/// Parse an earnings history from `year,amount` CSV text
///
/// Malformed rows and years outside 1901-2099 are skipped rather than
/// failing the whole paste.
pub fn parse_earnings_csv(data: &str) -> Vec<EarningsRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());

    let mut earnings = Vec::new();

    for result in reader.records() {
        let Ok(record) = result else { continue };
        let (Some(year_field), Some(amount_field)) = (record.get(0), record.get(1)) else {
            continue;
        };
        let (Ok(year), Ok(amount)) = (year_field.parse::<i32>(), amount_field.parse::<f64>())
        else {
            continue;
        };
        if year > 1900 && year < 2100 {
            earnings.push(EarningsRecord { year, amount });
        }
    }

    earnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigTable;

    fn ssa() -> SsaConfig {
        ConfigTable::default_2025().ssa
    }

    #[test]
    fn test_aime_pads_short_history_with_zeros() {
        let ssa = ssa();
        // Ten years of recent, unindexed earnings for a 1960 cohort
        let earnings: Vec<EarningsRecord> = (2020..2030)
            .map(|year| EarningsRecord { year, amount: 84_000.0 })
            .collect();

        // Sum = 840,000 over 420 months regardless of the missing 25 years
        let aime = calculate_aime(&earnings, 1960, &ssa);
        assert_eq!(aime, 2_000.0);
    }

    #[test]
    fn test_aime_selects_highest_years_not_latest() {
        let ssa = ssa();
        let mut earnings: Vec<EarningsRecord> = (1985..2025)
            .map(|year| EarningsRecord { year, amount: 1_000.0 })
            .collect();
        // One standout year early in the career
        earnings[0].amount = 100_000.0;

        let plain = calculate_aime(
            &(1985..2025)
                .map(|year| EarningsRecord { year, amount: 1_000.0 })
                .collect::<Vec<_>>(),
            1960,
            &ssa,
        );
        let with_spike = calculate_aime(&earnings, 1960, &ssa);
        assert!(with_spike > plain);
    }

    #[test]
    fn test_aime_caps_at_wage_base() {
        let ssa = ssa();
        // 2015 wage base is 118,500; a 1965 cohort indexes 2015 earnings
        let capped = calculate_aime(
            &[EarningsRecord { year: 2015, amount: 118_500.0 }],
            1965,
            &ssa,
        );
        let over = calculate_aime(
            &[EarningsRecord { year: 2015, amount: 5_000_000.0 }],
            1965,
            &ssa,
        );
        assert_eq!(capped, over);
    }

    #[test]
    fn test_estimate_aime_increases_with_income() {
        let ssa = ssa();

        let low = estimate_aime_from_income(40_000.0, 1970, 30, &ssa);
        let high = estimate_aime_from_income(90_000.0, 1970, 30, &ssa);
        assert!(low > 0.0);
        assert!(high > low);
    }

    #[test]
    fn test_estimate_aime_increases_with_career_length() {
        let ssa = ssa();

        let short = estimate_aime_from_income(75_000.0, 1970, 10, &ssa);
        let long = estimate_aime_from_income(75_000.0, 1970, 35, &ssa);
        assert!(long > short);
    }

    #[test]
    fn test_parse_earnings_csv_skips_bad_rows() {
        let parsed = parse_earnings_csv("2020, 75000\nnot,a,row\n1850,99\n2021,80000\n");

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0], EarningsRecord { year: 2020, amount: 75_000.0 });
        assert_eq!(parsed[1], EarningsRecord { year: 2021, amount: 80_000.0 });
    }
}
