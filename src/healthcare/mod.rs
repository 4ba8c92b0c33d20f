//! Medicare premiums, Medicaid eligibility, and net benefit synthesis

mod medicaid;
mod medicare;
mod net;

pub use medicaid::{check_medicaid_eligibility, MedicaidEligibility};
pub use medicare::{calculate_medicare_premiums, MedicareCalculation, PremiumLine};
pub use net::{calculate_net_benefit, NetBenefit};
