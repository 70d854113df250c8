//! Fixed-payment mortgage amortization
//!
//! The schedule is built month by month from the prior month's ending
//! balance. The final month absorbs any rounding residue so the loan is always
//! retired to exactly zero.

mod terms;
mod payment;
mod state;
mod engine;
mod schedule;

pub use terms::{MortgageTerms, MAX_AMORTIZATION_YEARS};
pub use payment::monthly_payment;
#[cfg(test)]
pub(crate) use payment::PVCalculator;
pub use state::AmortizationState;
pub use engine::{amortize, try_amortize, AmortizationEngine};
pub use schedule::{AmortizationMonth, MortgageAmortizationData, MortgageSummary, MortgageYearSummary};
