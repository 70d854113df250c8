//! Housing Calculator - rent projection and mortgage amortization core
//!
//! This library provides:
//! - Compound rent projection with yearly and cumulative totals
//! - Fixed-payment mortgage amortization with cent rounding and exact payoff
//! - Row compression of long yearly series into bounded-size tables
//! - Rent-vs-buy cost comparison and mortgage scenario sweeps

pub mod money;
pub mod error;
pub mod rent;
pub mod mortgage;
pub mod table;
pub mod comparison;
pub mod scenario;
pub mod config;
pub mod export;

// Re-export commonly used types
pub use money::RoundMode;
pub use error::{CalcError, CalcResult};
pub use rent::{project_rent, rent_for_year, MonthlyRentData, YearData};
pub use mortgage::{amortize, try_amortize, AmortizationMonth, MortgageAmortizationData, MortgageTerms};
pub use table::{compress, CompactMortgageRow, CompactRow};
pub use comparison::{compare_costs, CostComparison};
pub use scenario::ScenarioRunner;
pub use config::CalculatorConfig;
