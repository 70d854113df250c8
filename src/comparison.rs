//! Rent-vs-buy cumulative cash comparison
//!
//! Lines a rent projection up against the cash outlay of owning: the down
//! payment plus every mortgage payment made so far. Once the loan is retired
//! the ownership outlay stays flat.

use serde::{Deserialize, Serialize};

use crate::mortgage::MortgageAmortizationData;
use crate::rent::MonthlyRentData;
use crate::table::series_total;

/// Cumulative cash spent under each option by the end of one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonYear {
    /// Calendar year (taken from the rent projection)
    pub year: i32,
    pub cumulative_rent: f64,
    pub cumulative_ownership: f64,
    /// Positive when renting has cost more so far
    pub rent_minus_ownership: f64,
}

/// Year-by-year comparison over the rent projection's horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostComparison {
    pub years: Vec<ComparisonYear>,
    /// First year in which cumulative rent exceeds the ownership outlay
    pub break_even_year: Option<i32>,
}

/// Compare cumulative rent against down payment plus mortgage payments
pub fn compare_costs(
    rent: &MonthlyRentData,
    mortgage: &MortgageAmortizationData,
    down_payment: f64,
) -> CostComparison {
    let loan_years = mortgage.yearly_summary();
    let paid_off_total = series_total(&loan_years);

    let years: Vec<ComparisonYear> = rent
        .years
        .iter()
        .enumerate()
        .map(|(i, rent_year)| {
            let mortgage_paid = loan_years
                .get(i)
                .map(|y| y.cumulative_paid())
                .unwrap_or(paid_off_total);
            let cumulative_ownership = down_payment + mortgage_paid;

            ComparisonYear {
                year: rent_year.year,
                cumulative_rent: rent_year.cumulative_total,
                cumulative_ownership,
                rent_minus_ownership: rent_year.cumulative_total - cumulative_ownership,
            }
        })
        .collect();

    let break_even_year = years
        .iter()
        .find(|y| y.rent_minus_ownership > 0.0)
        .map(|y| y.year);

    CostComparison { years, break_even_year }
}
