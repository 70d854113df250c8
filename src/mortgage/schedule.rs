//! Amortization output structures

use serde::{Deserialize, Serialize};

/// A single month of the amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationMonth {
    // Timing
    pub index: u32,
    pub year: u32,
    pub month_in_year: u32,

    // Payment split
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,

    // Balances
    pub balance_start: f64,
    pub balance_end: f64,

    // Running totals
    pub cumulative_principal: f64,
    pub cumulative_interest: f64,
}

/// Complete amortization result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageAmortizationData {
    /// Nominal fixed payment (the final month may differ)
    pub monthly_payment: f64,

    /// Loan amount repaid over the schedule
    pub total_principal_paid: f64,

    /// Interest paid over the schedule
    pub total_interest_paid: f64,

    /// Principal plus interest
    pub total_paid: f64,

    /// Month-by-month schedule
    pub months: Vec<AmortizationMonth>,
}

impl MortgageAmortizationData {
    /// Number of scheduled payments
    pub fn total_months(&self) -> u32 {
        self.months.len() as u32
    }

    /// Payment actually made in the last month, after residue correction
    pub fn final_payment(&self) -> f64 {
        self.months.last().map(|m| m.payment).unwrap_or(0.0)
    }

    /// Aggregate the schedule by loan year
    pub fn yearly_summary(&self) -> Vec<MortgageYearSummary> {
        let mut years: Vec<MortgageYearSummary> = Vec::new();

        for month in &self.months {
            let needs_new = years.last().map_or(true, |y| y.year != month.year);
            if needs_new {
                years.push(MortgageYearSummary {
                    year: month.year,
                    ..Default::default()
                });
            }

            if let Some(agg) = years.last_mut() {
                agg.payment += month.payment;
                agg.principal += month.principal;
                agg.interest += month.interest;
                agg.balance_end = month.balance_end;
                agg.cumulative_principal = month.cumulative_principal;
                agg.cumulative_interest = month.cumulative_interest;
            }
        }

        years
    }

    /// Headline figures without the schedule
    pub fn summary(&self) -> MortgageSummary {
        MortgageSummary {
            monthly_payment: self.monthly_payment,
            final_payment: self.final_payment(),
            total_months: self.total_months(),
            total_principal_paid: self.total_principal_paid,
            total_interest_paid: self.total_interest_paid,
            total_paid: self.total_paid,
        }
    }
}

/// Payments made during one loan year
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageYearSummary {
    /// Loan year (1-indexed)
    pub year: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    pub balance_end: f64,
    pub cumulative_principal: f64,
    pub cumulative_interest: f64,
}

impl MortgageYearSummary {
    /// Total paid from origination through the end of this year
    pub fn cumulative_paid(&self) -> f64 {
        self.cumulative_principal + self.cumulative_interest
    }
}

/// Summary statistics for an amortization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageSummary {
    pub monthly_payment: f64,
    pub final_payment: f64,
    pub total_months: u32,
    pub total_principal_paid: f64,
    pub total_interest_paid: f64,
    pub total_paid: f64,
}
