//! Compact rows for the rent and mortgage tables

use serde::{Deserialize, Serialize};

use crate::mortgage::{MortgageAmortizationData, MortgageYearSummary};
use crate::rent::{MonthlyRentData, YearData};
use super::compress::{compress, YearlyRow};

/// One row of the rent table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactRow {
    pub year_range: String,
    pub total: f64,
    pub cumulative_total: f64,
}

/// One row of the mortgage table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactMortgageRow {
    pub year_range: String,
    /// Total paid over the years in this row
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    /// Balance at the end of the last year in this row
    pub balance_end: f64,
    /// Total paid from origination through the last year in this row
    pub cumulative_paid: f64,
}

impl YearlyRow for YearData {
    type Compact = CompactRow;

    fn year_label(&self) -> i64 {
        self.year as i64
    }

    fn total(&self) -> f64 {
        self.year_total
    }

    fn merge(group: &[Self], year_range: String) -> CompactRow {
        CompactRow {
            year_range,
            total: group.iter().map(|y| y.year_total).sum(),
            cumulative_total: group.last().map(|y| y.cumulative_total).unwrap_or(0.0),
        }
    }
}

impl YearlyRow for MortgageYearSummary {
    type Compact = CompactMortgageRow;

    fn year_label(&self) -> i64 {
        self.year as i64
    }

    fn total(&self) -> f64 {
        self.payment
    }

    fn merge(group: &[Self], year_range: String) -> CompactMortgageRow {
        let last = group.last();
        CompactMortgageRow {
            year_range,
            payment: group.iter().map(|y| y.payment).sum(),
            principal: group.iter().map(|y| y.principal).sum(),
            interest: group.iter().map(|y| y.interest).sum(),
            balance_end: last.map(|y| y.balance_end).unwrap_or(0.0),
            cumulative_paid: last.map(|y| y.cumulative_paid()).unwrap_or(0.0),
        }
    }
}

/// Rent table limited to `max_rows` rows
pub fn compact_rent_rows(data: &MonthlyRentData, max_rows: usize) -> Vec<CompactRow> {
    compress(&data.years, max_rows)
}

/// Mortgage table (by loan year) limited to `max_rows` rows
pub fn compact_mortgage_rows(data: &MortgageAmortizationData, max_rows: usize) -> Vec<CompactMortgageRow> {
    compress(&data.yearly_summary(), max_rows)
}
