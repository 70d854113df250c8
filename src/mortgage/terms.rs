//! Loan terms and input validation

use serde::{Deserialize, Serialize};

use crate::error::{require_finite, CalcError, CalcResult};

/// Longest amortization period accepted
pub const MAX_AMORTIZATION_YEARS: u32 = 100;

/// Raw inputs describing a purchase financed with a fixed-rate mortgage
///
/// Percentages are expressed in `0..=100`, not `0..=1`. The term is kept as
/// `f64` so fractional years coming from a form can be rejected rather than
/// silently truncated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageTerms {
    pub purchase_price: f64,
    pub down_payment_percentage: f64,
    pub annual_interest_rate: f64,
    pub amortization_years: f64,
}

impl MortgageTerms {
    pub fn new(
        purchase_price: f64,
        down_payment_percentage: f64,
        annual_interest_rate: f64,
        amortization_years: f64,
    ) -> Self {
        Self {
            purchase_price,
            down_payment_percentage,
            annual_interest_rate,
            amortization_years,
        }
    }

    /// Same terms with a different amortization period
    pub fn with_years(mut self, amortization_years: f64) -> Self {
        self.amortization_years = amortization_years;
        self
    }

    /// Same terms with a different annual rate
    pub fn with_rate(mut self, annual_interest_rate: f64) -> Self {
        self.annual_interest_rate = annual_interest_rate;
        self
    }

    /// Check every input and return the number of monthly payments
    pub fn validate(&self) -> CalcResult<u32> {
        require_finite("purchase_price", self.purchase_price)?;
        require_finite("down_payment_percentage", self.down_payment_percentage)?;
        require_finite("annual_interest_rate", self.annual_interest_rate)?;
        require_finite("amortization_years", self.amortization_years)?;

        if self.purchase_price <= 0.0 {
            return Err(CalcError::invalid("purchase_price", "must be positive"));
        }
        if self.amortization_years <= 0.0 {
            return Err(CalcError::invalid("amortization_years", "must be positive"));
        }
        if self.amortization_years.fract() != 0.0 {
            return Err(CalcError::invalid(
                "amortization_years",
                format!("must be a whole number of years, got {}", self.amortization_years),
            ));
        }
        if self.amortization_years > MAX_AMORTIZATION_YEARS as f64 {
            return Err(CalcError::invalid(
                "amortization_years",
                format!("must be at most {} years", MAX_AMORTIZATION_YEARS),
            ));
        }
        if !(0.0..=100.0).contains(&self.down_payment_percentage) {
            return Err(CalcError::invalid(
                "down_payment_percentage",
                "must be between 0 and 100",
            ));
        }
        if self.annual_interest_rate < 0.0 {
            return Err(CalcError::invalid("annual_interest_rate", "must not be negative"));
        }

        Ok(self.total_months())
    }

    /// Cash paid up front
    pub fn down_payment_amount(&self) -> f64 {
        self.purchase_price * self.down_payment_percentage / 100.0
    }

    /// Amount financed: price x (1 - down payment %)
    pub fn loan_amount(&self) -> f64 {
        self.purchase_price * (1.0 - self.down_payment_percentage / 100.0)
    }

    /// Periodic (monthly) rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        if self.annual_interest_rate == 0.0 {
            0.0
        } else {
            self.annual_interest_rate / 12.0 / 100.0
        }
    }

    /// Number of monthly payments; only meaningful once validated
    pub fn total_months(&self) -> u32 {
        self.amortization_years as u32 * 12
    }
}
