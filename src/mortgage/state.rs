//! Running state of a loan while the schedule is built

/// State of the loan at a point in the amortization schedule
#[derive(Debug, Clone)]
pub struct AmortizationState {
    /// Current payment number (1-indexed, 0 before the first payment)
    pub index: u32,

    /// Loan year (1-indexed)
    pub year: u32,

    /// Month within the loan year (1-12)
    pub month_in_year: u32,

    /// Outstanding balance before this month's payment
    pub balance: f64,

    /// Principal repaid so far
    pub cumulative_principal: f64,

    /// Interest paid so far
    pub cumulative_interest: f64,
}

impl AmortizationState {
    /// State at loan origination
    pub fn new(opening_balance: f64) -> Self {
        Self {
            index: 0,
            year: 1,
            month_in_year: 0,
            balance: opening_balance,
            cumulative_principal: 0.0,
            cumulative_interest: 0.0,
        }
    }

    /// Advance to the next payment
    pub fn advance_month(&mut self) {
        self.index += 1;
        self.year = self.index.div_ceil(12);
        self.month_in_year = (self.index - 1) % 12 + 1;
    }

    /// Whether the current month is the last scheduled payment
    pub fn is_final(&self, total_months: u32) -> bool {
        self.index == total_months
    }
}
