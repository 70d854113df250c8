//! Level payment formulas

/// Nominal fixed monthly payment that retires `loan_amount` over `total_months`
///
/// With a zero rate the loan is split evenly. Otherwise uses the standard
/// annuity formula `L * r(1+r)^n / ((1+r)^n - 1)`.
pub fn monthly_payment(loan_amount: f64, monthly_rate: f64, total_months: u32) -> f64 {
    if total_months == 0 {
        return 0.0;
    }
    if monthly_rate == 0.0 {
        return loan_amount / total_months as f64;
    }

    let growth = compound_factor(monthly_rate, total_months);
    if growth.is_infinite() {
        // Interest-only limit of the annuity formula
        return loan_amount * monthly_rate;
    }
    loan_amount * (monthly_rate * growth) / (growth - 1.0)
}

/// `(1 + rate)^periods` without wrapping the exponent
pub(crate) fn compound_factor(rate: f64, periods: u32) -> f64 {
    match i32::try_from(periods) {
        Ok(n) => (1.0 + rate).powi(n),
        Err(_) => (1.0 + rate).powf(periods as f64),
    }
}

/// Present value helpers for level payment streams
#[cfg(test)]
pub(crate) struct PVCalculator;

#[cfg(test)]
impl PVCalculator {
    /// PV of `n_months` level payments made at the end of each month
    pub(crate) fn pv_annuity_ordinary(amount: f64, n_months: u32, monthly_rate: f64) -> f64 {
        if monthly_rate.abs() < 1e-10 {
            return amount * n_months as f64;
        }

        let v = 1.0 / (1.0 + monthly_rate);
        amount * (1.0 - v.powi(n_months as i32)) / monthly_rate
    }

    /// Remaining balance after `months_paid` level payments
    pub(crate) fn remaining_balance(loan_amount: f64, payment: f64, monthly_rate: f64, months_paid: u32) -> f64 {
        if monthly_rate.abs() < 1e-10 {
            return loan_amount - payment * months_paid as f64;
        }

        let growth = compound_factor(monthly_rate, months_paid);
        loan_amount * growth - payment * (growth - 1.0) / monthly_rate
    }
}
