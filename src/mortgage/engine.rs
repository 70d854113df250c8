//! Schedule generation for fixed-payment loans

use crate::error::CalcResult;
use crate::money::RoundMode;
use super::payment::monthly_payment;
use super::schedule::{AmortizationMonth, MortgageAmortizationData};
use super::state::AmortizationState;
use super::terms::MortgageTerms;

/// Amortize a mortgage, returning `None` when the terms are not computable
pub fn amortize(terms: &MortgageTerms, round_mode: RoundMode) -> Option<MortgageAmortizationData> {
    try_amortize(terms, round_mode).ok()
}

/// Amortize a mortgage, reporting which input was rejected
pub fn try_amortize(terms: &MortgageTerms, round_mode: RoundMode) -> CalcResult<MortgageAmortizationData> {
    let engine = AmortizationEngine::new(terms, round_mode).map_err(|e| {
        log::debug!("amortization rejected: {}", e);
        e
    })?;
    Ok(engine.run())
}

/// Builds the month-by-month schedule for validated terms
#[derive(Debug, Clone)]
pub struct AmortizationEngine {
    loan_amount: f64,
    monthly_rate: f64,
    total_months: u32,
    payment: f64,
    round_mode: RoundMode,
}

impl AmortizationEngine {
    /// Validate terms and fix the nominal payment
    pub fn new(terms: &MortgageTerms, round_mode: RoundMode) -> CalcResult<Self> {
        let total_months = terms.validate()?;
        let loan_amount = terms.loan_amount();
        let monthly_rate = terms.monthly_rate();
        let payment = round_mode.apply(monthly_payment(loan_amount, monthly_rate, total_months));

        Ok(Self {
            loan_amount,
            monthly_rate,
            total_months,
            payment,
            round_mode,
        })
    }

    /// Run the full schedule
    pub fn run(&self) -> MortgageAmortizationData {
        let round = |x: f64| self.round_mode.apply(x);

        let mut state = AmortizationState::new(round(self.loan_amount));
        let mut months = Vec::with_capacity(self.total_months as usize);
        let mut interest_sum = 0.0;

        for _ in 0..self.total_months {
            state.advance_month();
            let row = self.calculate_month(&mut state);
            interest_sum += row.interest;
            months.push(row);
        }

        let total_principal_paid = round(self.loan_amount);
        let total_interest_paid = round(interest_sum);
        let total_paid = round(total_principal_paid + total_interest_paid);

        log::debug!(
            "amortized {:.2} over {} months at {:.6}/month: payment {:.2}, interest {:.2}",
            self.loan_amount,
            self.total_months,
            self.monthly_rate,
            self.payment,
            total_interest_paid
        );

        MortgageAmortizationData {
            monthly_payment: self.payment,
            total_principal_paid,
            total_interest_paid,
            total_paid,
            months,
        }
    }

    /// Split one payment into interest and principal and roll the balance
    fn calculate_month(&self, state: &mut AmortizationState) -> AmortizationMonth {
        let round = |x: f64| self.round_mode.apply(x);

        let balance_start = state.balance;
        let interest = if self.monthly_rate == 0.0 {
            0.0
        } else {
            round(balance_start * self.monthly_rate)
        };

        // Final month retires whatever is left, regardless of rounding mode
        let (payment, principal, balance_end) = if state.is_final(self.total_months) {
            let principal = balance_start;
            (round(principal + interest), principal, 0.0)
        } else {
            let principal = round(self.payment - interest);
            (self.payment, principal, round(balance_start - principal))
        };

        state.balance = balance_end;
        state.cumulative_principal = round(state.cumulative_principal + principal);
        state.cumulative_interest = round(state.cumulative_interest + interest);

        AmortizationMonth {
            index: state.index,
            year: state.year,
            month_in_year: state.month_in_year,
            payment,
            interest,
            principal,
            balance_start,
            balance_end,
            cumulative_principal: state.cumulative_principal,
            cumulative_interest: state.cumulative_interest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mortgage::{PVCalculator, MAX_AMORTIZATION_YEARS};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn standard_terms() -> MortgageTerms {
        MortgageTerms::new(300_000.0, 20.0, 6.0, 30.0)
    }

    fn assert_schedule_invariants(data: &MortgageAmortizationData, loan_amount: f64, tolerance: f64) {
        let last = data.months.last().unwrap();
        assert_eq!(last.balance_end, 0.0);

        let principal_sum: f64 = data.months.iter().map(|m| m.principal).sum();
        assert_abs_diff_eq!(principal_sum, loan_amount, epsilon = tolerance);

        for (i, month) in data.months.iter().enumerate() {
            assert_eq!(month.index, i as u32 + 1);
            assert_abs_diff_eq!(month.balance_end, month.balance_start - month.principal, epsilon = tolerance);
            assert_abs_diff_eq!(month.payment, month.interest + month.principal, epsilon = tolerance);
        }

        for pair in data.months.windows(2) {
            assert_eq!(pair[1].balance_start, pair[0].balance_end);
            if pair[0].principal > 0.0 {
                assert!(pair[1].balance_start < pair[0].balance_start);
            }
        }

        assert_abs_diff_eq!(last.cumulative_principal, data.total_principal_paid, epsilon = tolerance);
        assert_abs_diff_eq!(last.cumulative_interest, data.total_interest_paid, epsilon = tolerance);
        assert_abs_diff_eq!(
            data.total_paid,
            data.total_principal_paid + data.total_interest_paid,
            epsilon = tolerance
        );
    }

    #[test]
    fn test_standard_schedule_first_month() {
        let data = amortize(&standard_terms(), RoundMode::Cents).unwrap();

        assert_eq!(data.monthly_payment, 1438.92);
        assert_eq!(data.months.len(), 360);

        let first = &data.months[0];
        assert_eq!(first.balance_start, 240_000.0);
        assert_eq!(first.interest, 1200.0);
        assert_abs_diff_eq!(first.principal, 238.92, epsilon = 1e-9);
        assert_abs_diff_eq!(first.balance_end, 239_761.08, epsilon = 1e-9);
        assert_eq!(data.total_principal_paid, 240_000.0);
    }

    #[test]
    fn test_full_amortization_cents() {
        let terms = standard_terms();
        let data = amortize(&terms, RoundMode::Cents).unwrap();
        assert_schedule_invariants(&data, terms.loan_amount(), 0.011);
    }

    #[test]
    fn test_full_amortization_unrounded() {
        let terms = MortgageTerms::new(487_350.0, 12.5, 5.875, 25.0);
        let data = amortize(&terms, RoundMode::None).unwrap();
        assert_schedule_invariants(&data, terms.loan_amount(), 1e-6);
    }

    #[test]
    fn test_full_amortization_various_terms() {
        let cases = [
            MortgageTerms::new(199_999.99, 3.5, 7.125, 15.0),
            MortgageTerms::new(850_000.0, 25.0, 4.35, 30.0),
            MortgageTerms::new(95_000.0, 0.0, 11.0, 1.0),
            MortgageTerms::new(150_000.0, 10.0, 2.0, 40.0),
        ];
        for terms in cases {
            for mode in [RoundMode::Cents, RoundMode::None] {
                let data = amortize(&terms, mode).unwrap();
                assert_eq!(data.months.last().unwrap().balance_end, 0.0);
                let principal_sum: f64 = data.months.iter().map(|m| m.principal).sum();
                assert_abs_diff_eq!(principal_sum, terms.loan_amount(), epsilon = 0.011);
            }
        }
    }

    #[test]
    fn test_cents_mode_values_are_currency_amounts() {
        let data = amortize(&MortgageTerms::new(412_345.67, 17.0, 6.37, 20.0), RoundMode::Cents).unwrap();
        let is_cents = |x: f64| ((x * 100.0).round() - x * 100.0).abs() < 1e-6;
        for m in &data.months {
            assert!(is_cents(m.payment), "payment {} in month {}", m.payment, m.index);
            assert!(is_cents(m.interest));
            assert!(is_cents(m.principal));
            assert!(is_cents(m.balance_end));
            assert!(is_cents(m.cumulative_interest));
        }
    }

    #[test]
    fn test_final_month_absorbs_residue() {
        let data = amortize(&MortgageTerms::new(333_333.0, 7.0, 6.66, 30.0), RoundMode::Cents).unwrap();
        let last = data.months.last().unwrap();
        assert_eq!(last.principal, last.balance_start);
        assert_abs_diff_eq!(last.payment, last.principal + last.interest, epsilon = 1e-9);
        // Residue stays small relative to the payment
        assert_abs_diff_eq!(last.payment, data.monthly_payment, epsilon = 10.0);
        assert_eq!(data.final_payment(), last.payment);
    }

    #[test]
    fn test_unrounded_matches_closed_form_balance() {
        let terms = standard_terms();
        let data = amortize(&terms, RoundMode::None).unwrap();
        let expected = PVCalculator::remaining_balance(terms.loan_amount(), data.monthly_payment, terms.monthly_rate(), 120);
        assert_relative_eq!(data.months[119].balance_end, expected, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_rate() {
        let terms = MortgageTerms::new(450_000.0, 20.0, 0.0, 30.0);
        let data = amortize(&terms, RoundMode::Cents).unwrap();

        assert_eq!(data.monthly_payment, 1000.0);
        assert!(data.months.iter().all(|m| m.interest == 0.0));
        assert_eq!(data.total_interest_paid, 0.0);
        assert_eq!(data.total_paid, 360_000.0);
        assert_eq!(data.months.last().unwrap().balance_end, 0.0);
    }

    #[test]
    fn test_zero_rate_uneven_split() {
        let terms = MortgageTerms::new(100_000.0, 0.0, 0.0, 30.0);

        let exact = amortize(&terms, RoundMode::None).unwrap();
        assert_eq!(exact.monthly_payment, 100_000.0 / 360.0);

        let cents = amortize(&terms, RoundMode::Cents).unwrap();
        assert_eq!(cents.monthly_payment, 277.78);
        let last = cents.months.last().unwrap();
        assert_eq!(last.balance_end, 0.0);
        assert_abs_diff_eq!(last.payment, 100_000.0 - 359.0 * 277.78, epsilon = 0.011);
    }

    #[test]
    fn test_full_down_payment_is_degenerate_not_error() {
        let data = amortize(&MortgageTerms::new(500_000.0, 100.0, 5.0, 30.0), RoundMode::Cents).unwrap();
        assert_eq!(data.total_principal_paid, 0.0);
        assert_eq!(data.monthly_payment, 0.0);
        assert_eq!(data.total_interest_paid, 0.0);
        assert_eq!(data.total_paid, 0.0);
        assert!(data.months.iter().all(|m| m.balance_end == 0.0 && m.payment == 0.0));
    }

    #[test]
    fn test_term_sensitivity() {
        let base = standard_terms();
        let mut previous: Option<MortgageAmortizationData> = None;

        for years in [10.0, 15.0, 20.0, 25.0, 30.0] {
            let data = amortize(&base.with_years(years), RoundMode::Cents).unwrap();
            if let Some(shorter) = &previous {
                assert!(data.monthly_payment < shorter.monthly_payment);
                assert!(data.total_interest_paid > shorter.total_interest_paid);
            }
            previous = Some(data);
        }
    }

    #[test]
    fn test_invalid_inputs_return_none() {
        assert!(amortize(&MortgageTerms::new(f64::NAN, 20.0, 6.0, 30.0), RoundMode::Cents).is_none());
        assert!(amortize(&MortgageTerms::new(-100_000.0, 20.0, 6.0, 30.0), RoundMode::Cents).is_none());
        assert!(amortize(&MortgageTerms::new(300_000.0, 150.0, 6.0, 30.0), RoundMode::Cents).is_none());
        assert!(amortize(&MortgageTerms::new(300_000.0, 20.0, 6.0, 25.5), RoundMode::Cents).is_none());
        assert!(amortize(&MortgageTerms::new(300_000.0, 20.0, -1.0, 30.0), RoundMode::Cents).is_none());
        assert!(amortize(&MortgageTerms::new(300_000.0, 20.0, 6.0, f64::INFINITY), RoundMode::Cents).is_none());
    }

    #[test]
    fn test_excessive_term_rejected_before_scheduling() {
        let terms = MortgageTerms::new(300_000.0, 20.0, 6.0, 200_000_000.0);
        assert!(amortize(&terms, RoundMode::Cents).is_none());
        let err = AmortizationEngine::new(&terms, RoundMode::Cents).unwrap_err();
        assert_eq!(err.field(), "amortization_years");

        let longest = terms.with_years(MAX_AMORTIZATION_YEARS as f64);
        let data = amortize(&longest, RoundMode::Cents).unwrap();
        assert_eq!(data.months.len() as u32, MAX_AMORTIZATION_YEARS * 12);
        assert!(data.monthly_payment > 0.0);
        assert_eq!(data.months.last().unwrap().balance_end, 0.0);
    }

    #[test]
    fn test_try_amortize_reports_field() {
        let err = try_amortize(&MortgageTerms::new(300_000.0, 20.0, 6.0, 25.5), RoundMode::Cents).unwrap_err();
        assert_eq!(err.field(), "amortization_years");
    }

    #[test]
    fn test_deterministic() {
        let terms = MortgageTerms::new(612_500.0, 15.0, 6.875, 30.0);
        for mode in [RoundMode::Cents, RoundMode::None] {
            let a = amortize(&terms, mode).unwrap();
            let b = amortize(&terms, mode).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_yearly_summary() {
        let data = amortize(&standard_terms(), RoundMode::Cents).unwrap();
        let years = data.yearly_summary();

        assert_eq!(years.len(), 30);
        assert_eq!(years[0].year, 1);
        assert_eq!(years[29].year, 30);
        assert_eq!(years[29].balance_end, 0.0);
        assert_abs_diff_eq!(years[0].payment, 12.0 * 1438.92, epsilon = 1e-6);

        let principal: f64 = years.iter().map(|y| y.principal).sum();
        assert_abs_diff_eq!(principal, 240_000.0, epsilon = 0.011);
        assert_abs_diff_eq!(years[29].cumulative_paid(), data.total_paid, epsilon = 0.011);
    }

    #[test]
    fn test_summary_matches_data() {
        let data = amortize(&standard_terms(), RoundMode::Cents).unwrap();
        let summary = data.summary();
        assert_eq!(summary.total_months, 360);
        assert_eq!(summary.monthly_payment, data.monthly_payment);
        assert_eq!(summary.final_payment, data.months[359].payment);
        assert_eq!(summary.total_paid, data.total_paid);
    }
}
