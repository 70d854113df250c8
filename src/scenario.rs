//! Scenario runner for side-by-side mortgage comparisons
//!
//! Holds a set of base terms and sweeps one dimension (term or rate),
//! amortizing each variant independently. Variants run in parallel and come
//! back in input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::money::RoundMode;
use crate::mortgage::{amortize, MortgageSummary, MortgageTerms};

/// Result of one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioOutcome {
    pub label: String,
    pub terms: MortgageTerms,
    /// `None` when the variant's terms are not computable
    pub summary: Option<MortgageSummary>,
}

/// Runs variations of a base set of mortgage terms
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(MortgageTerms::new(400_000.0, 20.0, 6.5, 30.0));
/// for outcome in runner.run_terms(&[15.0, 20.0, 30.0]) {
///     println!("{}: {:?}", outcome.label, outcome.summary);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_terms: MortgageTerms,
    round_mode: RoundMode,
}

impl ScenarioRunner {
    /// Create runner with cents rounding
    pub fn new(base_terms: MortgageTerms) -> Self {
        Self {
            base_terms,
            round_mode: RoundMode::Cents,
        }
    }

    /// Use a different rounding mode for every scenario
    pub fn with_round_mode(mut self, round_mode: RoundMode) -> Self {
        self.round_mode = round_mode;
        self
    }

    /// Run a single set of terms
    pub fn run(&self, label: impl Into<String>, terms: MortgageTerms) -> ScenarioOutcome {
        ScenarioOutcome {
            label: label.into(),
            terms,
            summary: amortize(&terms, self.round_mode).map(|data| data.summary()),
        }
    }

    /// Run several arbitrary variants
    pub fn run_batch(&self, variants: &[(String, MortgageTerms)]) -> Vec<ScenarioOutcome> {
        variants
            .par_iter()
            .map(|(label, terms)| self.run(label.clone(), *terms))
            .collect()
    }

    /// Vary the amortization period
    pub fn run_terms(&self, years: &[f64]) -> Vec<ScenarioOutcome> {
        let variants: Vec<_> = years
            .iter()
            .map(|&y| (format!("{} years", y), self.base_terms.with_years(y)))
            .collect();
        self.run_batch(&variants)
    }

    /// Vary the annual interest rate
    pub fn run_rates(&self, rates: &[f64]) -> Vec<ScenarioOutcome> {
        let variants: Vec<_> = rates
            .iter()
            .map(|&r| (format!("{}%", r), self.base_terms.with_rate(r)))
            .collect();
        self.run_batch(&variants)
    }

    /// Base terms every sweep starts from
    pub fn base_terms(&self) -> &MortgageTerms {
        &self.base_terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> ScenarioRunner {
        ScenarioRunner::new(MortgageTerms::new(400_000.0, 20.0, 6.5, 30.0))
    }

    #[test]
    fn test_term_sweep_in_order() {
        let results = runner().run_terms(&[10.0, 15.0, 20.0, 30.0]);
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].label, "10 years");
        assert_eq!(results[3].label, "30 years");

        let summaries: Vec<_> = results.iter().map(|r| r.summary.clone().unwrap()).collect();
        for pair in summaries.windows(2) {
            assert!(pair[1].monthly_payment < pair[0].monthly_payment);
            assert!(pair[1].total_interest_paid > pair[0].total_interest_paid);
        }
        assert_eq!(summaries[3].total_months, 360);
    }

    #[test]
    fn test_rate_sweep() {
        let results = runner().run_rates(&[0.0, 4.0, 8.0]);
        let summaries: Vec<_> = results.iter().map(|r| r.summary.clone().unwrap()).collect();
        assert_eq!(summaries[0].total_interest_paid, 0.0);
        assert!(summaries[2].monthly_payment > summaries[1].monthly_payment);
    }

    #[test]
    fn test_invalid_variant_has_no_summary() {
        let results = runner().run_terms(&[15.0, 12.5]);
        assert!(results[0].summary.is_some());
        assert!(results[1].summary.is_none());
    }

    #[test]
    fn test_matches_direct_amortization() {
        let runner = runner().with_round_mode(RoundMode::None);
        let outcome = runner.run("base", *runner.base_terms());
        let direct = amortize(runner.base_terms(), RoundMode::None).unwrap().summary();
        assert_eq!(outcome.summary, Some(direct));
    }
}
