//! Monetary rounding
//!
//! Every recorded amount in a schedule passes through [`RoundMode::apply`] so
//! that cents-mode values are themselves valid currency amounts.

use serde::{Deserialize, Serialize};

/// How monetary quantities are rounded while a schedule is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundMode {
    /// Round to 2 decimal places at the point of computation
    #[default]
    Cents,
    /// Keep full floating-point precision
    None,
}

impl RoundMode {
    /// Apply this rounding mode to an amount
    pub fn apply(self, amount: f64) -> f64 {
        match self {
            RoundMode::Cents => round_cents(amount),
            RoundMode::None => amount,
        }
    }
}

/// Round an amount to the nearest cent
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
