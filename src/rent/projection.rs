//! Yearly rent schedule with running totals

use serde::{Deserialize, Serialize};

use crate::error::{require_finite, CalcError, CalcResult};

/// Longest rent projection accepted
pub const MAX_ANALYSIS_YEARS: u32 = 200;

/// Rent paid during one calendar year of the projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearData {
    /// Calendar year
    pub year: i32,

    /// Monthly rent for each month of the year (no seasonal variation)
    pub months: [f64; 12],

    /// Rent paid over the year (12 x monthly rent)
    pub year_total: f64,

    /// Rent paid from the first projected year through this one
    pub cumulative_total: f64,
}

impl YearData {
    /// Monthly rent in effect for this year
    pub fn monthly_rent(&self) -> f64 {
        self.months[0]
    }
}

/// Complete rent projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRentData {
    pub years: Vec<YearData>,

    /// Total rent over the horizon; equals the last year's cumulative total
    pub total_paid: f64,
}

/// Monthly rent for a given year index under compound annual growth
///
/// Year index 0 returns `base_rent` untouched. No rounding is applied so
/// rounding error does not compound into later years.
pub fn rent_for_year(base_rent: f64, year_index: u32, annual_increase_percent: f64) -> f64 {
    if year_index == 0 {
        return base_rent;
    }
    let growth = 1.0 + annual_increase_percent / 100.0;
    match i32::try_from(year_index) {
        Ok(n) => base_rent * growth.powi(n),
        Err(_) => base_rent * growth.powf(year_index as f64),
    }
}

/// Project rent over `analysis_years`, labelling the first year `start_year`
///
/// Returns `None` when the inputs are not computable (non-positive rent,
/// zero years, or non-finite values).
pub fn project_rent(
    monthly_rent: f64,
    analysis_years: u32,
    annual_rent_increase: f64,
    start_year: i32,
) -> Option<MonthlyRentData> {
    try_project_rent(monthly_rent, analysis_years, annual_rent_increase, start_year).ok()
}

/// Same as [`project_rent`] but reports which input was rejected
pub fn try_project_rent(
    monthly_rent: f64,
    analysis_years: u32,
    annual_rent_increase: f64,
    start_year: i32,
) -> CalcResult<MonthlyRentData> {
    validate(monthly_rent, analysis_years, annual_rent_increase, start_year).map_err(|e| {
        log::debug!("rent projection rejected: {}", e);
        e
    })?;

    let mut years = Vec::with_capacity(analysis_years as usize);
    let mut total_paid = 0.0;

    for year_index in 0..analysis_years {
        let rent = rent_for_year(monthly_rent, year_index, annual_rent_increase);
        let year_total = rent * 12.0;
        total_paid += year_total;

        years.push(YearData {
            // Bounded by validate
            year: start_year + year_index as i32,
            months: [rent; 12],
            year_total,
            cumulative_total: total_paid,
        });
    }

    log::debug!(
        "projected {} years of rent from {}, total {:.2}",
        analysis_years,
        start_year,
        total_paid
    );

    Ok(MonthlyRentData { years, total_paid })
}

fn validate(
    monthly_rent: f64,
    analysis_years: u32,
    annual_rent_increase: f64,
    start_year: i32,
) -> CalcResult<()> {
    require_finite("monthly_rent", monthly_rent)?;
    require_finite("annual_rent_increase", annual_rent_increase)?;

    if monthly_rent <= 0.0 {
        return Err(CalcError::invalid("monthly_rent", "must be positive"));
    }
    if analysis_years == 0 {
        return Err(CalcError::invalid("analysis_years", "must be at least 1"));
    }
    if analysis_years > MAX_ANALYSIS_YEARS {
        return Err(CalcError::invalid(
            "analysis_years",
            format!("must be at most {}", MAX_ANALYSIS_YEARS),
        ));
    }
    if start_year.checked_add(analysis_years as i32 - 1).is_none() {
        return Err(CalcError::invalid("start_year", "projection runs past the last representable year"));
    }
    Ok(())
}
