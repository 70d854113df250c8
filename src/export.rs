//! CSV export of schedules and tables

use std::error::Error;
use std::io::Write;

use serde::Serialize;

use crate::rent::MonthlyRentData;
use crate::scenario::ScenarioOutcome;

/// Flat CSV record for one projected rent year
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RentCsvRow {
    year: i32,
    monthly_rent: f64,
    year_total: f64,
    cumulative_total: f64,
}

/// Flat CSV record for one scenario; amounts are empty when not computable
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioCsvRow<'a> {
    label: &'a str,
    amortization_years: f64,
    annual_interest_rate: f64,
    monthly_payment: Option<f64>,
    final_payment: Option<f64>,
    total_interest_paid: Option<f64>,
    total_paid: Option<f64>,
}

/// Write any flat serializable rows (schedule months, compact rows) as CSV
pub fn write_rows<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<(), Box<dyn Error>> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write a rent projection, one line per year
pub fn write_rent_csv<W: Write>(writer: W, data: &MonthlyRentData) -> Result<(), Box<dyn Error>> {
    let rows: Vec<RentCsvRow> = data
        .years
        .iter()
        .map(|y| RentCsvRow {
            year: y.year,
            monthly_rent: y.monthly_rent(),
            year_total: y.year_total,
            cumulative_total: y.cumulative_total,
        })
        .collect();
    write_rows(writer, &rows)
}

/// Write scenario outcomes, one line per scenario
pub fn write_scenarios_csv<W: Write>(writer: W, outcomes: &[ScenarioOutcome]) -> Result<(), Box<dyn Error>> {
    let rows: Vec<ScenarioCsvRow> = outcomes
        .iter()
        .map(|o| ScenarioCsvRow {
            label: &o.label,
            amortization_years: o.terms.amortization_years,
            annual_interest_rate: o.terms.annual_interest_rate,
            monthly_payment: o.summary.as_ref().map(|s| s.monthly_payment),
            final_payment: o.summary.as_ref().map(|s| s.final_payment),
            total_interest_paid: o.summary.as_ref().map(|s| s.total_interest_paid),
            total_paid: o.summary.as_ref().map(|s| s.total_paid),
        })
        .collect();
    write_rows(writer, &rows)
}
