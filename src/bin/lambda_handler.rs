//! AWS Lambda handler for housing cost calculations
//!
//! Accepts a JSON request describing a rent projection, a mortgage or a
//! rent-vs-buy comparison and returns the computed result together with a
//! compacted yearly table. Inputs that are not computable yield an `error`
//! message rather than a failed invocation.

use housing_calc::{
    compare_costs,
    config::current_year,
    mortgage::try_amortize,
    rent::try_project_rent,
    table::{compact_mortgage_rows, compact_rent_rows, CompactMortgageRow, CompactRow},
    CalcError, CostComparison, MonthlyRentData, MortgageAmortizationData, MortgageTerms, RoundMode,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};

/// Rent inputs
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentRequest {
    pub monthly_rent: f64,

    /// Years to project (default: 30)
    #[serde(default = "default_analysis_years")]
    pub analysis_years: u32,

    /// Annual increase in percent (default: 0)
    #[serde(default)]
    pub annual_rent_increase: f64,

    /// First calendar year (default: current year)
    #[serde(default)]
    pub start_year: Option<i32>,
}

/// Mortgage inputs
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageRequest {
    pub purchase_price: f64,

    /// Down payment percent (default: 20)
    #[serde(default = "default_down_payment")]
    pub down_payment_percentage: f64,

    pub annual_interest_rate: f64,

    /// Amortization years (default: 25)
    #[serde(default = "default_amortization_years")]
    pub amortization_years: f64,

    #[serde(default)]
    pub round_mode: RoundMode,
}

impl MortgageRequest {
    fn terms(&self) -> MortgageTerms {
        MortgageTerms::new(
            self.purchase_price,
            self.down_payment_percentage,
            self.annual_interest_rate,
            self.amortization_years,
        )
    }
}

/// Input configuration for the calculation
#[derive(Debug, Deserialize)]
#[serde(tag = "calculation", rename_all = "snake_case")]
pub enum CalculationRequest {
    Rent {
        #[serde(flatten)]
        rent: RentRequest,
        #[serde(rename = "maxRows", default = "default_max_rows")]
        max_rows: usize,
    },
    Mortgage {
        #[serde(flatten)]
        mortgage: MortgageRequest,
        #[serde(rename = "maxRows", default = "default_max_rows")]
        max_rows: usize,
    },
    Comparison {
        rent: RentRequest,
        mortgage: MortgageRequest,
    },
}

fn default_analysis_years() -> u32 { 30 }
fn default_down_payment() -> f64 { 20.0 }
fn default_amortization_years() -> f64 { 25.0 }
fn default_max_rows() -> usize { 10 }

/// Output from the calculation
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent: Option<MonthlyRentData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent_table: Option<Vec<CompactRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mortgage: Option<MortgageAmortizationData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mortgage_table: Option<Vec<CompactMortgageRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<CostComparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CalculationResponse {
    fn from_error(err: CalcError) -> Self {
        Self {
            error: Some(err.to_string()),
            ..Default::default()
        }
    }
}

fn project(rent: &RentRequest) -> Result<MonthlyRentData, CalcError> {
    try_project_rent(
        rent.monthly_rent,
        rent.analysis_years,
        rent.annual_rent_increase,
        rent.start_year.unwrap_or_else(current_year),
    )
}

/// Run a calculation request
fn calculate(request: &CalculationRequest) -> Result<CalculationResponse, CalcError> {
    let response = match request {
        CalculationRequest::Rent { rent, max_rows } => {
            let data = project(rent)?;
            CalculationResponse {
                rent_table: Some(compact_rent_rows(&data, *max_rows)),
                rent: Some(data),
                ..Default::default()
            }
        }
        CalculationRequest::Mortgage { mortgage, max_rows } => {
            let data = try_amortize(&mortgage.terms(), mortgage.round_mode)?;
            CalculationResponse {
                mortgage_table: Some(compact_mortgage_rows(&data, *max_rows)),
                mortgage: Some(data),
                ..Default::default()
            }
        }
        CalculationRequest::Comparison { rent, mortgage } => {
            let rent_data = project(rent)?;
            let terms = mortgage.terms();
            let mortgage_data = try_amortize(&terms, mortgage.round_mode)?;
            CalculationResponse {
                comparison: Some(compare_costs(&rent_data, &mortgage_data, terms.down_payment_amount())),
                ..Default::default()
            }
        }
    };
    Ok(response)
}

/// Lambda handler function
async fn handler(event: LambdaEvent<CalculationRequest>) -> Result<CalculationResponse, Error> {
    let request = event.payload;
    log::info!("handling {:?}", request);

    let response = calculate(&request).unwrap_or_else(|err| {
        log::warn!("calculation rejected: {}", err);
        CalculationResponse::from_error(err)
    });
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
