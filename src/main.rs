//! Housing Calculator CLI
//!
//! Command-line interface for rent projections, mortgage schedules and
//! rent-vs-buy comparisons

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use housing_calc::config::CalculatorConfig;
use housing_calc::export::{write_rent_csv, write_rows, write_scenarios_csv};
use housing_calc::mortgage::try_amortize;
use housing_calc::rent::try_project_rent;
use housing_calc::table::{compact_mortgage_rows, compact_rent_rows, CompactMortgageRow, CompactRow};
use housing_calc::{compare_costs, MonthlyRentData, MortgageAmortizationData, MortgageTerms, RoundMode, ScenarioRunner};

#[derive(Debug, Parser)]
#[command(name = "housing-calc", version, about = "Rent projection and mortgage amortization")]
struct Cli {
    /// JSON config file with calculator defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Maximum rows in yearly tables (0 shows every year)
    #[arg(long, global = true)]
    max_rows: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RoundArg {
    Cents,
    None,
}

impl From<RoundArg> for RoundMode {
    fn from(arg: RoundArg) -> Self {
        match arg {
            RoundArg::Cents => RoundMode::Cents,
            RoundArg::None => RoundMode::None,
        }
    }
}

#[derive(Debug, Args)]
struct RentArgs {
    /// Current monthly rent
    #[arg(long)]
    monthly_rent: f64,

    /// Years to project (defaults to config)
    #[arg(long)]
    years: Option<u32>,

    /// Annual rent increase in percent (may be negative)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    increase: f64,

    /// First calendar year of the projection (defaults to this year)
    #[arg(long)]
    start_year: Option<i32>,
}

#[derive(Debug, Args)]
struct LoanArgs {
    /// Purchase price
    #[arg(long)]
    price: f64,

    /// Down payment in percent of the price
    #[arg(long, default_value_t = 20.0)]
    down: f64,

    /// Annual interest rate in percent
    #[arg(long)]
    rate: f64,

    /// Amortization period in years
    #[arg(long, default_value_t = 25.0)]
    term: f64,

    /// Rounding mode (defaults to config)
    #[arg(long, value_enum)]
    round: Option<RoundArg>,
}

impl LoanArgs {
    fn terms(&self) -> MortgageTerms {
        MortgageTerms::new(self.price, self.down, self.rate, self.term)
    }

    fn round_mode(&self, config: &CalculatorConfig) -> RoundMode {
        self.round.map(RoundMode::from).unwrap_or(config.round_mode)
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Project rent with compound annual increases
    Rent(RentArgs),

    /// Amortize a fixed-rate mortgage
    Mortgage {
        #[command(flatten)]
        loan: LoanArgs,

        /// Print the full monthly schedule instead of the yearly table
        #[arg(long)]
        monthly: bool,
    },

    /// Compare payments and interest across amortization periods
    CompareTerms {
        #[command(flatten)]
        loan: LoanArgs,

        /// Comma-separated list of terms in years
        #[arg(long, value_delimiter = ',', default_values_t = vec![15.0, 20.0, 25.0, 30.0])]
        terms: Vec<f64>,
    },

    /// Compare cumulative rent against buying
    Compare {
        #[command(flatten)]
        rent: RentArgs,

        #[command(flatten)]
        loan: LoanArgs,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RentReport<'a> {
    projection: &'a MonthlyRentData,
    table: Vec<CompactRow>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MortgageReport<'a> {
    amortization: &'a MortgageAmortizationData,
    table: Vec<CompactMortgageRow>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CalculatorConfig::from_json_path(path)
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => CalculatorConfig::load_default().map_err(|e| anyhow::anyhow!("{}", e))?,
    };
    if let Some(max_rows) = cli.max_rows {
        config.max_rows = max_rows;
    }

    match &cli.command {
        Command::Rent(args) => run_rent(args, &config, cli.format),
        Command::Mortgage { loan, monthly } => run_mortgage(loan, *monthly, &config, cli.format),
        Command::CompareTerms { loan, terms } => run_compare_terms(loan, terms, &config, cli.format),
        Command::Compare { rent, loan } => run_compare(rent, loan, &config, cli.format),
    }
}

fn project(args: &RentArgs, config: &CalculatorConfig) -> Result<MonthlyRentData> {
    let years = args.years.unwrap_or(config.analysis_years);
    let start_year = args.start_year.unwrap_or_else(|| config.resolved_start_year());
    let data = try_project_rent(args.monthly_rent, years, args.increase, start_year)
        .context("rent projection is not computable")?;
    Ok(data)
}

fn run_rent(args: &RentArgs, config: &CalculatorConfig, format: OutputFormat) -> Result<()> {
    let data = project(args, config)?;
    let table = compact_rent_rows(&data, config.max_rows);

    match format {
        OutputFormat::Json => print_json(&RentReport { projection: &data, table })?,
        OutputFormat::Csv => write_rent_csv(io::stdout().lock(), &data).map_err(|e| anyhow::anyhow!("{}", e))?,
        OutputFormat::Table => {
            println!("{:>12} {:>16} {:>16}", "Year(s)", "Rent", "Cumulative");
            println!("{}", "-".repeat(46));
            for row in &table {
                println!("{:>12} {:>16.2} {:>16.2}", row.year_range, row.total, row.cumulative_total);
            }
            println!("\nTotal rent paid: ${:.2}", data.total_paid);
        }
    }
    Ok(())
}

fn run_mortgage(loan: &LoanArgs, monthly: bool, config: &CalculatorConfig, format: OutputFormat) -> Result<()> {
    let data = try_amortize(&loan.terms(), loan.round_mode(config)).context("mortgage is not computable")?;
    let table = compact_mortgage_rows(&data, config.max_rows);

    match format {
        OutputFormat::Json => print_json(&MortgageReport { amortization: &data, table })?,
        OutputFormat::Csv if monthly => write_rows(io::stdout().lock(), &data.months).map_err(|e| anyhow::anyhow!("{}", e))?,
        OutputFormat::Csv => write_rows(io::stdout().lock(), &table).map_err(|e| anyhow::anyhow!("{}", e))?,
        OutputFormat::Table if monthly => {
            println!("{:>5} {:>4} {:>4} {:>12} {:>12} {:>12} {:>14}",
                "Month", "Year", "MiY", "Payment", "Interest", "Principal", "Balance");
            println!("{}", "-".repeat(70));
            for m in &data.months {
                println!("{:>5} {:>4} {:>4} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
                    m.index, m.year, m.month_in_year, m.payment, m.interest, m.principal, m.balance_end);
            }
            print_mortgage_summary(&data);
        }
        OutputFormat::Table => {
            println!("{:>10} {:>14} {:>14} {:>14} {:>14}", "Year(s)", "Paid", "Principal", "Interest", "Balance");
            println!("{}", "-".repeat(70));
            for row in &table {
                println!("{:>10} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
                    row.year_range, row.payment, row.principal, row.interest, row.balance_end);
            }
            print_mortgage_summary(&data);
        }
    }
    Ok(())
}

fn print_mortgage_summary(data: &MortgageAmortizationData) {
    println!("\nSummary:");
    println!("  Monthly Payment: ${:.2}", data.monthly_payment);
    println!("  Final Payment: ${:.2}", data.final_payment());
    println!("  Total Principal: ${:.2}", data.total_principal_paid);
    println!("  Total Interest: ${:.2}", data.total_interest_paid);
    println!("  Total Paid: ${:.2}", data.total_paid);
}

fn run_compare_terms(loan: &LoanArgs, terms: &[f64], config: &CalculatorConfig, format: OutputFormat) -> Result<()> {
    let runner = ScenarioRunner::new(loan.terms()).with_round_mode(loan.round_mode(config));
    let outcomes = runner.run_terms(terms);

    match format {
        OutputFormat::Json => print_json(&outcomes)?,
        OutputFormat::Csv => write_scenarios_csv(io::stdout().lock(), &outcomes).map_err(|e| anyhow::anyhow!("{}", e))?,
        OutputFormat::Table => {
            println!("{:>12} {:>14} {:>16} {:>16}", "Term", "Payment", "Interest", "Total Paid");
            println!("{}", "-".repeat(61));
            for outcome in &outcomes {
                match &outcome.summary {
                    Some(s) => println!("{:>12} {:>14.2} {:>16.2} {:>16.2}",
                        outcome.label, s.monthly_payment, s.total_interest_paid, s.total_paid),
                    None => println!("{:>12} {:>14}", outcome.label, "n/a"),
                }
            }
        }
    }
    Ok(())
}

fn run_compare(rent_args: &RentArgs, loan: &LoanArgs, config: &CalculatorConfig, format: OutputFormat) -> Result<()> {
    let rent = project(rent_args, config)?;
    let terms = loan.terms();
    let mortgage = try_amortize(&terms, loan.round_mode(config)).context("mortgage is not computable")?;
    let comparison = compare_costs(&rent, &mortgage, terms.down_payment_amount());

    match format {
        OutputFormat::Json => print_json(&comparison)?,
        OutputFormat::Csv => write_rows(io::stdout().lock(), &comparison.years).map_err(|e| anyhow::anyhow!("{}", e))?,
        OutputFormat::Table => {
            println!("{:>6} {:>16} {:>16} {:>16}", "Year", "Rent", "Owning", "Difference");
            println!("{}", "-".repeat(57));
            for y in &comparison.years {
                println!("{:>6} {:>16.2} {:>16.2} {:>16.2}",
                    y.year, y.cumulative_rent, y.cumulative_ownership, y.rent_minus_ownership);
            }
            match comparison.break_even_year {
                Some(year) => println!("\nRenting costs more from {}", year),
                None => println!("\nRenting stays cheaper over the horizon"),
            }
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
