use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use prop_invest_core::rental::{
    periodic_installment, project_investment, LoanParameters, LoanType, OwnershipForm,
    ProjectionRequest, PropertyParameters, RenovationCost,
};

use crate::input;

/// Arguments for a full investment projection
#[derive(Args)]
pub struct ProjectArgs {
    /// Path to a JSON or YAML parameter file with `loan` and `property` sections
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Nominal annual interest rate in percent (e.g. 5.0)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Loan term in years
    #[arg(long)]
    pub term_years: Option<u32>,

    /// Interest-only years at the start of the term
    #[arg(long, default_value = "0")]
    pub grace_years: u32,

    /// Loan type: annuity or serial
    #[arg(long, default_value = "annuity")]
    pub loan_type: String,

    /// Property purchase price
    #[arg(long)]
    pub purchase_price: Option<Decimal>,

    /// Renovation budget as a single total
    #[arg(long, default_value = "0")]
    pub renovation_cost: Decimal,

    /// Monthly rental income
    #[arg(long)]
    pub monthly_rent: Option<Decimal>,

    /// Annual operating cost
    #[arg(long, default_value = "0")]
    pub operating_cost: Decimal,

    /// Ownership form: personal or corporate
    #[arg(long, default_value = "personal")]
    pub ownership: String,

    /// Acquisition costs as a fraction of purchase price
    #[arg(long, default_value = "0.025")]
    pub acquisition_cost_rate: Decimal,

    /// Property name used in reports
    #[arg(long)]
    pub name: Option<String>,

    /// Limit the printed schedule to the first N months
    #[arg(long)]
    pub months: Option<usize>,
}

/// Arguments for a quick installment calculation
#[derive(Args)]
pub struct PaymentArgs {
    /// Loan principal
    #[arg(long)]
    pub principal: Decimal,

    /// Nominal annual interest rate in percent (e.g. 5.0)
    #[arg(long)]
    pub rate: Decimal,

    /// Loan term in years
    #[arg(long)]
    pub term_years: u32,

    /// Interest-only years at the start of the term
    #[arg(long, default_value = "0")]
    pub grace_years: u32,

    /// Loan type: annuity or serial
    #[arg(long, default_value = "annuity")]
    pub loan_type: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct PaymentOutput {
    periodic_payment: Decimal,
    monthly_rate_pct: Decimal,
    amortising_months: u32,
}

pub fn run_project(args: ProjectArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request = resolve_request(&args)?;
    let mut result = project_investment(&request.loan, &request.property)?;

    // Display truncation only; the summary always covers the full horizon
    if let Some(months) = args.months {
        result.result.schedule.truncate(months);
    }

    Ok(serde_json::to_value(result)?)
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan = LoanParameters {
        principal: args.principal,
        annual_rate_pct: args.rate,
        term_years: args.term_years,
        grace_years: args.grace_years,
        loan_type: parse_loan_type(&args.loan_type)?,
    };

    let output = PaymentOutput {
        periodic_payment: periodic_installment(&loan),
        monthly_rate_pct: args.rate / dec!(12),
        amortising_months: loan.amortising_months(),
    };

    Ok(serde_json::to_value(output)?)
}

fn resolve_request(args: &ProjectArgs) -> Result<ProjectionRequest, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_params(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }

    let principal = args
        .principal
        .ok_or("--principal required (or use --input / pipe JSON via stdin)")?;
    let rate = args.rate.ok_or("--rate required")?;
    let term_years = args.term_years.ok_or("--term-years required")?;
    let purchase_price = args.purchase_price.ok_or("--purchase-price required")?;
    let monthly_rent = args.monthly_rent.ok_or("--monthly-rent required")?;

    Ok(ProjectionRequest {
        loan: LoanParameters {
            principal,
            annual_rate_pct: rate,
            term_years,
            grace_years: args.grace_years,
            loan_type: parse_loan_type(&args.loan_type)?,
        },
        property: PropertyParameters {
            property_name: args.name.clone().unwrap_or_default(),
            purchase_price,
            renovation: RenovationCost::Total(args.renovation_cost),
            monthly_rent,
            annual_operating_cost: args.operating_cost,
            ownership_form: parse_ownership(&args.ownership)?,
            acquisition_cost_rate: args.acquisition_cost_rate,
        },
    })
}

fn parse_loan_type(value: &str) -> Result<LoanType, Box<dyn std::error::Error>> {
    match value.to_lowercase().as_str() {
        "annuity" => Ok(LoanType::Annuity),
        "serial" => Ok(LoanType::Serial),
        _ => Err(format!("Unknown loan type '{value}'. Use: annuity, serial").into()),
    }
}

fn parse_ownership(value: &str) -> Result<OwnershipForm, Box<dyn std::error::Error>> {
    match value.to_lowercase().as_str() {
        "personal" => Ok(OwnershipForm::Personal),
        "corporate" => Ok(OwnershipForm::Corporate),
        _ => Err(format!("Unknown ownership form '{value}'. Use: personal, corporate").into()),
    }
}
