use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Instant;

use super::loan::{validate_loan, LoanParameters};
use super::metrics::{derive_summary, InvestmentSummary};
use super::property::{validate_property, PropertyParameters};
use super::schedule::{build_schedule, ScheduleRow};
use crate::types::{with_metadata, ComputationOutput};
use crate::PropInvestResult;

/// Paired parameter document as accepted by the CLI and bindings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionRequest {
    pub loan: LoanParameters,
    pub property: PropertyParameters,
}

/// Full projection: derived summary plus the month-by-month schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentProjection {
    pub summary: InvestmentSummary,
    pub schedule: Vec<ScheduleRow>,
}

/// Project a rental property investment month by month.
///
/// Validates the parameters, simulates amortisation and cashflow over the
/// full loan term, and derives summary metrics. Pure: no state survives
/// between invocations, and the returned schedule is owned by the caller.
/// Degenerate-but-valid inputs (zero rate, grace period covering the term,
/// zero cost base) produce a defined result plus an envelope warning.
pub fn project_investment(
    loan: &LoanParameters,
    property: &PropertyParameters,
) -> PropInvestResult<ComputationOutput<InvestmentProjection>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_loan(loan, &mut warnings)?;
    validate_property(property, &mut warnings)?;

    let schedule = build_schedule(loan, property);
    let summary = derive_summary(&schedule, property);

    if summary.break_even_month.is_none() {
        warnings.push("Cumulative cashflow never turns positive within the loan term".into());
    }

    let output = InvestmentProjection { summary, schedule };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Rental Property Investment Projection",
        &json!({
            "property": property.property_name,
            "principal": loan.principal.to_string(),
            "annual_rate_pct": loan.annual_rate_pct.to_string(),
            "term_years": loan.term_years,
            "grace_years": loan.grace_years,
            "loan_type": format!("{:?}", loan.loan_type),
            "ownership_form": format!("{:?}", property.ownership_form),
        }),
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rental::loan::LoanType;
    use crate::rental::property::{OwnershipForm, RenovationCost};
    use crate::PropInvestError;
    use rust_decimal_macros::dec;

    fn request() -> (LoanParameters, PropertyParameters) {
        (
            LoanParameters {
                principal: dec!(2700000),
                annual_rate_pct: dec!(5.0),
                term_years: 25,
                grace_years: 2,
                loan_type: LoanType::Annuity,
            },
            PropertyParameters {
                property_name: "Example Road 1".into(),
                purchase_price: dec!(3000000),
                renovation: RenovationCost::Total(dec!(200000)),
                monthly_rent: dec!(22000),
                annual_operating_cost: dec!(36000),
                ownership_form: OwnershipForm::Personal,
                acquisition_cost_rate: dec!(0.025),
            },
        )
    }

    #[test]
    fn test_projection_envelope() {
        let (loan, property) = request();
        let result = project_investment(&loan, &property).unwrap();
        assert_eq!(result.methodology, "Rental Property Investment Projection");
        assert_eq!(result.result.schedule.len(), 300);
        assert_eq!(result.result.summary.total_investment, dec!(3275000));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_invalid_input_surfaces_field() {
        let (mut loan, property) = request();
        loan.annual_rate_pct = dec!(-1);
        let err = project_investment(&loan, &property).unwrap_err();
        match err {
            PropInvestError::InvalidInput { field, .. } => assert_eq!(field, "annual_rate_pct"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_degenerate_grace_warns_not_errors() {
        let (mut loan, property) = request();
        loan.grace_years = 25;
        let result = project_investment(&loan, &property).unwrap();
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("never amortises")));
        assert_eq!(result.result.schedule.len(), 300);
    }

    #[test]
    fn test_request_document_round_trip() {
        let (loan, property) = request();
        let doc = ProjectionRequest { loan, property };
        let json = serde_json::to_string(&doc).unwrap();
        let back: ProjectionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.loan.principal, dec!(2700000));
        assert_eq!(back.property.renovation.total(), dec!(200000));
    }
}
