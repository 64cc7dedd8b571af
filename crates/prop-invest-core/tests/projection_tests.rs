use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use prop_invest_core::rental::{
    project_investment, LoanParameters, LoanType, OwnershipForm, PropertyParameters,
    RenovationBudget, RenovationCost,
};

// ===========================================================================
// Reference scenario: 3.0M purchase, 0.2M renovation, 2.7M loan at 5% over
// 25 years with 2 interest-only years, 22k monthly rent, 36k annual costs
// ===========================================================================

fn reference_loan() -> LoanParameters {
    LoanParameters {
        principal: dec!(2700000),
        annual_rate_pct: dec!(5.0),
        term_years: 25,
        grace_years: 2,
        loan_type: LoanType::Annuity,
    }
}

fn reference_property() -> PropertyParameters {
    PropertyParameters {
        property_name: "Example Road 1".into(),
        purchase_price: dec!(3000000),
        renovation: RenovationCost::Total(dec!(200000)),
        monthly_rent: dec!(22000),
        annual_operating_cost: dec!(36000),
        ownership_form: OwnershipForm::Personal,
        acquisition_cost_rate: dec!(0.025),
    }
}

#[test]
fn test_annuity_reference_scenario() {
    let result = project_investment(&reference_loan(), &reference_property()).unwrap();
    let projection = &result.result;

    // Total investment = 3,000,000 + 200,000 + 75,000
    assert_eq!(projection.summary.total_investment, dec!(3275000));
    assert_eq!(projection.summary.acquisition_costs, dec!(75000));

    // Months 1-24: interest only at 2,700,000 * 5% / 12 = 11,250
    for row in &projection.schedule[..24] {
        assert_eq!(row.principal_payment, Decimal::ZERO);
        assert!((row.interest_payment - dec!(11250)).abs() < dec!(0.000001));
        assert_eq!(row.debt_service, row.interest_payment);
    }

    // Month 25 onward: fixed annuity installment over 276 months
    let installment = projection.schedule[24].debt_service;
    assert!(
        installment > dec!(16000) && installment < dec!(17000),
        "Installment {} outside expected range",
        installment
    );
    for row in &projection.schedule[24..] {
        assert!((row.debt_service - installment).abs() < dec!(0.000001));
    }
}

#[test]
fn test_serial_reference_scenario() {
    let mut loan = reference_loan();
    loan.loan_type = LoanType::Serial;
    let result = project_investment(&loan, &reference_property()).unwrap();
    let schedule = &result.result.schedule;

    // Month 25: constant principal slice 2,700,000 / 276 ≈ 9,782.61
    let slice = schedule[24].principal_payment;
    assert!((slice - dec!(9782.6087)).abs() < dec!(0.001));
    for row in &schedule[24..] {
        assert_eq!(row.principal_payment, slice);
    }

    // Interest declines every month as the balance declines
    for pair in schedule[24..].windows(2) {
        assert!(pair[1].interest_payment < pair[0].interest_payment);
    }
}

#[test]
fn test_principal_conservation() {
    for loan_type in [LoanType::Annuity, LoanType::Serial] {
        let mut loan = reference_loan();
        loan.loan_type = loan_type;
        let result = project_investment(&loan, &reference_property()).unwrap();

        let paid: Decimal = result
            .result
            .schedule
            .iter()
            .map(|r| r.principal_payment)
            .sum();
        assert!(
            (paid - dec!(2700000)).abs() < dec!(0.01),
            "{loan_type:?}: principal paid {} differs from 2,700,000",
            paid
        );
        assert_eq!(result.result.summary.total_principal_paid, paid);
    }
}

#[test]
fn test_balance_monotone_never_negative() {
    for loan_type in [LoanType::Annuity, LoanType::Serial] {
        let mut loan = reference_loan();
        loan.loan_type = loan_type;
        let result = project_investment(&loan, &reference_property()).unwrap();

        let mut previous = loan.principal;
        for row in &result.result.schedule {
            assert!(row.remaining_balance <= previous);
            assert!(row.remaining_balance >= Decimal::ZERO);
            previous = row.remaining_balance;
        }
    }
}

// ===========================================================================
// Zero-rate and degenerate scenarios
// ===========================================================================

#[test]
fn test_zero_rate_straight_line() {
    for loan_type in [LoanType::Annuity, LoanType::Serial] {
        let mut loan = reference_loan();
        loan.annual_rate_pct = Decimal::ZERO;
        loan.loan_type = loan_type;
        let result = project_investment(&loan, &reference_property()).unwrap();
        let schedule = &result.result.schedule;

        for row in schedule {
            assert_eq!(row.interest_payment, Decimal::ZERO);
        }
        // Balance falls linearly to 0 at the end of the term
        assert!(schedule[299].remaining_balance < dec!(0.0001));
        let slice = dec!(2700000) / dec!(276);
        assert!((schedule[100].principal_payment - slice).abs() < dec!(0.000001));
    }
}

#[test]
fn test_grace_covering_term_is_degenerate_not_error() {
    let mut loan = reference_loan();
    loan.grace_years = 25;
    let result = project_investment(&loan, &reference_property()).unwrap();

    for row in &result.result.schedule {
        assert_eq!(row.principal_payment, Decimal::ZERO);
        assert_eq!(row.remaining_balance, dec!(2700000));
    }
    assert!(result.warnings.iter().any(|w| w.contains("never amortises")));
}

#[test]
fn test_zero_cost_base_yields_zero() {
    let loan = LoanParameters {
        principal: Decimal::ZERO,
        annual_rate_pct: dec!(5.0),
        term_years: 1,
        grace_years: 0,
        loan_type: LoanType::Annuity,
    };
    let property = PropertyParameters {
        property_name: String::new(),
        purchase_price: Decimal::ZERO,
        renovation: RenovationCost::Total(Decimal::ZERO),
        monthly_rent: dec!(1000),
        annual_operating_cost: Decimal::ZERO,
        ownership_form: OwnershipForm::Personal,
        acquisition_cost_rate: dec!(0.025),
    };
    let result = project_investment(&loan, &property).unwrap();
    assert_eq!(result.result.summary.total_investment, Decimal::ZERO);
    assert_eq!(result.result.summary.gross_yield_pct, Decimal::ZERO);
    assert_eq!(result.result.summary.net_yield_pct, Decimal::ZERO);
}

// ===========================================================================
// Corporate ownership
// ===========================================================================

#[test]
fn test_corporate_tax_scales_gains_only() {
    // No debt, 1,000/month pre-tax: stored cashflow is 625
    let loan = LoanParameters {
        principal: Decimal::ZERO,
        annual_rate_pct: dec!(5.0),
        term_years: 1,
        grace_years: 0,
        loan_type: LoanType::Annuity,
    };
    let mut property = reference_property();
    property.ownership_form = OwnershipForm::Corporate;
    property.monthly_rent = dec!(1000);
    property.annual_operating_cost = Decimal::ZERO;

    let result = project_investment(&loan, &property).unwrap();
    assert_eq!(result.result.schedule[0].net_cashflow, dec!(625));

    // -500/month pre-tax stays -500
    property.monthly_rent = Decimal::ZERO;
    property.annual_operating_cost = dec!(6000);
    let result = project_investment(&loan, &property).unwrap();
    assert_eq!(result.result.schedule[0].net_cashflow, dec!(-500));
}

#[test]
fn test_corporate_break_even_later_than_personal() {
    // Corporate taxation shrinks positive months, so the cumulative line
    // crosses zero no earlier than under personal ownership
    let mut property = reference_property();
    property.monthly_rent = dec!(17000);
    let personal = project_investment(&reference_loan(), &property).unwrap();

    property.ownership_form = OwnershipForm::Corporate;
    let corporate = project_investment(&reference_loan(), &property).unwrap();

    match (
        personal.result.summary.break_even_month,
        corporate.result.summary.break_even_month,
    ) {
        (Some(p), Some(c)) => assert!(c >= p),
        (None, _) => panic!("Personal scenario should break even"),
        (Some(_), None) => {}
    }
}

// ===========================================================================
// Renovation budget and parameter documents
// ===========================================================================

#[test]
fn test_itemised_renovation_flows_into_total_investment() {
    let mut property = reference_property();
    property.renovation = RenovationCost::Itemised(RenovationBudget {
        demolition: dec!(20000),
        bathroom: dec!(120000),
        kitchen: dec!(100000),
        surfaces: dec!(30000),
        flooring: dec!(40000),
        plumbing: dec!(25000),
        electrical: dec!(30000),
        exterior: dec!(20000),
    });
    let result = project_investment(&reference_loan(), &property).unwrap();
    // 3,000,000 + 385,000 + 75,000
    assert_eq!(result.result.summary.total_investment, dec!(3460000));
}

#[test]
fn test_parameter_document_with_bare_renovation_number() {
    let json = r#"{
        "loan": {
            "principal": 2700000,
            "annual_rate_pct": 5.0,
            "term_years": 25,
            "grace_years": 2,
            "loan_type": "Annuity"
        },
        "property": {
            "property_name": "Example Road 1",
            "purchase_price": 3000000,
            "renovation": 200000,
            "monthly_rent": 22000,
            "annual_operating_cost": 36000,
            "ownership_form": "Personal"
        }
    }"#;
    let request: prop_invest_core::rental::ProjectionRequest =
        serde_json::from_str(json).unwrap();
    assert_eq!(request.property.renovation.total(), dec!(200000));

    let result = project_investment(&request.loan, &request.property).unwrap();
    assert_eq!(result.result.summary.total_investment, dec!(3275000));
}
