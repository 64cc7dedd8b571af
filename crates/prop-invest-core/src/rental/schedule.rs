use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::loan::{periodic_installment, LoanParameters, LoanType};
use super::property::{OwnershipForm, PropertyParameters};
use crate::types::Money;

/// Effective tax on positive monthly cashflow withdrawn from a limited
/// company, flat-modelled over profit and dividend tax combined.
const WITHDRAWAL_TAX_RATE: Decimal = dec!(0.375);

/// One month of the combined amortisation and cashflow projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 1-indexed month
    pub month: u32,
    /// Outstanding loan balance after this month's payment, floored at 0
    pub remaining_balance: Money,
    pub principal_payment: Money,
    pub interest_payment: Money,
    /// Principal plus interest due this month
    pub debt_service: Money,
    /// Rent less pro-rated operating cost and debt service, tax-adjusted
    pub net_cashflow: Money,
    pub cumulative_cashflow: Money,
}

/// Build the month-by-month schedule for a validated parameter set.
///
/// During the grace period only interest is paid and the balance stands
/// still. Serial loans then repay a constant slice of the original
/// principal, annuity loans a fixed installment whose principal share
/// grows as interest shrinks. Never fails: a grace period covering the
/// whole term produces a full-length interest-only schedule.
pub fn build_schedule(loan: &LoanParameters, property: &PropertyParameters) -> Vec<ScheduleRow> {
    let total_months = loan.total_months();
    let grace_months = loan.grace_months();
    let amortising_months = loan.amortising_months();
    let monthly_rate = loan.monthly_rate();
    let installment = periodic_installment(loan);

    // Constant slice of the original principal, not of the declining balance
    let serial_slice = if amortising_months > 0 {
        loan.principal / Decimal::from(amortising_months)
    } else {
        Decimal::ZERO
    };

    let monthly_operating_cost = property.annual_operating_cost / dec!(12);

    let mut rows = Vec::with_capacity(total_months as usize);
    let mut balance = loan.principal;
    let mut cumulative = Decimal::ZERO;

    for month in 1..=total_months {
        let interest = balance * monthly_rate;

        let (principal_payment, debt_service) = if month <= grace_months {
            (Decimal::ZERO, interest)
        } else {
            match loan.loan_type {
                LoanType::Serial => (serial_slice, serial_slice + interest),
                LoanType::Annuity => (installment - interest, installment),
            }
        };

        balance = (balance - principal_payment).max(Decimal::ZERO);

        let mut net_cashflow = property.monthly_rent - monthly_operating_cost - debt_service;
        if property.ownership_form == OwnershipForm::Corporate && net_cashflow > Decimal::ZERO {
            net_cashflow *= Decimal::ONE - WITHDRAWAL_TAX_RATE;
        }
        cumulative += net_cashflow;

        rows.push(ScheduleRow {
            month,
            remaining_balance: balance,
            principal_payment,
            interest_payment: interest,
            debt_service,
            net_cashflow,
            cumulative_cashflow: cumulative,
        });
    }

    rows
}
