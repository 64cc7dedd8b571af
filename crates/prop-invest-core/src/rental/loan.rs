use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::PropInvestError;
use crate::types::{Money, Rate};
use crate::PropInvestResult;

/// Repayment profile of the loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanType {
    /// Fixed total periodic payment; the principal/interest mix shifts over time
    Annuity,
    /// Fixed periodic principal reduction; the total payment declines as interest shrinks
    Serial,
}

/// Loan terms for a single property acquisition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Amount borrowed
    pub principal: Money,
    /// Nominal annual interest rate in percent (5.0 = 5%)
    pub annual_rate_pct: Rate,
    /// Full loan term in years
    pub term_years: u32,
    /// Interest-only years at the start of the term
    #[serde(default)]
    pub grace_years: u32,
    pub loan_type: LoanType,
}

impl LoanParameters {
    /// Monthly periodic rate as a decimal fraction.
    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate_pct / dec!(100) / dec!(12)
    }

    pub fn total_months(&self) -> u32 {
        self.term_years * 12
    }

    pub fn grace_months(&self) -> u32 {
        self.grace_years * 12
    }

    /// Months over which the principal actually amortises. Zero when the
    /// grace period swallows the whole term.
    pub fn amortising_months(&self) -> u32 {
        self.total_months().saturating_sub(self.grace_months())
    }
}

/// Post-grace periodic installment.
///
/// Annuity loans use the standard formula P * r(1+r)^m / ((1+r)^m - 1)
/// over the m amortising months. Serial and zero-rate loans fall back to a
/// straight-line split of the principal, and a grace period covering the
/// whole term yields zero. The fallback keeps the result defined instead
/// of raising on the division the formula would otherwise hit.
pub fn periodic_installment(loan: &LoanParameters) -> Money {
    let m = loan.amortising_months();
    if m == 0 {
        return Decimal::ZERO;
    }

    let r = loan.monthly_rate();
    match loan.loan_type {
        LoanType::Annuity if r > Decimal::ZERO => {
            let compound = (Decimal::ONE + r).powi(m as i64);
            loan.principal * r * compound / (compound - Decimal::ONE)
        }
        _ => loan.principal / Decimal::from(m),
    }
}

pub(crate) fn validate_loan(
    loan: &LoanParameters,
    warnings: &mut Vec<String>,
) -> PropInvestResult<()> {
    if loan.principal < Decimal::ZERO {
        return Err(PropInvestError::InvalidInput {
            field: "principal".into(),
            reason: "Loan principal cannot be negative".into(),
        });
    }

    if loan.annual_rate_pct < Decimal::ZERO {
        return Err(PropInvestError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "Interest rate cannot be negative".into(),
        });
    }

    if loan.term_years == 0 {
        return Err(PropInvestError::InvalidInput {
            field: "term_years".into(),
            reason: "Loan term must be at least 1 year".into(),
        });
    }

    if loan.grace_years >= loan.term_years {
        warnings.push(format!(
            "Grace period of {} years covers the whole {}-year term — the loan never amortises",
            loan.grace_years, loan.term_years
        ));
    }

    if loan.annual_rate_pct > dec!(15) {
        warnings.push(format!(
            "Interest rate {}% exceeds 15% — unusually high, verify input",
            loan.annual_rate_pct
        ));
    }

    Ok(())
}
