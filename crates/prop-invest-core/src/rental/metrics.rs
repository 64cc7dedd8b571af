use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::property::PropertyParameters;
use super::schedule::ScheduleRow;
use crate::types::{Money, Rate};

/// Aggregate investment metrics derived from the schedule and static inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentSummary {
    /// Purchase price plus renovation and acquisition costs
    pub total_investment: Money,
    /// Stamp duty / closing costs component of the total
    pub acquisition_costs: Money,
    /// Annual rent as a percentage of total investment
    pub gross_yield_pct: Rate,
    /// Annual rent net of operating costs, as a percentage of total investment
    pub net_yield_pct: Rate,
    /// First month where cumulative cashflow turns non-negative
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_even_month: Option<u32>,
    pub total_interest_paid: Money,
    pub total_principal_paid: Money,
    /// Cumulative net cashflow at the end of the horizon
    pub net_cashflow_total: Money,
}

/// Reduce the schedule and static inputs into summary metrics.
/// Yields are zero-guarded: an all-zero cost base reports 0%, not an error.
pub fn derive_summary(schedule: &[ScheduleRow], property: &PropertyParameters) -> InvestmentSummary {
    let acquisition_costs = property.purchase_price * property.acquisition_cost_rate;
    let total_investment =
        property.purchase_price + property.renovation.total() + acquisition_costs;

    let annual_rent = property.monthly_rent * dec!(12);
    let (gross_yield_pct, net_yield_pct) = if total_investment.is_zero() {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        (
            annual_rent / total_investment * dec!(100),
            (annual_rent - property.annual_operating_cost) / total_investment * dec!(100),
        )
    };

    let break_even_month = schedule
        .iter()
        .find(|row| row.cumulative_cashflow >= Decimal::ZERO)
        .map(|row| row.month);

    let total_interest_paid = schedule.iter().map(|r| r.interest_payment).sum();
    let total_principal_paid = schedule.iter().map(|r| r.principal_payment).sum();
    let net_cashflow_total = schedule
        .last()
        .map(|r| r.cumulative_cashflow)
        .unwrap_or(Decimal::ZERO);

    InvestmentSummary {
        total_investment,
        acquisition_costs,
        gross_yield_pct,
        net_yield_pct,
        break_even_month,
        total_interest_paid,
        total_principal_paid,
        net_cashflow_total,
    }
}
