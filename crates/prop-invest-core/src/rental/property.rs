use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::PropInvestError;
use crate::types::{Money, Rate};
use crate::PropInvestResult;

/// Ownership form, deciding the tax treatment of positive monthly cashflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnershipForm {
    /// Privately held; cashflow is reported pre-tax
    Personal,
    /// Held through a limited company; positive cashflow is reduced by the
    /// effective withdrawal/dividend tax
    Corporate,
}

/// Itemised renovation budget. Component names follow the usual trades
/// breakdown of a rental refurbishment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenovationBudget {
    #[serde(default)]
    pub demolition: Money,
    #[serde(default)]
    pub bathroom: Money,
    #[serde(default)]
    pub kitchen: Money,
    #[serde(default)]
    pub surfaces: Money,
    #[serde(default)]
    pub flooring: Money,
    #[serde(default)]
    pub plumbing: Money,
    #[serde(default)]
    pub electrical: Money,
    #[serde(default)]
    pub exterior: Money,
}

impl RenovationBudget {
    pub fn total(&self) -> Money {
        self.demolition
            + self.bathroom
            + self.kitchen
            + self.surfaces
            + self.flooring
            + self.plumbing
            + self.electrical
            + self.exterior
    }

    fn components(&self) -> [(&'static str, Money); 8] {
        [
            ("demolition", self.demolition),
            ("bathroom", self.bathroom),
            ("kitchen", self.kitchen),
            ("surfaces", self.surfaces),
            ("flooring", self.flooring),
            ("plumbing", self.plumbing),
            ("electrical", self.electrical),
            ("exterior", self.exterior),
        ]
    }
}

/// Renovation cost: a single figure, or an itemised budget summed into one.
/// Untagged so a bare number in a parameter document reads as a total.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RenovationCost {
    Total(Money),
    Itemised(RenovationBudget),
}

impl RenovationCost {
    pub fn total(&self) -> Money {
        match self {
            RenovationCost::Total(amount) => *amount,
            RenovationCost::Itemised(budget) => budget.total(),
        }
    }
}

impl Default for RenovationCost {
    fn default() -> Self {
        RenovationCost::Total(Decimal::ZERO)
    }
}

/// Property economics for a single rental investment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyParameters {
    /// Display name used in reports; never enters a calculation
    #[serde(default)]
    pub property_name: String,
    pub purchase_price: Money,
    #[serde(default)]
    pub renovation: RenovationCost,
    /// Monthly rental income
    pub monthly_rent: Money,
    /// Annual operating cost (insurance, municipal fees, maintenance)
    pub annual_operating_cost: Money,
    pub ownership_form: OwnershipForm,
    /// Stamp duty / closing costs as a fraction of the purchase price
    #[serde(default = "default_acquisition_cost_rate")]
    pub acquisition_cost_rate: Rate,
}

fn default_acquisition_cost_rate() -> Rate {
    dec!(0.025)
}

pub(crate) fn validate_property(
    property: &PropertyParameters,
    warnings: &mut Vec<String>,
) -> PropInvestResult<()> {
    if property.purchase_price < Decimal::ZERO {
        return Err(PropInvestError::InvalidInput {
            field: "purchase_price".into(),
            reason: "Purchase price cannot be negative".into(),
        });
    }

    match &property.renovation {
        RenovationCost::Total(amount) => {
            if *amount < Decimal::ZERO {
                return Err(PropInvestError::InvalidInput {
                    field: "renovation".into(),
                    reason: "Renovation cost cannot be negative".into(),
                });
            }
        }
        RenovationCost::Itemised(budget) => {
            for (name, amount) in budget.components() {
                if amount < Decimal::ZERO {
                    return Err(PropInvestError::InvalidInput {
                        field: format!("renovation.{name}"),
                        reason: "Renovation component cannot be negative".into(),
                    });
                }
            }
        }
    }

    if property.monthly_rent < Decimal::ZERO {
        return Err(PropInvestError::InvalidInput {
            field: "monthly_rent".into(),
            reason: "Monthly rent cannot be negative".into(),
        });
    }

    if property.annual_operating_cost < Decimal::ZERO {
        return Err(PropInvestError::InvalidInput {
            field: "annual_operating_cost".into(),
            reason: "Operating cost cannot be negative".into(),
        });
    }

    if property.acquisition_cost_rate < Decimal::ZERO {
        return Err(PropInvestError::InvalidInput {
            field: "acquisition_cost_rate".into(),
            reason: "Acquisition cost rate cannot be negative".into(),
        });
    }

    if property.acquisition_cost_rate > dec!(0.10) {
        warnings.push(format!(
            "Acquisition cost rate {} exceeds 10% of purchase price — verify input",
            property.acquisition_cost_rate
        ));
    }

    Ok(())
}
