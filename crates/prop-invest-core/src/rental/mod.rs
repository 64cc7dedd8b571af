pub mod loan;
pub mod metrics;
pub mod projection;
pub mod property;
pub mod schedule;

pub use loan::{periodic_installment, LoanParameters, LoanType};
pub use metrics::InvestmentSummary;
pub use projection::{project_investment, InvestmentProjection, ProjectionRequest};
pub use property::{OwnershipForm, PropertyParameters, RenovationBudget, RenovationCost};
pub use schedule::ScheduleRow;
