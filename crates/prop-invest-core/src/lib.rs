pub mod error;
pub mod rental;
pub mod types;

pub use error::PropInvestError;
pub use types::*;

/// Standard result type for all prop-invest operations
pub type PropInvestResult<T> = Result<T, PropInvestError>;
