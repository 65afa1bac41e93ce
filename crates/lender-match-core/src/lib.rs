pub mod error;
pub mod types;

#[cfg(feature = "eligibility")]
pub mod eligibility;

pub use error::LenderMatchError;
pub use types::*;

/// Standard result type for all lender-match operations
pub type LenderMatchResult<T> = Result<T, LenderMatchError>;
