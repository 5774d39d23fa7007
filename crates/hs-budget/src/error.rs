use hs_core::Year;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BudgetError {
    #[error("budget configuration error: {0}")]
    Config(String),

    /// A percentage comparison against a zero baseline.
    #[error("percentage undefined for {year}: baseline is zero")]
    NumericDomain { year: Year },
}

pub type BudgetResult<T> = Result<T, BudgetError>;
