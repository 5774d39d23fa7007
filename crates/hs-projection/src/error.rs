use hs_core::Year;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    /// Bad or inconsistent input shape.
    #[error("projection configuration error: {0}")]
    Configuration(String),

    /// Cumulative demand is exactly zero, so price pressure is undefined.
    #[error("price pressure undefined for {year} (transition {index}): cumulative demand is zero")]
    NumericDomain {
        year:  Year,
        index: usize,
    },
}

pub type ProjectionResult<T> = Result<T, ProjectionError>;
