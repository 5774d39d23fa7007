//! Failures while writing projection tables.

use thiserror::Error;

/// Any backend failure while writing projection or summary rows.
///
/// Variants follow the layer that failed; the message names the table
/// format so a CLI user can tell which `--format` was at fault.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Creating, flushing or syncing an output file.
    #[error("writing projection table file: {0}")]
    Io(#[from] std::io::Error),

    #[error("writing projection table as CSV: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "sqlite")]
    #[error("writing projection table to SQLite: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Column arrays did not match the table schema.
    #[cfg(feature = "parquet")]
    #[error("building projection record batch: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[cfg(feature = "parquet")]
    #[error("writing projection table as Parquet: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
}

pub type OutputResult<T> = Result<T, OutputError>;
