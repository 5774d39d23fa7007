//! `hs-output` — projection table writers.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend     | Files created                                  |
//! |-----------|-------------|------------------------------------------------|
//! | *(none)*  | CSV         | `projections.csv`, `summaries.csv`             |
//! | `sqlite`  | SQLite      | `output.db`                                    |
//! | `parquet` | Parquet     | `projections.parquet`, `summaries.parquet`     |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`ProjectionRecorder`], which implements `hs_scenario::ScenarioObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hs_output::{CsvWriter, ProjectionRecorder};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut rec = ProjectionRecorder::new(writer);
//! run_matrix(&config, &catalog, &mut rec)?;
//! rec.finish();
//! rec.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod recorder;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use recorder::ProjectionRecorder;
pub use row::{ProjectionRow, SummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
