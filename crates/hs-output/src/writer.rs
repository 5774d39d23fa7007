//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, ProjectionRow, SummaryRow};

/// Trait implemented by CSV, SQLite, and Parquet writers.
pub trait OutputWriter {
    /// Write the per-year rows of one scenario.
    fn write_projection(&mut self, rows: &[ProjectionRow]) -> OutputResult<()>;

    /// Write one scenario summary row.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: OutputWriter + ?Sized> OutputWriter for Box<W> {
    fn write_projection(&mut self, rows: &[ProjectionRow]) -> OutputResult<()> {
        (**self).write_projection(rows)
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        (**self).write_summary(row)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}
