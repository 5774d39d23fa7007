//! `ProjectionRecorder<W>` — bridges `ScenarioObserver` to an `OutputWriter`.

use hs_scenario::{MatrixStats, ScenarioObserver, ScenarioRun, Summary};

use crate::row::{ProjectionRow, SummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`ScenarioObserver`] that writes every successful run's per-year rows
/// and summary to any [`OutputWriter`] backend (CSV, SQLite, Parquet, …).
///
/// Errors from the writer are stored internally because `ScenarioObserver`
/// methods have no return value.  After the runs complete, check for errors
/// with [`take_error`][Self::take_error].
pub struct ProjectionRecorder<W: OutputWriter> {
    writer:     W,
    rows:       usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ProjectionRecorder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Number of projection rows handed to the writer so far.
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Flush the writer.  Called automatically at the end of a matrix; call it
    /// yourself after recording single runs.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files afterwards).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            log::error!("output write failed: {e}");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> ScenarioObserver for ProjectionRecorder<W> {
    fn on_run(&mut self, run: &ScenarioRun) {
        let label = run.scenario.label();
        let rows = ProjectionRow::from_output(&label, &run.output);
        self.rows += rows.len();
        let result = self.writer.write_projection(&rows);
        self.store_err(result);

        let summary = SummaryRow::from(&Summary::from_run(run));
        let result = self.writer.write_summary(&summary);
        self.store_err(result);
    }

    fn on_matrix_end(&mut self, _stats: &MatrixStats) {
        self.finish();
    }
}
