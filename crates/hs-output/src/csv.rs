//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `projections.csv`
//! - `summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{OutputResult, ProjectionRow, SummaryRow};
use crate::writer::OutputWriter;

pub const PROJECTION_HEADERS: [&str; 8] = [
    "scenario",
    "year",
    "population_millions",
    "demand",
    "cumulative_demand",
    "cumulative_supply",
    "price_pressure_pct",
    "net_surplus",
];

pub const SUMMARY_HEADERS: [&str; 6] = [
    "scenario",
    "final_year",
    "final_net_surplus",
    "total_demand",
    "final_price_pressure_pct",
    "balance",
];

/// Writes projection output to two CSV files.
pub struct CsvWriter {
    projections: Writer<File>,
    summaries:   Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut projections = Writer::from_path(dir.join("projections.csv"))?;
        projections.write_record(PROJECTION_HEADERS)?;

        let mut summaries = Writer::from_path(dir.join("summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADERS)?;

        Ok(Self {
            projections,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_projection(&mut self, rows: &[ProjectionRow]) -> OutputResult<()> {
        for row in rows {
            self.projections.write_record(&[
                row.scenario.clone(),
                row.year.to_string(),
                row.population_millions.to_string(),
                row.demand.to_string(),
                row.cumulative_demand.to_string(),
                row.cumulative_supply.to_string(),
                row.price_pressure_pct.to_string(),
                row.net_surplus.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.scenario.clone(),
            row.final_year.to_string(),
            row.final_net_surplus.to_string(),
            row.total_demand.to_string(),
            row.final_price_pressure_pct.to_string(),
            row.balance.to_owned(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.projections.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
