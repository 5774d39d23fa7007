//! Integration tests for hs-output.

#[cfg(test)]
fn sample_row(scenario: &str, year: i32) -> crate::row::ProjectionRow {
    crate::row::ProjectionRow {
        scenario:            scenario.to_owned(),
        year,
        population_millions: 27.0471,
        demand:              138_840.0,
        cumulative_demand:   168_840.0,
        cumulative_supply:   240_000.0,
        price_pressure_pct:  -105.4,
        net_surplus:         71_160.0,
    }
}

#[cfg(test)]
fn sample_summary(scenario: &str) -> crate::row::SummaryRow {
    crate::row::SummaryRow {
        scenario:                 scenario.to_owned(),
        final_year:               2029,
        final_net_surplus:        457_514.6,
        total_demand:             712_485.4,
        final_price_pressure_pct: -154.0,
        balance:                  "oversupply",
    }
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use hs_scenario::{PresetCatalog, ScenarioConfig, Summary, run_scenario};

    use crate::row::{ProjectionRow, SummaryRow};

    #[test]
    fn rows_from_output() {
        let scenario = ScenarioConfig::default().resolve(&PresetCatalog::builtin()).unwrap();
        let run = run_scenario(scenario).unwrap();
        let rows = ProjectionRow::from_output("baseline", &run.output);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].year, 2025);
        assert_eq!(rows[4].year, 2029);
        assert_eq!(rows[0].scenario, "baseline");
        assert_eq!(rows[2].net_surplus, run.output.net_surplus[2]);
    }

    #[test]
    fn summary_row_balance_label() {
        let scenario = ScenarioConfig::default().resolve(&PresetCatalog::builtin()).unwrap();
        let run = run_scenario(scenario).unwrap();
        let row = SummaryRow::from(&Summary::from_run(&run));
        assert_eq!(row.balance, "oversupply");
        assert_eq!(row.final_year, 2029);
        assert_eq!(row.scenario, "ABS (1.3%) + Labor Target (240k/year)");
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, PROJECTION_HEADERS, SUMMARY_HEADERS};
    use crate::writer::OutputWriter;

    use super::{sample_row, sample_summary};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("projections.csv").exists());
        assert!(dir.path().join("summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("projections.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, PROJECTION_HEADERS);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, SUMMARY_HEADERS);
    }

    #[test]
    fn csv_projection_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_projection(&[sample_row("a", 2025), sample_row("a", 2026), sample_row("b, quoted", 2025)])
            .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("projections.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "a");
        assert_eq!(&rows[1][1], "2026");
        assert_eq!(&rows[2][0], "b, quoted"); // commas survive quoting
        assert_eq!(rows[0][7].parse::<f64>().unwrap(), 71_160.0);
    }

    #[test]
    fn csv_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_summary(&sample_summary("s")).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "2029");
        assert_eq!(&rows[0][5], "oversupply");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_missing_dir_fails() {
        let dir = tmp();
        let err = CsvWriter::new(&dir.path().join("does/not/exist")).err().expect("missing dir");
        assert!(err.to_string().starts_with("writing projection table as CSV"), "{err}");
    }
}

// ── Recorder ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod recorder_tests {
    use hs_scenario::{
        PresetCatalog, ScenarioConfig, ScenarioObserver, run_matrix, run_scenario,
    };

    use crate::csv::CsvWriter;
    use crate::row::{ProjectionRow, SummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult, ProjectionRecorder};

    /// Counts calls; fails every projection write after the first.
    #[derive(Default)]
    struct FlakyWriter {
        projections: usize,
        summaries:   usize,
        finished:    usize,
    }

    impl OutputWriter for FlakyWriter {
        fn write_projection(&mut self, _rows: &[ProjectionRow]) -> OutputResult<()> {
            self.projections += 1;
            if self.projections > 1 {
                return Err(OutputError::Io(std::io::Error::other(format!(
                    "write {} refused",
                    self.projections
                ))));
            }
            Ok(())
        }

        fn write_summary(&mut self, _row: &SummaryRow) -> OutputResult<()> {
            self.summaries += 1;
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn matrix_to_csv() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut rec = ProjectionRecorder::new(writer);
        run_matrix(&ScenarioConfig::default(), &PresetCatalog::builtin(), &mut rec).unwrap();
        assert!(rec.take_error().is_none(), "no write errors expected");
        assert_eq!(rec.rows_written(), 16 * 5);

        let mut rdr = csv::Reader::from_path(dir.path().join("projections.csv")).unwrap();
        assert_eq!(rdr.records().count(), 80);
        let mut rdr = csv::Reader::from_path(dir.path().join("summaries.csv")).unwrap();
        assert_eq!(rdr.records().count(), 16);
    }

    #[test]
    fn single_run_then_finish() {
        let dir = tempfile::tempdir().unwrap();
        let mut rec = ProjectionRecorder::new(CsvWriter::new(dir.path()).unwrap());
        let scenario = ScenarioConfig::default().resolve(&PresetCatalog::builtin()).unwrap();
        rec.on_run(&run_scenario(scenario).unwrap());
        rec.finish();
        assert!(rec.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("projections.csv")).unwrap();
        assert_eq!(rdr.records().count(), 5);
    }

    #[test]
    fn first_error_kept_and_runs_continue() {
        let mut rec = ProjectionRecorder::new(FlakyWriter::default());
        run_matrix(&ScenarioConfig::default(), &PresetCatalog::builtin(), &mut rec).unwrap();

        let err = rec.take_error().expect("write error expected");
        assert!(err.to_string().contains("write 2 refused"), "{err}");
        assert!(rec.take_error().is_none(), "error is taken once");

        let writer = rec.into_writer();
        assert_eq!(writer.projections, 16);
        assert_eq!(writer.summaries, 16);
        assert_eq!(writer.finished, 1);
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    use super::{sample_row, sample_summary};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_projection_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_projection(&[sample_row("a", 2025), sample_row("a", 2026), sample_row("b", 2025)])
            .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM projections", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_rewrite_replaces_rows() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_projection(&[sample_row("a", 2025)]).unwrap();
        let mut updated = sample_row("a", 2025);
        updated.net_surplus = -5.0;
        w.write_projection(&[updated]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let surplus: f64 = conn.query_row(
            "SELECT net_surplus FROM projections WHERE scenario = 'a' AND year = 2025",
            [],
            |r| r.get(0),
        ).unwrap();
        assert_eq!(surplus, -5.0);
    }

    #[test]
    fn sqlite_summary() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_summary(&sample_summary("s")).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (year, balance): (i64, String) = conn.query_row(
            "SELECT final_year, balance FROM summaries WHERE scenario = 's'",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        ).unwrap();
        assert_eq!(year, 2029);
        assert_eq!(balance, "oversupply");
    }
}

// ── Parquet tests ─────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "parquet"))]
mod parquet_tests {
    use tempfile::TempDir;

    use arrow::datatypes::DataType;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

    use crate::parquet::ParquetWriter;
    use crate::writer::OutputWriter;

    use super::{sample_row, sample_summary};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn parquet_files_created() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert!(dir.path().join("projections.parquet").exists());
        assert!(dir.path().join("summaries.parquet").exists());
    }

    #[test]
    fn parquet_projection_rows_and_schema() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.write_projection(&[sample_row("a", 2025), sample_row("a", 2026)]).unwrap();
        w.write_summary(&sample_summary("a")).unwrap();
        w.finish().unwrap();

        let file = std::fs::File::open(dir.path().join("projections.parquet")).unwrap();
        let builder = ParquetRecordBatchReaderBuilder::try_new(file).unwrap();
        let schema = builder.schema().clone();
        let reader = builder.build().unwrap();

        let total_rows: usize = reader.map(|b| b.unwrap().num_rows()).sum();
        assert_eq!(total_rows, 2);

        let field_names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(field_names, crate::csv::PROJECTION_HEADERS);
        assert_eq!(*schema.field_with_name("year").unwrap().data_type(), DataType::Int32);
        assert_eq!(*schema.field_with_name("net_surplus").unwrap().data_type(), DataType::Float64);
    }

    #[test]
    fn parquet_summaries_written_on_finish() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.write_summary(&sample_summary("a")).unwrap();
        w.write_summary(&sample_summary("b")).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let file = std::fs::File::open(dir.path().join("summaries.parquet")).unwrap();
        let reader = ParquetRecordBatchReaderBuilder::try_new(file).unwrap().build().unwrap();
        let total_rows: usize = reader.map(|b| b.unwrap().num_rows()).sum();
        assert_eq!(total_rows, 2);
    }

    #[test]
    fn parquet_finish_required() {
        let dir = tmp();
        {
            let mut w = ParquetWriter::new(dir.path()).unwrap();
            w.write_projection(&[sample_row("a", 2025)]).unwrap();
            // Dropped without finish(): no footer is written.
        }

        let file = std::fs::File::open(dir.path().join("projections.parquet")).unwrap();
        assert!(ParquetRecordBatchReaderBuilder::try_new(file).is_err());
    }
}

// ── Boxed writers ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod boxed_tests {
    use crate::csv::CsvWriter;
    use crate::writer::OutputWriter;

    use super::sample_row;

    #[test]
    fn boxed_writer_forwards() {
        let dir = tempfile::tempdir().unwrap();
        let mut w: Box<dyn OutputWriter> = Box::new(CsvWriter::new(dir.path()).unwrap());
        w.write_projection(&[sample_row("boxed", 2025)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("projections.csv")).unwrap();
        assert_eq!(rdr.records().count(), 1);
    }
}
