//! Parquet output backend (feature `parquet`).
//!
//! Creates two files in the configured output directory:
//! - `projections.parquet`
//! - `summaries.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{
    ArrayRef, Float64Array, Float64Builder, Int32Array, Int32Builder, StringArray, StringBuilder,
};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{OutputResult, ProjectionRow, SummaryRow};

fn projection_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("scenario",            DataType::Utf8,    false),
        Field::new("year",                DataType::Int32,   false),
        Field::new("population_millions", DataType::Float64, false),
        Field::new("demand",              DataType::Float64, false),
        Field::new("cumulative_demand",   DataType::Float64, false),
        Field::new("cumulative_supply",   DataType::Float64, false),
        Field::new("price_pressure_pct",  DataType::Float64, false),
        Field::new("net_surplus",         DataType::Float64, false),
    ]))
}

fn summary_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("scenario",                 DataType::Utf8,    false),
        Field::new("final_year",               DataType::Int32,   false),
        Field::new("final_net_surplus",        DataType::Float64, false),
        Field::new("total_demand",             DataType::Float64, false),
        Field::new("final_price_pressure_pct", DataType::Float64, false),
        Field::new("balance",                  DataType::Utf8,    false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

fn open(dir: &Path, name: &str, schema: &Arc<Schema>) -> OutputResult<ArrowWriter<File>> {
    let file = File::create(dir.join(name))?;
    Ok(ArrowWriter::try_new(file, Arc::clone(schema), Some(snappy_props()))?)
}

/// Writes projection output to two Parquet files.
///
/// Projection rows become one record batch per scenario.  Summary rows are
/// buffered and written as a single batch by `finish()`.
///
/// `finish()` **must** be called to write the Parquet file footer; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    projections: Option<ArrowWriter<File>>,
    summaries:   Option<ArrowWriter<File>>,
    pending:     Vec<SummaryRow>,
    proj_schema: Arc<Schema>,
    summ_schema: Arc<Schema>,
}

impl ParquetWriter {
    /// Create both Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let proj_schema = projection_schema();
        let summ_schema = summary_schema();
        Ok(Self {
            projections: Some(open(dir, "projections.parquet", &proj_schema)?),
            summaries:   Some(open(dir, "summaries.parquet", &summ_schema)?),
            pending:     Vec::new(),
            proj_schema,
            summ_schema,
        })
    }

    fn summary_batch(&self) -> OutputResult<RecordBatch> {
        let rows = &self.pending;
        let columns: Vec<ArrayRef> = vec![
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.scenario.as_str()))),
            Arc::new(Int32Array::from_iter_values(rows.iter().map(|r| r.final_year))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.final_net_surplus))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.total_demand))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.final_price_pressure_pct))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.balance))),
        ];
        Ok(RecordBatch::try_new(Arc::clone(&self.summ_schema), columns)?)
    }
}

impl OutputWriter for ParquetWriter {
    fn write_projection(&mut self, rows: &[ProjectionRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.projections.as_mut() else {
            return Ok(());
        };

        let mut scenarios  = StringBuilder::new();
        let mut years      = Int32Builder::new();
        let mut population = Float64Builder::new();
        let mut demand     = Float64Builder::new();
        let mut cum_demand = Float64Builder::new();
        let mut cum_supply = Float64Builder::new();
        let mut pressure   = Float64Builder::new();
        let mut surplus    = Float64Builder::new();

        for row in rows {
            scenarios.append_value(&row.scenario);
            years.append_value(row.year);
            population.append_value(row.population_millions);
            demand.append_value(row.demand);
            cum_demand.append_value(row.cumulative_demand);
            cum_supply.append_value(row.cumulative_supply);
            pressure.append_value(row.price_pressure_pct);
            surplus.append_value(row.net_surplus);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.proj_schema),
            vec![
                Arc::new(scenarios.finish()),
                Arc::new(years.finish()),
                Arc::new(population.finish()),
                Arc::new(demand.finish()),
                Arc::new(cum_demand.finish()),
                Arc::new(cum_supply.finish()),
                Arc::new(pressure.finish()),
                Arc::new(surplus.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        if self.summaries.is_some() {
            self.pending.push(row.clone());
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(w) = self.projections.take() {
            w.close()?;
        }
        if let Some(mut w) = self.summaries.take() {
            if !self.pending.is_empty() {
                w.write(&self.summary_batch()?)?;
                self.pending.clear();
            }
            w.close()?;
        }
        Ok(())
    }
}
