//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `projections` and `summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::{OutputResult, ProjectionRow, SummaryRow};
use crate::writer::OutputWriter;

/// Writes projection output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS projections (
                 scenario            TEXT    NOT NULL,
                 year                INTEGER NOT NULL,
                 population_millions REAL    NOT NULL,
                 demand              REAL    NOT NULL,
                 cumulative_demand   REAL    NOT NULL,
                 cumulative_supply   REAL    NOT NULL,
                 price_pressure_pct  REAL    NOT NULL,
                 net_surplus         REAL    NOT NULL,
                 PRIMARY KEY (scenario, year)
             );
             CREATE TABLE IF NOT EXISTS summaries (
                 scenario                 TEXT PRIMARY KEY,
                 final_year               INTEGER NOT NULL,
                 final_net_surplus        REAL    NOT NULL,
                 total_demand             REAL    NOT NULL,
                 final_price_pressure_pct REAL    NOT NULL,
                 balance                  TEXT    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_projection(&mut self, rows: &[ProjectionRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT OR REPLACE INTO projections \
                 (scenario, year, population_millions, demand, cumulative_demand, \
                  cumulative_supply, price_pressure_pct, net_surplus) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.scenario,
                    row.year,
                    row.population_millions,
                    row.demand,
                    row.cumulative_demand,
                    row.cumulative_supply,
                    row.price_pressure_pct,
                    row.net_surplus,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO summaries \
             (scenario, final_year, final_net_surplus, total_demand, final_price_pressure_pct, balance) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.scenario,
                row.final_year,
                row.final_net_surplus,
                row.total_demand,
                row.final_price_pressure_pct,
                row.balance,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
