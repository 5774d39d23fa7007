//! CSV preset loaders.
//!
//! # Growth CSV format
//!
//! One row per fixed rate, or one row per year-transition for a migration
//! schedule.  Rows of the same preset must share `kind`; migration rows are
//! taken in file order.
//!
//! ```csv
//! name,kind,value
//! ABS (1.3%),rate,0.013
//! Staged,migration,435000
//! Staged,migration,335000
//! ```
//!
//! | `kind`      | Meaning                                               |
//! |-------------|-------------------------------------------------------|
//! | `rate`      | `GrowthAssumption::FixedRate(value)` (exactly one row)|
//! | `migration` | one entry of `GrowthAssumption::MigrationSchedule`    |
//!
//! # Supply CSV format
//!
//! ```csv
//! name,annual_supply
//! Labor Target (240k/year),240000
//! ```
//!
//! Presets keep the order of their first appearance in the file.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use hs_projection::GrowthAssumption;

use crate::{GrowthPreset, ScenarioError, ScenarioResult, SupplyPreset};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct GrowthRecord {
    name:  String,
    kind:  String,
    value: f64,
}

#[derive(Deserialize)]
struct SupplyRecord {
    name:          String,
    annual_supply: f64,
}

enum GrowthKind {
    Rate,
    Migration,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load growth presets from a CSV file.
pub fn load_growth_presets_csv(path: &Path) -> ScenarioResult<Vec<GrowthPreset>> {
    let file = std::fs::File::open(path).map_err(ScenarioError::Io)?;
    load_growth_presets_reader(file)
}

/// Like [`load_growth_presets_csv`] but accepts any `Read` source.
pub fn load_growth_presets_reader<R: Read>(reader: R) -> ScenarioResult<Vec<GrowthPreset>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    // (name, kind, values) in first-appearance order.
    let mut order: Vec<(String, GrowthKind, Vec<f64>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for result in csv_reader.deserialize::<GrowthRecord>() {
        let row = result.map_err(|e| ScenarioError::Parse(e.to_string()))?;
        let name = row.name.trim().to_owned();
        let kind = parse_kind(&row.kind)?;

        match index.get(&name) {
            None => {
                index.insert(name.clone(), order.len());
                order.push((name, kind, vec![row.value]));
            }
            Some(&i) => {
                let entry = &mut order[i];
                match (&entry.1, kind) {
                    (GrowthKind::Migration, GrowthKind::Migration) => entry.2.push(row.value),
                    (GrowthKind::Rate, GrowthKind::Rate) => {
                        return Err(ScenarioError::Parse(format!(
                            "growth preset {name:?} has more than one rate row"
                        )));
                    }
                    _ => {
                        return Err(ScenarioError::Parse(format!(
                            "growth preset {name:?} mixes rate and migration rows"
                        )));
                    }
                }
            }
        }
    }

    Ok(order
        .into_iter()
        .map(|(name, kind, values)| {
            let assumption = match kind {
                GrowthKind::Rate => GrowthAssumption::FixedRate(values[0]),
                GrowthKind::Migration => GrowthAssumption::MigrationSchedule(values),
            };
            GrowthPreset::new(name, assumption)
        })
        .collect())
}

/// Load supply presets from a CSV file.
pub fn load_supply_presets_csv(path: &Path) -> ScenarioResult<Vec<SupplyPreset>> {
    let file = std::fs::File::open(path).map_err(ScenarioError::Io)?;
    load_supply_presets_reader(file)
}

/// Like [`load_supply_presets_csv`] but accepts any `Read` source.
pub fn load_supply_presets_reader<R: Read>(reader: R) -> ScenarioResult<Vec<SupplyPreset>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut presets = Vec::new();

    for result in csv_reader.deserialize::<SupplyRecord>() {
        let row = result.map_err(|e| ScenarioError::Parse(e.to_string()))?;
        presets.push(SupplyPreset::new(row.name.trim(), row.annual_supply));
    }

    Ok(presets)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_kind(s: &str) -> ScenarioResult<GrowthKind> {
    match s.trim() {
        "rate" => Ok(GrowthKind::Rate),
        "migration" => Ok(GrowthKind::Migration),
        other => Err(ScenarioError::Parse(format!(
            "invalid growth kind {other:?}: expected \"rate\" or \"migration\""
        ))),
    }
}
