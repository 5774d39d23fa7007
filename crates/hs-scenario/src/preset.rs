//! Named growth and supply presets.
//!
//! The built-in catalog carries the dashboard's four population paths and
//! four supply targets.  Catalogs can also be loaded from CSV (see
//! [`loader`][crate::loader]) and swapped in whole.

use std::collections::HashSet;

use hs_projection::GrowthAssumption;

use crate::{ScenarioError, ScenarioResult};

/// Built-in preset names.
pub mod names {
    pub const ABS:              &str = "ABS (1.3%)";
    pub const TREASURY:         &str = "Treasury (1.4%)";
    pub const HIGH_MIGRATION:   &str = "High Migration (1.7%)";
    pub const LABOR_MIGRATION:  &str = "Labor Budget Migration Path";

    pub const LABOR_TARGET:        &str = "Labor Target (240k/year)";
    pub const LABOR_FULL_PLAN:     &str = "Labor Full Plan (240k + 18k aff.)";
    pub const MODERATE_SHORTFALL:  &str = "Moderate Shortfall (180k/year)";
    pub const SEVERE_SHORTFALL:    &str = "Severe Shortfall (150k/year)";
}

/// Staged net-migration intake of the Labor budget path, people per year.
pub const LABOR_MIGRATION_SCHEDULE: [f64; 5] = [435_000.0, 335_000.0, 260_000.0, 225_000.0, 225_000.0];

#[derive(Clone, Debug, PartialEq)]
pub struct GrowthPreset {
    pub name:       String,
    pub assumption: GrowthAssumption,
}

impl GrowthPreset {
    pub fn new(name: impl Into<String>, assumption: GrowthAssumption) -> Self {
        Self { name: name.into(), assumption }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SupplyPreset {
    pub name:          String,
    /// Homes completed per year.
    pub annual_supply: f64,
}

impl SupplyPreset {
    pub fn new(name: impl Into<String>, annual_supply: f64) -> Self {
        Self { name: name.into(), annual_supply }
    }
}

// ── PresetCatalog ─────────────────────────────────────────────────────────────

/// Ordered collections of growth and supply presets with unique names.
///
/// Order is preserved: it is the order presets are listed and the order the
/// scenario matrix walks them.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetCatalog {
    growth: Vec<GrowthPreset>,
    supply: Vec<SupplyPreset>,
}

impl PresetCatalog {
    /// Build a catalog, rejecting duplicate names within either list.
    pub fn new(growth: Vec<GrowthPreset>, supply: Vec<SupplyPreset>) -> ScenarioResult<Self> {
        ensure_unique("growth", growth.iter().map(|p| p.name.as_str()))?;
        ensure_unique("supply", supply.iter().map(|p| p.name.as_str()))?;
        Ok(Self { growth, supply })
    }

    /// The dashboard's built-in presets.
    pub fn builtin() -> Self {
        Self {
            growth: builtin_growth_presets(),
            supply: builtin_supply_presets(),
        }
    }

    /// Replace the growth presets, keeping supply presets.
    pub fn with_growth_presets(self, growth: Vec<GrowthPreset>) -> ScenarioResult<Self> {
        Self::new(growth, self.supply)
    }

    /// Replace the supply presets, keeping growth presets.
    pub fn with_supply_presets(self, supply: Vec<SupplyPreset>) -> ScenarioResult<Self> {
        Self::new(self.growth, supply)
    }

    pub fn growth_presets(&self) -> &[GrowthPreset] {
        &self.growth
    }

    pub fn supply_presets(&self) -> &[SupplyPreset] {
        &self.supply
    }

    pub fn growth(&self, name: &str) -> ScenarioResult<&GrowthPreset> {
        self.growth
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ScenarioError::UnknownPreset { kind: "growth", name: name.to_owned() })
    }

    pub fn supply(&self, name: &str) -> ScenarioResult<&SupplyPreset> {
        self.supply
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ScenarioError::UnknownPreset { kind: "supply", name: name.to_owned() })
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn ensure_unique<'a>(kind: &'static str, names: impl Iterator<Item = &'a str>) -> ScenarioResult<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(ScenarioError::DuplicatePreset { kind, name: name.to_owned() });
        }
    }
    Ok(())
}

// ── Built-ins ─────────────────────────────────────────────────────────────────

pub fn builtin_growth_presets() -> Vec<GrowthPreset> {
    vec![
        GrowthPreset::new(names::ABS, GrowthAssumption::FixedRate(0.013)),
        GrowthPreset::new(names::TREASURY, GrowthAssumption::FixedRate(0.014)),
        GrowthPreset::new(names::HIGH_MIGRATION, GrowthAssumption::FixedRate(0.017)),
        GrowthPreset::new(
            names::LABOR_MIGRATION,
            GrowthAssumption::MigrationSchedule(LABOR_MIGRATION_SCHEDULE.to_vec()),
        ),
    ]
}

pub fn builtin_supply_presets() -> Vec<SupplyPreset> {
    vec![
        SupplyPreset::new(names::LABOR_TARGET, 240_000.0),
        // 18k affordable homes spread over five years.
        SupplyPreset::new(names::LABOR_FULL_PLAN, 240_000.0 + 18_000.0 / 5.0),
        SupplyPreset::new(names::MODERATE_SHORTFALL, 180_000.0),
        SupplyPreset::new(names::SEVERE_SHORTFALL, 150_000.0),
    ]
}
