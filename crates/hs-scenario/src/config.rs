//! Scenario configuration.
//!
//! A `ScenarioConfig` is what the dashboard sidebar collects: scalar settings
//! plus a growth and a supply choice, each either a preset name or an explicit
//! value.  Every field has a default, so a JSON file only needs the fields it
//! changes:
//!
//! ```json
//! {
//!   "people_per_household": 2.3,
//!   "growth": "Treasury (1.4%)",
//!   "supply": { "homes_per_year": 200000 }
//! }
//! ```
//!
//! An explicit growth choice uses the engine's own shape:
//! `{"fixed_rate": 0.015}` or `{"migration_schedule": [400000, 300000, …]}`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use hs_core::{Horizon, Year};
use hs_projection::{GrowthAssumption, SimulationInput, SimulationInputBuilder as Defaults};

use crate::preset::names;
use crate::{PresetCatalog, ScenarioResult};

// ── Choices ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GrowthChoice {
    Preset(String),
    Custom(GrowthAssumption),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SupplyChoice {
    Preset(String),
    Custom { homes_per_year: f64 },
}

// ── ScenarioConfig ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// First year of the horizon.
    pub start_year: i32,
    /// Last year of the horizon (inclusive).
    pub end_year: i32,
    pub initial_population_millions: f64,
    pub people_per_household: f64,
    pub initial_backlog: u64,
    pub price_elasticity_factor: f64,
    pub growth: GrowthChoice,
    pub supply: SupplyChoice,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            start_year:                  2024,
            end_year:                    2029,
            initial_population_millions: Defaults::DEFAULT_INITIAL_POPULATION_MILLIONS,
            people_per_household:        Defaults::DEFAULT_PEOPLE_PER_HOUSEHOLD,
            initial_backlog:             Defaults::DEFAULT_INITIAL_BACKLOG,
            price_elasticity_factor:     Defaults::DEFAULT_PRICE_ELASTICITY_FACTOR,
            growth:                      GrowthChoice::Preset(names::ABS.to_owned()),
            supply:                      SupplyChoice::Preset(names::LABOR_TARGET.to_owned()),
        }
    }
}

impl ScenarioConfig {
    pub fn from_json_str(json: &str) -> ScenarioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_json(path: &Path) -> ScenarioResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// `start_year..=end_year`; fails if the span is unreasonably long.
    pub fn horizon(&self) -> ScenarioResult<Horizon> {
        Ok(Horizon::new(Year(self.start_year), Year(self.end_year))?)
    }

    /// Copy of `self` with a different growth choice.
    pub fn with_growth(&self, growth: GrowthChoice) -> Self {
        Self { growth, ..self.clone() }
    }

    /// Copy of `self` with a different supply choice.
    pub fn with_supply(&self, supply: SupplyChoice) -> Self {
        Self { supply, ..self.clone() }
    }

    /// Look up preset names in `catalog` and produce a ready-to-project
    /// [`Scenario`].
    ///
    /// Preset lookup and the horizon span are checked here; everything else
    /// is checked by the engine when the scenario is projected.
    pub fn resolve(&self, catalog: &PresetCatalog) -> ScenarioResult<Scenario> {
        let (growth_label, growth) = match &self.growth {
            GrowthChoice::Preset(name) => {
                let preset = catalog.growth(name)?;
                (preset.name.clone(), preset.assumption.clone())
            }
            GrowthChoice::Custom(assumption) => (custom_growth_label(assumption), assumption.clone()),
        };

        let (supply_label, annual_supply) = match &self.supply {
            SupplyChoice::Preset(name) => {
                let preset = catalog.supply(name)?;
                (preset.name.clone(), preset.annual_supply)
            }
            SupplyChoice::Custom { homes_per_year } => {
                (format!("Custom supply ({homes_per_year}/year)"), *homes_per_year)
            }
        };

        let input = SimulationInput::builder(self.horizon()?)
            .initial_population_millions(self.initial_population_millions)
            .people_per_household(self.people_per_household)
            .initial_backlog(self.initial_backlog)
            .price_elasticity_factor(self.price_elasticity_factor)
            .growth(growth)
            .annual_supply(annual_supply)
            .build();

        Ok(Scenario { growth_label, supply_label, input })
    }
}

fn custom_growth_label(assumption: &GrowthAssumption) -> String {
    match assumption {
        GrowthAssumption::FixedRate(rate) => format!("Custom growth ({:.1}%)", rate * 100.0),
        GrowthAssumption::MigrationSchedule(_) => "Custom migration schedule".to_owned(),
    }
}

// ── Scenario ──────────────────────────────────────────────────────────────────

/// A fully resolved projection request with human-readable labels.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    pub growth_label: String,
    pub supply_label: String,
    pub input:        SimulationInput,
}

impl Scenario {
    /// `"<growth> + <supply>"`, the dashboard's chart title.
    pub fn label(&self) -> String {
        format!("{} + {}", self.growth_label, self.supply_label)
    }
}
