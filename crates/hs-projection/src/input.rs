//! Projection inputs.

use hs_core::Horizon;

use crate::{ProjectionError, ProjectionResult};

// ── GrowthAssumption ──────────────────────────────────────────────────────────

/// How population evolves across the horizon.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GrowthAssumption {
    /// Compounding annual growth rate, e.g. `0.013` for 1.3 %.
    FixedRate(f64),
    /// Net migration in people (not millions), one entry per year-transition.
    MigrationSchedule(Vec<f64>),
}

impl GrowthAssumption {
    /// `true` for the staged-migration form.
    #[inline]
    pub fn is_migration_schedule(&self) -> bool {
        matches!(self, GrowthAssumption::MigrationSchedule(_))
    }
}

// ── SimulationInput ───────────────────────────────────────────────────────────

/// Everything a single projection run needs.  Immutable once built.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationInput {
    /// Years covered by the run.  Must contain at least two years.
    pub horizon: Horizon,

    /// Population at the first year of the horizon, in millions.
    pub initial_population_millions: f64,

    /// Average household occupancy.  Divides population growth into homes.
    pub people_per_household: f64,

    /// Homes of unmet demand accumulated before the horizon starts.
    pub initial_backlog: u64,

    /// Scales the relative demand/supply gap into a price-pressure percentage.
    pub price_elasticity_factor: f64,

    pub growth: GrowthAssumption,

    /// Homes completed per year, constant across the horizon.
    pub annual_supply: f64,
}

impl SimulationInput {
    /// Start a builder over `horizon`, pre-filled with the housing-stress
    /// dashboard's default settings.
    pub fn builder(horizon: Horizon) -> SimulationInputBuilder {
        SimulationInputBuilder::new(horizon)
    }

    /// Check the input shape.  Called by [`project`][crate::project] before
    /// any arithmetic happens.
    pub fn validate(&self) -> ProjectionResult<()> {
        let transitions = self.horizon.transitions();
        if transitions == 0 {
            return Err(config(format!(
                "horizon must contain at least 2 years, got {}",
                self.horizon.len()
            )));
        }
        if self.horizon.len() > Horizon::MAX_YEARS {
            return Err(config(format!(
                "horizon {} is longer than {} years",
                self.horizon,
                Horizon::MAX_YEARS
            )));
        }

        // `!(x > 0.0)` also catches NaN.
        if !(self.people_per_household > 0.0) || !self.people_per_household.is_finite() {
            return Err(config(format!(
                "people per household must be a positive number, got {}",
                self.people_per_household
            )));
        }
        if !(self.initial_population_millions > 0.0) || !self.initial_population_millions.is_finite() {
            return Err(config(format!(
                "initial population must be a positive number of millions, got {}",
                self.initial_population_millions
            )));
        }
        if !self.price_elasticity_factor.is_finite() {
            return Err(config(format!(
                "price elasticity factor must be finite, got {}",
                self.price_elasticity_factor
            )));
        }
        if !(self.annual_supply >= 0.0) || !self.annual_supply.is_finite() {
            return Err(config(format!(
                "annual supply must be a non-negative number of homes, got {}",
                self.annual_supply
            )));
        }

        match &self.growth {
            GrowthAssumption::FixedRate(rate) => {
                if !rate.is_finite() {
                    return Err(config(format!("growth rate must be finite, got {rate}")));
                }
            }
            GrowthAssumption::MigrationSchedule(schedule) => {
                if schedule.len() != transitions {
                    return Err(config(format!(
                        "migration schedule has {} entries but horizon {} has {} year-transitions",
                        schedule.len(),
                        self.horizon,
                        transitions
                    )));
                }
                if let Some(bad) = schedule.iter().find(|m| !m.is_finite()) {
                    return Err(config(format!("migration entries must be finite, got {bad}")));
                }
            }
        }

        Ok(())
    }
}

fn config(msg: String) -> ProjectionError {
    ProjectionError::Configuration(msg)
}

// ── SimulationInputBuilder ────────────────────────────────────────────────────

/// Fluent builder for [`SimulationInput`].
///
/// # Defaults
///
/// | Method                           | Default                 |
/// |----------------------------------|-------------------------|
/// | `.initial_population_millions(x)`| `26.7`                  |
/// | `.people_per_household(x)`       | `2.5`                   |
/// | `.initial_backlog(n)`            | `30_000`                |
/// | `.price_elasticity_factor(x)`    | `2.5`                   |
/// | `.growth(g)`                     | `FixedRate(0.013)`      |
/// | `.annual_supply(x)`              | `240_000.0`             |
///
/// The builder does not validate; [`project`][crate::project] does.
pub struct SimulationInputBuilder {
    input: SimulationInput,
}

impl SimulationInputBuilder {
    pub const DEFAULT_INITIAL_POPULATION_MILLIONS: f64 = 26.7;
    pub const DEFAULT_PEOPLE_PER_HOUSEHOLD:        f64 = 2.5;
    pub const DEFAULT_INITIAL_BACKLOG:             u64 = 30_000;
    pub const DEFAULT_PRICE_ELASTICITY_FACTOR:     f64 = 2.5;
    pub const DEFAULT_GROWTH_RATE:                 f64 = 0.013;
    pub const DEFAULT_ANNUAL_SUPPLY:               f64 = 240_000.0;

    pub fn new(horizon: Horizon) -> Self {
        Self {
            input: SimulationInput {
                horizon,
                initial_population_millions: Self::DEFAULT_INITIAL_POPULATION_MILLIONS,
                people_per_household:        Self::DEFAULT_PEOPLE_PER_HOUSEHOLD,
                initial_backlog:             Self::DEFAULT_INITIAL_BACKLOG,
                price_elasticity_factor:     Self::DEFAULT_PRICE_ELASTICITY_FACTOR,
                growth:                      GrowthAssumption::FixedRate(Self::DEFAULT_GROWTH_RATE),
                annual_supply:               Self::DEFAULT_ANNUAL_SUPPLY,
            },
        }
    }

    pub fn initial_population_millions(mut self, millions: f64) -> Self {
        self.input.initial_population_millions = millions;
        self
    }

    pub fn people_per_household(mut self, people: f64) -> Self {
        self.input.people_per_household = people;
        self
    }

    pub fn initial_backlog(mut self, homes: u64) -> Self {
        self.input.initial_backlog = homes;
        self
    }

    pub fn price_elasticity_factor(mut self, factor: f64) -> Self {
        self.input.price_elasticity_factor = factor;
        self
    }

    pub fn growth(mut self, growth: GrowthAssumption) -> Self {
        self.input.growth = growth;
        self
    }

    pub fn annual_supply(mut self, homes_per_year: f64) -> Self {
        self.input.annual_supply = homes_per_year;
        self
    }

    pub fn build(self) -> SimulationInput {
        self.input
    }
}
