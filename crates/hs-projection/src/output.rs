//! Projection results.

use hs_core::{Horizon, Year};

/// The six series produced by one projection run.
///
/// `population_by_year` has one value per horizon year; every other series
/// has one value per year-transition (`horizon.len() - 1`).  Index `i` of a
/// per-transition series describes the step into year `horizon.first + i + 1`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationOutput {
    pub horizon: Horizon,

    /// Population in millions; `[0]` is the initial population.
    pub population_by_year: Vec<f64>,

    /// New homes required per transition.
    pub demand_by_year: Vec<f64>,

    /// Backlog plus all demand so far.
    pub cumulative_demand: Vec<f64>,

    /// Annual supply accumulated.
    pub cumulative_supply: Vec<f64>,

    pub price_pressure_pct: Vec<f64>,

    /// `cumulative_supply - cumulative_demand`; positive means oversupply.
    pub net_surplus: Vec<f64>,
}

/// One row of a [`SimulationOutput`], labelled by its destination year.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct YearRecord {
    pub year:                Year,
    pub population_millions: f64,
    pub demand:              f64,
    pub cumulative_demand:   f64,
    pub cumulative_supply:   f64,
    pub price_pressure_pct:  f64,
    pub net_surplus:         f64,
}

impl SimulationOutput {
    /// Number of year-transitions covered.
    #[inline]
    pub fn transitions(&self) -> usize {
        self.demand_by_year.len()
    }

    /// Label for each per-transition entry (every horizon year but the first).
    pub fn transition_years(&self) -> Vec<Year> {
        self.horizon.transition_years().collect()
    }

    /// Net surplus at the end of the horizon.
    pub fn final_net_surplus(&self) -> f64 {
        self.net_surplus.last().copied().unwrap_or_default()
    }

    /// Price pressure at the end of the horizon.
    pub fn final_price_pressure(&self) -> f64 {
        self.price_pressure_pct.last().copied().unwrap_or_default()
    }

    /// New demand generated inside the horizon (backlog excluded).
    pub fn total_demand(&self) -> f64 {
        self.demand_by_year.iter().sum()
    }

    /// Iterate the per-transition series as rows.
    pub fn records(&self) -> impl Iterator<Item = YearRecord> + '_ {
        (0..self.transitions()).map(move |i| YearRecord {
            year:                self.horizon.first.offset(i + 1),
            population_millions: self.population_by_year[i + 1],
            demand:              self.demand_by_year[i],
            cumulative_demand:   self.cumulative_demand[i],
            cumulative_supply:   self.cumulative_supply[i],
            price_pressure_pct:  self.price_pressure_pct[i],
            net_surplus:         self.net_surplus[i],
        })
    }
}
