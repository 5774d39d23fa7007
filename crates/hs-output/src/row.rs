//! Plain data row types written by output backends.

use hs_projection::SimulationOutput;
use hs_scenario::{Balance, Summary};

/// One year-transition of one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionRow {
    pub scenario:            String,
    /// Destination year of the transition.
    pub year:                i32,
    pub population_millions: f64,
    pub demand:              f64,
    pub cumulative_demand:   f64,
    pub cumulative_supply:   f64,
    pub price_pressure_pct:  f64,
    pub net_surplus:         f64,
}

impl ProjectionRow {
    /// One row per transition of `output`, all tagged with `scenario`.
    pub fn from_output(scenario: &str, output: &SimulationOutput) -> Vec<ProjectionRow> {
        output
            .records()
            .map(|r| ProjectionRow {
                scenario:            scenario.to_owned(),
                year:                r.year.0,
                population_millions: r.population_millions,
                demand:              r.demand,
                cumulative_demand:   r.cumulative_demand,
                cumulative_supply:   r.cumulative_supply,
                price_pressure_pct:  r.price_pressure_pct,
                net_surplus:         r.net_surplus,
            })
            .collect()
    }
}

/// End-of-horizon facts for one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub scenario:                 String,
    pub final_year:               i32,
    pub final_net_surplus:        f64,
    pub total_demand:             f64,
    pub final_price_pressure_pct: f64,
    /// `"oversupply"`, `"shortfall"` or `"balanced"`.
    pub balance:                  &'static str,
}

impl From<&Summary> for SummaryRow {
    fn from(s: &Summary) -> Self {
        SummaryRow {
            scenario:                 s.label.clone(),
            final_year:               s.horizon.last().unwrap_or(s.horizon.first).0,
            final_net_surplus:        s.final_net_surplus,
            total_demand:             s.total_demand,
            final_price_pressure_pct: s.final_price_pressure_pct,
            balance: match s.balance {
                Balance::Oversupply(_) => "oversupply",
                Balance::Shortfall(_)  => "shortfall",
                Balance::Balanced      => "balanced",
            },
        }
    }
}
