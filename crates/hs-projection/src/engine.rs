//! The projection function.

use hs_core::{cumulative_sum, millions_to_people, people_to_millions, MILLION};

use crate::{GrowthAssumption, ProjectionError, ProjectionResult, SimulationInput, SimulationOutput};

/// Project population, housing demand, supply, price pressure and net
/// surplus over `input.horizon`.
///
/// Deterministic: identical input always yields bit-identical output.
///
/// # Errors
///
/// - [`ProjectionError::Configuration`] if the input fails
///   [`SimulationInput::validate`].
/// - [`ProjectionError::NumericDomain`] if cumulative demand is exactly zero
///   for any year, leaving price pressure undefined.
pub fn project(input: &SimulationInput) -> ProjectionResult<SimulationOutput> {
    input.validate()?;

    let population_by_year = population_path(input);

    let demand_by_year: Vec<f64> = population_by_year
        .windows(2)
        .map(|w| (w[1] - w[0]) * MILLION / input.people_per_household)
        .collect();

    let backlog = input.initial_backlog as f64;
    let cumulative_demand: Vec<f64> = cumulative_sum(&demand_by_year)
        .into_iter()
        .map(|d| d + backlog)
        .collect();

    let cumulative_supply: Vec<f64> = (1..=demand_by_year.len())
        .map(|n| input.annual_supply * n as f64)
        .collect();

    let mut price_pressure_pct = Vec::with_capacity(cumulative_demand.len());
    for (i, (&d, &s)) in cumulative_demand.iter().zip(&cumulative_supply).enumerate() {
        if d == 0.0 {
            return Err(ProjectionError::NumericDomain {
                year:  input.horizon.first.offset(i + 1),
                index: i,
            });
        }
        price_pressure_pct.push((d - s) / d * input.price_elasticity_factor * 100.0);
    }

    let net_surplus: Vec<f64> = cumulative_supply
        .iter()
        .zip(&cumulative_demand)
        .map(|(s, d)| s - d)
        .collect();

    log::debug!(
        "projected {} ({} transitions): final net surplus {:.0}",
        input.horizon,
        demand_by_year.len(),
        net_surplus.last().copied().unwrap_or_default()
    );

    Ok(SimulationOutput {
        horizon: input.horizon,
        population_by_year,
        demand_by_year,
        cumulative_demand,
        cumulative_supply,
        price_pressure_pct,
        net_surplus,
    })
}

/// Population in millions for every year of the horizon.
fn population_path(input: &SimulationInput) -> Vec<f64> {
    let years = input.horizon.len();
    match &input.growth {
        GrowthAssumption::FixedRate(rate) => {
            let mut pop = Vec::with_capacity(years);
            pop.push(input.initial_population_millions);
            for i in 1..years {
                pop.push(pop[i - 1] * (1.0 + rate));
            }
            pop
        }
        GrowthAssumption::MigrationSchedule(schedule) => {
            // Accumulate in absolute people, then convert back to millions.
            let mut people = Vec::with_capacity(years);
            people.push(millions_to_people(input.initial_population_millions));
            for (i, migration) in schedule.iter().enumerate() {
                people.push(people[i] + migration);
            }
            people.into_iter().map(people_to_millions).collect()
        }
    }
}
