//! `hs-projection` — the population / housing-demand projection engine.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`input`]  | `GrowthAssumption`, `SimulationInput`, `SimulationInputBuilder` |
//! | [`engine`] | `project`                                                  |
//! | [`output`] | `SimulationOutput`, `YearRecord`                           |
//! | [`error`]  | `ProjectionError`, `ProjectionResult<T>`                   |
//!
//! # Model (summary)
//!
//! For a horizon of `N` years, population is projected for all `N` years and
//! every other series is produced once per year-transition (`N - 1` values):
//!
//! ```text
//! demand[i]            = (pop[i+1] - pop[i]) * 1e6 / people_per_household
//! cumulative_demand[i] = backlog + demand[0] + … + demand[i]
//! cumulative_supply[i] = annual_supply * (i + 1)
//! price_pressure[i]    = (cum_demand - cum_supply) / cum_demand * elasticity * 100
//! net_surplus[i]       = cum_supply - cum_demand
//! ```
//!
//! `project` is a pure function: no state survives between calls and it is
//! safe to call from any number of threads at once.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hs_core::{Horizon, Year};
//! use hs_projection::{project, GrowthAssumption, SimulationInput};
//!
//! let input = SimulationInput::builder(Horizon::new(Year(2024), Year(2029))?)
//!     .growth(GrowthAssumption::FixedRate(0.014))
//!     .annual_supply(180_000.0)
//!     .build();
//! let output = project(&input)?;
//! println!("final surplus: {}", output.final_net_surplus());
//! ```

pub mod engine;
pub mod error;
pub mod input;
pub mod output;

#[cfg(test)]
mod tests;

pub use engine::project;
pub use error::{ProjectionError, ProjectionResult};
pub use input::{GrowthAssumption, SimulationInput, SimulationInputBuilder};
pub use output::{SimulationOutput, YearRecord};
