//! Running scenarios, singly or as a growth × supply matrix.

use hs_projection::{ProjectionError, SimulationOutput, project};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{GrowthChoice, PresetCatalog, Scenario, ScenarioConfig, ScenarioResult, SupplyChoice};

/// A scenario together with its projection.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioRun {
    pub scenario: Scenario,
    pub output:   SimulationOutput,
}

/// Callbacks invoked as scenario runs complete.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait ScenarioObserver {
    /// Called for every successful projection.
    fn on_run(&mut self, _run: &ScenarioRun) {}

    /// Called when a scenario in a matrix fails to project.  The matrix
    /// carries on with the remaining combinations.
    fn on_failure(&mut self, _scenario: &Scenario, _error: &ProjectionError) {}

    /// Called once after the last scenario has been reported.
    fn on_matrix_end(&mut self, _stats: &MatrixStats) {}
}

/// A [`ScenarioObserver`] that does nothing.
pub struct NoopObserver;

impl ScenarioObserver for NoopObserver {}

/// Outcome counts of a [`run_matrix`] call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MatrixStats {
    pub succeeded: usize,
    pub failed:    usize,
}

/// Project a single resolved scenario.
pub fn run_scenario(scenario: Scenario) -> ScenarioResult<ScenarioRun> {
    let output = project(&scenario.input)?;
    Ok(ScenarioRun { scenario, output })
}

/// Project every growth preset × supply preset combination of `catalog`,
/// using `base` for all scalar settings.
///
/// Runs are reported to `observer` in catalog order (growth-major) whether
/// or not the `parallel` feature is enabled.  A failed combination is
/// reported through [`ScenarioObserver::on_failure`] and does not stop the
/// matrix.
pub fn run_matrix<O: ScenarioObserver>(
    base:     &ScenarioConfig,
    catalog:  &PresetCatalog,
    observer: &mut O,
) -> ScenarioResult<MatrixStats> {
    let mut scenarios = Vec::with_capacity(catalog.growth_presets().len() * catalog.supply_presets().len());
    for growth in catalog.growth_presets() {
        for supply in catalog.supply_presets() {
            let config = base
                .with_growth(GrowthChoice::Preset(growth.name.clone()))
                .with_supply(SupplyChoice::Preset(supply.name.clone()));
            scenarios.push(config.resolve(catalog)?);
        }
    }

    log::info!(
        "running scenario matrix: {} growth × {} supply presets",
        catalog.growth_presets().len(),
        catalog.supply_presets().len()
    );

    #[cfg(feature = "parallel")]
    let outputs: Vec<_> = scenarios.par_iter().map(|s| project(&s.input)).collect();
    #[cfg(not(feature = "parallel"))]
    let outputs: Vec<_> = scenarios.iter().map(|s| project(&s.input)).collect();

    let mut stats = MatrixStats::default();
    for (scenario, result) in scenarios.into_iter().zip(outputs) {
        match result {
            Ok(output) => {
                stats.succeeded += 1;
                observer.on_run(&ScenarioRun { scenario, output });
            }
            Err(e) => {
                stats.failed += 1;
                log::warn!("scenario {:?} failed: {e}", scenario.label());
                observer.on_failure(&scenario, &e);
            }
        }
    }

    observer.on_matrix_end(&stats);
    Ok(stats)
}
