//! Unit tests for hs-projection.

use hs_core::{Horizon, Year};

use crate::{GrowthAssumption, SimulationInput};

// ── Helpers ───────────────────────────────────────────────────────────────────

const STAGED_MIGRATION: [f64; 5] = [435_000.0, 335_000.0, 260_000.0, 225_000.0, 225_000.0];

fn horizon_2024_2029() -> Horizon {
    Horizon::new(Year(2024), Year(2029)).unwrap()
}

/// The dashboard's default run: ABS 1.3 % growth, 240k homes/year.
fn abs_baseline() -> SimulationInput {
    SimulationInput::builder(horizon_2024_2029())
        .initial_population_millions(26.7)
        .people_per_household(2.5)
        .initial_backlog(30_000)
        .price_elasticity_factor(2.5)
        .growth(GrowthAssumption::FixedRate(0.013))
        .annual_supply(240_000.0)
        .build()
}

fn staged_migration() -> SimulationInput {
    SimulationInput::builder(horizon_2024_2029())
        .growth(GrowthAssumption::MigrationSchedule(STAGED_MIGRATION.to_vec()))
        .build()
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_settings() {
        let input = SimulationInput::builder(horizon_2024_2029()).build();
        assert_eq!(input, abs_baseline());
    }

    #[test]
    fn overrides_apply() {
        let input = SimulationInput::builder(horizon_2024_2029())
            .people_per_household(3.0)
            .initial_backlog(0)
            .annual_supply(150_000.0)
            .build();
        assert_eq!(input.people_per_household, 3.0);
        assert_eq!(input.initial_backlog, 0);
        assert_eq!(input.annual_supply, 150_000.0);
    }

    #[test]
    fn migration_flag() {
        assert!(staged_migration().growth.is_migration_schedule());
        assert!(!abs_baseline().growth.is_migration_schedule());
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod validation_tests {
    use super::*;
    use crate::{project, ProjectionError};

    fn assert_config_error(input: SimulationInput) {
        match project(&input) {
            Err(ProjectionError::Configuration(_)) => {}
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn single_year_horizon_rejected() {
        let mut input = abs_baseline();
        input.horizon = Horizon::new(Year(2024), Year(2024)).unwrap();
        assert_config_error(input);
    }

    #[test]
    fn empty_horizon_rejected() {
        let mut input = abs_baseline();
        input.horizon = Horizon::new(Year(2024), Year(2020)).unwrap();
        assert_config_error(input);
    }

    #[test]
    fn overlong_horizon_rejected() {
        let mut input = abs_baseline();
        input.horizon = Horizon { first: Year(2024), len: Horizon::MAX_YEARS + 1 };
        assert_config_error(input);
    }

    #[test]
    fn short_migration_schedule_rejected() {
        let mut input = staged_migration();
        input.growth = GrowthAssumption::MigrationSchedule(vec![435_000.0; 4]);
        assert_config_error(input);
    }

    #[test]
    fn long_migration_schedule_rejected() {
        let mut input = staged_migration();
        input.growth = GrowthAssumption::MigrationSchedule(vec![435_000.0; 6]);
        assert_config_error(input);
    }

    #[test]
    fn zero_people_per_household_rejected() {
        let mut input = abs_baseline();
        input.people_per_household = 0.0;
        assert_config_error(input);
    }

    #[test]
    fn negative_people_per_household_rejected() {
        let mut input = abs_baseline();
        input.people_per_household = -2.5;
        assert_config_error(input);
    }

    #[test]
    fn nan_people_per_household_rejected() {
        let mut input = abs_baseline();
        input.people_per_household = f64::NAN;
        assert_config_error(input);
    }

    #[test]
    fn non_positive_population_rejected() {
        let mut input = abs_baseline();
        input.initial_population_millions = 0.0;
        assert_config_error(input);
    }

    #[test]
    fn negative_supply_rejected() {
        let mut input = abs_baseline();
        input.annual_supply = -1.0;
        assert_config_error(input);
    }

    #[test]
    fn infinite_growth_rate_rejected() {
        let mut input = abs_baseline();
        input.growth = GrowthAssumption::FixedRate(f64::INFINITY);
        assert_config_error(input);
    }

    #[test]
    fn error_message_names_transition_count() {
        let mut input = staged_migration();
        input.growth = GrowthAssumption::MigrationSchedule(vec![1.0; 2]);
        let err = project(&input).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("2 entries"), "{msg}");
        assert!(msg.contains("5 year-transitions"), "{msg}");
    }
}

// ── Numeric domain ────────────────────────────────────────────────────────────

#[cfg(test)]
mod numeric_domain_tests {
    use super::*;
    use crate::{project, ProjectionError};

    #[test]
    fn zero_cumulative_demand_in_first_year() {
        let input = SimulationInput::builder(horizon_2024_2029())
            .initial_backlog(0)
            .growth(GrowthAssumption::MigrationSchedule(vec![0.0; 5]))
            .build();
        assert_eq!(
            project(&input),
            Err(ProjectionError::NumericDomain { year: Year(2025), index: 0 })
        );
    }

    #[test]
    fn zero_growth_rate_without_backlog() {
        let input = SimulationInput::builder(horizon_2024_2029())
            .initial_backlog(0)
            .growth(GrowthAssumption::FixedRate(0.0))
            .build();
        assert!(matches!(project(&input), Err(ProjectionError::NumericDomain { index: 0, .. })));
    }

    #[test]
    fn demand_cancelling_out_mid_horizon() {
        // +100 then -100 people: cumulative demand returns to exactly zero in 2026.
        let input = SimulationInput::builder(Horizon::new(Year(2024), Year(2026)).unwrap())
            .initial_backlog(0)
            .growth(GrowthAssumption::MigrationSchedule(vec![100.0, -100.0]))
            .build();
        assert_eq!(
            project(&input),
            Err(ProjectionError::NumericDomain { year: Year(2026), index: 1 })
        );
    }

    #[test]
    fn backlog_alone_keeps_pressure_defined() {
        let input = SimulationInput::builder(horizon_2024_2029())
            .initial_backlog(1)
            .growth(GrowthAssumption::FixedRate(0.0))
            .build();
        assert!(project(&input).is_ok());
    }
}

// ── Projection properties ─────────────────────────────────────────────────────

#[cfg(test)]
mod projection_tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::project;

    #[test]
    fn series_lengths() {
        for input in [abs_baseline(), staged_migration()] {
            let out = project(&input).unwrap();
            let n = input.horizon.len() - 1;
            assert_eq!(out.population_by_year.len(), n + 1);
            assert_eq!(out.demand_by_year.len(), n);
            assert_eq!(out.cumulative_demand.len(), n);
            assert_eq!(out.cumulative_supply.len(), n);
            assert_eq!(out.price_pressure_pct.len(), n);
            assert_eq!(out.net_surplus.len(), n);
            assert_eq!(out.transitions(), n);
        }
    }

    #[test]
    fn two_year_horizon_is_minimal() {
        let mut input = abs_baseline();
        input.horizon = Horizon::new(Year(2024), Year(2025)).unwrap();
        let out = project(&input).unwrap();
        assert_eq!(out.net_surplus.len(), 1);
    }

    #[test]
    fn net_surplus_is_exact_difference() {
        for input in [abs_baseline(), staged_migration()] {
            let out = project(&input).unwrap();
            for i in 0..out.transitions() {
                assert_eq!(out.net_surplus[i], out.cumulative_supply[i] - out.cumulative_demand[i]);
            }
        }
    }

    #[test]
    fn cumulative_supply_is_arithmetic() {
        let mut input = abs_baseline();
        input.annual_supply = 240_000.0 + 18_000.0 / 5.0;
        let out = project(&input).unwrap();
        assert_eq!(out.cumulative_supply[0], input.annual_supply);
        for w in out.cumulative_supply.windows(2) {
            assert_relative_eq!(w[1] - w[0], input.annual_supply, max_relative = 1e-12);
        }
    }

    #[test]
    fn cumulative_series_non_decreasing_under_growth() {
        let out = project(&abs_baseline()).unwrap();
        for w in out.cumulative_demand.windows(2) {
            assert!(w[1] >= w[0]);
        }
        for w in out.cumulative_supply.windows(2) {
            assert!(w[1] >= w[0]);
        }
    }

    #[test]
    fn fixed_rate_compounds() {
        let out = project(&abs_baseline()).unwrap();
        assert_eq!(out.population_by_year[0], 26.7);
        for w in out.population_by_year.windows(2) {
            assert_relative_eq!(w[1], w[0] * 1.013, max_relative = 1e-12);
        }
    }

    #[test]
    fn migration_adds_people() {
        let out = project(&staged_migration()).unwrap();
        for (i, w) in out.population_by_year.windows(2).enumerate() {
            assert_relative_eq!(w[1] * 1e6, w[0] * 1e6 + STAGED_MIGRATION[i], max_relative = 1e-12);
        }
    }

    #[test]
    fn abs_baseline_scenario() {
        let out = project(&abs_baseline()).unwrap();
        assert_abs_diff_eq!(out.population_by_year[1], 27.0471, epsilon = 1e-9);
        assert_abs_diff_eq!(out.demand_by_year[0], 138_840.0, epsilon = 1e-3);
        assert_abs_diff_eq!(out.cumulative_demand[0], 168_840.0, epsilon = 1e-3);
        assert_eq!(out.cumulative_supply[0], 240_000.0);
        assert_abs_diff_eq!(out.net_surplus[0], 71_160.0, epsilon = 1e-3);
        assert!(out.net_surplus[0] > 0.0, "oversupply expected");
        // Oversupply makes pressure negative: (168840 - 240000) / 168840 * 250.
        assert_abs_diff_eq!(out.price_pressure_pct[0], -105.366_027, epsilon = 1e-5);
    }

    #[test]
    fn abs_baseline_final_values() {
        let out = project(&abs_baseline()).unwrap();
        assert_abs_diff_eq!(out.final_net_surplus(), 457_514.631, epsilon = 1e-2);
        assert_abs_diff_eq!(out.total_demand(), 712_485.369, epsilon = 1e-2);
        assert_abs_diff_eq!(out.final_price_pressure(), -154.048_366, epsilon = 1e-5);
    }

    #[test]
    fn staged_migration_scenario() {
        let out = project(&staged_migration()).unwrap();
        assert_abs_diff_eq!(out.population_by_year[1], 27.135, epsilon = 1e-9);
        assert_abs_diff_eq!(out.population_by_year[5], 28.18, epsilon = 1e-9);
        assert_abs_diff_eq!(out.demand_by_year[0], 174_000.0, epsilon = 1e-3);
        assert_abs_diff_eq!(out.cumulative_demand[4], 622_000.0, epsilon = 1e-3);
        assert_abs_diff_eq!(out.final_net_surplus(), 578_000.0, epsilon = 1e-3);
    }

    #[test]
    fn shortfall_produces_positive_pressure() {
        let mut input = abs_baseline();
        input.growth = GrowthAssumption::FixedRate(0.017);
        input.annual_supply = 150_000.0;
        let out = project(&input).unwrap();
        assert!(out.final_net_surplus() < 0.0);
        assert!(out.final_price_pressure() > 0.0);
    }

    #[test]
    fn shrinking_population_yields_negative_demand() {
        let mut input = abs_baseline();
        input.growth = GrowthAssumption::FixedRate(-0.001);
        let out = project(&input).unwrap();
        assert!(out.demand_by_year.iter().all(|&d| d < 0.0));
    }

    #[test]
    fn deterministic() {
        let input = staged_migration();
        let a = project(&input).unwrap();
        let b = project(&input).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn records_are_labelled_by_destination_year() {
        let out = project(&abs_baseline()).unwrap();
        let records: Vec<_> = out.records().collect();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].year, Year(2025));
        assert_eq!(records[4].year, Year(2029));
        assert_eq!(records[0].population_millions, out.population_by_year[1]);
        assert_eq!(records[2].net_surplus, out.net_surplus[2]);
        assert_eq!(
            out.transition_years(),
            vec![Year(2025), Year(2026), Year(2027), Year(2028), Year(2029)]
        );
    }

    #[test]
    fn concurrent_callers_agree() {
        let input = abs_baseline();
        let expected = project(&input).unwrap();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| project(&input).unwrap())).collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }
}
