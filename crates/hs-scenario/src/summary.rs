//! Human-readable summary of a projection.
//!
//! Whole-home figures are truncated toward zero before display, so a surplus
//! of `71_160.9` reads as `71,160 homes`.  Whether a run is an oversupply or
//! a shortfall is decided by the sign of the untruncated surplus.

use std::fmt;

use hs_core::Horizon;
use hs_projection::SimulationOutput;

use crate::ScenarioRun;

/// Sign of the final net surplus.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Balance {
    Oversupply(u64),
    Shortfall(u64),
    Balanced,
}

impl Balance {
    pub fn from_surplus(surplus: f64) -> Self {
        let homes = surplus.trunc().abs() as u64;
        if surplus > 0.0 {
            Balance::Oversupply(homes)
        } else if surplus < 0.0 {
            Balance::Shortfall(homes)
        } else {
            Balance::Balanced
        }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Balance::Oversupply(n) => write!(f, "Projected oversupply of {} homes.", format_thousands(*n as i64)),
            Balance::Shortfall(n) => write!(f, "Projected shortfall of {} homes.", format_thousands(*n as i64)),
            Balance::Balanced => f.write_str("Demand and supply are perfectly balanced."),
        }
    }
}

/// Scalar facts derived from one projection run.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub label:                    String,
    pub horizon:                  Horizon,
    pub final_net_surplus:        f64,
    /// New demand inside the horizon, backlog excluded.
    pub total_demand:             f64,
    pub final_price_pressure_pct: f64,
    pub balance:                  Balance,
    pub staged_migration:         bool,
}

impl Summary {
    pub fn from_output(label: impl Into<String>, output: &SimulationOutput, staged_migration: bool) -> Self {
        let final_net_surplus = output.final_net_surplus();
        Self {
            label: label.into(),
            horizon: output.horizon,
            final_net_surplus,
            total_demand: output.total_demand(),
            final_price_pressure_pct: output.final_price_pressure(),
            balance: Balance::from_surplus(final_net_surplus),
            staged_migration,
        }
    }

    pub fn from_run(run: &ScenarioRun) -> Self {
        Self::from_output(
            run.scenario.label(),
            &run.output,
            run.scenario.input.growth.is_migration_schedule(),
        )
    }

    /// Compact single-line form used by the scenario matrix listing.
    pub fn one_line(&self) -> String {
        format!(
            "{}: surplus {} homes, pressure {:.1}%",
            self.label,
            format_thousands(self.final_net_surplus as i64),
            self.final_price_pressure_pct
        )
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = self.horizon.last().unwrap_or(self.horizon.first);
        writeln!(f, "Housing Simulation: {}", self.label)?;
        writeln!(
            f,
            "Final Net Housing Surplus: {} homes",
            format_thousands(self.final_net_surplus as i64)
        )?;
        writeln!(
            f,
            "Total Demand ({}): {} homes",
            self.horizon,
            format_thousands(self.total_demand as i64)
        )?;
        writeln!(f, "Estimated Rent Pressure in {}: {:.1}%", last, self.final_price_pressure_pct)?;
        write!(f, "{}", self.balance)?;
        if self.staged_migration {
            write!(f, "\nThis projection uses a staged migration intake schedule.")?;
        }
        Ok(())
    }
}

/// Format an integer with `,` thousands separators: `-1234567` → `-1,234,567`.
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
