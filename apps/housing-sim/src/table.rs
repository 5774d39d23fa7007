//! Plain-text tables for the terminal.

use anyhow::Result;

use hs_budget::{BudgetOutlook, Economy, EconomySelection, SpendingSelection, TaxStream};
use hs_projection::{GrowthAssumption, SimulationOutput};
use hs_scenario::{PresetCatalog, format_thousands};

const LABEL_WIDTH: usize = 16;
const CELL_WIDTH:  usize = 9;

fn homes(n: f64) -> String {
    format_thousands(n as i64)
}

// ── Projection ────────────────────────────────────────────────────────────────

pub fn print_projection(output: &SimulationOutput) {
    println!(
        "{:>6} {:>10} {:>10} {:>12} {:>12} {:>10} {:>12}",
        "Year", "Pop (M)", "Demand", "Cum demand", "Cum supply", "Pressure", "Net surplus"
    );
    for r in output.records() {
        println!(
            "{:>6} {:>10.3} {:>10} {:>12} {:>12} {:>9.1}% {:>12}",
            r.year.0,
            r.population_millions,
            homes(r.demand),
            homes(r.cumulative_demand),
            homes(r.cumulative_supply),
            r.price_pressure_pct,
            homes(r.net_surplus),
        );
    }
}

// ── Presets ───────────────────────────────────────────────────────────────────

fn describe_growth(assumption: &GrowthAssumption) -> String {
    match assumption {
        GrowthAssumption::FixedRate(rate) => format!("{:.2}% per year", rate * 100.0),
        GrowthAssumption::MigrationSchedule(intake) => {
            let steps: Vec<_> = intake.iter().map(|&n| homes(n)).collect();
            format!("net migration {}", steps.join(" → "))
        }
    }
}

pub fn print_presets(catalog: &PresetCatalog) {
    println!("Growth presets:");
    for p in catalog.growth_presets() {
        println!("  {:<36} {}", p.name, describe_growth(&p.assumption));
    }
    println!();
    println!("Supply presets:");
    for p in catalog.supply_presets() {
        println!("  {:<36} {} homes/year", p.name, homes(p.annual_supply));
    }
}

// ── Budget ────────────────────────────────────────────────────────────────────

fn header(title: &str, outlook: &BudgetOutlook) {
    print!("{title:<LABEL_WIDTH$}");
    for year in outlook.horizon.years() {
        print!(" {:>CELL_WIDTH$}", year.0);
    }
    println!();
}

fn row(label: &str, values: &[f64], decimals: usize) {
    print!("{label:<LABEL_WIDTH$}");
    for v in values {
        print!(" {v:>CELL_WIDTH$.decimals$}");
    }
    println!();
}

pub fn print_budget(
    outlook:   &BudgetOutlook,
    spending:  &SpendingSelection,
    economies: &EconomySelection,
) -> Result<()> {
    header("Spending ($bn)", outlook);
    for category in spending.iter() {
        row(category.as_str(), outlook.spending(category), 2);
    }
    row("Total", &outlook.total_spending(spending), 2);
    println!();

    header("Surplus ($bn)", outlook);
    row("Annual", outlook.surplus(), 1);
    row("Cumulative", &outlook.cumulative_surplus(), 1);
    println!();

    header("Debt/GDP (%)", outlook);
    for (economy, series) in outlook.visible_debt_to_gdp(economies) {
        row(economy.as_str(), series, 1);
    }
    if economies.contains(Economy::Australia) && economies.contains(Economy::OecdAverage) {
        row("AU vs OECD gap", &outlook.debt_gap_pct(Economy::Australia, Economy::OecdAverage)?, 1);
    }
    println!();

    header("Tax ($bn)", outlook);
    for &stream in TaxStream::ALL {
        row(stream.as_str(), outlook.tax_revenue(stream), 1);
    }
    row("Total", &outlook.total_tax_revenue(), 1);
    println!();

    header("Tax share (%)", outlook);
    for &stream in TaxStream::ALL {
        row(stream.as_str(), &outlook.tax_share_pct(stream)?, 1);
    }
    Ok(())
}
