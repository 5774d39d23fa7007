//! housing-sim — command-line front end for the housing-stress projection.
//!
//! ```text
//! housing-sim project --growth "Treasury (1.4%)" --supply "Severe Shortfall (150k/year)"
//! housing-sim project --config scenario.json --output ./out --format csv
//! housing-sim matrix --end-year 2034
//! housing-sim presets --growth-presets my_growth.csv
//! housing-sim budget --hide military --hide "green energy" --hide germany
//! ```
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` to see every
//! projection step.

mod table;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};

use hs_budget::{
    BudgetAssumptions, BudgetOutlook, Economy, EconomySelection, SpendingCategory, SpendingSelection,
};
use hs_core::{Horizon, Year};
use hs_output::{CsvWriter, OutputWriter, ProjectionRecorder};
use hs_projection::{GrowthAssumption, ProjectionError};
use hs_scenario::{
    GrowthChoice, MatrixStats, PresetCatalog, Scenario, ScenarioConfig, ScenarioObserver, ScenarioRun,
    Summary, SupplyChoice, load_growth_presets_csv, load_supply_presets_csv,
    run_matrix, run_scenario,
};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about = "Australian housing-stress projection")]
struct Cli {
    /// Replace the built-in growth presets with a `name,kind,value` CSV.
    #[arg(long, global = true, value_name = "CSV")]
    growth_presets: Option<PathBuf>,

    /// Replace the built-in supply presets with a `name,annual_supply` CSV.
    #[arg(long, global = true, value_name = "CSV")]
    supply_presets: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project one scenario and print the year table and summary
    Project(ProjectArgs),
    /// Project every growth × supply preset combination
    Matrix(MatrixArgs),
    /// List the growth and supply presets
    Presets,
    /// Print the budget explorer tables
    Budget(BudgetArgs),
}

/// Scalar settings shared by `project` and `matrix`.  Flags override the
/// values loaded from `--config`.
#[derive(Args, Debug)]
struct ScenarioArgs {
    /// Scenario JSON; missing fields take their defaults.
    #[arg(long, value_name = "JSON")]
    config: Option<PathBuf>,

    #[arg(long)]
    start_year: Option<i32>,

    #[arg(long)]
    end_year: Option<i32>,

    /// Population in the first year, in millions.
    #[arg(long, value_name = "MILLIONS")]
    population: Option<f64>,

    #[arg(long)]
    people_per_household: Option<f64>,

    /// Unmet demand (homes) carried into the first year.
    #[arg(long)]
    backlog: Option<u64>,

    /// Percent price change per percent of shortfall.
    #[arg(long)]
    elasticity: Option<f64>,
}

impl ScenarioArgs {
    fn load(&self) -> Result<ScenarioConfig> {
        let mut config = match &self.config {
            Some(path) => ScenarioConfig::load_json(path)
                .with_context(|| format!("loading scenario config {}", path.display()))?,
            None => ScenarioConfig::default(),
        };
        if let Some(v) = self.start_year           { config.start_year = v; }
        if let Some(v) = self.end_year             { config.end_year = v; }
        if let Some(v) = self.population           { config.initial_population_millions = v; }
        if let Some(v) = self.people_per_household { config.people_per_household = v; }
        if let Some(v) = self.backlog              { config.initial_backlog = v; }
        if let Some(v) = self.elasticity           { config.price_elasticity_factor = v; }
        Ok(config)
    }
}

#[derive(Args, Debug)]
struct ProjectArgs {
    #[command(flatten)]
    scenario: ScenarioArgs,

    /// Growth preset name.
    #[arg(long, conflicts_with = "growth_rate")]
    growth: Option<String>,

    /// Custom fixed annual growth rate, e.g. 0.015.
    #[arg(long)]
    growth_rate: Option<f64>,

    /// Supply preset name.
    #[arg(long, conflicts_with = "homes_per_year")]
    supply: Option<String>,

    /// Custom annual completions.
    #[arg(long)]
    homes_per_year: Option<f64>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct MatrixArgs {
    #[command(flatten)]
    scenario: ScenarioArgs,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct BudgetArgs {
    /// Hide a spending category or a debt-to-GDP economy (repeatable).
    #[arg(long, value_name = "SERIES")]
    hide: Vec<String>,

    #[arg(long, default_value_t = 2023)]
    start_year: i32,

    #[arg(long, default_value_t = 2030)]
    end_year: i32,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Directory for projection tables; nothing is written without it.
    #[arg(long, value_name = "DIR")]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Sqlite,
    Parquet,
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.growth_presets.as_deref(), cli.supply_presets.as_deref())?;

    match cli.cmd {
        Command::Project(args) => cmd_project(&catalog, args),
        Command::Matrix(args) => cmd_matrix(&catalog, args),
        Command::Presets => {
            table::print_presets(&catalog);
            Ok(())
        }
        Command::Budget(args) => cmd_budget(args),
    }
}

fn load_catalog(growth: Option<&Path>, supply: Option<&Path>) -> Result<PresetCatalog> {
    let mut catalog = PresetCatalog::builtin();
    if let Some(path) = growth {
        let presets = load_growth_presets_csv(path)
            .with_context(|| format!("loading growth presets {}", path.display()))?;
        log::info!("loaded {} growth presets from {}", presets.len(), path.display());
        catalog = catalog.with_growth_presets(presets)?;
    }
    if let Some(path) = supply {
        let presets = load_supply_presets_csv(path)
            .with_context(|| format!("loading supply presets {}", path.display()))?;
        log::info!("loaded {} supply presets from {}", presets.len(), path.display());
        catalog = catalog.with_supply_presets(presets)?;
    }
    Ok(catalog)
}

// ── project ───────────────────────────────────────────────────────────────────

fn project_config(args: &ProjectArgs) -> Result<ScenarioConfig> {
    let mut config = args.scenario.load()?;
    if let Some(name) = &args.growth {
        config.growth = GrowthChoice::Preset(name.clone());
    }
    if let Some(rate) = args.growth_rate {
        config.growth = GrowthChoice::Custom(GrowthAssumption::FixedRate(rate));
    }
    if let Some(name) = &args.supply {
        config.supply = SupplyChoice::Preset(name.clone());
    }
    if let Some(homes_per_year) = args.homes_per_year {
        config.supply = SupplyChoice::Custom { homes_per_year };
    }
    Ok(config)
}

fn cmd_project(catalog: &PresetCatalog, args: ProjectArgs) -> Result<()> {
    let config = project_config(&args)?;
    let run = run_scenario(config.resolve(catalog)?)?;

    table::print_projection(&run.output);
    println!();
    println!("{}", Summary::from_run(&run));

    if let Some(writer) = open_writer(&args.output)? {
        let mut recorder = ProjectionRecorder::new(writer);
        recorder.on_run(&run);
        recorder.finish();
        if let Some(e) = recorder.take_error() {
            return Err(e).context("writing projection output");
        }
    }
    Ok(())
}

// ── matrix ────────────────────────────────────────────────────────────────────

/// Prints one line per scenario and forwards runs to an optional recorder.
struct MatrixPrinter {
    recorder: Option<ProjectionRecorder<Box<dyn OutputWriter>>>,
}

impl ScenarioObserver for MatrixPrinter {
    fn on_run(&mut self, run: &ScenarioRun) {
        println!("{}", Summary::from_run(run).one_line());
        if let Some(rec) = &mut self.recorder {
            rec.on_run(run);
        }
    }

    fn on_failure(&mut self, scenario: &Scenario, error: &ProjectionError) {
        println!("{}: failed ({error})", scenario.label());
    }

    fn on_matrix_end(&mut self, stats: &MatrixStats) {
        if let Some(rec) = &mut self.recorder {
            rec.on_matrix_end(stats);
        }
    }
}

fn cmd_matrix(catalog: &PresetCatalog, args: MatrixArgs) -> Result<()> {
    let base = args.scenario.load()?;
    let recorder = open_writer(&args.output)?.map(ProjectionRecorder::new);
    let mut printer = MatrixPrinter { recorder };

    let stats = run_matrix(&base, catalog, &mut printer)?;
    println!();
    println!("{} scenarios projected, {} failed", stats.succeeded, stats.failed);

    if let Some(e) = printer.recorder.as_mut().and_then(ProjectionRecorder::take_error) {
        return Err(e).context("writing matrix output");
    }
    Ok(())
}

// ── budget ────────────────────────────────────────────────────────────────────

/// Apply `--hide` names to the spending and economy toggles.
fn budget_selections(hide: &[String]) -> Result<(SpendingSelection, EconomySelection)> {
    let mut spending = SpendingSelection::all();
    let mut economies = EconomySelection::all();
    for name in hide {
        if let Some(category) = SpendingCategory::parse(name) {
            spending = spending.without(category);
        } else if let Some(economy) = Economy::parse(name) {
            economies = economies.without(economy);
        } else {
            let known: Vec<_> = SpendingCategory::ALL
                .iter()
                .map(|c| c.as_str())
                .chain(Economy::ALL.iter().map(|e| e.as_str()))
                .collect();
            bail!("unknown series {name:?} (expected one of: {})", known.join(", "));
        }
    }
    Ok((spending, economies))
}

fn cmd_budget(args: BudgetArgs) -> Result<()> {
    let (spending, economies) = budget_selections(&args.hide)?;
    let horizon = Horizon::new(Year(args.start_year), Year(args.end_year))?;
    let outlook = BudgetOutlook::new(horizon, &BudgetAssumptions::BASELINE)?;
    table::print_budget(&outlook, &spending, &economies)
}

// ── Output ────────────────────────────────────────────────────────────────────

fn open_writer(args: &OutputArgs) -> Result<Option<Box<dyn OutputWriter>>> {
    let Some(dir) = &args.output else {
        return Ok(None);
    };
    std::fs::create_dir_all(dir).with_context(|| format!("creating output dir {}", dir.display()))?;

    let writer: Box<dyn OutputWriter> = match args.format {
        Format::Csv => Box::new(CsvWriter::new(dir)?),
        #[cfg(feature = "sqlite")]
        Format::Sqlite => Box::new(hs_output::SqliteWriter::new(dir)?),
        #[cfg(not(feature = "sqlite"))]
        Format::Sqlite => bail!("SQLite output needs the `sqlite` feature"),
        #[cfg(feature = "parquet")]
        Format::Parquet => Box::new(hs_output::ParquetWriter::new(dir)?),
        #[cfg(not(feature = "parquet"))]
        Format::Parquet => bail!("Parquet output needs the `parquet` feature"),
    };
    log::info!("writing {:?} output to {}", args.format, dir.display());
    Ok(Some(writer))
}
