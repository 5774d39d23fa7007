//! `hs-scenario` — everything between a user's choices and the projection
//! engine, and between the engine and a human-readable report.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`preset`]  | `GrowthPreset`, `SupplyPreset`, `PresetCatalog` (built-ins) |
//! | [`loader`]  | `load_growth_presets_csv`, `load_supply_presets_csv`, `*_reader` |
//! | [`config`]  | `ScenarioConfig` (JSON), `GrowthChoice`, `SupplyChoice`, `Scenario` |
//! | [`matrix`]  | `ScenarioRun`, `ScenarioObserver`, `run_scenario`, `run_matrix` |
//! | [`summary`] | `Summary`, `Balance`, `format_thousands`                    |
//! | [`error`]   | `ScenarioError`, `ScenarioResult<T>`                        |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the scenario matrix on Rayon's thread pool.       |

pub mod config;
pub mod error;
pub mod loader;
pub mod matrix;
pub mod preset;
pub mod summary;


pub use config::{GrowthChoice, Scenario, ScenarioConfig, SupplyChoice};
pub use error::{ScenarioError, ScenarioResult};
pub use loader::{
    load_growth_presets_csv, load_growth_presets_reader, load_supply_presets_csv,
    load_supply_presets_reader,
};
pub use matrix::{MatrixStats, NoopObserver, ScenarioObserver, ScenarioRun, run_matrix, run_scenario};
pub use preset::{GrowthPreset, PresetCatalog, SupplyPreset};
pub use summary::{Balance, Summary, format_thousands};
