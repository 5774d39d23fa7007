//! `hs-core` — foundational types for the housing-stress workspace.
//!
//! This crate is a dependency of every other `hs-*` crate.  It has no `hs-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`year`]    | `Year`, `Horizon`                                     |
//! | [`units`]   | millions ↔ people conversion                          |
//! | [`series`]  | `linspace`, `cumulative_sum`                          |
//! | [`error`]   | `HsError`, `HsResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod series;
pub mod units;
pub mod year;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{HsError, HsResult};
pub use series::{cumulative_sum, linspace};
pub use units::{MILLION, millions_to_people, people_to_millions};
pub use year::{Horizon, Year};
