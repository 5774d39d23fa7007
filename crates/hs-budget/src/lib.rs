//! `hs-budget` — derived series behind the budget explorer.
//!
//! Every series is a straight line between two endpoint values across the
//! horizon ([`hs_core::linspace`]).  The explorer's toggles select which
//! spending categories are stacked and which economies are compared;
//! everything else is arithmetic over the resulting per-year vectors.
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`category`] | `SpendingCategory`, `Economy`, `TaxStream`, `SeriesId`    |
//! | [`outlook`]  | `Trend`, `BudgetAssumptions`, `BudgetOutlook`, `Selection` |
//! | [`error`]    | `BudgetError`, `BudgetResult<T>`                          |

pub mod category;
pub mod error;
pub mod outlook;


pub use category::{Economy, SeriesId, SpendingCategory, TaxStream};
pub use error::{BudgetError, BudgetResult};
pub use outlook::{
    BudgetAssumptions, BudgetOutlook, EconomySelection, Selection, SpendingSelection, Trend,
};
