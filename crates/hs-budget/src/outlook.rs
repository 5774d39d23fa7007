//! The budget outlook: endpoint assumptions in, per-year series out.

use std::marker::PhantomData;

use hs_core::{Horizon, Year, cumulative_sum, linspace};

use crate::category::SeriesId;
use crate::{BudgetError, BudgetResult, Economy, SpendingCategory, TaxStream};

// ── Trend ─────────────────────────────────────────────────────────────────────

/// A straight-line path from `start` (first horizon year) to `end` (last).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trend {
    pub start: f64,
    pub end:   f64,
}

impl Trend {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    fn sample(self, years: usize) -> Vec<f64> {
        linspace(self.start, self.end, years)
    }
}

// ── BudgetAssumptions ─────────────────────────────────────────────────────────

/// Endpoint values for every series, indexed by each enum's `index()`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BudgetAssumptions {
    pub spending:    [Trend; 5],
    pub surplus:     Trend,
    pub debt_to_gdp: [Trend; 4],
    pub tax:         [Trend; 4],
}

impl BudgetAssumptions {
    /// The explorer's illustrative 2023–2030 outlook.
    pub const BASELINE: BudgetAssumptions = BudgetAssumptions {
        spending: [
            Trend::new(3.0, 6.5), // health
            Trend::new(2.0, 5.0), // housing
            Trend::new(2.0, 3.5), // education
            Trend::new(1.0, 4.2), // green energy
            Trend::new(1.5, 3.2), // military
        ],
        surplus: Trend::new(600.0, 780.0),
        debt_to_gdp: [
            Trend::new(36.8, 35.2),   // Australia
            Trend::new(120.0, 130.0), // OECD
            Trend::new(98.0, 96.0),   // USA
            Trend::new(68.0, 61.0),   // Germany
        ],
        tax: [
            Trend::new(350.0, 460.0), // income
            Trend::new(150.0, 180.0), // corporate
            Trend::new(100.0, 120.0), // GST
            Trend::new(80.0, 110.0),  // capital gains
        ],
    };

    pub fn set_spending(&mut self, category: SpendingCategory, trend: Trend) {
        self.spending[category.index()] = trend;
    }
}

impl Default for BudgetAssumptions {
    fn default() -> Self {
        Self::BASELINE
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

/// Which series of one kind are shown.  `Default` shows all of them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Selection<T> {
    mask:    u32,
    _series: PhantomData<T>,
}

/// Spending categories shown in the stacked chart.
pub type SpendingSelection = Selection<SpendingCategory>;

/// Economies shown in the debt-to-GDP comparison.
pub type EconomySelection = Selection<Economy>;

impl<T: SeriesId> Selection<T> {
    pub fn all() -> Self {
        Self { mask: (1u32 << T::ALL.len()) - 1, _series: PhantomData }
    }

    pub fn none() -> Self {
        Self { mask: 0, _series: PhantomData }
    }

    pub fn with(mut self, series: T) -> Self {
        self.mask |= 1 << series.index();
        self
    }

    pub fn without(mut self, series: T) -> Self {
        self.mask &= !(1 << series.index());
        self
    }

    pub fn contains(&self, series: T) -> bool {
        self.mask & (1 << series.index()) != 0
    }

    /// Enabled series in display order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        T::ALL.iter().copied().filter(|s| self.contains(*s))
    }
}

impl<T: SeriesId> Default for Selection<T> {
    fn default() -> Self {
        Self::all()
    }
}

// ── BudgetOutlook ─────────────────────────────────────────────────────────────

/// Every budget series sampled once per horizon year.
#[derive(Clone, Debug, PartialEq)]
pub struct BudgetOutlook {
    pub horizon: Horizon,
    spending:    Vec<Vec<f64>>,
    surplus:     Vec<f64>,
    debt_to_gdp: Vec<Vec<f64>>,
    tax:         Vec<Vec<f64>>,
}

impl BudgetOutlook {
    /// Default explorer horizon.
    pub fn default_horizon() -> Horizon {
        Horizon { first: Year(2023), len: 8 }
    }

    /// The baseline outlook over 2023–2030.
    pub fn baseline() -> Self {
        // The default horizon has 8 years, so this cannot fail.
        Self::build(Self::default_horizon(), &BudgetAssumptions::BASELINE)
    }

    /// Sample `assumptions` over `horizon`.  A horizon needs two years to
    /// describe a trend.
    pub fn new(horizon: Horizon, assumptions: &BudgetAssumptions) -> BudgetResult<Self> {
        if horizon.len() < 2 {
            return Err(BudgetError::Config(format!(
                "budget horizon must contain at least 2 years, got {}",
                horizon.len()
            )));
        }
        Ok(Self::build(horizon, assumptions))
    }

    fn build(horizon: Horizon, a: &BudgetAssumptions) -> Self {
        let n = horizon.len();
        Self {
            horizon,
            spending:    a.spending.iter().map(|t| t.sample(n)).collect(),
            surplus:     a.surplus.sample(n),
            debt_to_gdp: a.debt_to_gdp.iter().map(|t| t.sample(n)).collect(),
            tax:         a.tax.iter().map(|t| t.sample(n)).collect(),
        }
    }

    pub fn years(&self) -> Vec<Year> {
        self.horizon.years().collect()
    }

    // ── Spending ──────────────────────────────────────────────────────────

    pub fn spending(&self, category: SpendingCategory) -> &[f64] {
        &self.spending[category.index()]
    }

    /// Stack tops for a stacked-area view: layer `k` is the sum of the first
    /// `k + 1` selected categories.
    pub fn stacked_spending(&self, selection: &SpendingSelection) -> Vec<(SpendingCategory, Vec<f64>)> {
        let mut running = vec![0.0; self.horizon.len()];
        selection
            .iter()
            .map(|category| {
                for (acc, v) in running.iter_mut().zip(self.spending(category)) {
                    *acc += v;
                }
                (category, running.clone())
            })
            .collect()
    }

    /// Per-year total of the selected categories (zeros if none selected).
    pub fn total_spending(&self, selection: &SpendingSelection) -> Vec<f64> {
        self.stacked_spending(selection)
            .pop()
            .map(|(_, top)| top)
            .unwrap_or_else(|| vec![0.0; self.horizon.len()])
    }

    // ── Surplus ───────────────────────────────────────────────────────────

    pub fn surplus(&self) -> &[f64] {
        &self.surplus
    }

    pub fn cumulative_surplus(&self) -> Vec<f64> {
        cumulative_sum(&self.surplus)
    }

    // ── Debt ──────────────────────────────────────────────────────────────

    pub fn debt_to_gdp(&self, economy: Economy) -> &[f64] {
        &self.debt_to_gdp[economy.index()]
    }

    /// Debt-to-GDP series of the selected economies, in display order.
    pub fn visible_debt_to_gdp(&self, selection: &EconomySelection) -> Vec<(Economy, &[f64])> {
        selection.iter().map(|e| (e, self.debt_to_gdp(e))).collect()
    }

    /// Relative gap `(a - b) / b * 100` per year.
    pub fn debt_gap_pct(&self, a: Economy, b: Economy) -> BudgetResult<Vec<f64>> {
        self.debt_to_gdp(a)
            .iter()
            .zip(self.debt_to_gdp(b))
            .zip(self.horizon.years())
            .map(|((&x, &base), year)| {
                if base == 0.0 {
                    Err(BudgetError::NumericDomain { year })
                } else {
                    Ok((x - base) / base * 100.0)
                }
            })
            .collect()
    }

    // ── Tax ───────────────────────────────────────────────────────────────

    pub fn tax_revenue(&self, stream: TaxStream) -> &[f64] {
        &self.tax[stream.index()]
    }

    pub fn total_tax_revenue(&self) -> Vec<f64> {
        let mut total = vec![0.0; self.horizon.len()];
        for series in &self.tax {
            for (acc, v) in total.iter_mut().zip(series) {
                *acc += v;
            }
        }
        total
    }

    /// Share of total revenue contributed by `stream`, per year, in percent.
    pub fn tax_share_pct(&self, stream: TaxStream) -> BudgetResult<Vec<f64>> {
        self.tax_revenue(stream)
            .iter()
            .zip(self.total_tax_revenue())
            .zip(self.horizon.years())
            .map(|((&x, total), year)| {
                if total == 0.0 {
                    Err(BudgetError::NumericDomain { year })
                } else {
                    Ok(x / total * 100.0)
                }
            })
            .collect()
    }
}
