use std::time::Instant;

use bon::Builder;

use crate::{
    core::{
        best::Best,
        cancellation::Interrupt,
        catalog::Catalog,
        count_vector::CountVector,
        search_error::SearchError,
        search_result::SearchResult,
    },
    prelude::*,
    quantity::{earnings::Earnings, time::TimeUnits},
};

/// Dynamic-programming solver over the remaining time.
///
/// A project that is started with `r` time units left finishes with `r - cost` left and earns
/// `rate × (r - cost)`, regardless of what was built before it. So the best continuation depends
/// only on the remaining time, and the table is filled bottom-up:
///
/// ```text
/// best(r) = max(0, max over affordable p of rate(p) × (r - cost(p)) + best(r - cost(p)))
/// ```
///
/// Each state keeps every distinct count vector that reaches its maximum, which yields exactly
/// the same solutions as [`crate::core::exhaustive::ExhaustiveSearch`], in `O(budget × catalog)`
/// steps instead of exponentially many.
#[derive(Builder)]
pub struct DynamicSearch<'a, I> {
    catalog: &'a Catalog,
    time_budget: TimeUnits,
    interrupt: &'a I,
}

impl<I: Interrupt> DynamicSearch<'_, I> {
    #[instrument(skip_all, fields(time_budget = %self.time_budget))]
    pub fn run(&self) -> Result<SearchResult, SearchError> {
        if self.time_budget < TimeUnits::ZERO {
            debug!("negative budget, nothing to search");
            return Ok(SearchResult::trivial(self.time_budget, self.catalog));
        }
        let start_instant = Instant::now();
        let mut table = StateTable::with_time_budget(self.time_budget)?;

        for remaining_time in (0..=self.time_budget.0).map(TimeUnits) {
            self.interrupt.check()?;
            let best = self.optimize_state(remaining_time, &table)?;
            trace!(%remaining_time, max_earnings = %best.max_earnings(), "solved");
            table.push(best);
        }

        let best = table.into_last();
        info!(
            elapsed = ?start_instant.elapsed(),
            max_earnings = %best.max_earnings(),
            n_solutions = best.solutions().len(),
            "optimized",
        );
        Ok(best.into_result(self.time_budget, self.catalog))
    }

    /// Best continuation with the given time left, assuming all the smaller states are solved.
    fn optimize_state(
        &self,
        remaining_time: TimeUnits,
        table: &StateTable,
    ) -> Result<Best, SearchError> {
        let mut best = Best::default();

        // Stopping here is always an option:
        best.offer(Earnings::ZERO, || CountVector::zero(self.catalog.len()));

        for (index, project_type) in self.catalog.affordable(remaining_time) {
            let time_after = remaining_time - project_type.time_cost;
            let next = table.get(time_after)?;
            let earnings = project_type
                .payoff(time_after)
                .and_then(|payoff| payoff.checked_add(next.max_earnings()))
                .ok_or(SearchError::EarningsOverflow)?;
            best.offer_all(
                earnings,
                next.solutions().iter().map(|solution| solution.incremented(index)),
            );
        }
        Ok(best)
    }
}

/// The table holds one state per time unit, so the budget is capped to keep it in memory.
pub const MAX_TIME_BUDGET: TimeUnits = TimeUnits(1_000_000);

/// Solved states indexed by the remaining time.
struct StateTable(Vec<Best>);

impl StateTable {
    fn with_time_budget(time_budget: TimeUnits) -> Result<Self, SearchError> {
        if time_budget > MAX_TIME_BUDGET {
            return Err(SearchError::BudgetTooLarge { time_budget, max_time_budget: MAX_TIME_BUDGET });
        }
        Ok(Self(Vec::with_capacity(Self::index(time_budget)? + 1)))
    }

    fn push(&mut self, best: Best) {
        self.0.push(best);
    }

    fn get(&self, remaining_time: TimeUnits) -> Result<&Best, SearchError> {
        Ok(&self.0[Self::index(remaining_time)?])
    }

    fn into_last(mut self) -> Best {
        self.0.pop().unwrap_or_default()
    }

    fn index(remaining_time: TimeUnits) -> Result<usize, SearchError> {
        usize::try_from(remaining_time.0).map_err(|_| SearchError::BudgetTooLarge {
            time_budget: remaining_time,
            max_time_budget: MAX_TIME_BUDGET,
        })
    }
}
