use std::time::Instant;

use bon::Builder;

use crate::{
    core::{
        best::Best,
        cancellation::Interrupt,
        catalog::Catalog,
        search_error::SearchError,
        search_result::SearchResult,
        sequence::Sequence,
    },
    prelude::*,
    quantity::time::TimeUnits,
};

/// Reference brute-force search.
///
/// Enumerates every feasible sequence depth-first and scores each node, not only the leaves:
/// stopping early is a valid plan at any depth. The running time is exponential in the budget.
#[derive(Builder)]
pub struct ExhaustiveSearch<'a, I> {
    catalog: &'a Catalog,
    time_budget: TimeUnits,
    interrupt: &'a I,
}

impl<I: Interrupt> ExhaustiveSearch<'_, I> {
    #[instrument(skip_all, fields(time_budget = %self.time_budget))]
    pub fn run(&self) -> Result<SearchResult, SearchError> {
        if self.time_budget < TimeUnits::ZERO {
            debug!("negative budget, nothing to search");
            return Ok(SearchResult::trivial(self.time_budget, self.catalog));
        }
        let start_instant = Instant::now();
        let best = self.explore(self.time_budget, &mut Sequence::default(), Best::default())?;
        info!(
            elapsed = ?start_instant.elapsed(),
            max_earnings = %best.max_earnings(),
            n_solutions = best.solutions().len(),
            "searched",
        );
        Ok(best.into_result(self.time_budget, self.catalog))
    }

    /// Evaluate the current node, then descend into every project that still fits.
    pub fn explore(
        &self,
        remaining_time: TimeUnits,
        sequence: &mut Sequence,
        mut best: Best,
    ) -> Result<Best, SearchError> {
        self.interrupt.check()?;

        let earnings =
            sequence.score(self.catalog, self.time_budget).ok_or(SearchError::EarningsOverflow)?;
        best.offer(earnings, || sequence.tally(self.catalog));

        for (index, project_type) in self.catalog.affordable(remaining_time) {
            sequence.push(index);
            best = self.explore(remaining_time - project_type.time_cost, sequence, best)?;
            sequence.pop();
        }
        Ok(best)
    }
}
