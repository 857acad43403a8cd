use std::time::Instant;

use bon::Builder;
use itertools::Itertools;
use rayon::prelude::*;

use crate::{
    core::{
        best::Best,
        cancellation::Interrupt,
        catalog::Catalog,
        count_vector::CountVector,
        exhaustive::ExhaustiveSearch,
        search_error::SearchError,
        search_result::SearchResult,
        sequence::Sequence,
    },
    prelude::*,
    quantity::{earnings::Earnings, time::TimeUnits},
};

/// Exhaustive search with the root's branches explored on the Rayon thread pool.
///
/// Every branch collects its own [`Best`], and the branches are merged by the same rule
/// that the sequential search applies node by node.
#[derive(Builder)]
pub struct ParallelSearch<'a, I> {
    catalog: &'a Catalog,
    time_budget: TimeUnits,
    interrupt: &'a I,
}

impl<I: Interrupt> ParallelSearch<'_, I> {
    #[instrument(skip_all, fields(time_budget = %self.time_budget))]
    pub fn run(&self) -> Result<SearchResult, SearchError> {
        if self.time_budget < TimeUnits::ZERO {
            debug!("negative budget, nothing to search");
            return Ok(SearchResult::trivial(self.time_budget, self.catalog));
        }
        let start_instant = Instant::now();
        let search = ExhaustiveSearch::builder()
            .catalog(self.catalog)
            .time_budget(self.time_budget)
            .interrupt(self.interrupt)
            .build();

        // The root itself is the empty plan:
        let mut root = Best::default();
        root.offer(Earnings::ZERO, || CountVector::zero(self.catalog.len()));

        let branches = self.catalog.affordable(self.time_budget).collect_vec();
        debug!(n_branches = branches.len(), "forking");
        let best = branches
            .into_par_iter()
            .map(|(index, project_type)| {
                search.explore(
                    self.time_budget - project_type.time_cost,
                    &mut Sequence::from(vec![index]),
                    Best::default(),
                )
            })
            .try_reduce(Best::default, |lhs, rhs| Ok(lhs.merge(rhs)))?
            .merge(root);

        info!(
            elapsed = ?start_instant.elapsed(),
            max_earnings = %best.max_earnings(),
            n_solutions = best.solutions().len(),
            "searched",
        );
        Ok(best.into_result(self.time_budget, self.catalog))
    }
}
