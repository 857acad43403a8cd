use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::{
    core::{catalog::Catalog, count_vector::CountVector},
    quantity::{earnings::Earnings, time::TimeUnits},
};

/// Outcome of an optimization: the best achievable earnings and every distinct allocation
/// that achieves them.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub time_budget: TimeUnits,
    pub max_earnings: Earnings,

    /// Never empty.
    pub solutions: BTreeSet<CountVector>,
}

impl SearchResult {
    /// Result for a budget that admits no project at all.
    pub fn trivial(time_budget: TimeUnits, catalog: &Catalog) -> Self {
        Self {
            time_budget,
            max_earnings: Earnings::ZERO,
            solutions: BTreeSet::from([CountVector::zero(catalog.len())]),
        }
    }

    /// Serializable view with the counts keyed by project type ID.
    pub fn report<'a>(&self, catalog: &'a Catalog) -> Report<'a> {
        Report {
            time_budget: self.time_budget,
            max_earnings: self.max_earnings,
            solutions: self.solutions.iter().map(|solution| solution.to_map(catalog)).collect(),
        }
    }
}

#[must_use]
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    pub time_budget: TimeUnits,
    pub max_earnings: Earnings,
    pub solutions: Vec<BTreeMap<&'a str, u32>>,
}
