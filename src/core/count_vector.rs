use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
};

use serde::Serialize;

use crate::{
    core::{catalog::Catalog, project::ProjectIndex},
    quantity::time::TimeUnits,
};

/// Order-independent tally of a sequence: how many projects of each type it contains.
///
/// Counts are stored in catalog order, so that the vector itself is the canonical key of a solution.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CountVector(Vec<u32>);

impl CountVector {
    /// Empty allocation for a catalog of `n_project_types` entries.
    pub fn zero(n_project_types: usize) -> Self {
        Self(vec![0; n_project_types])
    }

    /// Copy of the vector with one more project of the given type.
    pub fn incremented(&self, index: ProjectIndex) -> Self {
        let mut counts = self.clone();
        counts.increment(index);
        counts
    }

    pub fn increment(&mut self, index: ProjectIndex) {
        self.0[index] += 1;
    }

    #[must_use]
    pub fn get(&self, index: ProjectIndex) -> u32 {
        self.0[index]
    }

    /// Total time needed to build all the counted projects, regardless of their order.
    pub fn time_cost(&self, catalog: &Catalog) -> TimeUnits {
        catalog
            .iter()
            .map(|(index, project_type)| {
                TimeUnits(project_type.time_cost.0 * i64::from(self.get(index)))
            })
            .sum()
    }

    /// Counts keyed by project type ID.
    #[must_use]
    pub fn to_map<'a>(&self, catalog: &'a Catalog) -> BTreeMap<&'a str, u32> {
        catalog
            .iter()
            .map(|(index, project_type)| (project_type.id.as_str(), self.get(index)))
            .collect()
    }

    pub const fn display<'a>(&'a self, catalog: &'a Catalog) -> CountVectorDisplay<'a> {
        CountVectorDisplay { counts: self, catalog }
    }
}

impl From<Vec<u32>> for CountVector {
    fn from(counts: Vec<u32>) -> Self {
        Self(counts)
    }
}

pub struct CountVectorDisplay<'a> {
    counts: &'a CountVector,
    catalog: &'a Catalog,
}

impl Display for CountVectorDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, project_type) in self.catalog.iter() {
            if index != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", project_type.id, self.counts.get(index))?;
        }
        Ok(())
    }
}
