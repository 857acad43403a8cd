use crate::{
    core::{catalog::Catalog, count_vector::CountVector, project::ProjectIndex},
    quantity::{earnings::Earnings, time::TimeUnits},
};

/// Ordered selection of project types, built one project at a time during the search.
#[must_use]
#[derive(Clone, Debug, Default)]
pub struct Sequence(Vec<ProjectIndex>);

impl Sequence {
    pub fn push(&mut self, index: ProjectIndex) {
        self.0.push(index);
    }

    pub fn pop(&mut self) -> Option<ProjectIndex> {
        self.0.pop()
    }

    /// Total earnings of the sequence.
    ///
    /// Projects are built one after another. Each project earns its rate for every time unit
    /// left in the budget after it is finished, so the empty sequence earns nothing.
    ///
    /// [`None`] when the earnings overflow.
    #[must_use]
    pub fn score(&self, catalog: &Catalog, time_budget: TimeUnits) -> Option<Earnings> {
        let mut time_used = TimeUnits::ZERO;
        self.0.iter().try_fold(Earnings::ZERO, |earnings, index| {
            let project_type = catalog.get(*index);
            time_used += project_type.time_cost;
            earnings.checked_add(project_type.payoff(time_budget - time_used)?)
        })
    }

    pub fn tally(&self, catalog: &Catalog) -> CountVector {
        let mut counts = CountVector::zero(catalog.len());
        for index in &self.0 {
            counts.increment(*index);
        }
        counts
    }
}

impl From<Vec<ProjectIndex>> for Sequence {
    fn from(indices: Vec<ProjectIndex>) -> Self {
        Self(indices)
    }
}
