use std::{cmp::Ordering, collections::BTreeSet, iter};

use crate::{
    core::{catalog::Catalog, count_vector::CountVector, search_result::SearchResult},
    quantity::{earnings::Earnings, time::TimeUnits},
};

/// Best-so-far accumulator of a search.
///
/// Candidates are offered together with their earnings: strictly better candidates replace
/// everything collected so far, equally good ones are added unless already present.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Best {
    max_earnings: Earnings,
    solutions: BTreeSet<CountVector>,
}

impl Best {
    pub const fn max_earnings(&self) -> Earnings {
        self.max_earnings
    }

    pub const fn solutions(&self) -> &BTreeSet<CountVector> {
        &self.solutions
    }

    /// Offer a single candidate, building its count vector only when it is worth recording.
    pub fn offer(&mut self, earnings: Earnings, count_vector: impl FnOnce() -> CountVector) {
        self.offer_all(earnings, iter::once_with(count_vector));
    }

    /// Offer several candidates that share the same earnings.
    pub fn offer_all(
        &mut self,
        earnings: Earnings,
        count_vectors: impl IntoIterator<Item = CountVector>,
    ) {
        match earnings.cmp(&self.max_earnings) {
            Ordering::Greater => {
                self.max_earnings = earnings;
                self.solutions = count_vectors.into_iter().collect();
            }
            Ordering::Equal => {
                self.solutions.extend(count_vectors);
            }
            Ordering::Less => {}
        }
    }

    /// Combine two independently collected accumulators by the same rule.
    pub fn merge(mut self, other: Self) -> Self {
        self.offer_all(other.max_earnings, other.solutions);
        self
    }

    /// Finish the search.
    ///
    /// The empty allocation always scores zero, so an accumulator that has seen nothing
    /// still yields the all-zeros solution.
    pub fn into_result(mut self, time_budget: TimeUnits, catalog: &Catalog) -> SearchResult {
        if self.solutions.is_empty() {
            debug_assert_eq!(self.max_earnings, Earnings::ZERO);
            self.solutions.insert(CountVector::zero(catalog.len()));
        }
        SearchResult {
            time_budget,
            max_earnings: self.max_earnings,
            solutions: self.solutions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(counts: &[u32]) -> CountVector {
        CountVector::from(counts.to_vec())
    }

    #[test]
    fn test_greater_replaces() {
        let mut best = Best::default();
        best.offer(Earnings(10), || counts(&[1, 0]));
        best.offer(Earnings(20), || counts(&[0, 1]));
        assert_eq!(best.max_earnings(), Earnings(20));
        assert_eq!(best.solutions().iter().collect::<Vec<_>>(), [&counts(&[0, 1])]);
    }

    #[test]
    fn test_equal_deduplicates() {
        let mut best = Best::default();
        best.offer(Earnings(10), || counts(&[1, 1]));
        best.offer(Earnings(10), || counts(&[1, 1]));
        best.offer(Earnings(10), || counts(&[2, 0]));
        assert_eq!(best.solutions().len(), 2);
    }

    #[test]
    fn test_less_is_not_built() {
        let mut best = Best::default();
        best.offer(Earnings(10), || counts(&[1, 0]));
        best.offer(Earnings(5), || panic!("worse candidates must not be tallied"));
        assert_eq!(best.max_earnings(), Earnings(10));
    }

    #[test]
    fn test_merge() {
        let mut left = Best::default();
        left.offer(Earnings(10), || counts(&[1, 0]));
        let mut right = Best::default();
        right.offer(Earnings(10), || counts(&[0, 2]));
        let mut worse = Best::default();
        worse.offer(Earnings(3), || counts(&[0, 1]));

        let merged = left.merge(worse).merge(right);
        assert_eq!(merged.max_earnings(), Earnings(10));
        assert_eq!(
            merged.solutions().iter().cloned().collect::<Vec<_>>(),
            [counts(&[0, 2]), counts(&[1, 0])],
        );
    }

    #[test]
    fn test_empty_into_result() {
        let catalog = Catalog::default();
        let result = Best::default().into_result(TimeUnits(-1), &catalog);
        assert_eq!(result.max_earnings, Earnings::ZERO);
        assert_eq!(result.solutions.into_iter().collect::<Vec<_>>(), [CountVector::zero(3)]);
    }
}
