use std::fmt::{Display, Formatter};

use crate::{
    core::{
        cancellation::Interrupt,
        catalog::Catalog,
        dynamic::DynamicSearch,
        exhaustive::ExhaustiveSearch,
        parallel::ParallelSearch,
        search_error::SearchError,
        search_result::SearchResult,
    },
    quantity::time::TimeUnits,
};

/// Search algorithm. All of them produce identical results.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// Depth-first enumeration of every feasible sequence.
    Exhaustive,

    /// Depth-first enumeration with the top-level branches spread over all CPU cores.
    Parallel,

    /// Dynamic programming over the remaining time.
    #[default]
    Dynamic,
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhaustive => write!(f, "exhaustive"),
            Self::Parallel => write!(f, "parallel"),
            Self::Dynamic => write!(f, "dynamic"),
        }
    }
}

impl Strategy {
    pub fn optimize<I: Interrupt>(
        self,
        catalog: &Catalog,
        time_budget: TimeUnits,
        interrupt: &I,
    ) -> Result<SearchResult, SearchError> {
        match self {
            Self::Exhaustive => ExhaustiveSearch::builder()
                .catalog(catalog)
                .time_budget(time_budget)
                .interrupt(interrupt)
                .build()
                .run(),
            Self::Parallel => ParallelSearch::builder()
                .catalog(catalog)
                .time_budget(time_budget)
                .interrupt(interrupt)
                .build()
                .run(),
            Self::Dynamic => DynamicSearch::builder()
                .catalog(catalog)
                .time_budget(time_budget)
                .interrupt(interrupt)
                .build()
                .run(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use itertools::Itertools;
    use proptest::prelude::*;

    use super::{Strategy, *};
    use crate::{
        core::{
            cancellation::Uninterruptible,
            dynamic::MAX_TIME_BUDGET,
            count_vector::CountVector,
            project::{ProjectIndex, ProjectType},
            sequence::Sequence,
        },
        quantity::{earnings::Earnings, rate::EarningsRate},
    };

    const STRATEGIES: [Strategy; 3] = [Strategy::Exhaustive, Strategy::Parallel, Strategy::Dynamic];

    fn optimize(strategy: Strategy, catalog: &Catalog, time_budget: i64) -> SearchResult {
        strategy.optimize(catalog, TimeUnits(time_budget), &Uninterruptible).unwrap()
    }

    /// `(budget, max earnings, solutions as (T, P, C))`, traced by hand from the scoring rule.
    const GOLDEN: &[(i64, i64, &[[u32; 3]])] = &[
        (-10, 0, &[[0, 0, 0]]),
        (-1, 0, &[[0, 0, 0]]),
        (0, 0, &[[0, 0, 0]]),
        (3, 0, &[[0, 0, 0]]),
        (4, 0, &[[0, 0, 0], [0, 1, 0]]),
        (5, 1000, &[[0, 1, 0]]),
        (6, 2000, &[[0, 1, 0]]),
        (7, 3000, &[[0, 1, 0], [1, 0, 0]]),
        (8, 4500, &[[1, 0, 0]]),
        (9, 6000, &[[0, 2, 0], [1, 0, 0], [1, 1, 0]]),
        (10, 8500, &[[1, 1, 0]]),
        (12, 13500, &[[1, 1, 0], [2, 0, 0]]),
        (14, 19500, &[[1, 2, 0], [2, 0, 0], [2, 1, 0]]),
        (15, 23500, &[[2, 1, 0]]),
        (20, 46000, &[[3, 1, 0]]),
        (25, 76000, &[[4, 1, 0]]),
    ];

    #[test]
    fn test_golden_values() {
        let catalog = Catalog::default();
        for strategy in STRATEGIES {
            for (time_budget, max_earnings, solutions) in GOLDEN {
                let result = optimize(strategy, &catalog, *time_budget);
                let expected: BTreeSet<_> =
                    solutions.iter().map(|counts| CountVector::from(counts.to_vec())).collect();
                assert_eq!(result.max_earnings, Earnings(*max_earnings), "{strategy} {time_budget}");
                assert_eq!(result.solutions, expected, "{strategy} {time_budget}");
            }
        }
    }

    #[test]
    fn test_thirty() {
        let result = optimize(Strategy::Dynamic, &Catalog::default(), 30);
        assert_eq!(result.max_earnings, Earnings(113_500));
        assert_eq!(result.solutions, BTreeSet::from([CountVector::from(vec![5, 1, 0])]));
    }

    #[test]
    fn test_earnings_overflow() {
        let catalog = Catalog::try_new(vec![
            ProjectType::builder()
                .id("X")
                .name("Extractor")
                .time_cost(TimeUnits(1))
                .earnings_rate(EarningsRate(i64::MAX / 2))
                .build(),
        ])
        .unwrap();
        for strategy in STRATEGIES {
            assert_eq!(
                strategy.optimize(&catalog, TimeUnits(4), &Uninterruptible),
                Err(SearchError::EarningsOverflow),
                "{strategy}",
            );
        }
    }

    #[test]
    fn test_huge_budget() {
        let result = Strategy::Dynamic.optimize(
            &Catalog::default(),
            TimeUnits(i64::MAX),
            &Uninterruptible,
        );
        assert_eq!(
            result,
            Err(SearchError::BudgetTooLarge {
                time_budget: TimeUnits(i64::MAX),
                max_time_budget: MAX_TIME_BUDGET,
            }),
        );
    }

    /// Best score over all orderings of the multiset, or `None` if it does not fit the budget.
    fn best_ordering_score(
        catalog: &Catalog,
        solution: &CountVector,
        time_budget: TimeUnits,
    ) -> Option<Earnings> {
        if solution.time_cost(catalog) > time_budget {
            return None;
        }
        let projects: Vec<ProjectIndex> = catalog
            .iter()
            .flat_map(|(index, _)| std::iter::repeat_n(index, solution.get(index) as usize))
            .collect();
        let n_projects = projects.len();
        projects
            .into_iter()
            .permutations(n_projects)
            .filter_map(|order| Sequence::from(order).score(catalog, time_budget))
            .max()
    }

    proptest! {
        #[test]
        fn prop_strategies_agree(time_budget in -5_i64..=40) {
            let catalog = Catalog::default();
            let expected = optimize(Strategy::Exhaustive, &catalog, time_budget);
            prop_assert_eq!(&optimize(Strategy::Parallel, &catalog, time_budget), &expected);
            prop_assert_eq!(&optimize(Strategy::Dynamic, &catalog, time_budget), &expected);
        }

        #[test]
        fn prop_non_positive_budget_is_trivial(time_budget in -1_000_i64..=0) {
            for strategy in STRATEGIES {
                let result = optimize(strategy, &Catalog::default(), time_budget);
                prop_assert_eq!(result.max_earnings, Earnings::ZERO);
                prop_assert_eq!(result.solutions, BTreeSet::from([CountVector::zero(3)]));
            }
        }

        #[test]
        fn prop_monotonic(time_budget in -5_i64..=200) {
            let catalog = Catalog::default();
            let smaller = optimize(Strategy::Dynamic, &catalog, time_budget);
            let larger = optimize(Strategy::Dynamic, &catalog, time_budget + 1);
            prop_assert!(larger.max_earnings >= smaller.max_earnings);
        }

        #[test]
        fn prop_solutions_are_reachable(time_budget in 0_i64..=30) {
            let catalog = Catalog::default();
            let result = optimize(Strategy::Dynamic, &catalog, time_budget);
            prop_assert!(!result.solutions.is_empty());
            for solution in &result.solutions {
                prop_assert_eq!(
                    best_ordering_score(&catalog, solution, result.time_budget),
                    Some(result.max_earnings),
                );
            }
        }

        #[test]
        fn prop_deterministic(time_budget in -5_i64..=24) {
            for strategy in STRATEGIES {
                let catalog = Catalog::default();
                prop_assert_eq!(
                    optimize(strategy, &catalog, time_budget),
                    optimize(strategy, &catalog, time_budget),
                );
            }
        }

        #[test]
        fn prop_synthetic_catalogs_agree(
            parameters in proptest::collection::vec((2_i64..=6, 1_i64..=50), 1..=3),
            time_budget in 0_i64..=12,
        ) {
            let catalog = Catalog::try_new(
                parameters
                    .into_iter()
                    .enumerate()
                    .map(|(index, (time_cost, earnings_rate))| {
                        ProjectType::builder()
                            .id(index.to_string())
                            .name(format!("Project {index}"))
                            .time_cost(TimeUnits(time_cost))
                            .earnings_rate(EarningsRate(earnings_rate))
                            .build()
                    })
                    .collect(),
            )
            .unwrap();
            prop_assert_eq!(
                optimize(Strategy::Dynamic, &catalog, time_budget),
                optimize(Strategy::Exhaustive, &catalog, time_budget),
            );
        }
    }
}
