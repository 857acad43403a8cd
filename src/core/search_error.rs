use crate::quantity::time::TimeUnits;

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("the search has been cancelled")]
    Cancelled,

    #[error("the time budget of {time_budget} exceeds the supported maximum of {max_time_budget}")]
    BudgetTooLarge { time_budget: TimeUnits, max_time_budget: TimeUnits },

    #[error("the earnings do not fit into a 64-bit integer, try smaller rates or budget")]
    EarningsOverflow,
}
