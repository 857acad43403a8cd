use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::quantity::{earnings::Earnings, rate::EarningsRate, time::TimeUnits};

/// Position of a project type within its [`crate::core::catalog::Catalog`].
pub type ProjectIndex = usize;

/// Kind of development project that can be placed on the land.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectType {
    /// Short identifier, for example `T`.
    #[builder(into)]
    pub id: String,

    /// Human-readable name, for example `Theatre`.
    #[builder(into)]
    pub name: String,

    /// Time it takes to build the project.
    pub time_cost: TimeUnits,

    /// Earned for every time unit the project operates after it is finished.
    pub earnings_rate: EarningsRate,
}

impl ProjectType {
    /// Earnings of the project that finishes with `remaining_time` left in the budget.
    ///
    /// [`None`] on overflow.
    #[must_use]
    pub const fn payoff(&self, remaining_time: TimeUnits) -> Option<Earnings> {
        self.earnings_rate.checked_mul(remaining_time)
    }
}
