use std::ops::RangeInclusive;

use clap::Parser;
use itertools::Itertools;

use crate::{
    cli::search::{SearchArgs, cancel_on_signals},
    core::input::parse_time_budget,
    prelude::*,
    quantity::time::TimeUnits,
    tables::build_sweep_table,
};

#[derive(Parser)]
pub struct SweepArgs {
    /// First time budget of the range.
    #[clap(long, default_value = "0", value_parser = parse_time_budget, allow_hyphen_values = true)]
    from: TimeUnits,

    /// Last time budget of the range, inclusive.
    #[clap(long, value_parser = parse_time_budget, allow_hyphen_values = true)]
    to: TimeUnits,

    /// Print the results as JSON instead of a table.
    #[clap(long)]
    json: bool,

    #[clap(flatten)]
    search: SearchArgs,
}

impl SweepArgs {
    #[instrument(skip_all, fields(from = %self.from, to = %self.to, strategy = %self.search.strategy))]
    pub fn run(&self) -> Result {
        let time_budgets = self.time_budgets()?;
        let catalog = self.search.catalog.load()?;
        let cancellation = cancel_on_signals()?;
        let results: Vec<_> = time_budgets
            .map(|time_budget| {
                self.search.strategy.optimize(&catalog, TimeUnits(time_budget), &cancellation)
            })
            .try_collect()?;

        if self.json {
            let reports = results.iter().map(|result| result.report(&catalog)).collect_vec();
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else {
            println!("{}", build_sweep_table(&results, &catalog));
        }
        Ok(())
    }

    fn time_budgets(&self) -> Result<RangeInclusive<i64>> {
        ensure!(self.from <= self.to, "the range from {} to {} is empty", self.from, self.to);
        Ok(self.from.0..=self.to.0)
    }
}
