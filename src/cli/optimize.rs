use clap::Parser;

use crate::{
    cli::search::{SearchArgs, cancel_on_signals},
    core::input::parse_time_budget,
    prelude::*,
    quantity::time::TimeUnits,
    tables::build_result_table,
};

#[derive(Parser)]
pub struct OptimizeArgs {
    /// Total time available for development.
    #[clap(env = "TIME_BUDGET", value_parser = parse_time_budget, allow_hyphen_values = true)]
    time_budget: TimeUnits,

    /// Print the result as JSON instead of a table.
    #[clap(long)]
    json: bool,

    #[clap(flatten)]
    search: SearchArgs,
}

impl OptimizeArgs {
    #[instrument(skip_all, fields(time_budget = %self.time_budget, strategy = %self.search.strategy))]
    pub fn run(&self) -> Result {
        let catalog = self.search.catalog.load()?;
        let cancellation = cancel_on_signals()?;
        let result = self.search.strategy.optimize(&catalog, self.time_budget, &cancellation)?;
        info!(max_earnings = %result.max_earnings, n_solutions = result.solutions.len(), "found");

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result.report(&catalog))?);
        } else {
            println!("{}", build_result_table(&result, &catalog));
        }
        Ok(())
    }
}
