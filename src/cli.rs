mod catalog;
mod optimize;
mod search;
mod sweep;
mod watch;

use clap::{Parser, Subcommand};

use crate::{
    cli::{
        catalog::CatalogArgs,
        optimize::OptimizeArgs,
        sweep::SweepArgs,
        watch::WatchArgs,
    },
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub async fn run(self) -> Result {
        match self.command {
            Command::Optimize(args) => args.run(),
            Command::Sweep(args) => args.run(),
            Command::Catalog(args) => args.run(),
            Command::Watch(args) => args.run().await,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Main command: find the most profitable allocations for a single time budget.
    #[clap(name = "optimize")]
    Optimize(Box<OptimizeArgs>),

    /// Optimize every time budget in a range and print one row per budget.
    #[clap(name = "sweep")]
    Sweep(Box<SweepArgs>),

    /// Print the project types the optimizer chooses from.
    #[clap(name = "catalog")]
    Catalog(CatalogArgs),

    /// Read time budgets from the standard input, one per line, and optimize the latest one.
    ///
    /// A new budget cancels the search that is still running for the previous one.
    #[clap(name = "watch")]
    Watch(Box<WatchArgs>),
}
