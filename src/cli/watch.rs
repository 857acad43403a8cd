use std::io::Write;

use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::{
    cli::search::SearchArgs,
    core::{catalog::Catalog, input::parse_time_budget, search_result::SearchResult},
    prelude::*,
    tables::build_result_table,
    worker::Worker,
};

#[derive(Parser)]
pub struct WatchArgs {
    /// Print the results as JSON lines instead of tables.
    #[clap(long)]
    json: bool,

    #[clap(flatten)]
    search: SearchArgs,
}

impl WatchArgs {
    #[instrument(skip_all, fields(strategy = %self.search.strategy))]
    pub async fn run(&self) -> Result {
        let catalog = self.search.catalog.load()?;
        self.watch(catalog, BufReader::new(tokio::io::stdin()), &mut std::io::stdout()).await
    }

    /// Optimize the budgets read from the input until it ends and the last search completes.
    ///
    /// Invalid lines and failed searches are logged and skipped.
    async fn watch(
        &self,
        catalog: Catalog,
        input: impl AsyncBufRead + Unpin,
        output: &mut impl Write,
    ) -> Result {
        let mut worker = Worker::new(catalog, self.search.strategy);
        let mut lines = input.lines();
        let mut is_input_open = true;

        loop {
            tokio::select! {
                line = lines.next_line(), if is_input_open => {
                    let Some(line) = line.context("failed to read the input")? else {
                        debug!("end of input");
                        is_input_open = false;
                        continue;
                    };
                    if line.trim().is_empty() {
                        continue;
                    }
                    match parse_time_budget(&line) {
                        Ok(time_budget) => {
                            worker.submit(time_budget);
                        }
                        Err(error) => {
                            warn!("{error}");
                        }
                    }
                }
                result = worker.next_result(), if worker.is_busy() => {
                    match result {
                        Ok(Some(result)) => self.print(&result, &worker, output)?,
                        Ok(None) => {}
                        Err(error) => warn!("{error:#}"),
                    }
                }
                else => break,
            }
        }

        Ok(())
    }

    fn print(&self, result: &SearchResult, worker: &Worker, output: &mut impl Write) -> Result {
        if self.json {
            writeln!(output, "{}", serde_json::to_string(&result.report(worker.catalog()))?)?;
        } else {
            writeln!(output, "Time budget: {}", result.time_budget)?;
            writeln!(output, "{}", build_result_table(result, worker.catalog()))?;
        }
        output.flush()?;
        Ok(())
    }
}
