use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::{
    core::{
        cancellation::Cancellation,
        catalog::Catalog,
        search_error::SearchError,
        search_result::SearchResult,
        strategy::Strategy,
    },
    prelude::*,
    quantity::time::TimeUnits,
};

/// Runs searches off the async executor, at most one at a time.
///
/// Submitting a new request cancels the previous one, and its result is never delivered:
/// the latest request wins.
pub struct Worker {
    catalog: Arc<Catalog>,
    strategy: Strategy,
    n_submitted: u64,
    in_flight: Option<InFlight>,
}

struct InFlight {
    request_id: u64,
    cancellation: Cancellation,
    handle: JoinHandle<Result<SearchResult, SearchError>>,
}

impl Worker {
    pub fn new(catalog: Catalog, strategy: Strategy) -> Self {
        Self { catalog: Arc::new(catalog), strategy, n_submitted: 0, in_flight: None }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a search for the budget, superseding the one that is still running.
    ///
    /// Returns the request ID.
    pub fn submit(&mut self, time_budget: TimeUnits) -> u64 {
        if let Some(stale) = self.in_flight.take() {
            debug!(stale.request_id, "superseded");
            stale.cancellation.cancel();
        }

        self.n_submitted += 1;
        let request_id = self.n_submitted;
        let cancellation = Cancellation::default();
        let handle = {
            let catalog = Arc::clone(&self.catalog);
            let cancellation = cancellation.clone();
            let strategy = self.strategy;
            tokio::task::spawn_blocking(move || {
                strategy.optimize(&catalog, time_budget, &cancellation)
            })
        };
        info!(request_id, %time_budget, "submitted");
        self.in_flight = Some(InFlight { request_id, cancellation, handle });
        request_id
    }

    /// Wait for the latest request to finish.
    ///
    /// Resolves to `None` if the request got cancelled. Cancel-safe: if the future is dropped, the request stays in flight. Never resolves when
    /// the worker is idle, check [`Worker::is_busy`] first.
    pub async fn next_result(&mut self) -> Result<Option<SearchResult>> {
        let Some(in_flight) = &mut self.in_flight else {
            return std::future::pending().await;
        };
        let outcome = (&mut in_flight.handle).await;
        let request_id = in_flight.request_id;
        self.in_flight = None;

        match outcome.context("the search has crashed")? {
            Ok(result) => {
                debug!(request_id, "completed");
                Ok(Some(result))
            }
            Err(SearchError::Cancelled) => {
                debug!(request_id, "cancelled");
                Ok(None)
            }
            Err(error) => Err(error).with_context(|| format!("request #{request_id} has failed")),
        }
    }
}
