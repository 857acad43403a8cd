use std::sync::Arc;

use clap::Parser;

use crate::{
    cli::catalog::CatalogArgs,
    core::{cancellation::Cancellation, strategy::Strategy},
    prelude::*,
};

#[derive(Parser)]
pub struct SearchArgs {
    #[clap(flatten)]
    pub catalog: CatalogArgs,

    #[clap(long, value_enum, env = "SEARCH_STRATEGY", default_value_t)]
    pub strategy: Strategy,
}

/// Cancellation that is raised by Ctrl+C or `SIGTERM`, so that a long search unwinds promptly.
pub fn cancel_on_signals() -> Result<Cancellation> {
    let cancellation = Cancellation::default();
    for signal in [signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM] {
        signal_hook::flag::register(signal, Arc::clone(cancellation.flag()))
            .with_context(|| format!("failed to register the signal handler for {signal}"))?;
    }
    Ok(cancellation)
}
