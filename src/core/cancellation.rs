use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::core::search_error::SearchError;

/// Checked by the solvers at every search step.
pub trait Interrupt: Sync {
    fn is_interrupted(&self) -> bool;

    fn check(&self) -> Result<(), SearchError> {
        if self.is_interrupted() { Err(SearchError::Cancelled) } else { Ok(()) }
    }
}

/// Search that always runs to completion.
#[derive(Copy, Clone, Debug, Default)]
pub struct Uninterruptible;

impl Interrupt for Uninterruptible {
    fn is_interrupted(&self) -> bool {
        false
    }
}

/// Cooperative cancellation flag shared between a running search and its owner.
#[must_use]
#[derive(Clone, Debug, Default)]
pub struct Cancellation(Arc<AtomicBool>);

impl Cancellation {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Underlying flag, for example, to be raised by a signal handler.
    #[must_use]
    pub const fn flag(&self) -> &Arc<AtomicBool> {
        &self.0
    }
}

impl Interrupt for Cancellation {
    fn is_interrupted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
