//! Cooperative cancellation for service operations.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::server::error::Error;

/// Cloneable cancellation flag shared between a caller and a running operation.
///
/// Services check the signal before each store call on read paths and once before the
/// transaction begins on write paths. A fired signal never interrupts an open transaction.
#[derive(Clone, Debug, Default)]
pub struct CancelSignal {
    cancelled: Arc<AtomicBool>,
}

impl CancelSignal {
    /// Creates a signal that has not fired.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires the signal for every clone.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Returns `Err(Error::Cancelled)` naming the step that was about to run.
    pub fn ensure_active(&self, step: &str) -> Result<(), Error> {
        if self.is_cancelled() {
            tracing::debug!(step = %step, "Operation cancelled");

            return Err(Error::Cancelled(step.to_string()));
        }

        Ok(())
    }
}
