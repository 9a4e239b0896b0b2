//! Cancellation tied to a screen's visible lifetime.
//!
//! Each screen owns a [`ScreenScope`]. Whoever hosts the screen keeps a clone
//! and calls [`ScreenScope::cancel`] when the screen goes away; any store call
//! still in flight through [`ScreenScope::run`] then resolves to `None` and
//! its result is dropped instead of being written into state that nobody
//! shows anymore.

use std::{future::Future, sync::Arc};

use tokio::sync::watch;

/// Cancellation handle shared between a screen and its host.
#[derive(Debug, Clone)]
pub struct ScreenScope {
    cancelled: Arc<watch::Sender<bool>>,
}

impl ScreenScope {
    pub fn new() -> Self {
        let (cancelled, _) = watch::channel(false);
        Self {
            cancelled: Arc::new(cancelled),
        }
    }

    /// Marks the scope as cancelled. Cancelling twice has no further effect.
    pub fn cancel(&self) {
        self.cancelled.send_if_modified(|cancelled| !std::mem::replace(cancelled, true));
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancelled.borrow()
    }

    /// Resolves once the scope is cancelled.
    pub async fn cancelled(&self) {
        let mut rx = self.cancelled.subscribe();
        // The sender lives as long as `self`, so this cannot fail.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }

    /// Runs `fut` unless the scope is or becomes cancelled.
    ///
    /// Returns `None` if the scope was cancelled before `fut` started, while
    /// it was running, or by the time it completed.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        if self.is_cancelled() {
            return None;
        }

        tokio::select! {
            biased;
            _ = self.cancelled() => None,
            output = fut => (!self.is_cancelled()).then_some(output),
        }
    }
}

impl Default for ScreenScope {
    fn default() -> Self {
        Self::new()
    }
}
