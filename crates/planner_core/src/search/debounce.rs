//! Cancellable quiet-period scheduling for live search input.
//!
//! # Responsibility
//! - Defer search evaluation until input has been quiet for a fixed period.
//! - Guarantee a newer submission supersedes any pending one.
//!
//! # Invariants
//! - At most one submission is pending at a time.
//! - `poll` fires a given submission at most once.

use std::time::{Duration, Instant};

/// Quiet period after the last keystroke before search evaluation runs.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Pull-based debouncer: callers submit input on every keystroke and poll
/// on their event loop; the pending value is released once the quiet
/// period has elapsed.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `input` for evaluation, superseding any pending value and
    /// restarting the quiet period from `now`.
    pub fn submit(&mut self, input: impl Into<String>, now: Instant) {
        self.pending = Some((input.into(), now));
    }

    /// Releases the pending input when its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, submitted)) if now.duration_since(*submitted) >= SEARCH_DEBOUNCE => {
                self.pending.take().map(|(input, _)| input)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
