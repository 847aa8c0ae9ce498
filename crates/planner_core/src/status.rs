//! Transient user-facing status channel.
//!
//! # Responsibility
//! - Carry one auto-dismissing notification raised after every mutating
//!   operation and every recoverable failure.
//!
//! # Invariants
//! - A newer notice replaces the current one and restarts its clock.
//! - Dismissal is "hide if still showing": the expiry of an older notice
//!   can never hide a newer one.

use std::time::{Duration, Instant};

/// How long a notice stays visible before auto-dismissing.
pub const STATUS_DISMISS: Duration = Duration::from_secs(5);

/// Severity tag rendered alongside the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// One user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

/// Holder for the currently displayed notice.
///
/// Expiry is evaluated lazily against the notice's own show time, so the
/// dismiss action is inherently idempotent and keyed to the notice it
/// belongs to.
#[derive(Debug, Default)]
pub struct StatusChannel {
    current: Option<(Notice, Instant)>,
}

impl StatusChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Displays a notice, replacing whatever is currently shown.
    pub fn announce(&mut self, severity: Severity, message: impl Into<String>, now: Instant) {
        self.current = Some((
            Notice {
                severity,
                message: message.into(),
            },
            now,
        ));
    }

    /// The notice to display at `now`, or `None` once it has auto-dismissed.
    pub fn current(&self, now: Instant) -> Option<&Notice> {
        match &self.current {
            Some((notice, shown_at)) if now.duration_since(*shown_at) < STATUS_DISMISS => {
                Some(notice)
            }
            _ => None,
        }
    }
}
