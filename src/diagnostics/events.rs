// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use chrono::{DateTime, Utc};
use std::time::Instant;

/// User-initiated actions worth recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    SignIn,
    SignOut,
    SaveAvailability,
    RefreshDashboard,
    DismissToast,
}

/// Event payloads.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEventKind {
    /// A warning toast was shown.
    Warning { message: String },
    /// An error toast was shown.
    Error { message: String },
    UserAction { action: UserAction },
    /// The page changed; the old page was torn down.
    Navigation { from: String, to: String },
}

/// A recorded event with its timestamps.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// Monotonic capture time.
    pub timestamp: Instant,
    /// Wall-clock capture time.
    pub recorded_at: DateTime<Utc>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            recorded_at: Utc::now(),
            kind,
        }
    }

    #[must_use]
    pub fn is_problem(&self) -> bool {
        matches!(
            self.kind,
            DiagnosticEventKind::Warning { .. } | DiagnosticEventKind::Error { .. }
        )
    }
}
