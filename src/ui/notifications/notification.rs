// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, the `Kind` enum with its
//! static style table, and the cancellation token that makes the expiry
//! timer and an explicit dismiss mutually exclusive.

use crate::ui::design_tokens::palette;
use chrono::{DateTime, Local};
use iced::Color;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Opaque reference to a notification, returned by `Manager::notify`.
///
/// Handles are unique within the manager that issued them and are never
/// reused, so a stale handle can only ever miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(u64);

impl Handle {
    pub(super) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Notification category. Determines accent color, glyph and default duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Success, Kind::Error, Kind::Warning, Kind::Info];

    /// Parses a kind name, case-insensitively.
    ///
    /// Never fails: anything unrecognized becomes [`Kind::Info`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" => Kind::Success,
            "error" => Kind::Error,
            "warning" => Kind::Warning,
            "info" => Kind::Info,
            other => {
                log::debug!("unknown notification kind {other:?}, using info");
                Kind::Info
            }
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Warning => "warning",
            Kind::Info => "info",
        }
    }

    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Info => palette::INFO_500,
        }
    }

    /// Returns the glyph shown at the start of the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Kind::Success => "✓",
            Kind::Error => "✕",
            Kind::Warning => "!",
            Kind::Info => "i",
        }
    }
}

impl From<&str> for Kind {
    fn from(raw: &str) -> Self {
        Kind::parse(raw)
    }
}

impl From<&String> for Kind {
    fn from(raw: &String) -> Self {
        Kind::parse(raw)
    }
}

/// One-shot cancellation flag shared between a notification's expiry timer
/// and explicit dismissal. Whoever cancels first owns the removal.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the token. Returns `true` only for the call that flipped it.
    pub fn cancel(&self) -> bool {
        !self.0.swap(true, Ordering::AcqRel)
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Animation phase of an attached notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Fading in.
    Entering,
    /// Fully visible, waiting for expiry or dismissal.
    Shown,
    /// Fading out from opacity `from`; detached once the exit transition has
    /// elapsed.
    Exiting { since: Instant, from: f32 },
}

/// A notification owned by the manager.
#[derive(Debug, Clone)]
pub struct Notification {
    handle: Handle,
    kind: Kind,
    message: String,
    /// Monotonic creation time, drives every timer.
    created_at: Instant,
    /// Wall-clock creation time, shown in the toast.
    posted_at: DateTime<Local>,
    display_duration: Duration,
    token: CancellationToken,
    phase: Phase,
}

impl Notification {
    pub(super) fn new(
        handle: Handle,
        kind: Kind,
        message: String,
        created_at: Instant,
        display_duration: Duration,
    ) -> Self {
        Self {
            handle,
            kind,
            message,
            created_at,
            posted_at: Local::now(),
            display_duration,
            token: CancellationToken::new(),
            phase: Phase::Entering,
        }
    }

    #[must_use]
    pub fn handle(&self) -> Handle {
        self.handle
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn posted_at(&self) -> DateTime<Local> {
        self.posted_at
    }

    /// Returns the `HH:MM` timestamp shown under the message.
    #[must_use]
    pub fn posted_at_label(&self) -> String {
        self.posted_at.format("%H:%M").to_string()
    }

    #[must_use]
    pub fn display_duration(&self) -> Duration {
        self.display_duration
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_exiting(&self) -> bool {
        matches!(self.phase, Phase::Exiting { .. })
    }

    /// Returns a clone of the cancellation token.
    #[must_use]
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Instant at which the expiry timer fires.
    #[must_use]
    pub fn expires_at(&self) -> Instant {
        self.created_at + self.display_duration
    }

    /// Starts the exit transition if nothing else already has.
    ///
    /// The fade-out starts from the opacity reached at `now`, so a toast
    /// leaving mid-entrance never flashes to full opacity. Returns `true`
    /// when this call won the race against the other removal path.
    pub(super) fn begin_exit(&mut self, now: Instant, enter: Duration) -> bool {
        if self.token.cancel() {
            let from = match self.phase {
                Phase::Entering => progress(now.saturating_duration_since(self.created_at), enter),
                Phase::Shown => 1.0,
                Phase::Exiting { .. } => return false,
            };
            self.phase = Phase::Exiting { since: now, from };
            true
        } else {
            false
        }
    }

    /// Advances `Entering` to `Shown` once the entrance transition is over.
    pub(super) fn settle(&mut self, now: Instant, enter: Duration) {
        if self.phase == Phase::Entering && now.saturating_duration_since(self.created_at) >= enter
        {
            self.phase = Phase::Shown;
        }
    }

    /// Returns whether the exit transition has fully elapsed.
    pub(super) fn exit_finished(&self, now: Instant, exit: Duration) -> bool {
        match self.phase {
            Phase::Exiting { since, .. } => now.saturating_duration_since(since) >= exit,
            _ => false,
        }
    }

    /// Rendered opacity in `0.0..=1.0` for the current phase.
    #[must_use]
    pub fn opacity(&self, now: Instant, enter: Duration, exit: Duration) -> f32 {
        match self.phase {
            Phase::Entering => progress(now.saturating_duration_since(self.created_at), enter),
            Phase::Shown => 1.0,
            Phase::Exiting { since, from } => {
                from * (1.0 - progress(now.saturating_duration_since(since), exit))
            }
        }
    }
}

fn progress(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(now: Instant) -> Notification {
        Notification::new(
            Handle::from_raw(1),
            Kind::Success,
            "Saved".to_string(),
            now,
            Duration::from_secs(3),
        )
    }

    #[test]
    fn kind_parse_is_case_insensitive() {
        assert_eq!(Kind::parse("SUCCESS"), Kind::Success);
        assert_eq!(Kind::parse(" Error "), Kind::Error);
        assert_eq!(Kind::parse("warning"), Kind::Warning);
        assert_eq!(Kind::parse("info"), Kind::Info);
    }

    #[test]
    fn unknown_kind_falls_back_to_info() {
        assert_eq!(Kind::parse("critical"), Kind::Info);
        assert_eq!(Kind::parse(""), Kind::Info);
        assert_eq!(Kind::from("danger"), Kind::Info);
    }

    #[test]
    fn kind_names_round_trip_through_parse() {
        for kind in Kind::ALL {
            assert_eq!(Kind::parse(kind.as_str()), kind);
        }
    }

    #[test]
    fn kind_colors_are_distinct() {
        for (i, a) in Kind::ALL.iter().enumerate() {
            for b in &Kind::ALL[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }

    #[test]
    fn token_cancels_exactly_once() {
        let token = CancellationToken::new();
        let shared = token.clone();
        assert!(!token.is_cancelled());
        assert!(shared.cancel());
        assert!(!token.cancel());
        assert!(token.is_cancelled());
    }

    #[test]
    fn begin_exit_is_first_writer_wins() {
        let now = Instant::now();
        let mut n = sample(now);
        let enter = Duration::from_millis(200);
        n.settle(now + enter, enter);
        assert!(n.begin_exit(now + enter, enter));
        assert!(!n.begin_exit(now + enter + Duration::from_millis(20), enter));
        assert_eq!(
            n.phase(),
            Phase::Exiting {
                since: now + enter,
                from: 1.0
            }
        );
    }

    #[test]
    fn settle_moves_to_shown_after_enter_transition() {
        let now = Instant::now();
        let mut n = sample(now);
        let enter = Duration::from_millis(200);

        n.settle(now + Duration::from_millis(100), enter);
        assert_eq!(n.phase(), Phase::Entering);

        n.settle(now + enter, enter);
        assert_eq!(n.phase(), Phase::Shown);
    }

    #[test]
    fn opacity_follows_phase() {
        let now = Instant::now();
        let enter = Duration::from_millis(200);
        let exit = Duration::from_millis(200);
        let mut n = sample(now);

        let half_in = n.opacity(now + Duration::from_millis(100), enter, exit);
        assert!((half_in - 0.5).abs() < 0.01);

        n.settle(now + enter, enter);
        assert_eq!(n.opacity(now + enter, enter, exit), 1.0);

        let exit_start = now + Duration::from_secs(1);
        n.begin_exit(exit_start, enter);
        let half_out = n.opacity(exit_start + Duration::from_millis(100), enter, exit);
        assert!((half_out - 0.5).abs() < 0.01);
        assert_eq!(n.opacity(exit_start + exit, enter, exit), 0.0);
    }

    #[test]
    fn exit_during_entrance_fades_from_current_opacity() {
        let now = Instant::now();
        let enter = Duration::from_millis(200);
        let exit = Duration::from_millis(300);
        let mut n = sample(now);

        let dismissed_at = now + Duration::from_millis(40);
        let before = n.opacity(dismissed_at, enter, exit);
        assert!(n.begin_exit(dismissed_at, enter));
        let after = n.opacity(dismissed_at, enter, exit);

        assert!((before - 0.2).abs() < 0.01);
        assert!((after - before).abs() < 0.01);
        // Never brighter than at the moment of dismissal.
        let later = n.opacity(dismissed_at + Duration::from_millis(150), enter, exit);
        assert!(later < after);
        assert_eq!(n.opacity(dismissed_at + exit, enter, exit), 0.0);
    }

    #[test]
    fn expires_at_adds_display_duration() {
        let now = Instant::now();
        let n = sample(now);
        assert_eq!(n.expires_at(), now + Duration::from_secs(3));
    }
}
