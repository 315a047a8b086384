// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns every attached notification in insertion order and
//! drives their timers from `tick`. Removal always goes through an exit
//! transition; the expiry timer and an explicit dismiss race through the
//! notification's cancellation token, so exactly one of them wins.

use super::notification::{Handle, Kind, Notification};
use crate::config::{NotificationsConfig, MAX_TOAST_DURATION_MS, MIN_TOAST_DURATION_MS};
use crate::diagnostics::DiagnosticsHandle;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Screen corner the toast stack is anchored to.
///
/// The newest toast always sits closest to the anchored edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopRight,
    #[default]
    BottomRight,
}

/// Runtime timing and placement settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub position: Position,
    pub success_duration: Duration,
    pub info_duration: Duration,
    pub warning_duration: Duration,
    pub error_duration: Duration,
    pub enter_transition: Duration,
    pub exit_transition: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&NotificationsConfig::default())
    }
}

impl Settings {
    /// Builds runtime settings from the `[notifications]` config section,
    /// clamping every duration into its supported range.
    #[must_use]
    pub fn from_config(config: &NotificationsConfig) -> Self {
        Self {
            position: config.position,
            success_duration: clamp_display(Duration::from_millis(config.success_duration_ms)),
            info_duration: clamp_display(Duration::from_millis(config.info_duration_ms)),
            warning_duration: clamp_display(Duration::from_millis(config.warning_duration_ms)),
            error_duration: clamp_display(Duration::from_millis(config.error_duration_ms)),
            enter_transition: config.enter_transition(),
            exit_transition: config.exit_transition(),
        }
    }

    /// Display duration used when the caller does not provide one.
    #[must_use]
    pub fn duration_for(&self, kind: Kind) -> Duration {
        match kind {
            Kind::Success => self.success_duration,
            Kind::Info => self.info_duration,
            Kind::Warning => self.warning_duration,
            Kind::Error => self.error_duration,
        }
    }
}

fn clamp_display(duration: Duration) -> Duration {
    duration.clamp(
        Duration::from_millis(MIN_TOAST_DURATION_MS),
        Duration::from_millis(MAX_TOAST_DURATION_MS),
    )
}

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the dismiss button of a toast.
    Dismiss(Handle),
    /// Periodic timer tick.
    Tick(Instant),
}

/// Owns the toast stack of one page.
#[derive(Debug, Default)]
pub struct Manager {
    /// Attached notifications, oldest first. Never reordered.
    entries: VecDeque<Notification>,
    settings: Settings,
    next_handle: u64,
    /// Optional diagnostics handle for recording warnings/errors.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    /// Creates an empty manager with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Sets the diagnostics handle for recording warnings and errors.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Shows a notification using the default duration for its kind.
    ///
    /// Never fails; unknown kind names fall back to info.
    pub fn notify(&mut self, message: impl Into<String>, kind: impl Into<Kind>) -> Handle {
        self.notify_at(message, kind, Instant::now())
    }

    /// Shows a notification with an explicit display duration.
    pub fn notify_for(
        &mut self,
        message: impl Into<String>,
        kind: impl Into<Kind>,
        duration: Duration,
    ) -> Handle {
        self.enqueue(message.into(), kind.into(), Some(duration), Instant::now())
    }

    /// Like [`Manager::notify`], with the creation instant supplied by the caller.
    pub fn notify_at(
        &mut self,
        message: impl Into<String>,
        kind: impl Into<Kind>,
        now: Instant,
    ) -> Handle {
        self.enqueue(message.into(), kind.into(), None, now)
    }

    fn enqueue(
        &mut self,
        message: String,
        kind: Kind,
        duration: Option<Duration>,
        now: Instant,
    ) -> Handle {
        let handle = Handle::from_raw(self.next_handle);
        self.next_handle += 1;

        let duration = duration.map_or_else(|| self.settings.duration_for(kind), clamp_display);

        if let Some(diagnostics) = &self.diagnostics {
            match kind {
                Kind::Warning => diagnostics.log_warning(message.clone()),
                Kind::Error => diagnostics.log_error(message.clone()),
                Kind::Success | Kind::Info => {}
            }
        }
        log::debug!("toast {handle:?} ({}) for {duration:?}: {message}", kind.as_str());

        self.entries
            .push_back(Notification::new(handle, kind, message, now, duration));
        handle
    }

    /// Dismisses a notification immediately.
    ///
    /// Returns `true` if this call started the exit. Unknown, already exiting
    /// and already removed handles are ignored.
    pub fn dismiss(&mut self, handle: Handle) -> bool {
        self.dismiss_at(handle, Instant::now())
    }

    /// Like [`Manager::dismiss`], at an explicit instant.
    pub fn dismiss_at(&mut self, handle: Handle, now: Instant) -> bool {
        let Some(notification) = self.entries.iter_mut().find(|n| n.handle() == handle) else {
            return false;
        };
        if !notification.begin_exit(now, self.settings.enter_transition) {
            return false;
        }
        self.reap(now);
        true
    }

    /// Advances timers: finishes entrance transitions, starts exits for
    /// expired notifications and detaches those whose exit has completed.
    pub fn tick(&mut self, now: Instant) {
        let enter = self.settings.enter_transition;
        for notification in &mut self.entries {
            notification.settle(now, enter);
            let expires_at = notification.expires_at();
            if now >= expires_at && notification.begin_exit(expires_at, enter) {
                log::trace!("toast {:?} expired", notification.handle());
            }
        }
        self.reap(now);
    }

    fn reap(&mut self, now: Instant) {
        let exit = self.settings.exit_transition;
        self.entries.retain(|n| {
            let done = n.exit_finished(now, exit);
            if done {
                log::trace!("toast {:?} detached", n.handle());
            }
            !done
        });
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(handle) => {
                self.dismiss(*handle);
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    /// Returns attached notifications in insertion order, exiting ones included.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Returns attached notifications in on-screen order, top to bottom.
    ///
    /// The newest notification is nearest the anchored edge.
    #[must_use]
    pub fn stacked(&self) -> Vec<&Notification> {
        match self.settings.position {
            Position::BottomRight => self.entries.iter().collect(),
            Position::TopRight => self.entries.iter().rev().collect(),
        }
    }

    #[must_use]
    pub fn get(&self, handle: Handle) -> Option<&Notification> {
        self.entries.iter().find(|n| n.handle() == handle)
    }

    /// Returns whether the notification is still attached (including while exiting).
    #[must_use]
    pub fn contains(&self, handle: Handle) -> bool {
        self.get(handle).is_some()
    }

    /// Rendered opacity of a notification, if it is attached.
    #[must_use]
    pub fn opacity(&self, handle: Handle, now: Instant) -> Option<f32> {
        self.get(handle).map(|n| {
            n.opacity(
                now,
                self.settings.enter_transition,
                self.settings.exit_transition,
            )
        })
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Detaches every notification without transitions (page teardown).
    pub fn clear(&mut self) {
        for notification in &self.entries {
            notification.token().cancel();
        }
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};

    fn messages(manager: &Manager) -> Vec<&str> {
        manager.visible().map(Notification::message).collect()
    }

    fn instant_exit() -> Settings {
        Settings {
            exit_transition: Duration::ZERO,
            ..Settings::default()
        }
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn notify_preserves_call_order() {
        let mut manager = Manager::new();
        let now = Instant::now();
        for label in ["first", "second", "third", "fourth"] {
            manager.notify_at(label, Kind::Info, now);
        }
        assert_eq!(messages(&manager), ["first", "second", "third", "fourth"]);
    }

    #[test]
    fn saved_toast_is_removed_after_its_duration() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let handle = manager.notify_at("Saved", "success", start);

        let toast = manager.get(handle).expect("toast should be attached");
        assert_eq!(toast.kind(), Kind::Success);
        assert_eq!(manager.visible_count(), 1);

        let duration = manager.settings().success_duration;
        let exit = manager.settings().exit_transition;

        manager.tick(start + duration - Duration::from_millis(1));
        assert!(!manager.get(handle).unwrap().is_exiting());

        manager.tick(start + duration);
        assert!(manager.get(handle).unwrap().is_exiting());

        manager.tick(start + duration + exit);
        assert!(!manager.contains(handle));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn late_tick_removes_expired_toast_in_one_pass() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let handle = manager.notify_at("Saved", Kind::Success, start);

        manager.tick(start + Duration::from_secs(60));
        assert!(!manager.contains(handle));
    }

    #[test]
    fn dismiss_after_auto_removal_is_noop() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let gone = manager.notify_at("Saved", Kind::Success, start);
        let later = start + Duration::from_secs(10);
        let kept = manager.notify_at("Still here", Kind::Info, later);

        manager.tick(later);
        assert!(!manager.contains(gone));

        assert!(!manager.dismiss_at(gone, later));
        assert_eq!(manager.visible_count(), 1);
        assert!(manager.contains(kept));
    }

    #[test]
    fn dismiss_starts_exit_then_detaches() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let handle = manager.notify_at("Saved", Kind::Success, start);
        let exit = manager.settings().exit_transition;

        let at = start + Duration::from_millis(500);
        assert!(manager.dismiss_at(handle, at));
        assert!(manager.get(handle).unwrap().is_exiting());

        manager.tick(at + exit);
        assert!(!manager.contains(handle));
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let handle = manager.notify_at("Saved", Kind::Success, start);

        assert!(manager.dismiss_at(handle, start));
        assert!(!manager.dismiss_at(handle, start + Duration::from_millis(10)));
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn dismiss_then_expiry_does_not_restart_exit() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let handle = manager.notify_at("Saved", Kind::Success, start);
        let duration = manager.settings().success_duration;
        let exit = manager.settings().exit_transition;

        // Dismiss just before expiry; the expiry tick must not move `since`.
        let dismissed_at = start + duration - Duration::from_millis(50);
        manager.dismiss_at(handle, dismissed_at);
        manager.tick(start + duration);
        manager.tick(dismissed_at + exit);

        assert!(!manager.contains(handle));
    }

    #[test]
    fn zero_exit_transition_removes_on_dismiss() {
        let mut manager = Manager::with_settings(instant_exit());
        let start = Instant::now();
        let handle = manager.notify_at("Saved", Kind::Success, start);

        assert!(manager.dismiss_at(handle, start));
        assert!(!manager.contains(handle));
    }

    #[test]
    fn dismiss_unknown_handle_returns_false() {
        let mut manager = Manager::new();
        let mut other = Manager::new();
        other.notify("temp", Kind::Info);
        other.notify("temp", Kind::Info);
        let foreign = other.notify("temp", Kind::Info);

        assert!(!manager.dismiss(foreign));
    }

    #[test]
    fn a_stays_before_b_until_dismissed() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let a = manager.notify_at("A", Kind::Info, start);
        manager.notify_at("B", Kind::Info, start + Duration::from_millis(1));

        for ms in (0..3000).step_by(100) {
            manager.tick(start + Duration::from_millis(ms));
            assert_eq!(messages(&manager), ["A", "B"]);
        }

        manager.dismiss_at(a, start + Duration::from_millis(3000));
        // Exiting toasts keep their slot
        assert_eq!(messages(&manager), ["A", "B"]);
    }

    #[test]
    fn handles_are_unique() {
        let mut manager = Manager::new();
        let a = manager.notify("A", Kind::Info);
        let b = manager.notify("B", Kind::Info);
        manager.clear();
        let c = manager.notify("C", Kind::Info);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn unknown_kind_string_renders_as_info() {
        let mut manager = Manager::new();
        let handle = manager.notify("Heads up", "fatal");
        assert_eq!(manager.get(handle).unwrap().kind(), Kind::Info);
    }

    #[test]
    fn stacked_places_newest_nearest_anchor() {
        let now = Instant::now();

        let mut bottom = Manager::new();
        bottom.notify_at("old", Kind::Info, now);
        bottom.notify_at("new", Kind::Info, now);
        let order: Vec<_> = bottom.stacked().iter().map(|n| n.message()).collect();
        assert_eq!(order, ["old", "new"]);

        let mut top = Manager::with_settings(Settings {
            position: Position::TopRight,
            ..Settings::default()
        });
        top.notify_at("old", Kind::Info, now);
        top.notify_at("new", Kind::Info, now);
        let order: Vec<_> = top.stacked().iter().map(|n| n.message()).collect();
        assert_eq!(order, ["new", "old"]);
    }

    #[test]
    fn custom_duration_is_clamped() {
        let mut manager = Manager::new();
        let short = manager.notify_for("blink", Kind::Info, Duration::from_millis(10));
        let long = manager.notify_for("forever", Kind::Info, Duration::from_secs(3600));

        assert_eq!(
            manager.get(short).unwrap().display_duration(),
            Duration::from_millis(MIN_TOAST_DURATION_MS)
        );
        assert_eq!(
            manager.get(long).unwrap().display_duration(),
            Duration::from_millis(MAX_TOAST_DURATION_MS)
        );
    }

    #[test]
    fn kinds_use_configured_durations() {
        let settings = Settings::from_config(&NotificationsConfig {
            warning_duration_ms: 7000,
            ..NotificationsConfig::default()
        });
        let mut manager = Manager::with_settings(settings);
        let handle = manager.notify("careful", Kind::Warning);
        assert_eq!(
            manager.get(handle).unwrap().display_duration(),
            Duration::from_secs(7)
        );
    }

    #[test]
    fn opacity_reports_fade_in() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let handle = manager.notify_at("Saved", Kind::Success, start);

        assert_eq!(manager.opacity(handle, start), Some(0.0));
        let enter = manager.settings().enter_transition;
        manager.tick(start + enter);
        assert_eq!(manager.opacity(handle, start + enter), Some(1.0));
    }

    #[test]
    fn dismiss_during_fade_in_does_not_flash() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let handle = manager.notify_at("Saved", Kind::Success, start);

        let dismissed_at = start + Duration::from_millis(40);
        let before = manager.opacity(handle, dismissed_at).unwrap();
        assert!(manager.dismiss_at(handle, dismissed_at));
        let after = manager.opacity(handle, dismissed_at).unwrap();

        assert!(before < 0.5);
        assert!((after - before).abs() < 0.01);
    }

    #[test]
    fn enter_transition_always_ends_before_expiry() {
        let config = NotificationsConfig {
            success_duration_ms: MIN_TOAST_DURATION_MS,
            enter_transition_ms: 60_000,
            ..NotificationsConfig::default()
        };
        let settings = Settings::from_config(&config);
        assert!(settings.enter_transition < settings.duration_for(Kind::Success));
    }

    #[test]
    fn clear_removes_all_and_cancels_tokens() {
        let mut manager = Manager::new();
        let handle = manager.notify("A", Kind::Info);
        let token = manager.get(handle).unwrap().token();

        manager.clear();

        assert!(!manager.has_notifications());
        assert!(token.is_cancelled());
        assert!(!manager.dismiss(handle));
    }

    #[test]
    fn handle_message_dismiss_and_tick() {
        let mut manager = Manager::with_settings(instant_exit());
        let start = Instant::now();
        let a = manager.notify_at("A", Kind::Info, start);
        let b = manager.notify_at("B", Kind::Info, start);

        manager.handle_message(&Message::Dismiss(a));
        assert!(!manager.contains(a));

        manager.handle_message(&Message::Tick(start + Duration::from_secs(60)));
        assert!(!manager.contains(b));
    }

    #[test]
    fn warnings_and_errors_reach_diagnostics() {
        let mut collector = DiagnosticsCollector::with_raw_capacity(16);
        let mut manager = Manager::new();
        manager.set_diagnostics(collector.handle());

        manager.notify("fine", Kind::Success);
        manager.notify("careful", Kind::Warning);
        manager.notify("broken", Kind::Error);
        collector.process_pending();

        let kinds: Vec<_> = collector.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            [
                DiagnosticEventKind::Warning {
                    message: "careful".to_string()
                },
                DiagnosticEventKind::Error {
                    message: "broken".to_string()
                },
            ]
        );
    }
}
