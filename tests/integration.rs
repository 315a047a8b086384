// SPDX-License-Identifier: MPL-2.0
use gap2growth_ui::config::{self, Config};
use gap2growth_ui::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
use gap2growth_ui::i18n::fluent::I18n;
use gap2growth_ui::ui::busy::{BusyTracker, Button, Control, ControlId};
use gap2growth_ui::ui::notifications::{Kind, Manager, Position, Settings};
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn notification_settings_survive_a_config_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut initial = Config::default();
    initial.notifications.position = Position::TopRight;
    initial.notifications.error_duration_ms = 8_000;
    config::save_with_override(&initial, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let settings = Settings::from_config(&loaded.notifications);
    assert_eq!(settings.position, Position::TopRight);
    assert_eq!(settings.duration_for(Kind::Error), Duration::from_secs(8));
    assert_eq!(
        settings.duration_for(Kind::Success),
        Duration::from_millis(config::DEFAULT_SUCCESS_DURATION_MS)
    );
}

#[test]
fn broken_config_falls_back_to_defaults_with_warning_key() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[notifications\nposition = ")
        .expect("Failed to write broken config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    let key = warning.expect("warning key");
    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert!(!i18n.tr(&key).starts_with("MISSING"));
}

#[test]
fn toast_lifecycle_with_injected_clock() {
    let settings = Settings::default();
    let exit = settings.exit_transition;
    let mut manager = Manager::with_settings(settings);
    let start = Instant::now();

    let info = manager.notify_at("Profile updated", "info", start);
    let error = manager.notify_at("Server unreachable", Kind::Error, start);
    assert_eq!(manager.visible_count(), 2);

    // Info expires after 3 s, error after 5 s.
    let info_expiry = manager.get(info).expect("info").expires_at();
    manager.tick(info_expiry + exit);
    assert!(!manager.contains(info));
    assert!(manager.contains(error));

    let dismissed_at = info_expiry + exit;
    assert!(manager.dismiss_at(error, dismissed_at));
    assert!(!manager.dismiss_at(error, dismissed_at));
    assert!(manager.get(error).expect("exiting").is_exiting());

    manager.tick(dismissed_at + exit);
    assert!(!manager.has_notifications());
}

#[test]
fn dismissed_toast_never_expires_afterwards() {
    let mut manager = Manager::new();
    let start = Instant::now();
    let handle = manager.notify_at("Saved", Kind::Success, start);
    let token = manager.get(handle).expect("attached").token();

    assert!(manager.dismiss(handle));
    assert!(token.is_cancelled());
    assert!(!token.cancel());

    manager.tick(start + Duration::from_secs(60));
    assert!(!manager.contains(handle));
}

#[test]
fn busy_tracker_restores_exactly_once() {
    let mut tracker = BusyTracker::new();
    let mut save = Button::new("save", "Save");
    let id = ControlId::new("save");

    tracker.set_busy(Some(&mut save), "Saving...");
    tracker.set_busy(Some(&mut save), "Still saving...");
    assert_eq!(save.label(), "Saving...");
    assert!(!save.is_enabled());

    tracker.clear_busy(Some(&mut save));
    assert_eq!(save.label(), "Save");
    assert!(save.is_enabled());
    assert!(!tracker.is_busy(&id));

    tracker.clear_busy(Some(&mut save));
    tracker.set_busy(None, "Ghost");
    assert_eq!(save.label(), "Save");
    assert_eq!(tracker.busy_count(), 0);
}

#[test]
fn disabled_button_stays_disabled_after_busy() {
    let mut tracker = BusyTracker::new();
    let mut button = Button::new("publish", "Publish").disabled();

    tracker.set_busy(Some(&mut button), "Publishing...");
    tracker.clear_busy(Some(&mut button));

    assert!(!button.is_enabled());
    assert_eq!(button.label(), "Publish");
}

#[test]
fn warnings_and_errors_reach_diagnostics() {
    let mut collector = DiagnosticsCollector::with_raw_capacity(32);
    let mut manager = Manager::new();
    manager.set_diagnostics(collector.handle());

    manager.notify("All good", Kind::Success);
    manager.notify("Slow network", Kind::Warning);
    manager.notify("Request failed", Kind::Error);
    collector.process_pending();

    assert_eq!(collector.problem_count(), 2);
    assert!(collector.iter().any(|event| event.kind
        == DiagnosticEventKind::Error {
            message: "Request failed".to_string()
        }));
}
