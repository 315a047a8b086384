// SPDX-License-Identifier: MPL-2.0
//! Per-screen state: a notification manager, a busy tracker and the buttons
//! they act on.
//!
//! A page lives exactly as long as its screen. `App` calls
//! [`Page::teardown`] before replacing it, which cancels every pending toast
//! and restores every busy button.

use crate::diagnostics::DiagnosticsHandle;
use crate::i18n::fluent::I18n;
use crate::ui::busy::{BusyTracker, Button, Control, ControlId};
use crate::ui::notifications::{Handle, Kind, Manager, NotificationMessage, Settings};
use std::time::Instant;

pub const LOGIN_SUBMIT: &str = "login-submit";
pub const SAVE_AVAILABILITY: &str = "save-availability";
pub const REFRESH: &str = "refresh";
pub const SIGN_OUT: &str = "sign-out";

#[derive(Debug)]
pub struct Page {
    notifications: Manager,
    busy: BusyTracker,
    buttons: Vec<Button>,
}

impl Page {
    pub fn new(
        settings: Settings,
        diagnostics: Option<DiagnosticsHandle>,
        buttons: Vec<Button>,
    ) -> Self {
        let mut notifications = Manager::with_settings(settings);
        if let Some(handle) = diagnostics {
            notifications.set_diagnostics(handle);
        }
        Self {
            notifications,
            busy: BusyTracker::new(),
            buttons,
        }
    }

    pub fn login(i18n: &I18n, settings: Settings, diagnostics: Option<DiagnosticsHandle>) -> Self {
        Self::new(
            settings,
            diagnostics,
            vec![Button::new(LOGIN_SUBMIT, i18n.tr("login-submit"))],
        )
    }

    pub fn dashboard(
        i18n: &I18n,
        settings: Settings,
        diagnostics: Option<DiagnosticsHandle>,
    ) -> Self {
        Self::new(
            settings,
            diagnostics,
            vec![
                Button::new(SAVE_AVAILABILITY, i18n.tr("dashboard-save")),
                Button::new(REFRESH, i18n.tr("dashboard-refresh")),
                Button::new(SIGN_OUT, i18n.tr("dashboard-sign-out")),
            ],
        )
    }

    #[must_use]
    pub fn button(&self, id: &ControlId) -> Option<&Button> {
        self.buttons.iter().find(|button| button.id() == *id)
    }

    pub fn set_busy(&mut self, id: &ControlId, label: impl Into<String>) {
        let control = self
            .buttons
            .iter_mut()
            .find(|button| button.id() == *id)
            .map(|button| button as &mut dyn Control);
        self.busy.set_busy(control, label);
    }

    pub fn clear_busy(&mut self, id: &ControlId) {
        let control = self
            .buttons
            .iter_mut()
            .find(|button| button.id() == *id)
            .map(|button| button as &mut dyn Control);
        self.busy.clear_busy(control);
    }

    #[must_use]
    pub fn is_busy(&self, id: &ControlId) -> bool {
        self.busy.is_busy(id)
    }

    #[must_use]
    pub fn spinner(&self, id: &ControlId, now: Instant) -> Option<&'static str> {
        self.busy.spinner(id, now)
    }

    #[must_use]
    pub fn busy(&self) -> &BusyTracker {
        &self.busy
    }

    #[must_use]
    pub fn notifications(&self) -> &Manager {
        &self.notifications
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: impl Into<Kind>) -> Handle {
        self.notifications.notify(message, kind)
    }

    pub fn handle_notification(&mut self, message: &NotificationMessage) {
        self.notifications.handle_message(message);
    }

    pub fn tick(&mut self, now: Instant) {
        self.notifications.tick(now);
    }

    /// Whether something on the page animates or expires over time.
    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        self.notifications.has_notifications() || self.busy.any_busy()
    }

    /// Cancels pending toasts and restores busy buttons.
    pub fn teardown(&mut self) {
        self.notifications.clear();
        self.busy
            .clear_all(self.buttons.iter_mut().map(|button| button as &mut dyn Control));
    }
}
