// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::backend::{RequestError, Session};
use super::screen::Role;
use crate::ui::notifications::NotificationMessage;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    RoleSelected(Role),
    SubmitLogin,
    /// Request results carry the generation of the page that started them.
    LoginFinished {
        generation: u64,
        result: Result<Session, RequestError>,
    },
    SaveAvailability,
    AvailabilitySaved {
        generation: u64,
    },
    Refresh,
    /// Number of free slots found by the refresh.
    Refreshed {
        generation: u64,
        count: usize,
    },
    SignOut,
    Notification(NotificationMessage),
    Tick(Instant), // Periodic tick for toast expiry and spinners
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `GAP2GROWTH_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
