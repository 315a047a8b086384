// SPDX-License-Identifier: MPL-2.0
//! Local stand-in for the scheduling service.
//!
//! Every request sleeps for the configured latency so the busy indicators
//! and toasts behave as they would against the real API.

use super::screen::Role;
use std::time::Duration;

/// Default simulated round-trip time.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

/// Minimum password length accepted by the sign-in endpoint.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    InvalidCredentials,
}

impl RequestError {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            RequestError::InvalidCredentials => "notification-invalid-credentials",
        }
    }
}

pub async fn sign_in(
    email: String,
    password: String,
    role: Role,
    latency: Duration,
) -> Result<Session, RequestError> {
    tokio::time::sleep(latency).await;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(RequestError::InvalidCredentials);
    }
    Ok(Session { email, role })
}

pub async fn save_availability(latency: Duration) {
    tokio::time::sleep(latency).await;
}

/// Returns the number of free slots detected for today.
pub async fn refresh_free_slots(role: Role, latency: Duration) -> usize {
    tokio::time::sleep(latency).await;
    match role {
        Role::Student => 3,
        Role::Teacher => 2,
        Role::Admin => 0,
    }
}
