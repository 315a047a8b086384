// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between ticks driving toast expiry, fades and busy spinners.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates a periodic tick subscription while the page has anything that
/// changes over time.
pub fn create_tick_subscription(needs_ticks: bool) -> Subscription<Message> {
    if needs_ticks {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
