// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily in a screen corner to report the outcome
//! of an action (sign-in failed, availability saved, ...) without blocking
//! interaction.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, `Kind`, `Handle` and the cancellation token
//! - [`manager`] - `Manager` for ordering, timers and dismissal
//! - [`toast`] - Toast widget for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Kind, Manager};
//!
//! let mut manager = Manager::new();
//! let handle = manager.notify("Availability saved", Kind::Success);
//!
//! // On each timer tick
//! manager.tick(std::time::Instant::now());
//!
//! // Early dismissal; a second call is a no-op
//! manager.dismiss(handle);
//!
//! // In your view function
//! let toast_overlay = Toast::view_overlay(&manager).map(Message::Notification);
//! ```
//!
//! # Behavior
//!
//! - Durations: 3s for success/info, 5s for warnings and errors (configurable)
//! - Every toast fades in, stays, then fades out before being detached
//! - Toasts never move relative to each other once placed

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, Position, Settings};
pub use notification::{CancellationToken, Handle, Kind, Notification, Phase};
pub use toast::Toast;
