// SPDX-License-Identifier: MPL-2.0
//! `gap2growth_ui` is the Iced desktop client of the Gap2Growth scheduling
//! service.
//!
//! Beyond the sign-in screen and role dashboards it provides two reusable
//! pieces of user feedback:
//!
//! - [`ui::notifications`]: transient toasts with auto-expiry, manual
//!   dismissal and entrance/exit transitions
//! - [`ui::busy`]: a tracker that disables a control and swaps its label
//!   while an operation runs, then restores it exactly

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod ui;
