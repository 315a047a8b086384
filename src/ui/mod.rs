// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! - [`notifications`] - Toast notification system for user feedback
//! - [`busy`] - Busy-state tracking for buttons running an operation
//! - [`styles`] - Centralized styling (buttons)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod busy;
pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod theming;
