// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded from `assets/i18n/`.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, then system settings
//! - Argument interpolation for toast messages
//! - `MISSING: key` marker when a translation is absent

pub mod fluent;
