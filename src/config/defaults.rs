// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Toast durations**: How long each notification kind stays on screen
//! - **Transitions**: Entrance and exit animation lengths
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Toast Duration Defaults
// ==========================================================================

/// Display duration for success toasts (milliseconds).
pub const DEFAULT_SUCCESS_DURATION_MS: u64 = 3000;

/// Display duration for info toasts (milliseconds).
pub const DEFAULT_INFO_DURATION_MS: u64 = 3000;

/// Display duration for warning toasts (milliseconds).
pub const DEFAULT_WARNING_DURATION_MS: u64 = 5000;

/// Display duration for error toasts (milliseconds).
pub const DEFAULT_ERROR_DURATION_MS: u64 = 5000;

/// Shortest display duration accepted from config or callers.
pub const MIN_TOAST_DURATION_MS: u64 = 1000;

/// Longest display duration accepted from config or callers.
pub const MAX_TOAST_DURATION_MS: u64 = 30_000;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Entrance (fade-in) transition length in milliseconds.
pub const DEFAULT_ENTER_TRANSITION_MS: u64 = 200;

/// Exit (fade-out) transition length in milliseconds.
pub const DEFAULT_EXIT_TRANSITION_MS: u64 = 300;

/// Upper bound for the exit transition.
pub const MAX_TRANSITION_MS: u64 = 2000;

/// Upper bound for the entrance transition: half the shortest display
/// duration, so a toast is fully shown before it can expire.
pub const MAX_ENTER_TRANSITION_MS: u64 = MIN_TOAST_DURATION_MS / 2;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events retained in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_defaults_are_within_bounds() {
        for duration in [
            DEFAULT_SUCCESS_DURATION_MS,
            DEFAULT_INFO_DURATION_MS,
            DEFAULT_WARNING_DURATION_MS,
            DEFAULT_ERROR_DURATION_MS,
        ] {
            assert!((MIN_TOAST_DURATION_MS..=MAX_TOAST_DURATION_MS).contains(&duration));
        }
    }

    #[test]
    fn transitions_are_shorter_than_shortest_toast() {
        assert!(DEFAULT_ENTER_TRANSITION_MS + DEFAULT_EXIT_TRANSITION_MS < MIN_TOAST_DURATION_MS);
    }

    #[test]
    fn diagnostics_default_is_within_bounds() {
        assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
        assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
    }
}
