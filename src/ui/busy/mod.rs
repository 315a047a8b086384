// SPDX-License-Identifier: MPL-2.0
//! Busy indicators for interactive controls.
//!
//! While an operation is pending (a sign-in request, a save), the control
//! that started it is disabled and relabeled. Completion restores the label
//! and enabled flag captured before the first `set_busy`.
//!
//! ```text
//!         set_busy            set_busy (ignored)
//!  Idle ───────────► Busy ◄──────────┐
//!   ▲                 │ └────────────┘
//!   └──── clear_busy ─┘
//! ```

mod control;
mod tracker;

pub use control::{Button, Control, ControlId, ControlRef};
pub use tracker::{BusyState, BusyTracker, ControlState, SPINNER_FRAMES, SPINNER_FRAME_DURATION};
