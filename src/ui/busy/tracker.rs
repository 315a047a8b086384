// SPDX-License-Identifier: MPL-2.0
//! Busy-state bookkeeping for interactive controls.
//!
//! The tracker keeps the pre-busy label and enabled flag of every busy
//! control in its own table, keyed by control identity. Nothing is stashed
//! on the control itself.

use super::control::{Control, ControlId, ControlRef};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Frames of the busy spinner shown ahead of the transient label.
pub const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Time each spinner frame stays on screen.
pub const SPINNER_FRAME_DURATION: Duration = Duration::from_millis(120);

/// Observable state of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    Idle,
    Busy,
}

/// Saved pre-busy state of one control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusyState {
    original_label: String,
    original_enabled: bool,
    current_label: String,
    since: Instant,
}

impl BusyState {
    #[must_use]
    pub fn original_label(&self) -> &str {
        &self.original_label
    }

    #[must_use]
    pub fn original_enabled(&self) -> bool {
        self.original_enabled
    }

    #[must_use]
    pub fn current_label(&self) -> &str {
        &self.current_label
    }

    #[must_use]
    pub fn since(&self) -> Instant {
        self.since
    }
}

#[derive(Debug, Default)]
pub struct BusyTracker {
    states: HashMap<ControlId, BusyState>,
}

impl BusyTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Disables the control and shows `label` on it.
    ///
    /// The first call saves the control's label and enabled flag. While the
    /// control stays busy, further calls are ignored so the saved state is
    /// never overwritten. A missing control is a no-op.
    pub fn set_busy(&mut self, control: ControlRef<'_>, label: impl Into<String>) {
        let Some(control) = control else {
            log::debug!("set_busy on a control absent from this page, ignoring");
            return;
        };
        let id = control.id();
        if self.states.contains_key(&id) {
            log::trace!("control {id} already busy");
            return;
        }

        let label = label.into();
        let state = BusyState {
            original_label: control.label().to_string(),
            original_enabled: control.is_enabled(),
            current_label: label.clone(),
            since: Instant::now(),
        };
        control.set_enabled(false);
        control.set_label(label);
        log::debug!("control {id} busy: {:?}", state.current_label);
        self.states.insert(id, state);
    }

    /// Restores the label and enabled flag saved by the first `set_busy`.
    ///
    /// No-op when the control is missing or not busy.
    pub fn clear_busy(&mut self, control: ControlRef<'_>) {
        let Some(control) = control else {
            log::debug!("clear_busy on a control absent from this page, ignoring");
            return;
        };
        let id = control.id();
        let Some(state) = self.states.remove(&id) else {
            return;
        };
        restore(control, state);
        log::debug!("control {id} idle");
    }

    #[must_use]
    pub fn is_busy(&self, id: &ControlId) -> bool {
        self.states.contains_key(id)
    }

    #[must_use]
    pub fn state(&self, id: &ControlId) -> ControlState {
        if self.is_busy(id) {
            ControlState::Busy
        } else {
            ControlState::Idle
        }
    }

    #[must_use]
    pub fn busy_state(&self, id: &ControlId) -> Option<&BusyState> {
        self.states.get(id)
    }

    #[must_use]
    pub fn busy_count(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn any_busy(&self) -> bool {
        !self.states.is_empty()
    }

    /// Spinner frame for a busy control, `None` when idle.
    #[must_use]
    pub fn spinner(&self, id: &ControlId, now: Instant) -> Option<&'static str> {
        self.states.get(id).map(|state| {
            let elapsed = now.saturating_duration_since(state.since);
            let index = (elapsed.as_millis() / SPINNER_FRAME_DURATION.as_millis()) as usize;
            SPINNER_FRAMES[index % SPINNER_FRAMES.len()]
        })
    }

    /// Restores every tracked control found in `controls` and forgets all
    /// saved state (page teardown).
    pub fn clear_all<'a>(&mut self, controls: impl IntoIterator<Item = &'a mut dyn Control>) {
        for control in controls {
            if let Some(state) = self.states.remove(&control.id()) {
                restore(control, state);
            }
        }
        if !self.states.is_empty() {
            log::debug!(
                "dropping busy state of {} controls no longer on the page",
                self.states.len()
            );
            self.states.clear();
        }
    }
}

fn restore(control: &mut dyn Control, state: BusyState) {
    control.set_label(state.original_label);
    control.set_enabled(state.original_enabled);
}
