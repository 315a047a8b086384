// SPDX-License-Identifier: MPL-2.0
//! Interactive controls that can be put into a busy state.

use std::fmt;

/// Identity of an interactive control on a page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(String);

impl ControlId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ControlId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The slice of a control's state the busy tracker reads and writes.
pub trait Control {
    fn id(&self) -> ControlId;
    fn label(&self) -> &str;
    fn set_label(&mut self, label: String);
    fn is_enabled(&self) -> bool;
    fn set_enabled(&mut self, enabled: bool);
}

/// Reference to a control that may be missing from the current page.
pub type ControlRef<'a> = Option<&'a mut dyn Control>;

/// A push button as rendered by the application views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    id: ControlId,
    label: String,
    enabled: bool,
}

impl Button {
    pub fn new(id: impl Into<ControlId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            enabled: true,
        }
    }

    /// Builder variant starting disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

impl Control for Button {
    fn id(&self) -> ControlId {
        self.id.clone()
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn set_label(&mut self, label: String) {
        self.label = label;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
