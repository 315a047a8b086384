// SPDX-License-Identifier: MPL-2.0
//! In-memory diagnostics.
//!
//! Warning and error toasts, user actions and page changes are captured as
//! [`DiagnosticEvent`]s and kept in a memory-bounded circular buffer. Every
//! drained event is also mirrored to the `log` facade.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticsCollector`]: Owns the buffer, drains the channel
//! - [`DiagnosticsHandle`]: Cloneable, non-blocking producer side

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, UserAction};
