// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! Producers hold a cloneable [`DiagnosticsHandle`]; the collector drains
//! the channel into its circular buffer on each UI tick.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, UserAction};

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Handle for sending diagnostic events to the collector.
///
/// Sends never block: when the channel is full the event is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_warning(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }

    pub fn log_error(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Error {
            message: message.into(),
        });
    }

    pub fn log_action(&self, action: UserAction) {
        self.send(DiagnosticEventKind::UserAction { action });
    }

    pub fn log_navigation(&self, from: impl Into<String>, to: impl Into<String>) {
        self.send(DiagnosticEventKind::Navigation {
            from: from.into(),
            to: to.into(),
        });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        if self.event_tx.try_send(DiagnosticEvent::new(kind)).is_err() {
            log::trace!("diagnostics channel full, event dropped");
        }
    }
}

/// Central collector that stores events in a circular buffer.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    /// Sender stored to create handles.
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::from_buffer(CircularBuffer::new(capacity))
    }

    /// Creates a collector with an unchecked buffer capacity (for tests).
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        Self::from_buffer(CircularBuffer::with_raw_capacity(capacity))
    }

    fn from_buffer(buffer: CircularBuffer<DiagnosticEvent>) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);
        Self {
            buffer,
            event_rx,
            event_tx,
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains pending events into the buffer, mirroring problems to the log.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match &event.kind {
                DiagnosticEventKind::Warning { message } => log::warn!("{message}"),
                DiagnosticEventKind::Error { message } => log::error!("{message}"),
                DiagnosticEventKind::UserAction { action } => log::info!("action: {action:?}"),
                DiagnosticEventKind::Navigation { from, to } => {
                    log::info!("navigation: {from} -> {to}");
                }
            }
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Number of warnings and errors currently buffered.
    #[must_use]
    pub fn problem_count(&self) -> usize {
        self.buffer.iter().filter(|e| e.is_problem()).count()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish()
    }
}
