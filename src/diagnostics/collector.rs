// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing lifecycle events.
//!
//! The collector receives events from a controller through a bounded channel
//! and stores them in a circular buffer. The sending side never blocks the
//! UI thread: when the channel is full the event is dropped.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::{BufferCapacity, CircularBuffer, ToastEvent, ToastEventKind};

/// Size of the channel between handles and the collector.
const EVENT_CHANNEL_SIZE: usize = 256;

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone and can be shared freely.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<ToastEvent>,
}

impl DiagnosticsHandle {
    /// Logs a lifecycle event.
    ///
    /// Non-blocking; the event is dropped if the channel is full
    /// (backpressure protection).
    pub fn log(&self, kind: ToastEventKind) {
        let _ = self.event_tx.try_send(ToastEvent::new(kind));
    }
}

/// Receives lifecycle events and stores them in a bounded buffer.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    event_rx: Receiver<ToastEvent>,
    buffer: CircularBuffer<ToastEvent>,
}

impl DiagnosticsCollector {
    /// Creates a collector and the handle that feeds it.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> (Self, DiagnosticsHandle) {
        let (event_tx, event_rx) = bounded(EVENT_CHANNEL_SIZE);
        (
            Self {
                event_rx,
                buffer: CircularBuffer::new(capacity),
            },
            DiagnosticsHandle { event_tx },
        )
    }

    /// Moves all pending events from the channel into the buffer.
    pub fn drain(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Returns the buffered events in chronological order (oldest first).
    pub fn events(&self) -> impl Iterator<Item = &ToastEvent> {
        self.buffer.iter()
    }

    /// Returns the number of buffered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no events have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Clears all buffered events.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
