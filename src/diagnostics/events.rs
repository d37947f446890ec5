// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for toast lifecycle tracking.

use std::time::Instant;

use crate::notifications::ToastId;

/// What happened to a toast (or to the controller's shared state).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastEventKind {
    /// A toast was requested by a caller.
    Requested { id: ToastId },
    /// The display slot was occupied; the request joined the queue.
    Queued {
        id: ToastId,
        /// Queue length after insertion.
        depth: usize,
    },
    /// The toast entered the display slot and began its entry transition.
    Shown { id: ToastId },
    /// The auto-hide deadline elapsed and the exit transition began.
    Expired { id: ToastId },
    /// The toast was dismissed explicitly and the exit transition began.
    Dismissed { id: ToastId },
    /// The exit transition completed and the toast left the document.
    Destroyed { id: ToastId },
    /// The shared animation sheet was installed. Emitted at most once per
    /// controller.
    SheetInstalled,
}

/// A diagnostic event with its capture time.
#[derive(Debug, Clone, Copy)]
pub struct ToastEvent {
    pub kind: ToastEventKind,
    /// When the event occurred (monotonic).
    pub at: Instant,
}

impl ToastEvent {
    /// Creates an event stamped with the current instant.
    #[must_use]
    pub fn new(kind: ToastEventKind) -> Self {
        Self {
            kind,
            at: Instant::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_carry_monotonic_timestamps() {
        let id = ToastId::new();
        let first = ToastEvent::new(ToastEventKind::Requested { id });
        let second = ToastEvent::new(ToastEventKind::Shown { id });
        assert!(second.at >= first.at);
    }
}
