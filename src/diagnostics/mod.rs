// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for observing toast lifecycle activity.
//!
//! This module provides infrastructure for capturing lifecycle events from a
//! controller and storing them in a memory-bounded circular buffer, for
//! debugging and for asserting lifecycle invariants in tests.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`ToastEvent`]: Timestamped lifecycle event
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: channel-backed
//!   collector pair; the handle is cheap to clone and never blocks

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{ToastEvent, ToastEventKind};
