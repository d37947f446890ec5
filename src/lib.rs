// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` provides transient toast notifications for the Iced GUI framework.
//!
//! Toasts are short-lived message cards layered over application content. The
//! crate queues requests so that exactly one toast is visible at a time,
//! animates it in and out, and drains pending requests in arrival order. It
//! demonstrates deadline-driven animation phases, recursive style merging,
//! and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.2.0")]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod notifications;
pub mod style;
pub mod ui;

pub use notifications::{
    Controller, Message, Severity, ToastContent, ToastHandle, ToastId, ToastOptions,
};
pub use style::{merge, StyleMap, StyleValue};
