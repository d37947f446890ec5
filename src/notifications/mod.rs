// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Toasts appear temporarily to inform users
//! about actions (save success, errors, etc.) without blocking interaction,
//! and are queued so that exactly one is visible at a time.
//!
//! # Components
//!
//! - [`notification`] - Request types: content, severity, options, handles
//! - [`animation`] - The shared animation sheet and transition rule sets
//! - [`manager`] - The [`Controller`] owning the display slot and the queue
//! - [`toast`] - Toast widget component for rendering the active toast
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::{Controller, Message, ToastOptions};
//! use iced_toast::notifications::{subscription, Toast};
//!
//! // Keep a controller in your application state
//! let mut toasts = Controller::new();
//!
//! // Request a toast; it shows immediately or queues behind the active one
//! let handle = toasts.request("Image saved", ToastOptions::success());
//!
//! // In `subscription`: drive deadlines while toasts are alive
//! let ticks = subscription(toasts.has_toasts()).map(AppMessage::Toast);
//!
//! // In `update`: route toast messages back
//! toasts.handle_message(&message);
//!
//! // In `view`: stack the overlay over your content
//! let overlay = Toast::view_overlay(&toasts, std::time::Instant::now());
//! ```
//!
//! # Design Considerations
//!
//! - One toast visible at a time; later requests queue in arrival order
//! - Toast duration: ~3s for success/info, ~5s for warnings, manual dismiss
//!   for errors; an explicit zero duration pins the toast
//! - Queued requests cannot be cancelled before they are shown

mod animation;
mod manager;
mod notification;
mod toast;

pub use animation::{AnimationSheet, TransitionSet, TransitionStyle};
pub use manager::{subscription, Controller, Message, ToastPhase};
pub use notification::{
    Severity, ToastContent, ToastHandle, ToastId, ToastOptions, ToastRequest,
};
pub use toast::{Toast, ToastPosition};
