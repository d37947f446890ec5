// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The [`Controller`] owns the single display slot, the FIFO queue of
//! pending requests, and the deadlines driving the show → visible → hide →
//! destroy transitions. All mutable state lives on the controller value;
//! independent controllers (one per test, per window) never interfere.
//!
//! Transitions are deadline-driven: the controller is ticked — every 100 ms
//! through [`subscription`] in applications, or explicitly through
//! [`Controller::tick_at`] in tests — and processes every deadline that has
//! elapsed. At most one deadline is armed per slot at any instant; arming
//! overwrites the previous one, so a toast can never be hidden twice.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use iced::time;
use iced::Subscription;

use crate::config::Settings;
use crate::diagnostics::{DiagnosticsHandle, ToastEventKind};

use super::animation::{AnimationSheet, TransitionStyle};
use super::notification::{ToastContent, ToastHandle, ToastId, ToastOptions, ToastRequest};

/// How often the tick subscription fires while toasts are active.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Messages for toast state changes.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// Advance deadline processing to the given instant.
    Tick(Instant),
}

/// Where the active toast is in its lifecycle.
///
/// An empty display slot has no phase; see [`Controller::phase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Entry transition running.
    Showing,
    /// Settled; the auto-hide deadline is armed unless the toast is
    /// persistent.
    Visible,
    /// Exit transition running.
    Hiding,
}

/// The occupied display slot.
#[derive(Debug, Clone)]
struct ActiveToast {
    request: ToastRequest,
    phase: ToastPhase,
    phase_started: Instant,
    /// The single pending deadline for this slot, or `None` while a
    /// persistent toast sits in [`ToastPhase::Visible`].
    deadline: Option<Instant>,
}

/// Owns the display slot, the queue, and the shared animation sheet.
#[derive(Debug, Default)]
pub struct Controller {
    settings: Settings,
    active: Option<ActiveToast>,
    queue: VecDeque<ToastRequest>,
    sheet: Option<AnimationSheet>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Controller {
    /// Creates a controller with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller with explicit settings.
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Attaches a diagnostics handle; lifecycle events are logged to it.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Requests a toast.
    ///
    /// If the display slot is free the toast starts showing immediately;
    /// otherwise the request joins the queue and is shown, in arrival order,
    /// once every earlier toast has finished. The returned handle dismisses
    /// the toast once it is active; see [`ToastHandle`].
    pub fn request(
        &mut self,
        content: impl Into<ToastContent>,
        options: ToastOptions,
    ) -> ToastHandle {
        self.request_at(content, options, Instant::now())
    }

    /// Deterministic variant of [`Controller::request`] with an explicit
    /// current instant.
    pub fn request_at(
        &mut self,
        content: impl Into<ToastContent>,
        options: ToastOptions,
        now: Instant,
    ) -> ToastHandle {
        let request = ToastRequest::build(content.into(), options, &self.settings);
        let handle = request.handle();
        self.log(ToastEventKind::Requested { id: request.id() });

        if self.active.is_some() {
            self.log(ToastEventKind::Queued {
                id: request.id(),
                depth: self.queue.len() + 1,
            });
            self.queue.push_back(request);
        } else {
            self.activate(request, now);
        }
        handle
    }

    /// Dismisses the toast named by the handle, if it is the active one.
    ///
    /// Hiding a queued or already-gone toast is a silent no-op.
    pub fn hide(&mut self, handle: &ToastHandle) {
        self.dismiss(handle.id());
    }

    /// Deterministic variant of [`Controller::hide`].
    pub fn hide_at(&mut self, handle: &ToastHandle, now: Instant) {
        self.dismiss_at(handle.id(), now);
    }

    /// Dismisses the active toast by ID. No-op for any other ID.
    pub fn dismiss(&mut self, id: ToastId) {
        self.dismiss_at(id, Instant::now());
    }

    /// Deterministic variant of [`Controller::dismiss`].
    pub fn dismiss_at(&mut self, id: ToastId, now: Instant) {
        let speed = self.animation_speed();
        match &mut self.active {
            Some(active) if active.request.id() == id && active.phase != ToastPhase::Hiding => {
                // Entering Hiding overwrites any armed auto-hide deadline.
                active.phase = ToastPhase::Hiding;
                active.phase_started = now;
                active.deadline = Some(now + speed);
            }
            _ => return,
        }
        self.log(ToastEventKind::Dismissed { id });
    }

    /// Processes every deadline that has elapsed by `now`.
    ///
    /// A late tick carries the active toast through as many phases as its
    /// deadlines allow and drains queued requests as slots free up. The
    /// drain is iterative; queue length never grows the call stack.
    pub fn tick_at(&mut self, now: Instant) {
        loop {
            let speed = self.animation_speed();
            let Some(active) = self.active.as_mut() else {
                break;
            };
            let Some(deadline) = active.deadline else {
                break; // persistent toast, nothing armed
            };
            if now < deadline {
                break;
            }
            let id = active.request.id();

            match active.phase {
                ToastPhase::Showing => {
                    active.phase = ToastPhase::Visible;
                    active.phase_started = deadline;
                    active.deadline = active.request.duration().map(|d| deadline + d);
                }
                ToastPhase::Visible => {
                    active.phase = ToastPhase::Hiding;
                    active.phase_started = deadline;
                    active.deadline = Some(deadline + speed);
                    self.log(ToastEventKind::Expired { id });
                }
                ToastPhase::Hiding => {
                    self.active = None;
                    self.log(ToastEventKind::Destroyed { id });
                    // Chain straight into the next request; the slot is
                    // never observably empty between queued toasts.
                    if let Some(next) = self.queue.pop_front() {
                        self.activate(next, deadline);
                    }
                }
            }
        }
    }

    /// Processes deadlines against the current instant.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => self.dismiss(*id),
            Message::Tick(now) => self.tick_at(*now),
        }
    }

    /// The active request, if the display slot is occupied.
    #[must_use]
    pub fn active(&self) -> Option<&ToastRequest> {
        self.active.as_ref().map(|active| &active.request)
    }

    /// The active toast's phase, or `None` for an empty slot.
    #[must_use]
    pub fn phase(&self) -> Option<ToastPhase> {
        self.active.as_ref().map(|active| active.phase)
    }

    /// The number of queued (not yet shown) requests.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether any toast is active or queued.
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        self.active.is_some() || !self.queue.is_empty()
    }

    /// The shared animation sheet, once installed.
    #[must_use]
    pub fn sheet(&self) -> Option<&AnimationSheet> {
        self.sheet.as_ref()
    }

    /// The controller settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The active toast's interpolated transition state at `now`.
    #[must_use]
    pub fn transition_at(&self, now: Instant) -> Option<TransitionStyle> {
        let active = self.active.as_ref()?;
        let sheet = self.sheet?;
        let entry_from = active.request.transitions().map_or(sheet.gone, |t| t.entry);
        let exit_to = active.request.transitions().map_or(sheet.gone, |t| t.exit);
        let t = sheet.progress(active.phase_started, now);

        Some(match active.phase {
            ToastPhase::Showing => TransitionStyle::lerp(entry_from, sheet.visible, t),
            ToastPhase::Visible => sheet.visible,
            ToastPhase::Hiding => TransitionStyle::lerp(sheet.visible, exit_to, t),
        })
    }

    /// Drops the active toast and every queued request, without transitions.
    pub fn clear(&mut self) {
        self.active = None;
        self.queue.clear();
    }

    /// Shows a request in the free display slot.
    fn activate(&mut self, request: ToastRequest, now: Instant) {
        let speed = self.ensure_sheet();
        let id = request.id();
        self.active = Some(ActiveToast {
            request,
            phase: ToastPhase::Showing,
            phase_started: now,
            deadline: Some(now + speed),
        });
        self.log(ToastEventKind::Shown { id });
    }

    /// Installs the shared animation sheet on first use.
    fn ensure_sheet(&mut self) -> Duration {
        if self.sheet.is_none() {
            self.sheet = Some(AnimationSheet::new(self.settings.effective_animation()));
            self.log(ToastEventKind::SheetInstalled);
        }
        self.animation_speed()
    }

    fn animation_speed(&self) -> Duration {
        self.sheet
            .map_or_else(|| self.settings.effective_animation(), |sheet| sheet.speed)
    }

    fn log(&self, kind: ToastEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }
}

/// Creates the periodic tick subscription driving toast deadlines.
///
/// Active only while toasts exist, so an idle application schedules nothing.
#[must_use]
pub fn subscription(has_toasts: bool) -> Subscription<Message> {
    if has_toasts {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
